use dotenvy::dotenv;
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::{TraceLayer, DefaultMakeSpan, DefaultOnResponse};
use tracing::Level;
use tracing_subscriber::EnvFilter;
use std::sync::Arc;
use anyhow::Context;

mod config;
mod error;
mod handlers {
    pub mod contact_handlers;
}
mod models {
    pub mod contact_models;
}
mod repositories {
    pub mod contact_repository;
}
mod schema;

use config::Config;
use handlers::contact_handlers;
use repositories::contact_repository::ContactRepository;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

type DbPool = r2d2::Pool<ConnectionManager<SqliteConnection>>;

async fn health_check() -> &'static str {
    "OK"
}

pub struct AppState {
    /// `None` when DATABASE_URL is not configured.
    contact_repository: Option<Arc<ContactRepository>>,
}

fn init_pool(database_url: &str) -> anyhow::Result<DbPool> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let pool = r2d2::Pool::builder()
        .build(manager)
        .context("Failed to create pool")?;

    let mut conn = pool.get().context("Failed to get DB connection")?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| anyhow::anyhow!("Failed to run migrations: {}", e))?;
    for version in applied {
        tracing::info!("Applied migration {}", version);
    }
    Ok(pool)
}

fn cors_layer(frontend_url: Option<&str>) -> anyhow::Result<CorsLayer> {
    let origin = match frontend_url {
        Some(url) => AllowOrigin::exact(
            HeaderValue::from_str(url).with_context(|| format!("FRONTEND_URL '{}' is not a valid origin", url))?,
        ),
        None => AllowOrigin::from(Any),
    };
    Ok(CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_origin(origin)
        .allow_headers([header::CONTENT_TYPE])
        .expose_headers([header::CONTENT_TYPE]))
}

fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/contact", post(contact_handlers::submit_contact))
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let config = Config::from_env()?;

    let _guard = config.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((dsn, sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: Some(config.environment.clone().into()),
            debug: config.is_development(),
            ..Default::default()
        }))
    });

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let contact_repository = match config.database_url.as_deref() {
        Some(url) => Some(Arc::new(ContactRepository::new(init_pool(url)?))),
        None => {
            tracing::warn!("DATABASE_URL is not set; contact submissions will be refused");
            None
        }
    };

    let state = Arc::new(AppState { contact_repository });

    let app = build_router(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
        )
        .layer(cors_layer(config.frontend_url.as_deref())?);

    use tokio::net::TcpListener;

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    tracing::info!("Listening on {} ({})", config.bind_addr, config.environment);
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn health_check_answers_ok() {
        let app = build_router(Arc::new(AppState { contact_repository: None }));
        let response = app
            .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), 1024).await.unwrap();
        assert_eq!(&body[..], b"OK");
    }

    #[test]
    fn cors_rejects_invalid_origin() {
        assert!(cors_layer(Some("https://example.com")).is_ok());
        assert!(cors_layer(Some("bad\norigin")).is_err());
    }

    #[test]
    fn file_database_gets_migrated() {
        let path = std::env::temp_dir().join(format!("contact-test-{}.db", std::process::id()));
        let pool = init_pool(path.to_str().unwrap()).unwrap();
        let repository = ContactRepository::new(pool);
        assert_eq!(repository.count_by_email("a@b.co").unwrap(), 0);
        let _ = std::fs::remove_file(path);
    }
}
