use std::sync::Arc;
use axum::{
    body::Bytes,
    extract::State,
    http::{header::USER_AGENT, HeaderMap},
    Json,
};
use chrono::Utc;
use shared::{ContactResponse, ContactSubmission};

use crate::{
    error::ContactError,
    models::contact_models::NewContactSubmission,
    AppState,
};

pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<ContactResponse>, ContactError> {
    // content type is not checked; beacons post JSON as text/plain
    let payload: ContactSubmission = serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!("Rejected contact payload: {}", e);
        ContactError::InvalidPayload
    })?;

    let contact = payload.validate()?;

    let repository = state
        .contact_repository
        .clone()
        .ok_or(ContactError::NotConfigured)?;

    let user_agent = headers
        .get(USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let new_submission =
        NewContactSubmission::from_validated(contact, user_agent, Utc::now().timestamp() as i32);

    let (stored, total_from_sender) = tokio::task::spawn_blocking(move || {
        let stored = repository.create_submission(&new_submission)?;
        let total = repository.count_by_email(&stored.work_email)?;
        Ok::<_, ContactError>((stored, total))
    })
    .await??;

    tracing::info!(
        submission_id = stored.id,
        challenge = %stored.challenge,
        locale = ?stored.locale,
        total_from_sender,
        "Contact submission stored"
    );

    Ok(Json(ContactResponse::new("Submission received.")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::contact_models::ContactSubmission as StoredSubmission;
    use crate::repositories::contact_repository::{tests::memory_pool, ContactRepository};
    use crate::schema::contact_submissions;
    use crate::DbPool;
    use diesel::prelude::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        routing::post,
        Router,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app(repository: Option<Arc<ContactRepository>>) -> Router {
        let state = Arc::new(AppState { contact_repository: repository });
        Router::new()
            .route("/api/contact", post(submit_contact))
            .with_state(state)
    }

    async fn post_json(app: Router, body: String) -> (StatusCode, Value) {
        send(app, body, "application/json", Some("integration-test")).await
    }

    async fn send(
        app: Router,
        body: String,
        content_type: &str,
        user_agent: Option<&str>,
    ) -> (StatusCode, Value) {
        let mut request = Request::builder()
            .method("POST")
            .uri("/api/contact")
            .header("content-type", content_type);
        if let Some(user_agent) = user_agent {
            request = request.header("user-agent", user_agent);
        }
        let request = request.body(Body::from(body)).unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), 64 * 1024).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn stored_rows(pool: &DbPool) -> Vec<StoredSubmission> {
        contact_submissions::table
            .order(contact_submissions::id.asc())
            .select(StoredSubmission::as_select())
            .load(&mut pool.get().unwrap())
            .unwrap()
    }

    fn valid_payload() -> Value {
        json!({
            "fullName": "Ada Lovelace",
            "workEmail": "a@b.co",
            "company": "Analytical Engines",
            "challenge": "ai",
            "project": "Difference engine refresh",
            "locale": "en"
        })
    }

    #[tokio::test]
    async fn valid_submission_is_stored() {
        let repository = Arc::new(ContactRepository::new(memory_pool()));
        let (status, body) = post_json(app(Some(repository.clone())), valid_payload().to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Submission received.");
        assert_eq!(repository.count_by_email("a@b.co").unwrap(), 1);
    }

    #[tokio::test]
    async fn stored_row_is_normalized_and_keeps_user_agent() {
        let pool = memory_pool();
        let repository = Arc::new(ContactRepository::new(pool.clone()));
        let mut payload = valid_payload();
        payload["fullName"] = json!("  Ada Lovelace ");
        payload["workEmail"] = json!(" Ada@Engines.CO ");
        payload["project"] = json!("   ");

        let (status, _) = post_json(app(Some(repository)), payload.to_string()).await;

        assert_eq!(status, StatusCode::OK);
        let rows = stored_rows(&pool);
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.full_name, "Ada Lovelace");
        assert_eq!(row.work_email, "ada@engines.co");
        assert_eq!(row.company, "Analytical Engines");
        assert_eq!(row.challenge, "ai");
        assert_eq!(row.project, None);
        assert_eq!(row.locale.as_deref(), Some("en"));
        assert_eq!(row.user_agent.as_deref(), Some("integration-test"));
        assert!(row.created_at > 0);
    }

    #[tokio::test]
    async fn missing_user_agent_is_stored_as_null() {
        let pool = memory_pool();
        let repository = Arc::new(ContactRepository::new(pool.clone()));

        let (status, _) = send(
            app(Some(repository)),
            valid_payload().to_string(),
            "application/json",
            None,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let rows = stored_rows(&pool);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].user_agent, None);
        assert_eq!(rows[0].project.as_deref(), Some("Difference engine refresh"));
    }

    #[tokio::test]
    async fn json_sent_as_plain_text_is_accepted() {
        let pool = memory_pool();
        let repository = Arc::new(ContactRepository::new(pool.clone()));
        let body = json!({
            "fullName": "A",
            "workEmail": "a@b.co",
            "company": "C",
            "challenge": "ai"
        });

        let (status, response) = send(
            app(Some(repository)),
            body.to_string(),
            "text/plain;charset=UTF-8",
            Some("integration-test"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(response["message"], "Submission received.");
        assert_eq!(stored_rows(&pool).len(), 1);
    }

    #[tokio::test]
    async fn missing_company_is_rejected() {
        let repository = Arc::new(ContactRepository::new(memory_pool()));
        let mut payload = valid_payload();
        payload.as_object_mut().unwrap().remove("company");

        let (status, body) = post_json(app(Some(repository.clone())), payload.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "All required fields must be provided.");
        assert_eq!(repository.count_by_email("a@b.co").unwrap(), 0);
    }

    #[tokio::test]
    async fn malformed_email_is_rejected() {
        let mut payload = valid_payload();
        payload["workEmail"] = json!("not-an-email");

        let (status, body) = post_json(app(None), payload.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Please provide a valid work email.");
    }

    #[tokio::test]
    async fn unparsable_body_is_rejected() {
        let (status, body) = post_json(app(None), "{not json".to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid JSON payload.");
    }

    #[tokio::test]
    async fn unconfigured_store_answers_500() {
        let (status, body) = post_json(app(None), valid_payload().to_string()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body["message"],
            "We could not submit the form right now. Please try again."
        );
    }
}
