use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod state;
mod translations;
mod components {
    pub mod accordion;
    pub mod contact_form;
    pub mod dialog;
    pub mod floating_cursor;
    pub mod frame_loop;
    pub mod language;
    pub mod listener;
    pub mod noise_background;
    pub mod schedule_dialog;
    pub mod select;
    pub mod tabs;
    pub mod text_reveal;
    pub mod toast;
}
mod pages {
    pub mod landing;
}

use components::{
    floating_cursor::FloatingCursor,
    language::LanguageProvider,
    noise_background::NoiseBackground,
    toast::ToastProvider,
};
use pages::landing::{Landing, NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <LanguageProvider>
            <ToastProvider>
                <NoiseBackground />
                <FloatingCursor />
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </ToastProvider>
        </LanguageProvider>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
