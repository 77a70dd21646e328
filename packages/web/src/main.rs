use dioxus::prelude::*;

use views::{AppLayout, CreateProject, Dashboard, Home, Login, ProfileUpdate, Signup, VerifyEmail};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AppLayout)]
        #[route("/")]
        Home {},
        #[route("/create-project")]
        CreateProject {},
        #[route("/dashboard/:id")]
        Dashboard { id: String },
        #[route("/login")]
        Login {},
        #[route("/signup")]
        Signup {},
        #[route("/verify-email")]
        VerifyEmail {},
        #[route("/profile-update")]
        ProfileUpdate {},
}

fn main() {
    dioxus::logger::initialize_default();
    tracing::info!("Starting AccessLens web client");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::APP_CSS }

        ui::AuthProvider {
            ui::components::ToastProvider {
                Router::<Route> {}
            }
        }
    }
}
