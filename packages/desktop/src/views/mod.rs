use dioxus::prelude::*;
use ui::views::{
    CreateProjectView, DashboardView, HomeView, LoginView, ProfileUpdateView, SignupView,
    VerifyEmailView,
};

use crate::Route;

/// Desktop shell: no browser chrome, so the navbar doubles as the only way
/// back home.
#[component]
pub fn AppLayout() -> Element {
    rsx! {
        div {
            class: "desktop-shell",
            ui::Navbar {}
            main {
                ui::SessionGate {
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
pub fn Home() -> Element {
    rsx! { HomeView {} }
}

#[component]
pub fn CreateProject() -> Element {
    rsx! { CreateProjectView {} }
}

#[component]
pub fn Dashboard(id: String) -> Element {
    rsx! { DashboardView { id } }
}

#[component]
pub fn Login() -> Element {
    rsx! { LoginView {} }
}

#[component]
pub fn Signup() -> Element {
    rsx! { SignupView {} }
}

#[component]
pub fn VerifyEmail() -> Element {
    rsx! { VerifyEmailView {} }
}

#[component]
pub fn ProfileUpdate() -> Element {
    rsx! { ProfileUpdateView {} }
}
