//! Route components; each renders the shared view from `ui`.

use dioxus::prelude::*;
use ui::views::{
    CreateProjectView, DashboardView, HomeView, LoginView, ProfileUpdateView, SignupView,
    VerifyEmailView,
};
use ui::{Navbar, SessionGate};

use crate::Route;

#[component]
pub fn AppLayout() -> Element {
    rsx! {
        Navbar {}
        main {
            SessionGate {
                Outlet::<Route> {}
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
