use api::User;
use dioxus::prelude::*;

use crate::auth::{sign_out, use_api, use_auth};
use crate::components::{use_toast, ToastOptions};

/// Entries of the top bar, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    VerifyEmail,
    Profile,
    Logout,
    Login,
    Signup,
}

/// Which entries the top bar shows for the given user.
pub fn nav_items(user: Option<&User>) -> Vec<NavItem> {
    match user {
        Some(user) => {
            let mut items = Vec::with_capacity(3);
            if !user.is_verified {
                items.push(NavItem::VerifyEmail);
            }
            items.push(NavItem::Profile);
            items.push(NavItem::Logout);
            items
        }
        None => vec![NavItem::Login, NavItem::Signup],
    }
}

#[component]
pub fn Navbar() -> Element {
    let auth = use_auth();
    let api = use_api();
    let nav = use_navigator();
    let toasts = use_toast();

    let user = auth.read().user().cloned();
    let avatar = match user.as_ref().and_then(|u| u.profile_pic.as_deref()) {
        Some(pic) => api.config().asset_url(pic),
        None => api.config().default_avatar(),
    };
    let items = nav_items(user.as_ref());

    let handle_logout = move |_| {
        let api = api.clone();
        nav.push("/");
        spawn(async move {
            sign_out(auth, api).await;
            toasts.success("Logged out successfully".to_string(), ToastOptions::new());
        });
    };

    rsx! {
        nav {
            class: "navbar",
            div {
                class: "navbar-brand",
                Link { to: "/", "AccessLens" }
            }
            div {
                class: "navbar-links",
                if items.contains(&NavItem::VerifyEmail) {
                    Link { class: "nav-button primary", to: "/verify-email", "Verify Email" }
                }
                if items.contains(&NavItem::Profile) {
                    button {
                        class: "nav-avatar",
                        title: "Profile",
                        onclick: move |_| {
                            nav.push("/profile-update");
                        },
                        img { src: "{avatar}", alt: "Profile" }
                    }
                }
                if items.contains(&NavItem::Logout) {
                    button { class: "nav-button", onclick: handle_logout, "Logout" }
                }
                if items.contains(&NavItem::Login) {
                    Link { class: "nav-button", to: "/login", "Login" }
                }
                if items.contains(&NavItem::Signup) {
                    Link { class: "nav-button", to: "/signup", "Sign Up" }
                }
            }
        }
    }
}
