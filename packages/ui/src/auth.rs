//! Authentication context and hooks for the UI.

use api::{ApiClient, ApiConfig, Session};
use dioxus::prelude::*;

use crate::storage::{make_store, PlatformStore};
use crate::components::{use_toast, ToastOptions};

/// Authentication state for the application.
pub type AuthState = Session<PlatformStore>;

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Get the shared API client.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let api = use_context_provider(|| ApiClient::new(ApiConfig::from_env()));
    let mut auth_state = use_context_provider(|| Signal::new(Session::restore(make_store())));

    // Reconcile the restored user with the server on mount
    let _ = use_resource(move || {
        let api = api.clone();
        async move {
            let outcome = api.current_user().await;
            auth_state.write().reconcile(outcome);
        }
    });

    rsx! {
        {children}
    }
}

/// Invalidate the server session, then clear local state whatever the outcome.
pub async fn sign_out(mut auth: Signal<AuthState>, api: ApiClient) {
    let outcome = api.logout().await;
    auth.write().finish_logout(outcome);
}

/// Holds back its children until the stored session has been checked against
/// the server.
#[component]
pub fn SessionGate(children: Element) -> Element {
    let auth = use_auth();

    if auth.read().is_loading() {
        return rsx! {
            div {
                class: "session-loading",
                "Loading..."
            }
        };
    }

    rsx! {
        {children}
    }
}

/// Sends unauthenticated visitors to `/login` with `message` as an error toast.
#[component]
pub fn RequireAuth(message: String, children: Element) -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let toasts = use_toast();

    use_effect(move || {
        if !auth.read().is_loading() && !auth.read().is_authenticated() {
            tracing::debug!("Redirecting to login: {message}");
            toasts.error(message.clone(), ToastOptions::new());
            nav.replace("/login");
        }
    });

    if !auth.read().is_authenticated() {
        return rsx! {};
    }

    rsx! {
        {children}
    }
}
