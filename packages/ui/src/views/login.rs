use dioxus::prelude::*;

use super::VIEWS_CSS;
use crate::auth::{use_api, use_auth};
use crate::forms::LoginForm;
use crate::components::{use_toast, ToastOptions};

#[component]
pub fn LoginView() -> Element {
    let mut auth = use_auth();
    let api = use_api();
    let nav = use_navigator();
    let toasts = use_toast();
    let mut form = use_signal(LoginForm::default);
    let mut submitting = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        let request = match form.read().validate() {
            Ok(request) => request,
            Err(e) => {
                toasts.error(e.to_string(), ToastOptions::new());
                return;
            }
        };
        let api = api.clone();
        submitting.set(true);
        spawn(async move {
            match api.login(&request).await {
                Ok(reply) => {
                    submitting.set(false);
                    toasts.success(reply.message_or("Login successful!"), ToastOptions::new());
                    auth.write().login(reply.data);
                    nav.push("/");
                }
                Err(e) => {
                    submitting.set(false);
                    tracing::warn!("Login failed: {e}");
                    toasts.error(e.user_message("Login failed"), ToastOptions::new());
                }
            }
        });
    };

    // Already signed in
    if auth.read().is_authenticated() {
        nav.replace("/");
        return rsx! {};
    }

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }

        div {
            class: "view-page auth-page",
            form {
                class: "card-form",
                onsubmit: handle_submit,

                h1 { class: "view-title", "Login" }

                div {
                    class: "form-field",
                    label { r#for: "login-email", "Email" }
                    input {
                        id: "login-email",
                        r#type: "email",
                        autocomplete: "email",
                        placeholder: "you@example.com",
                        value: form.read().email.clone(),
                        oninput: move |evt: FormEvent| form.write().email = evt.value(),
                    }
                }

                div {
                    class: "form-field",
                    label { r#for: "login-password", "Password" }
                    input {
                        id: "login-password",
                        r#type: "password",
                        autocomplete: "current-password",
                        value: form.read().password.clone(),
                        oninput: move |evt: FormEvent| form.write().password = evt.value(),
                    }
                }

                button {
                    class: "button primary wide",
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Logging in..." } else { "Login" }
                }

                p {
                    class: "view-muted",
                    "Don't have an account? "
                    Link { to: "/signup", "Sign Up" }
                }
            }
        }
    }
}
