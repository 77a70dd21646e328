use dioxus::prelude::*;

use super::VIEWS_CSS;
use crate::auth::{use_api, use_auth};
use crate::forms::SignupForm;
use crate::components::{use_toast, ToastOptions};

#[component]
pub fn SignupView() -> Element {
    let mut auth = use_auth();
    let api = use_api();
    let nav = use_navigator();
    let toasts = use_toast();
    let mut form = use_signal(SignupForm::default);
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
            match api.register(&request).await {
                Ok(reply) => {
                    submitting.set(false);
                    toasts.success(
                        reply.message_or("Account created successfully!"),
                        ToastOptions::new(),
                    );
                    // Some deployments create the account without starting a session
                    if let Some(user) = reply.data {
                        auth.write().login(user);
                    }
                    nav.push("/");
                }
                Err(e) => {
                    submitting.set(false);
                    tracing::warn!("Signup failed: {e}");
                    toasts.error(e.user_message("Signup failed"), ToastOptions::new());
                }
            }
        });
    };

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }

        div {
            class: "view-page auth-page",
            form {
                class: "card-form",
                onsubmit: handle_submit,

                h1 { class: "view-title", "Create Account" }

                div {
                    class: "form-field",
                    label { r#for: "signup-name", "Name" }
                    input {
                        id: "signup-name",
                        r#type: "text",
                        autocomplete: "name",
                        value: form.read().name.clone(),
                        oninput: move |evt: FormEvent| form.write().name = evt.value(),
                    }
                }

                div {
                    class: "form-field",
                    label { r#for: "signup-email", "Email" }
                    input {
                        id: "signup-email",
                        r#type: "email",
                        autocomplete: "email",
                        value: form.read().email.clone(),
                        oninput: move |evt: FormEvent| form.write().email = evt.value(),
                    }
                }

                div {
                    class: "form-field",
                    label { r#for: "signup-password", "Password" }
                    input {
                        id: "signup-password",
                        r#type: "password",
                        autocomplete: "new-password",
                        value: form.read().password.clone(),
                        oninput: move |evt: FormEvent| form.write().password = evt.value(),
                    }
                }

                div {
                    class: "form-field",
                    label { r#for: "signup-confirm", "Confirm Password" }
                    input {
                        id: "signup-confirm",
                        r#type: "password",
                        autocomplete: "new-password",
                        value: form.read().confirm_password.clone(),
                        oninput: move |evt: FormEvent| form.write().confirm_password = evt.value(),
                    }
                }

                button {
                    class: "button primary wide",
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Creating account..." } else { "Sign Up" }
                }

                p {
                    class: "view-muted",
                    "Already have an account? "
                    Link { to: "/login", "Login" }
                }
            }
        }
    }
}
