use dioxus::prelude::*;

use super::VIEWS_CSS;
use crate::auth::{use_api, use_auth};
use crate::forms::{sanitize_code, validate_code, CODE_LEN};
use crate::components::{use_toast, ToastOptions};

#[component]
pub fn VerifyEmailView() -> Element {
    let mut auth = use_auth();
    let api = use_api();
    let nav = use_navigator();
    let toasts = use_toast();
    let mut code = use_signal(String::new);
    let mut verifying = use_signal(|| false);
    let mut resending = use_signal(|| false);

    let verify_api = api.clone();
    let handle_verify = move |evt: FormEvent| {
        evt.prevent_default();
        if verifying() {
            return;
        }
        let request = match validate_code(&code.read()) {
            Ok(request) => request,
            Err(e) => {
                toasts.error(e.to_string(), ToastOptions::new());
                return;
            }
        };
        let api = verify_api.clone();
        verifying.set(true);
        spawn(async move {
            match api.verify_email(&request).await {
                Ok(reply) => {
                    verifying.set(false);
                    toasts.success(
                        reply.message_or("Email verified successfully!"),
                        ToastOptions::new(),
                    );
                    let current = auth.peek().user().cloned();
                    if let Some(user) = reply.data.or(current) {
                        auth.write().update_user(user.verified());
                    }
                    nav.push("/");
                }
                Err(e) => {
                    verifying.set(false);
                    tracing::warn!("Email verification failed: {e}");
                    toasts.error(e.user_message("Verification failed"), ToastOptions::new());
                }
            }
        });
    };

    let handle_resend = move |_| {
        if resending() {
            return;
        }
        let api = api.clone();
        resending.set(true);
        spawn(async move {
            match api.resend_verification().await {
                Ok(reply) => toasts.success(
                    reply.message_or("Verification email sent successfully!"),
                    ToastOptions::new(),
                ),
                Err(e) => {
                    tracing::warn!("Resending verification failed: {e}");
                    toasts.error(
                        e.user_message("Failed to resend verification email"),
                        ToastOptions::new(),
                    );
                }
            }
            resending.set(false);
        });
    };

    let user = auth.read().user().cloned();

    if user.as_ref().is_some_and(|u| u.is_verified) {
        return rsx! {
            document::Stylesheet { href: VIEWS_CSS }
            div {
                class: "view-page auth-page",
                div {
                    class: "card-form centered",
                    h1 { class: "view-title", "Already Verified" }
                    p { class: "view-muted", "Your email is already verified" }
                    button {
                        class: "button primary wide",
                        onclick: move |_| {
                            nav.push("/");
                        },
                        "Go to Home"
                    }
                }
            }
        };
    }

    let hint = match &user {
        Some(user) => format!("We've sent a verification code to {}", user.email),
        None => "Enter the verification code sent to your email".to_string(),
    };

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }

        div {
            class: "view-page auth-page",
            form {
                class: "card-form",
                onsubmit: handle_verify,

                h1 { class: "view-title", "Verify Your Email" }
                p { class: "view-muted", "{hint}" }

                div {
                    class: "form-field",
                    label { r#for: "verify-code", "Verification Code" }
                    input {
                        id: "verify-code",
                        class: "code-input",
                        r#type: "text",
                        inputmode: "numeric",
                        maxlength: CODE_LEN as i64,
                        placeholder: "000000",
                        value: code(),
                        oninput: move |evt: FormEvent| code.set(sanitize_code(&evt.value())),
                    }
                }

                button {
                    class: "button primary wide",
                    r#type: "submit",
                    disabled: verifying(),
                    if verifying() { "Verifying..." } else { "Verify Email" }
                }

                div {
                    class: "resend",
                    span { class: "view-muted", "Didn't receive the code? " }
                    button {
                        class: "link-button",
                        r#type: "button",
                        disabled: resending(),
                        onclick: handle_resend,
                        if resending() { "Sending..." } else { "Resend Code" }
                    }
                }

                button {
                    class: "button secondary wide",
                    r#type: "button",
                    onclick: move |_| {
                        nav.push("/");
                    },
                    "Back to Home"
                }
            }
        }
    }
}
