use dioxus::prelude::*;

use super::VIEWS_CSS;
use crate::auth::{use_api, use_auth, RequireAuth};
use crate::forms::{image_data_url, validate_image};
use crate::components::{use_toast, ToastOptions};

#[component]
pub fn ProfileUpdateView() -> Element {
    rsx! {
        document::Stylesheet { href: VIEWS_CSS }
        RequireAuth {
            message: "Please login to update your profile",
            ProfilePicture {}
        }
    }
}

#[component]
fn ProfilePicture() -> Element {
    let mut auth = use_auth();
    let api = use_api();
    let toasts = use_toast();
    // Data URL of the picked file, not yet uploaded
    let mut selected = use_signal(|| Option::<String>::None);
    let mut uploading = use_signal(|| false);

    let handle_pick = move |evt: FormEvent| async move {
        let Some(engine) = evt.files() else {
            return;
        };
        let Some(name) = engine.files().into_iter().next() else {
            return;
        };
        let Some(bytes) = engine.read_file(&name).await else {
            toasts.error("Could not read the selected file.".to_string(), ToastOptions::new());
            return;
        };
        match image_data_url(&name, &bytes) {
            Ok(url) => selected.set(Some(url)),
            Err(e) => {
                selected.set(None);
                toasts.error(e.to_string(), ToastOptions::new());
            }
        }
    };

    let upload_api = api.clone();
    let handle_upload = move |_| {
        if uploading() {
            return;
        }
        let request = match validate_image(selected.read().as_deref()) {
            Ok(request) => request,
            Err(e) => {
                toasts.warning(e.to_string(), ToastOptions::new());
                return;
            }
        };
        let api = upload_api.clone();
        uploading.set(true);
        spawn(async move {
            match api.upload_profile_pic(&request).await {
                Ok(reply) => {
                    let current = auth.peek().user().cloned();
                    match (current, reply.data) {
                        (Some(user), Some(pic)) => {
                            auth.write().update_user(user.with_profile_pic(pic));
                        }
                        _ => tracing::debug!("Upload accepted without a picture reference"),
                    }
                    selected.set(None);
                    toasts.success(
                        "Profile picture updated successfully!".to_string(),
                        ToastOptions::new(),
                    );
                }
                Err(e) => {
                    tracing::warn!("Profile picture upload failed: {e}");
                    let message = if e.is_network() {
                        "Something went wrong while uploading.".to_string()
                    } else {
                        e.user_message("Failed to update profile picture.")
                    };
                    toasts.error(message, ToastOptions::new());
                }
            }
            uploading.set(false);
        });
    };

    let user = auth.read().user().cloned();
    let preview = match (selected(), user.as_ref().and_then(|u| u.profile_pic.as_deref())) {
        (Some(data_url), _) => data_url,
        (None, Some(pic)) => api.config().asset_url(pic),
        (None, None) => api.config().default_avatar(),
    };

    rsx! {
        div {
            class: "view-page auth-page",
            div {
                class: "card-form centered",
                h1 { class: "view-title", "Update Your Profile" }

                img { class: "profile-preview", src: "{preview}", alt: "Profile Preview" }

                if let Some(user) = user {
                    p { class: "profile-name", "{user.display_name()}" }
                    p { class: "view-muted", "{user.email}" }
                }

                label {
                    class: "button secondary wide file-picker",
                    "Choose Image"
                    input {
                        r#type: "file",
                        accept: "image/*",
                        multiple: false,
                        onchange: handle_pick,
                    }
                }

                button {
                    class: "button primary wide",
                    disabled: uploading(),
                    onclick: handle_upload,
                    if uploading() { "Uploading..." } else { "Upload Picture" }
                }
            }
        }
    }
}
