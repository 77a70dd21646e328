use dioxus::prelude::*;

use super::VIEWS_CSS;
use crate::auth::use_api;
use crate::forms::ProjectForm;
use crate::components::{use_toast, ToastOptions};

/// Edit screen for a single project.
#[component]
pub fn DashboardView(id: String) -> Element {
    let api = use_api();
    let nav = use_navigator();
    let toasts = use_toast();
    let mut form = use_signal(ProjectForm::default);
    let mut loading = use_signal(|| true);
    let mut updating = use_signal(|| false);

    // Track the id in a signal so the loader re-runs when the route param changes
    let mut project_id = use_signal(|| id.clone());
    if *project_id.peek() != id {
        project_id.set(id.clone());
    }

    let loader_api = api.clone();
    let _loader = use_resource(move || {
        let api = loader_api.clone();
        let id = project_id();
        async move {
            loading.set(true);
            match api.get_project(&id).await {
                Ok(project) => {
                    form.set(ProjectForm::from_project(&project));
                    loading.set(false);
                }
                Err(e) if e.is_network() => {
                    loading.set(false);
                    toasts.error("Failed to load project".to_string(), ToastOptions::new());
                }
                Err(e) => {
                    tracing::warn!("Project {id} unavailable: {e}");
                    toasts.error("Project not found".to_string(), ToastOptions::new());
                    nav.push("/");
                }
            }
        }
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if updating() {
            return;
        }
        let payload = match form.read().validate_edit() {
            Ok(payload) => payload,
            Err(e) => {
                toasts.error(e.to_string(), ToastOptions::new());
                return;
            }
        };
        let api = api.clone();
        let id = project_id();
        updating.set(true);
        spawn(async move {
            match api.update_project(&id, &payload).await {
                Ok(reply) => {
                    updating.set(false);
                    toasts.success(
                        reply.message_or("Project updated successfully"),
                        ToastOptions::new(),
                    );
                    nav.push("/");
                }
                Err(e) => {
                    updating.set(false);
                    tracing::warn!("Project update failed: {e}");
                    let message = if e.is_network() {
                        "Update failed. Try again.".to_string()
                    } else {
                        e.user_message("Update failed")
                    };
                    toasts.error(message, ToastOptions::new());
                }
            }
        });
    };

    if loading() {
        return rsx! {
            div { class: "view-page view-loading", "Loading..." }
        };
    }

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }

        div {
            class: "view-page form-page",
            h1 { class: "view-title", "Edit Project" }

            form {
                class: "card-form",
                onsubmit: handle_submit,

                div {
                    class: "form-field",
                    label { r#for: "edit-name", "Project Name" }
                    input {
                        id: "edit-name",
                        r#type: "text",
                        placeholder: "Project Name",
                        value: form.read().name.clone(),
                        oninput: move |evt: FormEvent| form.write().name = evt.value(),
                    }
                }

                div {
                    class: "form-field",
                    label { r#for: "edit-url", "Project URL" }
                    input {
                        id: "edit-url",
                        r#type: "url",
                        placeholder: "Project URL",
                        value: form.read().url.clone(),
                        oninput: move |evt: FormEvent| form.write().url = evt.value(),
                    }
                }

                div {
                    class: "form-field",
                    label { r#for: "edit-description", "Description" }
                    textarea {
                        id: "edit-description",
                        rows: 6,
                        placeholder: "Project Description",
                        value: form.read().description.clone(),
                        oninput: move |evt: FormEvent| form.write().description = evt.value(),
                    }
                }

                div {
                    class: "form-actions",
                    button {
                        class: "button primary",
                        r#type: "submit",
                        disabled: updating(),
                        if updating() { "Updating..." } else { "Update Project" }
                    }
                    button {
                        class: "button secondary",
                        r#type: "button",
                        onclick: move |_| {
                            nav.push("/");
                        },
                        "Cancel"
                    }
                }
            }
        }
    }
}
