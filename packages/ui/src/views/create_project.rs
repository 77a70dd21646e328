use dioxus::prelude::*;

use super::VIEWS_CSS;
use crate::auth::{use_api, RequireAuth};
use crate::forms::ProjectForm;
use crate::components::{use_toast, ToastOptions};

#[component]
pub fn CreateProjectView() -> Element {
    rsx! {
        document::Stylesheet { href: VIEWS_CSS }
        RequireAuth {
            message: "Please login to create a project",
            CreateProjectForm {}
        }
    }
}

#[component]
fn CreateProjectForm() -> Element {
    let api = use_api();
    let nav = use_navigator();
    let toasts = use_toast();
    let mut form = use_signal(ProjectForm::default);
    let mut saving = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if saving() {
            return;
        }
        let payload = match form.read().validate() {
            Ok(payload) => payload,
            Err(e) => {
                toasts.error(e.to_string(), ToastOptions::new());
                return;
            }
        };
        let api = api.clone();
        saving.set(true);
        spawn(async move {
            match api.create_project(&payload).await {
                Ok(reply) => {
                    saving.set(false);
                    toasts.success(
                        reply.message_or("Project created successfully!"),
                        ToastOptions::new(),
                    );
                    nav.push("/");
                }
                Err(e) => {
                    saving.set(false);
                    tracing::warn!("Project creation failed: {e}");
                    toasts.error(e.user_message("Failed to create project"), ToastOptions::new());
                }
            }
        });
    };

    rsx! {
        div {
            class: "view-page form-page",
            h1 { class: "view-title", "Create New Project" }

            form {
                class: "card-form",
                onsubmit: handle_submit,

                div {
                    class: "form-field",
                    label { r#for: "project-name", "Project Name" }
                    input {
                        id: "project-name",
                        r#type: "text",
                        placeholder: "My Website",
                        value: form.read().name.clone(),
                        oninput: move |evt: FormEvent| form.write().name = evt.value(),
                    }
                }

                div {
                    class: "form-field",
                    label { r#for: "project-url", "Website URL" }
                    input {
                        id: "project-url",
                        r#type: "url",
                        placeholder: "https://example.com",
                        value: form.read().url.clone(),
                        oninput: move |evt: FormEvent| form.write().url = evt.value(),
                    }
                }

                div {
                    class: "form-field",
                    label { r#for: "project-description", "Description" }
                    textarea {
                        id: "project-description",
                        rows: 5,
                        placeholder: "What should be audited?",
                        value: form.read().description.clone(),
                        oninput: move |evt: FormEvent| form.write().description = evt.value(),
                    }
                }

                div {
                    class: "form-actions",
                    button {
                        class: "button primary",
                        r#type: "submit",
                        disabled: saving(),
                        if saving() { "Creating..." } else { "Create Project" }
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
