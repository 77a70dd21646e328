use api::{ApiError, Project};
use dioxus::prelude::*;

use super::VIEWS_CSS;
use crate::auth::{use_api, use_auth};
use crate::dates::{format_date, DateStyle};
use crate::components::{use_toast, ToastOptions};
use crate::sidebar::RecentProjects;

/// Landing page: a welcome panel for visitors, the project list otherwise.
#[component]
pub fn HomeView() -> Element {
    let auth = use_auth();
    let authenticated = auth.read().is_authenticated();

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }

        if authenticated {
            div {
                class: "home-layout",
                RecentProjects {}
                ProjectList {}
            }
        } else {
            Welcome {}
        }
    }
}

#[component]
fn Welcome() -> Element {
    rsx! {
        div {
            class: "view-page welcome",
            h1 { class: "view-title", "Welcome to AccessLens" }
            p {
                class: "view-muted",
                "Track accessibility audits for every site you ship."
            }
            div {
                class: "welcome-actions",
                Link { class: "button primary", to: "/login", "Login" }
                Link { class: "button secondary", to: "/signup", "Sign Up" }
            }
        }
    }
}

const SEARCH_ERROR: &str = "Search error. Please try again.";

/// What the project area shows for the latest load.
#[derive(Debug, PartialEq)]
enum ListView<'a> {
    Loading,
    Failed(&'a ApiError),
    Projects(&'a [Project]),
}

/// A failed search leaves the last good list on screen; a failed full load
/// shows the error panel.
fn list_view<'a>(
    loaded: Option<&'a Result<Vec<Project>, ApiError>>,
    previous: Option<&'a [Project]>,
    searching: bool,
) -> ListView<'a> {
    match (loaded, previous) {
        (Some(Ok(list)), _) => ListView::Projects(list),
        (Some(Err(_)), Some(list)) if searching => ListView::Projects(list),
        (Some(Err(e)), _) => ListView::Failed(e),
        (None, Some(list)) => ListView::Projects(list),
        (None, None) => ListView::Loading,
    }
}

fn load_error_message(e: &ApiError, searching: bool) -> String {
    if searching {
        e.server_message().unwrap_or(SEARCH_ERROR).to_string()
    } else {
        e.user_message("Failed to load projects")
    }
}

#[component]
fn ProjectList() -> Element {
    let api = use_api();
    let toasts = use_toast();
    let mut search = use_signal(String::new);
    // The query the list currently reflects; blank means the full list.
    let mut applied = use_signal(String::new);
    // Last list that loaded; kept on screen when a search fails.
    let mut shown = use_signal(|| Option::<Vec<Project>>::None);

    let mut projects = use_resource(move || {
        let api = api.clone();
        let query = applied();
        async move {
            let searching = !query.is_empty();
            let result = if searching {
                api.search_projects(&query).await
            } else {
                api.list_projects().await
            };
            match &result {
                Ok(list) => shown.set(Some(list.clone())),
                Err(e) => {
                    tracing::warn!("Loading projects failed: {e}");
                    toasts.error(load_error_message(e, searching), ToastOptions::new());
                }
            }
            result
        }
    });

    let mut run_search = move || {
        let query = search.peek().trim().to_string();
        if *applied.peek() == query {
            projects.restart();
        } else {
            applied.set(query);
        }
    };

    let current_query = applied();
    let loaded = projects.read();
    let previous = shown.read();
    let view = list_view(
        (*loaded).as_ref(),
        (*previous).as_deref(),
        !current_query.is_empty(),
    );

    rsx! {
        div {
            class: "view-page projects",

            div {
                class: "projects-header",
                h1 { class: "view-title", "Your Projects" }
                Link { class: "button primary", to: "/create-project", "New Project" }
            }

            div {
                class: "search-bar",
                input {
                    r#type: "search",
                    placeholder: "Search projects...",
                    value: search(),
                    oninput: move |evt: FormEvent| search.set(evt.value()),
                    onkeydown: move |evt: KeyboardEvent| {
                        if evt.key() == Key::Enter {
                            run_search();
                        }
                    },
                }
                button {
                    class: "button primary",
                    onclick: move |_| run_search(),
                    "Search"
                }
                if !search().is_empty() || !current_query.is_empty() {
                    button {
                        class: "button secondary",
                        onclick: move |_| {
                            search.set(String::new());
                            if applied.peek().is_empty() {
                                projects.restart();
                            } else {
                                applied.set(String::new());
                            }
                        },
                        "Clear"
                    }
                }
            }

            match view {
                ListView::Loading => rsx! {
                    div {
                        class: "project-grid",
                        for i in 0..6 {
                            div { key: "{i}", class: "project-card skeleton" }
                        }
                    }
                },
                ListView::Failed(e) => rsx! {
                    div {
                        class: "error-panel",
                        p { {e.user_message("Error loading projects")} }
                        button {
                            class: "button secondary",
                            onclick: move |_| projects.restart(),
                            "Retry"
                        }
                    }
                },
                ListView::Projects(list) if list.is_empty() => rsx! {
                    div {
                        class: "empty-state",
                        if current_query.is_empty() {
                            p { "No projects yet" }
                            Link { to: "/create-project", "Create your first project" }
                        } else {
                            p { "No projects match \"{current_query}\"" }
                        }
                    }
                },
                ListView::Projects(list) => rsx! {
                    div {
                        class: "project-grid",
                        for project in list.iter() {
                            ProjectCard { key: "{project.id}", project: project.clone() }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn ProjectCard(project: Project) -> Element {
    let nav = use_navigator();
    let target = format!("/dashboard/{}", project.id);

    rsx! {
        div {
            class: "project-card",
            onclick: move |_| {
                nav.push(target.clone());
            },
            h3 { class: "project-name", "{project.name}" }
            p { class: "project-description", "{project.description}" }
            a {
                class: "project-url",
                href: "{project.url}",
                target: "_blank",
                rel: "noopener noreferrer",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),
                "{project.url}"
            }
            span {
                class: "project-date",
                {format_date(project.created_at, DateStyle::Long)}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: &str) -> Project {
        Project {
            id: id.to_string(),
            name: format!("Project {id}"),
            url: "https://example.com".to_string(),
            description: String::new(),
            created_at: None,
            owner: None,
        }
    }

    fn server_error() -> ApiError {
        ApiError::Server {
            status: 500,
            message: None,
        }
    }

    #[test]
    fn test_failed_search_keeps_previous_results() {
        let previous = vec![project("p1"), project("p2")];
        let failed: Result<Vec<Project>, ApiError> = Err(server_error());

        let view = list_view(Some(&failed), Some(previous.as_slice()), true);
        assert_eq!(view, ListView::Projects(&previous));
    }

    #[test]
    fn test_failed_full_load_shows_error() {
        let previous = vec![project("p1")];
        let failed: Result<Vec<Project>, ApiError> = Err(server_error());

        assert_eq!(
            list_view(Some(&failed), Some(previous.as_slice()), false),
            ListView::Failed(&server_error())
        );
        assert_eq!(
            list_view(Some(&failed), None, true),
            ListView::Failed(&server_error())
        );
    }

    #[test]
    fn test_loading_and_loaded() {
        let loaded: Result<Vec<Project>, ApiError> = Ok(vec![project("p3")]);
        let previous = vec![project("p1")];

        assert_eq!(list_view(None, None, false), ListView::Loading);
        assert_eq!(
            list_view(None, Some(previous.as_slice()), true),
            ListView::Projects(&previous)
        );
        assert_eq!(
            list_view(Some(&loaded), Some(previous.as_slice()), true),
            ListView::Projects(&[project("p3")])
        );
    }

    #[test]
    fn test_search_error_message() {
        assert_eq!(load_error_message(&server_error(), true), SEARCH_ERROR);
        assert_eq!(
            load_error_message(&ApiError::Network("offline".to_string()), true),
            SEARCH_ERROR
        );

        let rejected = ApiError::Rejected {
            message: Some("Query too short".to_string()),
        };
        assert_eq!(load_error_message(&rejected, true), "Query too short");
        assert_eq!(
            load_error_message(&server_error(), false),
            "Failed to load projects"
        );
    }
}
