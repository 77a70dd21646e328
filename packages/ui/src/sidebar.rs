use api::{ApiError, Project};
use dioxus::prelude::*;

use crate::auth::{use_api, use_auth};
use crate::dates::{format_date, DateStyle};

const SIDEBAR_CSS: Asset = asset!("/assets/styling/sidebar.css");

/// How many projects the sidebar lists.
pub const RECENT_LIMIT: usize = 5;

/// First [`RECENT_LIMIT`] projects, in the order the server returned them.
pub fn recent(mut projects: Vec<Project>) -> Vec<Project> {
    projects.truncate(RECENT_LIMIT);
    projects
}

/// Recent-projects panel. Renders nothing for visitors.
#[component]
pub fn RecentProjects() -> Element {
    let auth = use_auth();
    let api = use_api();

    let projects = use_resource(move || {
        let api = api.clone();
        let authenticated = auth.read().is_authenticated();
        async move {
            if !authenticated {
                return Ok::<_, ApiError>(Vec::new());
            }
            api.list_projects().await.map(recent)
        }
    });

    if !auth.read().is_authenticated() {
        return rsx! {};
    }

    rsx! {
        document::Stylesheet { href: SIDEBAR_CSS }

        aside {
            class: "sidebar",

            div {
                class: "sidebar-header",
                h2 { "Recent Projects" }
                Link { class: "sidebar-new", to: "/create-project", "+ New Project" }
            }

            match &*projects.read() {
                None => rsx! {
                    div {
                        class: "sidebar-skeleton",
                        for i in 0..3 {
                            div { key: "{i}", class: "skeleton-line" }
                        }
                    }
                },
                Some(Err(e)) => rsx! {
                    p {
                        class: "sidebar-error",
                        {e.user_message("Failed to load projects")}
                    }
                },
                Some(Ok(list)) if list.is_empty() => rsx! {
                    div {
                        class: "sidebar-empty",
                        p { "No projects yet" }
                        Link { to: "/create-project", "Create your first project" }
                    }
                },
                Some(Ok(list)) => rsx! {
                    ul {
                        class: "sidebar-list",
                        for project in list.iter() {
                            li {
                                key: "{project.id}",
                                Link {
                                    to: format!("/dashboard/{}", project.id),
                                    span { class: "sidebar-project-name", "{project.name}" }
                                    span {
                                        class: "sidebar-project-date",
                                        {format_date(project.created_at, DateStyle::Short)}
                                    }
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}
