//! Project editor tab

use crate::app::AppState;
use crate::types::content::{Project, ProjectDraft, ProjectPatch};
use dioxus::prelude::*;

/// Seed used by the "Add Project" button.
fn placeholder_draft() -> ProjectDraft {
    ProjectDraft {
        title: "New Project".into(),
        description: "Description pending...".into(),
        tags: vec!["New".into()],
        image_url: "https://picsum.photos/600/400".into(),
        link: "#".into(),
        category: "General".into(),
        client: Some("Internal".into()),
        year: Some("2025".into()),
        role: Some("Developer".into()),
        challenge: Some("Draft challenge...".into()),
        solution: Some("Draft solution...".into()),
    }
}

#[component]
pub fn ProjectsEditor() -> Element {
    let app_state = use_context::<AppState>();
    let mut content = app_state.content;
    let projects: Vec<Project> = content.read().projects().to_vec();

    rsx! {
        div { class: "space-y-6 pb-12",

            div { class: "flex items-center justify-between mb-2",
                div {
                    h2 { class: "text-2xl font-bold mb-1", "Projects" }
                    p { class: "text-xs text-[var(--text-tertiary)]", "Manage your portfolio content" }
                }
                button {
                    class: "btn-primary text-sm",
                    onclick: move |_| {
                        content.write().add_project(placeholder_draft());
                    },
                    "+ Add Project"
                }
            }

            for project in projects {
                ProjectCard { key: "{project.id}", project: project.clone() }
            }
        }
    }
}

#[component]
fn ProjectCard(project: Project) -> Element {
    let app_state = use_context::<AppState>();
    let mut content = app_state.content;
    let id = project.id;

    rsx! {
        div { class: "glass-card rounded-3xl p-6",

            div { class: "flex items-center justify-between mb-5",
                div { class: "flex items-center gap-3",
                    span { class: "w-9 h-9 rounded-full flex items-center justify-center text-xs font-mono text-[var(--text-tertiary)] border border-[var(--border-subtle)]",
                        "#{id}"
                    }
                    h3 { class: "font-semibold", "{project.title}" }
                }
                button {
                    class: "text-xs text-[var(--text-tertiary)] hover:text-[var(--error)] transition-colors px-3 py-1.5 rounded-lg",
                    onclick: move |_| content.write().delete_project(id),
                    "Delete"
                }
            }

            div { class: "grid grid-cols-1 md:grid-cols-2 gap-5",
                div { class: "space-y-4",
                    EditorField { label: "Title", value: project.title.clone(),
                        on_change: move |v| content.write().update_project(id, ProjectPatch { title: Some(v), ..Default::default() }),
                    }
                    EditorField { label: "Category", value: project.category.clone(),
                        on_change: move |v| content.write().update_project(id, ProjectPatch { category: Some(v), ..Default::default() }),
                    }
                    EditorField { label: "Client", value: project.client.clone().unwrap_or_default(),
                        on_change: move |v| content.write().update_project(id, ProjectPatch { client: Some(v), ..Default::default() }),
                    }
                    EditorArea { label: "Overview Description", value: project.description.clone(), rows: 4,
                        on_change: move |v| content.write().update_project(id, ProjectPatch { description: Some(v), ..Default::default() }),
                    }
                    EditorArea { label: "Challenge", value: project.challenge.clone().unwrap_or_default(), rows: 3,
                        on_change: move |v| content.write().update_project(id, ProjectPatch { challenge: Some(v), ..Default::default() }),
                    }
                }
                div { class: "space-y-4",
                    EditorField { label: "Image URL", value: project.image_url.clone(),
                        on_change: move |v| content.write().update_project(id, ProjectPatch { image_url: Some(v), ..Default::default() }),
                    }
                    EditorField { label: "Tags (comma separated)", value: project.tags.join(", "),
                        on_change: move |v: String| {
                            let tags = v.split(',').map(|s| s.trim().to_string()).collect();
                            content.write().update_project(id, ProjectPatch { tags: Some(tags), ..Default::default() });
                        },
                    }
                    EditorField { label: "Link", value: project.link.clone(),
                        on_change: move |v| content.write().update_project(id, ProjectPatch { link: Some(v), ..Default::default() }),
                    }
                    EditorField { label: "Year", value: project.year.clone().unwrap_or_default(),
                        on_change: move |v| content.write().update_project(id, ProjectPatch { year: Some(v), ..Default::default() }),
                    }
                    EditorArea { label: "Solution", value: project.solution.clone().unwrap_or_default(), rows: 3,
                        on_change: move |v| content.write().update_project(id, ProjectPatch { solution: Some(v), ..Default::default() }),
                    }
                }
            }
        }
    }
}

/// Labelled single-line input bound to a store mutation.
#[component]
pub fn EditorField(label: String, value: String, on_change: EventHandler<String>) -> Element {
    rsx! {
        div { class: "space-y-1.5",
            label { class: "text-[10px] uppercase text-[var(--text-tertiary)] font-bold tracking-wider",
                "{label}"
            }
            input {
                value: "{value}",
                class: "w-full rounded-xl p-3 text-sm outline-none border border-[var(--border-subtle)] focus:border-[var(--accent-primary)] transition-colors",
                style: "background: var(--bg-elevated);",
                oninput: move |evt| on_change.call(evt.value()),
            }
        }
    }
}

/// Labelled multi-line input bound to a store mutation.
#[component]
pub fn EditorArea(label: String, value: String, rows: u32, on_change: EventHandler<String>) -> Element {
    rsx! {
        div { class: "space-y-1.5",
            label { class: "text-[10px] uppercase text-[var(--text-tertiary)] font-bold tracking-wider",
                "{label}"
            }
            textarea {
                value: "{value}",
                rows: "{rows}",
                class: "w-full rounded-xl p-3 text-sm outline-none resize-none border border-[var(--border-subtle)] focus:border-[var(--accent-primary)] transition-colors",
                style: "background: var(--bg-elevated);",
                oninput: move |evt| on_change.call(evt.value()),
            }
        }
    }
}
