//! Projects section
//!
//! Category chips are derived from the live collection; the detail overlay
//! shows the optional case-study fields when present.

use crate::app::AppState;
use crate::types::content::Project;
use dioxus::prelude::*;

#[component]
pub fn Projects() -> Element {
    let app_state = use_context::<AppState>();
    let mut active_category = use_signal(|| "All".to_string());
    let mut active_project = use_signal(|| None::<u32>);

    let content = app_state.content.read();
    let projects = content.projects();

    // "All" plus distinct categories in first-seen order.
    let mut categories: Vec<String> = vec!["All".to_string()];
    for project in projects {
        if !categories.contains(&project.category) {
            categories.push(project.category.clone());
        }
    }

    let selected = active_category();
    let filtered: Vec<Project> = projects
        .iter()
        .filter(|p| selected == "All" || p.category == selected)
        .cloned()
        .collect();
    let detail: Option<Project> =
        active_project().and_then(|id| projects.iter().find(|p| p.id == id).cloned());

    rsx! {
        div { class: "w-full max-w-7xl mx-auto",

            div { class: "mb-16 flex flex-col lg:flex-row justify-between items-start lg:items-end gap-8",
                div {
                    span { class: "text-[var(--accent-primary)] font-bold tracking-[0.3em] uppercase text-xs mb-4 block",
                        "Selected Works"
                    }
                    h2 { class: "text-5xl md:text-7xl font-serif font-bold leading-none tracking-tight",
                        "Explore Innovation."
                    }
                }

                div { class: "flex flex-wrap gap-2",
                    for category in categories {
                        button {
                            key: "{category}",
                            class: if category == selected {
                                "px-5 py-2.5 rounded-full text-xs font-bold uppercase tracking-wider border transition-all bg-[var(--text-primary)] text-[var(--bg-base)] border-[var(--text-primary)]"
                            } else {
                                "px-5 py-2.5 rounded-full text-xs font-bold uppercase tracking-wider border transition-all text-[var(--text-tertiary)] border-[var(--border-subtle)] hover:border-[var(--border-medium)] hover:text-[var(--text-primary)]"
                            },
                            onclick: {
                                let category = category.clone();
                                move |_| active_category.set(category.clone())
                            },
                            "{category}"
                        }
                    }
                }
            }

            div { class: "grid grid-cols-1 md:grid-cols-2 gap-8",
                for project in filtered {
                    div {
                        key: "{project.id}",
                        class: "glass-card rounded-3xl overflow-hidden group hover:border-[var(--border-medium)] transition-colors",

                        div { class: "h-56 overflow-hidden",
                            style: "background: var(--bg-elevated);",
                            img {
                                src: "{project.image_url}",
                                alt: "{project.title}",
                                class: "w-full h-full object-cover group-hover:scale-105 transition-transform duration-500",
                            }
                        }

                        div { class: "p-8",
                            div { class: "flex items-center justify-between mb-3",
                                span { class: "text-[10px] uppercase tracking-widest text-[var(--accent-primary)] font-bold",
                                    "{project.category}"
                                }
                                if let Some(year) = &project.year {
                                    span { class: "text-xs font-mono text-[var(--text-tertiary)]", "{year}" }
                                }
                            }

                            h3 { class: "text-xl font-semibold mb-2", "{project.title}" }
                            p { class: "text-sm text-[var(--text-secondary)] leading-relaxed mb-5",
                                "{project.description}"
                            }

                            div { class: "flex flex-wrap gap-2 mb-6",
                                for tag in &project.tags {
                                    span {
                                        key: "{tag}",
                                        class: "px-2.5 py-1 rounded-md text-[11px] text-[var(--text-tertiary)] border border-[var(--border-subtle)]",
                                        "{tag}"
                                    }
                                }
                            }

                            div { class: "flex items-center gap-4",
                                button {
                                    class: "text-xs font-bold uppercase tracking-wider text-[var(--accent-primary)] hover:opacity-80 transition-opacity",
                                    onclick: {
                                        let id = project.id;
                                        move |_| active_project.set(Some(id))
                                    },
                                    "Case Study"
                                }
                                if !project.link.is_empty() && project.link != "#" {
                                    a {
                                        href: "{project.link}",
                                        class: "text-xs font-bold uppercase tracking-wider text-[var(--text-tertiary)] hover:text-[var(--text-primary)] transition-colors",
                                        "Visit ↗"
                                    }
                                }
                            }
                        }
                    }
                }
            }

            if let Some(project) = detail {
                ProjectDetail {
                    project,
                    on_close: move |_| active_project.set(None),
                }
            }
        }
    }
}

#[component]
fn ProjectDetail(project: Project, on_close: EventHandler<()>) -> Element {
    rsx! {
        div { class: "fixed inset-0 z-50 flex items-center justify-center p-4 bg-black/80 backdrop-blur-xl",
            onclick: move |_| on_close.call(()),

            div {
                class: "w-full max-w-2xl glass-strong rounded-3xl p-10 max-h-[85vh] overflow-y-auto",
                onclick: move |evt| evt.stop_propagation(),

                div { class: "flex items-start justify-between mb-6",
                    div {
                        span { class: "text-[10px] uppercase tracking-widest text-[var(--accent-primary)] font-bold block mb-2",
                            "{project.category}"
                        }
                        h3 { class: "text-3xl font-serif font-bold", "{project.title}" }
                    }
                    button {
                        class: "text-[var(--text-tertiary)] hover:text-[var(--text-primary)] transition-colors text-xl leading-none",
                        onclick: move |_| on_close.call(()),
                        "✕"
                    }
                }

                p { class: "text-[var(--text-secondary)] leading-relaxed mb-8", "{project.description}" }

                div { class: "grid grid-cols-2 md:grid-cols-3 gap-4 mb-8",
                    if let Some(client) = &project.client {
                        DetailField { label: "Client", value: client.clone() }
                    }
                    if let Some(year) = &project.year {
                        DetailField { label: "Year", value: year.clone() }
                    }
                    if let Some(role) = &project.role {
                        DetailField { label: "Role", value: role.clone() }
                    }
                }

                if let Some(challenge) = &project.challenge {
                    div { class: "mb-6",
                        h4 { class: "text-[10px] uppercase tracking-widest text-[var(--text-tertiary)] font-bold mb-2",
                            "Challenge"
                        }
                        p { class: "text-sm text-[var(--text-secondary)] leading-relaxed", "{challenge}" }
                    }
                }
                if let Some(solution) = &project.solution {
                    div {
                        h4 { class: "text-[10px] uppercase tracking-widest text-[var(--text-tertiary)] font-bold mb-2",
                            "Solution"
                        }
                        p { class: "text-sm text-[var(--text-secondary)] leading-relaxed", "{solution}" }
                    }
                }
            }
        }
    }
}

#[component]
fn DetailField(label: String, value: String) -> Element {
    rsx! {
        div { class: "p-3 rounded-xl border border-[var(--border-subtle)]",
            span { class: "text-[10px] uppercase tracking-widest text-[var(--text-tertiary)] font-bold block mb-1",
                "{label}"
            }
            span { class: "text-sm", "{value}" }
        }
    }
}
