//! Ventures section

use crate::app::AppState;
use dioxus::prelude::*;

#[component]
pub fn Ventures() -> Element {
    let app_state = use_context::<AppState>();
    let content = app_state.content.read();

    rsx! {
        div { class: "w-full max-w-7xl mx-auto",

            div { class: "mb-16",
                span { class: "text-[var(--accent-primary)] font-bold tracking-[0.3em] uppercase text-xs mb-4 block",
                    "The Ecosystem"
                }
                h2 { class: "text-5xl md:text-7xl font-serif font-bold leading-none tracking-tight",
                    "Ventures."
                }
            }

            div { class: "grid grid-cols-1 lg:grid-cols-3 gap-8",
                for venture in content.ventures() {
                    div {
                        key: "{venture.id}",
                        class: "glass-card rounded-3xl p-8 flex flex-col hover:border-[var(--border-medium)] transition-colors",

                        div { class: "flex items-center gap-4 mb-6",
                            img {
                                src: "{venture.logo_url}",
                                alt: "{venture.name}",
                                class: "w-14 h-14 rounded-2xl object-cover",
                            }
                            div {
                                h3 { class: "text-lg font-semibold", "{venture.name}" }
                                span { class: "text-xs text-[var(--text-tertiary)]", "{venture.role}" }
                            }
                        }

                        span { class: "self-start px-3 py-1 rounded-full text-[10px] font-bold uppercase tracking-wider mb-4 text-[var(--accent-primary)]",
                            style: "background: var(--accent-primary-10);",
                            "{venture.status}"
                        }

                        p { class: "text-sm text-[var(--text-secondary)] leading-relaxed mb-6 flex-1",
                            "{venture.long_description}"
                        }

                        div { class: "grid grid-cols-3 gap-3 mb-6",
                            for (idx, stat) in venture.stats.iter().enumerate() {
                                div {
                                    key: "{idx}",
                                    class: "p-3 rounded-xl border border-[var(--border-subtle)] text-center",
                                    div { class: "text-xs font-semibold mb-1", "{stat.value}" }
                                    div { class: "text-[10px] uppercase tracking-wider text-[var(--text-tertiary)]",
                                        "{stat.label}"
                                    }
                                }
                            }
                        }

                        if let Some(contact) = &venture.contact {
                            div { class: "pt-4 border-t border-[var(--border-subtle)] space-y-1 text-xs text-[var(--text-tertiary)]",
                                div { "{contact.email}" }
                                div { "{contact.location} · {contact.handle}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
