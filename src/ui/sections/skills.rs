//! Skills section
//!
//! Renders each rating as a scaled bar. Levels above `full_mark` are clamped
//! here at the display layer only; the store keeps whatever it was given.

use crate::app::AppState;
use dioxus::prelude::*;

#[component]
pub fn Skills() -> Element {
    let app_state = use_context::<AppState>();
    let content = app_state.content.read();

    rsx! {
        div { class: "w-full max-w-4xl mx-auto",

            div { class: "text-center mb-16",
                span { class: "text-[var(--accent-primary)] font-bold tracking-[0.3em] uppercase text-xs mb-4 block",
                    "Proficiency"
                }
                h2 { class: "text-3xl md:text-5xl font-serif font-bold mb-4",
                    "Technical Landscape"
                }
                p { class: "text-[var(--text-secondary)] max-w-lg mx-auto",
                    "A quantitative breakdown of engineering capability and architectural command."
                }
            }

            div { class: "glass-card rounded-3xl p-8 space-y-6",
                for (idx, skill) in content.skills().iter().enumerate() {
                    {
                        let pct = (skill.level * 100 / skill.full_mark.max(1)).min(100);
                        rsx! {
                            div { key: "{idx}",
                                div { class: "flex items-center justify-between mb-2",
                                    span { class: "text-sm font-medium", "{skill.subject}" }
                                    span { class: "text-xs font-mono text-[var(--accent-primary)] px-2 py-0.5 rounded",
                                        style: "background: var(--accent-primary-10);",
                                        "{skill.level}%"
                                    }
                                }
                                div { class: "h-2 rounded-full overflow-hidden",
                                    style: "background: var(--bg-elevated);",
                                    div {
                                        class: "h-full rounded-full transition-all",
                                        style: "width: {pct}%; background: var(--accent-primary);",
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
