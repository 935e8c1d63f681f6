//! Services section

use crate::app::AppState;
use crate::ui::icons::render_icon;
use dioxus::prelude::*;

#[component]
pub fn Services() -> Element {
    let app_state = use_context::<AppState>();
    let content = app_state.content.read();

    rsx! {
        div { class: "w-full max-w-6xl mx-auto",

            div { class: "mb-16 text-center",
                span { class: "text-[var(--accent-primary)] font-bold tracking-[0.3em] uppercase text-xs mb-4 block",
                    "Capabilities"
                }
                h2 { class: "text-4xl md:text-5xl font-serif font-bold",
                    "Engineered for Growth"
                }
            }

            div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
                for (idx, service) in content.services().iter().enumerate() {
                    div {
                        key: "{idx}",
                        class: "glass-card p-8 rounded-3xl hover:border-[var(--border-medium)] transition-colors",

                        div { class: "w-12 h-12 rounded-2xl flex items-center justify-center mb-6 text-[var(--accent-primary)]",
                            style: "background: var(--accent-primary-10);",
                            {render_icon(&service.icon)}
                        }
                        h3 { class: "text-lg font-semibold mb-3", "{service.title}" }
                        p { class: "text-sm text-[var(--text-secondary)] leading-relaxed",
                            "{service.description}"
                        }
                    }
                }
            }
        }
    }
}
