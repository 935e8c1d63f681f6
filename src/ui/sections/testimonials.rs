//! Testimonials section

use crate::app::AppState;
use dioxus::prelude::*;

#[component]
pub fn Testimonials() -> Element {
    let app_state = use_context::<AppState>();
    let content = app_state.content.read();

    rsx! {
        div { class: "w-full max-w-6xl mx-auto",

            div { class: "text-center mb-16",
                span { class: "text-[var(--accent-primary)] font-bold tracking-[0.3em] uppercase text-xs mb-4 block",
                    "Reviews"
                }
                h2 { class: "text-4xl md:text-5xl font-serif font-bold",
                    "Word on the Street"
                }
            }

            div { class: "grid grid-cols-1 md:grid-cols-3 gap-6",
                for (idx, testimonial) in content.testimonials().iter().enumerate() {
                    div {
                        key: "{idx}",
                        class: "glass-card rounded-3xl p-8",

                        p { class: "text-sm text-[var(--text-secondary)] leading-relaxed mb-6",
                            "\u{201c}{testimonial.text}\u{201d}"
                        }
                        div {
                            div { class: "text-sm font-semibold", "{testimonial.name}" }
                            div { class: "text-xs text-[var(--text-tertiary)] mt-0.5", "{testimonial.role}" }
                        }
                    }
                }
            }
        }
    }
}
