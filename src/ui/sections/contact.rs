//! Contact section

use dioxus::prelude::*;

#[component]
pub fn Contact() -> Element {
    rsx! {
        div { class: "w-full max-w-3xl mx-auto text-center",

            span { class: "text-[var(--accent-primary)] font-bold tracking-[0.3em] uppercase text-xs mb-4 block",
                "Contact"
            }
            h2 { class: "text-4xl md:text-6xl font-serif font-bold mb-6",
                "Let's build something."
            }
            p { class: "text-[var(--text-secondary)] mb-10",
                "For engagements, partnerships or a straight answer on feasibility, it's one email away."
            }

            a {
                href: "mailto:office@sterling.studio",
                class: "btn-primary inline-block",
                "office@sterling.studio"
            }
        }
    }
}
