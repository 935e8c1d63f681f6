//! Hero section

use dioxus::prelude::*;

#[component]
pub fn Hero() -> Element {
    rsx! {
        div { class: "max-w-5xl mx-auto text-center",

            span { class: "text-[var(--accent-primary)] font-bold tracking-[0.3em] uppercase text-xs mb-6 block",
                "Design · Strategy · Engineering"
            }

            h1 { class: "text-6xl md:text-8xl font-serif font-bold leading-none tracking-tight mb-8",
                "Alex Sterling"
            }

            p { class: "text-lg text-[var(--text-secondary)] max-w-2xl mx-auto mb-12",
                "Operator and engineer building ventures at the intersection of capital, commerce and code."
            }

            div { class: "flex items-center justify-center gap-4",
                a {
                    href: "#projects",
                    class: "btn-primary",
                    "View Work"
                }
                a {
                    href: "#contact",
                    class: "btn-ghost",
                    "Get in Touch"
                }
            }
        }
    }
}
