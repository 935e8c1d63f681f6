//! About section

use dioxus::prelude::*;

#[component]
pub fn About() -> Element {
    rsx! {
        div { class: "max-w-4xl mx-auto",

            span { class: "text-[var(--accent-primary)] font-bold tracking-[0.3em] uppercase text-xs mb-4 block",
                "About"
            }
            h2 { class: "text-4xl md:text-6xl font-serif font-bold mb-8",
                "The bridge between boardroom and build."
            }

            div { class: "grid md:grid-cols-2 gap-8 text-[var(--text-secondary)] leading-relaxed",
                p {
                    "A decade spent moving between executive management and hands-on engineering: \
                     structuring deals in the morning, shipping production systems in the afternoon. \
                     The portfolio below is the overlap of those two worlds."
                }
                p {
                    "Today that work runs through a small group of ventures: an infrastructure \
                     practice, an incubation lab and a holding company that keeps the whole \
                     ecosystem pointed in one direction."
                }
            }
        }
    }
}
