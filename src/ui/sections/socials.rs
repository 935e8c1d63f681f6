//! Socials section
//!
//! Static links; not part of the editable content store.

use dioxus::prelude::*;

const SOCIAL_LINKS: [(&str, &str, &str, &str); 5] = [
    ("Instagram", "https://instagram.com/sterling.studio", "Media", "@sterling.studio"),
    ("X (Twitter)", "https://x.com/sterlingstudio", "Updates", "@sterlingstudio"),
    ("YouTube", "https://youtube.com/@sterlingstudio", "Content", "Sterling Channel"),
    ("LinkedIn", "https://linkedin.com/in/alex-sterling", "Network", "Alex Sterling"),
    ("GitHub", "https://github.com/alexsterling", "Code", "alexsterling"),
];

#[component]
pub fn Socials() -> Element {
    rsx! {
        div { class: "w-full max-w-5xl mx-auto text-center",

            span { class: "text-[var(--accent-primary)] font-bold tracking-[0.3em] uppercase text-xs mb-4 block",
                "Connect"
            }
            h2 { class: "text-4xl md:text-5xl font-serif font-bold mb-12",
                "Everywhere That Matters"
            }

            div { class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-5 gap-4",
                for (platform, url, label, username) in SOCIAL_LINKS {
                    a {
                        key: "{platform}",
                        href: "{url}",
                        target: "_blank",
                        class: "glass-card rounded-2xl p-6 hover:border-[var(--border-medium)] transition-colors group",

                        div { class: "text-[10px] uppercase tracking-widest text-[var(--text-tertiary)] font-bold mb-2",
                            "{label}"
                        }
                        div { class: "text-sm font-semibold mb-1 group-hover:text-[var(--accent-primary)] transition-colors",
                            "{platform}"
                        }
                        div { class: "text-xs text-[var(--text-tertiary)]", "{username}" }
                    }
                }
            }
        }
    }
}
