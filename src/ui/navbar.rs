//! Top navigation bar

use dioxus::prelude::*;

/// Anchor targets for the section stack.
const NAV_ITEMS: [(&str, &str); 8] = [
    ("Home", "#home"),
    ("Ventures", "#ventures"),
    ("About", "#about"),
    ("Services", "#services"),
    ("Capabilities", "#skills"),
    ("Projects", "#projects"),
    ("Reviews", "#testimonials"),
    ("Contact", "#contact"),
];

#[component]
pub fn Navbar() -> Element {
    rsx! {
        nav { class: "fixed top-0 inset-x-0 z-40 backdrop-blur-xl border-b border-[var(--border-subtle)]",
            style: "background: rgba(10,10,10,0.72);",

            div { class: "max-w-7xl mx-auto px-6 h-16 flex items-center justify-between",

                a { href: "#home", class: "font-serif font-bold text-lg tracking-wide text-[var(--text-primary)]",
                    "Sterling"
                }

                div { class: "hidden md:flex items-center gap-1",
                    for (label, href) in NAV_ITEMS {
                        a {
                            key: "{href}",
                            href: "{href}",
                            class: "px-3 py-2 rounded-lg text-xs font-medium uppercase tracking-wider text-[var(--text-tertiary)] hover:text-[var(--text-primary)] transition-colors",
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}
