//! Page footer
//!
//! Also hosts the discreet entry point to the admin console.

use crate::app::AppState;
use chrono::{Datelike, Utc};
use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    let mut app_state = use_context::<AppState>();
    let year = Utc::now().year();

    rsx! {
        footer { class: "border-t border-[var(--border-subtle)] py-10 px-6",

            div { class: "max-w-7xl mx-auto flex flex-col md:flex-row items-center justify-between gap-4",

                p { class: "text-xs text-[var(--text-tertiary)]",
                    "© {year} Sterling. All rights reserved."
                }

                button {
                    class: "text-xs text-[var(--text-tertiary)] hover:text-[var(--text-secondary)] transition-colors px-3 py-1.5 rounded-lg border border-[var(--border-subtle)]",
                    onclick: move |_| app_state.admin_open.set(true),
                    "Console"
                }
            }
        }
    }
}
