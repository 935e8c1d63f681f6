#![allow(non_snake_case)]

//! Admin console
//!
//! A passphrase-gated overlay that edits the content store. The gate only
//! withholds the editor UI; every mutation still routes through the store.

pub mod projects;
pub mod services;
pub mod skills;
pub mod testimonials;

use crate::app::AppState;
use crate::ui::admin::projects::ProjectsEditor;
use crate::ui::admin::services::ServicesEditor;
use crate::ui::admin::skills::SkillsEditor;
use crate::ui::admin::testimonials::TestimonialsEditor;
use dioxus::prelude::*;

const DEFAULT_ADMIN_KEY: &str = "sterling";

/// Passphrase for the console. Overridable so a deployment doesn't ship the
/// default.
fn admin_key() -> String {
    std::env::var("STERLING_ADMIN_KEY").unwrap_or_else(|_| DEFAULT_ADMIN_KEY.to_string())
}

#[derive(PartialEq, Clone, Copy)]
enum AdminTab {
    Projects,
    Services,
    Skills,
    Testimonials,
}

#[component]
pub fn AdminPanel() -> Element {
    let mut app_state = use_context::<AppState>();
    let authenticated = use_signal(|| false);
    let active_tab = use_signal(|| AdminTab::Projects);
    let mut passphrase = use_signal(String::new);
    let rejected = use_signal(|| false);

    fn try_login(
        mut passphrase: Signal<String>,
        mut authenticated: Signal<bool>,
        mut rejected: Signal<bool>,
    ) {
        if passphrase() == admin_key() {
            authenticated.set(true);
            rejected.set(false);
        } else {
            // Wrong key: show the notice, keep the form open for retry.
            rejected.set(true);
        }
        passphrase.set(String::new());
    }

    rsx! {
        div { class: "fixed inset-0 z-50 flex items-center justify-center bg-black/90 backdrop-blur-2xl p-4",

            div { class: "w-full max-w-6xl h-[92vh] glass-strong rounded-3xl flex overflow-hidden relative",

                button {
                    class: "absolute top-5 right-5 z-10 w-9 h-9 rounded-full flex items-center justify-center text-[var(--text-tertiary)] hover:text-[var(--text-primary)] border border-[var(--border-subtle)] transition-colors",
                    onclick: move |_| app_state.admin_open.set(false),
                    "✕"
                }

                if !authenticated() {
                    div { class: "w-full h-full flex flex-col items-center justify-center p-8",

                        h2 { class: "text-3xl font-serif font-bold mb-2",
                            "Sterling "
                            span { class: "text-[var(--text-tertiary)]", "Console" }
                        }
                        p { class: "text-[var(--text-tertiary)] mb-10 text-xs uppercase tracking-widest",
                            "Restricted access"
                        }

                        div { class: "w-full max-w-xs space-y-4",
                            input {
                                r#type: "password",
                                value: "{passphrase}",
                                placeholder: "Passphrase...",
                                autofocus: true,
                                class: "w-full rounded-xl p-4 text-center outline-none font-mono border border-[var(--border-subtle)] focus:border-[var(--accent-primary)] transition-colors",
                                style: "background: var(--bg-elevated);",
                                oninput: move |evt| passphrase.set(evt.value()),
                                onkeydown: move |evt| {
                                    if evt.key() == Key::Enter {
                                        try_login(passphrase, authenticated, rejected);
                                    }
                                },
                            }
                            button {
                                class: "btn-primary w-full",
                                onclick: move |_| try_login(passphrase, authenticated, rejected),
                                "Authenticate"
                            }
                            if rejected() {
                                p { class: "text-center text-sm text-[var(--error)]",
                                    "Access denied: invalid passphrase."
                                }
                            }
                        }
                    }
                } else {
                    Dashboard { active_tab }
                }
            }
        }
    }
}

#[component]
fn Dashboard(active_tab: Signal<AdminTab>) -> Element {
    rsx! {
        div { class: "w-60 flex-none border-r border-[var(--border-subtle)] flex flex-col p-6",
            style: "background: rgba(0,0,0,0.35);",

            span { class: "font-bold tracking-wider text-sm mb-10 px-2", "ADMIN" }

            nav { class: "flex-1 space-y-1",
                SidebarButton { tab: AdminTab::Projects, active_tab, label: "Projects" }
                SidebarButton { tab: AdminTab::Services, active_tab, label: "Services" }
                SidebarButton { tab: AdminTab::Skills, active_tab, label: "Skills" }
                SidebarButton { tab: AdminTab::Testimonials, active_tab, label: "Reviews" }
            }

            ResetControl {}
        }

        div { class: "flex-1 overflow-y-auto p-8",
            match active_tab() {
                AdminTab::Projects => rsx! { ProjectsEditor {} },
                AdminTab::Services => rsx! { ServicesEditor {} },
                AdminTab::Skills => rsx! { SkillsEditor {} },
                AdminTab::Testimonials => rsx! { TestimonialsEditor {} },
            }
        }
    }
}

#[component]
fn SidebarButton(tab: AdminTab, active_tab: Signal<AdminTab>, label: String) -> Element {
    let mut active_tab = active_tab;
    let classes = if active_tab() == tab {
        "w-full text-left px-4 py-3 rounded-xl text-sm font-medium transition-all text-[var(--bg-base)] bg-[var(--text-primary)]"
    } else {
        "w-full text-left px-4 py-3 rounded-xl text-sm font-medium transition-all text-[var(--text-tertiary)] hover:text-[var(--text-primary)]"
    };

    rsx! {
        button {
            class: "{classes}",
            onclick: move |_| active_tab.set(tab),
            "{label}"
        }
    }
}

/// Factory reset with an explicit in-panel confirmation step.
#[component]
fn ResetControl() -> Element {
    let mut app_state = use_context::<AppState>();
    let mut confirming = use_signal(|| false);

    rsx! {
        div { class: "pt-6 border-t border-[var(--border-subtle)]",
            if confirming() {
                p { class: "text-xs text-[var(--text-secondary)] mb-3",
                    "This wipes every edit and restores the defaults."
                }
                div { class: "flex gap-2",
                    button {
                        class: "flex-1 px-3 py-2 rounded-lg text-xs font-bold text-white",
                        style: "background: var(--error);",
                        onclick: move |_| {
                            app_state.content.write().reset_to_defaults();
                            confirming.set(false);
                        },
                        "Wipe"
                    }
                    button {
                        class: "flex-1 px-3 py-2 rounded-lg text-xs border border-[var(--border-subtle)] text-[var(--text-secondary)]",
                        onclick: move |_| confirming.set(false),
                        "Cancel"
                    }
                }
            } else {
                button {
                    class: "w-full px-4 py-3 rounded-xl text-sm text-[var(--error)] hover:bg-[var(--error-10)] transition-colors text-left",
                    onclick: move |_| confirming.set(true),
                    "Factory Reset"
                }
            }
        }
    }
}
