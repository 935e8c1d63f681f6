//! UI components for Sterling
//!
//! This module contains all user interface components built with Dioxus.

pub mod admin;
pub mod chat;
pub mod footer;
pub mod icons;
pub mod navbar;
pub mod sections;

use crate::app::AppState;
use crate::ui::admin::AdminPanel;
use crate::ui::chat::ChatWidget;
use crate::ui::footer::Footer;
use crate::ui::navbar::Navbar;
use crate::ui::sections::{
    About, Contact, Hero, Projects, Services, Skills, Socials, Testimonials, Ventures,
};
use dioxus::prelude::*;

/// Full-page layout: the scrolling section stack plus the floating overlays.
#[component]
pub fn Layout() -> Element {
    let app_state = use_context::<AppState>();

    rsx! {
        div { class: "relative min-h-screen bg-[var(--bg-base)] text-[var(--text-primary)] overflow-x-hidden",

            Navbar {}

            main { class: "flex flex-col",
                section { id: "home", class: "min-h-screen flex items-center justify-center px-6 md:px-12 lg:px-24 pt-20",
                    Hero {}
                }
                section { id: "ventures", class: "min-h-screen flex items-center py-24 px-6 md:px-12 lg:px-24",
                    Ventures {}
                }
                section { id: "about", class: "min-h-screen flex items-center py-24 px-6 md:px-12 lg:px-24",
                    About {}
                }
                section { id: "services", class: "min-h-screen flex items-center py-24 px-6 md:px-12 lg:px-24",
                    Services {}
                }
                section { id: "skills", class: "flex items-center py-24 px-6 md:px-12 lg:px-24",
                    Skills {}
                }
                section { id: "projects", class: "min-h-screen flex flex-col justify-center py-24 px-6 md:px-12 lg:px-24",
                    Projects {}
                }
                section { id: "testimonials", class: "flex items-center py-24 px-6 md:px-12 lg:px-24",
                    Testimonials {}
                }
                section { id: "socials", class: "flex items-center justify-center py-24 px-6 md:px-12 lg:px-24",
                    Socials {}
                }
                section { id: "contact", class: "flex items-center py-24 px-6 md:px-12 lg:px-24",
                    Contact {}
                }
            }

            Footer {}
            ChatWidget {}

            if (app_state.admin_open)() {
                AdminPanel {}
            }
        }
    }
}
