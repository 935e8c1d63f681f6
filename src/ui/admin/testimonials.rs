//! Testimonial editor tab

use crate::app::AppState;
use crate::types::content::{Testimonial, TestimonialPatch};
use crate::ui::admin::projects::{EditorArea, EditorField};
use dioxus::prelude::*;

#[component]
pub fn TestimonialsEditor() -> Element {
    let app_state = use_context::<AppState>();
    let content = app_state.content;
    let testimonials: Vec<Testimonial> = content.read().testimonials().to_vec();

    rsx! {
        div { class: "space-y-6 pb-12",

            div { class: "mb-2",
                h2 { class: "text-2xl font-bold mb-1", "Reviews" }
                p { class: "text-xs text-[var(--text-tertiary)]", "Manage your portfolio content" }
            }

            for (idx, testimonial) in testimonials.into_iter().enumerate() {
                TestimonialCard { key: "{idx}", index: idx, testimonial }
            }
        }
    }
}

#[component]
fn TestimonialCard(index: usize, testimonial: Testimonial) -> Element {
    let app_state = use_context::<AppState>();
    let mut content = app_state.content;

    rsx! {
        div { class: "glass-card rounded-3xl p-6",
            div { class: "grid grid-cols-1 md:grid-cols-2 gap-5",
                EditorField { label: "Name", value: testimonial.name.clone(),
                    on_change: move |v| content.write().update_testimonial(index, TestimonialPatch { name: Some(v), ..Default::default() }),
                }
                EditorField { label: "Role / Company", value: testimonial.role.clone(),
                    on_change: move |v| content.write().update_testimonial(index, TestimonialPatch { role: Some(v), ..Default::default() }),
                }
                div { class: "md:col-span-2",
                    EditorArea { label: "Quote", value: testimonial.text.clone(), rows: 3,
                        on_change: move |v| content.write().update_testimonial(index, TestimonialPatch { text: Some(v), ..Default::default() }),
                    }
                }
            }
        }
    }
}
