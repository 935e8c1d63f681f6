//! Service editor tab

use crate::app::AppState;
use crate::types::content::{Service, ServicePatch};
use crate::ui::admin::projects::{EditorArea, EditorField};
use crate::ui::icons::known_keys;
use dioxus::prelude::*;

#[component]
pub fn ServicesEditor() -> Element {
    let app_state = use_context::<AppState>();
    let content = app_state.content;
    let services: Vec<Service> = content.read().services().to_vec();
    let icon_hint = known_keys().join(", ");

    rsx! {
        div { class: "space-y-6 pb-12",

            div { class: "mb-2",
                h2 { class: "text-2xl font-bold mb-1", "Services" }
                p { class: "text-xs text-[var(--text-tertiary)]",
                    "Icon keys: {icon_hint}"
                }
            }

            for (idx, service) in services.into_iter().enumerate() {
                ServiceCard { key: "{idx}", index: idx, service }
            }
        }
    }
}

#[component]
fn ServiceCard(index: usize, service: Service) -> Element {
    let app_state = use_context::<AppState>();
    let mut content = app_state.content;

    rsx! {
        div { class: "glass-card rounded-3xl p-6",
            div { class: "grid grid-cols-1 md:grid-cols-2 gap-5",
                EditorField { label: "Title", value: service.title.clone(),
                    on_change: move |v| content.write().update_service(index, ServicePatch { title: Some(v), ..Default::default() }),
                }
                EditorField { label: "Icon Key", value: service.icon.clone(),
                    on_change: move |v| content.write().update_service(index, ServicePatch { icon: Some(v), ..Default::default() }),
                }
                div { class: "md:col-span-2",
                    EditorArea { label: "Description", value: service.description.clone(), rows: 2,
                        on_change: move |v| content.write().update_service(index, ServicePatch { description: Some(v), ..Default::default() }),
                    }
                }
            }
        }
    }
}
