//! Skill editor tab

use crate::app::AppState;
use crate::types::content::{SkillPatch, SkillRating};
use crate::ui::admin::projects::EditorField;
use dioxus::prelude::*;

#[component]
pub fn SkillsEditor() -> Element {
    let app_state = use_context::<AppState>();
    let content = app_state.content;
    let skills: Vec<SkillRating> = content.read().skills().to_vec();

    rsx! {
        div { class: "pb-12",

            div { class: "mb-6",
                h2 { class: "text-2xl font-bold mb-1", "Skills" }
                p { class: "text-xs text-[var(--text-tertiary)]", "Manage your portfolio content" }
            }

            div { class: "grid grid-cols-1 md:grid-cols-2 gap-5",
                for (idx, skill) in skills.into_iter().enumerate() {
                    SkillCard { key: "{idx}", index: idx, skill }
                }
            }
        }
    }
}

#[component]
fn SkillCard(index: usize, skill: SkillRating) -> Element {
    let app_state = use_context::<AppState>();
    let mut content = app_state.content;

    rsx! {
        div { class: "glass-card rounded-3xl p-6",

            div { class: "flex items-center justify-between mb-5",
                h3 { class: "font-semibold", "{skill.subject}" }
                span { class: "text-xs font-mono text-[var(--accent-primary)] px-2 py-1 rounded",
                    style: "background: var(--accent-primary-10);",
                    "{skill.level}%"
                }
            }

            div { class: "space-y-4",
                EditorField { label: "Subject Name", value: skill.subject.clone(),
                    on_change: move |v| content.write().update_skill(index, SkillPatch { subject: Some(v), ..Default::default() }),
                }
                div { class: "space-y-1.5",
                    label { class: "text-[10px] uppercase text-[var(--text-tertiary)] font-bold tracking-wider",
                        "Proficiency Level"
                    }
                    input {
                        r#type: "range",
                        min: "0",
                        max: "100",
                        value: "{skill.level}",
                        class: "w-full cursor-pointer",
                        oninput: move |evt| {
                            if let Ok(level) = evt.value().parse::<u32>() {
                                content.write().update_skill(index, SkillPatch { level: Some(level), ..Default::default() });
                            }
                        },
                    }
                }
            }
        }
    }
}
