//! Chat message bubble

use crate::types::message::{ChatMessage, Sender};
use dioxus::prelude::*;

#[component]
pub fn ChatBubble(message: ChatMessage) -> Element {
    let (row, bubble) = match message.sender {
        Sender::User => (
            "flex justify-end",
            "max-w-[80%] px-3 py-2 rounded-2xl rounded-br-sm text-sm leading-relaxed text-white",
        ),
        Sender::Bot => (
            "flex justify-start",
            "max-w-[80%] px-3 py-2 rounded-2xl rounded-bl-sm text-sm leading-relaxed text-[var(--text-secondary)]",
        ),
    };
    let bubble_style = match message.sender {
        Sender::User => "background: var(--accent-primary);",
        Sender::Bot => "background: var(--bg-elevated);",
    };

    rsx! {
        div { class: "{row}",
            div { class: "{bubble}", style: "{bubble_style}", "{message.text}" }
        }
    }
}
