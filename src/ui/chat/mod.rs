//! Floating assistant widget
//!
//! A toggleable chat panel that streams replies from the assistant client.
//! Deltas are appended to the active bot message as they arrive; a failed
//! call shows up as the client's fallback reply, never as an error state.

pub mod message;

use crate::app::AppState;
use crate::assistant::{ChatTurn, StreamEvent, TurnRole};
use crate::types::message::{ChatMessage, Sender};
use crate::ui::chat::message::ChatBubble;
use dioxus::prelude::*;

const WELCOME: &str =
    "Hi! I'm Sterling. Ask me anything about Alex's skills, projects, or experience.";

fn send_message(
    app_state: &AppState,
    mut messages: Signal<Vec<ChatMessage>>,
    mut input: Signal<String>,
    mut thinking: Signal<bool>,
) {
    let text = input().trim().to_string();
    if text.is_empty() || thinking() {
        return;
    }
    input.set(String::new());
    messages.write().push(ChatMessage::user(text));

    // Full visible conversation as context, oldest first.
    let turns: Vec<ChatTurn> = messages
        .read()
        .iter()
        .filter(|m| !m.text.is_empty())
        .map(|m| ChatTurn {
            role: match m.sender {
                Sender::User => TurnRole::User,
                Sender::Bot => TurnRole::Model,
            },
            text: m.text.clone(),
        })
        .collect();

    // Placeholder bot message the stream writes into.
    messages.write().push(ChatMessage::bot(""));
    thinking.set(true);

    let assistant = app_state.assistant.clone();
    spawn(async move {
        let mut rx = assistant.stream_reply(turns);
        while let Some(event) = rx.recv().await {
            match event {
                StreamEvent::Delta(chunk) => {
                    let mut msgs = messages.write();
                    if let Some(last) = msgs.last_mut() {
                        last.text.push_str(&chunk);
                    }
                }
                StreamEvent::Done => break,
            }
        }
        thinking.set(false);
    });
}

#[component]
pub fn ChatWidget() -> Element {
    let app_state = use_context::<AppState>();
    let mut open = use_signal(|| false);
    let messages = use_signal(|| vec![ChatMessage::bot(WELCOME)]);
    let mut input = use_signal(String::new);
    let thinking = use_signal(|| false);

    let state_for_click = app_state.clone();
    let state_for_key = app_state.clone();
    let can_send = !thinking() && !input().trim().is_empty();

    rsx! {
        div { class: "fixed bottom-6 right-6 z-40 flex flex-col items-end",

            if open() {
                div { class: "mb-4 w-[360px] h-[500px] glass-strong rounded-2xl flex flex-col overflow-hidden",

                    // Header
                    div { class: "p-4 border-b border-[var(--border-subtle)] flex justify-between items-center",
                        span { class: "font-semibold text-sm", "Sterling Assistant" }
                        button {
                            class: "text-[var(--text-tertiary)] hover:text-[var(--text-primary)] transition-colors",
                            onclick: move |_| open.set(false),
                            "✕"
                        }
                    }

                    // Messages
                    div { class: "flex-1 overflow-y-auto p-4 space-y-3",
                        for msg in messages.read().iter() {
                            if !(msg.sender == Sender::Bot && msg.text.is_empty()) {
                                ChatBubble { key: "{msg.id}", message: msg.clone() }
                            }
                        }
                        if thinking() {
                            div { class: "flex justify-start",
                                div { class: "px-3 py-2 rounded-2xl text-xs text-[var(--text-tertiary)]",
                                    style: "background: var(--bg-elevated);",
                                    "Thinking..."
                                }
                            }
                        }
                    }

                    // Input
                    div { class: "p-3 border-t border-[var(--border-subtle)]",
                        div { class: "flex items-center gap-2 rounded-full p-1 pl-4 border border-[var(--border-subtle)] focus-within:border-[var(--accent-primary)] transition-colors",
                            style: "background: var(--bg-elevated);",

                            input {
                                value: "{input}",
                                placeholder: "Ask about my experience...",
                                class: "flex-1 bg-transparent outline-none text-sm",
                                oninput: move |evt| input.set(evt.value()),
                                onkeydown: move |evt| {
                                    if evt.key() == Key::Enter {
                                        send_message(&state_for_key, messages, input, thinking);
                                    }
                                },
                            }
                            button {
                                class: if can_send {
                                    "w-8 h-8 rounded-full flex items-center justify-center text-white transition-all hover:scale-105"
                                } else {
                                    "w-8 h-8 rounded-full flex items-center justify-center text-white opacity-30 cursor-not-allowed"
                                },
                                style: "background: var(--accent-primary);",
                                disabled: !can_send,
                                onclick: move |_| send_message(&state_for_click, messages, input, thinking),
                                "↑"
                            }
                        }
                        p { class: "text-[10px] text-center text-[var(--text-tertiary)] mt-2 opacity-60",
                            "Powered by Gemini 2.5 Flash"
                        }
                    }
                }
            }

            // Floating toggle
            button {
                class: "w-14 h-14 rounded-full flex items-center justify-center text-white shadow-lg transition-all hover:scale-110 active:scale-95",
                style: "background: var(--accent-primary);",
                onclick: move |_| {
                    let next = !open();
                    open.set(next);
                },
                if open() { "✕" } else { "💬" }
            }
        }
    }
}
