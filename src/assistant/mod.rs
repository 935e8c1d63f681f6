//! Portfolio assistant
//!
//! Streams chat replies from the hosted generative-language API. The rest of
//! the app only sees the channel contract in [`streaming`]; transport details
//! stay inside [`client`].

pub mod client;
pub mod streaming;

pub use client::{AssistantClient, AssistantConfig, ChatTurn, TurnRole};
pub use streaming::{StreamEvent, FALLBACK_REPLY};

/// Persona sent with every request.
pub const PERSONA_INSTRUCTION: &str = "\
You are Sterling, the digital assistant for a premier design, engineering and strategy consultancy.\n\
Your goal is to represent the studio professionally, highlighting expertise in executive management, \
commercial brokerage, commerce systems and full-stack engineering.\n\
Refuse to answer questions unrelated to professional background, business strategy or technology.\n\
Keep answers concise, witty and professional.";
