//! Generative-language API client
//!
//! Thin streaming wrapper over the hosted `streamGenerateContent` endpoint
//! (server-sent events). No retry or backpressure logic lives here: chunks
//! are forwarded as they arrive, and any failure is reduced to the fixed
//! fallback reply so callers never observe an error.

use crate::assistant::streaming::{StreamEvent, FALLBACK_REPLY};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Connection settings, fixed at client construction.
#[derive(Debug, Clone)]
pub struct AssistantConfig {
    pub api_key: String,
    pub model: String,
    pub system_instruction: String,
    pub base_url: String,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            api_key: std::env::var("GEMINI_API_KEY").unwrap_or_default(),
            model: DEFAULT_MODEL.to_string(),
            system_instruction: super::PERSONA_INSTRUCTION.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Role of a conversation turn on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnRole {
    User,
    Model,
}

impl TurnRole {
    fn as_str(self) -> &'static str {
        match self {
            TurnRole::User => "user",
            TurnRole::Model => "model",
        }
    }
}

/// One turn of context sent with each request.
#[derive(Debug, Clone)]
pub struct ChatTurn {
    pub role: TurnRole,
    pub text: String,
}

#[derive(Debug, Error)]
enum StreamError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("api returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed stream payload: {0}")]
    Payload(#[from] serde_json::Error),
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    #[serde(rename = "systemInstruction")]
    system_instruction: Content,
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct StreamResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl StreamResponse {
    fn text(&self) -> Option<String> {
        let joined: String = self
            .candidates
            .iter()
            .filter_map(|c| c.content.as_ref())
            .flat_map(|c| c.parts.iter())
            .filter_map(|p| p.text.as_deref())
            .collect();
        if joined.is_empty() {
            None
        } else {
            Some(joined)
        }
    }
}

/// Streaming client for the generative-language API.
pub struct AssistantClient {
    config: AssistantConfig,
}

impl AssistantClient {
    pub fn new(config: AssistantConfig) -> Self {
        Self { config }
    }

    /// Request a reply for the given conversation.
    ///
    /// Returns immediately with the receiving end of the stream; the request
    /// runs in a background task. The receiver yields zero or more `Delta`
    /// fragments followed by exactly one `Done`. On any failure the stream
    /// carries one `Delta` holding [`FALLBACK_REPLY`] before `Done`, and the
    /// cause is logged rather than surfaced.
    pub fn stream_reply(&self, turns: Vec<ChatTurn>) -> UnboundedReceiver<StreamEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        let config = self.config.clone();

        tokio::spawn(async move {
            if let Err(e) = stream_into(&config, turns, &tx).await {
                tracing::error!("assistant stream failed: {e}");
                let _ = tx.send(StreamEvent::Delta(FALLBACK_REPLY.to_string()));
            }
            let _ = tx.send(StreamEvent::Done);
        });

        rx
    }
}

async fn stream_into(
    config: &AssistantConfig,
    turns: Vec<ChatTurn>,
    tx: &UnboundedSender<StreamEvent>,
) -> Result<(), StreamError> {
    let request = GenerateRequest {
        system_instruction: Content {
            role: None,
            parts: vec![Part {
                text: config.system_instruction.clone(),
            }],
        },
        contents: turns
            .into_iter()
            .map(|turn| Content {
                role: Some(turn.role.as_str().to_string()),
                parts: vec![Part { text: turn.text }],
            })
            .collect(),
    };

    let url = format!(
        "{}/models/{}:streamGenerateContent?alt=sse&key={}",
        config.base_url, config.model, config.api_key
    );

    let client = reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()?;

    let mut response = client.post(&url).json(&request).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(StreamError::Status(status));
    }

    let mut buffer = String::new();
    while let Some(chunk) = response.chunk().await? {
        buffer.push_str(&String::from_utf8_lossy(&chunk));

        while let Some(newline) = buffer.find('\n') {
            let line = buffer[..newline].trim_end_matches('\r').to_string();
            buffer.drain(..=newline);

            if let Some(text) = parse_sse_line(&line)? {
                if tx.send(StreamEvent::Delta(text)).is_err() {
                    // Receiver went away; the consuming view was torn down.
                    return Ok(());
                }
            }
        }
    }

    Ok(())
}

/// Extract the text payload from one SSE line, if it carries any.
fn parse_sse_line(line: &str) -> Result<Option<String>, StreamError> {
    let Some(payload) = line.strip_prefix("data:") else {
        return Ok(None);
    };
    let payload = payload.trim();
    if payload.is_empty() || payload == "[DONE]" {
        return Ok(None);
    }

    let response: StreamResponse = serde_json::from_str(payload)?;
    Ok(response.text())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sse_data_line() {
        let line = r#"data: {"candidates":[{"content":{"parts":[{"text":"Hello"}]}}]}"#;
        assert_eq!(parse_sse_line(line).unwrap(), Some("Hello".to_string()));
    }

    #[test]
    fn test_parse_sse_ignores_non_data_lines() {
        assert_eq!(parse_sse_line("").unwrap(), None);
        assert_eq!(parse_sse_line(": keep-alive").unwrap(), None);
        assert_eq!(parse_sse_line("event: ping").unwrap(), None);
        assert_eq!(parse_sse_line("data:").unwrap(), None);
        assert_eq!(parse_sse_line("data: [DONE]").unwrap(), None);
    }

    #[test]
    fn test_parse_sse_empty_candidates_has_no_text() {
        let line = r#"data: {"candidates":[]}"#;
        assert_eq!(parse_sse_line(line).unwrap(), None);
    }

    #[test]
    fn test_parse_sse_malformed_payload_is_an_error() {
        assert!(parse_sse_line("data: {broken").is_err());
    }

    #[tokio::test]
    async fn test_failed_call_yields_single_fallback_fragment() {
        // Nothing listens on this address, so the request fails immediately.
        let client = AssistantClient::new(AssistantConfig {
            api_key: "test".into(),
            model: DEFAULT_MODEL.into(),
            system_instruction: "test".into(),
            base_url: "http://127.0.0.1:9".into(),
        });

        let mut rx = client.stream_reply(vec![ChatTurn {
            role: TurnRole::User,
            text: "hi".into(),
        }]);

        let mut events = Vec::new();
        while let Some(event) = rx.recv().await {
            events.push(event);
        }

        assert_eq!(
            events,
            vec![
                StreamEvent::Delta(FALLBACK_REPLY.to_string()),
                StreamEvent::Done,
            ]
        );
    }
}
