//! Streaming reply contract
//!
//! A reply arrives as an ordered sequence of text fragments over a channel,
//! closed by a single `Done`. The consumer concatenates fragments in arrival
//! order; it never needs to distinguish a failed call from a short reply,
//! because every failure collapses into one fallback fragment.

/// Fixed reply substituted when the upstream call fails for any reason.
pub const FALLBACK_REPLY: &str = "I apologize, but I seem to be having trouble connecting to my \
neural network right now. Please try again later.";

/// One event on a reply stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamEvent {
    /// An incremental chunk of reply text.
    Delta(String),
    /// End of stream; no further events follow.
    Done,
}
