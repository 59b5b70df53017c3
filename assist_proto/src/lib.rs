//! Typed command channel between the assistant collaborator and the game
//!
//! The voice side classifies utterances into discrete action tokens; this
//! crate is the typed boundary the session consumes. Uses postcard for
//! compact binary serialization.

use postcard::{from_bytes, to_allocvec};

/// Encoding or decoding a channel message failed
#[derive(Debug, thiserror::Error)]
#[error("codec error: {0}")]
pub struct CodecError(#[from] postcard::Error);

// ============================================================================
// Inbound commands (assistant to session)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum AssistantCommand {
    /// One-shot nudge of the voice-controlled paddle upward
    Up,
    /// One-shot nudge of the voice-controlled paddle downward
    Down,
    /// Start the rally
    Start,
    /// Open the help overlay, pausing a running rally
    Help,
    /// Close the help overlay without resuming
    Stop,
}

impl AssistantCommand {
    /// Map a raw vendor action token onto a command.
    ///
    /// Tokens arrive lowercased or not depending on which event path
    /// produced them, so matching is case-insensitive. Unknown tokens yield
    /// `None`; the caller logs and drops them.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "up" => Some(Self::Up),
            "down" => Some(Self::Down),
            "start" => Some(Self::Start),
            "help" => Some(Self::Help),
            "stop" => Some(Self::Stop),
            _ => None,
        }
    }

    /// Serialize to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, CodecError> {
        Ok(to_allocvec(self)?)
    }

    /// Deserialize from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CodecError> {
        Ok(from_bytes(bytes)?)
    }
}

// ============================================================================
// Outbound snapshot (session to assistant)
// ============================================================================

/// Read-only match state surfaced to the assistant collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StateSnapshot {
    pub score_left: u32,
    pub score_right: u32,
    pub started: bool,
}

impl StateSnapshot {
    /// Serialize to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, CodecError> {
        Ok(to_allocvec(self)?)
    }

    /// Deserialize from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CodecError> {
        Ok(from_bytes(bytes)?)
    }
}
