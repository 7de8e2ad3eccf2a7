//! Typed mock-interview payloads.
//!
//! No server-held conversation state exists: the caller resends the full
//! message history on every turn, and each turn is a single round-trip.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

/// One message in an interview conversation, unique by id within a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewMessage {
    pub id: Uuid,
    pub role: MessageRole,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<InterviewFeedback>,
}

/// Per-answer assessment attached to second-and-later interviewer turns.
/// Axes are 1-10; suggestions carry 2-3 items drawn from a fixed pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewFeedback {
    pub clarity: u8,
    pub relevance: u8,
    pub confidence: u8,
    pub overall: u8,
    pub suggestions: Vec<String>,
}

impl InterviewFeedback {
    /// Boundary check for backend-produced feedback. The mock path draws
    /// values inside these bounds by construction.
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("clarity", self.clarity),
            ("relevance", self.relevance),
            ("confidence", self.confidence),
            ("overall", self.overall),
        ] {
            if !(1..=10).contains(&value) {
                return Err(format!("{name} is {value}, must be 1-10"));
            }
        }
        if !(2..=3).contains(&self.suggestions.len()) {
            return Err(format!(
                "expected 2-3 suggestions, got {}",
                self.suggestions.len()
            ));
        }
        Ok(())
    }
}

/// The interviewer's reply for one turn.
///
/// First turn: plain introduction, no `feedback` field on the wire.
/// Later turns: exactly two fields, `message` and `feedback`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewTurn {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<InterviewFeedback>,
}
