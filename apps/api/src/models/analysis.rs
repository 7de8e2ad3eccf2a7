//! Typed resume-analysis payloads.
//!
//! The analysis the browser renders is a fixed record, not a free-form blob:
//! whatever the generation backend returns is deserialized into these types
//! and bounds-checked before anything downstream sees it.

use serde::{Deserialize, Serialize};

/// Severity kind attached to a single feedback item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackKind {
    Positive,
    Negative,
    Warning,
    Info,
}

/// One feedback card: a titled observation with a severity kind.
/// The wire field is `type` to match what the browser client renders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackItem {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: FeedbackKind,
}

/// Full result of one resume analysis. All four scores are integers in [0,100].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeAnalysisResult {
    pub overall_score: u8,
    pub ats_score: u8,
    pub content_score: u8,
    pub formatting_score: u8,
    pub summary: String,
    pub key_improvements: Vec<String>,
    pub content_feedback: Vec<FeedbackItem>,
    pub ats_feedback: Vec<FeedbackItem>,
    pub formatting_feedback: Vec<FeedbackItem>,
}

impl ResumeAnalysisResult {
    /// Checks the invariants the rest of the app relies on. Called at the
    /// boundary where backend output is parsed; a violation there means the
    /// response was malformed and the caller falls back to the mock path.
    pub fn validate(&self) -> Result<(), String> {
        for (name, score) in [
            ("overallScore", self.overall_score),
            ("atsScore", self.ats_score),
            ("contentScore", self.content_score),
            ("formattingScore", self.formatting_score),
        ] {
            if score > 100 {
                return Err(format!("{name} is {score}, must be 0-100"));
            }
        }
        if self.summary.trim().is_empty() {
            return Err("summary is empty".to_string());
        }
        Ok(())
    }
}
