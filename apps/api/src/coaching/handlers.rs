//! Axum route handlers for the coaching flows.
//!
//! Handlers validate input and delegate; the orchestration wrappers they call
//! are infallible by design, so the only errors produced here are validation
//! errors on the way in.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::coaching::analyzer::analyze_resume;
use crate::coaching::cover_letter::generate_cover_letter;
use crate::coaching::interview::{conduct_interview, InterviewTurnRequest};
use crate::errors::AppError;
use crate::models::analysis::ResumeAnalysisResult;
use crate::models::cover_letter::CoverLetterRequest;
use crate::models::interview::InterviewTurn;
use crate::session::Session;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub resume_text: String,
}

/// Thin text-in, text-out analysis response for the lightweight client.
#[derive(Debug, Serialize)]
pub struct AnalyzeTextResponse {
    pub analysis: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverLetterResponse {
    pub cover_letter: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resume/analyze
///
/// Full structured analysis of extracted resume text.
pub async fn handle_analyze(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<ResumeAnalysisResult>, AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "resumeText cannot be empty".to_string(),
        ));
    }

    info!(
        "Analyzing resume ({} chars) for session {}",
        request.resume_text.len(),
        session.id
    );

    let analysis = analyze_resume(&state.llm, &request.resume_text).await;
    Ok(Json(analysis))
}

/// POST /api/v1/resume/analyze-text
///
/// Plain-text variant of the analyzer: accepts `{ resumeText }` and returns
/// `{ analysis }` holding the summary line only.
pub async fn handle_analyze_text(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeTextResponse>, AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "resumeText cannot be empty".to_string(),
        ));
    }

    info!("Text-only resume analysis for session {}", session.id);

    let analysis = analyze_resume(&state.llm, &request.resume_text).await;
    Ok(Json(AnalyzeTextResponse {
        analysis: analysis.summary,
    }))
}

/// POST /api/v1/cover-letter
pub async fn handle_cover_letter(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<CoverLetterRequest>,
) -> Result<Json<CoverLetterResponse>, AppError> {
    request.validate().map_err(AppError::Validation)?;

    info!(
        "Generating cover letter for session {} ({} @ {})",
        session.id, request.position, request.company
    );

    let cover_letter = generate_cover_letter(&state.llm, &request).await;
    Ok(Json(CoverLetterResponse { cover_letter }))
}

/// POST /api/v1/interview/turn
pub async fn handle_interview_turn(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<InterviewTurnRequest>,
) -> Result<Json<InterviewTurn>, AppError> {
    if request.job_role.trim().is_empty() {
        return Err(AppError::Validation("jobRole cannot be empty".to_string()));
    }

    info!(
        "Interview turn for session {} (role '{}', {} prior messages)",
        session.id,
        request.job_role,
        request.messages.len()
    );

    let turn = conduct_interview(&state.llm, &request).await;
    Ok(Json(turn))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::llm_client::LlmClient;
    use uuid::Uuid;

    fn test_state() -> AppState {
        AppState {
            llm: LlmClient::new(None),
            config: Config {
                anthropic_api_key: None,
                port: 0,
                rust_log: "info".to_string(),
            },
        }
    }

    fn test_session() -> Session {
        Session {
            id: Uuid::new_v4(),
            user: None,
        }
    }

    #[tokio::test]
    async fn test_empty_resume_text_is_rejected() {
        let result = handle_analyze(
            State(test_state()),
            test_session(),
            Json(AnalyzeRequest {
                resume_text: "  \n".to_string(),
            }),
        )
        .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_analyze_returns_bounded_scores() {
        let Json(analysis) = handle_analyze(
            State(test_state()),
            test_session(),
            Json(AnalyzeRequest {
                resume_text: "John Doe\nSoftware Engineer".to_string(),
            }),
        )
        .await
        .unwrap();
        assert!(analysis.overall_score <= 100);
        assert!(analysis.ats_score <= 100);
        assert!(analysis.content_score <= 100);
        assert!(analysis.formatting_score <= 100);
    }

    #[tokio::test]
    async fn test_analyze_text_returns_summary_line() {
        let Json(response) = handle_analyze_text(
            State(test_state()),
            test_session(),
            Json(AnalyzeRequest {
                resume_text: "Jane Smith\nProduct Manager".to_string(),
            }),
        )
        .await
        .unwrap();
        assert!(!response.analysis.is_empty());
    }

    #[tokio::test]
    async fn test_cover_letter_requires_all_four_fields() {
        let request = CoverLetterRequest {
            job_description: String::new(),
            name: "A".to_string(),
            email: String::new(),
            phone: String::new(),
            company: "B".to_string(),
            position: "C".to_string(),
        };
        let result = handle_cover_letter(
            State(test_state()),
            test_session(),
            Json(request),
        )
        .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_interview_rejects_blank_role() {
        let request = InterviewTurnRequest {
            job_role: "   ".to_string(),
            messages: vec![],
            is_first_message: true,
        };
        let result = handle_interview_turn(
            State(test_state()),
            test_session(),
            Json(request),
        )
        .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_interview_first_turn_shape() {
        let request = InterviewTurnRequest {
            job_role: "software-engineer".to_string(),
            messages: vec![],
            is_first_message: true,
        };
        let Json(turn) = handle_interview_turn(
            State(test_state()),
            test_session(),
            Json(request),
        )
        .await
        .unwrap();
        assert!(turn.feedback.is_none());
        assert!(turn.message.starts_with("Hello! I'm Alex"));
    }
}
