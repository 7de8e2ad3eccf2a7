//! Mock-interview orchestration.
//!
//! Stateless per turn: the caller resends the full message history with every
//! request, so each turn is one backend attempt (with that history attached)
//! or one draw from the mock interviewer.
//!
//! Turn contract: the first turn is a plain introduction with no feedback;
//! every later turn carries exactly a message and a feedback record.

use anyhow::{anyhow, bail, Result};
use serde::Deserialize;
use tracing::{info, warn};

use crate::coaching::mock;
use crate::coaching::prompts::{
    INTERVIEW_FIRST_PROMPT_TEMPLATE, INTERVIEW_JSON_CONTRACT, INTERVIEW_NEXT_PROMPT_TEMPLATE,
    INTERVIEW_SYSTEM_TEMPLATE,
};
use crate::llm_client::{ChatMessage, LlmClient};
use crate::models::interview::{InterviewMessage, InterviewTurn, MessageRole};

/// One interview turn as submitted by the client.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewTurnRequest {
    pub job_role: String,
    #[serde(default)]
    pub messages: Vec<InterviewMessage>,
    pub is_first_message: bool,
}

/// Produces the interviewer's next turn. Always resolves; backend failures
/// degrade to the mock interviewer with the same parameters.
pub async fn conduct_interview(llm: &LlmClient, request: &InterviewTurnRequest) -> InterviewTurn {
    match try_backend(llm, request).await {
        Ok(turn) => {
            info!(
                "Interview turn generated for role '{}' (first: {})",
                request.job_role, request.is_first_message
            );
            turn
        }
        Err(e) => {
            warn!("Interview backend unavailable, using simulated interviewer: {e}");
            mock::mock_interview_turn(
                &mut rand::thread_rng(),
                &request.job_role,
                request.is_first_message,
            )
        }
    }
}

async fn try_backend(llm: &LlmClient, request: &InterviewTurnRequest) -> Result<InterviewTurn> {
    let history = to_chat_history(&request.messages);

    if request.is_first_message {
        let system = INTERVIEW_SYSTEM_TEMPLATE.replace("{job_role}", &request.job_role);
        let prompt = INTERVIEW_FIRST_PROMPT_TEMPLATE.replace("{job_role}", &request.job_role);

        let response = llm.call_with_history(&prompt, &system, &history).await?;
        let Some(text) = response.text() else {
            bail!("backend returned no text block");
        };
        if text.trim().is_empty() {
            bail!("backend returned an empty introduction");
        }

        return Ok(InterviewTurn {
            message: text.to_string(),
            feedback: None,
        });
    }

    let system = format!(
        "{}{}",
        INTERVIEW_SYSTEM_TEMPLATE.replace("{job_role}", &request.job_role),
        INTERVIEW_JSON_CONTRACT
    );
    let prompt = INTERVIEW_NEXT_PROMPT_TEMPLATE.replace("{job_role}", &request.job_role);

    let turn: InterviewTurn = llm
        .call_json_with_history(&prompt, &system, &history)
        .await?;

    // Later turns must carry in-bounds feedback; anything else is a
    // malformed backend response and triggers the fallback.
    let feedback = turn
        .feedback
        .as_ref()
        .ok_or_else(|| anyhow!("backend turn is missing feedback"))?;
    feedback
        .validate()
        .map_err(|reason| anyhow!("backend returned invalid feedback: {reason}"))?;

    Ok(turn)
}

/// Maps the client's message history onto backend chat turns. Feedback
/// attached to past messages is presentation state and is not resent.
fn to_chat_history(messages: &[InterviewMessage]) -> Vec<ChatMessage> {
    messages
        .iter()
        .map(|m| match m.role {
            MessageRole::User => ChatMessage::user(m.content.clone()),
            MessageRole::Assistant => ChatMessage::assistant(m.content.clone()),
        })
        .collect()
}
