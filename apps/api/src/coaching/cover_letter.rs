//! Cover-letter orchestration: one backend attempt, mock template fallback.

use anyhow::{bail, Result};
use tracing::{info, warn};

use crate::coaching::mock;
use crate::coaching::prompts::{COVER_LETTER_PROMPT_TEMPLATE, COVER_LETTER_SYSTEM};
use crate::llm_client::LlmClient;
use crate::models::cover_letter::CoverLetterRequest;

/// Generates a cover letter for a validated request. Always returns a letter;
/// backend failures degrade to the built-in template.
pub async fn generate_cover_letter(llm: &LlmClient, request: &CoverLetterRequest) -> String {
    match try_backend(llm, request).await {
        Ok(letter) => {
            info!(
                "Cover letter generated for {} at {}",
                request.position, request.company
            );
            letter
        }
        Err(e) => {
            warn!("Cover letter backend unavailable, using template letter: {e}");
            mock::mock_cover_letter(request)
        }
    }
}

async fn try_backend(llm: &LlmClient, request: &CoverLetterRequest) -> Result<String> {
    let prompt = COVER_LETTER_PROMPT_TEMPLATE
        .replace("{position}", &request.position)
        .replace("{company}", &request.company)
        .replace("{job_description}", &request.job_description)
        .replace("{name}", &request.name)
        .replace("{email}", &request.email)
        .replace("{phone}", &request.phone);

    let response = llm.call(&prompt, COVER_LETTER_SYSTEM).await?;

    let Some(text) = response.text() else {
        bail!("backend returned no text block");
    };
    if text.trim().is_empty() {
        bail!("backend returned an empty letter");
    }

    Ok(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CoverLetterRequest {
        CoverLetterRequest {
            job_description: "Run our billing platform and its integrations.".to_string(),
            name: "Sam Park".to_string(),
            email: "sam@example.com".to_string(),
            phone: "(555) 246-1357".to_string(),
            company: "Northwind".to_string(),
            position: "Platform Engineer".to_string(),
        }
    }

    #[tokio::test]
    async fn test_unconfigured_backend_returns_template_letter() {
        let llm = LlmClient::new(None);
        let letter = generate_cover_letter(&llm, &request()).await;
        assert!(letter.contains("Sam Park"));
        assert!(letter.contains("Platform Engineer position at Northwind"));
        assert!(letter.contains("Dear Hiring Manager,"));
    }
}
