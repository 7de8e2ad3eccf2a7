use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// The generation-backend credential is deliberately optional: running
/// without one is a normal, supported mode in which every flow is served
/// by the built-in mock generator.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Reads an env var, treating unset and empty as the same "not configured" state.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_env_missing_is_none() {
        std::env::remove_var("CAREERCOACH_TEST_MISSING");
        assert_eq!(optional_env("CAREERCOACH_TEST_MISSING"), None);
    }

    #[test]
    fn test_optional_env_empty_is_none() {
        std::env::set_var("CAREERCOACH_TEST_EMPTY", "");
        assert_eq!(optional_env("CAREERCOACH_TEST_EMPTY"), None);
        std::env::remove_var("CAREERCOACH_TEST_EMPTY");
    }

    #[test]
    fn test_optional_env_present_is_some() {
        std::env::set_var("CAREERCOACH_TEST_SET", "sk-test");
        assert_eq!(
            optional_env("CAREERCOACH_TEST_SET"),
            Some("sk-test".to_string())
        );
        std::env::remove_var("CAREERCOACH_TEST_SET");
    }
}
