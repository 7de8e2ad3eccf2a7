use crate::config::Config;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Deliberately small: every coaching entity is transient and lives only in the
/// request/response cycle, so there is no pool, cache, or store to carry here.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    /// Kept on state so handlers can read limits/flags without re-reading env.
    #[allow(dead_code)]
    pub config: Config,
}
