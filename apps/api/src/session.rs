//! Per-request session identity.
//!
//! The session is an explicit value extracted from the request, never a
//! process-wide flag. Callers that do not send a session id get an anonymous
//! session minted for the duration of the request. Used for log correlation;
//! no endpoint gates on it.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use std::convert::Infallible;
use uuid::Uuid;

const SESSION_HEADER: &str = "x-session-id";
const USER_HEADER: &str = "x-session-user";

#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    /// Display identity supplied by the client, if any. Informational only.
    pub user: Option<String>,
}

#[async_trait]
impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let id = parts
            .headers
            .get(SESSION_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| Uuid::parse_str(v).ok())
            .unwrap_or_else(Uuid::new_v4);

        let user = parts
            .headers
            .get(USER_HEADER)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .map(String::from);

        Ok(Session { id, user })
    }
}
