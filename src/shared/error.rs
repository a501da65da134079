//
// ──────────────────────────────────────────────────────────
// Service-layer errors
// ──────────────────────────────────────────────────────────
//

/// Error returned by every entity service, whatever its backing source.
///
/// Cloneable so a single failure can be handed to every caller waiting
/// on the same in-flight query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: String },

    /// 401 from the remote API. The stored bearer token has been cleared.
    #[error("Session expired")]
    Unauthorized,

    #[error("Request failed with status {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    Decode(String),

    #[error("Invalid patch: {0}")]
    InvalidPatch(String),
}

impl ServiceError {
    pub fn not_found(entity: &'static str, id: &str) -> Self {
        ServiceError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// Message the remote API attached to a failed response, if any.
    pub fn upstream_message(&self) -> Option<&str> {
        match self {
            ServiceError::Http { message, .. } => Some(message),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ServiceError::NotFound { .. } | ServiceError::Http { status: 404, .. }
        )
    }
}

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ServiceError::Decode(err.to_string())
        } else {
            // Timeouts land here too; they are not a distinct kind.
            ServiceError::Network(err.to_string())
        }
    }
}
