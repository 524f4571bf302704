//! Shared error types for Agora.

use thiserror::Error;

/// Errors surfaced by store operations and the HTTP boundary.
///
/// `NotFound` and `Malformed` are client conditions and are recovered at the
/// request boundary as 404/400 JSON responses. Everything else is a server
/// fault and becomes a generic 500.
#[derive(Debug, Error)]
pub enum AgoraError {
    /// A referenced id does not resolve to an entity.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// A required request field is missing or invalid.
    #[error("invalid request: {0}")]
    Malformed(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, AgoraError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = AgoraError::NotFound("User");
        assert_eq!(err.to_string(), "User not found");
    }

    #[test]
    fn test_malformed_display() {
        let err = AgoraError::Malformed("Missing email".into());
        assert_eq!(err.to_string(), "invalid request: Missing email");
    }
}
