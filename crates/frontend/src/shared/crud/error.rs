use thiserror::Error;

/// Errors talking to the remote store
///
/// Local to the component that raised them; never propagated globally.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SyncError {
    /// Server unreachable or non-2xx response
    #[error("{0}")]
    Transport(String),

    /// Blocked locally before any request was issued
    #[error("{0}")]
    Validation(String),

    /// Response body did not have the expected shape
    #[error("{0}")]
    Malformed(String),
}

impl SyncError {
    /// Prefix a transport/malformed message with the failed action
    /// ("Failed to update transaction: HTTP error: 500").
    pub fn during(self, action: &str) -> Self {
        match self {
            Self::Transport(msg) => Self::Transport(format!("Failed to {}: {}", action, msg)),
            Self::Malformed(msg) => Self::Malformed(format!("Failed to {}: {}", action, msg)),
            validation => validation,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
