//! Error types.

/// Errors surfaced by instance loading, configuration validation and repair.
#[derive(Debug, thiserror::Error)]
pub enum QbfScError {
    /// The instance text is malformed or violates an instance invariant.
    ///
    /// `line` is the 1-based line in the source text; `0` means the
    /// problem is not tied to a particular line.
    #[error("malformed instance (line {line}): {reason}")]
    MalformedInstance { line: usize, reason: String },

    #[error("failed to read instance: {0}")]
    Io(#[from] std::io::Error),

    /// Repair could not cover the universe. Only reachable when the
    /// instance was built without validation.
    #[error("instance cannot be covered: {uncovered} element(s) belong to no set")]
    InfeasibleInstance { uncovered: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl QbfScError {
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        QbfScError::MalformedInstance {
            line,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, QbfScError>;
