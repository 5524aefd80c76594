//! Error types for tag path parsing, normalization and traversal.

/// Errors that can occur while reading a path or following it through a tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// The path text could not be read as a segment list.
    #[error("Invalid tag path syntax: {message}")]
    InvalidSyntax { message: String },

    /// A segment's arguments have the wrong arity or type.
    #[error("Invalid argument in segment {segment}: {message}")]
    InvalidArgument { segment: usize, message: String },

    /// A find-first step matched nothing under the fail-fast policy.
    #[error("No element matched segment {segment} ({criteria})")]
    NoMatch { segment: usize, criteria: String },
}

impl PathError {
    pub(crate) fn invalid_argument(segment: usize, message: impl Into<String>) -> Self {
        PathError::InvalidArgument {
            segment,
            message: message.into(),
        }
    }
}
