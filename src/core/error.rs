use thiserror::Error;

/// Custom error types for clock conversions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid argument at index {index}: {reason}")]
    InvalidArgument { index: usize, reason: String },

    #[error("Parse error at index {index} ({input:?}): {reason}")]
    Parse {
        index: usize,
        input: String,
        reason: String,
    },
}

/// Result type alias using our custom Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a new invalid argument error
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Error::InvalidArgument {
            index: 0,
            reason: reason.into(),
        }
    }

    /// Creates a new parse error for the given input
    pub fn parse(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::Parse {
            index: 0,
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Returns the same error pointing at element `index` of a batch
    pub fn at_index(self, index: usize) -> Self {
        match self {
            Error::InvalidArgument { reason, .. } => Error::InvalidArgument { index, reason },
            Error::Parse { input, reason, .. } => Error::Parse {
                index,
                input,
                reason,
            },
        }
    }

    /// Index of the failing element
    pub fn index(&self) -> usize {
        match self {
            Error::InvalidArgument { index, .. } | Error::Parse { index, .. } => *index,
        }
    }
}
