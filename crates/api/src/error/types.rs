//! Error type definitions for field and point operations

#[cfg(feature = "std")]
use std::string::String;

/// Primary error type for field and point operations
///
/// Only malformed *input* is reported here. Programmer errors such as a
/// limb slice of the wrong length panic instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The bytes do not encode a point on the curve
    InvalidPoint {
        /// What was being decoded
        context: &'static str,
        /// Why decoding failed
        #[cfg(feature = "std")]
        message: String,
    },

    /// Invalid length error with context
    InvalidLength {
        /// What was being decoded
        context: &'static str,
        /// Required length in bytes
        expected: usize,
        /// Length that was supplied
        actual: usize,
    },

    /// Invalid parameter error
    InvalidParameter {
        /// Parameter name
        context: &'static str,
        /// What is wrong with it
        #[cfg(feature = "std")]
        message: String,
    },

    /// Other error
    Other {
        /// Where the error came from
        context: &'static str,
        /// Description
        #[cfg(feature = "std")]
        message: String,
    },
}

/// Result type for field and point operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error, keeping any message
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            #[cfg(feature = "std")]
            Self::InvalidPoint { message, .. } => Self::InvalidPoint { context, message },
            #[cfg(not(feature = "std"))]
            Self::InvalidPoint { .. } => Self::InvalidPoint { context },
            Self::InvalidLength { expected, actual, .. } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            #[cfg(feature = "std")]
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            #[cfg(not(feature = "std"))]
            Self::InvalidParameter { .. } => Self::InvalidParameter { context },
            #[cfg(feature = "std")]
            Self::Other { message, .. } => Self::Other { context, message },
            #[cfg(not(feature = "std"))]
            Self::Other { .. } => Self::Other { context },
        }
    }

    /// Add a message to an existing error (when std is available)
    #[cfg(feature = "std")]
    pub fn with_message(self, message: impl Into<String>) -> Self {
        let message = message.into();
        match self {
            Self::InvalidPoint { context, .. } => Self::InvalidPoint { context, message },
            Self::InvalidLength { context, expected, actual } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { context, .. } => Self::InvalidParameter { context, message },
            Self::Other { context, .. } => Self::Other { context, message },
        }
    }

    /// True when the error means "not a point on the curve"
    pub fn is_invalid_point(&self) -> bool {
        matches!(self, Self::InvalidPoint { .. })
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            #[cfg(feature = "std")]
            Self::InvalidPoint { context, message } if !message.is_empty() => {
                write!(f, "Invalid point: {}: {}", context, message)
            }
            Self::InvalidPoint { context, .. } => {
                write!(f, "Invalid point: {}", context)
            }
            Self::InvalidLength { context, expected, actual } => {
                write!(f, "{}: invalid length (expected {}, got {})", context, expected, actual)
            }
            #[cfg(feature = "std")]
            Self::InvalidParameter { context, message } => {
                write!(f, "{}: {}", context, message)
            }
            #[cfg(not(feature = "std"))]
            Self::InvalidParameter { context } => {
                write!(f, "Invalid parameter: {}", context)
            }
            #[cfg(feature = "std")]
            Self::Other { context, message } => {
                write!(f, "{}: {}", context, message)
            }
            #[cfg(not(feature = "std"))]
            Self::Other { context } => {
                write!(f, "Error: {}", context)
            }
        }
    }
}
