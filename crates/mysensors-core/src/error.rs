//! Shared error type across MySensors crates.

use thiserror::Error;

/// Stable error codes, used in logs and test vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Malformed frame (short header, truncated payload, bad encoding).
    BadFrame,
    /// Payload length bits exceed the frame capacity.
    PayloadTooLarge,
    /// Unsupported protocol or config version.
    UnsupportedVersion,
    /// Invalid node configuration.
    BadConfig,
    /// Anything else (I/O, environment).
    Internal,
}

impl ErrorCode {
    /// String representation used in logs and test vectors.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::BadFrame => "BAD_FRAME",
            ErrorCode::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::BadConfig => "BAD_CONFIG",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type used by core and node.
#[derive(Debug, Error)]
pub enum Error {
    #[error("bad frame: {0}")]
    BadFrame(String),
    #[error("payload too large")]
    PayloadTooLarge,
    #[error("unsupported protocol version")]
    UnsupportedVersion,
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl Error {
    /// Map an error to its stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            Error::BadFrame(_) => ErrorCode::BadFrame,
            Error::PayloadTooLarge => ErrorCode::PayloadTooLarge,
            Error::UnsupportedVersion => ErrorCode::UnsupportedVersion,
            Error::BadConfig(_) => ErrorCode::BadConfig,
            Error::Internal(_) => ErrorCode::Internal,
        }
    }
}
