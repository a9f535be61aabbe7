//! Console error types

use thiserror::Error;

/// Result type returned by command handlers and dispatch.
pub type Status = Result<(), ConsoleError>;

/// Console error with code and message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConsoleError {
    /// E01: No command matched at any menu level
    #[error("E01: no matching command")]
    NoMatch,
    /// E02: Invalid value format
    #[error("E02: invalid value")]
    InvalidValue,
    /// E03: Missing required argument
    #[error("E03: missing argument")]
    MissingArg,
    /// E04: Value out of allowed range
    #[error("E04: out of range")]
    OutOfRange,
    /// E05: Non-hex digit in a binary frame (strict policy only)
    #[error("E05: malformed hex digit")]
    MalformedHex,
    /// E06: Handler reported a failure
    #[error("E06: command failed")]
    HandlerFailed,
}

impl ConsoleError {
    /// Get error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::NoMatch => "E01",
            Self::InvalidValue => "E02",
            Self::MissingArg => "E03",
            Self::OutOfRange => "E04",
            Self::MalformedHex => "E05",
            Self::HandlerFailed => "E06",
        }
    }
}
