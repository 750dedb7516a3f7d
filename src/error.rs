//! Error handling module for transit-tui
//!
//! Provides centralized error handling with proper error types using thiserror.
//! Domain operations (adds, payments, menu input) are total and never produce
//! these errors; they only cover the terminal and application plumbing.

use thiserror::Error;

/// Main error type for transit-tui
#[derive(Error, Debug)]
pub enum TransitTuiError {
    /// IO errors (terminal setup, event polling)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// State errors (invalid mode transitions, missing form data)
    #[error("State error: {0}")]
    State(String),

    /// General errors (catch-all for edge cases)
    #[error("{0}")]
    General(String),
}

/// Result type alias for transit-tui operations
pub type Result<T> = std::result::Result<T, TransitTuiError>;

impl TransitTuiError {
    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }

    /// Create a state error
    pub fn state(msg: impl Into<String>) -> Self {
        Self::State(msg.into())
    }

    /// Create a general error
    pub fn general(msg: impl Into<String>) -> Self {
        Self::General(msg.into())
    }
}
