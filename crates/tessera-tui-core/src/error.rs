//! Error types for Tessera TUI operations.

use thiserror::Error;

/// Error type for terminal and render-loop operations.
///
/// Pure transforms (grid manipulation, box-model resolution, text wrapping)
/// never return this type: a bad input there is a caller bug and panics with
/// a diagnostic instead. `Error` covers the genuinely fallible boundary with
/// the operating system.
#[derive(Error, Debug)]
pub enum Error {
    /// An I/O error occurred while talking to the terminal.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A terminal operation failed.
    #[error("terminal error: {0}")]
    Terminal(String),
}

/// Result type alias using the core [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;
