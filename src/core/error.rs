//! Error types for the resolver and the selection wheel
//!
//! Every variant is terminal for the request that produced it: nothing in the
//! application retries. The `Display` text of each variant is what ends up in
//! the status line, so it is written for the player rather than for logs.

use thiserror::Error;

/// Errors that can occur while turning a Lichess handle into a position
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// Handle was empty after trimming; no request was sent
    #[error("Enter your Lichess username first.")]
    EmptyHandle,

    /// Handle contains characters Lichess never allows; no request was sent
    #[error("'{handle}' is not a valid Lichess username.")]
    InvalidHandle { handle: String },

    /// Lichess answered with a non-success status
    #[error("Lichess returned an error (status {status}). Check the username and try again.")]
    Remote { status: u16 },

    /// The current-game response carried no `GameId` tag
    #[error("No active game found for {handle}. Start a game on Lichess and try again.")]
    NoActiveGame { handle: String },

    /// The game page loaded but held no usable position
    #[error("Could not read the position from the game page. The game may not have started yet.")]
    ExtractionFailed,

    /// A request exceeded its timeout
    #[error("Lichess did not respond in time. Check your internet connection and try again.")]
    Timeout,

    /// Could not connect to Lichess at all
    #[error("Could not connect to Lichess. Check your internet connection.")]
    ConnectionFailure,

    /// Any other transport-level failure (body decoding, redirects, ...)
    #[error("Request to Lichess failed: {message}")]
    Transport { message: String },

    /// The HTTP client itself could not be built
    #[error("HTTP client initialization failed: {message}")]
    ClientInit { message: String },
}

impl From<reqwest::Error> for ResolveError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ResolveError::Timeout
        } else if err.is_connect() {
            ResolveError::ConnectionFailure
        } else {
            ResolveError::Transport {
                message: err.to_string(),
            }
        }
    }
}

/// Errors that can occur while picking a piece
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// The position string could not be parsed into a legal board
    #[error("Invalid position '{fen}': {reason}")]
    InvalidPosition { fen: String, reason: String },

    /// The wheel stopped but no marker could be picked
    #[error("Result could not be determined!")]
    NoResult,
}

/// Result type alias for resolver operations
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Result type alias for selection operations
pub type SelectionResult<T> = Result<T, SelectionError>;
