//! Errors raised by the glue around the engine.
//!
//! Search and evaluation are total over legal positions and never fail; these
//! errors come from parsing user input and reading or writing profiles.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    /// The FEN string could not be parsed or describes an illegal setup.
    #[error("Invalid FEN '{fen}': {reason}")]
    InvalidFen { fen: String, reason: String },

    /// Neither UCI nor SAN notation matched the input.
    #[error("Invalid move format: '{input}'")]
    InvalidNotation { input: String },

    /// The notation parsed but the move is not legal in the current position.
    #[error("Illegal move: '{input}'")]
    IllegalMove { input: String },

    #[error("Profile I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Profile format error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type EngineResult<T> = Result<T, EngineError>;
