//! Error types for the UCI boundary.

use lucena_core::{FenError, MoveParseError};

/// Errors from parsing or executing UCI commands.
///
/// All of these are recoverable: the engine loop logs them and keeps
/// reading.
#[derive(Debug, thiserror::Error)]
pub enum UciError {
    /// The `position` command had neither `startpos` nor a `fen` payload.
    #[error("malformed position command")]
    MalformedPosition,
    /// A FEN string failed to parse.
    #[error("invalid FEN \"{fen}\": {source}")]
    InvalidFen {
        /// The offending FEN string.
        fen: String,
        /// The underlying parse error.
        source: FenError,
    },
    /// A move in a `position ... moves` list failed to parse.
    #[error("invalid move \"{uci_move}\": {source}")]
    InvalidMove {
        /// The offending move text.
        uci_move: String,
        /// The underlying parse error.
        source: MoveParseError,
    },
    /// A numeric argument of `go` was not a number.
    #[error("invalid go argument \"{value}\"")]
    InvalidGoArgument {
        /// The offending argument text.
        value: String,
    },
    /// Reading stdin failed.
    #[error("input error: {0}")]
    Io(#[from] std::io::Error),
}
