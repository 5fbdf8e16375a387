//! Error types for game module
//!
//! Rejected move requests are not errors: [`crate::game::session::GameSession::attempt_move`]
//! reports them through [`crate::game::session::MoveResult`]. The variants here cover
//! malformed coordinates handed to the engine by a presentation layer.

/// Errors that can occur in game logic
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// Coordinates outside the 8x8 board
    #[error("Invalid square: ({row}, {col}) is outside the board")]
    InvalidSquare { row: u8, col: u8 },

    /// Text that is not a square name like `e4`
    #[error("Invalid square notation: {notation:?}")]
    InvalidNotation { notation: String },
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;
