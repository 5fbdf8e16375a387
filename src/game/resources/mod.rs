//! Chess game resources - Per-session game state
//!
//! Each [`crate::game::session::GameSession`] owns one of each resource. They
//! hold the bookkeeping around the board: whose turn it is, what is selected,
//! what has been played and captured, and how the game ended.
//!
//! # Resource Categories
//!
//! ## Turn Management
//! - [`CurrentTurn`] - Tracks whose turn it is and move numbers
//!
//! ## Player Interaction
//! - [`Selection`] - Currently selected square and its legal destinations
//!
//! ## Game History
//! - [`MoveHistory`] - Move records for the move list
//! - [`CapturedPieces`] - Captured pieces and material balance
//!
//! ## Game Status
//! - [`GameOverState`] - Checkmate or stalemate result

pub mod turn;
pub mod selection;
pub mod history;
pub mod captured;
pub mod game_over;

#[cfg(test)]
mod tests;

// Re-export all resources for convenience
pub use turn::*;
pub use selection::*;
pub use history::*;
pub use captured::*;
pub use game_over::*;
