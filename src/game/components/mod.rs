//! Chess game components module
//!
//! Components are pure data structures with no rules logic.
//! Organized by domain: pieces and game state records.

pub mod piece;
pub mod game_state;

#[cfg(test)]
mod tests;

// Re-export all components for convenience
pub use game_state::*;
pub use piece::*;
