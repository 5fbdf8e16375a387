//! Chess rules module - Pure game logic without session coupling
//!
//! Implements move generation and legality checking as plain functions over a
//! [`BoardState`], so every rule can be unit tested from a hand-built position.
//!
//! # Module Structure
//!
//! - `board_state` - 8x8 board of optional pieces, king lookup, initial position
//! - `piece_moves` - Pseudo-legal movement rules per piece type
//! - `attacks` - Attack maps and `is_square_attacked`
//! - `check` - Move simulation, legal move filter, check/checkmate/stalemate
//!
//! Castling, en passant and promotion are not part of these rules.

pub mod attacks;
pub mod board_state;
pub mod check;
pub mod piece_moves;


// Re-export commonly used items
pub use attacks::{attacked_squares, is_square_attacked};
pub use board_state::BoardState;
pub use check::{
    has_any_legal_moves, is_checkmate, is_in_check, is_in_check_after, is_stalemate,
    legal_moves, legal_moves_from, simulate_move, SimulatedMove,
};
pub use piece_moves::{is_valid_move, pseudo_legal_moves};
