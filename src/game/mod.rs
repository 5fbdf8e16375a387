//! Chess game logic module - rules engine plus session controller
//!
//! # Module Organization
//!
//! - `types` - Board coordinates ([`Square`], [`File`], [`Rank`])
//! - `components` - Piece and move record data (Piece, GamePhase, MoveRecord)
//! - `rules` - Pure chess logic (move generation, attacks, check detection)
//! - `resources` - Per-session state (CurrentTurn, Selection, MoveHistory)
//! - `session` - [`GameSession`], the single owner of a game's board
//! - `systems` - Selection, click and move handling on a session
//!
//! The rules cover piece movement, capture, check, checkmate and stalemate.
//! Castling, en passant and promotion are not implemented; a pawn reaching
//! the last rank stays a pawn.

pub mod components;
pub mod error;
pub mod resources;
pub mod rules;
pub mod session;
pub mod systems;
pub mod types;

pub use error::{GameError, GameResult};
pub use session::{ClickOutcome, GameSession, MoveRejection, MoveResult, SelectionView};
pub use types::{File, Rank, Square, BOARD_SIZE};
