//! Chess game systems - behavior driven by player requests
//!
//! Systems are the operations a presentation layer invokes on a
//! [`GameSession`](crate::game::session::GameSession). Each one is an `impl`
//! block on the session, split by concern:
//!
//! - [`input`] - Piece selection, click handling, drag and drop
//! - [`game_logic`] - Move execution plus check/checkmate/stalemate detection
//!
//! # Request Flow
//!
//! ```text
//! ┌─────────────────┐
//! │ Input           │  select / click / drag_start / drop
//! │                 │  → Updates Selection
//! └────────┬────────┘
//!          ↓
//! ┌─────────────────┐
//! │ GameLogic       │  attempt_move validates and applies
//! │                 │  → Updates board, turn, history, captures
//! └────────┬────────┘
//!          ↓
//! ┌─────────────────┐
//! │ Phase update    │  Check / checkmate / stalemate for side to move
//! │                 │  → Updates GamePhase, GameOverState
//! └─────────────────┘
//! ```

pub mod game_logic;
pub mod input;
