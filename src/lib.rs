//! XFChess rules engine
//!
//! Standard chess movement, capture, check, checkmate and stalemate over an
//! 8x8 board, with a [`GameSession`](game::GameSession) controller that a
//! presentation layer drives through selection and move requests.
//!
//! ```
//! use xfchess_rules::game::{GameSession, Square};
//!
//! let mut session = GameSession::new();
//! let e2 = Square::from_algebraic("e2").unwrap();
//! let e4 = Square::from_algebraic("e4").unwrap();
//!
//! let result = session.attempt_move(e2, e4);
//! assert!(result.applied);
//! assert_eq!(session.move_history(), vec!["♙ e2→e4"]);
//! ```

pub mod core;
pub mod game;
pub mod ui;
