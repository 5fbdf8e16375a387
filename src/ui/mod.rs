//! UI module - Text board presentation
//!
//! A terminal adapter over [`GameSession`](crate::game::GameSession):
//!
//! - **text_board**: Renders the board, turn indicator, move list and captures
//! - **command**: Parses player input lines into [`Command`]s
//!
//! The adapter only reads session state and forwards requests; it holds no
//! chess logic of its own.

pub mod command;
pub mod text_board;

pub use command::{parse_command, Command};
pub use text_board::{render_board, render_history, render_status};
