//! Check, checkmate and stalemate evaluation
//!
//! Legality is decided by simulation: a candidate move is played on the board,
//! the mover's king is tested for attack, and the board is restored. The
//! restore lives in [`SimulatedMove`]'s `Drop`, so it runs on every exit path
//! of the probe, unwinding included.

use std::ops::Deref;

use tracing::warn;

use super::attacks::is_square_attacked;
use super::board_state::BoardState;
use super::piece_moves::pseudo_legal_moves;
use crate::game::components::{Piece, PieceColor};
use crate::game::types::Square;

/// A move temporarily played on a board, undone when dropped
pub struct SimulatedMove<'a> {
    board: &'a mut BoardState,
    from: Square,
    to: Square,
    saved_from: Option<Piece>,
    saved_to: Option<Piece>,
}

impl<'a> SimulatedMove<'a> {
    /// Move whatever stands on `from` to `to`, remembering both endpoints
    pub fn new(board: &'a mut BoardState, from: Square, to: Square) -> Self {
        let saved_from = board.get(from);
        let saved_to = board.get(to);
        board.set(to, saved_from);
        board.set(from, None);
        Self {
            board,
            from,
            to,
            saved_from,
            saved_to,
        }
    }
}

impl Deref for SimulatedMove<'_> {
    type Target = BoardState;

    fn deref(&self) -> &BoardState {
        &*self.board
    }
}

impl Drop for SimulatedMove<'_> {
    fn drop(&mut self) {
        self.board.set(self.to, self.saved_to);
        self.board.set(self.from, self.saved_from);
    }
}

/// Run `probe` against the board as it would be after `from -> to`
pub fn simulate_move<R>(
    board: &mut BoardState,
    from: Square,
    to: Square,
    probe: impl FnOnce(&BoardState) -> R,
) -> R {
    let simulated = SimulatedMove::new(board, from, to);
    probe(&*simulated)
}

/// Whether `color`'s king is attacked. A position without that king is never in check.
pub fn is_in_check(board: &BoardState, color: PieceColor) -> bool {
    match board.find_king(color) {
        Some(king) => is_square_attacked(board, king, color.opponent()),
        None => false,
    }
}

/// Whether `color` would be in check after playing `from -> to`
pub fn is_in_check_after(
    board: &mut BoardState,
    color: PieceColor,
    from: Square,
    to: Square,
) -> bool {
    simulate_move(board, from, to, |after| is_in_check(after, color))
}

/// Pseudo-legal moves that do not leave the mover's own king attacked
pub fn legal_moves(board: &mut BoardState, piece: Piece, from: Square) -> Vec<Square> {
    pseudo_legal_moves(board, piece, from)
        .into_iter()
        .filter(|&to| !is_in_check_after(board, piece.color, from, to))
        .collect()
}

/// Legal moves of the piece standing on `from`, empty when the square is empty
pub fn legal_moves_from(board: &mut BoardState, from: Square) -> Vec<Square> {
    match board.get(from) {
        Some(piece) => legal_moves(board, piece, from),
        None => Vec::new(),
    }
}

/// Whether any piece of `color` has at least one legal move
pub fn has_any_legal_moves(board: &mut BoardState, color: PieceColor) -> bool {
    let pieces: Vec<(Square, Piece)> = board.pieces_of(color).collect();
    pieces
        .into_iter()
        .any(|(from, piece)| !legal_moves(board, piece, from).is_empty())
}

/// In check with no legal move to escape
pub fn is_checkmate(board: &mut BoardState, color: PieceColor) -> bool {
    is_in_check(board, color) && !has_any_legal_moves(board, color)
}

/// Not in check, but no legal move available
pub fn is_stalemate(board: &mut BoardState, color: PieceColor) -> bool {
    if board.find_king(color).is_none() {
        warn!("[RULES] {color} has no king; stalemate test runs on a kingless position");
    }
    !is_in_check(board, color) && !has_any_legal_moves(board, color)
}
