//! Captured pieces tracking resource
//!
//! Tracks pieces captured by each player and the resulting material balance.
//! Display only: nothing here feeds back into legality decisions.
//!
//! # Material Advantage
//!
//! Positive advantage means White is ahead, negative means Black is ahead.
//! If White captured (Rook=5, Pawn=1) and Black captured (Knight=3), White's
//! advantage is (5+1) - 3 = +3 pawns.

use crate::game::components::{Piece, PieceColor};

/// Pieces taken by each side, in capture order
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CapturedPieces {
    /// Black pieces that White has captured
    pub white_captured: Vec<Piece>,
    /// White pieces that Black has captured
    pub black_captured: Vec<Piece>,
}

impl CapturedPieces {
    /// Record a capture, credited to the opponent of the captured piece
    pub fn add_capture(&mut self, captured: Piece) {
        match captured.color {
            PieceColor::White => self.black_captured.push(captured),
            PieceColor::Black => self.white_captured.push(captured),
        }
    }

    /// Pieces captured *by* `color`
    pub fn captured_by(&self, color: PieceColor) -> &[Piece] {
        match color {
            PieceColor::White => &self.white_captured,
            PieceColor::Black => &self.black_captured,
        }
    }

    /// Icons of the pieces captured by `color`, in capture order
    pub fn icons(&self, color: PieceColor) -> Vec<&'static str> {
        self.captured_by(color).iter().map(|piece| piece.icon()).collect()
    }

    /// Material difference in pawn units, White minus Black
    pub fn material_advantage(&self) -> i32 {
        fn score(pieces: &[Piece]) -> i32 {
            pieces.iter().map(|piece| piece.piece_type.value()).sum()
        }
        score(&self.white_captured) - score(&self.black_captured)
    }

    /// Clear all captured pieces (for new game)
    pub fn clear(&mut self) {
        self.white_captured.clear();
        self.black_captured.clear();
    }
}
