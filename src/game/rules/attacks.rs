//! Attack detection and square checking
//!
//! The attack map differs from pseudo-legal moves in what a piece *covers*
//! rather than where it may go:
//! - pawns attack both forward diagonals whether or not anything stands there
//! - knights and kings attack every on-board offset square, friend or foe
//! - sliders stop at the first occupied square and include it regardless of color
//!
//! A king may not step onto a square its opponent covers, even when that square
//! holds one of the opponent's own pieces, so these rules are what check
//! detection needs.

use super::board_state::BoardState;
use super::piece_moves::{slider_directions, KING_OFFSETS, KNIGHT_OFFSETS};
use crate::game::components::{Piece, PieceColor, PieceType};
use crate::game::types::Square;

/// Squares attacked by `piece` standing on `from`
pub fn attacked_squares(board: &BoardState, piece: Piece, from: Square) -> Vec<Square> {
    let mut attacks = Vec::new();

    match piece.piece_type {
        PieceType::Pawn => {
            let direction = piece.color.pawn_direction();
            attacks.extend([-1, 1].iter().filter_map(|&d_col| from.offset(direction, d_col)));
        }
        PieceType::Knight => {
            attacks.extend(KNIGHT_OFFSETS.iter().filter_map(|&(r, c)| from.offset(r, c)));
        }
        PieceType::King => {
            attacks.extend(KING_OFFSETS.iter().filter_map(|&(r, c)| from.offset(r, c)));
        }
        PieceType::Rook | PieceType::Bishop | PieceType::Queen => {
            for &(d_row, d_col) in slider_directions(piece.piece_type).unwrap_or_default() {
                let mut current = from;
                while let Some(next) = current.offset(d_row, d_col) {
                    attacks.push(next);
                    if !board.is_empty(next) {
                        break;
                    }
                    current = next;
                }
            }
        }
    }

    attacks
}

/// Check if a square is under attack by pieces of the specified color
pub fn is_square_attacked(board: &BoardState, square: Square, by_color: PieceColor) -> bool {
    board
        .pieces_of(by_color)
        .any(|(from, piece)| attacked_squares(board, piece, from).contains(&square))
}
