//! Chess piece movement rules
//!
//! Pseudo-legal move generation: where a piece may go by its movement pattern
//! alone, ignoring whether the move exposes its own king. Pure functions of
//! board + piece + square with no side effects.

use super::board_state::BoardState;
use crate::game::components::{Piece, PieceColor, PieceType};
use crate::game::types::Square;

pub(crate) const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub(crate) const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub(crate) const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

pub(crate) const KING_OFFSETS: [(i8, i8); 8] = QUEEN_DIRECTIONS;

/// Ray directions for sliding pieces, `None` for everything else
pub(crate) fn slider_directions(piece_type: PieceType) -> Option<&'static [(i8, i8)]> {
    match piece_type {
        PieceType::Rook => Some(&ROOK_DIRECTIONS),
        PieceType::Bishop => Some(&BISHOP_DIRECTIONS),
        PieceType::Queen => Some(&QUEEN_DIRECTIONS),
        PieceType::Knight | PieceType::King | PieceType::Pawn => None,
    }
}

/// Get all pseudo-legal destinations for a piece standing on `from`
pub fn pseudo_legal_moves(board: &BoardState, piece: Piece, from: Square) -> Vec<Square> {
    let mut moves = Vec::new();

    match piece.piece_type {
        PieceType::Pawn => pawn_moves(board, piece.color, from, &mut moves),
        PieceType::Knight => step_moves(board, piece.color, from, &KNIGHT_OFFSETS, &mut moves),
        PieceType::King => step_moves(board, piece.color, from, &KING_OFFSETS, &mut moves),
        PieceType::Rook => sliding_moves(board, piece.color, from, &ROOK_DIRECTIONS, &mut moves),
        PieceType::Bishop => {
            sliding_moves(board, piece.color, from, &BISHOP_DIRECTIONS, &mut moves)
        }
        PieceType::Queen => sliding_moves(board, piece.color, from, &QUEEN_DIRECTIONS, &mut moves),
    }

    moves
}

/// Check if a move matches the piece's movement pattern
pub fn is_valid_move(board: &BoardState, piece: Piece, from: Square, to: Square) -> bool {
    pseudo_legal_moves(board, piece, from).contains(&to)
}

fn pawn_moves(board: &BoardState, color: PieceColor, from: Square, moves: &mut Vec<Square>) {
    let direction = color.pawn_direction();

    // Forward move
    if let Some(one) = from.offset(direction, 0) {
        if board.is_empty(one) {
            moves.push(one);

            // Double move from starting row, both squares empty
            if from.row() == color.pawn_start_row() {
                if let Some(two) = from.offset(2 * direction, 0) {
                    if board.is_empty(two) {
                        moves.push(two);
                    }
                }
            }
        }
    }

    // Capture diagonally
    for d_col in [-1, 1] {
        let Some(target) = from.offset(direction, d_col) else {
            continue;
        };
        if board.get_piece_color(target) == Some(color.opponent()) {
            moves.push(target);
        }
    }
}

fn step_moves(
    board: &BoardState,
    color: PieceColor,
    from: Square,
    offsets: &[(i8, i8)],
    moves: &mut Vec<Square>,
) {
    for &(d_row, d_col) in offsets {
        let Some(target) = from.offset(d_row, d_col) else {
            continue;
        };
        if board.get_piece_color(target) != Some(color) {
            moves.push(target);
        }
    }
}

fn sliding_moves(
    board: &BoardState,
    color: PieceColor,
    from: Square,
    directions: &[(i8, i8)],
    moves: &mut Vec<Square>,
) {
    for &(d_row, d_col) in directions {
        let mut current = from;
        while let Some(next) = current.offset(d_row, d_col) {
            match board.get_piece_color(next) {
                None => moves.push(next),
                Some(occupant) => {
                    if occupant != color {
                        moves.push(next);
                    }
                    break;
                }
            }
            current = next;
        }
    }
}
