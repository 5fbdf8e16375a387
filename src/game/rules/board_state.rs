//! Board state representation for move validation
//!
//! The 8x8 grid of optional pieces is the single source of truth for what is
//! where. Squares are validated on construction, so every access here is in bounds.

use crate::game::components::{Piece, PieceColor, PieceType};
use crate::game::types::{Square, BOARD_SIZE};

/// Standard back rank order, files a through h
const BACK_ROW: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// Represents the state of the board for move validation
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardState {
    squares: [[Option<Piece>; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl BoardState {
    /// A board with no pieces
    pub fn empty() -> Self {
        Self::default()
    }

    /// Standard initial position: Black on rows 0-1, White on rows 6-7
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for color in [PieceColor::White, PieceColor::Black] {
            let back = color.back_row() as usize;
            let pawns = color.pawn_start_row() as usize;
            for (col, piece_type) in BACK_ROW.iter().enumerate() {
                board.squares[back][col] = Some(Piece::new(color, *piece_type));
                board.squares[pawns][col] = Some(Piece::new(color, PieceType::Pawn));
            }
        }
        board
    }

    /// Build a position from explicit placements; later entries overwrite earlier ones
    pub fn from_pieces(pieces: &[(Piece, Square)]) -> Self {
        let mut board = Self::empty();
        for &(piece, square) in pieces {
            board.set(square, Some(piece));
        }
        board
    }

    pub fn get(&self, square: Square) -> Option<Piece> {
        self.squares[square.row() as usize][square.col() as usize]
    }

    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.row() as usize][square.col() as usize] = piece;
    }

    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    pub fn get_piece_color(&self, square: Square) -> Option<PieceColor> {
        self.get(square).map(|piece| piece.color)
    }

    /// Locate the king of `color`, scanning row-major
    pub fn find_king(&self, color: PieceColor) -> Option<Square> {
        self.pieces()
            .find(|(_, piece)| piece.color == color && piece.piece_type == PieceType::King)
            .map(|(square, _)| square)
    }

    /// Every occupied square with its piece, row-major
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|square| self.get(square).map(|piece| (square, piece)))
    }

    pub fn pieces_of(&self, color: PieceColor) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }
}
