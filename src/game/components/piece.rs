//! Piece model - a closed set of piece kinds carrying a color
//!
//! Pieces are plain `Copy` values. Two pieces with the same color and type are
//! interchangeable; the board square is the only identity a piece has.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PieceColor {
    #[default]
    White,
    Black,
}

impl PieceColor {
    /// The other side
    pub fn opponent(self) -> Self {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PieceColor::White => "White",
            PieceColor::Black => "Black",
        }
    }

    /// Row delta of a pawn step; White advances toward row 0
    pub fn pawn_direction(self) -> i8 {
        match self {
            PieceColor::White => -1,
            PieceColor::Black => 1,
        }
    }

    /// Row on which this color's pawns start and may double-step
    pub fn pawn_start_row(self) -> u8 {
        match self {
            PieceColor::White => 6,
            PieceColor::Black => 1,
        }
    }

    /// Row holding this color's back rank in the initial position
    pub fn back_row(self) -> u8 {
        match self {
            PieceColor::White => 7,
            PieceColor::Black => 0,
        }
    }
}

impl fmt::Display for PieceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceType {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceType {
    pub const ALL: [PieceType; 6] = [
        PieceType::King,
        PieceType::Queen,
        PieceType::Rook,
        PieceType::Bishop,
        PieceType::Knight,
        PieceType::Pawn,
    ];

    /// Material value in pawns. The king is never captured and counts 0.
    pub fn value(self) -> i32 {
        match self {
            PieceType::Pawn => 1,
            PieceType::Knight | PieceType::Bishop => 3,
            PieceType::Rook => 5,
            PieceType::Queen => 9,
            PieceType::King => 0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PieceType::King => "King",
            PieceType::Queen => "Queen",
            PieceType::Rook => "Rook",
            PieceType::Bishop => "Bishop",
            PieceType::Knight => "Knight",
            PieceType::Pawn => "Pawn",
        }
    }
}

/// A piece on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: PieceColor,
    pub piece_type: PieceType,
}

impl Piece {
    pub const fn new(color: PieceColor, piece_type: PieceType) -> Self {
        Self { color, piece_type }
    }

    /// Unicode chess glyph, hollow for White and filled for Black
    pub fn icon(self) -> &'static str {
        match (self.color, self.piece_type) {
            (PieceColor::White, PieceType::King) => "♔",
            (PieceColor::White, PieceType::Queen) => "♕",
            (PieceColor::White, PieceType::Rook) => "♖",
            (PieceColor::White, PieceType::Bishop) => "♗",
            (PieceColor::White, PieceType::Knight) => "♘",
            (PieceColor::White, PieceType::Pawn) => "♙",
            (PieceColor::Black, PieceType::King) => "♚",
            (PieceColor::Black, PieceType::Queen) => "♛",
            (PieceColor::Black, PieceType::Rook) => "♜",
            (PieceColor::Black, PieceType::Bishop) => "♝",
            (PieceColor::Black, PieceType::Knight) => "♞",
            (PieceColor::Black, PieceType::Pawn) => "♟",
        }
    }

    /// Letter form for terminals without chess glyphs: uppercase White, lowercase Black
    pub fn ascii(self) -> char {
        let letter = match self.piece_type {
            PieceType::King => 'K',
            PieceType::Queen => 'Q',
            PieceType::Rook => 'R',
            PieceType::Bishop => 'B',
            PieceType::Knight => 'N',
            PieceType::Pawn => 'P',
        };
        match self.color {
            PieceColor::White => letter,
            PieceColor::Black => letter.to_ascii_lowercase(),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.piece_type.name())
    }
}
