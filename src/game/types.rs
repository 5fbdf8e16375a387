//! Type definitions and utilities for chess game logic
//!
//! Provides newtype patterns for board coordinates. A [`Square`] is always on the
//! board: the only ways to build one validate the coordinates, so the rest of the
//! engine indexes the board without bounds checks.
//!
//! # Coordinate convention
//!
//! - `row` 0 is Black's back rank (rank 8), `row` 7 is White's back rank (rank 1)
//! - `col` 0..7 maps to files `a`..`h`

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::{GameError, GameResult};

/// Number of rows and columns on the board
pub const BOARD_SIZE: u8 = 8;

/// Board coordinate representing a file (column) on the chessboard
///
/// Values range from 0 (file 'a') to 7 (file 'h').
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct File(u8);

impl File {
    /// Create a file from a character ('a'..='h')
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'a'..='h' => Some(File(c as u8 - b'a')),
            _ => None,
        }
    }

    /// Convert file to character ('a'..='h')
    ///
    /// ```
    /// # use xfchess_rules::game::types::Square;
    /// let square = Square::new(6, 4).unwrap();
    /// assert_eq!(square.file().to_char(), 'e');
    /// ```
    pub fn to_char(self) -> char {
        (b'a' + self.0) as char
    }

    /// Get the file index (0-7), equal to the column
    pub fn index(self) -> u8 {
        self.0
    }
}

/// Board coordinate representing a rank on the chessboard
///
/// Stores the rank number as shown to players (1-8). Rank 8 is row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rank(u8);

impl Rank {
    /// Create a rank from a number (1-8)
    pub fn from_number(n: u8) -> Option<Self> {
        if (1..=BOARD_SIZE).contains(&n) {
            Some(Rank(n))
        } else {
            None
        }
    }

    /// Convert rank to number (1-8)
    pub fn to_number(self) -> u8 {
        self.0
    }

    /// Row index (0-7) holding this rank
    pub fn row(self) -> u8 {
        BOARD_SIZE - self.0
    }
}

#[derive(Deserialize)]
struct RawSquare {
    row: u8,
    col: u8,
}

impl TryFrom<RawSquare> for Square {
    type Error = GameError;

    fn try_from(raw: RawSquare) -> GameResult<Self> {
        Square::new(raw.row, raw.col)
    }
}

/// Board square position (row, col)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawSquare")]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Create a square from row and column indices
    ///
    /// Fails with [`GameError::InvalidSquare`] instead of clamping.
    pub fn new(row: u8, col: u8) -> GameResult<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Ok(Square { row, col })
        } else {
            Err(GameError::InvalidSquare { row, col })
        }
    }

    /// Create a square from algebraic notation (e.g., "e4")
    pub fn from_algebraic(notation: &str) -> GameResult<Self> {
        let invalid = || GameError::InvalidNotation {
            notation: notation.to_string(),
        };

        let mut chars = notation.trim().chars();
        let (Some(file_char), Some(rank_char), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(invalid());
        };

        let file = File::from_char(file_char.to_ascii_lowercase()).ok_or_else(invalid)?;
        let rank = rank_char
            .to_digit(10)
            .and_then(|n| Rank::from_number(n as u8))
            .ok_or_else(invalid)?;

        Ok(Square {
            row: rank.row(),
            col: file.index(),
        })
    }

    pub fn row(self) -> u8 {
        self.row
    }

    pub fn col(self) -> u8 {
        self.col
    }

    pub fn file(self) -> File {
        File(self.col)
    }

    pub fn rank(self) -> Rank {
        Rank(BOARD_SIZE - self.row)
    }

    /// Step by a (row, col) delta, returning `None` when the result leaves the board
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        let step = |from: u8, delta: i8| {
            u8::try_from(i16::from(from) + i16::from(delta))
                .ok()
                .filter(|&v| v < BOARD_SIZE)
        };
        Some(Square {
            row: step(self.row, d_row)?,
            col: step(self.col, d_col)?,
        })
    }

    /// All 64 squares, row-major from a8 to h1
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square { row, col }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file().to_char(), self.rank().to_number())
    }
}

impl std::str::FromStr for Square {
    type Err = GameError;

    fn from_str(s: &str) -> GameResult<Self> {
        Square::from_algebraic(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_rejects_out_of_bounds() {
        //! Out-of-range coordinates must fail rather than clamp
        assert_eq!(
            Square::new(8, 0),
            Err(GameError::InvalidSquare { row: 8, col: 0 })
        );
        assert_eq!(
            Square::new(3, 200),
            Err(GameError::InvalidSquare { row: 3, col: 200 })
        );
        assert!(Square::new(7, 7).is_ok());
    }

    #[test]
    fn test_square_display_uses_rank_from_row() {
        //! Row 0 is rank 8, row 7 is rank 1
        assert_eq!(Square::new(0, 0).unwrap().to_string(), "a8");
        assert_eq!(Square::new(7, 7).unwrap().to_string(), "h1");
        assert_eq!(Square::new(6, 4).unwrap().to_string(), "e2");
    }

    #[test]
    fn test_square_from_algebraic() {
        let e4 = Square::from_algebraic("e4").unwrap();
        assert_eq!((e4.row(), e4.col()), (4, 4));

        let a8: Square = "A8".parse().unwrap();
        assert_eq!((a8.row(), a8.col()), (0, 0));

        for bad in ["", "e", "e9", "i1", "e44", "4e"] {
            assert!(
                matches!(
                    Square::from_algebraic(bad),
                    Err(GameError::InvalidNotation { .. })
                ),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_square_offset_stays_on_board() {
        let a1 = Square::new(7, 0).unwrap();
        assert_eq!(a1.offset(-1, 0), Square::new(6, 0).ok());
        assert_eq!(a1.offset(1, 0), None);
        assert_eq!(a1.offset(0, -1), None);
        assert_eq!(a1.offset(-7, 7), Square::new(0, 7).ok());
    }

    #[test]
    fn test_square_offset_extreme_deltas() {
        //! Deltas at the ends of the i8 range fall off the board instead of overflowing
        let h8 = Square::new(0, 7).unwrap();
        assert_eq!(h8.offset(0, 127), None);
        assert_eq!(h8.offset(-128, 0), None);
        assert_eq!(h8.offset(127, -128), None);

        let a1 = Square::new(7, 0).unwrap();
        assert_eq!(a1.offset(i8::MIN, i8::MAX), None);
    }

    #[test]
    fn test_all_squares() {
        let squares: Vec<Square> = Square::all().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!(squares[0].to_string(), "a8");
        assert_eq!(squares[63].to_string(), "h1");
    }

    #[test]
    fn test_square_serde_validates() {
        let json = serde_json::to_string(&Square::new(6, 4).unwrap()).unwrap();
        assert_eq!(json, r#"{"row":6,"col":4}"#);

        let back: Square = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Square::new(6, 4).unwrap());

        assert!(serde_json::from_str::<Square>(r#"{"row":9,"col":0}"#).is_err());
    }
}
