//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use fen_movegen::board::{Color, Piece, PositionBuilder, Square};
//!
//! let d4: Square = "d4".parse().unwrap();
//! let position = PositionBuilder::new()
//!     .piece(d4, Color::White, Piece::Rook)
//!     .side_to_move(Color::White)
//!     .build();
//! assert_eq!(position.generate_moves().len(), 14);
//! ```

use super::{Color, Piece, Position, Square};

const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// A fluent builder for constructing `Position` values.
#[derive(Clone, Debug)]
pub struct PositionBuilder {
    position: Position,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        PositionBuilder {
            position: Position::empty(),
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();
        for (file, &piece) in BACK_RANK.iter().enumerate() {
            for (back, pawns, color) in [(0, 1, Color::White), (7, 6, Color::Black)] {
                if let (Some(back_sq), Some(pawn_sq)) =
                    (Square::new(back, file), Square::new(pawns, file))
                {
                    builder.position.set_piece(back_sq, color, piece);
                    builder.position.set_piece(pawn_sq, color, Piece::Pawn);
                }
            }
        }
        builder.position.castling = "KQkq".to_string();
        builder
    }

    /// Place a piece on the board, replacing whatever was there.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.position.set_piece(square, color, piece);
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.position.clear_square(square);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub fn side_to_move(mut self, color: Color) -> Self {
        self.position.side_to_move = color;
        self
    }

    /// Set the opaque castling field.
    #[must_use]
    pub fn castling(mut self, castling: &str) -> Self {
        self.position.castling = castling.to_string();
        self
    }

    /// Set the opaque en passant field.
    #[must_use]
    pub fn en_passant(mut self, target: &str) -> Self {
        self.position.en_passant = target.to_string();
        self
    }

    #[must_use]
    pub fn build(self) -> Position {
        self.position
    }
}
