//! Short algebraic rendering of generated moves.
//!
//! Pawns: `e2-e3` for a push, `exd5` for a capture. Other pieces: piece
//! letter plus destination, with `x` before the destination on a capture
//! (`Nf3`, `Bxc6`, `Kxe2`). No disambiguation and no check markers.
//!
//! # Examples
//! ```
//! use fen_movegen::board::Position;
//!
//! let position = Position::new();
//! let moves = position.generate_moves();
//! assert_eq!(position.move_to_notation(&moves[0]), "a2-a3");
//! ```

use super::{Move, Piece, Position};

impl Position {
    /// Render a move generated from this position.
    ///
    /// Falls back to coordinate form when the origin square is empty, which
    /// only happens for a move taken from some other position.
    #[must_use]
    pub fn move_to_notation(&self, mv: &Move) -> String {
        let Some((_, piece)) = self.piece_at(mv.from()) else {
            return mv.to_string();
        };

        let mut text = String::with_capacity(6);
        match piece {
            Piece::Pawn if mv.is_capture() => {
                text.push(mv.from().file_char());
                text.push('x');
            }
            Piece::Pawn => {
                text.push_str(&mv.from().to_string());
                text.push('-');
            }
            _ => {
                text.push(piece.to_char().to_ascii_uppercase());
                if mv.is_capture() {
                    text.push('x');
                }
            }
        }
        text.push_str(&mv.to().to_string());
        text
    }

    /// Render every move generated for the side to move, in generation order.
    #[must_use]
    pub fn notation_list(&self) -> Vec<String> {
        self.generate_moves()
            .iter()
            .map(|mv| self.move_to_notation(mv))
            .collect()
    }
}
