//! Pseudo-legal move generation.
//!
//! Moves follow piece geometry and occupancy only. Nothing here looks at
//! check, castling rights, en passant targets or promotion.

mod kings;
mod knights;
mod pawns;
mod sliders;

use log::trace;

use super::{Color, Move, MoveList, Piece, Position, Square};

/// What a destination square holds, seen from the moving side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Target {
    Empty,
    Enemy,
    Friendly,
}

impl Position {
    /// Generate every pseudo-legal move for the side to move.
    ///
    /// Squares are visited rank 8 to rank 1, file a to file h. The result is
    /// the same for the same position on every call.
    #[must_use]
    pub fn generate_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        for rank in (0..8).rev() {
            for file in 0..8 {
                if let Some(from) = Square::new(rank, file) {
                    self.push_square_moves(from, &mut moves);
                }
            }
        }
        trace!(
            "generated {} moves ({} captures) for {}",
            moves.len(),
            moves.capture_count(),
            self.side_to_move
        );
        moves
    }

    /// Moves of the piece on `from`; empty unless it belongs to the side to move.
    #[must_use]
    pub fn moves_from(&self, from: Square) -> MoveList {
        let mut moves = MoveList::new();
        self.push_square_moves(from, &mut moves);
        moves
    }

    fn push_square_moves(&self, from: Square, moves: &mut MoveList) {
        let color = self.side_to_move;
        match self.piece_at(from) {
            Some((owner, piece)) if owner == color => match piece {
                Piece::Pawn => self.generate_pawn_moves(from, color, moves),
                Piece::Knight => self.generate_knight_moves(from, color, moves),
                Piece::Bishop | Piece::Rook | Piece::Queen => {
                    self.generate_slider_moves(from, color, piece, moves);
                }
                Piece::King => self.generate_king_moves(from, color, moves),
            },
            _ => {}
        }
    }

    #[inline]
    pub(crate) fn target(&self, sq: Square, mover: Color) -> Target {
        match self.piece_at(sq) {
            None => Target::Empty,
            Some((owner, _)) if owner == mover => Target::Friendly,
            Some(_) => Target::Enemy,
        }
    }

    /// Occupancy rule for single-step pieces: empty or enemy squares only.
    #[inline]
    pub(crate) fn step_move(&self, from: Square, to: Square, mover: Color) -> Option<Move> {
        match self.target(to, mover) {
            Target::Empty => Some(Move::quiet(from, to)),
            Target::Enemy => Some(Move::capture(from, to)),
            Target::Friendly => None,
        }
    }
}

/// Free-function form of [`Position::generate_moves`].
#[must_use]
pub fn generate(position: &Position) -> MoveList {
    position.generate_moves()
}
