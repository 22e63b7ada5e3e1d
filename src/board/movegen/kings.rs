use super::super::attack_tables::KING_TARGETS;
use super::super::{Color, MoveList, Position, Square};

impl Position {
    /// One step in each direction. No castling.
    pub(crate) fn generate_king_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        for &to in &KING_TARGETS[from.as_index()] {
            if let Some(mv) = self.step_move(from, to, color) {
                moves.push(mv);
            }
        }
    }
}
