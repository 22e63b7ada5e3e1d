use super::super::attack_tables::KNIGHT_TARGETS;
use super::super::{Color, MoveList, Position, Square};

impl Position {
    pub(crate) fn generate_knight_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        for &to in &KNIGHT_TARGETS[from.as_index()] {
            if let Some(mv) = self.step_move(from, to, color) {
                moves.push(mv);
            }
        }
    }
}
