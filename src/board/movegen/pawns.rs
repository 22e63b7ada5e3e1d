use super::super::{Color, Move, MoveList, Position, Square};
use super::Target;

impl Position {
    /// Single push onto an empty square, then diagonal captures onto enemy pieces.
    pub(crate) fn generate_pawn_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        let dir = color.pawn_direction();

        if let Some(forward) = from.offset(dir, 0) {
            if self.is_empty(forward) {
                moves.push(Move::quiet(from, forward));
            }
        }

        for df in [-1, 1] {
            if let Some(target) = from.offset(dir, df) {
                if self.target(target, color) == Target::Enemy {
                    moves.push(Move::capture(from, target));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Move, Position, Square};

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_pawn_push_and_capture() {
        let position = Position::from_fen("8/8/8/3p4/4P3/8/8/8 w - - 0 1");
        let moves: Vec<Move> = position.moves_from(sq("e4")).into_iter().collect();
        assert_eq!(
            moves,
            vec![
                Move::quiet(sq("e4"), sq("e5")),
                Move::capture(sq("e4"), sq("d5"))
            ]
        );
    }

    #[test]
    fn test_black_pawn_moves_toward_rank_one() {
        let position = Position::from_fen("8/8/8/3p4/2P1P3/8/8/8 b - - 0 1");
        let moves: Vec<Move> = position.moves_from(sq("d5")).into_iter().collect();
        assert_eq!(
            moves,
            vec![
                Move::quiet(sq("d5"), sq("d4")),
                Move::capture(sq("d5"), sq("c4")),
                Move::capture(sq("d5"), sq("e4"))
            ]
        );
    }

    #[test]
    fn test_blocked_pawn() {
        // Blocked by an enemy piece straight ahead: pawns never capture forward.
        let position = Position::from_fen("8/8/8/4p3/4P3/8/8/8 w - - 0 1");
        assert!(position.moves_from(sq("e4")).is_empty());

        let position = Position::from_fen("8/8/8/4N3/4P3/8/8/8 w - - 0 1");
        assert!(position.moves_from(sq("e4")).is_empty());
    }

    #[test]
    fn test_no_double_step_from_start_rank() {
        let position = Position::from_fen("8/8/8/8/8/8/4P3/8 w - - 0 1");
        let moves = position.moves_from(sq("e2"));
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].to(), sq("e3"));
    }

    #[test]
    fn test_pawn_on_last_rank_has_no_moves() {
        // No promotion, and nothing beyond the board edge.
        let position = Position::from_fen("4P3/8/8/8/8/8/8/8 w - - 0 1");
        assert!(position.moves_from(sq("e8")).is_empty());

        let position = Position::from_fen("8/8/8/8/8/8/8/4p3 b - - 0 1");
        assert!(position.moves_from(sq("e1")).is_empty());
    }

    #[test]
    fn test_edge_file_pawn_single_capture() {
        let position = Position::from_fen("8/8/8/8/1p6/P7/8/8 w - - 0 1");
        let moves: Vec<Move> = position.moves_from(sq("a3")).into_iter().collect();
        assert_eq!(
            moves,
            vec![Move::quiet(sq("a3"), sq("a4")), Move::capture(sq("a3"), sq("b4"))]
        );
    }

    #[test]
    fn test_en_passant_target_is_ignored() {
        let position = Position::from_fen("8/8/8/3pP3/8/8/8/8 w - d6 0 1");
        let moves = position.moves_from(sq("e5"));
        assert_eq!(moves.len(), 1);
        assert!(!moves[0].is_capture());
    }
}
