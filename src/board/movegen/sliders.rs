use super::super::attack_tables::{ALL_DIRECTIONS, DIAGONALS, ORTHOGONALS};
use super::super::{Color, Move, MoveList, Piece, Position, Square};
use super::Target;

impl Position {
    pub(crate) fn generate_slider_moves(
        &self,
        from: Square,
        color: Color,
        piece: Piece,
        moves: &mut MoveList,
    ) {
        let directions: &[(isize, isize)] = match piece {
            Piece::Bishop => &DIAGONALS,
            Piece::Rook => &ORTHOGONALS,
            Piece::Queen => &ALL_DIRECTIONS,
            Piece::Pawn | Piece::Knight | Piece::King => return,
        };
        self.cast_rays(from, color, directions, moves);
    }

    /// Walk each direction until the edge or the first piece.
    ///
    /// An enemy blocker is captured and ends the ray; a friendly one just ends it.
    pub(crate) fn cast_rays(
        &self,
        from: Square,
        color: Color,
        directions: &[(isize, isize)],
        moves: &mut MoveList,
    ) {
        for &(dr, df) in directions {
            let mut cursor = from.offset(dr, df);
            while let Some(to) = cursor {
                match self.target(to, color) {
                    Target::Empty => moves.push(Move::quiet(from, to)),
                    Target::Enemy => {
                        moves.push(Move::capture(from, to));
                        break;
                    }
                    Target::Friendly => break,
                }
                cursor = to.offset(dr, df);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Position, Square};

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn destinations(position: &Position, from: &str) -> Vec<String> {
        let mut dests: Vec<String> = position
            .moves_from(sq(from))
            .iter()
            .map(|m| m.to().to_string())
            .collect();
        dests.sort();
        dests
    }

    #[test]
    fn test_rook_open_board() {
        let position = Position::from_fen("8/8/8/8/3R4/8/8/8 w - - 0 1");
        assert_eq!(position.moves_from(sq("d4")).len(), 14);
    }

    #[test]
    fn test_bishop_open_board() {
        let position = Position::from_fen("8/8/8/8/3B4/8/8/8 w - - 0 1");
        assert_eq!(position.moves_from(sq("d4")).len(), 13);
    }

    #[test]
    fn test_queen_is_rook_plus_bishop() {
        let position = Position::from_fen("8/8/8/8/3Q4/8/8/8 w - - 0 1");
        assert_eq!(position.moves_from(sq("d4")).len(), 27);
    }

    #[test]
    fn test_rook_stops_at_enemy_and_friendly() {
        let position = Position::from_fen("3p4/8/8/8/1P1R4/8/8/8 w - - 0 1");
        assert_eq!(
            destinations(&position, "d4"),
            vec!["c4", "d1", "d2", "d3", "d5", "d6", "d7", "d8", "e4", "f4", "g4", "h4"]
        );
        let capture = position
            .moves_from(sq("d4"))
            .iter()
            .find(|m| m.is_capture())
            .copied();
        assert_eq!(capture.map(|m| m.to()), Some(sq("d8")));
    }

    #[test]
    fn test_bishop_boxed_in() {
        let position = Position::from_fen("8/8/8/2P1P3/3B4/2P1P3/8/8 w - - 0 1");
        assert!(position.moves_from(sq("d4")).is_empty());
    }

    #[test]
    fn test_queen_surrounded_by_enemies() {
        let position = Position::from_fen("8/8/8/2ppp3/2pQp3/2ppp3/8/8 w - - 0 1");
        let moves = position.moves_from(sq("d4"));
        assert_eq!(moves.len(), 8);
        assert_eq!(moves.capture_count(), 8);
    }
}
