use super::{Color, Piece, Square};

/// FEN of the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// A decoded board position.
///
/// Every one of the 64 squares holds a value (empty or a piece). Castling
/// rights, en passant target and the move counters are kept verbatim from the
/// FEN; move generation never reads them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub(crate) squares: [Option<(Color, Piece)>; 64],
    pub(crate) side_to_move: Color,
    pub(crate) castling: String,
    pub(crate) en_passant: String,
    pub(crate) halfmove_clock: String,
    pub(crate) fullmove_number: String,
}

impl Position {
    /// The standard starting position.
    #[must_use]
    pub fn new() -> Self {
        super::PositionBuilder::starting_position().build()
    }

    /// A board with no pieces, White to move and neutral metadata.
    #[must_use]
    pub(crate) fn empty() -> Self {
        Position {
            squares: [None; 64],
            side_to_move: Color::White,
            castling: "-".to_string(),
            en_passant: "-".to_string(),
            halfmove_clock: "0".to_string(),
            fullmove_number: "1".to_string(),
        }
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.as_index()]
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.as_index()].is_none()
    }

    #[inline]
    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.squares[sq.as_index()] = Some((color, piece));
    }

    #[inline]
    pub(crate) fn clear_square(&mut self, sq: Square) {
        self.squares[sq.as_index()] = None;
    }

    #[inline]
    #[must_use]
    pub const fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[must_use]
    pub fn castling(&self) -> &str {
        &self.castling
    }

    #[must_use]
    pub fn en_passant(&self) -> &str {
        &self.en_passant
    }

    #[must_use]
    pub fn halfmove_clock(&self) -> &str {
        &self.halfmove_clock
    }

    #[must_use]
    pub fn fullmove_number(&self) -> &str {
        &self.fullmove_number
    }

    /// Occupied squares with their pieces, in a1..h8 order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Color, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| slot.map(|(c, p)| (Square::from_index(idx), c, p)))
    }

    /// Number of pieces of one color
    #[must_use]
    pub fn count(&self, color: Color) -> usize {
        self.pieces().filter(|&(_, c, _)| c == color).count()
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}
