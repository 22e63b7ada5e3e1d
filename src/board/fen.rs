use std::str::FromStr;

use log::debug;

use super::error::FenError;
use super::{Color, Piece, Position, Square};

const FIELD_COUNT: usize = 6;

impl Position {
    /// Parse a position from FEN notation.
    ///
    /// Requires all six fields. The piece placement must list eight ranks
    /// (8 down to 1), each resolving to exactly eight files. Castling rights,
    /// en passant target and the move counters are stored as given.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let result = Self::decode_fields(fen);
        match &result {
            Ok(position) => debug!(
                "decoded position: {} white, {} black, {} to move",
                position.count(Color::White),
                position.count(Color::Black),
                position.side_to_move
            ),
            Err(err) => debug!("rejected FEN {fen:?}: {err}"),
        }
        result
    }

    fn decode_fields(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        let [placement, side, castling, en_passant, halfmove, fullmove] = parts[..] else {
            return Err(FenError::WrongFieldCount { found: parts.len() });
        };

        let mut position = Position::empty();
        position.decode_placement(placement)?;

        position.side_to_move = match side {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        position.castling = castling.to_string();
        position.en_passant = en_passant.to_string();
        position.halfmove_clock = halfmove.to_string();
        position.fullmove_number = fullmove.to_string();
        Ok(position)
    }

    fn decode_placement(&mut self, placement: &str) -> Result<(), FenError> {
        let segments: Vec<&str> = placement.split('/').collect();
        if segments.len() != 8 {
            return Err(FenError::WrongRankCount {
                found: segments.len(),
            });
        }

        for (row, segment) in segments.iter().enumerate() {
            let rank_idx = 7 - row;
            let rank = rank_idx + 1;
            let mut file = 0;
            for c in segment.chars() {
                match c.to_digit(10) {
                    Some(empty @ 1..=8) => {
                        file += empty as usize;
                        if file > 8 {
                            return Err(FenError::RankOverflow { rank, files: file });
                        }
                    }
                    _ => {
                        let piece =
                            Piece::from_char(c).ok_or(FenError::InvalidPiece { rank, char: c })?;
                        let sq = Square::new(rank_idx, file).ok_or(FenError::RankOverflow {
                            rank,
                            files: file + 1,
                        })?;
                        self.set_piece(sq, Color::of_fen_char(c), piece);
                        file += 1;
                    }
                }
            }
            if file < 8 {
                return Err(FenError::RankUnderflow { rank, files: file });
            }
        }
        Ok(())
    }

    /// Parse a position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Convert the position to FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                let Some(sq) = Square::new(rank, file) else {
                    continue;
                };
                if let Some((color, piece)) = self.piece_at(sq) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            self.side_to_move.to_fen_char(),
            self.castling,
            self.en_passant,
            self.halfmove_clock,
            self.fullmove_number
        )
    }
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::try_from_fen(s)
    }
}
