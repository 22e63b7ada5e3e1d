//! Board positions and pseudo-legal move generation.
//!
//! A [`Position`] is decoded from FEN once and never mutated afterwards;
//! [`Position::generate_moves`] lists every move that obeys piece geometry
//! and occupancy for the side to move. Moves are not checked for leaving the
//! mover's king in check.
//!
//! # Example
//! ```
//! use fen_movegen::board::Position;
//!
//! let position = Position::try_from_fen(
//!     "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
//! ).unwrap();
//! let moves = position.generate_moves();
//! println!("Starting position has {} pseudo-legal moves", moves.len());
//! ```

mod attack_tables;
mod builder;
mod error;
mod fen;
mod movegen;
mod notation;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::PositionBuilder;
pub use error::{FenError, MoveError, SquareError};
pub use movegen::generate;
pub use state::{Position, STARTING_FEN};
pub use types::{Color, Move, MoveList, Piece, Square};

/// Decode a FEN string. Same as [`Position::try_from_fen`].
pub fn decode(fen: &str) -> Result<Position, FenError> {
    Position::try_from_fen(fen)
}
