//! Core chess types.
//!
//! - `Piece` and `Color` - chess piece types and colors
//! - `Square` - bounds-checked board square
//! - `Move` and `MoveList` - generated moves

mod moves;
mod piece;
mod square;

pub use moves::{Move, MoveList};
pub use piece::{Color, Piece};
pub use square::Square;
