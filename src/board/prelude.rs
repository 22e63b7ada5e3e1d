//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use fen_movegen::board::prelude::*;
//!
//! let position = decode(STARTING_FEN).unwrap();
//! assert_eq!(generate(&position).len(), 12);
//! ```

pub use super::{
    decode, generate, Color, FenError, Move, MoveList, Piece, Position, PositionBuilder, Square,
    SquareError, STARTING_FEN,
};
