pub mod board;

pub use board::{decode, generate, Color, FenError, Move, MoveList, Piece, Position, Square};
