//! Error types for position decoding.

use std::fmt;

/// A FEN string that does not describe a well-formed position.
///
/// Every variant is the same failure kind (malformed description); the
/// variant records which field or rank segment was rejected. Ranks are
/// reported as board rank numbers, 8 down to 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string does not have exactly six fields
    WrongFieldCount { found: usize },
    /// Piece placement does not have exactly eight rank segments
    WrongRankCount { found: usize },
    /// Character in a rank segment is neither a piece letter nor a digit 1-8
    InvalidPiece { rank: usize, char: char },
    /// Rank segment describes more than eight files
    RankOverflow { rank: usize, files: usize },
    /// Rank segment describes fewer than eight files
    RankUnderflow { rank: usize, files: usize },
    /// Side to move is not 'w' or 'b'
    InvalidSideToMove { found: String },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::WrongFieldCount { found } => {
                write!(f, "FEN must have exactly 6 fields, found {found}")
            }
            FenError::WrongRankCount { found } => {
                write!(f, "Piece placement must have 8 ranks, found {found}")
            }
            FenError::InvalidPiece { rank, char } => {
                write!(f, "Invalid piece character '{char}' in rank {rank}")
            }
            FenError::RankOverflow { rank, files } => {
                write!(f, "Too many files ({files}) in rank {rank}")
            }
            FenError::RankUnderflow { rank, files } => {
                write!(f, "Too few files ({files}) in rank {rank}")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for raw move encodings that no generator can produce
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Bits above the capture flag are set
    InvalidEncoding { raw: u16 },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::InvalidEncoding { raw } => {
                write!(f, "Invalid move encoding {raw:#06x} (flag bits must be 0 or 1)")
            }
        }
    }
}

impl std::error::Error for MoveError {}
