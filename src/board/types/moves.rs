//! Move types and move list.

use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;
use crate::board::error::MoveError;

const FLAG_QUIET: u16 = 0;
const FLAG_CAPTURE: u16 = 1;

/// Compact 16-bit move representation.
///
/// Encoding:
/// - bits 0-5:   from square (0-63)
/// - bits 6-11:  to square (0-63)
/// - bit 12:     capture flag
///
/// A move is a plain value: it does not borrow the position it came from.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "u16", into = "u16")
)]
pub struct Move(u16);

impl Move {
    /// Create a quiet move (destination was empty)
    #[inline]
    #[must_use]
    pub const fn quiet(from: Square, to: Square) -> Self {
        Move::with_flag(from, to, FLAG_QUIET)
    }

    /// Create a capture move (destination held an opposing piece)
    #[inline]
    #[must_use]
    pub const fn capture(from: Square, to: Square) -> Self {
        Move::with_flag(from, to, FLAG_CAPTURE)
    }

    #[inline]
    const fn with_flag(from: Square, to: Square, flag: u16) -> Self {
        let from_idx = from.as_index() as u16;
        let to_idx = to.as_index() as u16;
        Move(from_idx | (to_idx << 6) | (flag << 12))
    }

    /// Get the source square
    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        Square::from_index((self.0 & 0x3F) as usize)
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        Square::from_index(((self.0 >> 6) & 0x3F) as usize)
    }

    /// Returns true if this move displaces a piece on the destination square
    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        self.0 >> 12 == FLAG_CAPTURE
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}{}", self.from(), self.to())?;
        if self.is_capture() {
            write!(f, " cap")?;
        }
        write!(f, ")")
    }
}

impl From<Move> for u16 {
    fn from(mv: Move) -> Self {
        mv.0
    }
}

/// Accepts only encodings whose flag bits are quiet or capture.
impl TryFrom<u16> for Move {
    type Error = MoveError;

    fn try_from(raw: u16) -> Result<Self, Self::Error> {
        match raw >> 12 {
            FLAG_QUIET | FLAG_CAPTURE => Ok(Move(raw)),
            _ => Err(MoveError::InvalidEncoding { raw }),
        }
    }
}

/// Coordinate form, e.g. `e2e3`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from(), self.to())
    }
}

/// Ordered list of generated moves.
///
/// Heap-backed: decoded positions may carry any number of pieces, so there is
/// no fixed upper bound on the move count.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    pub(crate) fn new() -> Self {
        MoveList {
            moves: Vec::with_capacity(64),
        }
    }

    #[inline]
    pub(crate) fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Move> {
        self.moves.get(idx).copied()
    }

    /// Number of moves flagged as captures
    #[must_use]
    pub fn capture_count(&self) -> usize {
        self.moves.iter().filter(|m| m.is_capture()).count()
    }

    #[must_use]
    pub fn contains(&self, mv: Move) -> bool {
        self.moves.contains(&mv)
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        assert!(
            idx < self.moves.len(),
            "MoveList index {} out of bounds (len {})",
            idx,
            self.moves.len()
        );
        &self.moves[idx]
    }
}
