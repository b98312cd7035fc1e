//! Nine-bit cell sets.
//!
//! Bit `i` stands for the cell at row `i / 3`, column `i % 3`. Only the low
//! nine bits of the backing `u16` are ever set.

use super::types::{CELLS, Cell, Line};
use core::fmt;
use core::ops::{BitAnd, BitOr, BitOrAssign, Not};
use serde::{Deserialize, Serialize};

/// A set of board cells packed into the low nine bits of a `u16`.
///
/// Deserialization goes through [`Mask::from_raw`], so bits above the board
/// are dropped on the way in.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u16")]
pub struct Mask(u16);

/// Every winning line: three rows, three columns, two diagonals.
pub const WINNING_LINES: [Mask; 8] = [
    // Rows, bottom first
    Mask(0b111_000_000),
    Mask(0b000_111_000),
    Mask(0b000_000_111),
    // Columns, right first
    Mask(0b100_100_100),
    Mask(0b010_010_010),
    Mask(0b001_001_001),
    // Diagonals
    Mask(0b100_010_001),
    Mask(0b001_010_100),
];

impl Mask {
    /// The empty set.
    pub const EMPTY: Mask = Mask(0);

    /// All nine cells (decimal 511).
    pub const FULL: Mask = Mask((1 << CELLS) - 1);

    /// Creates a mask from raw bits, dropping anything above bit 8.
    #[inline]
    pub const fn from_raw(raw: u16) -> Self {
        Mask(raw & Self::FULL.0)
    }

    /// Raw bits of the mask.
    #[inline]
    pub const fn into_raw(self) -> u16 {
        self.0
    }

    /// Single-cell mask for `index`, or `None` if the index is off the board.
    #[inline]
    pub const fn cell(index: usize) -> Option<Self> {
        if index < CELLS {
            Some(Mask(1 << index))
        } else {
            None
        }
    }

    /// Returns `true` if the cell at `index` is in the set.
    #[inline]
    pub const fn contains(self, index: usize) -> bool {
        index < CELLS && (self.0 >> index) & 1 == 1
    }

    /// Returns `true` if every cell of `other` is in the set.
    #[inline]
    pub const fn contains_all(self, other: Mask) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns `true` if the two sets share no cell.
    #[inline]
    pub const fn is_disjoint(self, other: Mask) -> bool {
        self.0 & other.0 == 0
    }

    /// Number of cells in the set.
    #[inline]
    pub const fn count(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if no cell is set.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if all nine cells are set.
    #[inline]
    pub const fn is_full(self) -> bool {
        self.0 == Self::FULL.0
    }

    /// Lowest set index.
    pub fn first(self) -> Option<usize> {
        (!self.is_empty()).then(|| self.0.trailing_zeros() as usize)
    }

    /// Highest set index.
    pub fn last(self) -> Option<usize> {
        (!self.is_empty()).then(|| (u16::BITS - 1 - self.0.leading_zeros()) as usize)
    }

    /// Endpoints of a straight line mask, decoded to coordinates.
    pub fn endpoints(self) -> Option<Line> {
        let from = Cell::from_index(self.first()?)?;
        let to = Cell::from_index(self.last()?)?;
        Some(Line::new(from, to))
    }

    /// Iterator over set indices in ascending order.
    #[inline]
    pub fn iter(self) -> SetBits {
        SetBits { bits: self.0 }
    }

    /// Iterator over set cells in row-major order.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        self.iter().filter_map(Cell::from_index)
    }
}

impl From<u16> for Mask {
    fn from(raw: u16) -> Self {
        Mask::from_raw(raw)
    }
}

impl BitAnd for Mask {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        Mask(self.0 & rhs.0)
    }
}

impl BitOr for Mask {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Mask(self.0 | rhs.0)
    }
}

impl BitOrAssign for Mask {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// Complement within the nine board cells.
impl Not for Mask {
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        Mask::from_raw(!self.0)
    }
}

impl fmt::Debug for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mask({:#011b})", self.0)
    }
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for index in 0..CELLS {
            let bit = if self.contains(index) { '■' } else { '□' };
            write!(f, "{}", bit)?;
            if index % 3 == 2 && index + 1 < CELLS {
                writeln!(f)?;
            } else if index % 3 != 2 {
                write!(f, " ")?;
            }
        }
        Ok(())
    }
}

/// Iterator over the set bits of a mask, lowest first.
#[derive(Debug, Clone, Copy)]
pub struct SetBits {
    bits: u16,
}

impl Iterator for SetBits {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.bits == 0 {
            return None;
        }
        let index = self.bits.trailing_zeros() as usize;
        self.bits &= self.bits - 1;
        Some(index)
    }
}

impl IntoIterator for Mask {
    type Item = usize;
    type IntoIter = SetBits;

    fn into_iter(self) -> SetBits {
        self.iter()
    }
}

impl FromIterator<usize> for Mask {
    /// Collects cell indices into a mask; indices off the board are dropped.
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        iter.into_iter()
            .filter_map(Mask::cell)
            .fold(Mask::EMPTY, |acc, m| acc | m)
    }
}
