//! Bitboard type and operations.

use super::square::Square;

/// A 64-bit bitboard representing piece positions or attack squares.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Bitboard(pub u64);

impl Bitboard {
    pub const FILE_A: Bitboard = Bitboard(0x0101010101010101);
    pub const FILE_H: Bitboard = Bitboard(0x8080808080808080);

    pub const EMPTY: Bitboard = Bitboard(0);

    /// Create a bitboard with a single square set
    #[inline]
    #[must_use]
    pub const fn from_square(sq: Square) -> Self {
        Bitboard(1 << (sq.0 * 8 + sq.1))
    }

    /// Returns an iterator over the squares set in this bitboard
    #[inline]
    #[must_use]
    pub fn iter(self) -> BitboardIter {
        BitboardIter(self)
    }

    /// Returns true if the bitboard is empty
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the number of set bits (population count)
    #[inline]
    #[must_use]
    pub const fn popcount(self) -> u32 {
        self.0.count_ones()
    }

    /// Returns true if the given square is set
    #[inline]
    #[must_use]
    pub const fn contains(self, sq: Square) -> bool {
        (self.0 & (1 << (sq.0 * 8 + sq.1))) != 0
    }
}

/// Iterator over set squares in a Bitboard, lowest index first
pub struct BitboardIter(Bitboard);

impl Iterator for BitboardIter {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0.is_empty() {
            None
        } else {
            let idx = self.0 .0.trailing_zeros() as usize;
            self.0 .0 &= self.0 .0 - 1;
            Some(Square::from_index(idx))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iter_visits_set_squares() {
        let bb = Bitboard(Bitboard::from_square(Square(0, 0)).0 | Bitboard::from_square(Square(7, 7)).0);
        let squares: Vec<Square> = bb.iter().collect();
        assert_eq!(squares, vec![Square(0, 0), Square(7, 7)]);
        assert_eq!(bb.popcount(), 2);
        assert!(bb.contains(Square(7, 7)));
        assert!(!bb.contains(Square(3, 3)));
    }
}
