//! Neighbourhood connectivity for square lattices.

/// How many neighbours each cell of a [`SquareGrid`] has.
///
/// Offsets are visited in a fixed order (cardinals N, S, W, E, then
/// diagonals NW, NE, SW, SE), which makes neighbour enumeration — and
/// everything downstream of it — deterministic.
///
/// [`SquareGrid`]: crate::SquareGrid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Connectivity {
    /// Cardinal directions only.
    Four,
    /// Cardinals plus diagonals.
    Eight,
}

/// All 8 offsets: N, S, W, E, NW, NE, SW, SE.
const OFFSETS_8: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

impl Connectivity {
    /// The `(row, col)` offsets this connectivity visits, in order.
    pub fn offsets(self) -> &'static [(i32, i32)] {
        match self {
            Self::Four => &OFFSETS_8[..4],
            Self::Eight => &OFFSETS_8[..],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_is_prefix_of_eight() {
        assert_eq!(Connectivity::Four.offsets(), &Connectivity::Eight.offsets()[..4]);
    }

    #[test]
    fn offset_counts() {
        assert_eq!(Connectivity::Four.offsets().len(), 4);
        assert_eq!(Connectivity::Eight.offsets().len(), 8);
    }
}
