use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use super::state::PatternState;

/// The four sides of a point (or tied pair) in the pattern grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Side {
    Left,
    Right,
    Below,
    Above,
}

/// A run of adjacent locations, seen by its outer edges.
#[derive(Debug, Clone, Copy)]
struct Block {
    first: usize, // leftmost location
    last: usize,  // rightmost location
    low: usize,   // smallest rank
    high: usize,  // largest rank
}

impl Block {
    fn single(state: &PatternState, i: usize) -> Self {
        let v = state.pattern().value_at(i);
        Self {
            first: i,
            last: i,
            low: v,
            high: v,
        }
    }

    fn pair(state: &PatternState, i: usize) -> Self {
        let p = state.pattern();
        let (a, b) = (p.value_at(i), p.value_at(i + 1));
        Self {
            first: i,
            last: i + 1,
            low: a.min(b),
            high: a.max(b),
        }
    }

    /// Edge of the grid, a separator line, or an already fixed neighbour.
    fn is_bounded(&self, state: &PatternState, side: Side) -> bool {
        let n = state.len();
        let seps = state.separators();
        match side {
            Side::Left => {
                self.first == 0
                    || seps.is_vertical_line(self.first)
                    || state.is_location_fixed(self.first - 1)
            }
            Side::Right => {
                self.last == n - 1
                    || seps.is_vertical_line(self.last + 1)
                    || state.is_location_fixed(self.last + 1)
            }
            Side::Below => {
                self.low == 1
                    || seps.is_horizontal_line(self.low)
                    || state.is_value_fixed(self.low - 1)
            }
            Side::Above => {
                self.high == n
                    || seps.is_horizontal_line(self.high + 1)
                    || state.is_value_fixed(self.high + 1)
            }
        }
    }

    fn count(&self, state: &PatternState) -> u8 {
        Side::iter().filter(|&s| self.is_bounded(state, s)).count() as u8
    }
}

/// Number of bounded sides of location `i`, in `0..=4`.
///
/// A location that is already fixed counts as fully bounded.
pub fn boundary_count(state: &PatternState, i: usize) -> u8 {
    assert!(i < state.len(), "location {} out of range", i);
    if state.is_location_fixed(i) {
        return 4;
    }
    Block::single(state, i).count(state)
}

/// Number of bounded sides of the tied pair at `i, i+1`, treated as one block.
///
/// # Panics
/// If `i + 1` is out of range, the two ranks are not adjacent, or either
/// location is already fixed.
pub fn boundary_count_pair(state: &PatternState, i: usize) -> u8 {
    assert!(i + 1 < state.len(), "pair at {} runs past the pattern end", i);
    assert!(
        state.pattern().is_monotone_pair(i),
        "locations {} and {} do not hold adjacent ranks",
        i,
        i + 1
    );
    assert!(
        !state.is_location_fixed(i) && !state.is_location_fixed(i + 1),
        "pair at {} is already (partly) fixed",
        i
    );
    Block::pair(state, i).count(state)
}

/// Which sides of location `i` are bounded (empty list once fixed).
pub fn bounded_sides(state: &PatternState, i: usize) -> Vec<Side> {
    if state.is_location_fixed(i) {
        return Vec::new();
    }
    let block = Block::single(state, i);
    Side::iter().filter(|&s| block.is_bounded(state, s)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::{Pattern, Separators};

    #[test]
    fn test_initial_counts_below_threshold() {
        // 2|13: no location or pair is fixable before seeding
        let p = Pattern::new(vec![2, 1, 3]).unwrap();
        let state = PatternState::new(&p, Separators::new(1));
        for i in 0..p.len() {
            assert!(boundary_count(&state, i) <= 2, "location {}", i);
        }
        assert_eq!(boundary_count_pair(&state, 0), 2);
    }

    #[test]
    fn test_count_after_seed() {
        let p = Pattern::new(vec![2, 1, 3]).unwrap();
        let mut state = PatternState::new(&p, Separators::new(1));
        state.mark_fixed(2, 0);

        // value 1: left via separator, below via rank 1, above via fixed 2
        assert_eq!(boundary_count(&state, 1), 3);
        assert_eq!(
            bounded_sides(&state, 1),
            vec![Side::Left, Side::Below, Side::Above]
        );
        assert_eq!(boundary_count(&state, 0), 4);
        assert!(bounded_sides(&state, 0).is_empty());
    }

    #[test]
    fn test_two_point_corners() {
        let p = Pattern::new(vec![1, 2]).unwrap();
        let state = PatternState::new(&p, Separators::new(1));
        assert!(boundary_count(&state, 0) >= 3);
        assert!(boundary_count(&state, 1) >= 3);
    }

    #[test]
    fn test_horizontal_lines_bound_ranks() {
        // 2413 with a line below rank 3: rank 3 is bounded below, rank 2 above
        let p = Pattern::new(vec![2, 4, 1, 3]).unwrap();
        let state = PatternState::new(&p, Separators::new(2).with_horizontal(Some(3)));
        assert!(bounded_sides(&state, 3).contains(&Side::Below));
        assert!(bounded_sides(&state, 0).contains(&Side::Above));
        assert!(!bounded_sides(&state, 1).contains(&Side::Below));
    }

    #[test]
    fn test_pair_fully_bounded() {
        let p = Pattern::new(vec![1, 3, 2]).unwrap();
        let mut state = PatternState::new(&p, Separators::new(1));
        state.mark_fixed(1, 0);
        assert_eq!(boundary_count_pair(&state, 1), 4);
    }

    #[test]
    #[should_panic(expected = "adjacent ranks")]
    fn test_pair_rejects_non_adjacent_ranks() {
        let p = Pattern::new(vec![2, 1, 3]).unwrap();
        let state = PatternState::new(&p, Separators::new(1));
        boundary_count_pair(&state, 1);
    }

    #[test]
    #[should_panic(expected = "already")]
    fn test_pair_rejects_fixed_location() {
        let p = Pattern::new(vec![1, 3, 2]).unwrap();
        let mut state = PatternState::new(&p, Separators::new(1));
        state.mark_fixed(3, 1);
        boundary_count_pair(&state, 1);
    }

    #[test]
    #[should_panic(expected = "past the pattern end")]
    fn test_pair_rejects_last_location() {
        let p = Pattern::new(vec![1, 3, 2]).unwrap();
        let state = PatternState::new(&p, Separators::new(1));
        boundary_count_pair(&state, 2);
    }

    #[test]
    fn test_side_display() {
        assert_eq!(Side::Below.to_string(), "below");
    }
}
