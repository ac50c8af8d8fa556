use log::debug;

use super::boundary::{boundary_count, boundary_count_pair, bounded_sides};
use super::state::PatternState;
use crate::constants::{PAIR_FIX_THRESHOLD, SINGLE_FIX_THRESHOLD};

/// How an auto-completion run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// Every location is fixed
    Complete,
    /// No further progress; `fixed` locations are determined
    Stuck { fixed: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoCompletion {
    pub passes: usize,
    pub outcome: Completion,
}

impl AutoCompletion {
    pub fn is_complete(&self) -> bool {
        self.outcome == Completion::Complete
    }
}

/// Marks `value` (and its location) as fixed. No-op if it already is.
pub fn fix(state: &mut PatternState, value: usize) {
    if state.is_value_fixed(value) {
        return;
    }
    let location = state.pattern().location_of(value);
    state.mark_fixed(value, location);
}

/// Repeatedly fixes every location with at least three bounded sides and
/// every tied pair with all four sides bounded, until a pass fixes nothing.
pub fn auto_complete(state: &mut PatternState) -> AutoCompletion {
    let n = state.len();
    let mut passes = 0;

    loop {
        passes += 1;
        let mut progressed = false;

        for i in 0..n {
            if state.is_location_fixed(i) {
                continue;
            }

            if boundary_count(state, i) >= SINGLE_FIX_THRESHOLD {
                let value = state.pattern().value_at(i);
                debug!(
                    "fixed {} (bounded: {:?})",
                    value,
                    bounded_sides(state, i)
                );
                fix(state, value);
                progressed = true;
                continue;
            }

            if state.pattern().is_monotone_pair(i)
                && !state.is_location_fixed(i + 1)
                && boundary_count_pair(state, i) >= PAIR_FIX_THRESHOLD
            {
                let (a, b) = (state.pattern().value_at(i), state.pattern().value_at(i + 1));
                debug!("fixed {} and {} as a tied pair", a, b);
                fix(state, a);
                fix(state, b);
                progressed = true;
            }
        }

        if state.is_complete() {
            return AutoCompletion {
                passes,
                outcome: Completion::Complete,
            };
        }
        if !progressed {
            debug!("stuck after {} of {} fixes", state.fixed_count(), n);
            return AutoCompletion {
                passes,
                outcome: Completion::Stuck {
                    fixed: state.fixed_count(),
                },
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::{Pattern, Separators};

    #[test]
    fn test_fix_is_idempotent() {
        let p = Pattern::new(vec![2, 1, 3]).unwrap();
        let mut state = PatternState::new(&p, Separators::new(1));
        fix(&mut state, 2);
        fix(&mut state, 2);
        assert_eq!(state.fixed_values(), &[2]);
        assert_eq!(state.fixed_locations(), &[0]);
        assert_eq!(state.original_fix(), Some((2, 0)));
    }

    #[test]
    fn test_nothing_fixes_without_seed() {
        let p = Pattern::new(vec![2, 1, 3]).unwrap();
        let mut state = PatternState::new(&p, Separators::new(1));
        let run = auto_complete(&mut state);
        assert_eq!(run.outcome, Completion::Stuck { fixed: 0 });
        assert_eq!(run.passes, 1);
    }

    #[test]
    fn test_seeded_run_completes() {
        let p = Pattern::new(vec![2, 1, 3]).unwrap();
        let mut state = PatternState::new(&p, Separators::new(1));
        fix(&mut state, 2);
        let run = auto_complete(&mut state);
        assert!(run.is_complete());
        assert_eq!(state.fixed_values(), &[2, 1, 3]);
        assert_eq!(state.original_fix(), Some((2, 0)));
    }

    #[test]
    fn test_pair_fix() {
        // 1|32: once 1 is fixed, the tied pair 3,2 is bounded on all sides
        let p = Pattern::new(vec![1, 3, 2]).unwrap();
        let mut state = PatternState::new(&p, Separators::new(1));
        fix(&mut state, 1);
        let run = auto_complete(&mut state);
        assert!(run.is_complete());
        assert_eq!(state.fixed_values(), &[1, 3, 2]);
        assert_eq!(state.fixed_locations(), &[0, 1, 2]);
    }

    #[test]
    fn test_stuck_run() {
        let p = Pattern::new(vec![1, 3, 5, 2, 4]).unwrap();
        let mut state = PatternState::new(&p, Separators::new(1));
        fix(&mut state, 3);
        let run = auto_complete(&mut state);
        assert_eq!(run.outcome, Completion::Stuck { fixed: 2 });
        assert_eq!(state.fixed_values(), &[3, 1]);
    }

    #[test]
    fn test_invariants_hold_for_every_seed() {
        let p = Pattern::new(vec![2, 4, 1, 5, 3]).unwrap();
        for main in 1..p.len() {
            for seed in 1..=p.len() {
                let mut state = PatternState::new(&p, Separators::new(main));
                fix(&mut state, seed);
                let run = auto_complete(&mut state);

                assert!(run.passes <= p.len());
                assert_eq!(state.fixed_values().len(), state.fixed_locations().len());
                assert_eq!(state.fixed_values()[0], seed);
                for i in 0..p.len() {
                    assert_eq!(state.is_location_fixed(i), state.is_value_fixed(p.value_at(i)));
                }
                for (&loc, &val) in state.fixed_locations().iter().zip(state.fixed_values()) {
                    assert_eq!(p.value_at(loc), val);
                }
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let p = Pattern::new(vec![2, 4, 1, 3]).unwrap();
        let seps = Separators::new(2).with_horizontal(Some(3));
        let run_once = || {
            let mut state = PatternState::new(&p, seps);
            fix(&mut state, 1);
            let run = auto_complete(&mut state);
            (run, state.fixed_values().to_vec())
        };
        assert_eq!(run_once(), run_once());
    }
}
