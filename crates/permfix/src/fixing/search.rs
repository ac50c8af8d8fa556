use itertools::Itertools;
use log::debug;

use super::engine::{AutoCompletion, auto_complete, fix};
use super::state::PatternState;
use crate::error::{PermFixError, Result};
use crate::pattern::{Pattern, Separators};
use crate::record::FixRecord;

/// Which secondary separators the search may place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    pub use_sub_separator: bool,
    pub use_horizontal_sub_separator: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub success: bool,
    /// One record per secondary placement on success, a single FAILED record
    /// otherwise. Empty when the winning seed left no room for a secondary line.
    pub records: Vec<FixRecord>,
}

/// Runs one independent trial: fresh state, seed `initial`, auto-complete.
pub fn run_trial(
    pattern: &Pattern,
    separators: Separators,
    initial: usize,
) -> Result<(PatternState<'_>, AutoCompletion)> {
    separators.validate(pattern.len())?;
    if initial < 1 || initial > pattern.len() {
        return Err(PermFixError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: format!("initial value {} is outside 1..={}", initial, pattern.len()),
        });
    }

    let mut state = PatternState::new(pattern, separators);
    fix(&mut state, initial);
    let run = auto_complete(&mut state);
    Ok((state, run))
}

/// Looks for the smallest seed value whose trials all complete, across every
/// admissible secondary separator placement.
///
/// A seed with no admissible placement on an enabled axis has no trials to
/// run, so it succeeds with no records.
pub fn search(
    pattern: &Pattern,
    main_separator: usize,
    horizontal_separator: Option<usize>,
    options: SearchOptions,
) -> Result<SearchOutcome> {
    let base = Separators::new(main_separator).with_horizontal(horizontal_separator);
    base.validate(pattern.len())?;
    if options.use_horizontal_sub_separator && horizontal_separator.is_none() {
        return Err(PermFixError::InvalidSeparator {
            length: pattern.len(),
            reason: "horizontal sub-separators need a horizontal separator".to_string(),
        });
    }

    for initial in 1..=pattern.len() {
        let vertical = vertical_sub_candidates(pattern, main_separator, initial, options);
        let horizontal =
            horizontal_sub_candidates(pattern, horizontal_separator, initial, options);
        if vertical.is_empty() || horizontal.is_empty() {
            debug!("{}: seed {} has no secondary placement", base.render(pattern), initial);
        }

        let records: Option<Vec<FixRecord>> = vertical
            .iter()
            .cartesian_product(horizontal.iter())
            .map(|(&sub, &horizontal_sub)| {
                let separators = base.with_sub(sub).with_horizontal_sub(horizontal_sub);
                let mut state = PatternState::new(pattern, separators);
                fix(&mut state, initial);
                let run = auto_complete(&mut state);
                if run.is_complete() {
                    Some(FixRecord::certified(pattern, separators, state.fixed_values()))
                } else {
                    debug!(
                        "{}: seed {} rejected ({:?})",
                        separators.render(pattern),
                        initial,
                        run.outcome
                    );
                    None
                }
            })
            .collect();

        if let Some(records) = records {
            return Ok(SearchOutcome {
                success: true,
                records,
            });
        }
    }

    Ok(SearchOutcome {
        success: false,
        records: vec![FixRecord::failed(pattern, base)],
    })
}

/// Sub-separator positions strictly inside the side of the main line that
/// holds `initial`. `[None]` when disabled, empty when that side has no room.
fn vertical_sub_candidates(
    pattern: &Pattern,
    main: usize,
    initial: usize,
    options: SearchOptions,
) -> Vec<Option<usize>> {
    if !options.use_sub_separator {
        return vec![None];
    }
    if pattern.location_of(initial) < main {
        (1..main).map(Some).collect()
    } else {
        (main + 1..pattern.len()).map(Some).collect()
    }
}

/// Horizontal analogue of [`vertical_sub_candidates`], relative to the
/// horizontal line and the rank of `initial`.
fn horizontal_sub_candidates(
    pattern: &Pattern,
    horizontal: Option<usize>,
    initial: usize,
    options: SearchOptions,
) -> Vec<Option<usize>> {
    let Some(h) = horizontal.filter(|_| options.use_horizontal_sub_separator) else {
        return vec![None];
    };
    if initial < h {
        (2..h).map(Some).collect()
    } else {
        (h + 1..=pattern.len()).map(Some).collect()
    }
}
