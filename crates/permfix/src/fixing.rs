//! Constraint propagation over a single pattern: per-trial state, boundary
//! evidence, the fixing fixpoint and the separator search built on top.

pub mod boundary;
pub mod engine;
pub mod search;
pub mod state;

pub use boundary::{Side, boundary_count, boundary_count_pair, bounded_sides};
pub use engine::{AutoCompletion, Completion, auto_complete, fix};
pub use search::{SearchOptions, SearchOutcome, run_trial, search};
pub use state::PatternState;
