pub mod config;
pub mod constants;
pub mod driver;
pub mod error;
pub mod fixing;
pub mod pattern;
pub mod record;
pub mod report;
pub mod summary;
pub mod symmetry;

pub use config::{Config, OutputConfig, SearchConfig};
pub use constants::{
    MAX_PATTERN_LENGTH, MIN_PATTERN_LENGTH, PAIR_FIX_THRESHOLD, SINGLE_FIX_THRESHOLD,
};
pub use driver::{AnalysisSummary, run_analysis};
pub use error::{PermFixError, Result};
pub use fixing::{PatternState, SearchOptions, SearchOutcome, auto_complete, fix, run_trial, search};
pub use pattern::{Pattern, Separators};
pub use record::{FixRecord, FixSequence};
pub use report::{ReportHeader, ReportSink, TextReport};
pub use summary::{CombinationResult, write_summary_csv};
pub use symmetry::{SymmetryClass, all_permutations, representatives, symmetry_groups};
