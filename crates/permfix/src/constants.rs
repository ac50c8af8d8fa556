/// Pattern length limits
pub const MIN_PATTERN_LENGTH: usize = 2;
pub const MAX_PATTERN_LENGTH: usize = 9; // 9! = 362880 permutations

/// Fixing thresholds (bounded sides out of 4)
pub const SINGLE_FIX_THRESHOLD: u8 = 3;
pub const PAIR_FIX_THRESHOLD: u8 = 4;

/// Report rendering
pub const RECORD_ARROW: &str = " ---> ";
pub const FAILED_LABEL: &str = "FAILED";

/// Output defaults
pub const DEFAULT_OUTPUT_DIR: &str = "reports";
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";
pub const ENV_OUTPUT_DIR: &str = "PERMFIX_OUTPUT_DIR";

/// Expected header of the CSV summary
pub const SUMMARY_HEADER: [&str; 5] = [
    "Pattern",
    "MainSeparator",
    "HorizontalSeparator",
    "Certified",
    "Trials",
];
