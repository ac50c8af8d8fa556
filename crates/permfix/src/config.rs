use crate::{
    constants::{DEFAULT_OUTPUT_DIR, ENV_OUTPUT_DIR, MAX_PATTERN_LENGTH, MIN_PATTERN_LENGTH},
    error::{PermFixError, Result},
    fixing::SearchOptions,
};
use serde::Deserialize;
use std::{
    env,
    path::{Path, PathBuf},
};

/// Top-level configuration, usually read from `config/default.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    /// Length n of the patterns to enumerate
    pub pattern_length: usize,
    /// Also try every horizontal separator 2..=n
    #[serde(default)]
    pub use_horizontal_separator: bool,
    #[serde(default)]
    pub use_sub_separator: bool,
    #[serde(default)]
    pub use_horizontal_sub_separator: bool,
    /// Trace every fix
    #[serde(default)]
    pub debug: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            pattern_length: 4,
            use_horizontal_separator: false,
            use_sub_separator: false,
            use_horizontal_sub_separator: false,
            debug: false,
        }
    }
}

impl SearchConfig {
    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            use_sub_separator: self.use_sub_separator,
            use_horizontal_sub_separator: self.use_horizontal_sub_separator,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Report file name inside `output_dir` (timestamped name when absent)
    #[serde(default)]
    pub report_file: Option<String>,
    /// Optional CSV summary file name inside `output_dir`
    #[serde(default)]
    pub summary_csv: Option<String>,
    /// Print each record line to stdout as well
    #[serde(default = "default_echo")]
    pub echo: bool,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

fn default_echo() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            report_file: None,
            summary_csv: None,
            echo: default_echo(),
        }
    }
}

impl Config {
    /// Reads and validates a TOML configuration file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            PermFixError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            PermFixError::Config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Lets `PERMFIX_OUTPUT_DIR` replace the configured output directory.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(output_dir) = env::var(ENV_OUTPUT_DIR)
            && !output_dir.trim().is_empty()
        {
            let path = PathBuf::from(output_dir);

            if path.exists() && !path.is_dir() {
                return Err(PermFixError::Config(format!(
                    "Output path is not a directory: {}",
                    path.display()
                )));
            }
            self.output.output_dir = path;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        let search = &self.search;
        if !(MIN_PATTERN_LENGTH..=MAX_PATTERN_LENGTH).contains(&search.pattern_length) {
            return Err(PermFixError::Config(format!(
                "pattern_length must be between {} and {}, got {}",
                MIN_PATTERN_LENGTH, MAX_PATTERN_LENGTH, search.pattern_length
            )));
        }

        if search.use_horizontal_sub_separator && !search.use_horizontal_separator {
            return Err(PermFixError::Config(
                "use_horizontal_sub_separator requires use_horizontal_separator".to_string(),
            ));
        }

        for name in [&self.output.report_file, &self.output.summary_csv]
            .into_iter()
            .flatten()
        {
            if name.trim().is_empty() {
                return Err(PermFixError::Config(
                    "output file names cannot be blank".to_string(),
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.search.pattern_length, 4);
        assert!(!config.search.use_horizontal_separator);
        assert_eq!(config.output.output_dir, PathBuf::from("reports"));
        assert!(config.output.echo);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let file = write_config(
            r#"
[search]
pattern_length = 5
use_horizontal_separator = true
use_sub_separator = true

[output]
output_dir = "out"
summary_csv = "summary.csv"
echo = false
"#,
        );

        let config = Config::load_from_file(file.path()).unwrap();
        assert_eq!(config.search.pattern_length, 5);
        assert!(config.search.use_horizontal_separator);
        assert!(config.search.use_sub_separator);
        assert!(!config.search.use_horizontal_sub_separator);
        assert!(!config.search.debug);
        assert_eq!(config.output.output_dir, PathBuf::from("out"));
        assert_eq!(config.output.summary_csv.as_deref(), Some("summary.csv"));
        assert!(config.output.report_file.is_none());
        assert!(!config.output.echo);

        let options = config.search.search_options();
        assert!(options.use_sub_separator);
        assert!(!options.use_horizontal_sub_separator);
    }

    #[test]
    fn test_load_rejects_bad_length() {
        let file = write_config("[search]\npattern_length = 1\n");
        let err = Config::load_from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("pattern_length"));
    }

    #[test]
    fn test_load_rejects_malformed_toml() {
        let file = write_config("[search\npattern_length = 4\n");
        assert!(matches!(
            Config::load_from_file(file.path()),
            Err(PermFixError::Config(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load_from_file(Path::new("no/such/config.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_validate_horizontal_sub_requires_horizontal() {
        let mut config = Config::default();
        config.search.use_horizontal_sub_separator = true;
        assert!(config.validate().is_err());
        config.search.use_horizontal_separator = true;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_overrides() {
        // Store original value
        let orig_output_dir = env::var(ENV_OUTPUT_DIR).ok();

        // Unset: configured directory stays
        unsafe {
            env::remove_var(ENV_OUTPUT_DIR);
        }
        let mut config = Config::default();
        config.apply_env_overrides().unwrap();
        assert_eq!(config.output.output_dir, PathBuf::from("reports"));

        // Whitespace only is ignored
        unsafe {
            env::set_var(ENV_OUTPUT_DIR, "   \t  ");
        }
        config.apply_env_overrides().unwrap();
        assert_eq!(config.output.output_dir, PathBuf::from("reports"));

        // A directory replaces it
        let temp_dir = TempDir::new().unwrap();
        unsafe {
            env::set_var(ENV_OUTPUT_DIR, temp_dir.path());
        }
        config.apply_env_overrides().unwrap();
        assert_eq!(config.output.output_dir, temp_dir.path());

        // An existing file is rejected
        let file = NamedTempFile::new().unwrap();
        unsafe {
            env::set_var(ENV_OUTPUT_DIR, file.path());
        }
        assert!(config.apply_env_overrides().is_err());

        // Cleanup
        unsafe {
            env::remove_var(ENV_OUTPUT_DIR);
            if let Some(value) = orig_output_dir {
                env::set_var(ENV_OUTPUT_DIR, value);
            }
        }
    }
}
