use crate::error::{PermFixError, Result};
use crate::record::FixRecord;
use chrono::Local;
use log::debug;
use std::{
    fmt,
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// Options and class count stated at the top of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportHeader {
    pub classes: usize,
    pub use_horizontal_separator: bool,
    pub use_sub_separator: bool,
    pub use_horizontal_sub_separator: bool,
}

impl fmt::Display for ReportHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Number of symmetry groups (up to horizontal or vertical reflection): {}",
            self.classes
        )?;
        writeln!(f, "Use horizontal separator? {}", self.use_horizontal_separator)?;
        writeln!(f, "Use vertical sub-separator? {}", self.use_sub_separator)?;
        writeln!(
            f,
            "Use horizontal sub-separator? {}",
            self.use_horizontal_sub_separator
        )
    }
}

/// Receives the analysis output in report order.
pub trait ReportSink {
    fn header(&mut self, header: &ReportHeader) -> Result<()>;

    /// Records of one (pattern, main separator, horizontal separator) combination
    fn combination(&mut self, records: &[FixRecord]) -> Result<()>;
}

/// Collects rendered lines in memory.
impl ReportSink for Vec<String> {
    fn header(&mut self, header: &ReportHeader) -> Result<()> {
        self.extend(header.to_string().lines().map(str::to_string));
        Ok(())
    }

    fn combination(&mut self, records: &[FixRecord]) -> Result<()> {
        self.extend(records.iter().map(|r| r.to_string()));
        Ok(())
    }
}

/// Flat text report, flushed after every combination.
pub struct TextReport {
    path: PathBuf,
    writer: BufWriter<File>,
    echo: bool,
}

impl TextReport {
    /// Creates (truncating) the report inside `output_dir`.
    ///
    /// Without a file name the report is called `<n>-patterns_<timestamp>.txt`.
    pub fn create(output_dir: &Path, file_name: Option<&str>, pattern_length: usize) -> Result<Self> {
        std::fs::create_dir_all(output_dir).map_err(|e| PermFixError::CreateDir {
            path: output_dir.to_path_buf(),
            source: e,
        })?;

        let file_name = match file_name {
            Some(name) => name.to_string(),
            None => {
                let timestamp = Local::now().format("%Y-%m-%d_%H-%M-%S");
                format!("{pattern_length}-patterns_{timestamp}.txt")
            }
        };
        let path = output_dir.join(file_name);

        let file = File::create(&path).map_err(|e| PermFixError::CreateFile {
            path: path.clone(),
            source: e,
        })?;
        debug!("Writing report to {}", path.display());

        Ok(Self {
            path,
            writer: BufWriter::new(file),
            echo: false,
        })
    }

    /// Also print every record line to stdout.
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_text(&mut self, text: &str) -> Result<()> {
        self.writer
            .write_all(text.as_bytes())
            .and_then(|_| self.writer.flush())
            .map_err(|e| PermFixError::WriteFile {
                path: self.path.clone(),
                source: e,
            })
    }
}

impl ReportSink for TextReport {
    fn header(&mut self, header: &ReportHeader) -> Result<()> {
        self.write_text(&header.to_string())
    }

    fn combination(&mut self, records: &[FixRecord]) -> Result<()> {
        let mut block = String::new();
        for record in records {
            let line = record.to_string();
            if self.echo {
                println!("{line}");
            }
            block.push_str(&line);
            block.push('\n');
        }
        self.write_text(&block)
    }
}
