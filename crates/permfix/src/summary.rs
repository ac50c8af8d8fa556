use crate::constants::SUMMARY_HEADER;
use crate::error::{PermFixError, Result};
use crate::pattern::Pattern;
use csv::WriterBuilder;
use std::{fs::File, io::BufWriter, path::Path};

/// Outcome of one (pattern, main separator, horizontal separator) search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinationResult {
    pub pattern: Pattern,
    pub main_separator: usize,
    pub horizontal_separator: Option<usize>,
    pub certified: bool,
    /// Number of certified trials (secondary placements) reported
    pub trials: usize,
}

/// Writes one CSV row per combination, in analysis order.
pub fn write_summary_csv(path: &Path, results: &[CombinationResult]) -> Result<()> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        std::fs::create_dir_all(dir).map_err(|e| PermFixError::CreateDir {
            path: dir.to_path_buf(),
            source: e,
        })?;
    }

    let file = File::create(path).map_err(|e| PermFixError::CreateFile {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut wtr = WriterBuilder::new().from_writer(BufWriter::new(file));

    wtr.write_record(SUMMARY_HEADER)?;
    for r in results {
        let horizontal = r
            .horizontal_separator
            .map(|h| h.to_string())
            .unwrap_or_default();
        wtr.write_record([
            r.pattern.to_string(),
            r.main_separator.to_string(),
            horizontal,
            r.certified.to_string(),
            r.trials.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
