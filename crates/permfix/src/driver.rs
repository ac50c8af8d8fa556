use crate::config::SearchConfig;
use crate::error::Result;
use crate::fixing::search;
use crate::report::{ReportHeader, ReportSink};
use crate::summary::CombinationResult;
use crate::symmetry::symmetry_groups;
use log::{debug, info};

/// Tally of one full analysis run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisSummary {
    pub pattern_length: usize,
    pub classes: usize,
    pub combinations: usize,
    pub certified: usize,
    pub failed: usize,
    pub results: Vec<CombinationResult>,
}

/// Searches every class representative against every main separator (and
/// every horizontal separator when enabled), sending records to `sink`.
pub fn run_analysis<S: ReportSink>(config: &SearchConfig, sink: &mut S) -> Result<AnalysisSummary> {
    let n = config.pattern_length;
    let options = config.search_options();

    let groups = symmetry_groups(n);
    info!("{} symmetry classes for length {}", groups.len(), n);

    sink.header(&ReportHeader {
        classes: groups.len(),
        use_horizontal_separator: config.use_horizontal_separator,
        use_sub_separator: config.use_sub_separator,
        use_horizontal_sub_separator: config.use_horizontal_sub_separator,
    })?;

    let horizontals: Vec<Option<usize>> = if config.use_horizontal_separator {
        (2..=n).map(Some).collect()
    } else {
        vec![None]
    };

    let mut summary = AnalysisSummary {
        pattern_length: n,
        classes: groups.len(),
        ..Default::default()
    };

    for class in &groups {
        let pattern = class.representative();
        debug!("pattern {} (class of {})", pattern, class.len());

        for main in 1..n {
            for &horizontal in &horizontals {
                let outcome = search(pattern, main, horizontal, options)?;
                sink.combination(&outcome.records)?;

                summary.combinations += 1;
                if outcome.success {
                    summary.certified += 1;
                } else {
                    summary.failed += 1;
                }
                summary.results.push(CombinationResult {
                    pattern: pattern.clone(),
                    main_separator: main,
                    horizontal_separator: horizontal,
                    certified: outcome.success,
                    trials: if outcome.success {
                        outcome.records.len()
                    } else {
                        0
                    },
                });
            }
        }
    }

    info!(
        "{} combinations: {} certified, {} failed",
        summary.combinations, summary.certified, summary.failed
    );
    Ok(summary)
}
