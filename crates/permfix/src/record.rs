use std::fmt;

use crate::constants::{FAILED_LABEL, RECORD_ARROW};
use crate::pattern::{Pattern, Separators};

/// How a trial determined the pattern, or that no seed could.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixSequence {
    Certified {
        initial: usize,
        /// Descriptions of the secondary separators placed for this trial
        labels: Vec<String>,
        /// Values fixed after the seed, in order
        order: Vec<usize>,
    },
    Failed,
}

/// One reportable line: a pattern, its separators and the fix sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixRecord {
    pub pattern: Pattern,
    pub separators: Separators,
    pub sequence: FixSequence,
}

impl FixRecord {
    /// Certificate of a completed trial. `fixed_values` starts with the seed.
    pub fn certified(
        pattern: &Pattern,
        separators: Separators,
        fixed_values: &[usize],
    ) -> Self {
        assert!(!fixed_values.is_empty(), "certificate without a seed value");
        let labels = secondary_labels(pattern, &separators);
        let (initial, order) = (fixed_values[0], fixed_values[1..].to_vec());
        Self {
            pattern: pattern.clone(),
            separators,
            sequence: FixSequence::Certified {
                initial,
                labels,
                order,
            },
        }
    }

    pub fn failed(pattern: &Pattern, separators: Separators) -> Self {
        Self {
            pattern: pattern.clone(),
            separators,
            sequence: FixSequence::Failed,
        }
    }

    pub fn is_failed(&self) -> bool {
        self.sequence == FixSequence::Failed
    }

    /// Seed first, then secondary separator labels, then later fixes.
    pub fn fix_sequence(&self) -> Vec<String> {
        match &self.sequence {
            FixSequence::Failed => vec![FAILED_LABEL.to_string()],
            FixSequence::Certified {
                initial,
                labels,
                order,
            } => std::iter::once(initial.to_string())
                .chain(labels.iter().cloned())
                .chain(order.iter().map(|v| v.to_string()))
                .collect(),
        }
    }
}

fn secondary_labels(pattern: &Pattern, separators: &Separators) -> Vec<String> {
    let mut labels = Vec::new();
    if let Some(sub) = separators.sub {
        labels.push(format!(
            "vertical between values {}&{}",
            pattern.value_at(sub - 1),
            pattern.value_at(sub)
        ));
    }
    if let Some(hs) = separators.horizontal_sub {
        labels.push(format!("horizontal below value {}", hs));
    }
    labels
}

impl fmt::Display for FixRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.separators.render(&self.pattern),
            RECORD_ARROW,
            self.fix_sequence().join(", ")
        )
    }
}
