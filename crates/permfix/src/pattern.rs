use std::fmt;

use crate::constants::{MAX_PATTERN_LENGTH, MIN_PATTERN_LENGTH};
use crate::error::{PermFixError, Result};

/// A permutation of `1..=n`: location `i` holds rank `values[i]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern {
    values: Vec<usize>,
    /// locations[v - 1] = index holding value v
    locations: Vec<usize>,
}

impl Pattern {
    /// Builds a pattern, checking that `values` is a permutation of `1..=n`.
    pub fn new(values: Vec<usize>) -> Result<Self> {
        let n = values.len();
        let invalid = |reason: String| PermFixError::InvalidPattern {
            pattern: format!("{:?}", values),
            reason,
        };

        if !(MIN_PATTERN_LENGTH..=MAX_PATTERN_LENGTH).contains(&n) {
            return Err(invalid(format!(
                "length must be between {} and {}, got {}",
                MIN_PATTERN_LENGTH, MAX_PATTERN_LENGTH, n
            )));
        }

        let mut locations = vec![usize::MAX; n];
        for (i, &v) in values.iter().enumerate() {
            if v == 0 || v > n {
                return Err(invalid(format!("value {} is outside 1..={}", v, n)));
            }
            if locations[v - 1] != usize::MAX {
                return Err(invalid(format!("value {} appears more than once", v)));
            }
            locations[v - 1] = i;
        }

        Ok(Self { values, locations })
    }

    /// Parses `"2413"` or `"2,4,1,3"` / `"2 4 1 3"`.
    pub fn parse(text: &str) -> Result<Self> {
        let t = text.trim();
        let tokens: Vec<String> = if t.contains([',', ' ']) {
            t.split([',', ' '])
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        } else {
            t.chars().map(String::from).collect()
        };

        let values = tokens
            .iter()
            .map(|tok| {
                tok.parse::<usize>().map_err(|_| PermFixError::InvalidPattern {
                    pattern: text.to_string(),
                    reason: format!("'{}' is not a number", tok),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Self::new(values)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[usize] {
        &self.values
    }

    /// Rank at location `i`
    #[inline]
    pub fn value_at(&self, i: usize) -> usize {
        self.values[i]
    }

    /// Location holding rank `value`
    #[inline]
    pub fn location_of(&self, value: usize) -> usize {
        self.locations[value - 1]
    }

    /// True when the ranks at `i` and `i+1` differ by exactly one.
    pub fn is_monotone_pair(&self, i: usize) -> bool {
        i + 1 < self.len() && self.values[i].abs_diff(self.values[i + 1]) == 1
    }

    /// Up-down reflection: `v -> n+1-v`
    pub fn reflect_values(&self) -> Self {
        let n = self.len();
        Self::from_permutation(self.values.iter().map(|&v| n + 1 - v).collect())
    }

    /// Left-right reflection: sequence reversed
    pub fn reverse(&self) -> Self {
        Self::from_permutation(self.values.iter().rev().copied().collect())
    }

    /// For values already known to be a permutation (reflections, enumeration).
    pub(crate) fn from_permutation(values: Vec<usize>) -> Self {
        let mut locations = vec![0; values.len()];
        for (i, &v) in values.iter().enumerate() {
            locations[v - 1] = i;
        }
        Self { values, locations }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for v in &self.values {
            write!(f, "{}", v)?;
        }
        Ok(())
    }
}

/// Vertical and horizontal dividing lines for one trial.
///
/// `main` sits just before location `main`; `horizontal` sits just below
/// rank `horizontal`. The sub-separators are secondary lines of the same kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Separators {
    pub main: usize,
    pub horizontal: Option<usize>,
    pub sub: Option<usize>,
    pub horizontal_sub: Option<usize>,
}

impl Separators {
    pub fn new(main: usize) -> Self {
        Self {
            main,
            horizontal: None,
            sub: None,
            horizontal_sub: None,
        }
    }

    pub fn with_horizontal(mut self, horizontal: Option<usize>) -> Self {
        self.horizontal = horizontal;
        self
    }

    pub fn with_sub(mut self, sub: Option<usize>) -> Self {
        self.sub = sub;
        self
    }

    pub fn with_horizontal_sub(mut self, horizontal_sub: Option<usize>) -> Self {
        self.horizontal_sub = horizontal_sub;
        self
    }

    /// Checks every line against a pattern of length `n`.
    pub fn validate(&self, n: usize) -> Result<()> {
        let invalid = |reason: String| PermFixError::InvalidSeparator { length: n, reason };

        let last = n.saturating_sub(1);
        if self.main < 1 || self.main > last {
            return Err(invalid(format!(
                "main separator must be in 1..={}, got {}",
                last, self.main
            )));
        }
        if let Some(sub) = self.sub
            && (sub < 1 || sub > last || sub == self.main)
        {
            return Err(invalid(format!(
                "sub-separator must be in 1..={} and differ from the main one, got {}",
                last, sub
            )));
        }
        if let Some(h) = self.horizontal
            && (h < 2 || h > n)
        {
            return Err(invalid(format!(
                "horizontal separator must be in 2..={}, got {}",
                n, h
            )));
        }
        match (self.horizontal, self.horizontal_sub) {
            (None, Some(_)) => Err(invalid(
                "horizontal sub-separator requires a horizontal separator".to_string(),
            )),
            (Some(h), Some(hs)) if hs < 2 || hs > n || hs == h => Err(invalid(format!(
                "horizontal sub-separator must be in 2..={} and differ from the main one, got {}",
                n, hs
            ))),
            _ => Ok(()),
        }
    }

    /// A vertical line sits just before location `i`.
    #[inline]
    pub fn is_vertical_line(&self, i: usize) -> bool {
        self.main == i || self.sub == Some(i)
    }

    /// A horizontal line sits just below rank `v`.
    #[inline]
    pub fn is_horizontal_line(&self, v: usize) -> bool {
        self.horizontal == Some(v) || self.horizontal_sub == Some(v)
    }

    /// Renders the pattern with its lines, e.g. `2|13` or `1|3||524, horizontal below 3`.
    pub fn render(&self, pattern: &Pattern) -> String {
        let digits = pattern.to_string();
        let (main, sub) = (self.main, self.sub);

        let mut s = match sub {
            None => format!("{}|{}", &digits[..main], &digits[main..]),
            Some(sub) if sub < main => format!(
                "{}|{}||{}",
                &digits[..sub],
                &digits[sub..main],
                &digits[main..]
            ),
            Some(sub) => format!(
                "{}||{}|{}",
                &digits[..main],
                &digits[main..sub],
                &digits[sub..]
            ),
        };

        if let Some(h) = self.horizontal {
            s.push_str(&format!(", horizontal below {}", h));
            if let Some(hs) = self.horizontal_sub {
                s.push_str(&format!(" (main), {} (sub)", hs));
            }
        }
        s
    }
}
