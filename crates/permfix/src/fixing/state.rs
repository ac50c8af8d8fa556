use crate::pattern::{Pattern, Separators};

/// Mutable fixing state owned by exactly one trial.
///
/// A location `i` is fixed iff `pattern[i]` is a fixed value; both sets only
/// grow and are appended in lockstep.
#[derive(Debug, Clone)]
pub struct PatternState<'a> {
    pattern: &'a Pattern,
    separators: Separators,
    location_fixed: Vec<bool>,
    /// value_fixed[v - 1]
    value_fixed: Vec<bool>,
    fixed_locations: Vec<usize>,
    fixed_values: Vec<usize>,
    original: Option<(usize, usize)>, // (value, location) of the first fix
}

impl<'a> PatternState<'a> {
    /// Fresh trial state with nothing fixed. Separators must already be validated.
    pub fn new(pattern: &'a Pattern, separators: Separators) -> Self {
        debug_assert!(separators.validate(pattern.len()).is_ok());
        let n = pattern.len();
        Self {
            pattern,
            separators,
            location_fixed: vec![false; n],
            value_fixed: vec![false; n],
            fixed_locations: Vec::with_capacity(n),
            fixed_values: Vec::with_capacity(n),
            original: None,
        }
    }

    pub fn pattern(&self) -> &'a Pattern {
        self.pattern
    }

    pub fn separators(&self) -> &Separators {
        &self.separators
    }

    pub fn len(&self) -> usize {
        self.pattern.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }

    #[inline]
    pub fn is_location_fixed(&self, i: usize) -> bool {
        self.location_fixed.get(i).copied().unwrap_or(false)
    }

    #[inline]
    pub fn is_value_fixed(&self, value: usize) -> bool {
        value >= 1 && self.value_fixed.get(value - 1).copied().unwrap_or(false)
    }

    /// Fixed values in the order they were fixed
    pub fn fixed_values(&self) -> &[usize] {
        &self.fixed_values
    }

    /// Fixed locations in the order they were fixed
    pub fn fixed_locations(&self) -> &[usize] {
        &self.fixed_locations
    }

    pub fn fixed_count(&self) -> usize {
        self.fixed_values.len()
    }

    pub fn is_complete(&self) -> bool {
        self.fixed_count() == self.len()
    }

    /// The seed of this run as (value, location)
    pub fn original_fix(&self) -> Option<(usize, usize)> {
        self.original
    }

    /// Appends `value` (at `location`) to both fixed records.
    pub(crate) fn mark_fixed(&mut self, value: usize, location: usize) {
        debug_assert_eq!(self.pattern.value_at(location), value);
        self.location_fixed[location] = true;
        self.value_fixed[value - 1] = true;
        self.fixed_locations.push(location);
        self.fixed_values.push(value);
        if self.original.is_none() {
            self.original = Some((value, location));
        }
    }
}
