//! Reflection classes of permutations.
//!
//! Fixing certificates are preserved by up-down (`v -> n+1-v`) and left-right
//! (reversal) reflections, so only one representative per class is searched.

use std::collections::HashSet;

use itertools::Itertools;

use crate::pattern::Pattern;

/// All permutations of `1..=n` in lexicographic order.
pub fn all_permutations(n: usize) -> Vec<Vec<usize>> {
    (1..=n).permutations(n).collect()
}

/// Permutations related by value and/or index reflection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymmetryClass {
    members: Vec<Pattern>,
}

impl SymmetryClass {
    /// Builds the class of `pattern`: itself, its up-down image, then the
    /// left-right images of both that are not already present.
    pub fn of(pattern: Pattern) -> Self {
        let upside_down = pattern.reflect_values();
        let mut members = vec![pattern];
        if upside_down != members[0] {
            members.push(upside_down);
        }

        let mirrored: Vec<Pattern> = members
            .iter()
            .map(Pattern::reverse)
            .filter(|r| !members.contains(r))
            .collect();
        members.extend(mirrored);

        Self { members }
    }

    /// The member handed to the search
    pub fn representative(&self) -> &Pattern {
        &self.members[0]
    }

    pub fn members(&self) -> &[Pattern] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, pattern: &Pattern) -> bool {
        self.members.contains(pattern)
    }
}

/// Partitions every permutation of `1..=n` into reflection classes, in the
/// order their first member appears lexicographically.
pub fn symmetry_groups(n: usize) -> Vec<SymmetryClass> {
    let mut seen: HashSet<Vec<usize>> = HashSet::new();
    let mut groups = Vec::new();

    for values in all_permutations(n) {
        if seen.contains(&values) {
            continue;
        }
        let class = SymmetryClass::of(Pattern::from_permutation(values));
        seen.extend(class.members().iter().map(|m| m.values().to_vec()));
        groups.push(class);
    }

    groups
}

/// One representative per class, ready for the search.
pub fn representatives(n: usize) -> Vec<Pattern> {
    symmetry_groups(n)
        .into_iter()
        .map(|class| class.representative().clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(class: &SymmetryClass) -> Vec<Vec<usize>> {
        class.members().iter().map(|m| m.values().to_vec()).collect()
    }

    #[test]
    fn test_all_permutations_order() {
        let perms = all_permutations(3);
        assert_eq!(perms.len(), 6);
        assert_eq!(perms[0], vec![1, 2, 3]);
        assert_eq!(perms[1], vec![1, 3, 2]);
        assert_eq!(perms[5], vec![3, 2, 1]);
    }

    #[test]
    fn test_groups_of_three() {
        let groups = symmetry_groups(3);
        assert_eq!(groups.len(), 2);
        assert_eq!(values(&groups[0]), vec![vec![1, 2, 3], vec![3, 2, 1]]);
        assert_eq!(
            values(&groups[1]),
            vec![vec![1, 3, 2], vec![3, 1, 2], vec![2, 3, 1], vec![2, 1, 3]]
        );
        assert_eq!(groups[1].representative().values(), &[1, 3, 2]);
    }

    #[test]
    fn test_groups_partition_all_permutations() {
        for n in 2..=6 {
            let groups = symmetry_groups(n);
            let mut union: HashSet<Vec<usize>> = HashSet::new();
            let mut total = 0;
            for class in &groups {
                assert!(matches!(class.len(), 1 | 2 | 4), "class size {}", class.len());
                for member in class.members() {
                    assert!(union.insert(member.values().to_vec()), "duplicate member");
                }
                total += class.len();
            }
            let all: HashSet<Vec<usize>> = all_permutations(n).into_iter().collect();
            assert_eq!(total, all.len());
            assert_eq!(union, all);
        }
    }

    #[test]
    fn test_class_is_closed_under_reflections() {
        for class in symmetry_groups(5) {
            for member in class.members() {
                assert!(class.contains(&member.reflect_values()));
                assert!(class.contains(&member.reverse()));
            }
        }
    }

    #[test]
    fn test_known_class_counts() {
        assert_eq!(symmetry_groups(2).len(), 1);
        assert_eq!(symmetry_groups(4).len(), 8);
        assert_eq!(representatives(5).len(), 32);
    }
}
