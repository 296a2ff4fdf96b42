//! The boolean condition tuple produced for each evaluated pair.

use serde::{Deserialize, Serialize};

/// Outcome of the boolean conditions evaluated for one (x, y) pair.
///
/// Combiners produce one of these per pair; assessors decide match/no-match
/// from it and scorers turn it into a compatibility score.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conditions(Vec<bool>);

impl Conditions {
    /// Wrap a tuple of condition outcomes.
    #[must_use]
    pub fn new(values: Vec<bool>) -> Self {
        Self(values)
    }

    /// A single-condition tuple.
    #[must_use]
    pub fn single(value: bool) -> Self {
        Self(vec![value])
    }

    /// Whether any condition holds. False for an empty tuple.
    #[must_use]
    pub fn any(&self) -> bool {
        self.0.iter().any(|&c| c)
    }

    /// Whether every condition holds. Vacuously true for an empty tuple.
    #[must_use]
    pub fn all(&self) -> bool {
        self.0.iter().all(|&c| c)
    }

    /// Number of conditions that hold.
    #[must_use]
    pub fn satisfied(&self) -> usize {
        self.0.iter().filter(|&&c| c).count()
    }

    /// Total number of conditions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the tuple is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the condition outcomes.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.iter().copied()
    }
}

impl From<Vec<bool>> for Conditions {
    fn from(values: Vec<bool>) -> Self {
        Self::new(values)
    }
}

impl From<bool> for Conditions {
    fn from(value: bool) -> Self {
        Self::single(value)
    }
}

impl FromIterator<bool> for Conditions {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_and_all() {
        let mixed = Conditions::new(vec![true, false, true]);
        assert!(mixed.any());
        assert!(!mixed.all());

        let full = Conditions::new(vec![true, true]);
        assert!(full.all());
    }

    #[test]
    fn test_empty_tuple() {
        let empty = Conditions::default();
        assert!(empty.is_empty());
        assert!(!empty.any());
        assert!(empty.all(), "all() is vacuously true on empty");
        assert_eq!(empty.satisfied(), 0);
    }

    #[test]
    fn test_satisfied_count() {
        let conditions: Conditions = vec![true, false, true, true].into();
        assert_eq!(conditions.satisfied(), 3);
        assert_eq!(conditions.len(), 4);
    }

    #[test]
    fn test_single_from_bool() {
        let condition = Conditions::from(true);
        assert_eq!(condition.len(), 1);
        assert!(condition.any());
    }
}
