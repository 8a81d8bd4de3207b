use std::hash::Hash;

use itertools::Itertools;

/// Set-like helpers for [`Vec`].
///
/// # Example
///
/// ```rust
/// use essentials::VecExt;
///
/// let mut loot = Vec::new();
/// loot.push_some(Some("sword"));
/// loot.push_some(None);
/// loot.push_some(Some("shield"));
/// loot.push_some(Some("sword"));
///
/// assert_eq!(loot.distinct(), vec!["sword", "shield"]);
///
/// loot.retain_exclusive(&["sword"]);
/// assert_eq!(loot, vec!["shield"]);
/// ```
pub trait VecExt<T> {
    /// Appends the value if there is one.
    fn push_some(&mut self, item: Option<T>);

    /// Removes every element that is also present in `other`, keeping the order of the rest.
    fn retain_exclusive(&mut self, other: &[T])
    where
        T: PartialEq;

    /// Returns the first occurrence of each distinct element, in their original order.
    #[must_use]
    fn distinct(&self) -> Vec<T>
    where
        T: Clone + Eq + Hash;
}

impl<T> VecExt<T> for Vec<T> {
    fn push_some(&mut self, item: Option<T>) {
        self.extend(item);
    }

    fn retain_exclusive(&mut self, other: &[T])
    where
        T: PartialEq,
    {
        self.retain(|item| !other.contains(item));
    }

    fn distinct(&self) -> Vec<T>
    where
        T: Clone + Eq + Hash,
    {
        self.iter().unique().cloned().collect()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn push_some_skips_none() {
        let mut items = vec![1];

        items.push_some(None);
        items.push_some(Some(2));

        assert_eq!(items, vec![1, 2]);
    }

    #[test]
    fn retain_exclusive_removes_all_occurrences() {
        let mut items = vec![1, 2, 3, 2, 4];

        items.retain_exclusive(&[2, 4, 9]);

        assert_eq!(items, vec![1, 3]);
    }

    #[test]
    fn retain_exclusive_with_empty_other() {
        let mut items = vec![1, 2];

        items.retain_exclusive(&[]);

        assert_eq!(items, vec![1, 2]);
    }

    #[test]
    fn distinct_keeps_first_occurrence_order() {
        let items = vec!["b", "a", "b", "c", "a"];

        assert_eq!(items.distinct(), vec!["b", "a", "c"]);

        // The original is untouched.
        assert_eq!(items.len(), 5);
    }

    #[test]
    fn distinct_of_empty() {
        let items: Vec<u8> = Vec::new();

        assert!(items.distinct().is_empty());
    }
}
