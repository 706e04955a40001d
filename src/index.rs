use crate::documents::PredicateValues;
use crate::entries::Entry;
use crate::events::AssignedValues;
use crate::postings::{PostingList, PostingListGroup};
use std::collections::HashMap;
use std::hash::Hash;

/// The inverted index for one conjunction size: a two-level mapping from a
/// predicate key to a predicate value to the entries of the conjunctions
/// carrying that predicate. The two value domains live in parallel sub-maps
/// and insertion/lookup dispatches on the domain.
pub(crate) struct InvertedIndex<K> {
    integers: HashMap<K, HashMap<i64, Vec<Entry>>>,
    strings: HashMap<K, HashMap<String, Vec<Entry>>>,
}

impl<K> Default for InvertedIndex<K> {
    fn default() -> Self {
        Self {
            integers: HashMap::new(),
            strings: HashMap::new(),
        }
    }
}

impl<K> InvertedIndex<K>
where
    K: Hash + Eq + Clone,
{
    /// Record `entry` under `(key, value)` for each value of the predicate.
    pub(crate) fn add_entry(&mut self, entry: Entry, key: &K, values: &PredicateValues) {
        match values {
            PredicateValues::Integers(values) => {
                let by_value = self.integers.entry(key.clone()).or_default();
                for value in values {
                    by_value.entry(*value).or_default().push(entry);
                }
            }
            PredicateValues::Strings(values) => {
                let by_value = self.strings.entry(key.clone()).or_default();
                for value in values {
                    by_value.entry(value.clone()).or_default().push(entry);
                }
            }
        }
    }

    /// Add to `group` the posting list of every `(key, value)` pair present
    /// in the index for the assigned values.
    pub(crate) fn trigger<'a>(
        &'a self,
        group: &mut PostingListGroup<'a>,
        key: &K,
        values: AssignedValues<'_>,
    ) {
        match values {
            AssignedValues::Integers(values) => {
                let Some(by_value) = self.integers.get(key) else {
                    return;
                };
                for value in values {
                    if let Some(entries) = by_value.get(value) {
                        group.add(PostingList::new(entries));
                    }
                }
            }
            AssignedValues::Strings(values) => {
                let Some(by_value) = self.strings.get(key) else {
                    return;
                };
                for value in values {
                    if let Some(entries) = by_value.get(value) {
                        group.add(PostingList::new(entries));
                    }
                }
            }
        }
    }

    /// Sort every posting list. Must run once all the entries are inserted
    /// and before the first trigger.
    pub(crate) fn build(&mut self) {
        for by_value in self.integers.values_mut() {
            for entries in by_value.values_mut() {
                entries.sort_unstable();
            }
        }
        for by_value in self.strings.values_mut() {
            for entries in by_value.values_mut() {
                entries.sort_unstable();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(document_id: u64, conjunction_index: u64, positive: bool) -> Entry {
        Entry::new(document_id, conjunction_index, positive).unwrap()
    }

    #[test]
    fn trigger_collects_the_posting_lists_of_the_assigned_values() {
        let mut index = InvertedIndex::default();
        index.add_entry(
            entry(3, 0, true),
            &"exchange_id",
            &PredicateValues::Integers(vec![1, 2]),
        );
        index.add_entry(
            entry(1, 0, true),
            &"exchange_id",
            &PredicateValues::Integers(vec![2]),
        );
        index.build();

        let mut group = PostingListGroup::new();
        index.trigger(&mut group, &"exchange_id", AssignedValues::Integers(&[2]));

        assert_eq!(entry(1, 0, true), group.current());
    }

    #[test]
    fn build_sorts_the_posting_lists() {
        let mut index = InvertedIndex::default();
        for document_id in [5, 0, 2] {
            index.add_entry(
                entry(document_id, 0, true),
                &"country",
                &PredicateValues::Strings(vec!["CA".to_string()]),
            );
        }
        index.build();

        let mut group = PostingListGroup::new();
        index.trigger(
            &mut group,
            &"country",
            AssignedValues::Strings(&["CA".to_string()]),
        );

        assert_eq!(entry(0, 0, true), group.current());
    }

    #[test]
    fn triggering_an_unknown_key_or_value_adds_nothing() {
        let mut index = InvertedIndex::default();
        index.add_entry(
            entry(0, 0, true),
            &"exchange_id",
            &PredicateValues::Integers(vec![1]),
        );
        index.build();

        let mut group = PostingListGroup::new();
        index.trigger(&mut group, &"unknown", AssignedValues::Integers(&[1]));
        index.trigger(&mut group, &"exchange_id", AssignedValues::Integers(&[9]));
        index.trigger(
            &mut group,
            &"exchange_id",
            AssignedValues::Strings(&["1".to_string()]),
        );

        assert!(group.is_empty());
    }
}
