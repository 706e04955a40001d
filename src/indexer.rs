use crate::documents::Document;
use crate::entries::Entry;
use crate::error::IndexError;
use crate::events::Assignment;
use crate::index::InvertedIndex;
use crate::postings::{PostingList, PostingListGroup};
use log::debug;
use std::collections::HashSet;
use std::hash::Hash;

/// The document ids matched by a retrieval. The same document may be reached
/// through several of its conjunctions; the set keeps it once.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct ResultSet {
    ids: HashSet<u64>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, document_id: u64) {
        self.ids.insert(document_id);
    }

    pub fn contains(&self, document_id: u64) -> bool {
        self.ids.contains(&document_id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// The matched ids, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.ids.iter().copied()
    }
}

/// An index over the boolean expressions of a collection of documents.
///
/// Build once with [`Indexer::create`], then run any number of retrievals
/// against it. Conjunctions are partitioned by size (their number of positive
/// predicates) with one inverted index per size; retrieval walks the sizes
/// from the most selective down and merges the posting lists triggered by the
/// assignment.
///
/// ```rust
/// use k_index::{Conjunction, Document, Event, Expression, Indexer, ResultSet};
///
/// let documents = vec![Document::new(vec![Conjunction::new(vec![
///     Expression::one_of("exchange_id", vec![1, 3]),
///     Expression::none_of("deal_ids", vec!["deal-2"]),
/// ])])];
/// let indexer = Indexer::create(&documents).unwrap();
///
/// let mut builder = Event::builder();
/// builder.with_integer("exchange_id", 3);
/// builder.with_strings("deal_ids", &["deal-1", "deal-3"]);
///
/// let mut result = ResultSet::new();
/// indexer.retrieve(&mut result, &builder.build());
/// assert!(result.contains(0));
/// ```
pub struct Indexer<K> {
    indexes: Vec<InvertedIndex<K>>,
    zero: Vec<Entry>,
}

impl<K> Indexer<K>
where
    K: Hash + Eq + Clone,
{
    /// Build the index. Document ids are the positions in `documents`;
    /// fails if a document or conjunction count exceeds what an entry can
    /// pack (2^47 documents, 2^16 conjunctions per document).
    pub fn create(documents: &[Document<K>]) -> Result<Self, IndexError> {
        let mut indexer = Self {
            indexes: Vec::new(),
            zero: Vec::new(),
        };
        indexer.build(documents)?;
        Ok(indexer)
    }

    fn build(&mut self, documents: &[Document<K>]) -> Result<(), IndexError> {
        for (i, document) in documents.iter().enumerate() {
            for (j, conjunction) in document.conjunctions.iter().enumerate() {
                let size = conjunction.size();
                if self.indexes.len() < size + 1 {
                    self.indexes.resize_with(size + 1, InvertedIndex::default);
                }
                for expression in &conjunction.expressions {
                    let entry = Entry::new(i as u64, j as u64, expression.positive)?;
                    self.indexes[size].add_entry(entry, &expression.key, &expression.values);
                }

                // Purely negative and empty conjunctions feed the zero list;
                // their negative predicates stay in the size-0 index so they
                // can still veto at query time.
                if size == 0 {
                    self.zero.push(Entry::new(i as u64, j as u64, true)?);
                }
            }
        }

        for index in &mut self.indexes {
            index.build();
        }
        self.zero.sort_unstable();

        debug!(
            "indexed {} documents across {} conjunction sizes ({} zero-size conjunctions)",
            documents.len(),
            self.indexes.len(),
            self.zero.len()
        );
        Ok(())
    }

    /// Add to `result` the id of every document with a conjunction satisfied
    /// by `assignment`.
    pub fn retrieve<A>(&self, result: &mut ResultSet, assignment: &A)
    where
        A: Assignment<K>,
    {
        let Some(max_size) = self.indexes.len().checked_sub(1) else {
            return;
        };

        let mut groups = Vec::new();
        for k in (0..=max_size.min(assignment.size())).rev() {
            groups.clear();
            self.collect_groups(&mut groups, k, assignment);

            // A size-0 conjunction still needs the zero-list group to agree.
            let required = k.max(1);
            if groups.len() < required {
                continue;
            }

            debug!("size {k}: merging {} groups, {required} required", groups.len());
            merge_groups(&mut groups, required, result);
        }
    }

    fn collect_groups<'a, A>(
        &'a self,
        groups: &mut Vec<PostingListGroup<'a>>,
        k: usize,
        assignment: &A,
    ) where
        A: Assignment<K>,
    {
        let index = &self.indexes[k];
        assignment.trigger(|key, values| {
            let mut group = PostingListGroup::new();
            index.trigger(&mut group, key, values);
            if !group.is_empty() {
                groups.push(group);
            }
        });

        if k == 0 && !self.zero.is_empty() {
            let mut group = PostingListGroup::new();
            group.add(PostingList::new(&self.zero));
            groups.push(group);
        }
    }
}

/// The k-way merge: find every conjunction id on which the first `required`
/// groups agree, reject it if the smallest agreeing entry is a negated
/// predicate, and otherwise emit its document.
fn merge_groups(groups: &mut [PostingListGroup<'_>], required: usize, result: &mut ResultSet) {
    loop {
        groups.sort_unstable();

        if groups[required - 1].is_empty() {
            break;
        }

        let head = groups[0].current();
        let boundary = groups[required - 1].current();
        let next = if head.id() == boundary.id() {
            if head.is_negative() {
                // Negative entries sort before positive ones of the same id,
                // so the veto is always observed at the head group. The tail
                // groups sharing the rejected id must move past it as well;
                // the sort keeps them contiguous right after the boundary.
                let reject = head.id();
                for group in &mut groups[required..] {
                    if group.current().id() != reject {
                        break;
                    }
                    group.skip_to(reject + 1);
                }
            } else {
                result.add(boundary.document_id());
            }
            boundary.id() + 1
        } else {
            boundary.id()
        };

        for group in &mut groups[..required] {
            group.skip_to(next);
        }
    }
}
