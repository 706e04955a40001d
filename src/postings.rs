use crate::entries::{Entry, EntryId};
use std::cmp::Ordering;

/// A forward-only cursor over a sorted slice of entries borrowed from the
/// indexer's backing storage.
#[derive(Clone, Copy)]
pub(crate) struct PostingList<'a> {
    entries: &'a [Entry],
}

impl<'a> PostingList<'a> {
    pub(crate) fn new(entries: &'a [Entry]) -> Self {
        Self { entries }
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry under the cursor. Must not be called once the list is empty.
    #[inline]
    pub(crate) fn current(&self) -> Entry {
        self.entries[0]
    }

    /// Advance the cursor to the first entry whose id is at least `id`. The
    /// cursor never moves backward.
    pub(crate) fn skip_to(&mut self, id: EntryId) {
        while let Some((first, rest)) = self.entries.split_first() {
            if first.id() >= id {
                break;
            }
            self.entries = rest;
        }
    }
}

/// A union of posting lists exposing the minimum current entry across its
/// members, so that all the lists triggered by one key behave as a single
/// sorted stream.
pub(crate) struct PostingListGroup<'a> {
    current: Entry,
    lists: Vec<PostingList<'a>>,
}

impl<'a> PostingListGroup<'a> {
    pub(crate) fn new() -> Self {
        Self {
            current: Entry::max(),
            lists: Vec::new(),
        }
    }

    /// Include a posting list. Exhausted lists are discarded.
    pub(crate) fn add(&mut self, list: PostingList<'a>) {
        if list.is_empty() {
            return;
        }

        self.current = self.current.min(list.current());
        self.lists.push(list);
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.current == Entry::max()
    }

    #[inline]
    pub(crate) fn current(&self) -> Entry {
        self.current
    }

    /// Advance every member past all entries with an id below `id` and expose
    /// the new minimum. Once every member is exhausted the group stays at the
    /// sentinel.
    pub(crate) fn skip_to(&mut self, id: EntryId) {
        if self.current == Entry::max() {
            return;
        }

        let mut min = Entry::max();
        for list in &mut self.lists {
            if list.is_empty() {
                continue;
            }
            list.skip_to(id);
            if list.is_empty() {
                continue;
            }
            min = min.min(list.current());
        }

        self.current = min;
    }
}

impl PartialEq for PostingListGroup<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current
    }
}

impl Eq for PostingListGroup<'_> {}

impl PartialOrd for PostingListGroup<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PostingListGroup<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.current.cmp(&other.current)
    }
}
