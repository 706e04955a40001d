use crate::error::IndexError;
use std::fmt;

/// The part of an [`Entry`] that identifies a conjunction: the document id and
/// the conjunction index, without the polarity bit.
pub(crate) type EntryId = u64;

pub(crate) const MAX_DOCUMENT_ID: u64 = (1 << 47) - 1;
pub(crate) const MAX_CONJUNCTION_INDEX: u64 = (1 << 16) - 1;

/// A posting-list element referring to one predicate of one conjunction.
///
/// The document id, the conjunction index within the document and the
/// predicate polarity are packed into a single word: bit 0 is the polarity,
/// bits 1..17 the conjunction index and bits 17.. the document id. Comparing
/// the packed words orders entries by (document id, conjunction index,
/// polarity), with the negative variant strictly before the positive one for
/// the same conjunction. The matching loop relies on that ordering to observe
/// vetoes before matches.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct Entry(u64);

impl Entry {
    pub(crate) fn new(
        document_id: u64,
        conjunction_index: u64,
        positive: bool,
    ) -> Result<Self, IndexError> {
        if document_id > MAX_DOCUMENT_ID {
            return Err(IndexError::DocumentIdOutOfRange(document_id));
        }
        if conjunction_index > MAX_CONJUNCTION_INDEX {
            return Err(IndexError::ConjunctionIndexOutOfRange(conjunction_index));
        }
        Ok(Self(
            (document_id << 17) | (conjunction_index << 1) | u64::from(positive),
        ))
    }

    /// A sentinel strictly greater than any entry built by [`Entry::new`].
    pub(crate) const fn max() -> Self {
        Self(u64::MAX)
    }

    /// Equal for the positive and negative variants of the same conjunction.
    #[inline]
    pub(crate) fn id(self) -> EntryId {
        self.0 >> 1
    }

    #[inline]
    pub(crate) fn document_id(self) -> u64 {
        self.0 >> 17
    }

    #[inline]
    pub(crate) fn conjunction_index(self) -> u64 {
        (self.0 >> 1) & MAX_CONJUNCTION_INDEX
    }

    #[inline]
    pub(crate) fn is_negative(self) -> bool {
        self.0 & 1 == 0
    }
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Entry")
            .field("document_id", &self.document_id())
            .field("conjunction_index", &self.conjunction_index())
            .field("positive", &!self.is_negative())
            .finish()
    }
}
