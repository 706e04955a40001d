//! An implementation of the conjunction algorithm of the [Indexing Boolean
//! Expressions](https://dl.acm.org/doi/10.14778/1687627.1687633) paper.
//!
//! Documents are disjunctions of conjunctions of key/value predicates, the
//! shape used by ad-targeting and subscription-matching systems. The indexer
//! partitions the conjunctions by their number of positive predicates, builds
//! one inverted index per size, and answers an assignment of keys to values
//! with the set of documents whose expression evaluates to true, honoring
//! negated predicates along the way.
//!
//! # Examples
//!
//! ```rust
//! use k_index::{Conjunction, Document, Event, Expression, Indexer, ResultSet};
//!
//! // "exchange_id in {1, 3} and country not in {'FR'}"
//! let targeting = Document::new(vec![Conjunction::new(vec![
//!     Expression::one_of("exchange_id", vec![1, 3]),
//!     Expression::none_of("country", vec!["FR"]),
//! ])]);
//! // "deal_ids in {'deal-1'}"
//! let deal = Document::new(vec![Conjunction::new(vec![Expression::one_of(
//!     "deal_ids",
//!     vec!["deal-1"],
//! )])]);
//! let indexer = Indexer::create(&[targeting, deal]).unwrap();
//!
//! let mut builder = Event::builder();
//! builder.with_integer("exchange_id", 3);
//! builder.with_string("country", "CA");
//! builder.with_strings("deal_ids", &["deal-2", "deal-3"]);
//!
//! let mut result = ResultSet::new();
//! indexer.retrieve(&mut result, &builder.build());
//! assert!(result.contains(0));
//! assert!(!result.contains(1));
//! ```
mod documents;
mod entries;
mod error;
mod events;
mod index;
mod indexer;
mod postings;

pub use crate::{
    documents::{Conjunction, Document, Expression, PredicateValues},
    error::IndexError,
    events::{AssignedValues, Assignment, Event, EventBuilder},
    indexer::{Indexer, ResultSet},
};
