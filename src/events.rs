use std::collections::HashMap;
use std::hash::Hash;

/// The values an event binds to one key. Every value delivered by a single
/// trigger call shares one domain, mirroring the two predicate value domains.
#[derive(Clone, Copy, Debug)]
pub enum AssignedValues<'a> {
    Integers(&'a [i64]),
    Strings(&'a [String]),
}

/// The query-time side of the index: an assignment of keys to values.
///
/// `retrieve` only needs two operations, so callers are free to keep their
/// events in whatever shape they already have and implement this trait over
/// it. [`Event`] is a ready-made implementation for the common case.
pub trait Assignment<K> {
    /// The number of distinct keys bound by the assignment.
    fn size(&self) -> usize;

    /// Invoke `callback` once per bound key with every value bound to it.
    fn trigger<F>(&self, callback: F)
    where
        F: FnMut(&K, AssignedValues<'_>);
}

#[derive(Clone, Debug)]
enum EventValues {
    Integers(Vec<i64>),
    Strings(Vec<String>),
}

/// A map-backed [`Assignment`].
///
/// ```rust
/// use k_index::Event;
///
/// let mut builder = Event::builder();
/// builder.with_integer("exchange_id", 5);
/// builder.with_strings("deal_ids", &["deal-1", "deal-3"]);
/// let event = builder.build();
/// ```
#[derive(Clone, Debug, Default)]
pub struct Event<K> {
    values_by_key: HashMap<K, EventValues>,
}

impl<K: Hash + Eq> Event<K> {
    pub fn builder() -> EventBuilder<K> {
        EventBuilder::new()
    }
}

impl<K: Hash + Eq> Assignment<K> for Event<K> {
    fn size(&self) -> usize {
        self.values_by_key.len()
    }

    fn trigger<F>(&self, mut callback: F)
    where
        F: FnMut(&K, AssignedValues<'_>),
    {
        for (key, values) in &self.values_by_key {
            match values {
                EventValues::Integers(values) => {
                    callback(key, AssignedValues::Integers(values));
                }
                EventValues::Strings(values) => {
                    callback(key, AssignedValues::Strings(values));
                }
            }
        }
    }
}

/// Accumulates key/values bindings for an [`Event`]. Binding a key twice
/// replaces the previous values.
#[derive(Clone, Debug, Default)]
pub struct EventBuilder<K> {
    values_by_key: HashMap<K, EventValues>,
}

impl<K: Hash + Eq> EventBuilder<K> {
    pub fn new() -> Self {
        Self {
            values_by_key: HashMap::new(),
        }
    }

    pub fn with_integer(&mut self, key: K, value: i64) -> &mut Self {
        self.with_integers(key, &[value])
    }

    pub fn with_integers(&mut self, key: K, values: &[i64]) -> &mut Self {
        self.values_by_key
            .insert(key, EventValues::Integers(values.to_vec()));
        self
    }

    pub fn with_string(&mut self, key: K, value: &str) -> &mut Self {
        self.with_strings(key, &[value])
    }

    pub fn with_strings(&mut self, key: K, values: &[&str]) -> &mut Self {
        self.values_by_key.insert(
            key,
            EventValues::Strings(values.iter().map(|value| value.to_string()).collect()),
        );
        self
    }

    pub fn build(self) -> Event<K> {
        Event {
            values_by_key: self.values_by_key,
        }
    }
}
