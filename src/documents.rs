/// The values a single predicate matches against, in one of the two
/// supported domains.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum PredicateValues {
    Integers(Vec<i64>),
    Strings(Vec<String>),
}

impl From<Vec<i64>> for PredicateValues {
    fn from(values: Vec<i64>) -> Self {
        Self::Integers(values)
    }
}

impl From<&[i64]> for PredicateValues {
    fn from(values: &[i64]) -> Self {
        Self::Integers(values.to_vec())
    }
}

impl From<Vec<String>> for PredicateValues {
    fn from(values: Vec<String>) -> Self {
        Self::Strings(values)
    }
}

impl From<Vec<&str>> for PredicateValues {
    fn from(values: Vec<&str>) -> Self {
        Self::Strings(values.iter().map(|value| value.to_string()).collect())
    }
}

impl From<&[&str]> for PredicateValues {
    fn from(values: &[&str]) -> Self {
        Self::Strings(values.iter().map(|value| value.to_string()).collect())
    }
}

/// A single key/values predicate. Positive expressions assert that one of the
/// assigned values for the key belongs to `values`; negative expressions
/// assert that none of them do.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Expression<K> {
    pub key: K,
    pub values: PredicateValues,
    pub positive: bool,
}

impl<K> Expression<K> {
    /// A predicate satisfied when one of the assigned values for `key` is in
    /// `values`.
    pub fn one_of<V>(key: K, values: V) -> Self
    where
        V: Into<PredicateValues>,
    {
        Self {
            key,
            values: values.into(),
            positive: true,
        }
    }

    /// A predicate satisfied when none of the assigned values for `key` is in
    /// `values`.
    pub fn none_of<V>(key: K, values: V) -> Self
    where
        V: Into<PredicateValues>,
    {
        Self {
            key,
            values: values.into(),
            positive: false,
        }
    }
}

/// An AND of predicates.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Conjunction<K> {
    pub expressions: Vec<Expression<K>>,
}

impl<K> Conjunction<K> {
    pub fn new(expressions: Vec<Expression<K>>) -> Self {
        Self { expressions }
    }

    /// The number of positive predicates. Negated predicates do not
    /// contribute, so a purely negative conjunction has size 0.
    pub fn size(&self) -> usize {
        self.expressions
            .iter()
            .filter(|expression| expression.positive)
            .count()
    }
}

/// An OR of conjunctions. A document matches an assignment as soon as one of
/// its conjunctions does.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Document<K> {
    pub conjunctions: Vec<Conjunction<K>>,
}

impl<K> Document<K> {
    pub fn new(conjunctions: Vec<Conjunction<K>>) -> Self {
        Self { conjunctions }
    }
}
