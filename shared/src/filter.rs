//! Record filter
//!
//! Derives a filtered view over a loaded collection as the conjunction of
//! zero or more predicates: free-text substring match (case-insensitive,
//! across one or more string fields) and categorical equality. The filter
//! is recomputed in full on every call and preserves the collection's
//! relative ordering; collections are a single backend page, so there is
//! no incremental indexing.

/// Conjunctive predicate set over records of type `T`
pub struct RecordFilter<T> {
    predicates: Vec<Box<dyn Fn(&T) -> bool + Send + Sync>>,
}

impl<T> RecordFilter<T> {
    pub fn new() -> Self {
        Self {
            predicates: Vec::new(),
        }
    }

    /// Number of active predicates
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Add a free-text search predicate over the given string fields.
    ///
    /// A record matches when any field contains the term, ignoring case.
    /// A blank term adds no predicate (the search box is inactive).
    pub fn search<F>(mut self, term: &str, fields: F) -> Self
    where
        F: Fn(&T) -> Vec<&str> + Send + Sync + 'static,
    {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return self;
        }
        self.predicates.push(Box::new(move |record| {
            fields(record)
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        }));
        self
    }

    /// Add a categorical equality predicate.
    ///
    /// `None` adds no predicate (the dropdown is on "all").
    pub fn equals<V, K>(mut self, wanted: Option<V>, key: K) -> Self
    where
        V: PartialEq + Send + Sync + 'static,
        K: Fn(&T) -> V + Send + Sync + 'static,
    {
        if let Some(wanted) = wanted {
            self.predicates
                .push(Box::new(move |record| key(record) == wanted));
        }
        self
    }

    /// Add a custom predicate
    pub fn push<P>(mut self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.predicates.push(Box::new(predicate));
        self
    }

    /// True when the record satisfies every active predicate
    pub fn matches(&self, record: &T) -> bool {
        self.predicates.iter().all(|p| p(record))
    }

    /// Filtered view, preserving input order. Zero predicates passes all.
    pub fn apply<'a>(&self, records: &'a [T]) -> Vec<&'a T> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}

impl<T> Default for RecordFilter<T> {
    fn default() -> Self {
        Self::new()
    }
}
