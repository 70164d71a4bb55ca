//! Aggregation engine
//!
//! Read-only summary computations over a loaded collection, with no
//! backend round-trip. All functions are pure and never mutate their
//! input. The average of an empty collection is an explicit `None`, not
//! a silent zero; `max_by` over an empty collection is an error.

use thiserror::Error;

/// Aggregation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StatsError {
    /// The requested aggregate is undefined over no data
    #[error("empty collection")]
    EmptyCollection,
}

/// Count of records satisfying the predicate
pub fn count<T, P>(records: &[T], predicate: P) -> usize
where
    P: Fn(&T) -> bool,
{
    records.iter().filter(|r| predicate(r)).count()
}

/// Group records by key, groups ordered by first-seen key, insertion
/// order preserved within each group.
pub fn group_by<'a, T, K, F>(records: &'a [T], key: F) -> Vec<(K, Vec<&'a T>)>
where
    K: PartialEq,
    F: Fn(&T) -> K,
{
    let mut groups: Vec<(K, Vec<&'a T>)> = Vec::new();
    for record in records {
        let k = key(record);
        match groups.iter().position(|(existing, _)| *existing == k) {
            Some(idx) => groups[idx].1.push(record),
            None => groups.push((k, vec![record])),
        }
    }
    groups
}

/// Sum of a numeric field over all records
pub fn sum<T, F>(records: &[T], f: F) -> f64
where
    F: Fn(&T) -> f64,
{
    records.iter().map(f).sum()
}

/// Mean of a numeric field, or `None` over an empty collection
pub fn average<T, F>(records: &[T], f: F) -> Option<f64>
where
    F: Fn(&T) -> f64,
{
    if records.is_empty() {
        return None;
    }
    Some(sum(records, f) / records.len() as f64)
}

/// Record with the greatest value of a numeric field
pub fn max_by<T, F>(records: &[T], f: F) -> Result<&T, StatsError>
where
    F: Fn(&T) -> f64,
{
    records
        .iter()
        .max_by(|a, b| {
            f(a).partial_cmp(&f(b))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .ok_or(StatsError::EmptyCollection)
}

/// Share of `part` in `whole`, as a percentage.
///
/// A zero denominator yields 0.0 (no NaN or infinity); an empty board
/// shows "0%", it does not crash the view.
pub fn percentage(part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        return 0.0;
    }
    part / whole * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Row {
        cat: &'static str,
        value: f64,
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { cat: "A", value: 10.0 },
            Row { cat: "B", value: 30.0 },
            Row { cat: "A", value: 20.0 },
        ]
    }

    #[test]
    fn test_count_with_predicate() {
        let data = rows();
        assert_eq!(count(&data, |r| r.cat == "A"), 2);
        assert_eq!(count(&data, |_| true), 3);
        assert_eq!(count::<Row, _>(&[], |_| true), 0);
    }

    #[test]
    fn test_group_by_first_seen_order() {
        let data = rows();
        let groups = group_by(&data, |r| r.cat);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "A");
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[0].1[0].value, 10.0);
        assert_eq!(groups[0].1[1].value, 20.0);
        assert_eq!(groups[1].0, "B");
        assert_eq!(groups[1].1.len(), 1);
    }

    #[test]
    fn test_sum_and_average() {
        let data = rows();
        assert_eq!(sum(&data, |r| r.value), 60.0);
        assert_eq!(average(&data, |r| r.value), Some(20.0));
    }

    #[test]
    fn test_average_of_empty_is_absent() {
        let data: Vec<Row> = Vec::new();
        assert_eq!(average(&data, |r| r.value), None);
    }

    #[test]
    fn test_max_by() {
        let data = rows();
        let max = max_by(&data, |r| r.value).unwrap();
        assert_eq!(max.value, 30.0);
    }

    #[test]
    fn test_max_by_empty_is_error() {
        let data: Vec<Row> = Vec::new();
        assert_eq!(
            max_by(&data, |r| r.value).unwrap_err(),
            StatsError::EmptyCollection
        );
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(5.0, 20.0), 25.0);
        assert_eq!(percentage(0.0, 0.0), 0.0);
        assert_eq!(percentage(3.0, 0.0), 0.0);
        assert!(percentage(1.0, 3.0).is_finite());
    }
}
