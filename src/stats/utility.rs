use serde::Serialize;
use std::collections::BTreeMap;

/// How many times a value occurs in a column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueCount<T> {
    pub value: T,
    pub count: usize,
}

/// Counts occurrences of each value.
///
/// Ordered by count descending; equal counts keep ascending value order.
pub fn value_counts<T, I>(values: I) -> Vec<ValueCount<T>>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut counts: BTreeMap<T, usize> = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_default() += 1;
    }

    let mut counts: Vec<ValueCount<T>> = counts
        .into_iter()
        .map(|(value, count)| ValueCount { value, count })
        .collect();
    // sort_by is stable, so ties stay in key order
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// Most frequent value, the smallest one on ties. `None` for empty input.
pub fn mode<T, I>(values: I) -> Option<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    value_counts(values).into_iter().next().map(|c| c.value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_empty() {
        assert_eq!(mode(Vec::<u32>::new()), None);
    }

    #[test]
    fn test_mode_picks_most_frequent() {
        assert_eq!(mode([3, 1, 3, 2, 3, 1]), Some(3));
    }

    #[test]
    fn test_mode_tie_picks_smallest() {
        assert_eq!(mode(["b", "a", "b", "a", "c"]), Some("a"));
        assert_eq!(mode([17, 8]), Some(8));
    }

    #[test]
    fn test_value_counts_order() {
        let counts = value_counts(["Customer", "Subscriber", "Subscriber", "Dependent", "Customer", "Subscriber"]);
        let flat: Vec<_> = counts.iter().map(|c| (c.value, c.count)).collect();
        assert_eq!(flat, [("Subscriber", 3), ("Customer", 2), ("Dependent", 1)]);
    }
}
