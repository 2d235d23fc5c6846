//! Ordered secondary index: field value -> rows holding that value.

use std::collections::BTreeMap;
use std::ops::Bound;

/// Ordered multimap from a column value to the row ids currently holding it.
///
/// Buckets never exist empty: removing the last row of a bucket removes the
/// bucket. Row order inside a bucket is unspecified.
#[derive(Debug, Clone, Default)]
pub struct SecondaryIndex {
    buckets: BTreeMap<i32, Vec<usize>>,
}

impl SecondaryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `row` to the bucket for `value`, creating the bucket if absent.
    pub fn insert(&mut self, value: i32, row: usize) {
        self.buckets.entry(value).or_default().push(row);
    }

    /// Removes `row` from the bucket for `value`.
    ///
    /// Returns `false` if the row was not in that bucket.
    pub fn remove(&mut self, value: i32, row: usize) -> bool {
        let Some(bucket) = self.buckets.get_mut(&value) else {
            return false;
        };
        let Some(pos) = bucket.iter().position(|&r| r == row) else {
            return false;
        };
        bucket.swap_remove(pos);
        if bucket.is_empty() {
            self.buckets.remove(&value);
        }
        true
    }

    /// Moves `row` from the bucket for `old` to the bucket for `new`.
    pub fn relocate(&mut self, old: i32, new: i32, row: usize) {
        self.remove(old, row);
        self.insert(new, row);
    }

    /// Rows holding exactly `value`.
    pub fn bucket(&self, value: i32) -> Option<&[usize]> {
        self.buckets.get(&value).map(Vec::as_slice)
    }

    /// Rows whose value is strictly greater than `threshold`, ascending by value.
    pub fn rows_above(&self, threshold: i32) -> impl Iterator<Item = usize> + '_ {
        self.buckets
            .range((Bound::Excluded(threshold), Bound::Unbounded))
            .flat_map(|(_, rows)| rows.iter().copied())
    }

    /// Rows whose value is strictly less than `threshold`, ascending by value.
    pub fn rows_below(&self, threshold: i32) -> impl Iterator<Item = usize> + '_ {
        self.buckets
            .range(..threshold)
            .flat_map(|(_, rows)| rows.iter().copied())
    }

    /// Number of distinct indexed values.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Iterates `(value, rows)` pairs in ascending value order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, &[usize])> + '_ {
        self.buckets
            .iter()
            .map(|(value, rows)| (*value, rows.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(rows: impl Iterator<Item = usize>) -> Vec<usize> {
        let mut rows: Vec<usize> = rows.collect();
        rows.sort_unstable();
        rows
    }

    #[test]
    fn test_empty_bucket_removed() {
        let mut index = SecondaryIndex::new();
        index.insert(7, 0);
        index.insert(7, 1);
        assert!(index.remove(7, 0));
        assert_eq!(index.bucket(7), Some(&[1usize][..]));
        assert!(index.remove(7, 1));
        assert_eq!(index.bucket(7), None);
        assert_eq!(index.bucket_count(), 0);
    }

    #[test]
    fn test_remove_missing_row() {
        let mut index = SecondaryIndex::new();
        index.insert(3, 4);
        assert!(!index.remove(3, 5));
        assert!(!index.remove(9, 4));
        assert_eq!(index.bucket(3), Some(&[4usize][..]));
    }

    #[test]
    fn test_strict_range_bounds() {
        let mut index = SecondaryIndex::new();
        for (row, value) in [5, 10, 10, 15, i32::MIN, i32::MAX].into_iter().enumerate() {
            index.insert(value, row);
        }
        assert_eq!(sorted(index.rows_above(10)), vec![3, 5]);
        assert_eq!(sorted(index.rows_below(10)), vec![0, 4]);
        assert_eq!(sorted(index.rows_above(i32::MAX)), Vec::<usize>::new());
        assert_eq!(sorted(index.rows_below(i32::MIN)), Vec::<usize>::new());
        assert_eq!(index.rows_above(i32::MIN).count(), 5);
    }

    #[test]
    fn test_relocate() {
        let mut index = SecondaryIndex::new();
        index.insert(1, 0);
        index.relocate(1, 2, 0);
        assert_eq!(index.bucket(1), None);
        assert_eq!(index.bucket(2), Some(&[0usize][..]));
        let values: Vec<i32> = index.iter().map(|(v, _)| v).collect();
        assert_eq!(values, vec![2]);
    }
}
