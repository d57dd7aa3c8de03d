//! Column-at-a-time application of the scorers and reductions.
//!
//! Indicators are computed for millions of address points, one row at a time,
//! with no interaction between rows. The helpers here map a scalar operation
//! over a whole column and keep results in input order.
//!
//! With the `parallel` feature, the `par_*` variants split the column across
//! the rayon thread pool. They return exactly what the sequential variants
//! return; only throughput differs.
//!
//! # Example
//!
//! ```rust
//! use accessr::batch::{batch_threshold_hard, BatchSummary};
//!
//! let column = [Some(120), None, Some(950), Some(300)];
//! let scores = batch_threshold_hard(&column, 400);
//! assert_eq!(scores, vec![Some(1), None, Some(0), Some(1)]);
//!
//! let summary = BatchSummary::from_hard(&scores);
//! assert_eq!(summary.rows, 4);
//! assert_eq!(summary.scored, 3);
//! ```

use crate::array::{array_min_nullable, count_in_threshold_nullable};
use crate::threshold::{threshold_hard, threshold_soft};

/// Hard threshold score for every distance in a column.
pub fn batch_threshold_hard(distances: &[Option<i32>], threshold: i32) -> Vec<Option<u8>> {
    distances
        .iter()
        .map(|&d| threshold_hard(d, threshold))
        .collect()
}

/// Soft threshold score for every distance in a column.
pub fn batch_threshold_soft(distances: &[Option<i32>], threshold: i32) -> Vec<Option<f64>> {
    distances
        .iter()
        .map(|&d| threshold_soft(d, threshold))
        .collect()
}

/// Per-row count of destinations within `threshold`.
pub fn batch_count_in_threshold(rows: &[Vec<Option<i32>>], threshold: i32) -> Vec<usize> {
    rows.iter()
        .map(|row| count_in_threshold_nullable(row, threshold))
        .collect()
}

/// Per-row distance to the closest present destination.
pub fn batch_array_min(rows: &[Vec<Option<i32>>]) -> Vec<Option<i32>> {
    rows.iter().map(|row| array_min_nullable(row)).collect()
}

#[cfg(feature = "parallel")]
mod parallel {
    use rayon::prelude::*;

    use crate::array::{array_min_nullable, count_in_threshold_nullable};
    use crate::threshold::{threshold_hard, threshold_soft};

    /// Parallel [`batch_threshold_hard`](super::batch_threshold_hard).
    pub fn par_threshold_hard(distances: &[Option<i32>], threshold: i32) -> Vec<Option<u8>> {
        distances
            .par_iter()
            .map(|&d| threshold_hard(d, threshold))
            .collect()
    }

    /// Parallel [`batch_threshold_soft`](super::batch_threshold_soft).
    pub fn par_threshold_soft(distances: &[Option<i32>], threshold: i32) -> Vec<Option<f64>> {
        distances
            .par_iter()
            .map(|&d| threshold_soft(d, threshold))
            .collect()
    }

    /// Parallel [`batch_count_in_threshold`](super::batch_count_in_threshold).
    pub fn par_count_in_threshold(rows: &[Vec<Option<i32>>], threshold: i32) -> Vec<usize> {
        rows.par_iter()
            .map(|row| count_in_threshold_nullable(row, threshold))
            .collect()
    }

    /// Parallel [`batch_array_min`](super::batch_array_min).
    pub fn par_array_min(rows: &[Vec<Option<i32>>]) -> Vec<Option<i32>> {
        rows.par_iter().map(|row| array_min_nullable(row)).collect()
    }
}

#[cfg(feature = "parallel")]
pub use parallel::{par_array_min, par_count_in_threshold, par_threshold_hard, par_threshold_soft};

/// Coverage and mean of a scored column.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BatchSummary {
    /// Rows in the column.
    pub rows: usize,
    /// Rows with a score (distance present and valid).
    pub scored: usize,
    /// Mean over scored rows; `None` when nothing was scored.
    pub mean: Option<f64>,
}

impl BatchSummary {
    /// Summarise a soft-score column.
    pub fn from_soft(scores: &[Option<f64>]) -> Self {
        Self::from_values(scores.len(), scores.iter().flatten().copied())
    }

    /// Summarise a hard-score column; the mean is the share of rows with access.
    pub fn from_hard(scores: &[Option<u8>]) -> Self {
        Self::from_values(scores.len(), scores.iter().flatten().map(|&s| f64::from(s)))
    }

    fn from_values(rows: usize, values: impl Iterator<Item = f64>) -> Self {
        let (scored, sum) = values.fold((0usize, 0.0f64), |(n, s), v| (n + 1, s + v));
        let mean = (scored > 0).then(|| sum / scored as f64);
        let summary = Self { rows, scored, mean };
        tracing::debug!(rows, scored, ?mean, "summarised score column");
        summary
    }

    /// Fraction of rows that received a score.
    pub fn coverage(&self) -> f64 {
        if self.rows == 0 {
            0.0
        } else {
            self.scored as f64 / self.rows as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_columns() {
        assert!(batch_threshold_hard(&[], 400).is_empty());
        assert!(batch_threshold_soft(&[], 400).is_empty());
        assert!(batch_count_in_threshold(&[], 400).is_empty());
        assert!(batch_array_min(&[]).is_empty());
    }

    #[test]
    fn summary_of_empty_column() {
        let s = BatchSummary::from_soft(&[]);
        assert_eq!(s.rows, 0);
        assert_eq!(s.scored, 0);
        assert_eq!(s.mean, None);
        assert_eq!(s.coverage(), 0.0);
    }

    #[test]
    fn hard_summary_mean_is_access_share() {
        let s = BatchSummary::from_hard(&[Some(1), Some(0), None, Some(1)]);
        assert_eq!(s.scored, 3);
        assert!((s.mean.unwrap() - 2.0 / 3.0).abs() < 1e-12);
        assert!((s.coverage() - 0.75).abs() < 1e-12);
    }

    #[test]
    fn rows_keep_order() {
        let rows = vec![
            vec![Some(900), Some(100)],
            vec![],
            vec![None, Some(450)],
        ];
        assert_eq!(batch_array_min(&rows), vec![Some(100), None, Some(450)]);
        assert_eq!(batch_count_in_threshold(&rows, 500), vec![1, 0, 1]);
    }
}
