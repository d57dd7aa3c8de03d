//! Integration tests for column-at-a-time scoring.
//!
//! Batch helpers must agree element-for-element with the scalar functions,
//! and the parallel variants must agree with the sequential ones.

use accessr::batch::{
    batch_array_min, batch_count_in_threshold, batch_threshold_hard, batch_threshold_soft,
    BatchSummary,
};
use accessr::{array_min_nullable, count_in_threshold_nullable, threshold_hard, threshold_soft};
use rand::prelude::*;

fn random_column(n: usize, seed: u64) -> Vec<Option<i32>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            if rng.gen_bool(0.1) {
                None
            } else {
                Some(rng.gen_range(0..5_000))
            }
        })
        .collect()
}

fn random_rows(n: usize, seed: u64) -> Vec<Vec<Option<i32>>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|i| {
            let len = rng.gen_range(0..12);
            random_column(len, seed ^ i as u64)
        })
        .collect()
}

// =============================================================================
// Scalar agreement
// =============================================================================

#[test]
fn hard_column_matches_scalar() {
    let column = random_column(1_000, 7);
    let scores = batch_threshold_hard(&column, 800);
    assert_eq!(scores.len(), column.len());
    for (d, s) in column.iter().zip(&scores) {
        assert_eq!(*s, threshold_hard(*d, 800), "mismatch for {:?}", d);
    }
}

#[test]
fn soft_column_matches_scalar() {
    let column = random_column(1_000, 11);
    let scores = batch_threshold_soft(&column, 1000);
    for (d, s) in column.iter().zip(&scores) {
        assert_eq!(*s, threshold_soft(*d, 1000), "mismatch for {:?}", d);
    }
}

#[test]
fn row_reductions_match_scalar() {
    let rows = random_rows(500, 3);
    let counts = batch_count_in_threshold(&rows, 1600);
    let mins = batch_array_min(&rows);
    for (i, row) in rows.iter().enumerate() {
        assert_eq!(counts[i], count_in_threshold_nullable(row, 1600), "row {}", i);
        assert_eq!(mins[i], array_min_nullable(row), "row {}", i);
    }
}

// =============================================================================
// Parallel agreement
// =============================================================================

#[cfg(feature = "parallel")]
#[test]
fn parallel_columns_match_sequential() {
    use accessr::batch::{par_threshold_hard, par_threshold_soft};

    let column = random_column(50_000, 42);
    for t in [400, 800, 1000, 1600] {
        assert_eq!(par_threshold_hard(&column, t), batch_threshold_hard(&column, t));
        assert_eq!(par_threshold_soft(&column, t), batch_threshold_soft(&column, t));
    }
}

#[cfg(feature = "parallel")]
#[test]
fn parallel_rows_match_sequential() {
    use accessr::batch::{par_array_min, par_count_in_threshold};

    let rows = random_rows(5_000, 99);
    assert_eq!(par_array_min(&rows), batch_array_min(&rows));
    assert_eq!(
        par_count_in_threshold(&rows, 800),
        batch_count_in_threshold(&rows, 800)
    );
}

// =============================================================================
// Summaries
// =============================================================================

#[test]
fn summary_counts_only_valid_rows() {
    let column = vec![Some(100), None, Some(-20), Some(2_000)];
    let scores = batch_threshold_soft(&column, 400);
    let summary = BatchSummary::from_soft(&scores);

    assert_eq!(summary.rows, 4);
    assert_eq!(summary.scored, 2);
    let mean = summary.mean.unwrap();
    let expected = (threshold_soft(Some(100), 400).unwrap()
        + threshold_soft(Some(2_000), 400).unwrap())
        / 2.0;
    assert!((mean - expected).abs() < 1e-12);
    assert!((summary.coverage() - 0.5).abs() < 1e-12);
}

#[test]
fn summary_of_all_missing_column() {
    let scores = batch_threshold_hard(&[None, None, None], 400);
    let summary = BatchSummary::from_hard(&scores);
    assert_eq!(summary.scored, 0);
    assert_eq!(summary.mean, None);
    assert_eq!(summary.coverage(), 0.0);
}
