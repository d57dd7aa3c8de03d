//! Distance-to-access scoring for urban liveability indicators.
//!
//! `accessr` (from "access score") turns pre-computed pedestrian network
//! distances into the access indicators published with the national urban
//! liveability dataset:
//!
//! - **Arrays**: [`count_in_threshold`], [`array_min`] (and `_nullable` forms)
//! - **Scores**: [`threshold_hard`], [`threshold_soft`], [`LogisticScorer`]
//! - **Columns**: [`batch`] (rayon-parallel variants with feature `parallel`)
//! - **Inputs**: [`literal`] readers for array literals and JSON columns
//! - **Indicators**: [`indicator`] sets of named thresholds, loaded from TOML
//! - **Release**: [`catalogue`] of published dataset files and study regions
//!
//! Every scorer is a pure function of its arguments, so columns can be scored
//! row by row in any order or in parallel.
//!
//! # Missing Data
//!
//! Distances are `Option<i32>` metres. `None` means no destination was found
//! (or no estimate exists) and propagates to a `None` score, keeping "no data"
//! distinct from "no access". Negative distances are invalid and also score
//! `None`.
//!
//! | Distance | `threshold_hard` | `threshold_soft` |
//! |----------|------------------|------------------|
//! | `None` | `None` | `None` |
//! | `< 0` | `None` | `None` |
//! | `0` | `1` | `≈ 0.993` |
//! | `= t` | `0` | `0.5` |
//! | `≫ t` | `0` | `0.0` |
//!
//! # Example
//!
//! ```rust
//! use accessr::{array_min, count_in_threshold, threshold_hard, threshold_soft};
//!
//! // Distances (m) from one address to every supermarket within 3200 m
//! let supermarkets = [1480, 620, 2950];
//!
//! assert_eq!(count_in_threshold(&supermarkets, 1000), 1);
//!
//! let closest = array_min(&supermarkets);
//! assert_eq!(closest, Some(620));
//! assert_eq!(threshold_hard(closest, 1000), Some(1));
//!
//! let soft = threshold_soft(closest, 1000).unwrap();
//! assert!(soft > 0.5 && soft < 1.0);
//! ```
//!
//! # References
//!
//! - Higgs et al. (2019). "The Urban Liveability Index: developing a
//!   policy-relevant urban liveability composite measure and evaluating
//!   associations with transport mode choice"

#![warn(missing_docs)]
#![warn(clippy::all)]

mod array;
mod error;
mod threshold;

pub mod batch;
pub mod catalogue;
pub mod indicator;
pub mod literal;

pub use array::{array_min, array_min_nullable, count_in_threshold, count_in_threshold_nullable};
pub use error::{AccessError, Result};
pub use threshold::{threshold_hard, threshold_soft, LogisticScorer};

/// Slope `k` of the soft threshold logistic curve.
///
/// Fixed by the published access-scoring methodology (Higgs et al. 2019).
/// Changing it changes every soft indicator; use [`LogisticScorer`] for
/// recalibration experiments instead.
pub const SOFT_THRESHOLD_SLOPE: f64 = 5.0;

/// Exponent below which the soft score is returned as exactly `0.0`.
///
/// At `exp(-100)` the score is already below `1e-43`, so skipping `exp`
/// loses nothing and keeps results identical across platforms.
pub const UNDERFLOW_EXPONENT: f64 = -100.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_basic() {
        assert_eq!(count_in_threshold(&[100, 200, 900], 400), 2);
    }

    #[test]
    fn test_count_empty() {
        assert_eq!(count_in_threshold(&[], 400), 0);
    }

    #[test]
    fn test_min_basic() {
        assert_eq!(array_min(&[300, 150, 900]), Some(150));
    }

    #[test]
    fn test_min_empty() {
        assert_eq!(array_min(&[]), None);
    }

    #[test]
    fn test_hard_missing() {
        assert_eq!(threshold_hard(None, 400), None);
    }

    #[test]
    fn test_soft_at_threshold() {
        for t in [1, 400, 800, 1600, 3200] {
            assert!((threshold_soft(Some(t), t).unwrap() - 0.5).abs() < 1e-12);
        }
    }

    #[test]
    fn test_soft_underflow() {
        assert_eq!(threshold_soft(Some(1000), 10), Some(0.0));
    }

    #[test]
    fn test_soft_negative() {
        assert_eq!(threshold_soft(Some(-1), 100), None);
    }
}
