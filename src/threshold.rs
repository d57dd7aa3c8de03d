//! Hard and soft threshold access scores.
//!
//! Both scorers take a single network distance and a policy threshold (metres)
//! and return an access score:
//!
//! | Scorer | Output | At `d = t` | Far beyond `t` |
//! |--------|--------|------------|----------------|
//! | [`threshold_hard`] | `0` or `1` | `0` | `0` |
//! | [`threshold_soft`] | `[0, 1]` | `0.5` | `0.0` |
//!
//! # Three-valued results
//!
//! A missing distance is "no data", which is not the same as "failed the
//! threshold". Both scorers therefore return `None` for a missing distance
//! rather than defaulting to 0, and also for a negative (invalid) distance.
//!
//! # Soft threshold
//!
//! ```text
//! score = 1 - 1 / (1 + exp(-k (d - t) / t))      k = 5
//! ```
//!
//! This is the logistic `sigmoid(k (t - d) / t)`, centred at the threshold.
//! The slope `k` sets how sharply access falls away around the threshold.
//!
//! # References
//!
//! - Higgs, C., Badland, H., Simons, K., Knibbs, L. D., & Giles-Corti, B. (2019).
//!   "The Urban Liveability Index: developing a policy-relevant urban liveability
//!   composite measure and evaluating associations with transport mode choice."
//!   International Journal of Health Geographics, 18(1), 14.

use crate::error::{AccessError, Result};
use crate::{SOFT_THRESHOLD_SLOPE, UNDERFLOW_EXPONENT};

/// Binary access indicator: `Some(1)` if `distance < threshold`, else `Some(0)`.
///
/// Returns `None` when the distance is missing or negative.
///
/// # Example
///
/// ```rust
/// use accessr::threshold_hard;
///
/// assert_eq!(threshold_hard(Some(350), 400), Some(1));
/// assert_eq!(threshold_hard(Some(400), 400), Some(0));
/// assert_eq!(threshold_hard(None, 400), None);
/// ```
#[inline]
#[must_use]
pub fn threshold_hard(distance: Option<i32>, threshold: i32) -> Option<u8> {
    let d = distance.filter(|&d| d >= 0)?;
    Some(u8::from(d < threshold))
}

/// Continuous access indicator using the logistic decay around `threshold`.
///
/// Uses the fixed slope [`SOFT_THRESHOLD_SLOPE`]. Returns:
///
/// - `None` if the distance is missing or negative, or the threshold is not positive
/// - exactly `0.0` once the exponent drops below [`UNDERFLOW_EXPONENT`]
///   (no `exp` evaluation happens in that case)
/// - otherwise a value in `(0, 1)`
///
/// # Example
///
/// ```rust
/// use accessr::threshold_soft;
///
/// let at_threshold = threshold_soft(Some(800), 800).unwrap();
/// assert!((at_threshold - 0.5).abs() < 1e-12);
///
/// assert_eq!(threshold_soft(Some(1000), 10), Some(0.0));
/// assert_eq!(threshold_soft(Some(-1), 100), None);
/// ```
#[inline]
#[must_use]
pub fn threshold_soft(distance: Option<i32>, threshold: i32) -> Option<f64> {
    logistic(distance, threshold, SOFT_THRESHOLD_SLOPE)
}

#[inline]
fn logistic(distance: Option<i32>, threshold: i32, slope: f64) -> Option<f64> {
    let d = distance.filter(|&d| d >= 0)?;
    if threshold <= 0 {
        return None;
    }
    let d = f64::from(d);
    let t = f64::from(threshold);
    let exponent = -slope * (d - t) / t;
    if exponent < UNDERFLOW_EXPONENT {
        return Some(0.0);
    }
    Some(1.0 - 1.0 / (1.0 + exponent.exp()))
}

/// Soft threshold scorer with a configurable slope.
///
/// The default slope is [`SOFT_THRESHOLD_SLOPE`], which makes
/// [`LogisticScorer::score`] identical to [`threshold_soft`]. Other slopes are
/// only meant for recalibration studies; published indicators use the default.
///
/// ```rust
/// use accessr::LogisticScorer;
///
/// let sharp = LogisticScorer::new(20.0).unwrap();
/// let gentle = LogisticScorer::default();
///
/// // Inside the threshold a sharper curve stays closer to full access.
/// let s = sharp.score(Some(600), 800).unwrap();
/// let g = gentle.score(Some(600), 800).unwrap();
/// assert!(s > g);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LogisticScorer {
    slope: f64,
}

impl LogisticScorer {
    /// Create a scorer, rejecting slopes that are not finite and positive.
    pub fn new(slope: f64) -> Result<Self> {
        if !slope.is_finite() || slope <= 0.0 {
            return Err(AccessError::InvalidSlope { slope });
        }
        Ok(Self { slope })
    }

    /// Logistic slope.
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Score one distance; same absence and underflow rules as [`threshold_soft`].
    #[inline]
    #[must_use]
    pub fn score(&self, distance: Option<i32>, threshold: i32) -> Option<f64> {
        logistic(distance, threshold, self.slope)
    }
}

impl Default for LogisticScorer {
    fn default() -> Self {
        Self {
            slope: SOFT_THRESHOLD_SLOPE,
        }
    }
}
