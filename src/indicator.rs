//! Named indicator sets: which thresholds get applied to a distance column.
//!
//! Published liveability indicators pair a destination type with one or more
//! policy thresholds (e.g. "supermarket within 1000 m") and report both a hard
//! and a soft score. An [`IndicatorSet`] holds those definitions and applies
//! them to a distance or a destination array.
//!
//! Sets are usually read from TOML:
//!
//! ```toml
//! [[indicator]]
//! name = "supermarket_1000m_hard"
//! threshold_m = 1000
//! kind = "hard"
//!
//! [[indicator]]
//! name = "supermarket_1000m_soft"
//! threshold_m = 1000
//! kind = "soft"
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::array::array_min_nullable;
use crate::error::{AccessError, Result};
use crate::threshold::{threshold_hard, threshold_soft};

/// Thresholds (metres) used throughout the published indicators.
pub const STANDARD_THRESHOLDS_M: [i32; 4] = [400, 800, 1000, 1600];

/// Scoring rule for an indicator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreKind {
    /// Binary step at the threshold.
    Hard,
    /// Logistic decay centred at the threshold.
    Soft,
}

/// One named threshold indicator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorSpec {
    /// Column name for the resulting score.
    pub name: String,
    /// Threshold distance in metres.
    pub threshold_m: i32,
    /// Hard or soft scoring.
    pub kind: ScoreKind,
}

impl IndicatorSpec {
    /// Score a single distance. Hard scores are reported as `0.0` or `1.0`.
    #[must_use]
    pub fn score(&self, distance: Option<i32>) -> Option<f64> {
        match self.kind {
            ScoreKind::Hard => threshold_hard(distance, self.threshold_m).map(f64::from),
            ScoreKind::Soft => threshold_soft(distance, self.threshold_m),
        }
    }
}

/// Result of applying one indicator.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct IndicatorScore {
    /// Indicator name.
    pub name: String,
    /// Score, or `None` when the distance was missing or invalid.
    pub score: Option<f64>,
}

/// An ordered collection of uniquely named indicators.
///
/// Deserializing goes through [`IndicatorSet::new`], so every set obtained
/// from serde has positive thresholds and unique names.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawIndicatorSet")]
pub struct IndicatorSet {
    #[serde(rename = "indicator")]
    indicators: Vec<IndicatorSpec>,
}

// Unvalidated wire form of `IndicatorSet`.
#[derive(Deserialize)]
struct RawIndicatorSet {
    #[serde(rename = "indicator", default)]
    indicators: Vec<IndicatorSpec>,
}

impl TryFrom<RawIndicatorSet> for IndicatorSet {
    type Error = AccessError;

    fn try_from(raw: RawIndicatorSet) -> Result<Self> {
        Self::new(raw.indicators)
    }
}

impl IndicatorSet {
    /// Build a set, validating names and thresholds.
    ///
    /// # Errors
    ///
    /// [`AccessError::InvalidThreshold`] for a threshold `<= 0`;
    /// [`AccessError::DuplicateIndicator`] if two indicators share a name.
    pub fn new(indicators: Vec<IndicatorSpec>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(indicators.len());
        for spec in &indicators {
            if spec.threshold_m <= 0 {
                return Err(AccessError::InvalidThreshold {
                    name: spec.name.clone(),
                    threshold_m: spec.threshold_m,
                });
            }
            if !seen.insert(spec.name.as_str()) {
                return Err(AccessError::DuplicateIndicator {
                    name: spec.name.clone(),
                });
            }
        }
        Ok(Self { indicators })
    }

    /// Parse and validate a TOML indicator set.
    ///
    /// Validation failures keep their own variants rather than surfacing as
    /// [`AccessError::Config`].
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let raw: RawIndicatorSet = toml::from_str(input)?;
        let set = Self::try_from(raw)?;
        tracing::debug!(indicators = set.len(), "loaded indicator set");
        Ok(set)
    }

    /// Hard and soft indicators at every standard threshold, named with `prefix`.
    ///
    /// ```rust
    /// use accessr::indicator::IndicatorSet;
    ///
    /// let set = IndicatorSet::standard("supermarket");
    /// assert_eq!(set.len(), 8);
    /// assert_eq!(set.indicators()[0].name, "supermarket_400m_hard");
    /// ```
    pub fn standard(prefix: &str) -> Self {
        let indicators = STANDARD_THRESHOLDS_M
            .iter()
            .flat_map(|&t| {
                [ScoreKind::Hard, ScoreKind::Soft].map(|kind| IndicatorSpec {
                    name: format!("{prefix}_{t}m_{}", kind_suffix(kind)),
                    threshold_m: t,
                    kind,
                })
            })
            .collect();
        Self { indicators }
    }

    /// Indicators in definition order.
    pub fn indicators(&self) -> &[IndicatorSpec] {
        &self.indicators
    }

    /// Number of indicators.
    pub fn len(&self) -> usize {
        self.indicators.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.indicators.is_empty()
    }

    /// Look up an indicator by name.
    pub fn get(&self, name: &str) -> Option<&IndicatorSpec> {
        self.indicators.iter().find(|s| s.name == name)
    }

    /// Score one distance against every indicator.
    pub fn evaluate(&self, distance: Option<i32>) -> Vec<IndicatorScore> {
        self.indicators
            .iter()
            .map(|spec| IndicatorScore {
                name: spec.name.clone(),
                score: spec.score(distance),
            })
            .collect()
    }

    /// Score the closest present destination in an array against every indicator.
    pub fn evaluate_array(&self, distances: &[Option<i32>]) -> Vec<IndicatorScore> {
        self.evaluate(array_min_nullable(distances))
    }
}

impl Default for IndicatorSet {
    fn default() -> Self {
        Self::standard("access")
    }
}

fn kind_suffix(kind: ScoreKind) -> &'static str {
    match kind {
        ScoreKind::Hard => "hard",
        ScoreKind::Soft => "soft",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_set_is_valid() {
        let set = IndicatorSet::default();
        assert_eq!(IndicatorSet::new(set.indicators().to_vec()).unwrap(), set);
    }

    #[test]
    fn rejects_zero_threshold() {
        let err = IndicatorSet::new(vec![IndicatorSpec {
            name: "bad".into(),
            threshold_m: 0,
            kind: ScoreKind::Soft,
        }])
        .unwrap_err();
        assert!(matches!(err, AccessError::InvalidThreshold { threshold_m: 0, .. }));
    }

    #[test]
    fn rejects_duplicate_names() {
        let spec = IndicatorSpec {
            name: "pt_400m".into(),
            threshold_m: 400,
            kind: ScoreKind::Hard,
        };
        let err = IndicatorSet::new(vec![spec.clone(), spec]).unwrap_err();
        assert!(matches!(err, AccessError::DuplicateIndicator { .. }));
    }

    #[test]
    fn hard_scores_are_zero_or_one() {
        let set = IndicatorSet::standard("x");
        for score in set.evaluate(Some(900)) {
            let spec = set.get(&score.name).unwrap();
            if spec.kind == ScoreKind::Hard {
                let s = score.score.unwrap();
                assert!(s == 0.0 || s == 1.0);
            }
        }
    }

    #[test]
    fn serde_deserialize_validates() {
        let bad = r#"
[[indicator]]
name = "x"
threshold_m = 0
kind = "hard"

[[indicator]]
name = "x"
threshold_m = 400
kind = "soft"
"#;
        let err = toml::from_str::<IndicatorSet>(bad).unwrap_err();
        assert!(err.to_string().contains("non-positive threshold"), "{err}");

        let dup = r#"{"indicator": [
            {"name": "x", "threshold_m": 400, "kind": "hard"},
            {"name": "x", "threshold_m": 800, "kind": "soft"}
        ]}"#;
        let err = serde_json::from_str::<IndicatorSet>(dup).unwrap_err();
        assert!(err.to_string().contains("defined more than once"), "{err}");
    }

    #[test]
    fn serde_round_trip_keeps_valid_set() {
        let set = IndicatorSet::standard("bus");
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(serde_json::from_str::<IndicatorSet>(&json).unwrap(), set);
    }

    #[test]
    fn empty_toml_is_empty_set() {
        let set = IndicatorSet::from_toml_str("").unwrap();
        assert!(set.is_empty());
    }
}
