//! Readers for published destination-distance columns.
//!
//! The distance-array dataset stores each destination array as a Postgres
//! array literal:
//!
//! ```text
//! {312,877,NULL,1460}
//! ```
//!
//! The open-space linkage dataset stores a JSON list per address point:
//!
//! ```text
//! [{"aos_id": 10342, "distance": 212}, {"aos_id": 10398, "distance": 1044}]
//! ```
//!
//! Both decode to `Vec<Option<i32>>` for use with the `_nullable` reductions.

use serde::{Deserialize, Serialize};

use crate::error::{AccessError, Result};

/// Parse a one-dimensional Postgres integer array literal.
///
/// - Surrounding whitespace is ignored, as is whitespace around elements.
/// - `{}` is an empty array.
/// - `NULL` (any case) is an absent entry.
///
/// # Errors
///
/// [`AccessError::MissingBraces`] if the literal is not wrapped in `{ }`;
/// [`AccessError::InvalidElement`] for an element that is neither an `i32`
/// nor `NULL` (including empty elements such as `{1,,2}`).
///
/// # Example
///
/// ```rust
/// use accessr::literal::parse_pg_array;
///
/// let arr = parse_pg_array("{120,NULL,455}").unwrap();
/// assert_eq!(arr, vec![Some(120), None, Some(455)]);
/// ```
pub fn parse_pg_array(input: &str) -> Result<Vec<Option<i32>>> {
    let body = input
        .trim()
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
        .ok_or_else(|| {
            tracing::debug!(input, "array literal without braces");
            AccessError::MissingBraces {
                input: input.to_owned(),
            }
        })?;

    if body.trim().is_empty() {
        return Ok(Vec::new());
    }

    body.split(',')
        .enumerate()
        .map(|(index, raw)| parse_element(index, raw.trim()))
        .collect()
}

fn parse_element(index: usize, token: &str) -> Result<Option<i32>> {
    if token.eq_ignore_ascii_case("null") {
        return Ok(None);
    }
    token.parse::<i32>().map(Some).map_err(|_| {
        tracing::debug!(index, token, "unparseable array element");
        AccessError::InvalidElement {
            index,
            token: token.to_owned(),
        }
    })
}

/// Parse a JSON array of integer distances, where `null` is an absent entry.
///
/// ```rust
/// use accessr::literal::parse_json_distances;
///
/// let arr = parse_json_distances("[640, null, 95]").unwrap();
/// assert_eq!(arr, vec![Some(640), None, Some(95)]);
/// ```
pub fn parse_json_distances(input: &str) -> Result<Vec<Option<i32>>> {
    Ok(serde_json::from_str(input)?)
}

/// Distance from an address point to one area of open space.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AosDistance {
    /// Open space identifier.
    pub aos_id: i64,
    /// Network distance in metres; absent when not recorded.
    pub distance: Option<i32>,
}

impl AosDistance {
    /// Project a list of open-space links to its distance array.
    pub fn distances(links: &[AosDistance]) -> Vec<Option<i32>> {
        links.iter().map(|l| l.distance).collect()
    }
}

/// Parse a JSON list of open-space identifiers and distances.
///
/// ```rust
/// use accessr::literal::{parse_aos_distances, AosDistance};
///
/// let links = parse_aos_distances(r#"[{"aos_id": 7, "distance": 212}]"#).unwrap();
/// assert_eq!(AosDistance::distances(&links), vec![Some(212)]);
/// ```
pub fn parse_aos_distances(input: &str) -> Result<Vec<AosDistance>> {
    Ok(serde_json::from_str(input)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_literal() {
        assert!(parse_pg_array("{}").unwrap().is_empty());
        assert!(parse_pg_array("  { }  ").unwrap().is_empty());
    }

    #[test]
    fn whitespace_and_case() {
        let arr = parse_pg_array(" { 10 , null ,  NuLl,20 } ").unwrap();
        assert_eq!(arr, vec![Some(10), None, None, Some(20)]);
    }

    #[test]
    fn negative_values_parse() {
        // Validity is the scorers' concern, not the reader's.
        assert_eq!(parse_pg_array("{-1}").unwrap(), vec![Some(-1)]);
    }

    #[test]
    fn missing_braces() {
        let err = parse_pg_array("1,2,3").unwrap_err();
        assert!(matches!(err, AccessError::MissingBraces { .. }));
        assert!(parse_pg_array("{1,2").is_err());
    }

    #[test]
    fn invalid_element_reports_index() {
        match parse_pg_array("{1,abc,3}").unwrap_err() {
            AccessError::InvalidElement { index, token } => {
                assert_eq!(index, 1);
                assert_eq!(token, "abc");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_element_is_invalid() {
        assert!(matches!(
            parse_pg_array("{1,,2}").unwrap_err(),
            AccessError::InvalidElement { index: 1, .. }
        ));
    }

    #[test]
    fn overflowing_element_is_invalid() {
        assert!(parse_pg_array("{99999999999}").is_err());
    }

    #[test]
    fn json_rejects_non_integers() {
        assert!(matches!(
            parse_json_distances("[1.5]").unwrap_err(),
            AccessError::Json(_)
        ));
    }

    #[test]
    fn aos_missing_distance_is_absent() {
        let links =
            parse_aos_distances(r#"[{"aos_id": 1, "distance": null}, {"aos_id": 2, "distance": 80}]"#)
                .unwrap();
        assert_eq!(AosDistance::distances(&links), vec![None, Some(80)]);
    }
}
