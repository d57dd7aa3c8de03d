//! Destination-array reductions: threshold counts and the closest distance.
//!
//! A destination array holds, for one location, the network distance to every
//! candidate destination of one category (e.g. every supermarket within
//! 3200 m). Two encodings are supported:
//!
//! | Input | Absence | Used for |
//! |-------|---------|----------|
//! | `&[i32]` | none; every entry is present | arrays already filtered upstream |
//! | `&[Option<i32>]` | `None` entries are skipped | parsed literals containing `NULL` |
//!
//! Absence is never encoded as a magic number. An absent entry does not count
//! towards a threshold and does not take part in the minimum, which is how the
//! SQL aggregates (`count(*) ... WHERE d < t`, `min(d)`) treat `NULL`.

/// Count of distances strictly below `threshold`.
///
/// Returns 0 for an empty array.
///
/// # Example
///
/// ```rust
/// use accessr::count_in_threshold;
///
/// assert_eq!(count_in_threshold(&[100, 200, 900], 400), 2);
/// assert_eq!(count_in_threshold(&[], 400), 0);
/// ```
#[inline]
#[must_use]
pub fn count_in_threshold(distances: &[i32], threshold: i32) -> usize {
    distances.iter().filter(|&&d| d < threshold).count()
}

/// Smallest distance in the array, or `None` if it is empty.
///
/// # Example
///
/// ```rust
/// use accessr::array_min;
///
/// assert_eq!(array_min(&[300, 150, 900]), Some(150));
/// assert_eq!(array_min(&[]), None);
/// ```
#[inline]
#[must_use]
pub fn array_min(distances: &[i32]) -> Option<i32> {
    distances.iter().copied().min()
}

/// [`count_in_threshold`] over an array that may contain absent entries.
///
/// Absent entries never count.
#[inline]
#[must_use]
pub fn count_in_threshold_nullable(distances: &[Option<i32>], threshold: i32) -> usize {
    distances
        .iter()
        .flatten()
        .filter(|&&d| d < threshold)
        .count()
}

/// [`array_min`] over present entries only.
///
/// Returns `None` when the array is empty or every entry is absent.
///
/// ```rust
/// use accessr::array_min_nullable;
///
/// assert_eq!(array_min_nullable(&[None, Some(640), Some(210)]), Some(210));
/// assert_eq!(array_min_nullable(&[None, None]), None);
/// ```
#[inline]
#[must_use]
pub fn array_min_nullable(distances: &[Option<i32>]) -> Option<i32> {
    distances.iter().flatten().copied().min()
}
