//! Length-window scoring primitive

/// Scores a measured length against a target window with linear falloff
///
/// Returns 1.0 when `min <= len <= max`. Below the window the score is
/// `len / min`, shrinking towards 0 as the length shrinks. Above the window
/// the score is `2 - len / max`, shrinking towards 0 as the length grows,
/// floored at 0. The result is always within [0, 1].
///
/// # Examples
///
/// ```
/// use seogate::audit::score_range;
///
/// assert_eq!(score_range(15, 60, 30), 1.0);
/// assert_eq!(score_range(15, 60, 0), 0.0);
/// assert!(score_range(15, 60, 10) < 1.0);
/// ```
pub fn score_range(min: usize, max: usize, len: usize) -> f64 {
    if len >= min && len <= max {
        1.0
    } else if len < min {
        len as f64 / min as f64
    } else {
        (2.0 - len as f64 / max as f64).max(0.0)
    }
}
