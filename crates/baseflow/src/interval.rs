//! HYSEP interval heuristic.

use crate::error::BaseflowError;

/// km² to mi² conversion used by the empirical interval formula.
const KM2_TO_MI2: f64 = 0.3861022;

/// Interval used when no basin area is supplied.
pub const DEFAULT_INTERVAL: usize = 5;

/// Smallest and largest interval the heuristic returns.
const MIN_INTERVAL: usize = 3;
const MAX_INTERVAL: usize = 11;

/// Returns the odd window width N' for the interval-based methods.
///
/// With no area the width is [`DEFAULT_INTERVAL`]. Otherwise
/// `N = (0.3861022 · area)^0.2` (area in km², converted to mi²), `2N` is
/// rounded up, an even result is reduced by one, and the value is clamped
/// to `[3, 11]`.
///
/// Callers are expected to pass a positive area; see
/// [`checked_hysep_interval`] for the validating form.
pub fn hysep_interval(area: Option<f64>) -> usize {
    let Some(area) = area else {
        return DEFAULT_INTERVAL;
    };
    let n = (KM2_TO_MI2 * area).powf(0.2);
    let mut width = (2.0 * n).ceil();
    if width % 2.0 == 0.0 {
        width -= 1.0;
    }
    if width.is_nan() {
        return MIN_INTERVAL;
    }
    width.clamp(MIN_INTERVAL as f64, MAX_INTERVAL as f64) as usize
}

/// Like [`hysep_interval`], but rejects non-positive or non-finite areas.
pub fn checked_hysep_interval(area: Option<f64>) -> Result<usize, BaseflowError> {
    if let Some(a) = area
        && (!a.is_finite() || a <= 0.0)
    {
        return Err(BaseflowError::InvalidArea { area: a });
    }
    Ok(hysep_interval(area))
}

/// Rejects a window width that is zero or even.
pub(crate) fn check_width(width: usize) -> Result<(), BaseflowError> {
    if width % 2 == 0 {
        return Err(BaseflowError::InvalidWidth { width });
    }
    Ok(())
}
