//! HYSEP fixed- and sliding-interval separation.

use crate::error::BaseflowError;
use crate::interval::{check_width, checked_hysep_interval};
use crate::series::Discharge;

fn slice_min(q: &[f64]) -> f64 {
    q.iter().copied().fold(f64::INFINITY, f64::min)
}

/// Fixed-interval separation with an explicit window width.
///
/// Consecutive blocks of `width` samples (the last one possibly shorter)
/// are each set to their own minimum.
///
/// # Errors
///
/// Returns [`BaseflowError::InvalidWidth`] if `width` is zero or even.
pub fn fixed_interval_with_width(q: &[f64], width: usize) -> Result<Vec<f64>, BaseflowError> {
    check_width(width)?;
    let mut b = Vec::with_capacity(q.len());
    for block in q.chunks(width) {
        let m = slice_min(block);
        b.extend(std::iter::repeat_n(m, block.len()));
    }
    Ok(b)
}

/// Sliding-interval separation with an explicit odd window width.
///
/// Interior samples take the minimum of the centred window `[i-h, i+h]`.
/// The first `h` samples share the minimum of `Q[..h]`, the last `h` the
/// minimum of `Q[n-h..]`. On records shorter than the window the edge
/// ranges are clamped to the record and the trailing edge wins.
///
/// # Errors
///
/// Returns [`BaseflowError::InvalidWidth`] if `width` is zero or even.
pub fn sliding_interval_with_width(q: &[f64], width: usize) -> Result<Vec<f64>, BaseflowError> {
    check_width(width)?;
    let n = q.len();
    let h = (width - 1) / 2;
    let mut b = vec![0.0; n];

    if n > 2 * h {
        for i in h..n - h {
            b[i] = slice_min(&q[i - h..=i + h]);
        }
    }

    let head = h.min(n);
    let head_min = slice_min(&q[..head]);
    b[..head].fill(head_min);

    let tail = n.saturating_sub(h);
    let tail_min = slice_min(&q[tail..]);
    b[tail..].fill(tail_min);

    Ok(b)
}

/// HYSEP fixed-interval separation.
///
/// The window width comes from the basin area via the HYSEP interval
/// heuristic (5 when no area is given).
///
/// # Errors
///
/// Returns [`BaseflowError::InvalidArea`] for a non-positive or non-finite area.
pub fn fixed_interval(q: &Discharge, area: Option<f64>) -> Result<Vec<f64>, BaseflowError> {
    let width = checked_hysep_interval(area)?;
    fixed_interval_with_width(q.as_slice(), width)
}

/// HYSEP sliding-interval separation.
///
/// # Errors
///
/// Returns [`BaseflowError::InvalidArea`] for a non-positive or non-finite area.
pub fn sliding_interval(q: &Discharge, area: Option<f64>) -> Result<Vec<f64>, BaseflowError> {
    let width = checked_hysep_interval(area)?;
    sliding_interval_with_width(q.as_slice(), width)
}
