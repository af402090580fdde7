//! Turning-point separation: UKIH and local minimum.
//!
//! Both methods pick a set of anchor indices, draw straight lines between
//! them, and fill the stretches before the first and after the last anchor
//! from a Lyne-Hollick series. With fewer than [`MIN_TURNING_POINTS`]
//! anchors the result is all zeros, which callers should read as "method
//! not applicable to this record".

use tracing::debug;

use crate::error::BaseflowError;
use crate::filters::clip;
use crate::interval::{check_width, checked_hysep_interval};
use crate::series::Discharge;

/// Block width used by the UKIH method.
pub const UKIH_BLOCK: usize = 5;

/// Fewer anchors than this yields an all-zero series.
pub const MIN_TURNING_POINTS: usize = 3;

/// UKIH turning-point factor.
const UKIH_FACTOR: f64 = 0.9;

/// Index of the first minimum in `q[start..start + len]`.
fn block_min_index(q: &[f64], start: usize, len: usize) -> usize {
    let mut idx = start;
    for j in start + 1..start + len {
        if q[j] < q[idx] {
            idx = j;
        }
    }
    idx
}

/// UKIH turning points.
///
/// The record is cut into blocks of [`UKIH_BLOCK`] samples (a trailing
/// partial block is ignored). Block minimum `m[i+1]` is a turning point
/// when `0.9·Q[m[i+1]]` is below both neighbouring block minima.
pub fn ukih_turning_points(q: &[f64]) -> Vec<usize> {
    let minima: Vec<usize> = (0..q.len() / UKIH_BLOCK)
        .map(|k| block_min_index(q, k * UKIH_BLOCK, UKIH_BLOCK))
        .collect();

    minima
        .windows(3)
        .filter(|m| {
            let centre = UKIH_FACTOR * q[m[1]];
            centre < q[m[0]] && centre < q[m[2]]
        })
        .map(|m| m[1])
        .collect()
}

/// Local-minimum turning points for an odd window `width`.
///
/// Index `i` with a full window `[i-h, i+h]` inside the record is a turning
/// point when no sample in that window is strictly below `Q[i]`. Ties count
/// as minima, so a flat stretch produces consecutive turning points.
///
/// # Errors
///
/// Returns [`BaseflowError::InvalidWidth`] if `width` is zero or even.
pub fn local_minimum_turning_points(q: &[f64], width: usize) -> Result<Vec<usize>, BaseflowError> {
    check_width(width)?;
    let h = (width - 1) / 2;
    if q.len() <= 2 * h {
        return Ok(Vec::new());
    }
    Ok((h..q.len() - h)
        .filter(|&i| q[i - h..=i + h].iter().all(|&v| v >= q[i]))
        .collect())
}

/// Linear interpolation of discharge between consecutive turning points.
///
/// Covers indices `turns[0]..=turns[last]`; everything outside that range is
/// left at zero. At a turning point the value equals `Q`; every value is
/// clipped to the discharge at its position.
///
/// `turns` must be strictly increasing and inside `q`. An empty `turns`
/// yields all zeros.
pub fn linear_interpolation(q: &[f64], turns: &[usize]) -> Vec<f64> {
    debug_assert!(turns.windows(2).all(|w| w[0] < w[1]));

    let mut b = vec![0.0; q.len()];
    let Some(&last) = turns.last() else {
        return b;
    };
    for seg in turns.windows(2) {
        let (t0, t1) = (seg[0], seg[1]);
        let slope = (q[t1] - q[t0]) / (t1 - t0) as f64;
        for (i, bi) in b.iter_mut().enumerate().take(t1).skip(t0) {
            *bi = clip(q[t0] + slope * (i - t0) as f64, q[i]);
        }
    }
    b[last] = q[last];
    b
}

/// Interpolates between `turns` and fills both ends from `lh`.
fn interpolate_with_fill(q: &[f64], lh: &[f64], turns: &[usize]) -> Vec<f64> {
    let mut b = linear_interpolation(q, turns);
    let first = turns[0];
    let last = turns[turns.len() - 1];
    b[..first].copy_from_slice(&lh[..first]);
    b[last + 1..].copy_from_slice(&lh[last + 1..]);
    b
}

/// Shared tail of the turning-point methods.
fn from_turning_points(method: &str, q: &[f64], lh: &[f64], turns: &[usize]) -> Vec<f64> {
    if turns.len() < MIN_TURNING_POINTS {
        debug!(
            method,
            n_turning_points = turns.len(),
            "too few turning points, returning zero baseflow"
        );
        return vec![0.0; q.len()];
    }
    interpolate_with_fill(q, lh, turns)
}

/// UKIH (Institute of Hydrology, 1980) smoothed-minima separation.
///
/// `lh` is the Lyne-Hollick series for the same record, used for the
/// stretches outside the first and last turning point.
///
/// # Errors
///
/// Returns [`BaseflowError::LengthMismatch`] if `lh` and `q` differ in length.
pub fn ukih(q: &Discharge, lh: &[f64]) -> Result<Vec<f64>, BaseflowError> {
    q.check_len(lh)?;
    let turns = ukih_turning_points(q.as_slice());
    Ok(from_turning_points("ukih", q.as_slice(), lh, &turns))
}

/// HYSEP local-minimum separation.
///
/// The window width comes from [`checked_hysep_interval`].
///
/// # Errors
///
/// Returns [`BaseflowError::LengthMismatch`] if `lh` and `q` differ in
/// length, or [`BaseflowError::InvalidArea`] for a non-positive area.
pub fn local_minimum(
    q: &Discharge,
    lh: &[f64],
    area: Option<f64>,
) -> Result<Vec<f64>, BaseflowError> {
    q.check_len(lh)?;
    let width = checked_hysep_interval(area)?;
    let turns = local_minimum_turning_points(q.as_slice(), width)?;
    Ok(from_turning_points("local_minimum", q.as_slice(), lh, &turns))
}
