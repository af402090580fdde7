//! Recursive digital filters.
//!
//! Every filter seeds `b[0] = Q[0]` and steps forward with a weighted
//! combination of the previous baseflow sample and the neighbouring
//! discharge samples. The result is clipped to the discharge after every
//! step, so `b[i] <= Q[i]` holds throughout.
//!
//! | Filter | Step `b[i+1]` |
//! |--------|---------------|
//! | Lyne-Hollick | `β·b[i] + (1-β)/2·(Q[i]+Q[i+1])`, then a backward pass |
//! | Chapman | `(3α-1)/(3-α)·b[i] + (1-α)/(3-α)·(Q[i+1]+Q[i])` |
//! | Chapman-Maxwell | `α/(2-α)·b[i] + (1-α)/(2-α)·Q[i+1]` |
//! | Boughton | `α/(1+C)·b[i] + C/(1+C)·Q[i+1]` |
//! | Furey | `(α-A(1-α))·b[i] + A(1-α)·Q[i]` |
//! | Eckhardt | `((1-BFImax)·α·b[i] + (1-α)·BFImax·Q[i+1]) / (1-α·BFImax)` |
//! | EWMA | `(1-e)·b[i] + e·Q[i+1]` |
//! | Willems | `(α-v)/(1+v)·b[i] + v/(1+v)·(Q[i]+Q[i+1])`, `v = (1-w)(1-α)/(2w)` |

use crate::series::Discharge;

/// Caps `value` at `limit`. A NaN value is passed through unchanged.
#[inline]
pub(crate) fn clip(value: f64, limit: f64) -> f64 {
    if value > limit { limit } else { value }
}

/// Runs a single forward pass of `step(b_prev, q_prev, q_next)`.
fn recursive_pass(q: &[f64], step: impl Fn(f64, f64, f64) -> f64) -> Vec<f64> {
    let mut b = Vec::with_capacity(q.len());
    b.push(q[0]);
    for w in q.windows(2) {
        let prev = b[b.len() - 1];
        b.push(clip(step(prev, w[0], w[1]), w[1]));
    }
    b
}

/// Forward half of the Lyne-Hollick filter.
pub(crate) fn lyne_hollick_forward(q: &[f64], beta: f64) -> Vec<f64> {
    let half = (1.0 - beta) / 2.0;
    recursive_pass(q, |b, q0, q1| beta * b + half * (q0 + q1))
}

/// Two-pass Lyne-Hollick filter.
///
/// The backward pass runs over the forward result `f`, averaging `f[i]`
/// and `f[i+1]`, and clips each value to `f[i]`.
pub fn lyne_hollick(q: &Discharge, beta: f64) -> Vec<f64> {
    let forward = lyne_hollick_forward(q.as_slice(), beta);
    let half = (1.0 - beta) / 2.0;
    let mut b = forward.clone();
    for i in (0..b.len().saturating_sub(1)).rev() {
        let v = beta * b[i + 1] + half * (forward[i + 1] + forward[i]);
        b[i] = clip(v, forward[i]);
    }
    b
}

/// Chapman (1991) filter.
pub fn chapman(q: &Discharge, alpha: f64) -> Vec<f64> {
    let k = (3.0 * alpha - 1.0) / (3.0 - alpha);
    let m = (1.0 - alpha) / (3.0 - alpha);
    recursive_pass(q.as_slice(), |b, q0, q1| k * b + m * (q1 + q0))
}

/// Chapman & Maxwell (1996) filter.
pub fn chapman_maxwell(q: &Discharge, alpha: f64) -> Vec<f64> {
    let k = alpha / (2.0 - alpha);
    let m = (1.0 - alpha) / (2.0 - alpha);
    recursive_pass(q.as_slice(), |b, _, q1| k * b + m * q1)
}

/// Boughton (1993) two-parameter filter.
pub fn boughton(q: &Discharge, alpha: f64, c: f64) -> Vec<f64> {
    let k = alpha / (1.0 + c);
    let m = c / (1.0 + c);
    recursive_pass(q.as_slice(), |b, _, q1| k * b + m * q1)
}

/// Furey & Gupta (2001) filter.
///
/// Unlike the rest of the family the input term is the *previous*
/// discharge sample `Q[i]`; the clip is still against `Q[i+1]`.
pub fn furey(q: &Discharge, alpha: f64, a: f64) -> Vec<f64> {
    let k = alpha - a * (1.0 - alpha);
    let m = a * (1.0 - alpha);
    recursive_pass(q.as_slice(), |b, q0, _| k * b + m * q0)
}

/// Eckhardt (2005) two-parameter filter.
pub fn eckhardt(q: &Discharge, alpha: f64, bfi_max: f64) -> Vec<f64> {
    let denom = 1.0 - alpha * bfi_max;
    recursive_pass(q.as_slice(), |b, _, q1| {
        ((1.0 - bfi_max) * alpha * b + (1.0 - alpha) * bfi_max * q1) / denom
    })
}

/// Exponentially weighted moving average filter.
pub fn ewma(q: &Discharge, e: f64) -> Vec<f64> {
    recursive_pass(q.as_slice(), |b, _, q1| (1.0 - e) * b + e * q1)
}

/// Willems (2009) filter.
pub fn willems(q: &Discharge, alpha: f64, w: f64) -> Vec<f64> {
    let v = (1.0 - w) * (1.0 - alpha) / (2.0 * w);
    let k = (alpha - v) / (1.0 + v);
    let m = v / (1.0 + v);
    recursive_pass(q.as_slice(), |b, q0, q1| k * b + m * (q0 + q1))
}
