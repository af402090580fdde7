//! Memoized Lyne-Hollick series shared by dependent methods.

use std::sync::OnceLock;

use tracing::trace;

use crate::error::BaseflowError;
use crate::filters::lyne_hollick;
use crate::series::Discharge;

/// One Lyne-Hollick result per discharge record.
///
/// UKIH and local-minimum separation fill their edges from Lyne-Hollick.
/// The cache borrows the record it was built for, so it cannot be reused
/// against a different series, and computes the filter at most once even
/// when dependents run on several threads.
///
/// # Example
///
/// ```
/// use hydrosep_baseflow::{Discharge, LyneHollickCache, ukih};
///
/// let q = Discharge::new(vec![4.0; 20]).unwrap();
/// let cache = LyneHollickCache::new(&q, 0.925);
/// let b = ukih(&q, cache.get()).unwrap();
/// assert_eq!(b.len(), q.len());
/// ```
#[derive(Debug)]
pub struct LyneHollickCache<'a> {
    discharge: &'a Discharge,
    beta: f64,
    series: OnceLock<Vec<f64>>,
}

impl<'a> LyneHollickCache<'a> {
    /// Creates an empty cache for `discharge`; nothing is computed yet.
    pub fn new(discharge: &'a Discharge, beta: f64) -> Self {
        Self {
            discharge,
            beta,
            series: OnceLock::new(),
        }
    }

    /// Creates a cache pre-filled with a series computed elsewhere.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`BaseflowError::LengthMismatch`] | `series` and discharge differ in length |
    /// | [`BaseflowError::ExceedsDischarge`] | a sample is NaN or above the discharge at its position |
    pub fn with_precomputed(
        discharge: &'a Discharge,
        beta: f64,
        series: Vec<f64>,
    ) -> Result<Self, BaseflowError> {
        discharge.check_len(&series)?;
        for (index, (&value, &q)) in series.iter().zip(discharge.as_slice()).enumerate() {
            if value.is_nan() || value > q {
                return Err(BaseflowError::ExceedsDischarge {
                    index,
                    value,
                    discharge: q,
                });
            }
        }
        Ok(Self {
            discharge,
            beta,
            series: OnceLock::from(series),
        })
    }

    /// Returns the Lyne-Hollick series, computing it on first use.
    pub fn get(&self) -> &[f64] {
        self.series.get_or_init(|| {
            trace!(n = self.discharge.len(), beta = self.beta, "computing lyne-hollick");
            lyne_hollick(self.discharge, self.beta)
        })
    }

    /// Returns `true` once the series has been computed or supplied.
    pub fn is_computed(&self) -> bool {
        self.series.get().is_some()
    }

    /// The record this cache belongs to.
    pub fn discharge(&self) -> &'a Discharge {
        self.discharge
    }

    /// Returns `true` if this cache was built for `q`.
    ///
    /// The same borrow matches without a scan; otherwise the samples are
    /// compared.
    pub fn belongs_to(&self, q: &Discharge) -> bool {
        std::ptr::eq(self.discharge, q) || self.discharge == q
    }

    /// β used for the filter.
    pub fn beta(&self) -> f64 {
        self.beta
    }
}
