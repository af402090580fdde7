//! Validated discharge series.

use crate::error::BaseflowError;

/// A validated discharge series.
///
/// Wraps a `Vec<f64>` and guarantees:
/// - length >= 1
/// - all values are finite and non-negative
///
/// Samples are positional; the engine assumes equal spacing and never
/// looks at timestamps.
///
/// # Example
///
/// ```
/// use hydrosep_baseflow::Discharge;
///
/// let q = Discharge::new(vec![10.0, 8.0, 6.0]).unwrap();
/// assert_eq!(q.len(), 3);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Discharge {
    data: Vec<f64>,
}

impl Discharge {
    /// Creates a new `Discharge` after validating the data.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`BaseflowError::EmptySeries`] | `data.is_empty()` |
    /// | [`BaseflowError::NonFiniteDischarge`] | any element is NaN or infinite |
    /// | [`BaseflowError::NegativeDischarge`] | any element is below zero |
    pub fn new(data: Vec<f64>) -> Result<Self, BaseflowError> {
        if data.is_empty() {
            return Err(BaseflowError::EmptySeries);
        }
        for (index, &value) in data.iter().enumerate() {
            if !value.is_finite() {
                return Err(BaseflowError::NonFiniteDischarge { index });
            }
            if value < 0.0 {
                return Err(BaseflowError::NegativeDischarge { index, value });
            }
        }
        Ok(Self { data })
    }

    /// Returns the samples as a slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Returns the number of samples.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the series is empty.
    ///
    /// Note: a valid `Discharge` is never empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Sum of all samples.
    pub fn total(&self) -> f64 {
        self.data.iter().sum()
    }

    /// Consumes self and returns the sample vector.
    pub fn into_inner(self) -> Vec<f64> {
        self.data
    }

    /// Checks that a companion series has the same length as this one.
    pub(crate) fn check_len(&self, other: &[f64]) -> Result<(), BaseflowError> {
        if other.len() != self.data.len() {
            return Err(BaseflowError::LengthMismatch {
                expected: self.data.len(),
                got: other.len(),
            });
        }
        Ok(())
    }
}

impl AsRef<[f64]> for Discharge {
    fn as_ref(&self) -> &[f64] {
        &self.data
    }
}

impl TryFrom<Vec<f64>> for Discharge {
    type Error = BaseflowError;

    fn try_from(data: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_valid_series() {
        let q = Discharge::new(vec![1.0, 0.0, 3.0]).unwrap();
        assert_eq!(q.len(), 3);
        assert!(!q.is_empty());
        assert_eq!(q.as_slice(), &[1.0, 0.0, 3.0]);
    }

    #[test]
    fn new_single_sample() {
        let q = Discharge::new(vec![4.2]).unwrap();
        assert_eq!(q.len(), 1);
    }

    #[test]
    fn new_empty_rejected() {
        assert_eq!(Discharge::new(vec![]), Err(BaseflowError::EmptySeries));
    }

    #[test]
    fn new_nan_rejected() {
        let err = Discharge::new(vec![1.0, f64::NAN]).unwrap_err();
        assert_eq!(err, BaseflowError::NonFiniteDischarge { index: 1 });
    }

    #[test]
    fn new_infinity_rejected() {
        let err = Discharge::new(vec![f64::INFINITY, 1.0]).unwrap_err();
        assert_eq!(err, BaseflowError::NonFiniteDischarge { index: 0 });
    }

    #[test]
    fn new_negative_rejected() {
        let err = Discharge::new(vec![1.0, 2.0, -0.5]).unwrap_err();
        assert_eq!(
            err,
            BaseflowError::NegativeDischarge {
                index: 2,
                value: -0.5
            }
        );
    }

    #[test]
    fn total_sums_samples() {
        let q = Discharge::new(vec![1.0, 2.0, 3.5]).unwrap();
        assert_eq!(q.total(), 6.5);
    }

    #[test]
    fn check_len_detects_mismatch() {
        let q = Discharge::new(vec![1.0, 2.0]).unwrap();
        assert!(q.check_len(&[0.0, 0.0]).is_ok());
        assert_eq!(
            q.check_len(&[0.0]),
            Err(BaseflowError::LengthMismatch {
                expected: 2,
                got: 1
            })
        );
    }

    #[test]
    fn try_from_vec() {
        let q: Discharge = vec![5.0, 6.0].try_into().unwrap();
        assert_eq!(q.into_inner(), vec![5.0, 6.0]);
    }
}
