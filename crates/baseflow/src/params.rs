//! Filter coefficients for the recursive separation methods.

use crate::error::BaseflowError;

/// Default recession coefficient.
pub const DEFAULT_ALPHA: f64 = 0.925;
/// Default Lyne-Hollick filter parameter.
pub const DEFAULT_BETA: f64 = 0.925;
/// Default maximum baseflow index for the Eckhardt filter.
pub const DEFAULT_BFI_MAX: f64 = 0.8;

/// Coefficients for the recursive digital filters.
///
/// Several of these (Boughton `C`, Furey `A`, EWMA `e`) are normally fitted
/// to the record; the defaults here are fixed starting values and nothing in
/// this crate adjusts them.
///
/// # Example
///
/// ```
/// use hydrosep_baseflow::FilterParams;
///
/// let params = FilterParams::default()
///     .with_alpha(0.95)
///     .with_bfi_max(0.5);
///
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterParams {
    /// Recession coefficient used by every single-pass filter.
    alpha: f64,
    /// Lyne-Hollick filter parameter.
    beta: f64,
    /// Maximum baseflow index (Eckhardt).
    bfi_max: f64,
    /// Boughton calibration constant `C`.
    boughton_c: f64,
    /// Furey calibration constant `A`.
    furey_a: f64,
    /// EWMA smoothing factor `e`.
    ewma_e: f64,
    /// Willems weighting factor `w`.
    willems_w: f64,
}

impl Default for FilterParams {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            beta: DEFAULT_BETA,
            bfi_max: DEFAULT_BFI_MAX,
            boughton_c: 0.1,
            furey_a: 0.1,
            ewma_e: 0.05,
            willems_w: 0.5,
        }
    }
}

impl FilterParams {
    /// Sets the recession coefficient α.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the Lyne-Hollick parameter β.
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    /// Sets BFImax for the Eckhardt filter.
    pub fn with_bfi_max(mut self, bfi_max: f64) -> Self {
        self.bfi_max = bfi_max;
        self
    }

    /// Sets the Boughton constant `C`.
    pub fn with_boughton_c(mut self, c: f64) -> Self {
        self.boughton_c = c;
        self
    }

    /// Sets the Furey constant `A`.
    pub fn with_furey_a(mut self, a: f64) -> Self {
        self.furey_a = a;
        self
    }

    /// Sets the EWMA smoothing factor `e`.
    pub fn with_ewma_e(mut self, e: f64) -> Self {
        self.ewma_e = e;
        self
    }

    /// Sets the Willems weighting factor `w`.
    pub fn with_willems_w(mut self, w: f64) -> Self {
        self.willems_w = w;
        self
    }

    /// Returns α.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Returns β.
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Returns BFImax.
    pub fn bfi_max(&self) -> f64 {
        self.bfi_max
    }

    /// Returns the Boughton constant.
    pub fn boughton_c(&self) -> f64 {
        self.boughton_c
    }

    /// Returns the Furey constant.
    pub fn furey_a(&self) -> f64 {
        self.furey_a
    }

    /// Returns the EWMA smoothing factor.
    pub fn ewma_e(&self) -> f64 {
        self.ewma_e
    }

    /// Returns the Willems weighting factor.
    pub fn willems_w(&self) -> f64 {
        self.willems_w
    }

    /// Validates parameter ranges.
    ///
    /// The filter functions themselves do not guard against degenerate
    /// coefficients; a zero denominator there turns into non-finite output.
    ///
    /// | Parameter | Accepted |
    /// |-----------|----------|
    /// | α, β, BFImax, e | open interval (0, 1) |
    /// | C, A | finite, > 0 |
    /// | w | (0, 1] |
    pub fn validate(&self) -> Result<(), BaseflowError> {
        for (name, value) in [
            ("alpha", self.alpha),
            ("beta", self.beta),
            ("bfi_max", self.bfi_max),
            ("ewma_e", self.ewma_e),
        ] {
            if !(value > 0.0 && value < 1.0) {
                return Err(BaseflowError::InvalidParameter {
                    name,
                    value,
                    reason: "must be in (0, 1)",
                });
            }
        }
        for (name, value) in [("boughton_c", self.boughton_c), ("furey_a", self.furey_a)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(BaseflowError::InvalidParameter {
                    name,
                    value,
                    reason: "must be finite and positive",
                });
            }
        }
        if !(self.willems_w > 0.0 && self.willems_w <= 1.0) {
            return Err(BaseflowError::InvalidParameter {
                name: "willems_w",
                value: self.willems_w,
                reason: "must be in (0, 1]",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let p = FilterParams::default();
        assert_eq!(p.alpha(), 0.925);
        assert_eq!(p.beta(), 0.925);
        assert_eq!(p.bfi_max(), 0.8);
        assert_eq!(p.boughton_c(), 0.1);
        assert_eq!(p.furey_a(), 0.1);
        assert_eq!(p.ewma_e(), 0.05);
        assert_eq!(p.willems_w(), 0.5);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_builder_chaining() {
        let p = FilterParams::default()
            .with_alpha(0.98)
            .with_beta(0.9)
            .with_bfi_max(0.25)
            .with_boughton_c(0.2)
            .with_furey_a(0.3)
            .with_ewma_e(0.01)
            .with_willems_w(1.0);
        assert_eq!(p.alpha(), 0.98);
        assert_eq!(p.beta(), 0.9);
        assert_eq!(p.bfi_max(), 0.25);
        assert_eq!(p.boughton_c(), 0.2);
        assert_eq!(p.furey_a(), 0.3);
        assert_eq!(p.ewma_e(), 0.01);
        assert_eq!(p.willems_w(), 1.0);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_alpha_out_of_range() {
        for alpha in [0.0, 1.0, -0.1, f64::NAN] {
            let err = FilterParams::default()
                .with_alpha(alpha)
                .validate()
                .unwrap_err();
            assert!(matches!(
                err,
                BaseflowError::InvalidParameter { name: "alpha", .. }
            ));
        }
    }

    #[test]
    fn test_bfi_max_one_rejected() {
        // α·BFImax = 1 would zero the Eckhardt denominator only at α = 1,
        // but BFImax = 1 is outside the accepted range regardless.
        let err = FilterParams::default()
            .with_bfi_max(1.0)
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            BaseflowError::InvalidParameter {
                name: "bfi_max",
                ..
            }
        ));
    }

    #[test]
    fn test_boughton_c_non_positive() {
        let err = FilterParams::default()
            .with_boughton_c(0.0)
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            BaseflowError::InvalidParameter {
                name: "boughton_c",
                ..
            }
        ));
    }

    #[test]
    fn test_furey_a_infinite() {
        let err = FilterParams::default()
            .with_furey_a(f64::INFINITY)
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            BaseflowError::InvalidParameter { name: "furey_a", .. }
        ));
    }

    #[test]
    fn test_willems_w_zero() {
        let err = FilterParams::default()
            .with_willems_w(0.0)
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            BaseflowError::InvalidParameter {
                name: "willems_w",
                ..
            }
        ));
    }
}
