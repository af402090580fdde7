//! Multi-method separation with a shared Lyne-Hollick cache.

use std::collections::{BTreeMap, BTreeSet};

use rayon::prelude::*;
use tracing::debug;

use crate::cache::LyneHollickCache;
use crate::error::BaseflowError;
use crate::filters;
use crate::interval::checked_hysep_interval;
use crate::method::Method;
use crate::params::FilterParams;
use crate::series::Discharge;
use crate::turning;
use crate::window;

/// What to compute in a [`separate`] call.
///
/// Defaults: every method, default [`FilterParams`], no basin area.
#[derive(Debug, Clone)]
pub struct SeparationConfig {
    methods: BTreeSet<Method>,
    params: FilterParams,
    area: Option<f64>,
}

impl Default for SeparationConfig {
    fn default() -> Self {
        Self {
            methods: Method::ALL.into_iter().collect(),
            params: FilterParams::default(),
            area: None,
        }
    }
}

impl SeparationConfig {
    /// Creates a configuration requesting every method.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the requested method set.
    pub fn with_methods(mut self, methods: impl IntoIterator<Item = Method>) -> Self {
        self.methods = methods.into_iter().collect();
        self
    }

    /// Sets the filter coefficients.
    pub fn with_params(mut self, params: FilterParams) -> Self {
        self.params = params;
        self
    }

    /// Sets the basin area in km² (`None` for the default interval).
    pub fn with_area(mut self, area: Option<f64>) -> Self {
        self.area = area;
        self
    }

    /// Returns the requested methods.
    pub fn methods(&self) -> &BTreeSet<Method> {
        &self.methods
    }

    /// Returns the filter coefficients.
    pub fn params(&self) -> &FilterParams {
        &self.params
    }

    /// Returns the basin area.
    pub fn area(&self) -> Option<f64> {
        self.area
    }

    /// Validates the method set, coefficients and area.
    pub fn validate(&self) -> Result<(), BaseflowError> {
        if self.methods.is_empty() {
            return Err(BaseflowError::NoMethods);
        }
        self.params.validate()?;
        checked_hysep_interval(self.area)?;
        Ok(())
    }
}

/// Runs a single method against `q`.
///
/// Methods that need Lyne-Hollick take it from `cache`.
///
/// # Errors
///
/// Returns [`BaseflowError::CacheMismatch`] when a Lyne-Hollick method is
/// given a cache built for another record, and [`BaseflowError::InvalidArea`]
/// for a bad area on the windowed methods.
pub fn run_method(
    method: Method,
    q: &Discharge,
    cache: &LyneHollickCache<'_>,
    params: &FilterParams,
    area: Option<f64>,
) -> Result<Vec<f64>, BaseflowError> {
    if method.needs_lyne_hollick() && !cache.belongs_to(q) {
        return Err(BaseflowError::CacheMismatch);
    }
    let alpha = params.alpha();
    let b = match method {
        Method::LyneHollick => cache.get().to_vec(),
        Method::Ukih => turning::ukih(q, cache.get())?,
        Method::LocalMinimum => turning::local_minimum(q, cache.get(), area)?,
        Method::FixedInterval => window::fixed_interval(q, area)?,
        Method::SlidingInterval => window::sliding_interval(q, area)?,
        Method::Chapman => filters::chapman(q, alpha),
        Method::ChapmanMaxwell => filters::chapman_maxwell(q, alpha),
        Method::Boughton => filters::boughton(q, alpha, params.boughton_c()),
        Method::Furey => filters::furey(q, alpha, params.furey_a()),
        Method::Eckhardt => filters::eckhardt(q, alpha, params.bfi_max()),
        Method::Ewma => filters::ewma(q, params.ewma_e()),
        Method::Willems => filters::willems(q, alpha, params.willems_w()),
    };
    Ok(b)
}

/// Separates `discharge` with every method in `config`.
///
/// Methods run in parallel and share one [`LyneHollickCache`], so
/// Lyne-Hollick is computed at most once per call. Each result is
/// identical to calling the method on its own.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`BaseflowError::NoMethods`] | empty method set |
/// | [`BaseflowError::InvalidParameter`] | coefficient out of range |
/// | [`BaseflowError::InvalidArea`] | non-positive or non-finite area |
#[tracing::instrument(skip_all, fields(n = discharge.len(), n_methods = config.methods().len()))]
pub fn separate(
    discharge: &Discharge,
    config: &SeparationConfig,
) -> Result<Separation, BaseflowError> {
    config.validate()?;
    let cache = LyneHollickCache::new(discharge, config.params().beta());

    let results: Vec<(Method, Vec<f64>)> = config
        .methods()
        .par_iter()
        .map(|&method| {
            debug!(method = method.label(), "separating");
            run_method(method, discharge, &cache, config.params(), config.area())
                .map(|b| (method, b))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Separation {
        discharge: discharge.as_slice().to_vec(),
        series: results.into_iter().collect(),
    })
}

/// Baseflow series keyed by method, in method order.
#[derive(Debug, Clone, PartialEq)]
pub struct Separation {
    discharge: Vec<f64>,
    series: BTreeMap<Method, Vec<f64>>,
}

impl Separation {
    /// Returns the baseflow series for `method`, if it was requested.
    pub fn get(&self, method: Method) -> Option<&[f64]> {
        self.series.get(&method).map(Vec::as_slice)
    }

    /// Iterates `(method, baseflow)` pairs in method order.
    pub fn iter(&self) -> impl Iterator<Item = (Method, &[f64])> + '_ {
        self.series.iter().map(|(m, b)| (*m, b.as_slice()))
    }

    /// Methods present in this result.
    pub fn methods(&self) -> impl Iterator<Item = Method> + '_ {
        self.series.keys().copied()
    }

    /// Column labels, in method order.
    pub fn labels(&self) -> Vec<&'static str> {
        self.series.keys().map(Method::label).collect()
    }

    /// The discharge series the result was computed from.
    pub fn discharge(&self) -> &[f64] {
        &self.discharge
    }

    /// Number of methods in the result.
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Returns `true` if no method is present.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// `true` when a turning-point method found too few anchors and
    /// returned all zeros.
    pub fn is_degenerate(&self, method: Method) -> bool {
        method.can_degenerate()
            && self
                .series
                .get(&method)
                .is_some_and(|b| b.iter().all(|&v| v == 0.0))
    }

    /// Quickflow (`discharge - baseflow`) for `method`.
    pub fn quickflow(&self, method: Method) -> Option<Vec<f64>> {
        self.series.get(&method).map(|b| {
            self.discharge
                .iter()
                .zip(b)
                .map(|(q, b)| q - b)
                .collect()
        })
    }
}
