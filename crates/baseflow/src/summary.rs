//! Per-method summary statistics for reporting.

use serde::Serialize;

use crate::method::Method;
use crate::separate::Separation;

/// Summary of one method's baseflow series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodSummary {
    /// Method the statistics belong to, serialized as its column label.
    pub method: Method,
    /// Σbaseflow / Σdischarge; `None` when total discharge is zero.
    pub baseflow_index: Option<f64>,
    /// Sum of the baseflow series.
    pub total_baseflow: f64,
    /// Sum of `discharge - baseflow`.
    pub total_quickflow: f64,
    /// All-zero output from a turning-point method.
    pub degenerate: bool,
}

/// Top-level summary report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeparationSummary {
    /// Number of discharge samples.
    pub n_samples: usize,
    /// Sum of the discharge series.
    pub total_discharge: f64,
    /// One entry per separated method, in method order.
    pub methods: Vec<MethodSummary>,
}

impl Separation {
    /// Summarises every method in the result, in method order.
    pub fn summary(&self) -> SeparationSummary {
        let total_discharge: f64 = self.discharge().iter().sum();
        let methods = self
            .iter()
            .map(|(method, b)| {
                let total_baseflow: f64 = b.iter().sum();
                let baseflow_index =
                    (total_discharge > 0.0).then(|| total_baseflow / total_discharge);
                MethodSummary {
                    method,
                    baseflow_index,
                    total_baseflow,
                    total_quickflow: total_discharge - total_baseflow,
                    degenerate: self.is_degenerate(method),
                }
            })
            .collect();

        SeparationSummary {
            n_samples: self.discharge().len(),
            total_discharge,
            methods,
        }
    }
}
