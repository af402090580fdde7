//! # hydrosep-baseflow
//!
//! Baseflow separation of streamflow records.
//!
//! ## Pipeline
//!
//! ```mermaid
//! graph LR
//!     A["Discharge::new(data)?"] -->|"validate"| B["Discharge"]
//!     B -->|"LyneHollickCache::new"| C["LyneHollickCache"]
//!     C -->|".get()"| D["ukih / local_minimum"]
//!     B -->|"separate(&q, &config)?"| E["Separation"]
//!     E --> F[".get(method)"]
//!     E --> G[".quickflow(method)"]
//!     E --> H[".summary()"]
//! ```
//!
//! ## Methods
//!
//! | Method | Kind | Inputs |
//! |--------|------|--------|
//! | [`Method::LyneHollick`] | two-pass filter | β |
//! | [`Method::Ukih`] | turning points | Lyne-Hollick series |
//! | [`Method::LocalMinimum`] | turning points | Lyne-Hollick series, area |
//! | [`Method::FixedInterval`] | windowed minimum | area |
//! | [`Method::SlidingInterval`] | windowed minimum | area |
//! | [`Method::Chapman`] | filter | α |
//! | [`Method::ChapmanMaxwell`] | filter | α |
//! | [`Method::Boughton`] | filter | α, C |
//! | [`Method::Furey`] | filter | α, A |
//! | [`Method::Eckhardt`] | filter | α, BFImax |
//! | [`Method::Ewma`] | filter | e |
//! | [`Method::Willems`] | filter | α, w |
//!
//! Every method returns a series of the input length with
//! `baseflow[i] <= discharge[i]`.
//!
//! ## Quick Start
//!
//! ```
//! use hydrosep_baseflow::{Discharge, Method, SeparationConfig, separate};
//!
//! let q = Discharge::new(vec![10.0, 8.0, 6.0, 9.0, 12.0, 7.0, 5.0, 6.0])?;
//! let config = SeparationConfig::new()
//!     .with_methods([Method::LyneHollick, Method::Eckhardt]);
//! let result = separate(&q, &config)?;
//!
//! for (method, baseflow) in result.iter() {
//!     assert_eq!(baseflow.len(), q.len());
//!     println!("{method}: {:.2}", baseflow[0]);
//! }
//! # Ok::<(), hydrosep_baseflow::BaseflowError>(())
//! ```

mod cache;
mod error;
mod filters;
mod interval;
mod method;
mod params;
mod separate;
mod series;
mod summary;
mod turning;
mod window;

pub use cache::LyneHollickCache;
pub use error::BaseflowError;
pub use filters::{
    boughton, chapman, chapman_maxwell, eckhardt, ewma, furey, lyne_hollick, willems,
};
pub use interval::{DEFAULT_INTERVAL, checked_hysep_interval, hysep_interval};
pub use method::Method;
pub use params::{DEFAULT_ALPHA, DEFAULT_BETA, DEFAULT_BFI_MAX, FilterParams};
pub use separate::{Separation, SeparationConfig, run_method, separate};
pub use series::Discharge;
pub use summary::{MethodSummary, SeparationSummary};
pub use turning::{
    MIN_TURNING_POINTS, UKIH_BLOCK, linear_interpolation, local_minimum,
    local_minimum_turning_points, ukih, ukih_turning_points,
};
pub use window::{
    fixed_interval, fixed_interval_with_width, sliding_interval, sliding_interval_with_width,
};
