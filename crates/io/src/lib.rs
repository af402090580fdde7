//! # hydrosep-io
//!
//! Read dated streamflow records from CSV and write separation results
//! back out as a flat CSV table. Bridges files into the engine's `&[f64]`
//! discharge slices.
//!
//! ```no_run
//! use std::path::Path;
//! use hydrosep_io::{ReaderConfig, WriterConfig, read_csv, write_csv};
//!
//! let series = read_csv(Path::new("flow.csv"), &ReaderConfig::default())?;
//! let baseflow = vec![0.0; series.len()];
//! write_csv(
//!     Path::new("out.csv"),
//!     &series,
//!     &[("Lyne-Hollick", baseflow.as_slice())],
//!     &WriterConfig::default(),
//! )?;
//! # Ok::<(), hydrosep_io::IoError>(())
//! ```

mod error;
mod reader;
mod series;
mod validate;
mod writer;

pub use error::IoError;
pub use reader::{ReaderConfig, read_csv, read_csv_from};
pub use series::StreamflowSeries;
pub use writer::{Column, WriterConfig, write_csv, write_results};
