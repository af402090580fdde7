//! Separate command: read a streamflow CSV, run the requested methods, export.

use std::fs::File;
use std::io::BufWriter;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use hydrosep_baseflow::{Discharge, Method, SeparationConfig, separate};
use hydrosep_io::{Column, read_csv, write_csv};

use crate::cli::SeparateArgs;
use crate::config::HydrosepConfig;
use crate::convert;

/// Run the separation pipeline.
pub fn run(args: SeparateArgs) -> Result<()> {
    let _cmd = info_span!("separate").entered();

    // 1. Load optional TOML config
    let config = match &args.config {
        Some(path) => HydrosepConfig::load(path)?,
        None => HydrosepConfig::default(),
    };

    // 2. Merge CLI flags over the config file
    let names = args.methods.as_deref().or(config.methods.as_deref());
    let methods = convert::parse_methods(names)?;
    let area = args.area.or(config.area);
    let params = convert::override_params(
        convert::build_filter_params(&config.params),
        args.alpha,
        args.beta,
        args.bfi_max,
    );
    let reader_cfg = convert::build_reader_config(&config.io)?;
    let writer_cfg = convert::build_writer_config(&config.io)?;

    // 3. Read input
    let series = read_csv(&args.input, &reader_cfg)
        .with_context(|| format!("failed to read CSV: {}", args.input.display()))?;
    let discharge = Discharge::new(series.discharge().to_vec())
        .context("input discharge is not a valid series")?;

    // 4. Separate
    let sep_cfg = SeparationConfig::new()
        .with_methods(methods)
        .with_params(params)
        .with_area(area);
    let result = separate(&discharge, &sep_cfg).context("baseflow separation failed")?;
    info!(
        n = discharge.len(),
        methods = result.len(),
        "separation complete"
    );

    for method in result.methods().filter(|&m| result.is_degenerate(m)) {
        warn!(
            method = method.label(),
            "too few turning points; column is all zeros"
        );
    }

    // 5. Write results
    let columns: Vec<Column<'_>> = result
        .iter()
        .map(|(method, b)| (method.label(), b))
        .collect();
    write_csv(&args.output, &series, &columns, &writer_cfg)
        .with_context(|| format!("failed to write CSV: {}", args.output.display()))?;

    // 6. Optional JSON summary
    if let Some(path) = &args.summary {
        let file = File::create(path)
            .with_context(|| format!("failed to create summary file: {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &result.summary())
            .with_context(|| format!("failed to write summary JSON: {}", path.display()))?;
        info!(path = %path.display(), "summary written");
    }

    Ok(())
}

/// Print each method key next to its export label.
pub fn list_methods() -> Result<()> {
    for method in Method::ALL {
        println!("{:<10}{}", method.key(), method.label());
    }
    Ok(())
}
