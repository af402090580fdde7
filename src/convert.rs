//! Pure conversion functions: TOML config structs and CLI flags -> crate API config types.

use std::collections::BTreeSet;

use anyhow::{Context, Result, bail};

use hydrosep_baseflow::{FilterParams, Method};
use hydrosep_io::{ReaderConfig, WriterConfig};

use crate::config::{IoToml, ParamsToml};

/// Parses method names (labels or keys) into a set.
///
/// `None` or an empty list selects every method.
pub fn parse_methods(names: Option<&[String]>) -> Result<BTreeSet<Method>> {
    let Some(names) = names.filter(|n| !n.is_empty()) else {
        return Ok(Method::ALL.into_iter().collect());
    };
    names
        .iter()
        .map(|name| {
            name.parse::<Method>()
                .with_context(|| format!("valid methods: {}", method_keys()))
        })
        .collect()
}

fn method_keys() -> String {
    Method::ALL
        .iter()
        .map(|m| m.key())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parses a single-character delimiter; `\t` and `tab` mean a tab.
pub fn parse_delimiter(s: &str) -> Result<char> {
    if matches!(s, "\\t" | "tab") {
        return Ok('\t');
    }
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => bail!("delimiter must be a single character, got {s:?}"),
    }
}

/// Builds [`FilterParams`] from the TOML section.
pub fn build_filter_params(p: &ParamsToml) -> FilterParams {
    FilterParams::default()
        .with_alpha(p.alpha)
        .with_beta(p.beta)
        .with_bfi_max(p.bfi_max)
        .with_boughton_c(p.boughton_c)
        .with_furey_a(p.furey_a)
        .with_ewma_e(p.ewma_e)
        .with_willems_w(p.willems_w)
}

/// Applies command-line coefficient overrides on top of `base`.
pub fn override_params(
    base: FilterParams,
    alpha: Option<f64>,
    beta: Option<f64>,
    bfi_max: Option<f64>,
) -> FilterParams {
    let mut p = base;
    if let Some(a) = alpha {
        p = p.with_alpha(a);
    }
    if let Some(b) = beta {
        p = p.with_beta(b);
    }
    if let Some(m) = bfi_max {
        p = p.with_bfi_max(m);
    }
    p
}

/// Builds a [`ReaderConfig`] from the TOML I/O configuration.
pub fn build_reader_config(io: &IoToml) -> Result<ReaderConfig> {
    let cfg = ReaderConfig::default()
        .with_has_header(io.has_header)
        .with_delimiter(parse_delimiter(&io.delimiter)?)
        .with_date_format(&io.date_format);
    cfg.validate().context("invalid [io] reader settings")?;
    Ok(cfg)
}

/// Builds a [`WriterConfig`] from the TOML I/O configuration.
pub fn build_writer_config(io: &IoToml) -> Result<WriterConfig> {
    let cfg = WriterConfig::default()
        .with_delimiter(parse_delimiter(&io.delimiter)?)
        .with_date_format(&io.date_format)
        .with_precision(io.precision);
    cfg.validate().context("invalid [io] writer settings")?;
    Ok(cfg)
}
