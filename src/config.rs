use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level hydrosep configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HydrosepConfig {
    /// Methods to run, by label or key. `None` runs every method.
    #[serde(default)]
    pub methods: Option<Vec<String>>,

    /// Basin area in km².
    #[serde(default)]
    pub area: Option<f64>,

    /// CSV settings.
    #[serde(default)]
    pub io: IoToml,

    /// Filter coefficients.
    #[serde(default)]
    pub params: ParamsToml,
}

impl HydrosepConfig {
    /// Reads and parses a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoToml {
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_true")]
    pub has_header: bool,
    #[serde(default)]
    pub precision: Option<usize>,
}

impl Default for IoToml {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            date_format: default_date_format(),
            has_header: true,
            precision: None,
        }
    }
}

fn default_delimiter() -> String {
    ",".to_string()
}
fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}
fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParamsToml {
    #[serde(default = "default_alpha")]
    pub alpha: f64,
    #[serde(default = "default_beta")]
    pub beta: f64,
    #[serde(default = "default_bfi_max")]
    pub bfi_max: f64,
    #[serde(default = "default_boughton_c")]
    pub boughton_c: f64,
    #[serde(default = "default_furey_a")]
    pub furey_a: f64,
    #[serde(default = "default_ewma_e")]
    pub ewma_e: f64,
    #[serde(default = "default_willems_w")]
    pub willems_w: f64,
}

impl Default for ParamsToml {
    fn default() -> Self {
        Self {
            alpha: default_alpha(),
            beta: default_beta(),
            bfi_max: default_bfi_max(),
            boughton_c: default_boughton_c(),
            furey_a: default_furey_a(),
            ewma_e: default_ewma_e(),
            willems_w: default_willems_w(),
        }
    }
}

fn default_alpha() -> f64 {
    0.925
}
fn default_beta() -> f64 {
    0.925
}
fn default_bfi_max() -> f64 {
    0.8
}
fn default_boughton_c() -> f64 {
    0.1
}
fn default_furey_a() -> f64 {
    0.1
}
fn default_ewma_e() -> f64 {
    0.05
}
fn default_willems_w() -> f64 {
    0.5
}
