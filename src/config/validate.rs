// src/config/validate.rs

use regex::Regex;

use crate::config::model::{
    ConfigFile, DisplaySection, GenerateSection, RawConfigFile, WeightRange,
};
use crate::errors::{DagkitError, Result};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::DagkitError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_generate(&raw.generate)?;
        validate_display(&raw.display)?;
        Ok(ConfigFile::new_unchecked(raw.generate, raw.display))
    }
}

fn validate_generate(cfg: &GenerateSection) -> Result<()> {
    if cfg.vertices < 2 {
        return Err(DagkitError::ConfigError(format!(
            "[generate].vertices must be >= 2 (got {})",
            cfg.vertices
        )));
    }

    let candidates = (cfg.vertices - 1) as usize;
    if cfg.sink_edges > candidates {
        return Err(DagkitError::ConfigError(format!(
            "[generate].sink_edges = {} exceeds the {} vertices that can feed the sink",
            cfg.sink_edges, candidates
        )));
    }

    if cfg.edges < cfg.sink_edges {
        return Err(DagkitError::ConfigError(format!(
            "[generate].edges = {} is smaller than sink_edges = {}",
            cfg.edges, cfg.sink_edges
        )));
    }

    validate_range("[generate].dag_weight", cfg.dag_weight)?;
    validate_range("[generate].sink_weight", cfg.sink_weight)?;
    Ok(())
}

fn validate_range(field: &str, range: WeightRange) -> Result<()> {
    if range.low() > range.high() {
        return Err(DagkitError::ConfigError(format!(
            "{field} must be [low, high] with low <= high (got [{}, {}])",
            range.low(),
            range.high()
        )));
    }
    Ok(())
}

fn validate_display(cfg: &DisplaySection) -> Result<()> {
    let render = &cfg.render;

    let [w, h] = render.canvas_inches;
    if !(w > 0.0 && h > 0.0) {
        return Err(DagkitError::ConfigError(format!(
            "[display.render].canvas_inches must be positive (got [{w}, {h}])"
        )));
    }

    if let Some(size) = render.node_size {
        ensure_positive("[display.render].node_size", size)?;
    }
    ensure_positive("[display.render].edge_width", render.edge_width)?;
    ensure_positive("[display.render].font_size", render.font_size)?;
    ensure_positive("[display.render].arrow_size", render.arrow_size)?;

    let hex = Regex::new(r"^#[0-9a-fA-F]{6}$").map_err(anyhow::Error::from)?;
    if !hex.is_match(&render.node_color) {
        return Err(DagkitError::ConfigError(format!(
            "[display.render].node_color must look like \"#rrggbb\" (got {:?})",
            render.node_color
        )));
    }

    Ok(())
}

fn ensure_positive(field: &str, value: f64) -> Result<()> {
    if !(value > 0.0) {
        return Err(DagkitError::ConfigError(format!(
            "{field} must be > 0 (got {value})"
        )));
    }
    Ok(())
}
