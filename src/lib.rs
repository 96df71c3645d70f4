// src/lib.rs

pub mod cli;
pub mod config;
pub mod display;
pub mod errors;
pub mod fs;
pub mod generate;
pub mod graph;
pub mod layout;
pub mod logging;
pub mod render;
pub mod types;

use anyhow::Result;
use tracing::debug;

use crate::cli::{DisplayArgs, GenerateArgs};
use crate::config::loader::load_raw_or_default;
use crate::config::model::ConfigFile;
use crate::display::{present, SystemViewer};
use crate::fs::RealFileSystem;
use crate::generate::run_generator;

/// Entry point for `dag-gen`.
///
/// This wires together:
/// - config loading (file, then CLI overrides, then validation)
/// - DAG sampling
/// - writing the test case
pub fn run_generate(args: GenerateArgs) -> Result<()> {
    let mut raw = load_raw_or_default(args.config.as_deref())?;
    args.apply_to(&mut raw.generate);
    let cfg = ConfigFile::try_from(raw)?;
    debug!(config = ?cfg.generate, "effective generator config");

    run_generator(&RealFileSystem, &cfg.generate)?;
    Ok(())
}

/// Entry point for `dag-display`.
///
/// This wires together:
/// - config loading (file, then CLI overrides, then validation)
/// - the header / parse / layout / render pipeline
/// - the system viewer, unless `show` is off
pub fn run_display(args: DisplayArgs) -> Result<()> {
    let mut raw = load_raw_or_default(args.config.as_deref())?;
    args.apply_to(&mut raw.display);
    let cfg = ConfigFile::try_from(raw)?;
    debug!(config = ?cfg.display, "effective displayer config");

    present(&RealFileSystem, &SystemViewer, &cfg.display)?;
    Ok(())
}
