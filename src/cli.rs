// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! Every flag is optional: with no arguments each binary reproduces the
//! built-in defaults (or whatever `Dagkit.toml` says). Flags override the
//! config file field by field.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::model::{DisplaySection, GenerateSection};
use crate::types::{HeaderMode, LayoutStrategy, OutputFormat, RenderStyle};

/// Command-line arguments for `dag-gen`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "dag-gen",
    version,
    about = "Generate a random weighted DAG test case with a dedicated sink vertex.",
    long_about = None
)]
pub struct GenerateArgs {
    /// Path to a config file (TOML). Defaults to `Dagkit.toml` if present.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Total vertex count; the last vertex is the sink.
    #[arg(long, short = 'n', value_name = "N")]
    pub vertices: Option<u32>,

    /// Total edge count, sink edges included.
    #[arg(long, short = 'm', value_name = "M")]
    pub edges: Option<usize>,

    /// Number of distinct vertices wired into the sink.
    #[arg(long, value_name = "K")]
    pub sink_edges: Option<usize>,

    /// Refuse repeated `(u, v)` pairs among the extra DAG edges.
    #[arg(long)]
    pub no_repeated_edges: bool,

    /// Output file.
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// RNG seed for a reproducible test case.
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `DAGKIT_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

impl GenerateArgs {
    /// Layer the flags that were given on top of `section`.
    pub fn apply_to(&self, section: &mut GenerateSection) {
        if let Some(n) = self.vertices {
            section.vertices = n;
        }
        if let Some(m) = self.edges {
            section.edges = m;
        }
        if let Some(k) = self.sink_edges {
            section.sink_edges = k;
        }
        if self.no_repeated_edges {
            section.allow_repeated_edges = false;
        }
        if let Some(ref out) = self.output {
            section.output = out.clone();
        }
        if self.seed.is_some() {
            section.seed = self.seed;
        }
    }
}

/// Command-line arguments for `dag-display`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "dag-display",
    version,
    about = "Lay out an edge-list file and render it to PDF or SVG.",
    long_about = None
)]
pub struct DisplayArgs {
    /// Path to a config file (TOML). Defaults to `Dagkit.toml` if present.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Edge-list file to read.
    #[arg(long, short = 'i', value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Where to write the rendering.
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// How the `#` header marker is applied to the input file.
    #[arg(long, value_enum, value_name = "MODE")]
    pub header_mode: Option<HeaderMode>,

    #[arg(long, value_enum, value_name = "STRATEGY")]
    pub layout: Option<LayoutStrategy>,

    #[arg(long, value_enum, value_name = "STYLE")]
    pub style: Option<RenderStyle>,

    /// Output format; inferred from the output extension when omitted.
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Seed for the random and spring layouts.
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Do not open the rendering in the system viewer.
    #[arg(long)]
    pub no_show: bool,

    /// Logging level (error, warn, info, debug, trace).
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

impl DisplayArgs {
    /// Layer the flags that were given on top of `section`.
    pub fn apply_to(&self, section: &mut DisplaySection) {
        if let Some(ref input) = self.input {
            section.input = input.clone();
        }
        if let Some(ref output) = self.output {
            section.output = output.clone();
        }
        if let Some(mode) = self.header_mode {
            section.header_mode = mode;
        }
        if let Some(layout) = self.layout {
            section.layout = layout;
        }
        if let Some(style) = self.style {
            section.style = style;
        }
        if self.format.is_some() {
            section.format = self.format;
        }
        if self.seed.is_some() {
            section.seed = self.seed;
        }
        if self.no_show {
            section.show = false;
        }
    }
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}
