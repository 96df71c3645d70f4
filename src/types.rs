// src/types.rs

//! Small option enums shared by the config layer and the CLI.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::Deserialize;

/// What the displayer does with the `#` header marker before parsing.
///
/// - `Prepend`: always write `#` in front of the existing contents. Running
///   twice accumulates markers (`"1 2 5"` -> `"#1 2 5"` -> `"##1 2 5"`).
/// - `Ensure`: only prepend when the file does not already start with `#`.
/// - `Keep`: never touch the input file; the first line is parsed as data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum HeaderMode {
    Prepend,
    #[default]
    Ensure,
    Keep,
}

/// 2-D placement strategy for the displayer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LayoutStrategy {
    /// Independent uniform coordinates in `[0, 1)`.
    #[default]
    Random,
    /// Vertices evenly spaced on the unit circle.
    Circular,
    /// Concentric circles, one per generation of the graph.
    Shell,
    /// Second and third Laplacian eigenvectors.
    Spectral,
    /// Force-directed simulation.
    Spring,
}

/// How much detail goes into the rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RenderStyle {
    /// Small markers, straight edges, no arrowheads, no text.
    #[default]
    Plain,
    /// Larger markers with vertex labels, arrowheads and edge weights.
    Labeled,
}

/// Output document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Pdf,
    Svg,
}

impl OutputFormat {
    /// Guess the format from a file extension, falling back to PDF.
    pub fn from_extension(path: &std::path::Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("svg") => OutputFormat::Svg,
            _ => OutputFormat::Pdf,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Pdf => write!(f, "pdf"),
            OutputFormat::Svg => write!(f, "svg"),
        }
    }
}

impl FromStr for LayoutStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "random" => Ok(LayoutStrategy::Random),
            "circular" => Ok(LayoutStrategy::Circular),
            "shell" => Ok(LayoutStrategy::Shell),
            "spectral" => Ok(LayoutStrategy::Spectral),
            "spring" => Ok(LayoutStrategy::Spring),
            other => Err(format!(
                "invalid layout: {other} (expected random, circular, shell, spectral or spring)"
            )),
        }
    }
}

impl FromStr for HeaderMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "prepend" => Ok(HeaderMode::Prepend),
            "ensure" => Ok(HeaderMode::Ensure),
            "keep" => Ok(HeaderMode::Keep),
            other => Err(format!(
                "invalid header_mode: {other} (expected \"prepend\", \"ensure\" or \"keep\")"
            )),
        }
    }
}
