// src/config/model.rs

use std::path::PathBuf;

use serde::Deserialize;

use crate::types::{HeaderMode, LayoutStrategy, OutputFormat, RenderStyle};

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [generate]
/// vertices = 100
/// edges = 200
/// output = "dij.in"
///
/// [display]
/// input = "./extreme.in"
/// layout = "random"
///
/// [display.render]
/// node_color = "#abdbe3"
/// ```
///
/// All sections are optional and fall back to the built-in defaults, so an
/// empty file (or no file at all) reproduces the stock behaviour of both
/// utilities.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawConfigFile {
    /// `[generate]` section, read by `dag-gen`.
    #[serde(default)]
    pub generate: GenerateSection,

    /// `[display]` section, read by `dag-display`.
    #[serde(default)]
    pub display: DisplaySection,
}

/// Validated configuration.
///
/// Only obtainable through `TryFrom<RawConfigFile>` (see `validate.rs`).
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub generate: GenerateSection,
    pub display: DisplaySection,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(generate: GenerateSection, display: DisplaySection) -> Self {
        Self { generate, display }
    }
}

/// Inclusive integer weight range, written as `[low, high]` in TOML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct WeightRange(pub i64, pub i64);

impl WeightRange {
    pub fn low(&self) -> i64 {
        self.0
    }

    pub fn high(&self) -> i64 {
        self.1
    }
}

/// `[generate]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateSection {
    /// Total vertex count `n`. The last vertex is the sink.
    #[serde(default = "default_vertices")]
    pub vertices: u32,

    /// Total edge count `m`, sink edges included.
    #[serde(default = "default_edges")]
    pub edges: usize,

    /// Number of distinct vertices wired into the sink.
    #[serde(default = "default_sink_edges")]
    pub sink_edges: usize,

    /// Weight range for edges inside the DAG body.
    #[serde(default = "default_dag_weight")]
    pub dag_weight: WeightRange,

    /// Weight range for the edges into the sink.
    #[serde(default = "default_sink_weight")]
    pub sink_weight: WeightRange,

    /// Whether the extra (non-tree) edges may repeat an existing pair.
    #[serde(default = "default_true")]
    pub allow_repeated_edges: bool,

    /// Where the test case is written.
    #[serde(default = "default_generate_output")]
    pub output: PathBuf,

    /// Fixed RNG seed; `None` draws from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_vertices() -> u32 {
    100
}

fn default_edges() -> usize {
    200
}

fn default_sink_edges() -> usize {
    5
}

fn default_dag_weight() -> WeightRange {
    WeightRange(1, 10)
}

fn default_sink_weight() -> WeightRange {
    WeightRange(1, 100)
}

fn default_true() -> bool {
    true
}

fn default_generate_output() -> PathBuf {
    PathBuf::from("dij.in")
}

impl Default for GenerateSection {
    fn default() -> Self {
        Self {
            vertices: default_vertices(),
            edges: default_edges(),
            sink_edges: default_sink_edges(),
            dag_weight: default_dag_weight(),
            sink_weight: default_sink_weight(),
            allow_repeated_edges: true,
            output: default_generate_output(),
            seed: None,
        }
    }
}

/// `[display]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct DisplaySection {
    #[serde(default = "default_display_input")]
    pub input: PathBuf,

    #[serde(default = "default_display_output")]
    pub output: PathBuf,

    /// `"prepend"`, `"ensure"` (default) or `"keep"`.
    #[serde(default)]
    pub header_mode: HeaderMode,

    #[serde(default)]
    pub layout: LayoutStrategy,

    #[serde(default)]
    pub style: RenderStyle,

    /// Explicit output format; `None` infers it from the output extension.
    #[serde(default)]
    pub format: Option<OutputFormat>,

    /// Open the written document with the platform viewer.
    #[serde(default = "default_true")]
    pub show: bool,

    /// Fixed seed for the random and spring layouts.
    #[serde(default)]
    pub seed: Option<u64>,

    #[serde(default)]
    pub render: RenderSection,
}

fn default_display_input() -> PathBuf {
    PathBuf::from("./extreme.in")
}

fn default_display_output() -> PathBuf {
    PathBuf::from("../../documents/src/extreme.pdf")
}

impl Default for DisplaySection {
    fn default() -> Self {
        Self {
            input: default_display_input(),
            output: default_display_output(),
            header_mode: HeaderMode::default(),
            layout: LayoutStrategy::default(),
            style: RenderStyle::default(),
            format: None,
            show: true,
            seed: None,
            render: RenderSection::default(),
        }
    }
}

impl DisplaySection {
    /// Format to write: the explicit setting, or the one implied by `output`.
    pub fn effective_format(&self) -> OutputFormat {
        self.format
            .unwrap_or_else(|| OutputFormat::from_extension(&self.output))
    }
}

/// `[display.render]` section: drawing parameters.
///
/// Sizes follow matplotlib conventions: canvas in inches, marker size in
/// points squared, widths and fonts in points.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderSection {
    #[serde(default = "default_canvas_inches")]
    pub canvas_inches: [f64; 2],

    #[serde(default = "default_node_color")]
    pub node_color: String,

    /// Marker area; `None` picks 10 for plain and 100 for labeled output.
    #[serde(default)]
    pub node_size: Option<f64>,

    #[serde(default = "default_edge_width")]
    pub edge_width: f64,

    #[serde(default = "default_font_size")]
    pub font_size: f64,

    #[serde(default = "default_arrow_size")]
    pub arrow_size: f64,
}

fn default_canvas_inches() -> [f64; 2] {
    [20.0, 20.0]
}

fn default_node_color() -> String {
    "#abdbe3".to_string()
}

fn default_edge_width() -> f64 {
    1.0
}

fn default_font_size() -> f64 {
    5.0
}

fn default_arrow_size() -> f64 {
    3.0
}

impl Default for RenderSection {
    fn default() -> Self {
        Self {
            canvas_inches: default_canvas_inches(),
            node_color: default_node_color(),
            node_size: None,
            edge_width: default_edge_width(),
            font_size: default_font_size(),
            arrow_size: default_arrow_size(),
        }
    }
}

impl RenderSection {
    /// Marker area for the given style, honouring an explicit `node_size`.
    pub fn effective_node_size(&self, style: RenderStyle) -> f64 {
        self.node_size.unwrap_or(match style {
            RenderStyle::Plain => 10.0,
            RenderStyle::Labeled => 100.0,
        })
    }
}
