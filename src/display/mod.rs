// src/display/mod.rs

//! Edge-list renderer (`dag-display`).
//!
//! Pipeline: header marker -> parse -> layout -> render -> write. Each
//! invocation builds its graph and layout from scratch.

pub mod header;
pub mod viewer;

use std::path::PathBuf;

use tracing::{info, warn};

use crate::config::model::DisplaySection;
use crate::errors::Result;
use crate::fs::FileSystem;
use crate::generate::make_rng;
use crate::graph::edgelist::parse_weighted_digraph;
use crate::graph::WeightedDigraph;
use crate::layout::{compute_layout, Layout};
use crate::render::{build_scene, encode, RenderOptions};
use crate::types::OutputFormat;

pub use header::{apply_header_marker, prepare_input};
pub use viewer::{open_in_viewer, SystemViewer, Viewer};

/// What a displayer run produced.
#[derive(Debug, Clone)]
pub struct Rendering {
    pub graph: WeightedDigraph,
    pub layout: Layout,
    pub output: PathBuf,
    pub format: OutputFormat,
    pub bytes_written: usize,
    /// Whether the document was handed to a viewer successfully.
    pub shown: bool,
}

/// Run the full displayer pipeline against `fs`.
///
/// The input file is rewritten according to `cfg.header_mode` before it is
/// parsed; the output document is created or overwritten.
pub fn run_displayer(fs: &dyn FileSystem, cfg: &DisplaySection) -> Result<Rendering> {
    let text = prepare_input(fs, &cfg.input, cfg.header_mode)?;
    let graph = parse_weighted_digraph(&text)?;
    info!(
        input = ?cfg.input,
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "parsed edge list"
    );

    let mut rng = make_rng(cfg.seed);
    let layout = compute_layout(&graph, cfg.layout, &mut rng);

    let options = RenderOptions::from_config(&cfg.render, cfg.style)?;
    let scene = build_scene(&graph, &layout, &options);

    let format = cfg.effective_format();
    let document = encode(&scene, format);
    fs.write(&cfg.output, &document)?;

    info!(
        output = ?cfg.output,
        %format,
        width_pt = scene.width,
        height_pt = scene.height,
        "wrote rendering"
    );

    Ok(Rendering {
        graph,
        layout,
        output: cfg.output.clone(),
        format,
        bytes_written: document.len(),
        shown: false,
    })
}

/// Render, then open the result with `viewer` when `cfg.show` is set.
///
/// A viewer failure is logged and leaves `shown` false; the document on
/// disk is still the result of the run.
pub fn present(
    fs: &dyn FileSystem,
    viewer: &dyn Viewer,
    cfg: &DisplaySection,
) -> Result<Rendering> {
    let mut rendering = run_displayer(fs, cfg)?;
    if cfg.show {
        match viewer.open(&rendering.output) {
            Ok(()) => rendering.shown = true,
            Err(err) => warn!(error = %err, output = ?rendering.output, "could not open viewer"),
        }
    }
    Ok(rendering)
}
