use std::error::Error;
use std::io::Write;
use std::path::PathBuf;

use tempfile::NamedTempFile;

use dagkit::config::{load_and_validate, load_from_path, WeightRange};
use dagkit::types::{HeaderMode, LayoutStrategy, OutputFormat, RenderStyle};

type TestResult = Result<(), Box<dyn Error>>;

fn config_file(contents: &str) -> Result<NamedTempFile, Box<dyn Error>> {
    let mut file = NamedTempFile::new()?;
    write!(file, "{contents}")?;
    Ok(file)
}

#[test]
fn empty_file_gives_stock_behaviour() -> TestResult {
    let file = config_file("")?;
    let cfg = load_and_validate(file.path())?;

    assert_eq!(cfg.generate.vertices, 100);
    assert_eq!(cfg.generate.edges, 200);
    assert_eq!(cfg.generate.sink_edges, 5);
    assert_eq!(cfg.generate.dag_weight, WeightRange(1, 10));
    assert_eq!(cfg.generate.sink_weight, WeightRange(1, 100));
    assert_eq!(cfg.generate.output, PathBuf::from("dij.in"));
    assert_eq!(cfg.generate.seed, None);

    assert_eq!(cfg.display.input, PathBuf::from("./extreme.in"));
    assert_eq!(
        cfg.display.output,
        PathBuf::from("../../documents/src/extreme.pdf")
    );
    assert_eq!(cfg.display.header_mode, HeaderMode::Ensure);
    assert_eq!(cfg.display.layout, LayoutStrategy::Random);
    assert_eq!(cfg.display.style, RenderStyle::Plain);
    assert_eq!(cfg.display.effective_format(), OutputFormat::Pdf);
    assert!(cfg.display.show);
    assert_eq!(cfg.display.render.canvas_inches, [20.0, 20.0]);
    assert_eq!(cfg.display.render.effective_node_size(RenderStyle::Plain), 10.0);
    assert_eq!(cfg.display.render.effective_node_size(RenderStyle::Labeled), 100.0);
    Ok(())
}

#[test]
fn full_file_overrides_everything() -> TestResult {
    let file = config_file(
        r##"
[generate]
vertices = 20
edges = 40
sink_edges = 3
dag_weight = [2, 4]
sink_weight = [50, 60]
allow_repeated_edges = false
output = "cases/small.in"
seed = 99

[display]
input = "cases/small.in"
output = "out/small.svg"
header_mode = "prepend"
layout = "spring"
style = "labeled"
show = false
seed = 7

[display.render]
canvas_inches = [8.0, 6.0]
node_color = "#FF0000"
node_size = 50.0
edge_width = 0.5
font_size = 7.0
arrow_size = 4.0
"##,
    )?;
    let cfg = load_and_validate(file.path())?;

    assert_eq!(cfg.generate.vertices, 20);
    assert_eq!(cfg.generate.dag_weight, WeightRange(2, 4));
    assert!(!cfg.generate.allow_repeated_edges);
    assert_eq!(cfg.generate.seed, Some(99));

    assert_eq!(cfg.display.header_mode, HeaderMode::Prepend);
    assert_eq!(cfg.display.layout, LayoutStrategy::Spring);
    assert_eq!(cfg.display.style, RenderStyle::Labeled);
    assert_eq!(cfg.display.effective_format(), OutputFormat::Svg);
    assert!(!cfg.display.show);
    assert_eq!(cfg.display.render.canvas_inches, [8.0, 6.0]);
    assert_eq!(cfg.display.render.effective_node_size(RenderStyle::Plain), 50.0);
    Ok(())
}

#[test]
fn unknown_layout_is_rejected_at_parse_time() -> TestResult {
    let file = config_file(
        r#"
[display]
layout = "kamada_kawai"
"#,
    )?;
    assert!(load_from_path(file.path()).is_err());
    Ok(())
}
