use std::error::Error;
use std::fs;

use tempfile::tempdir;

use dagkit::display::{prepare_input, run_displayer};
use dagkit::fs::RealFileSystem;
use dagkit::graph::edgelist::parse_weighted_digraph;
use dagkit::types::{HeaderMode, LayoutStrategy, RenderStyle};
use dagkit_test_utils::builders::DisplayBuilder;
use dagkit_test_utils::{edge_lines, init_tracing};

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn prepend_mode_accumulates_markers_across_runs() -> TestResult {
    let dir = tempdir()?;
    let input = dir.path().join("extreme.in");
    fs::write(&input, "1 2 5\n")?;

    prepare_input(&RealFileSystem, &input, HeaderMode::Prepend)?;
    assert!(fs::read_to_string(&input)?.starts_with("#1 2 5\n"));

    prepare_input(&RealFileSystem, &input, HeaderMode::Prepend)?;
    assert!(fs::read_to_string(&input)?.starts_with("##1 2 5\n"));
    Ok(())
}

#[test]
fn full_prepend_runs_also_accumulate() -> TestResult {
    init_tracing();
    let dir = tempdir()?;
    let input = dir.path().join("extreme.in");
    let output = dir.path().join("extreme.pdf");
    fs::write(&input, "1 2 5\n")?;
    let cfg = DisplayBuilder::new(&input, &output)
        .header_mode(HeaderMode::Prepend)
        .seed(1)
        .build();

    // The only data line becomes a comment, so the graph is empty.
    let first = run_displayer(&RealFileSystem, &cfg)?;
    assert_eq!(first.graph.edge_count(), 0);
    assert_eq!(fs::read_to_string(&input)?, "#1 2 5\n");

    run_displayer(&RealFileSystem, &cfg)?;
    assert_eq!(fs::read_to_string(&input)?, "##1 2 5\n");
    Ok(())
}

#[test]
fn ensure_mode_is_idempotent_on_disk() -> TestResult {
    let dir = tempdir()?;
    let input = dir.path().join("case.in");
    fs::write(&input, "3 2\n1 2 5\n2 3 7\n")?;

    for _ in 0..3 {
        prepare_input(&RealFileSystem, &input, HeaderMode::Ensure)?;
    }
    assert_eq!(fs::read_to_string(&input)?, "#3 2\n1 2 5\n2 3 7\n");
    Ok(())
}

#[test]
fn marked_file_parses_into_two_weighted_edges() -> TestResult {
    let text = format!("#{}", edge_lines(&[(1, 2, 5), (2, 3, 7)]));
    assert_eq!(text, "#1 2 5\n2 3 7\n");

    // `#1 2 5` is the header line now, so only `2 3 7` is data.
    let graph = parse_weighted_digraph(&text)?;
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.weight(2, 3), Some(7));

    // With the marker on its own line both records are edges.
    let graph = parse_weighted_digraph(&format!("#\n{}", edge_lines(&[(1, 2, 5), (2, 3, 7)])))?;
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.weight(1, 2), Some(5));
    assert_eq!(graph.weight(2, 3), Some(7));
    let mut vertices: Vec<i64> = graph.vertices().collect();
    vertices.sort_unstable();
    assert_eq!(vertices, vec![1, 2, 3]);
    Ok(())
}

#[test]
fn rendering_writes_non_empty_pdf() -> TestResult {
    init_tracing();
    let dir = tempdir()?;
    let input = dir.path().join("extreme.in");
    let output = dir.path().join("documents/src/extreme.pdf");
    fs::write(&input, format!("4 3\n{}", edge_lines(&[(1, 2, 5), (2, 3, 7), (1, 4, 2)])))?;
    let cfg = DisplayBuilder::new(&input, &output).seed(5).build();

    let rendering = run_displayer(&RealFileSystem, &cfg)?;

    assert_eq!(rendering.graph.edge_count(), 3);
    let bytes = fs::read(&output)?;
    assert!(!bytes.is_empty());
    assert!(bytes.starts_with(b"%PDF-"));
    assert!(bytes.ends_with(b"%%EOF\n"));
    Ok(())
}

#[test]
fn every_layout_and_style_renders() -> TestResult {
    let dir = tempdir()?;
    let input = dir.path().join("g.in");
    fs::write(
        &input,
        format!(
            "#5 6\n{}",
            edge_lines(&[(1, 2, 3), (1, 3, 4), (2, 4, 1), (3, 4, 9), (4, 5, 2), (2, 5, 6)])
        ),
    )?;

    for layout in [
        LayoutStrategy::Random,
        LayoutStrategy::Circular,
        LayoutStrategy::Shell,
        LayoutStrategy::Spectral,
        LayoutStrategy::Spring,
    ] {
        for style in [RenderStyle::Plain, RenderStyle::Labeled] {
            let output = dir.path().join(format!("{layout:?}-{style:?}.pdf"));
            let cfg = DisplayBuilder::new(&input, &output)
                .layout(layout)
                .style(style)
                .seed(11)
                .build();
            let rendering = run_displayer(&RealFileSystem, &cfg)?;
            assert_eq!(rendering.layout.len(), 5);
            assert!(fs::metadata(&output)?.len() > 0);
        }
    }
    Ok(())
}

#[test]
fn malformed_input_fails_without_output() -> TestResult {
    let dir = tempdir()?;
    let input = dir.path().join("bad.in");
    let output = dir.path().join("bad.pdf");
    fs::write(&input, "1 2 five\n")?;
    let cfg = DisplayBuilder::new(&input, &output)
        .header_mode(HeaderMode::Keep)
        .build();

    assert!(run_displayer(&RealFileSystem, &cfg).is_err());
    assert!(!output.exists());
    Ok(())
}
