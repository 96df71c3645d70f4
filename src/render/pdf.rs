// src/render/pdf.rs

//! Minimal single-page PDF writer.
//!
//! Produces a PDF 1.4 file with five objects: catalog, page tree, page,
//! content stream and a built-in Helvetica font for labels. Circles are
//! drawn as four cubic Bezier arcs.

use std::fmt::Write as _;

use super::{Circle, Label, Point, Rgb, Scene};

/// Control point distance for a quarter circle of radius 1.
const KAPPA: f64 = 0.552_284_749_8;

pub fn render(scene: &Scene) -> Vec<u8> {
    let content = content_stream(scene);

    let objects = [
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
        format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {} {}] \
             /Resources << /Font << /F1 5 0 R >> >> /Contents 4 0 R >>",
            num(scene.width),
            num(scene.height)
        ),
        format!(
            "<< /Length {} >>\nstream\n{}endstream",
            content.len(),
            content
        ),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
    ];

    let mut out = String::from("%PDF-1.4\n");
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(out.len());
        let _ = write!(out, "{} 0 obj\n{}\nendobj\n", i + 1, body);
    }

    let xref_at = out.len();
    let _ = write!(out, "xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
    for off in offsets {
        let _ = write!(out, "{off:010} 00000 n \n");
    }
    let _ = write!(
        out,
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
        objects.len() + 1,
        xref_at
    );

    out.into_bytes()
}

fn content_stream(scene: &Scene) -> String {
    let mut s = String::new();

    if !scene.edges.is_empty() {
        let _ = writeln!(s, "{} RG {} w 1 J", color(Rgb::BLACK), num(scene.edge_width));
        for seg in &scene.edges {
            let _ = writeln!(
                s,
                "{} {} m {} {} l S",
                num(seg.from.x),
                num(seg.from.y),
                num(seg.to.x),
                num(seg.to.y)
            );
        }
    }

    if !scene.arrowheads.is_empty() {
        let _ = writeln!(s, "{} rg", color(Rgb::BLACK));
        for [a, b, c] in &scene.arrowheads {
            let _ = writeln!(
                s,
                "{} m {} l {} l h f",
                pt(*a),
                pt(*b),
                pt(*c)
            );
        }
    }

    if !scene.nodes.is_empty() {
        let _ = writeln!(s, "{} rg", color(scene.node_color));
        for circle in &scene.nodes {
            circle_path(&mut s, circle);
            s.push_str("f\n");
        }
    }

    if !scene.labels.is_empty() {
        let _ = writeln!(s, "{} rg", color(Rgb::BLACK));
        for label in &scene.labels {
            text(&mut s, label);
        }
    }

    s
}

fn circle_path(s: &mut String, c: &Circle) {
    let (x, y, r) = (c.center.x, c.center.y, c.radius);
    let k = r * KAPPA;
    let _ = writeln!(s, "{} {} m", num(x + r), num(y));
    let _ = writeln!(s, "{} {} {} {} {} {} c", num(x + r), num(y + k), num(x + k), num(y + r), num(x), num(y + r));
    let _ = writeln!(s, "{} {} {} {} {} {} c", num(x - k), num(y + r), num(x - r), num(y + k), num(x - r), num(y));
    let _ = writeln!(s, "{} {} {} {} {} {} c", num(x - r), num(y - k), num(x - k), num(y - r), num(x), num(y - r));
    let _ = writeln!(s, "{} {} {} {} {} {} c", num(x + k), num(y - r), num(x + r), num(y - k), num(x + r), num(y));
}

fn text(s: &mut String, label: &Label) {
    let x = label.at.x - label.width() / 2.0;
    // Rough vertical centering: digits sit ~0.35 em above the baseline.
    let y = label.at.y - label.size * 0.35;
    let _ = writeln!(
        s,
        "BT /F1 {} Tf {} {} Td ({}) Tj ET",
        num(label.size),
        num(x),
        num(y),
        escape(&label.text)
    );
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if matches!(ch, '(' | ')' | '\\') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

fn color(c: Rgb) -> String {
    format!("{} {} {}", num(c.0), num(c.1), num(c.2))
}

fn pt(p: Point) -> String {
    format!("{} {}", num(p.x), num(p.y))
}

/// Fixed two-decimal number with trailing zeros trimmed.
fn num(v: f64) -> String {
    let s = format!("{v:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    match s {
        "" | "-" | "-0" => "0".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Segment;

    fn tiny_scene() -> Scene {
        Scene {
            width: 100.0,
            height: 50.0,
            edge_width: 1.0,
            node_color: Rgb::from_hex("#abdbe3").unwrap(),
            edges: vec![Segment {
                from: Point { x: 10.0, y: 10.0 },
                to: Point { x: 90.0, y: 40.0 },
            }],
            arrowheads: vec![],
            nodes: vec![Circle {
                center: Point { x: 10.0, y: 10.0 },
                radius: 2.0,
            }],
            labels: vec![Label {
                at: Point { x: 50.0, y: 25.0 },
                text: "(7)".to_string(),
                size: 5.0,
            }],
        }
    }

    #[test]
    fn numbers_are_compact() {
        assert_eq!(num(1.0), "1");
        assert_eq!(num(0.5), "0.5");
        assert_eq!(num(12.346), "12.35");
        assert_eq!(num(-0.001), "0");
    }

    #[test]
    fn document_structure() {
        let bytes = render(&tiny_scene());
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.starts_with("%PDF-1.4\n"));
        assert!(text.ends_with("%%EOF\n"));
        assert!(text.contains("/MediaBox [0 0 100 50]"));
        assert!(text.contains("10 10 m 90 40 l S"));
        assert!(text.contains("(\\(7\\)) Tj"));
    }

    #[test]
    fn xref_offsets_point_at_objects() {
        let text = String::from_utf8(render(&tiny_scene())).unwrap();
        let xref = text.find("xref\n").unwrap();
        let entries: Vec<usize> = text[xref..]
            .lines()
            .skip(3)
            .take(5)
            .map(|l| l[..10].parse().unwrap())
            .collect();
        for (i, off) in entries.iter().enumerate() {
            assert!(text[*off..].starts_with(&format!("{} 0 obj", i + 1)));
        }
        let startxref: usize = text
            .lines()
            .skip_while(|l| *l != "startxref")
            .nth(1)
            .unwrap()
            .parse()
            .unwrap();
        assert_eq!(startxref, xref);
    }
}
