// src/render/svg.rs

//! SVG backend. Same scene as the PDF writer; y is flipped because SVG
//! grows downwards.

use super::{Point, Rgb, Scene};

const FONT_FAMILY: &str = "Helvetica, Arial, sans-serif";

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn fmt_pt(scene: &Scene, p: Point) -> (String, String) {
    (format!("{:.2}", p.x), format!("{:.2}", scene.height - p.y))
}

pub fn render(scene: &Scene) -> String {
    let (w, h) = (scene.width, scene.height);
    let black = Rgb::BLACK.to_hex();
    let mut parts: Vec<String> = Vec::new();

    parts.push(format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w:.2}pt" height="{h:.2}pt" viewBox="0 0 {w:.2} {h:.2}">"#
    ));
    parts.push(format!(r#"<rect width="{w:.2}" height="{h:.2}" fill="white"/>"#));

    if !scene.edges.is_empty() {
        parts.push(format!(
            r#"<g stroke="{black}" stroke-width="{:.2}" stroke-linecap="round">"#,
            scene.edge_width
        ));
        for seg in &scene.edges {
            let (x1, y1) = fmt_pt(scene, seg.from);
            let (x2, y2) = fmt_pt(scene, seg.to);
            parts.push(format!(
                r#"<line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}"/>"#
            ));
        }
        parts.push("</g>".to_string());
    }

    if !scene.arrowheads.is_empty() {
        parts.push(format!(r#"<g fill="{black}">"#));
        for tri in &scene.arrowheads {
            let pts: Vec<String> = tri
                .iter()
                .map(|p| {
                    let (x, y) = fmt_pt(scene, *p);
                    format!("{x},{y}")
                })
                .collect();
            parts.push(format!(r#"<polygon points="{}"/>"#, pts.join(" ")));
        }
        parts.push("</g>".to_string());
    }

    if !scene.nodes.is_empty() {
        parts.push(format!(r#"<g fill="{}">"#, scene.node_color.to_hex()));
        for c in &scene.nodes {
            let (cx, cy) = fmt_pt(scene, c.center);
            parts.push(format!(
                r#"<circle cx="{cx}" cy="{cy}" r="{:.2}"/>"#,
                c.radius
            ));
        }
        parts.push("</g>".to_string());
    }

    if !scene.labels.is_empty() {
        parts.push(format!(
            r#"<g font-family="{FONT_FAMILY}" text-anchor="middle" dominant-baseline="central" fill="{black}">"#
        ));
        for label in &scene.labels {
            let (x, y) = fmt_pt(scene, label.at);
            parts.push(format!(
                r#"<text x="{x}" y="{y}" font-size="{:.2}">{}</text>"#,
                label.size,
                escape(&label.text)
            ));
        }
        parts.push("</g>".to_string());
    }

    parts.push("</svg>".to_string());
    parts.join("\n") + "\n"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{Circle, Label};

    #[test]
    fn flips_y_and_escapes_text() {
        let scene = Scene {
            width: 40.0,
            height: 30.0,
            edge_width: 1.0,
            node_color: Rgb::from_hex("#abdbe3").unwrap(),
            edges: vec![],
            arrowheads: vec![],
            nodes: vec![Circle {
                center: Point { x: 10.0, y: 5.0 },
                radius: 1.5,
            }],
            labels: vec![Label {
                at: Point { x: 20.0, y: 20.0 },
                text: "<1>".to_string(),
                size: 5.0,
            }],
        };
        let svg = render(&scene);
        assert!(svg.starts_with("<svg "));
        assert!(svg.contains(r#"<circle cx="10.00" cy="25.00" r="1.50"/>"#));
        assert!(svg.contains("&lt;1&gt;"));
        assert!(svg.contains(r##"<g fill="#abdbe3">"##));
        assert!(!svg.contains("<line"));
    }
}
