//! Half-court geometry and SVG export.

use std::fmt::Write;

use crate::heatmap::{tier::ColorTier, zone::ZoneKey, Heatmap};

pub const COURT_WIDTH: u32 = 500;
pub const COURT_HEIGHT: u32 = 470;

const COURT_BACKGROUND: &str = "#18181b";
const ZONE_STROKE: &str = "#09090b";

/// SVG outline of a zone and the point its label is centered on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneShape {
    pub path: &'static str,
    pub label_x: f64,
    pub label_y: f64,
}

/// Shape of each zone on a 500x470 court with the basket at the bottom.
pub fn zone_shape(zone: ZoneKey) -> ZoneShape {
    let (path, label_x, label_y) = match zone {
        ZoneKey::LeftCorner3 => ("M 0 330 L 44 330 L 44 470 L 0 470 Z", 22.0, 410.0),
        ZoneKey::RightCorner3 => ("M 456 330 L 500 330 L 500 470 L 456 470 Z", 478.0, 410.0),
        ZoneKey::Paint => ("M 170 470 L 170 280 L 330 280 L 330 470", 250.0, 340.0),
        ZoneKey::RestrictedArea => (
            "M 210 417.5 A 40 40 0 0 1 290 417.5 L 290 470 L 210 470 Z",
            250.0,
            440.0,
        ),
        ZoneKey::MidRange => (
            "M 44 470 L 44 330 Q 250 100 456 330 L 456 470 L 330 470 L 330 280 L 170 280 L 170 470 Z",
            250.0,
            250.0,
        ),
        ZoneKey::AboveBreak3 => (
            "M 0 330 L 44 330 Q 250 100 456 330 L 500 330 L 500 0 L 0 0 Z",
            250.0,
            100.0,
        ),
    };
    ZoneShape {
        path,
        label_x,
        label_y,
    }
}

/// Draw order: the large outer zones first so inner zones sit on top.
const DRAW_ORDER: [ZoneKey; 6] = [
    ZoneKey::AboveBreak3,
    ZoneKey::MidRange,
    ZoneKey::LeftCorner3,
    ZoneKey::RightCorner3,
    ZoneKey::Paint,
    ZoneKey::RestrictedArea,
];

/// Render the heatmap as a standalone SVG document.
pub fn render_svg(heatmap: &Heatmap) -> String {
    let mut svg = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}">"#,
        w = COURT_WIDTH,
        h = COURT_HEIGHT
    );
    let _ = writeln!(
        svg,
        r#"  <rect width="{}" height="{}" fill="{}" />"#,
        COURT_WIDTH, COURT_HEIGHT, COURT_BACKGROUND
    );

    svg.push_str("  <g opacity=\"0.9\">\n");
    for zone in DRAW_ORDER {
        let cell = heatmap.cell(zone);
        let _ = writeln!(
            svg,
            r#"    <path d="{}" fill="{}" stroke="{}" stroke-width="2" />"#,
            zone_shape(zone).path,
            cell.map_or(ColorTier::Neutral.hex(), |c| c.tier.hex()),
            ZONE_STROKE
        );
    }
    svg.push_str("  </g>\n");

    svg.push_str("  <g fill=\"none\" stroke=\"#000000\" stroke-width=\"2\">\n");
    svg.push_str("    <circle cx=\"250\" cy=\"417.5\" r=\"7.5\" stroke=\"#f59e0b\" />\n");
    svg.push_str("    <path d=\"M 44 470 L 44 330 Q 250 100 456 330 L 456 470\" />\n");
    svg.push_str("    <rect x=\"170\" y=\"280\" width=\"160\" height=\"190\" />\n");
    svg.push_str("  </g>\n");

    svg.push_str("  <g font-family=\"sans-serif\" text-anchor=\"middle\">\n");
    for cell in &heatmap.cells {
        let Some(label) = &cell.label else {
            continue;
        };
        let shape = zone_shape(cell.zone);
        let line_height = 12.0;
        let box_height = line_height * label.lines.len() as f64 + 8.0;
        let top = shape.label_y - box_height / 2.0;
        let _ = writeln!(
            svg,
            r##"    <rect x="{}" y="{}" width="48" height="{}" fill="white" rx="4" stroke="#d4d4d8" stroke-width="1" />"##,
            shape.label_x - 24.0,
            top,
            box_height
        );
        for (i, line) in label.lines.iter().enumerate() {
            let _ = writeln!(
                svg,
                r#"    <text x="{}" y="{}" font-size="10" font-weight="800" fill="black">{}</text>"#,
                shape.label_x,
                top + 4.0 + line_height * (i as f64 + 1.0) - 2.0,
                escape_text(line)
            );
        }
    }
    svg.push_str("  </g>\n");
    svg.push_str("</svg>\n");
    svg
}

/// Escape label text for an SVG text node.
fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
