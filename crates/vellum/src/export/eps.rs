//! Encapsulated PostScript serialization backend.
//!
//! PostScript uses a bottom-left origin with y growing upwards, so every
//! y coordinate is flipped against the page rectangle at serialization
//! time. Flipping per coordinate rather than installing a global mirror
//! transform keeps text upright.

use std::fmt::Write as _;
use std::io::Write;

use vellum_core::{
    color::Color,
    draw::{DrawOp, StrokeDefinition, TextDefinition},
    geometry::{Point, Rect},
};

use super::Error;

pub(super) fn write_document(
    ops: &[DrawOp],
    page: Rect,
    destination: &mut dyn Write,
) -> Result<(), Error> {
    let document = render_document(ops, page);
    destination.write_all(document.as_bytes())?;
    Ok(())
}

fn render_document(ops: &[DrawOp], page: Rect) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "%!PS-Adobe-3.0 EPSF-3.0");
    let _ = writeln!(
        out,
        "%%BoundingBox: {} {} {} {}",
        page.x().floor() as i64,
        page.y().floor() as i64,
        page.right().ceil() as i64,
        page.bottom().ceil() as i64,
    );
    let _ = writeln!(out, "%%LanguageLevel: 2");
    let _ = writeln!(out, "%%Pages: 1");
    let _ = writeln!(out, "%%EndComments");

    for op in ops {
        match op {
            DrawOp::FillRect { rect, color } => {
                emit_color(&mut out, color);
                emit_rect(&mut out, *rect, page, "rectfill");
            }
            DrawOp::StrokeRect { rect, stroke } => {
                emit_stroke_state(&mut out, stroke);
                emit_rect(&mut out, *rect, page, "rectstroke");
            }
            DrawOp::StrokeLine { from, to, stroke } => {
                emit_stroke_state(&mut out, stroke);
                let from = flip(*from, page);
                let to = flip(*to, page);
                let _ = writeln!(
                    out,
                    "newpath {} {} moveto {} {} lineto stroke",
                    from.x(),
                    from.y(),
                    to.x(),
                    to.y()
                );
            }
            DrawOp::StrokePath {
                points,
                closed,
                stroke,
            } => {
                emit_stroke_state(&mut out, stroke);
                emit_path(&mut out, points, *closed, page, "stroke");
            }
            DrawOp::FillPath { points, color } => {
                emit_color(&mut out, color);
                emit_path(&mut out, points, true, page, "fill");
            }
            DrawOp::TextLine {
                position,
                content,
                definition,
            } => {
                emit_text(&mut out, *position, content, definition, page);
            }
            DrawOp::PushClip { rect } => {
                let _ = writeln!(out, "gsave");
                emit_rect(&mut out, *rect, page, "rectclip");
            }
            DrawOp::PopClip => {
                let _ = writeln!(out, "grestore");
            }
        }
    }

    let _ = writeln!(out, "showpage");
    let _ = writeln!(out, "%%EOF");
    out
}

// Flips a y-down coordinate into PostScript's y-up page space.
fn flip(point: Point, page: Rect) -> Point {
    Point::new(point.x(), 2.0 * page.y() + page.height() - point.y())
}

fn emit_color(out: &mut String, color: &Color) {
    let [r, g, b] = color.rgb_components();
    let _ = writeln!(out, "{r} {g} {b} setrgbcolor");
}

fn emit_stroke_state(out: &mut String, stroke: &StrokeDefinition) {
    emit_color(out, &stroke.color());
    let _ = writeln!(out, "{} setlinewidth", stroke.width());
    let _ = writeln!(out, "{} setlinecap", stroke.cap().to_code());
    let _ = writeln!(out, "{} setlinejoin", stroke.join().to_code());
    match stroke.style().dash_pattern() {
        Some(pattern) => {
            let entries: Vec<String> = pattern.iter().map(ToString::to_string).collect();
            let _ = writeln!(out, "[{}] 0 setdash", entries.join(" "));
        }
        None => {
            let _ = writeln!(out, "[] 0 setdash");
        }
    }
}

fn emit_rect(out: &mut String, rect: Rect, page: Rect, operator: &str) {
    // rect operators take the bottom-left corner, which after flipping is
    // the rect's y-down bottom edge.
    let corner = flip(Point::new(rect.x(), rect.bottom()), page);
    let _ = writeln!(
        out,
        "{} {} {} {} {operator}",
        corner.x(),
        corner.y(),
        rect.width(),
        rect.height()
    );
}

fn emit_path(out: &mut String, points: &[Point], closed: bool, page: Rect, operator: &str) {
    if points.is_empty() {
        return;
    }
    let _ = write!(out, "newpath");
    for (index, point) in points.iter().enumerate() {
        let flipped = flip(*point, page);
        let verb = if index == 0 { "moveto" } else { "lineto" };
        let _ = write!(out, " {} {} {verb}", flipped.x(), flipped.y());
    }
    if closed {
        let _ = write!(out, " closepath");
    }
    let _ = writeln!(out, " {operator}");
}

fn emit_text(
    out: &mut String,
    position: Point,
    content: &str,
    definition: &TextDefinition,
    page: Rect,
) {
    if let Some(color) = definition.color() {
        emit_color(out, color);
    } else {
        emit_color(out, &Color::default());
    }
    let _ = writeln!(
        out,
        "/{} findfont {} scalefont setfont",
        base_font(definition.font_family()),
        definition.font_size_px()
    );
    let baseline = flip(position, page);
    let _ = writeln!(
        out,
        "{} {} moveto ({}) show",
        baseline.x(),
        baseline.y(),
        escape_text(content)
    );
}

/// Maps a CSS-style family name onto a standard PostScript font.
pub(super) fn base_font(family: &str) -> &'static str {
    let family = family.to_ascii_lowercase();
    if family.contains("mono") || family.contains("courier") {
        "Courier"
    } else if family.contains("serif") && !family.contains("sans") {
        "Times-Roman"
    } else {
        "Helvetica"
    }
}

/// Escapes backslashes and parentheses, the string delimiters of
/// PostScript and PDF literal strings.
pub(super) fn escape_text(content: &str) -> String {
    let mut escaped = String::with_capacity(content.len());
    for c in content.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '(' => escaped.push_str("\\("),
            ')' => escaped.push_str("\\)"),
            other => escaped.push(other),
        }
    }
    escaped
}
