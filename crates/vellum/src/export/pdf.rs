//! PDF serialization backend.
//!
//! Emits a minimal single-page PDF 1.4 document: catalog, page tree, one
//! page, one content stream, and one Type1 font object per base font used
//! by the text ops. PDF user space is y-up, so coordinates are flipped
//! against the page rectangle the same way the PostScript backend does.

use std::fmt::Write as _;
use std::io::Write;

use vellum_core::{
    color::Color,
    draw::{DrawOp, StrokeDefinition},
    geometry::{Point, Rect},
};

use super::{
    Error,
    eps::{base_font, escape_text},
};

pub(super) fn write_document(
    ops: &[DrawOp],
    page: Rect,
    destination: &mut dyn Write,
) -> Result<(), Error> {
    let document = render_document(ops, page);
    destination.write_all(&document)?;
    Ok(())
}

fn render_document(ops: &[DrawOp], page: Rect) -> Vec<u8> {
    let fonts = collect_fonts(ops);
    let content = content_stream(ops, page, &fonts);

    let mut out: Vec<u8> = Vec::new();
    let mut offsets: Vec<usize> = Vec::new();
    out.extend_from_slice(b"%PDF-1.4\n");

    push_object(&mut out, &mut offsets, "<< /Type /Catalog /Pages 2 0 R >>");
    push_object(
        &mut out,
        &mut offsets,
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>",
    );

    let mut font_refs = String::new();
    for (index, _) in fonts.iter().enumerate() {
        let _ = write!(font_refs, "/F{} {} 0 R ", index + 1, index + 5);
    }
    push_object(
        &mut out,
        &mut offsets,
        &format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [{} {} {} {}] \
             /Resources << /Font << {font_refs}>> >> /Contents 4 0 R >>",
            page.x(),
            page.y(),
            page.right(),
            page.bottom()
        ),
    );

    // Content stream object, written inline to carry the stream body.
    offsets.push(out.len());
    let _ = write!(
        out,
        "4 0 obj\n<< /Length {} >>\nstream\n{content}\nendstream\nendobj\n",
        content.len()
    );

    for font in &fonts {
        push_object(
            &mut out,
            &mut offsets,
            &format!("<< /Type /Font /Subtype /Type1 /BaseFont /{font} >>"),
        );
    }

    let xref_offset = out.len();
    let _ = write!(out, "xref\n0 {}\n", offsets.len() + 1);
    out.extend_from_slice(b"0000000000 65535 f \n");
    for offset in &offsets {
        let _ = write!(out, "{offset:010} 00000 n \n");
    }
    let _ = write!(
        out,
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n",
        offsets.len() + 1
    );
    out
}

fn push_object(out: &mut Vec<u8>, offsets: &mut Vec<usize>, body: &str) {
    offsets.push(out.len());
    let number = offsets.len();
    let _ = write!(out, "{number} 0 obj\n{body}\nendobj\n");
}

/// Base fonts used by the text ops, in first-use order.
fn collect_fonts(ops: &[DrawOp]) -> Vec<&'static str> {
    let mut fonts = Vec::new();
    for op in ops {
        if let DrawOp::TextLine { definition, .. } = op {
            let font = base_font(definition.font_family());
            if !fonts.contains(&font) {
                fonts.push(font);
            }
        }
    }
    fonts
}

fn flip(point: Point, page: Rect) -> Point {
    Point::new(point.x(), 2.0 * page.y() + page.height() - point.y())
}

fn content_stream(ops: &[DrawOp], page: Rect, fonts: &[&'static str]) -> String {
    let mut out = String::new();
    for op in ops {
        match op {
            DrawOp::FillRect { rect, color } => {
                emit_fill_color(&mut out, color);
                emit_rect(&mut out, *rect, page, "f");
            }
            DrawOp::StrokeRect { rect, stroke } => {
                emit_stroke_state(&mut out, stroke);
                emit_rect(&mut out, *rect, page, "S");
            }
            DrawOp::StrokeLine { from, to, stroke } => {
                emit_stroke_state(&mut out, stroke);
                let from = flip(*from, page);
                let to = flip(*to, page);
                let _ = writeln!(
                    out,
                    "{} {} m {} {} l S",
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
                emit_path(&mut out, points, *closed, page, "S");
            }
            DrawOp::FillPath { points, color } => {
                emit_fill_color(&mut out, color);
                emit_path(&mut out, points, true, page, "f");
            }
            DrawOp::TextLine {
                position,
                content,
                definition,
            } => {
                let color = definition.color().copied().unwrap_or_default();
                emit_fill_color(&mut out, &color);
                let font = base_font(definition.font_family());
                let resource = fonts.iter().position(|f| *f == font).unwrap_or(0) + 1;
                let baseline = flip(*position, page);
                let _ = writeln!(
                    out,
                    "BT /F{resource} {} Tf {} {} Td ({}) Tj ET",
                    definition.font_size_px(),
                    baseline.x(),
                    baseline.y(),
                    escape_text(content)
                );
            }
            DrawOp::PushClip { rect } => {
                let _ = writeln!(out, "q");
                emit_rect(&mut out, *rect, page, "W n");
            }
            DrawOp::PopClip => {
                let _ = writeln!(out, "Q");
            }
        }
    }
    out
}

fn emit_fill_color(out: &mut String, color: &Color) {
    let [r, g, b] = color.rgb_components();
    let _ = writeln!(out, "{r} {g} {b} rg");
}

fn emit_stroke_state(out: &mut String, stroke: &StrokeDefinition) {
    let [r, g, b] = stroke.color().rgb_components();
    let _ = writeln!(out, "{r} {g} {b} RG");
    let _ = writeln!(out, "{} w", stroke.width());
    let _ = writeln!(out, "{} J", stroke.cap().to_code());
    let _ = writeln!(out, "{} j", stroke.join().to_code());
    match stroke.style().dash_pattern() {
        Some(pattern) => {
            let entries: Vec<String> = pattern.iter().map(ToString::to_string).collect();
            let _ = writeln!(out, "[{}] 0 d", entries.join(" "));
        }
        None => {
            let _ = writeln!(out, "[] 0 d");
        }
    }
}

fn emit_rect(out: &mut String, rect: Rect, page: Rect, operator: &str) {
    let corner = flip(Point::new(rect.x(), rect.bottom()), page);
    let _ = writeln!(
        out,
        "{} {} {} {} re {operator}",
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
    for (index, point) in points.iter().enumerate() {
        let flipped = flip(*point, page);
        let verb = if index == 0 { "m" } else { "l" };
        let _ = write!(out, "{} {} {verb} ", flipped.x(), flipped.y());
    }
    if closed {
        let _ = write!(out, "h ");
    }
    let _ = writeln!(out, "{operator}");
}
