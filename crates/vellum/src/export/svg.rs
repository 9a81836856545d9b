//! SVG serialization backend.
//!
//! Builds an `svg::Document` from recorded drawing commands. Clip regions
//! become `<clipPath>` definitions referenced by nested groups, so the
//! push/pop structure of the command stream maps directly onto the
//! document tree.

use std::fmt::Write as _;
use std::io::Write;

use svg::{
    Document,
    node::element::{ClipPath, Definitions, Group, Line, Path, Rectangle, Text},
};

use vellum_core::{
    apply_stroke,
    color::Color,
    draw::{DrawOp, TextDefinition},
    geometry::{Point, Rect},
};

use super::Error;

pub(super) fn write_document(
    ops: &[DrawOp],
    page: Rect,
    destination: &mut dyn Write,
) -> Result<(), Error> {
    let document = render_document(ops, page);
    write!(destination, "{document}")?;
    Ok(())
}

fn render_document(ops: &[DrawOp], page: Rect) -> Document {
    let mut document = Document::new()
        .set(
            "viewBox",
            format!(
                "{} {} {} {}",
                page.x(),
                page.y(),
                page.width(),
                page.height()
            ),
        )
        .set("width", page.width())
        .set("height", page.height());

    // Innermost group last; groups are opened by PushClip and folded back
    // into their parent on PopClip.
    let mut groups = vec![Group::new()];
    let mut clip_count = 0usize;

    for op in ops {
        match op {
            DrawOp::FillRect { rect, color } => {
                let element = fill_attributes(rect_element(*rect), color);
                push_node(&mut groups, element);
            }
            DrawOp::StrokeRect { rect, stroke } => {
                let element = apply_stroke!(rect_element(*rect), stroke).set("fill", "none");
                push_node(&mut groups, element);
            }
            DrawOp::StrokeLine { from, to, stroke } => {
                let element = Line::new()
                    .set("x1", from.x())
                    .set("y1", from.y())
                    .set("x2", to.x())
                    .set("y2", to.y());
                push_node(&mut groups, apply_stroke!(element, stroke));
            }
            DrawOp::StrokePath {
                points,
                closed,
                stroke,
            } => {
                let element = Path::new()
                    .set("d", path_data(points, *closed))
                    .set("fill", "none");
                push_node(&mut groups, apply_stroke!(element, stroke));
            }
            DrawOp::FillPath { points, color } => {
                let element = Path::new().set("d", path_data(points, true));
                push_node(&mut groups, fill_attributes(element, color));
            }
            DrawOp::TextLine {
                position,
                content,
                definition,
            } => {
                push_node(&mut groups, text_element(*position, content, definition));
            }
            DrawOp::PushClip { rect } => {
                clip_count += 1;
                let clip_id = format!("clip-{clip_count}");
                document = document.add(clip_definition(&clip_id, *rect));
                groups.push(Group::new().set("clip-path", format!("url(#{clip_id})")));
            }
            DrawOp::PopClip => {
                if let Some(group) = groups.pop() {
                    push_node(&mut groups, group);
                }
            }
        }
    }

    // Clip ops are balanced by construction; fold any remainder anyway so
    // recorded content is never dropped.
    while groups.len() > 1 {
        if let Some(group) = groups.pop() {
            push_node(&mut groups, group);
        }
    }
    for group in groups {
        document = document.add(group);
    }
    document
}

fn push_node(groups: &mut Vec<Group>, node: impl svg::Node) {
    if let Some(group) = groups.pop() {
        groups.push(group.add(node));
    }
}

fn rect_element(rect: Rect) -> Rectangle {
    Rectangle::new()
        .set("x", rect.x())
        .set("y", rect.y())
        .set("width", rect.width())
        .set("height", rect.height())
}

fn fill_attributes<T: svg::Node>(mut element: T, color: &Color) -> T {
    element.assign("fill", color.to_string());
    element.assign("fill-opacity", color.alpha());
    element
}

fn text_element(position: Point, content: &str, definition: &TextDefinition) -> Text {
    let mut element = Text::new(content)
        .set("x", position.x())
        .set("y", position.y())
        .set("font-family", definition.font_family())
        .set("font-size", definition.font_size_px());
    if let Some(color) = definition.color() {
        element = fill_attributes(element, color);
    }
    element
}

fn clip_definition(clip_id: &str, rect: Rect) -> Definitions {
    Definitions::new().add(ClipPath::new().set("id", clip_id).add(rect_element(rect)))
}

fn path_data(points: &[Point], closed: bool) -> String {
    let mut data = String::new();
    for (index, point) in points.iter().enumerate() {
        let command = if index == 0 { 'M' } else { 'L' };
        if index > 0 {
            data.push(' ');
        }
        let _ = write!(data, "{command} {} {}", point.x(), point.y());
    }
    if closed && !points.is_empty() {
        data.push_str(" Z");
    }
    data
}

#[cfg(test)]
mod tests {
    use vellum_core::draw::StrokeDefinition;

    use super::*;

    fn render_to_string(ops: &[DrawOp], page: Rect) -> String {
        let mut sink = Vec::new();
        write_document(ops, page, &mut sink).unwrap();
        String::from_utf8(sink).unwrap()
    }

    #[test]
    fn test_document_carries_page_geometry() {
        let page = Rect::new(0.0, 0.0, 320.0, 240.0).unwrap();
        let output = render_to_string(&[], page);

        assert!(output.contains("<svg"));
        assert!(output.contains("viewBox=\"0 0 320 240\""));
        assert!(output.contains("width=\"320\""));
    }

    #[test]
    fn test_fill_rect_serialized() {
        let page = Rect::new(0.0, 0.0, 100.0, 100.0).unwrap();
        let ops = vec![DrawOp::FillRect {
            rect: Rect::new(10.0, 20.0, 30.0, 40.0).unwrap(),
            color: Color::new("red").unwrap(),
        }];
        let output = render_to_string(&ops, page);

        assert!(output.contains("<rect"));
        assert!(output.contains("x=\"10\""));
        assert!(output.contains("fill=\"red\""));
    }

    #[test]
    fn test_stroke_rect_has_no_fill() {
        let page = Rect::new(0.0, 0.0, 100.0, 100.0).unwrap();
        let ops = vec![DrawOp::StrokeRect {
            rect: Rect::new(0.0, 0.0, 50.0, 50.0).unwrap(),
            stroke: StrokeDefinition::default(),
        }];
        let output = render_to_string(&ops, page);

        assert!(output.contains("fill=\"none\""));
        assert!(output.contains("stroke=\"black\""));
    }

    #[test]
    fn test_dashed_stroke_emits_dasharray() {
        let page = Rect::new(0.0, 0.0, 100.0, 100.0).unwrap();
        let ops = vec![DrawOp::StrokeLine {
            from: Point::new(0.0, 0.0),
            to: Point::new(100.0, 0.0),
            stroke: StrokeDefinition::dashed(Color::default(), 1.0),
        }];
        let output = render_to_string(&ops, page);

        assert!(output.contains("stroke-dasharray=\"5,5\""));
    }

    #[test]
    fn test_clip_becomes_clip_path_group() {
        let page = Rect::new(0.0, 0.0, 100.0, 100.0).unwrap();
        let clip = Rect::new(5.0, 5.0, 20.0, 20.0).unwrap();
        let ops = vec![
            DrawOp::PushClip { rect: clip },
            DrawOp::FillRect {
                rect: Rect::new(0.0, 0.0, 100.0, 100.0).unwrap(),
                color: Color::default(),
            },
            DrawOp::PopClip,
        ];
        let output = render_to_string(&ops, page);

        assert!(output.contains("<clipPath id=\"clip-1\""));
        assert!(output.contains("clip-path=\"url(#clip-1)\""));
    }

    #[test]
    fn test_path_data() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
        ];
        assert_eq!(path_data(&points, false), "M 0 0 L 10 0 L 10 10");
        assert_eq!(path_data(&points, true), "M 0 0 L 10 0 L 10 10 Z");
        assert_eq!(path_data(&[], true), "");
    }

    #[test]
    fn test_text_uses_pixel_font_size() {
        let page = Rect::new(0.0, 0.0, 100.0, 100.0).unwrap();
        let definition = TextDefinition::default();
        let ops = vec![DrawOp::TextLine {
            position: Point::new(10.0, 20.0),
            content: "hello".to_string(),
            definition: definition.clone(),
        }];
        let output = render_to_string(&ops, page);

        assert!(output.contains("hello"));
        assert!(output.contains(&format!("font-size=\"{}\"", definition.font_size_px())));
    }
}
