//! The recording drawing context shared by all export backends.
//!
//! A [`DrawingContext`] is created for a single render pass, collects
//! backend-independent drawing commands ([`DrawOp`]), and is consumed by a
//! backend that serializes those commands to its own format. Coordinates
//! are resolved against the current translation offset at record time, so
//! every backend sees identical absolute geometry.
//!
//! Transform and clip state are scoped: [`with_offset`] and [`with_clip`]
//! take closures, guaranteeing that pushed state is popped before the
//! caller resumes.
//!
//! [`with_offset`]: DrawingContext::with_offset
//! [`with_clip`]: DrawingContext::with_clip

use log::trace;

use crate::{
    color::Color,
    draw::{StrokeDefinition, TextDefinition},
    geometry::{Point, Rect, Size},
};

/// A single backend-independent drawing command.
///
/// Geometry is in absolute device-independent coordinates (y-down, origin
/// top-left). Text positions are the left end of the baseline of a single
/// line; multi-line content is recorded as one op per line.
#[derive(Debug, Clone)]
pub enum DrawOp {
    FillRect {
        rect: Rect,
        color: Color,
    },
    StrokeRect {
        rect: Rect,
        stroke: StrokeDefinition,
    },
    StrokeLine {
        from: Point,
        to: Point,
        stroke: StrokeDefinition,
    },
    StrokePath {
        points: Vec<Point>,
        closed: bool,
        stroke: StrokeDefinition,
    },
    FillPath {
        points: Vec<Point>,
        color: Color,
    },
    TextLine {
        position: Point,
        content: String,
        definition: TextDefinition,
    },
    /// Begin clipping to a rectangle. Always balanced by a matching
    /// [`DrawOp::PopClip`]; [`DrawingContext::with_clip`] enforces this.
    PushClip {
        rect: Rect,
    },
    PopClip,
}

/// Abstraction over one vector-graphics surface for the duration of a
/// single render pass.
#[derive(Debug)]
pub struct DrawingContext {
    size: Size,
    ops: Vec<DrawOp>,
    // Stack of cumulative translation offsets; empty means identity.
    offsets: Vec<Point>,
}

impl DrawingContext {
    /// Creates a context for a surface of the given size.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            ops: Vec::new(),
            offsets: Vec::new(),
        }
    }

    /// Returns the surface size this context was created with.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Returns the commands recorded so far.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Consumes the context, yielding the recorded commands.
    pub fn into_ops(self) -> Vec<DrawOp> {
        trace!(ops_len = self.ops.len(); "Drawing context drained");
        self.ops
    }

    fn current_offset(&self) -> Point {
        self.offsets.last().copied().unwrap_or_default()
    }

    fn resolve_point(&self, point: Point) -> Point {
        point.add_point(self.current_offset())
    }

    fn resolve_rect(&self, rect: Rect) -> Rect {
        rect.translate(self.current_offset())
    }

    /// Runs `f` with the given translation applied on top of the current
    /// offset. The offset is popped when `f` returns.
    pub fn with_offset<R>(&mut self, offset: Point, f: impl FnOnce(&mut Self) -> R) -> R {
        let cumulative = self.current_offset().add_point(offset);
        self.offsets.push(cumulative);
        let result = f(self);
        self.offsets.pop();
        result
    }

    /// Runs `f` with drawing clipped to `rect` (resolved against the
    /// current offset). The clip is popped when `f` returns.
    pub fn with_clip<R>(&mut self, rect: Rect, f: impl FnOnce(&mut Self) -> R) -> R {
        let resolved = self.resolve_rect(rect);
        self.ops.push(DrawOp::PushClip { rect: resolved });
        let result = f(self);
        self.ops.push(DrawOp::PopClip);
        result
    }

    /// Records a filled rectangle.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let rect = self.resolve_rect(rect);
        self.ops.push(DrawOp::FillRect { rect, color });
    }

    /// Records a stroked rectangle outline.
    pub fn stroke_rect(&mut self, rect: Rect, stroke: StrokeDefinition) {
        let rect = self.resolve_rect(rect);
        self.ops.push(DrawOp::StrokeRect { rect, stroke });
    }

    /// Records a stroked line segment.
    pub fn stroke_line(&mut self, from: Point, to: Point, stroke: StrokeDefinition) {
        let from = self.resolve_point(from);
        let to = self.resolve_point(to);
        self.ops.push(DrawOp::StrokeLine { from, to, stroke });
    }

    /// Records a stroked polyline, optionally closed into a polygon.
    pub fn stroke_path(&mut self, points: &[Point], closed: bool, stroke: StrokeDefinition) {
        let points = points.iter().map(|p| self.resolve_point(*p)).collect();
        self.ops.push(DrawOp::StrokePath {
            points,
            closed,
            stroke,
        });
    }

    /// Records a filled polygon.
    pub fn fill_path(&mut self, points: &[Point], color: Color) {
        let points = points.iter().map(|p| self.resolve_point(*p)).collect();
        self.ops.push(DrawOp::FillPath { points, color });
    }

    /// Records a single line of text with its baseline starting at
    /// `position`.
    pub fn draw_text_line(&mut self, position: Point, content: &str, definition: &TextDefinition) {
        let position = self.resolve_point(position);
        self.ops.push(DrawOp::TextLine {
            position,
            content: content.to_string(),
            definition: definition.clone(),
        });
    }
}
