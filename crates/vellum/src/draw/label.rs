//! A leaf drawable rendering a block of styled text.

use std::cell::Cell;

use vellum_core::{
    draw::{Drawable, DrawingContext, TextDefinition, measure_text},
    error::DrawError,
    geometry::{Point, Rect, Size},
};

/// Approximate ascent above the baseline, as a fraction of the pixel font
/// size. Used to position the first baseline inside the text block.
const ASCENT_FACTOR: f32 = 0.8;

/// A self-measuring text label.
///
/// The preferred size comes from real text metrics plus the definition's
/// padding. When the assigned bounds are larger than the preferred size,
/// the text block floats inside them according to the alignment hints.
pub struct Label {
    content: String,
    definition: TextDefinition,
    bounds: Cell<Rect>,
    alignment_x: Cell<f32>,
    alignment_y: Cell<f32>,
}

impl Label {
    /// Creates a label with the default text style.
    pub fn new(content: impl Into<String>) -> Self {
        Self::with_definition(content, TextDefinition::default())
    }

    /// Creates a label with the given text style.
    pub fn with_definition(content: impl Into<String>, definition: TextDefinition) -> Self {
        Self {
            content: content.into(),
            definition,
            bounds: Cell::new(Rect::default()),
            alignment_x: Cell::new(0.5),
            alignment_y: Cell::new(0.5),
        }
    }

    /// Returns the text content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the text style.
    pub fn definition(&self) -> &TextDefinition {
        &self.definition
    }

    /// Sets the horizontal alignment hint, clamped to `[0, 1]`.
    pub fn set_alignment_x(&self, alignment: f32) {
        self.alignment_x.set(alignment.clamp(0.0, 1.0));
    }

    /// Sets the vertical alignment hint, clamped to `[0, 1]`.
    pub fn set_alignment_y(&self, alignment: f32) {
        self.alignment_y.set(alignment.clamp(0.0, 1.0));
    }

    /// Measures the text without padding.
    fn text_size(&self) -> Size {
        measure_text(&self.content, &self.definition)
    }
}

impl Drawable for Label {
    fn bounds(&self) -> Rect {
        self.bounds.get()
    }

    fn set_bounds(&self, bounds: Rect) -> Result<(), DrawError> {
        self.bounds.set(bounds);
        Ok(())
    }

    fn preferred_size(&self) -> Size {
        self.text_size().add_padding(self.definition.padding())
    }

    fn alignment_x(&self) -> f32 {
        self.alignment_x.get()
    }

    fn alignment_y(&self) -> f32 {
        self.alignment_y.get()
    }

    fn draw(&self, context: &mut DrawingContext) -> Result<(), DrawError> {
        let bounds = self.bounds.get();
        let padding = self.definition.padding();
        let block = self.text_size().add_padding(padding);

        // Float the padded text block inside the assigned bounds.
        let slack_x = (bounds.width() - block.width()).max(0.0);
        let slack_y = (bounds.height() - block.height()).max(0.0);
        let block_origin = Point::new(
            bounds.x() + slack_x * self.alignment_x.get(),
            bounds.y() + slack_y * self.alignment_y.get(),
        );

        if let Some(background) = self.definition.background_color() {
            let block_rect = Rect::from_origin_size(block_origin, block)?;
            context.fill_rect(block_rect, *background);
        }

        let line_height = self.definition.line_height_px();
        let ascent = self.definition.font_size_px() * ASCENT_FACTOR;
        let text_origin = Point::new(
            block_origin.x() + padding.left(),
            block_origin.y() + padding.top(),
        );

        for (index, line) in self.content.lines().enumerate() {
            if line.is_empty() {
                continue;
            }
            let baseline = Point::new(
                text_origin.x(),
                text_origin.y() + index as f32 * line_height + ascent,
            );
            context.draw_text_line(baseline, line, &self.definition);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use vellum_core::{color::Color, draw::DrawOp, geometry::Insets};

    use super::*;

    #[test]
    fn test_label_preferred_size_includes_padding() {
        let mut definition = TextDefinition::default();
        definition.set_padding(Insets::new(1.0, 2.0, 3.0, 4.0).unwrap());
        let label = Label::with_definition("hello", definition);

        let text = measure_text("hello", label.definition());
        let preferred = label.preferred_size();
        assert_approx_eq!(f32, preferred.width(), text.width() + 6.0);
        assert_approx_eq!(f32, preferred.height(), text.height() + 4.0);
    }

    #[test]
    fn test_label_preferred_size_before_bounds_assigned() {
        // Queried before any bounds were ever set; must not fail.
        let label = Label::new("hello");
        assert!(label.preferred_size().width() > 0.0);
    }

    #[test]
    fn test_label_draw_emits_one_op_per_line() {
        let label = Label::new("one\ntwo");
        label
            .set_bounds(Rect::new(0.0, 0.0, 200.0, 100.0).unwrap())
            .unwrap();

        let mut context = DrawingContext::new(Size::new(200.0, 100.0));
        label.draw(&mut context).unwrap();

        let lines: Vec<&str> = context
            .ops()
            .iter()
            .map(|op| match op {
                DrawOp::TextLine { content, .. } => content.as_str(),
                other => panic!("unexpected op: {other:?}"),
            })
            .collect();
        assert_eq!(lines, vec!["one", "two"]);
    }

    #[test]
    fn test_label_background_emitted_before_text() {
        let mut definition = TextDefinition::default();
        definition.set_background_color(Some(Color::new("yellow").unwrap()));
        let label = Label::with_definition("hi", definition);
        label
            .set_bounds(Rect::new(0.0, 0.0, 100.0, 50.0).unwrap())
            .unwrap();

        let mut context = DrawingContext::new(Size::new(100.0, 50.0));
        label.draw(&mut context).unwrap();

        assert!(matches!(context.ops()[0], DrawOp::FillRect { .. }));
        assert!(matches!(context.ops()[1], DrawOp::TextLine { .. }));
    }

    #[test]
    fn test_label_alignment_moves_text_block() {
        let left = Label::new("hi");
        left.set_alignment_x(0.0);
        left.set_alignment_y(0.0);
        let right = Label::new("hi");
        right.set_alignment_x(1.0);
        right.set_alignment_y(0.0);

        let bounds = Rect::new(0.0, 0.0, 400.0, 100.0).unwrap();
        left.set_bounds(bounds).unwrap();
        right.set_bounds(bounds).unwrap();

        let mut left_ctx = DrawingContext::new(Size::new(400.0, 100.0));
        let mut right_ctx = DrawingContext::new(Size::new(400.0, 100.0));
        left.draw(&mut left_ctx).unwrap();
        right.draw(&mut right_ctx).unwrap();

        let x_of = |ctx: &DrawingContext| match &ctx.ops()[0] {
            DrawOp::TextLine { position, .. } => position.x(),
            other => panic!("unexpected op: {other:?}"),
        };
        assert!(x_of(&right_ctx) > x_of(&left_ctx));
    }
}
