//! Shared drawable stubs for unit tests.

use std::cell::Cell;

use vellum_core::{
    color::Color,
    draw::{Drawable, DrawingContext},
    error::DrawError,
    geometry::{Rect, Size},
};

/// A fixed-size leaf drawable for deterministic layout tests.
pub(crate) struct TestBox {
    preferred: Size,
    bounds: Cell<Rect>,
    alignment_x: Cell<f32>,
    alignment_y: Cell<f32>,
}

impl TestBox {
    pub(crate) fn new(width: f32, height: f32) -> Self {
        Self {
            preferred: Size::new(width, height),
            bounds: Cell::new(Rect::default()),
            alignment_x: Cell::new(0.5),
            alignment_y: Cell::new(0.5),
        }
    }

    pub(crate) fn with_alignment(self, x: f32, y: f32) -> Self {
        self.alignment_x.set(x);
        self.alignment_y.set(y);
        self
    }
}

impl Drawable for TestBox {
    fn bounds(&self) -> Rect {
        self.bounds.get()
    }

    fn set_bounds(&self, bounds: Rect) -> Result<(), DrawError> {
        self.bounds.set(bounds);
        Ok(())
    }

    fn preferred_size(&self) -> Size {
        self.preferred
    }

    fn alignment_x(&self) -> f32 {
        self.alignment_x.get()
    }

    fn alignment_y(&self) -> f32 {
        self.alignment_y.get()
    }

    fn draw(&self, context: &mut DrawingContext) -> Result<(), DrawError> {
        context.fill_rect(self.bounds.get(), Color::default());
        Ok(())
    }
}
