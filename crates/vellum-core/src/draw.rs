//! The drawable protocol: self-measuring, self-rendering visual components.
//!
//! A [`Drawable`] owns a bounds rectangle, answers a preferred-size query
//! from its intrinsic content, and renders itself into a
//! [`DrawingContext`]. Trees of drawables are shared as
//! [`DrawableRef`] handles; implementations use interior mutability for
//! their bounds so a parent can assign bounds through a shared handle.

use std::rc::Rc;

use crate::{
    error::DrawError,
    geometry::{Rect, Size},
};

mod context;
mod stroke;
mod text;

pub use context::{DrawOp, DrawingContext};
pub use stroke::{StrokeCap, StrokeDefinition, StrokeJoin, StrokeStyle};
pub use text::{TextDefinition, measure_text};

/// A shared handle to a drawable in a tree.
pub type DrawableRef = Rc<dyn Drawable>;

/// A self-measuring, self-rendering visual component.
pub trait Drawable {
    /// Returns the rectangle currently assigned to this drawable.
    fn bounds(&self) -> Rect;

    /// Assigns a new bounds rectangle.
    ///
    /// Containers run their layout pass here, so assignment can fail when
    /// the new bounds cannot accommodate the container's insets.
    fn set_bounds(&self, bounds: Rect) -> Result<(), DrawError>;

    /// Returns the intrinsic desired size of this drawable.
    ///
    /// Computed from content (text metrics, children), never from the
    /// currently assigned bounds. Must be answerable before any bounds
    /// were ever assigned.
    fn preferred_size(&self) -> Size;

    /// Horizontal alignment hint in `[0, 1]` consumed by layouts that
    /// position a drawable inside leftover space. 0 is left, 1 is right.
    fn alignment_x(&self) -> f32 {
        0.5
    }

    /// Vertical alignment hint in `[0, 1]`. 0 is top, 1 is bottom.
    fn alignment_y(&self) -> f32 {
        0.5
    }

    /// Renders this drawable into the given context.
    fn draw(&self, context: &mut DrawingContext) -> Result<(), DrawError>;

    /// Assigns bounds from individual components.
    fn set_bounds_values(
        &self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    ) -> Result<(), DrawError> {
        let bounds = Rect::new(x, y, width, height)?;
        self.set_bounds(bounds)
    }
}
