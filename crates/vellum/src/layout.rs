//! Layout policies that partition a container's content area among its
//! children.
//!
//! A [`Layout`] is a stateless policy: given the same content area and the
//! same children (preferred sizes and alignment hints), it assigns the
//! same bounds every time.

use std::fmt;

use vellum_core::{
    draw::DrawableRef,
    error::DrawError,
    geometry::{Rect, Size},
};

mod grid;
mod stacked;

pub use grid::GridLayout;
pub use stacked::StackedLayout;

/// The stacking direction of a [`StackedLayout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A pure policy mapping a content area and children to per-child bounds.
pub trait Layout: fmt::Debug {
    /// Assigns a bounds rectangle to every child within `content_area`.
    ///
    /// Must be idempotent: identical inputs yield identical assignments.
    fn arrange(&self, content_area: Rect, children: &[DrawableRef]) -> Result<(), DrawError>;

    /// Computes the content size this layout needs for the given children.
    ///
    /// Read-only: queries preferred sizes, never mutates child bounds.
    fn preferred_size(&self, children: &[DrawableRef]) -> Size;
}
