//! Concrete drawables: the composing container and the label leaf.

mod container;
mod label;

pub use container::DrawableContainer;
pub use label::Label;

pub use vellum_core::draw::{
    DrawOp, Drawable, DrawableRef, DrawingContext, StrokeCap, StrokeDefinition, StrokeJoin,
    StrokeStyle, TextDefinition, measure_text,
};
