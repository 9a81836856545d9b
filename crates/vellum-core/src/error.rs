//! Error types for geometry and rendering operations.

use thiserror::Error;

/// Errors raised when geometric values violate their invariants.
///
/// These indicate caller errors, not transient conditions, and are never
/// retried internally.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    #[error("negative dimensions requested: {width}x{height}")]
    NegativeDimensions { width: f32, height: f32 },

    #[error(
        "bounds {width}x{height} too small for insets requiring at least {min_width}x{min_height}"
    )]
    InsufficientBounds {
        width: f32,
        height: f32,
        min_width: f32,
        min_height: f32,
    },

    #[error("insets must be non-negative: ({top}, {right}, {bottom}, {left})")]
    NegativeInsets {
        top: f32,
        right: f32,
        bottom: f32,
        left: f32,
    },
}

/// Errors raised during layout or render passes.
#[derive(Debug, Error)]
pub enum DrawError {
    /// A container was structurally changed while one of its own layout or
    /// render passes was still running.
    #[error("container changed during an active layout or render pass")]
    ConcurrentMutation,

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error("render error: {0}")]
    Render(String),
}
