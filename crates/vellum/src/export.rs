//! Vector export pipeline.
//!
//! A drawable tree is serialized by a [`VectorWriter`], which replays the
//! tree's recorded drawing commands through one of the format backends
//! (EPS, PDF, or SVG). Writers are looked up through a [`Registry`] keyed
//! by format name, MIME type, or file extension.

pub mod capabilities;

mod eps;
mod pdf;
mod svg;
mod writer;

use thiserror::Error;

use vellum_core::error::DrawError;

pub use capabilities::{Capabilities, Registry};
pub use writer::{VectorFormat, VectorWriter};

/// Errors produced by the export pipeline.
#[derive(Debug, Error)]
pub enum Error {
    /// No registered writer matches the requested format identifier.
    #[error("unsupported format `{requested}` (available: {})", available.join(", "))]
    UnsupportedFormat {
        requested: String,
        available: Vec<String>,
    },

    #[error("Draw error: {0}")]
    Draw(#[from] DrawError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
