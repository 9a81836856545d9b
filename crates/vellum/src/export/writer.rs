//! Format-agnostic drawable serialization.
//!
//! [`VectorWriter`] runs one export pass: it saves the drawable's bounds,
//! assigns the page rectangle as new bounds (triggering a layout pass),
//! records the drawing commands, serializes them through the selected
//! format backend, and restores the original bounds. Restoration happens
//! even when drawing or serialization fails.

use std::io::Write;

use log::{debug, info, warn};

use vellum_core::{
    color::Color,
    draw::{Drawable, DrawingContext},
    error::DrawError,
    geometry::Rect,
};

use super::{Error, eps, pdf, svg};

/// The vector formats the pipeline can serialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorFormat {
    /// Encapsulated PostScript.
    Eps,
    /// Portable Document Format.
    Pdf,
    /// Scalable Vector Graphics.
    Svg,
}

impl VectorFormat {
    /// Returns the canonical format name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Eps => "EPS",
            Self::Pdf => "PDF",
            Self::Svg => "SVG",
        }
    }

    /// Returns the MIME type documents of this format are served as.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Eps => "application/postscript",
            Self::Pdf => "application/pdf",
            Self::Svg => "image/svg+xml",
        }
    }
}

/// Serializes drawables to a single vector format.
#[derive(Debug, Clone)]
pub struct VectorWriter {
    format: VectorFormat,
    background: Option<Color>,
}

impl VectorWriter {
    /// Creates a writer for the given format with no page background.
    pub fn new(format: VectorFormat) -> Self {
        Self {
            format,
            background: None,
        }
    }

    /// Sets a background color filled across the page before the drawable
    /// is rendered.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Returns the target format.
    pub fn format(&self) -> VectorFormat {
        self.format
    }

    /// Returns the MIME type of the documents this writer produces.
    pub fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }

    /// Serializes `drawable` onto a page of the given size, with the page
    /// origin at (0, 0).
    ///
    /// # Errors
    ///
    /// Fails when the dimensions are negative, the drawable's render pass
    /// fails, or the destination rejects a write.
    pub fn write(
        &self,
        drawable: &dyn Drawable,
        destination: &mut dyn Write,
        width: f32,
        height: f32,
    ) -> Result<(), Error> {
        let page = Rect::new(0.0, 0.0, width, height).map_err(DrawError::from)?;
        self.write_at(drawable, destination, page)
    }

    /// Serializes `drawable` onto an explicit page rectangle.
    ///
    /// The drawable's bounds are set to `page` for the duration of the
    /// pass and restored afterwards, whether or not the pass succeeds.
    pub fn write_at(
        &self,
        drawable: &dyn Drawable,
        destination: &mut dyn Write,
        page: Rect,
    ) -> Result<(), Error> {
        info!(format = self.format.name(); "Exporting drawable");

        let _guard = BoundsGuard::capture(drawable);
        drawable.set_bounds(page)?;

        let mut context = DrawingContext::new(page.size());
        if let Some(background) = self.background {
            context.fill_rect(page, background);
        }
        drawable.draw(&mut context)?;

        let ops = context.into_ops();
        debug!(format = self.format.name(), ops_len = ops.len(); "Drawable recorded");

        match self.format {
            VectorFormat::Eps => eps::write_document(&ops, page, destination),
            VectorFormat::Pdf => pdf::write_document(&ops, page, destination),
            VectorFormat::Svg => svg::write_document(&ops, page, destination),
        }
    }
}

/// Restores a drawable's bounds when dropped, so export passes cannot
/// leave the tree resized on failure.
struct BoundsGuard<'a> {
    drawable: &'a dyn Drawable,
    original: Rect,
}

impl<'a> BoundsGuard<'a> {
    fn capture(drawable: &'a dyn Drawable) -> Self {
        Self {
            drawable,
            original: drawable.bounds(),
        }
    }
}

impl Drop for BoundsGuard<'_> {
    fn drop(&mut self) {
        if let Err(err) = self.drawable.set_bounds(self.original) {
            warn!(err:err; "Failed to restore drawable bounds after export");
        }
    }
}
