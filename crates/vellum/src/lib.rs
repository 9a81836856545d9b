//! Vellum - A retained-mode 2D drawing library with vector export.
//!
//! Drawables form a tree: containers own ordered children, measure
//! themselves, and partition their bounds among children through pluggable
//! layouts. A finished tree is serialized to EPS, PDF, or SVG through a
//! single recording drawing context, so every backend renders identical
//! geometry.

pub mod config;
pub mod draw;
pub mod export;
pub mod layout;

mod error;

#[cfg(test)]
mod test_support;

pub use vellum_core::{color, geometry};

pub use error::VellumError;

use std::io::Write;

use log::{debug, info};

use config::AppConfig;
use draw::Drawable;
use export::Registry;

/// Facade for exporting drawable trees with a shared configuration.
///
/// Combines an [`AppConfig`] (page dimensions, background style) with a
/// format [`Registry`], so call sites resolve formats by identifier
/// instead of constructing writers by hand.
///
/// # Examples
///
/// ```rust
/// use vellum::{Exporter, config::AppConfig, draw::Label};
///
/// let exporter = Exporter::new(AppConfig::default());
/// let label = Label::new("hello");
///
/// let mut sink = Vec::new();
/// exporter.export(&label, &mut sink, "svg")
///     .expect("Failed to export");
/// ```
pub struct Exporter {
    config: AppConfig,
    registry: Registry,
}

impl Exporter {
    /// Creates an exporter with the given configuration and the built-in
    /// vector formats registered.
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            registry: Registry::with_vector_formats(),
        }
    }

    /// Returns the format registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Returns the format registry for registering additional formats.
    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    /// Exports `drawable` to `destination` in the format named by
    /// `format` (a format name, MIME type, or file extension).
    ///
    /// The page dimensions and background color come from the
    /// configuration. The drawable's bounds are restored after the export
    /// pass.
    ///
    /// # Errors
    ///
    /// Returns `VellumError` when the format is not registered, the
    /// configuration is invalid, the render pass fails, or the
    /// destination rejects a write.
    pub fn export(
        &self,
        drawable: &dyn Drawable,
        destination: &mut dyn Write,
        format: &str,
    ) -> Result<(), VellumError> {
        info!(format = format; "Exporting drawable tree");

        let mut writer = self.registry.writer_for(format)?;
        if let Some(background) = self
            .config
            .style()
            .background_color()
            .map_err(VellumError::Config)?
        {
            writer = writer.with_background(background);
        }

        let document = self.config.document();
        writer.write(drawable, destination, document.width(), document.height())?;

        debug!(format = format; "Export finished");
        Ok(())
    }

    /// Exports `drawable` to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns `VellumError` for configuration or rendering errors.
    pub fn export_svg(&self, drawable: &dyn Drawable) -> Result<String, VellumError> {
        let mut sink = Vec::new();
        self.export(drawable, &mut sink, "svg")?;
        String::from_utf8(sink).map_err(|err| VellumError::Export(Box::new(err)))
    }
}

impl Default for Exporter {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
