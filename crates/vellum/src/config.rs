//! Configuration types for exporting drawables.
//!
//! All types implement [`serde::Deserialize`] so configuration can be
//! loaded from external sources; missing fields and sections fall back to
//! their defaults.

use serde::Deserialize;

use vellum_core::color::Color;

/// Top-level application configuration combining document and style
/// settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Document configuration section.
    #[serde(default)]
    document: DocumentConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified document and style
    /// configurations.
    pub fn new(document: DocumentConfig, style: StyleConfig) -> Self {
        Self { document, style }
    }

    /// Returns the document configuration.
    pub fn document(&self) -> &DocumentConfig {
        &self.document
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Page dimensions for exported documents.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentConfig {
    /// Page width in device-independent units.
    #[serde(default = "DocumentConfig::default_width")]
    width: f32,

    /// Page height in device-independent units.
    #[serde(default = "DocumentConfig::default_height")]
    height: f32,
}

impl DocumentConfig {
    /// Creates a document configuration with explicit page dimensions.
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the page width.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns the page height.
    pub fn height(&self) -> f32 {
        self.height
    }

    fn default_width() -> f32 {
        800.0
    }

    fn default_height() -> f32 {
        600.0
    }
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            width: Self::default_width(),
            height: Self::default_height(),
        }
    }
}

/// Visual styling configuration for exported documents.
///
/// Fields that are not set fall back to writer defaults.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Background [`Color`] filled behind the drawable, as a color string.
    #[serde(default)]
    background_color: Option<String>,
}

impl StyleConfig {
    /// Returns the parsed background [`Color`], or `None` if no color is
    /// configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_page_dimensions() {
        let config = AppConfig::default();
        assert_eq!(config.document().width(), 800.0);
        assert_eq!(config.document().height(), 600.0);
        assert!(config.style().background_color().unwrap().is_none());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let json = r#"{"document": {"width": 1024.0}}"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.document().width(), 1024.0);
        assert_eq!(config.document().height(), 600.0);
    }

    #[test]
    fn test_background_color_parsing() {
        let json = r#"{"style": {"background_color": "white"}}"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();
        assert!(config.style().background_color().unwrap().is_some());

        let json = r#"{"style": {"background_color": "not-a-color"}}"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();
        assert!(config.style().background_color().is_err());
    }
}
