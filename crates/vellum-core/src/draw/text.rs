//! Text style and measurement.
//!
//! [`TextDefinition`] configures font properties, colors, and padding for
//! text rendered by drawables. Measurement goes through a process-wide
//! cosmic-text `FontSystem`, giving preferred sizes that account for real
//! font metrics and shaping.

use std::sync::{Mutex, OnceLock};

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping};
use log::info;

use crate::{
    color::Color,
    geometry::{Insets, Size},
};

/// Conversion from font points to device-independent pixels at standard DPI.
const PT_TO_PX: f32 = 1.33;

/// Line height as a multiple of the pixel font size.
const LINE_HEIGHT_FACTOR: f32 = 1.15;

static TEXT_MEASURER: OnceLock<TextMeasurer> = OnceLock::new();

/// Defines the visual style for text elements.
///
/// Multiple text drawables can share the same definition for consistent
/// styling. Padding participates in size calculations even when no
/// background color is set.
#[derive(Debug, Clone)]
pub struct TextDefinition {
    font_family: String,
    font_size: u16,
    color: Option<Color>,
    background_color: Option<Color>,
    padding: Insets,
}

impl TextDefinition {
    /// Creates a new text definition with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the font family (e.g. "Arial", "Times New Roman", "monospace").
    pub fn set_font_family(&mut self, family: &str) {
        self.font_family = family.to_string();
    }

    /// Sets the font size in points.
    pub fn set_font_size(&mut self, size: u16) {
        self.font_size = size;
    }

    /// Sets the text color. `None` uses the backend default (black).
    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }

    /// Sets the background fill painted behind the text, if any.
    pub fn set_background_color(&mut self, color: Option<Color>) {
        self.background_color = color;
    }

    /// Sets the padding around the text content.
    pub fn set_padding(&mut self, padding: Insets) {
        self.padding = padding;
    }

    /// Returns the font family name.
    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    /// Returns the font size in points.
    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    /// Returns the text color, if set.
    pub fn color(&self) -> Option<&Color> {
        self.color.as_ref()
    }

    /// Returns the background color, if set.
    pub fn background_color(&self) -> Option<&Color> {
        self.background_color.as_ref()
    }

    /// Returns the padding configuration.
    pub fn padding(&self) -> Insets {
        self.padding
    }

    /// Returns the font size in device-independent pixels.
    pub fn font_size_px(&self) -> f32 {
        f32::from(self.font_size) * PT_TO_PX
    }

    /// Returns the line height in device-independent pixels.
    pub fn line_height_px(&self) -> f32 {
        self.font_size_px() * LINE_HEIGHT_FACTOR
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self {
            font_family: "sans-serif".to_string(),
            font_size: 12,
            color: None,
            background_color: None,
            padding: Insets::default(),
        }
    }
}

/// Measures the rendered size of `content` under `definition`, excluding
/// padding.
///
/// Empty content measures as zero. Multi-line content measures as the
/// widest line by the summed line heights.
pub fn measure_text(content: &str, definition: &TextDefinition) -> Size {
    TEXT_MEASURER
        .get_or_init(TextMeasurer::new)
        .measure(content, definition)
}

/// Handles text measurement against a reusable `FontSystem` instance,
/// avoiding the expensive recreation cost per measurement.
struct TextMeasurer {
    font_system: Mutex<FontSystem>,
}

impl TextMeasurer {
    fn new() -> Self {
        info!("Initializing FontSystem");
        Self {
            font_system: Mutex::new(FontSystem::new()),
        }
    }

    fn measure(&self, content: &str, definition: &TextDefinition) -> Size {
        if content.is_empty() {
            return Size::default();
        }

        let mut font_system = self.font_system.lock().expect("failed to lock FontSystem");

        let font_size_px = definition.font_size_px();
        let metrics = Metrics::new(font_size_px, definition.line_height_px());

        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);

        let attrs = Attrs::new().family(Family::Name(definition.font_family()));

        // Unlimited buffer so text flows naturally without wrapping.
        buffer.set_size(None, None);
        buffer.set_text(content, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        let mut max_width: f32 = 0.0;
        let mut total_height: f32 = 0.0;
        for run in buffer.layout_runs() {
            max_width = max_width.max(run.line_w);
            total_height += run.line_height;
        }

        // Shaping can fail to produce runs when no fonts are available;
        // fall back to a rough monospace estimate so preferred sizes stay
        // non-degenerate.
        if max_width == 0.0 || total_height == 0.0 {
            let lines: Vec<&str> = content.lines().collect();
            let longest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
            max_width = longest as f32 * font_size_px * 0.6;
            total_height = lines.len() as f32 * definition.line_height_px();
        }

        Size::new(max_width, total_height)
    }
}
