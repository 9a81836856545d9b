//! Stroke and line-style definitions.
//!
//! One stroke definition system is shared by every drawable and every
//! export backend. Terminology follows SVG/CSS (`stroke-dasharray`,
//! `stroke-linecap`, `stroke-linejoin`); backends that are not SVG map the
//! same properties through [`StrokeStyle::dash_pattern`] and the numeric
//! cap/join codes.

use crate::color::Color;

/// Defines the visual style of a stroke, including dash patterns.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum StrokeStyle {
    /// Solid continuous line (default)
    #[default]
    Solid,
    /// Dashed line with equal dash and gap lengths (5px dash, 5px gap)
    Dashed,
    /// Dotted line with small dots (2px dot, 3px gap)
    Dotted,
    /// Dash-dot pattern (10px dash, 5px gap, 2px dot, 5px gap)
    DashDot,
    /// Custom dash pattern: comma or space-separated dash/gap lengths,
    /// e.g. "10,5,2,3"
    Custom(String),
}

impl StrokeStyle {
    /// Returns the SVG dasharray value for this style, or None for solid lines
    pub fn to_svg_value(&self) -> Option<String> {
        match self {
            Self::Solid => None,
            Self::Dashed => Some("5,5".to_string()),
            Self::Dotted => Some("2,3".to_string()),
            Self::DashDot => Some("10,5,2,5".to_string()),
            Self::Custom(pattern) => Some(pattern.clone()),
        }
    }

    /// Returns the dash pattern as numeric lengths, or None for solid lines.
    ///
    /// Unparseable entries in a custom pattern are skipped. Used by the
    /// PostScript (`setdash`) and PDF (`d`) backends.
    pub fn dash_pattern(&self) -> Option<Vec<f32>> {
        match self {
            Self::Solid => None,
            Self::Dashed => Some(vec![5.0, 5.0]),
            Self::Dotted => Some(vec![2.0, 3.0]),
            Self::DashDot => Some(vec![10.0, 5.0, 2.0, 5.0]),
            Self::Custom(pattern) => {
                let lengths: Vec<f32> = pattern
                    .split([',', ' '])
                    .filter(|part| !part.is_empty())
                    .filter_map(|part| part.trim().parse().ok())
                    .collect();
                if lengths.is_empty() { None } else { Some(lengths) }
            }
        }
    }
}

/// Defines how line endpoints are rendered.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeCap {
    /// Flat cap at the exact endpoint (SVG default)
    #[default]
    Butt,
    /// Rounded cap extending beyond the endpoint by half the stroke width
    Round,
    /// Square cap extending beyond the endpoint by half the stroke width
    Square,
}

impl StrokeCap {
    /// Returns the SVG stroke-linecap value
    pub fn to_svg_value(&self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Round => "round",
            Self::Square => "square",
        }
    }

    /// Returns the PostScript/PDF line cap code (`setlinecap` / `J`).
    pub fn to_code(&self) -> u8 {
        match self {
            Self::Butt => 0,
            Self::Round => 1,
            Self::Square => 2,
        }
    }
}

/// Defines how line corners (joins) are rendered.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeJoin {
    /// Sharp corner with mitered point (SVG default)
    #[default]
    Miter,
    /// Rounded corner
    Round,
    /// Beveled (cut-off) corner
    Bevel,
}

impl StrokeJoin {
    /// Returns the SVG stroke-linejoin value
    pub fn to_svg_value(&self) -> &'static str {
        match self {
            Self::Miter => "miter",
            Self::Round => "round",
            Self::Bevel => "bevel",
        }
    }

    /// Returns the PostScript/PDF line join code (`setlinejoin` / `j`).
    pub fn to_code(&self) -> u8 {
        match self {
            Self::Miter => 0,
            Self::Round => 1,
            Self::Bevel => 2,
        }
    }
}

/// A stroke definition for rendering lines and borders.
///
/// Consolidates color, width, dash style, cap, and join so drawables and
/// backends share one representation.
#[derive(Debug, Clone)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
    style: StrokeStyle,
    cap: StrokeCap,
    join: StrokeJoin,
}

impl StrokeDefinition {
    /// Creates a new stroke with the given color and width, defaulting the
    /// remaining properties (solid, butt cap, miter join).
    pub fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            ..Self::default()
        }
    }

    /// Creates a solid stroke (convenience constructor).
    pub fn solid(color: Color, width: f32) -> Self {
        Self::new(color, width)
    }

    /// Creates a dashed stroke (convenience constructor).
    pub fn dashed(color: Color, width: f32) -> Self {
        let mut stroke = Self::new(color, width);
        stroke.set_style(StrokeStyle::Dashed);
        stroke
    }

    /// Creates a dotted stroke (convenience constructor).
    pub fn dotted(color: Color, width: f32) -> Self {
        let mut stroke = Self::new(color, width);
        stroke.set_style(StrokeStyle::Dotted);
        stroke
    }

    /// Returns the stroke color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the stroke width.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns the stroke style.
    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    /// Returns the stroke cap style.
    pub fn cap(&self) -> StrokeCap {
        self.cap
    }

    /// Returns the stroke join style.
    pub fn join(&self) -> StrokeJoin {
        self.join
    }

    /// Sets the stroke color.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Sets the stroke width.
    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }

    /// Sets the stroke style.
    pub fn set_style(&mut self, style: StrokeStyle) {
        self.style = style;
    }

    /// Sets the stroke cap style.
    pub fn set_cap(&mut self, cap: StrokeCap) {
        self.cap = cap;
    }

    /// Sets the stroke join style.
    pub fn set_join(&mut self, join: StrokeJoin) {
        self.join = join;
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self {
            color: Color::default(),
            width: 1.0,
            style: StrokeStyle::default(),
            cap: StrokeCap::default(),
            join: StrokeJoin::default(),
        }
    }
}

/// Apply all stroke attributes to an SVG element.
///
/// Applies color, opacity, width, line cap, line join, and the dash
/// pattern (if not solid) to any `svg` element builder.
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        let mut elem = $element
            .set("stroke", $stroke.color().to_string())
            .set("stroke-opacity", $stroke.color().alpha())
            .set("stroke-width", $stroke.width())
            .set("stroke-linecap", $stroke.cap().to_svg_value())
            .set("stroke-linejoin", $stroke.join().to_svg_value());

        if let Some(dasharray) = $stroke.style().to_svg_value() {
            elem = elem.set("stroke-dasharray", dasharray);
        }

        elem
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stroke_default() {
        let stroke = StrokeDefinition::default();
        assert_eq!(stroke.width(), 1.0);
        assert_eq!(stroke.color().to_string(), "black");
        assert_eq!(*stroke.style(), StrokeStyle::Solid);
        assert_eq!(stroke.cap(), StrokeCap::Butt);
        assert_eq!(stroke.join(), StrokeJoin::Miter);
    }

    #[test]
    fn test_stroke_constructors() {
        let color = Color::new("red").unwrap();

        let solid = StrokeDefinition::solid(color, 2.0);
        assert_eq!(solid.width(), 2.0);
        assert_eq!(*solid.style(), StrokeStyle::Solid);

        let dashed = StrokeDefinition::dashed(color, 1.5);
        assert_eq!(*dashed.style(), StrokeStyle::Dashed);

        let dotted = StrokeDefinition::dotted(color, 1.0);
        assert_eq!(*dotted.style(), StrokeStyle::Dotted);
    }

    #[test]
    fn test_stroke_style_dasharray() {
        assert_eq!(StrokeStyle::Solid.to_svg_value(), None);
        assert_eq!(StrokeStyle::Dashed.to_svg_value(), Some("5,5".to_string()));
        assert_eq!(StrokeStyle::Dotted.to_svg_value(), Some("2,3".to_string()));

        let custom = StrokeStyle::Custom("15,3,3,3".to_string());
        assert_eq!(custom.to_svg_value(), Some("15,3,3,3".to_string()));
    }

    #[test]
    fn test_stroke_style_dash_pattern() {
        assert_eq!(StrokeStyle::Solid.dash_pattern(), None);
        assert_eq!(StrokeStyle::Dashed.dash_pattern(), Some(vec![5.0, 5.0]));
        assert_eq!(
            StrokeStyle::DashDot.dash_pattern(),
            Some(vec![10.0, 5.0, 2.0, 5.0])
        );
        assert_eq!(
            StrokeStyle::Custom("4, 2 1".to_string()).dash_pattern(),
            Some(vec![4.0, 2.0, 1.0])
        );
        assert_eq!(StrokeStyle::Custom("nonsense".to_string()).dash_pattern(), None);
    }

    #[test]
    fn test_cap_and_join_codes() {
        assert_eq!(StrokeCap::Butt.to_code(), 0);
        assert_eq!(StrokeCap::Round.to_code(), 1);
        assert_eq!(StrokeCap::Square.to_code(), 2);
        assert_eq!(StrokeJoin::Miter.to_code(), 0);
        assert_eq!(StrokeJoin::Round.to_code(), 1);
        assert_eq!(StrokeJoin::Bevel.to_code(), 2);
    }
}
