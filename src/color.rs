//! Color handling for diagram documents.
//!
//! This module provides the [`Color`] type, a wrapper around `DynamicColor`
//! from the color crate, and [`fill_color_and_opacity`] which splits a CSS
//! fill spec into a base color and an optional element opacity.

use std::str::FromStr;

use color::DynamicColor;

use crate::error::GraticuleError;

/// Wrapper around the `DynamicColor` type from the color crate.
///
/// Parses CSS color strings such as `"#ff0000"`, `"rgb(255, 0, 0)"` or
/// `"red"`, and serializes back to a CSS string for SVG attributes.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Color {
    /// Create a new `Color` from a CSS color string.
    ///
    /// # Examples
    ///
    /// ```
    /// use graticule::color::Color;
    ///
    /// let red = Color::new("#ff0000").unwrap();
    /// let blue = Color::new("blue").unwrap();
    /// ```
    pub fn new(color_str: &str) -> Result<Self, GraticuleError> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(GraticuleError::Config(format!(
                "invalid color `{color_str}`: {err}"
            ))),
        }
    }

    /// Creates a new color with the specified alpha value.
    pub fn with_alpha(self, alpha: f32) -> Self {
        Color {
            color: self.color.with_alpha(alpha),
        }
    }

    /// Returns the alpha component of this color, between 0.0 and 1.0.
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.color)
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        Self::from(color.to_string())
    }
}

/// Split a document fill spec into a base color and an optional opacity.
///
/// A spec carrying an alpha channel (`rgba(...)`, `#rrggbbaa`) yields the
/// fully opaque color plus `Some(alpha)`; the caller applies the opacity as
/// a separate attribute. Fully opaque specs yield `None` so no opacity
/// attribute is emitted at all.
///
/// # Errors
///
/// Returns [`GraticuleError::Config`] when the spec is not a valid CSS
/// color.
pub fn fill_color_and_opacity(spec: &str) -> Result<(Color, Option<f32>), GraticuleError> {
    let color = Color::new(spec)?;
    let alpha = color.alpha();

    if alpha < 1.0 {
        Ok((color.with_alpha(1.0), Some(alpha)))
    } else {
        Ok((color, None))
    }
}
