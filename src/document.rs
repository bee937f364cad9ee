//! Document model for grid-based network diagrams.
//!
//! A [`Document`] is the immutable input to a render pass. Every section
//! implements [`serde::Deserialize`] with defaults on all fields, so a
//! document deserialized from any host format (or built programmatically)
//! is complete before layout runs — there is no separate defaulting pass.
//!
//! # Overview
//!
//! - [`Document`] - Top-level input combining page, grid, and title sections.
//! - [`DocumentSettings`] - Page-level settings: margin, aspect ratio, fill, watermark.
//! - [`DiagramSettings`] - Grid dimensions, axis orientation, and padding.
//! - [`TitleSettings`] - Title text and position.
//! - [`AspectRatio`] - The letterboxing policy, parsed from `"none"`, `"auto"`, or `"W:H"`.

use std::str::FromStr;

use serde::Deserialize;

use crate::{error::GraticuleError, geometry::Insets};

/// The aspect-ratio policy for fitting the diagram into its container.
///
/// `None` and `Auto` both mean "use the whole margin-reduced box"; a fixed
/// `Ratio` letterboxes the diagram and centers it on the non-binding axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(try_from = "String")]
pub enum AspectRatio {
    /// No fixed ratio; fill the available box.
    #[default]
    None,
    /// Same as `None`; accepted for document compatibility.
    Auto,
    /// A fixed width:height ratio, both parts positive.
    Ratio(f32, f32),
}

impl AspectRatio {
    /// Returns the width/height quotient for a fixed ratio, `None` otherwise.
    pub fn quotient(self) -> Option<f32> {
        match self {
            Self::None | Self::Auto => None,
            Self::Ratio(w, h) => Some(w / h),
        }
    }
}

impl FromStr for AspectRatio {
    type Err = GraticuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "none" => Ok(Self::None),
            "auto" => Ok(Self::Auto),
            spec => {
                let malformed =
                    || GraticuleError::Config(format!("invalid aspect ratio `{spec}`"));

                let (w, h) = spec.split_once(':').ok_or_else(malformed)?;
                let w: f32 = w.trim().parse().map_err(|_| malformed())?;
                let h: f32 = h.trim().parse().map_err(|_| malformed())?;

                if !w.is_finite() || !h.is_finite() || w <= 0.0 || h <= 0.0 {
                    return Err(GraticuleError::Config(format!(
                        "aspect ratio `{spec}` must have positive width and height"
                    )));
                }

                Ok(Self::Ratio(w, h))
            }
        }
    }
}

impl TryFrom<String> for AspectRatio {
    type Error = GraticuleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Page-level settings for a diagram document.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DocumentSettings {
    /// Margin between the container edge and the drawing area.
    margin: Insets,

    /// Letterboxing policy.
    aspect_ratio: AspectRatio,

    /// Background fill as a CSS color spec; an alpha channel becomes a
    /// separate opacity attribute.
    fill: String,

    /// Whether to append the attribution watermark.
    watermark: bool,
}

impl Default for DocumentSettings {
    fn default() -> Self {
        Self {
            margin: Insets::default(),
            aspect_ratio: AspectRatio::None,
            fill: "white".to_string(),
            watermark: false,
        }
    }
}

impl DocumentSettings {
    /// Creates new page settings.
    pub fn new(margin: Insets, aspect_ratio: AspectRatio, fill: &str, watermark: bool) -> Self {
        Self {
            margin,
            aspect_ratio,
            fill: fill.to_string(),
            watermark,
        }
    }

    /// Returns the page margin.
    pub fn margin(&self) -> Insets {
        self.margin
    }

    /// Returns the letterboxing policy.
    pub fn aspect_ratio(&self) -> AspectRatio {
        self.aspect_ratio
    }

    /// Returns the background fill spec.
    pub fn fill(&self) -> &str {
        &self.fill
    }

    /// Returns whether the attribution watermark is enabled.
    pub fn watermark(&self) -> bool {
        self.watermark
    }
}

/// Grid dimensions and padding for the diagram area.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DiagramSettings {
    /// Number of grid columns.
    columns: u32,

    /// Number of grid rows.
    rows: u32,

    /// When set, row 0 maps to the bottom of the diagram instead of the top.
    invert_y: bool,

    /// Padding between the available area and the grid.
    padding: Insets,
}

impl Default for DiagramSettings {
    fn default() -> Self {
        Self {
            columns: 1,
            rows: 1,
            invert_y: false,
            padding: Insets::default(),
        }
    }
}

impl DiagramSettings {
    /// Creates new diagram settings.
    pub fn new(columns: u32, rows: u32, invert_y: bool, padding: Insets) -> Self {
        Self {
            columns,
            rows,
            invert_y,
            padding,
        }
    }

    /// Returns the number of grid columns.
    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// Returns the number of grid rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Returns whether the Y axis is inverted.
    pub fn invert_y(&self) -> bool {
        self.invert_y
    }

    /// Returns the diagram padding.
    pub fn padding(&self) -> Insets {
        self.padding
    }
}

/// Where the title sits relative to the diagram.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TitlePosition {
    #[default]
    Top,
    Bottom,
}

/// Title text and placement.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TitleSettings {
    /// Title placement; only `Top` consumes diagram height.
    position: TitlePosition,

    /// Title text; a document without text renders no title.
    text: Option<String>,
}

impl TitleSettings {
    /// Creates new title settings.
    pub fn new(position: TitlePosition, text: Option<String>) -> Self {
        Self { position, text }
    }

    /// Returns the title placement.
    pub fn position(&self) -> TitlePosition {
        self.position
    }

    /// Returns the title text, if any.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

/// The immutable input to a render pass.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Document {
    /// Page-level settings; the `document` section of the source format.
    #[serde(rename = "document")]
    settings: DocumentSettings,

    /// Grid settings.
    diagram: DiagramSettings,

    /// Title settings.
    title: TitleSettings,
}

impl Document {
    /// Creates a new document from its three sections.
    pub fn new(settings: DocumentSettings, diagram: DiagramSettings, title: TitleSettings) -> Self {
        Self {
            settings,
            diagram,
            title,
        }
    }

    /// Returns the page-level settings.
    pub fn settings(&self) -> &DocumentSettings {
        &self.settings
    }

    /// Returns the grid settings.
    pub fn diagram(&self) -> &DiagramSettings {
        &self.diagram
    }

    /// Returns the title settings.
    pub fn title(&self) -> &TitleSettings {
        &self.title
    }
}
