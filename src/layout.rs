//! Viewport fitting and diagram-area computation.
//!
//! The layout engine derives the drawing rectangle for one render pass:
//! the container box minus margins, optionally letterboxed to a fixed
//! aspect ratio with the gap centered on the non-binding axis, and finally
//! the diagram rectangle after the title and padding are subtracted.

use log::debug;

use crate::{
    document::{AspectRatio, DocumentSettings},
    geometry::{Insets, Point, Size, Viewport},
};

/// The layout-phase result: the available drawing area and the offsets that
/// center a letterboxed diagram inside the margin-reduced box.
///
/// Immutable once computed; at most one centering offset is ever non-zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    available: Size,
    center_offset: Point,
}

impl Frame {
    /// Returns the available drawing area.
    pub fn available(&self) -> Size {
        self.available
    }

    /// Returns the horizontal centering offset in pixels.
    pub fn h_center_offset(&self) -> f32 {
        self.center_offset.x()
    }

    /// Returns the vertical centering offset in pixels.
    pub fn v_center_offset(&self) -> f32 {
        self.center_offset.y()
    }
}

/// Computes the available drawing area for a document inside a container.
///
/// Without a fixed aspect ratio the whole margin-reduced box is available
/// and both offsets are zero. With a fixed `W:H` ratio, whichever axis
/// would overflow binds the fit and the other axis is centered — classic
/// letterboxing. The comparison is strict, so an exact fit resolves through
/// the width-binding branch with both offsets zero.
pub fn fit(settings: &DocumentSettings, viewport: Viewport) -> Frame {
    let max_available = viewport.size().shrink_by(settings.margin());

    let frame = match settings.aspect_ratio() {
        AspectRatio::None | AspectRatio::Auto => Frame {
            available: max_available,
            center_offset: Point::default(),
        },
        AspectRatio::Ratio(w, h) => {
            let ratio = w / h;
            let height_by_width = max_available.width() / ratio;
            let width_by_height = max_available.height() * ratio;

            if height_by_width > max_available.height() {
                // Height binds: shrink the width and center horizontally.
                Frame {
                    available: Size::new(width_by_height, max_available.height()),
                    center_offset: Point::new(
                        (max_available.width() - width_by_height) / 2.0,
                        0.0,
                    ),
                }
            } else {
                // Width binds: shrink the height and center vertically.
                Frame {
                    available: Size::new(max_available.width(), height_by_width),
                    center_offset: Point::new(
                        0.0,
                        (max_available.height() - height_by_width) / 2.0,
                    ),
                }
            }
        }
    };

    debug!(
        available_width = frame.available.width(),
        available_height = frame.available.height(),
        h_center_offset = frame.center_offset.x(),
        v_center_offset = frame.center_offset.y();
        "Frame computed",
    );

    frame
}

/// Computes the diagram rectangle inside a frame.
///
/// Subtracts the diagram padding on all sides, and the title height when a
/// title consumed vertical space in this pass (zero otherwise).
pub fn diagram_size(frame: &Frame, title_height: f32, padding: Insets) -> Size {
    let padded = frame.available().shrink_by(padding);
    Size::new(padded.width(), padded.height() - title_height)
}
