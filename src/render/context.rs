//! The shared per-render context handed to element renderers.

use crate::{geometry::Size, layout::Frame, scale::Scaler};

/// Geometry computed for one render pass, in population order: layout
/// frame, then title metrics, then diagram size and scalers.
///
/// Built in full by the orchestrator before any element renderer runs and
/// handed out by shared reference only — renderers read geometry, they
/// cannot mutate fields owned by earlier stages. Discarded at the end of
/// the render call, never persisted across passes.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext {
    frame: Frame,
    title_rendered: bool,
    title_height: f32,
    diagram: Size,
    scaler_x: Scaler,
    scaler_y: Scaler,
}

impl RenderContext {
    pub(crate) fn new(
        frame: Frame,
        title_rendered: bool,
        title_height: f32,
        diagram: Size,
        scaler_x: Scaler,
        scaler_y: Scaler,
    ) -> Self {
        Self {
            frame,
            title_rendered,
            title_height,
            diagram,
            scaler_x,
            scaler_y,
        }
    }

    /// Returns the layout frame (available area and centering offsets).
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Returns true when a title was rendered in this pass.
    pub fn title_rendered(&self) -> bool {
        self.title_rendered
    }

    /// Returns the title height; meaningful only when a title was rendered.
    pub fn title_height(&self) -> f32 {
        self.title_height
    }

    /// Returns the diagram rectangle after title and padding.
    pub fn diagram(&self) -> Size {
        self.diagram
    }

    /// Returns the grid-to-pixel scaler for the X axis.
    pub fn scaler_x(&self) -> &Scaler {
        &self.scaler_x
    }

    /// Returns the grid-to-pixel scaler for the Y axis.
    pub fn scaler_y(&self) -> &Scaler {
        &self.scaler_y
    }
}
