//! The rendered canvas: one SVG tree per container.
//!
//! A [`Canvas`] is rebuilt from scratch on every render pass and owns the
//! result: the document-space content, the background fill, and the current
//! pan/zoom transform. The `svg::Document` is assembled on demand so the
//! zoom layer always carries the live transform rather than whatever was
//! current at render time.

use svg::node::element::Group;

use crate::{color::Color, geometry::Viewport, zoom::ZoomTransform};

/// The output of one render pass for one container.
#[derive(Debug, Clone)]
pub struct Canvas {
    viewport: Viewport,
    background: Color,
    background_opacity: Option<f32>,
    zoom_enabled: bool,
    transform: ZoomTransform,
    content: Group,
}

impl Canvas {
    pub(crate) fn new(
        viewport: Viewport,
        background: Color,
        background_opacity: Option<f32>,
        zoom_enabled: bool,
        transform: ZoomTransform,
        content: Group,
    ) -> Self {
        Self {
            viewport,
            background,
            background_opacity,
            zoom_enabled,
            transform,
            content,
        }
    }

    /// Returns the container box this canvas was rendered for.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Returns the current pan/zoom transform of the zoom layer.
    pub fn transform(&self) -> ZoomTransform {
        self.transform
    }

    /// Returns true when this canvas accepts pan/zoom interactions.
    pub fn zoom_enabled(&self) -> bool {
        self.zoom_enabled
    }

    pub(crate) fn set_transform(&mut self, transform: ZoomTransform) {
        self.transform = transform;
    }

    /// Assembles the SVG document for this canvas.
    ///
    /// Structure: a viewport-sized root with the background fill, a zoom
    /// layer carrying the current transform, and the document-space content
    /// inside it.
    pub fn to_svg(&self) -> svg::Document {
        let mut zoom_layer = Group::new().set("class", "zoom");
        if !self.transform.is_identity() {
            zoom_layer = zoom_layer.set("transform", self.transform.to_svg_attribute());
        }
        zoom_layer = zoom_layer.add(self.content.clone());

        let mut document = svg::Document::new()
            .set("class", "render")
            .set("width", self.viewport.width())
            .set("height", self.viewport.height())
            .set(
                "style",
                format!("background-color: {}", self.background),
            );

        if let Some(opacity) = self.background_opacity {
            document = document.set("opacity", opacity);
        }

        document.add(zoom_layer)
    }
}

impl std::fmt::Display for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_svg())
    }
}
