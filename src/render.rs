//! The render orchestrator.
//!
//! [`Renderer`] owns the collaborator set, the zoom subscriptions, and the
//! canvas for one container. A render pass runs to completion synchronously
//! and rebuilds the canvas from scratch — there is no incremental diffing
//! and no cancellation; callers targeting the same container serialize
//! through `&mut self`.

pub mod canvas;
pub mod context;
pub mod element;
pub mod stacking;

use log::{debug, info, trace};
use svg::node::element::{Anchor, Group, Text};

use crate::{
    color::fill_color_and_opacity,
    document::{Document, TitlePosition},
    error::GraticuleError,
    geometry::Viewport,
    layout,
    scale::Scaler,
    zoom::{ZoomObserver, ZoomTransform},
};

use canvas::Canvas;
use context::RenderContext;
use element::ElementRenderers;
use stacking::{StackedOutput, StackingCategory};

/// Options for one render pass.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    keep_zoom: bool,
    enable_zoom: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            keep_zoom: false,
            enable_zoom: true,
        }
    }
}

impl RenderOptions {
    /// Creates the default options: zoom enabled, transform reset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Carry the previous canvas's pan/zoom transform into the new one.
    pub fn with_keep_zoom(mut self, keep_zoom: bool) -> Self {
        self.keep_zoom = keep_zoom;
        self
    }

    /// Whether the new canvas accepts pan/zoom interactions.
    pub fn with_enable_zoom(mut self, enable_zoom: bool) -> Self {
        self.enable_zoom = enable_zoom;
        self
    }

    /// Returns whether the previous transform is carried over.
    pub fn keep_zoom(&self) -> bool {
        self.keep_zoom
    }

    /// Returns whether pan/zoom interactions are accepted.
    pub fn enable_zoom(&self) -> bool {
        self.enable_zoom
    }
}

/// Renders diagram documents into one host container.
///
/// Owns the canvas exclusively: every render destroys the previous one and
/// builds a replacement. Zoom observers are registered on the renderer and
/// survive re-renders.
#[derive(Default)]
pub struct Renderer {
    elements: ElementRenderers,
    observers: Vec<Box<dyn ZoomObserver>>,
    canvas: Option<Canvas>,
}

impl Renderer {
    /// Creates a renderer with the given collaborator set.
    pub fn new(elements: ElementRenderers) -> Self {
        Self {
            elements,
            observers: Vec::new(),
            canvas: None,
        }
    }

    /// Returns the canvas from the most recent successful render.
    pub fn canvas(&self) -> Option<&Canvas> {
        self.canvas.as_ref()
    }

    /// Registers an observer for pan/zoom changes.
    pub fn subscribe(&mut self, observer: Box<dyn ZoomObserver>) {
        self.observers.push(observer);
    }

    /// Forwards a pan/zoom interaction from the host.
    ///
    /// Updates the zoom layer's transform, tells every observer to dismiss
    /// hover metadata, then notifies every observer of the new transform —
    /// in that order, once per call. Ignored when there is no canvas or the
    /// canvas was rendered with zoom disabled.
    pub fn apply_zoom(&mut self, transform: ZoomTransform) {
        let Some(canvas) = self.canvas.as_mut() else {
            trace!("Zoom ignored: no canvas");
            return;
        };
        if !canvas.zoom_enabled() {
            trace!("Zoom ignored: canvas has zoom disabled");
            return;
        }

        canvas.set_transform(transform);

        // Tooltips must not float while the layer moves: dismiss hover
        // metadata everywhere before announcing the transform.
        for observer in &mut self.observers {
            observer.dismiss_hover_metadata();
        }
        for observer in &mut self.observers {
            observer.zoom_changed(&transform);
        }

        trace!(x = transform.x(), y = transform.y(), k = transform.k(); "Zoom applied");
    }

    /// Renders a document into the container, replacing any previous canvas.
    ///
    /// The sequencing is load-bearing: transform capture, canvas teardown,
    /// layout, background, title, scalers, element renderers, watermark,
    /// stacking. Collaborator failures propagate unchanged; a failed render
    /// leaves no canvas installed.
    ///
    /// # Errors
    ///
    /// [`GraticuleError::Config`] for an uninterpretable fill spec,
    /// [`GraticuleError::DegenerateRange`] if scaler construction fails, and
    /// [`GraticuleError::Render`] for any collaborator failure.
    pub fn render(
        &mut self,
        viewport: Viewport,
        document: &Document,
        options: RenderOptions,
    ) -> Result<&Canvas, GraticuleError> {
        info!(
            width = viewport.width(),
            height = viewport.height(),
            keep_zoom = options.keep_zoom(),
            enable_zoom = options.enable_zoom();
            "Rendering diagram",
        );

        // Capture the previous transform before the canvas is destroyed.
        // A canvas rendered with zoom disabled never carries one, so the
        // restore is gated on the new canvas accepting zoom at all.
        let initial_transform = match (
            options.keep_zoom() && options.enable_zoom(),
            self.canvas.as_ref(),
        ) {
            (true, Some(previous)) => previous.transform(),
            _ => ZoomTransform::identity(),
        };
        self.canvas = None;

        let frame = layout::fit(document.settings(), viewport);

        let (background, background_opacity) =
            fill_color_and_opacity(document.settings().fill())?;

        // Document-space group: margins plus the letterbox centering offset.
        let mut document_group = Group::new().set("class", "document").set(
            "transform",
            format!(
                "translate({}, {})",
                document.settings().margin().left() + frame.h_center_offset(),
                document.settings().margin().top() + frame.v_center_offset(),
            ),
        );

        let title = self
            .elements
            .title()
            .render(&mut document_group, document, &frame)
            .map_err(GraticuleError::render)?;
        debug!(rendered = title.is_rendered(), height = title.height(); "Title pass done");

        let diagram = layout::diagram_size(&frame, title.height(), document.diagram().padding());

        // Grid spans are clamped to one unit so single-row and
        // single-column documents still render, pinned to the low edge.
        let x_span = (document.diagram().columns().max(2) - 1) as f32;
        let y_span = (document.diagram().rows().max(2) - 1) as f32;

        let scaler_x = Scaler::new(0.0, x_span, 0.0, diagram.width(), 1)?;
        let scaler_y = if document.diagram().invert_y() {
            Scaler::new(0.0, y_span, diagram.height(), 0.0, 1)?
        } else {
            Scaler::new(0.0, y_span, 0.0, diagram.height(), 1)?
        };

        let context = RenderContext::new(
            frame,
            title.is_rendered(),
            title.height(),
            diagram,
            scaler_x,
            scaler_y,
        );
        debug!(
            diagram_width = diagram.width(),
            diagram_height = diagram.height();
            "Render context built",
        );

        // Diagram-space group: padding, shifted down by a top-positioned
        // title's height.
        let title_offset = match document.title().position() {
            TitlePosition::Top => title.height(),
            TitlePosition::Bottom => 0.0,
        };
        let mut diagram_group = Group::new().set(
            "transform",
            format!(
                "translate({}, {})",
                document.diagram().padding().left(),
                document.diagram().padding().top() + title_offset,
            ),
        );

        let mut output = StackedOutput::new();
        for renderer in self.elements.in_order() {
            renderer
                .render(document, &context, &mut output)
                .map_err(GraticuleError::render)?;
        }

        // Stacking enforcement: fold the collected nodes into paint order.
        for group in output.into_groups() {
            diagram_group = diagram_group.add(group);
        }
        document_group = document_group.add(diagram_group);

        // The watermark is the document group's last child, above everything.
        if document.settings().watermark() {
            document_group = document_group.add(watermark(&frame));
        }

        let canvas = Canvas::new(
            viewport,
            background,
            background_opacity,
            options.enable_zoom(),
            initial_transform,
            document_group,
        );

        info!("Diagram rendered");
        Ok(self.canvas.insert(canvas))
    }
}

/// The fixed attribution label: horizontally centered, anchored at the
/// bottom of the available area.
fn watermark(frame: &layout::Frame) -> Group {
    let link = Anchor::new()
        .set("href", "https://github.com/orreryworks/graticule")
        .set("target", "_blank")
        .add(svg::node::Text::new("Created with graticule"));

    let label = Text::new("").set("text-anchor", "middle").add(link);

    Group::new()
        .set("class", StackingCategory::Watermark.class_name())
        .set(
            "transform",
            format!(
                "translate({}, {})",
                frame.available().width() / 2.0,
                frame.available().height(),
            ),
        )
        .add(label)
}
