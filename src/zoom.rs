//! Pan/zoom state and change notification.
//!
//! The host forwards pan/zoom interactions to the canvas as a
//! [`ZoomTransform`]; registered [`ZoomObserver`]s are told to dismiss any
//! hover metadata first, then receive the new transform. Both calls happen
//! exactly once per interaction, in that order.

/// The pan+scale state of the zoomable layer: a translation `(x, y)` and a
/// scale factor `k`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomTransform {
    x: f32,
    y: f32,
    k: f32,
}

impl ZoomTransform {
    /// Creates a transform from a translation and scale factor.
    pub fn new(x: f32, y: f32, k: f32) -> Self {
        Self { x, y, k }
    }

    /// The identity transform: no translation, scale 1.
    pub fn identity() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            k: 1.0,
        }
    }

    /// Returns the horizontal translation.
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the vertical translation.
    pub fn y(self) -> f32 {
        self.y
    }

    /// Returns the scale factor.
    pub fn k(self) -> f32 {
        self.k
    }

    /// Returns true for the identity transform.
    pub fn is_identity(self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.k == 1.0
    }

    /// Renders this transform as an SVG `transform` attribute value.
    pub fn to_svg_attribute(self) -> String {
        format!("translate({}, {}) scale({})", self.x, self.y, self.k)
    }
}

impl Default for ZoomTransform {
    fn default() -> Self {
        Self::identity()
    }
}

/// Subscription interface for pan/zoom changes.
///
/// For every forwarded interaction, [`dismiss_hover_metadata`] is invoked
/// before [`zoom_changed`] so tooltips never float while the layer moves.
///
/// [`dismiss_hover_metadata`]: ZoomObserver::dismiss_hover_metadata
/// [`zoom_changed`]: ZoomObserver::zoom_changed
pub trait ZoomObserver {
    /// Hide any hover metadata currently shown for this observer's elements.
    fn dismiss_hover_metadata(&mut self) {}

    /// The zoom layer's transform changed to `transform`.
    fn zoom_changed(&mut self, transform: &ZoomTransform);
}
