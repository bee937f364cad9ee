//! Graticule - layout, scaling, and paint-order core for grid-based
//! network diagrams.
//!
//! Given a declarative diagram document and the pixel box of a host
//! container, graticule derives the drawing rectangle (optionally
//! letterboxed to a fixed aspect ratio), builds the grid-to-pixel scalers,
//! delegates element drawing to host-supplied renderers, enforces a fixed
//! visual stacking order over their output, and preserves or resets
//! pan/zoom state across re-renders. What an icon or connection actually
//! looks like is out of scope: drawing is the host's business, consumed
//! through the [`render::element`] contracts.
//!
//! # Examples
//!
//! ```
//! use graticule::{Document, RenderOptions, Renderer, Viewport};
//!
//! let mut renderer = Renderer::default();
//! let document = Document::default();
//!
//! let canvas = renderer
//!     .render(Viewport::new(800.0, 600.0), &document, RenderOptions::new())
//!     .expect("render failed");
//!
//! let svg = canvas.to_svg().to_string();
//! assert!(svg.contains("<svg"));
//! ```
//!
//! Re-rendering with [`RenderOptions::with_keep_zoom`] carries the previous
//! canvas's pan/zoom transform into the new one; without it the transform
//! resets to identity.

pub mod color;
pub mod document;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod render;
pub mod scale;
pub mod zoom;

pub use document::Document;
pub use error::GraticuleError;
pub use geometry::Viewport;
pub use render::{RenderOptions, Renderer};
pub use zoom::{ZoomObserver, ZoomTransform};
