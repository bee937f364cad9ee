//! Error types for graticule operations.
//!
//! This module provides the main error type [`GraticuleError`] which wraps
//! the error conditions that can occur while laying out and rendering a
//! diagram.

use thiserror::Error;

/// The main error type for graticule operations.
///
/// Collaborator failures (title or element renderers supplied by the host)
/// are carried unchanged in the `Render` variant; the renderer performs no
/// recovery of its own.
#[derive(Debug, Error)]
pub enum GraticuleError {
    /// A document value could not be interpreted: malformed aspect ratio,
    /// invalid fill color, or an out-of-range setting.
    #[error("configuration error: {0}")]
    Config(String),

    /// A scaler was constructed over an empty input range.
    #[error("degenerate scaler range: input bounds {min} and {max} are equal")]
    DegenerateRange { min: f32, max: f32 },

    /// A host-supplied renderer failed. The underlying error is propagated
    /// unchanged.
    #[error("render error: {0}")]
    Render(Box<dyn std::error::Error>),
}

impl GraticuleError {
    /// Wrap a collaborator failure without altering it.
    pub fn render(err: Box<dyn std::error::Error>) -> Self {
        Self::Render(err)
    }
}
