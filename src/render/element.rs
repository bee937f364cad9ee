//! Collaborator contracts for element drawing.
//!
//! Graticule owns layout, scaling, and stacking; what an icon, note, or
//! connection actually looks like is the host's business. Hosts implement
//! [`TitleRenderer`] and [`ElementRenderer`] and hand the set to the
//! renderer via [`ElementRenderers`]. Renderer failures propagate to the
//! render caller unchanged.

use svg::node::element::Group;

use crate::{document::Document, layout::Frame, render::context::RenderContext};

use super::stacking::StackedOutput;

/// Error type for collaborator failures; carried through unchanged.
pub type ElementError = Box<dyn std::error::Error>;

/// What the title renderer did: whether a title was drawn, and how much
/// vertical space it consumed.
#[derive(Debug, Clone, Copy, Default)]
pub struct TitleOutcome {
    rendered: bool,
    height: f32,
}

impl TitleOutcome {
    /// A title was drawn with the given height.
    pub fn rendered(height: f32) -> Self {
        Self {
            rendered: true,
            height,
        }
    }

    /// No title was drawn.
    pub fn skipped() -> Self {
        Self::default()
    }

    /// Returns true when a title was drawn.
    pub fn is_rendered(&self) -> bool {
        self.rendered
    }

    /// Returns the consumed height; meaningful only when rendered.
    pub fn height(&self) -> f32 {
        if self.rendered { self.height } else { 0.0 }
    }
}

/// Draws the document title into the document-space group.
pub trait TitleRenderer {
    /// Render the title, if the document has one, and report the outcome.
    fn render(
        &self,
        group: &mut Group,
        document: &Document,
        frame: &Frame,
    ) -> Result<TitleOutcome, ElementError>;
}

/// Draws one class of diagram elements into the shared stacked output.
///
/// Implementations read the context's scalers and diagram dimensions and
/// tag every top-level node they emit with its stacking category; the
/// orchestrator folds the output into the final paint order afterwards.
pub trait ElementRenderer {
    fn render(
        &self,
        document: &Document,
        context: &RenderContext,
        out: &mut StackedOutput,
    ) -> Result<(), ElementError>;
}

/// Renders nothing. The default collaborator for every slot, so a bare
/// renderer still produces a valid (empty) diagram.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopRenderer;

impl TitleRenderer for NoopRenderer {
    fn render(
        &self,
        _group: &mut Group,
        _document: &Document,
        _frame: &Frame,
    ) -> Result<TitleOutcome, ElementError> {
        Ok(TitleOutcome::skipped())
    }
}

impl ElementRenderer for NoopRenderer {
    fn render(
        &self,
        _document: &Document,
        _context: &RenderContext,
        _out: &mut StackedOutput,
    ) -> Result<(), ElementError> {
        Ok(())
    }
}

/// The full collaborator set for one renderer, in the fixed functional
/// invocation order: grid lines, icons, notes, groups, connections.
pub struct ElementRenderers {
    title: Box<dyn TitleRenderer>,
    grid_lines: Box<dyn ElementRenderer>,
    icons: Box<dyn ElementRenderer>,
    notes: Box<dyn ElementRenderer>,
    groups: Box<dyn ElementRenderer>,
    connections: Box<dyn ElementRenderer>,
}

impl Default for ElementRenderers {
    fn default() -> Self {
        Self {
            title: Box::new(NoopRenderer),
            grid_lines: Box::new(NoopRenderer),
            icons: Box::new(NoopRenderer),
            notes: Box::new(NoopRenderer),
            groups: Box::new(NoopRenderer),
            connections: Box::new(NoopRenderer),
        }
    }
}

impl ElementRenderers {
    /// Creates a collaborator set with no-op renderers in every slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title renderer (builder style).
    pub fn with_title(mut self, title: Box<dyn TitleRenderer>) -> Self {
        self.title = title;
        self
    }

    /// Sets the grid-line renderer (builder style).
    pub fn with_grid_lines(mut self, grid_lines: Box<dyn ElementRenderer>) -> Self {
        self.grid_lines = grid_lines;
        self
    }

    /// Sets the icon renderer (builder style).
    pub fn with_icons(mut self, icons: Box<dyn ElementRenderer>) -> Self {
        self.icons = icons;
        self
    }

    /// Sets the note renderer (builder style).
    pub fn with_notes(mut self, notes: Box<dyn ElementRenderer>) -> Self {
        self.notes = notes;
        self
    }

    /// Sets the group renderer (builder style).
    pub fn with_groups(mut self, groups: Box<dyn ElementRenderer>) -> Self {
        self.groups = groups;
        self
    }

    /// Sets the connection renderer (builder style).
    pub fn with_connections(mut self, connections: Box<dyn ElementRenderer>) -> Self {
        self.connections = connections;
        self
    }

    pub(crate) fn title(&self) -> &dyn TitleRenderer {
        self.title.as_ref()
    }

    /// The element renderers in functional invocation order.
    pub(crate) fn in_order(&self) -> [&dyn ElementRenderer; 5] {
        [
            self.grid_lines.as_ref(),
            self.icons.as_ref(),
            self.notes.as_ref(),
            self.groups.as_ref(),
            self.connections.as_ref(),
        ]
    }
}
