//! Paint-order enforcement for rendered diagram elements.
//!
//! Element renderers run in functional order (grid, icons, notes, groups,
//! connections) but the visual stacking order differs and additionally
//! splits each category's primary shapes from its text labels. Instead of
//! re-parenting nodes after the fact, every node is tagged with a
//! [`StackingCategory`] as it is produced and the collected output is
//! stable-sorted by category once. Earlier categories render furthest back;
//! within a category, insertion order is preserved.
//!
//! The sort is a total, deterministic reordering, so applying it to its own
//! output changes nothing — the pass is idempotent and the final stacking
//! is independent of renderer execution order.

use svg::node::element as svg_element;

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// The fixed visual stacking order, back to front.
///
/// The `Ord` derive uses declaration order: the first variant renders
/// furthest back, the last furthest forward. Labels come after all primary
/// shapes so every label sits above every shape; the watermark outranks
/// everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StackingCategory {
    /// Grid lines - render first, furthest back
    Grids,
    /// Group outlines and fills
    Groups,
    /// Connection lines between icons
    Connections,
    /// Note bodies
    Notes,
    /// Icon shapes - frontmost primary shapes
    Icons,
    /// Icon text labels
    IconLabel,
    /// Connection text labels
    ConnectionLabel,
    /// Group text labels
    GroupLabel,
    /// Attribution watermark - always on top
    Watermark,
}

impl StackingCategory {
    /// Returns the stable class name carried by this category's group.
    pub fn class_name(&self) -> &'static str {
        match self {
            Self::Grids => "grids",
            Self::Groups => "groups",
            Self::Connections => "connections",
            Self::Notes => "notes",
            Self::Icons => "icons",
            Self::IconLabel => "icon-label",
            Self::ConnectionLabel => "connection-label",
            Self::GroupLabel => "group-label",
            Self::Watermark => "watermark",
        }
    }
}

/// Rendered nodes collected by stacking category.
///
/// Element renderers add their output here, tagged with the category it
/// belongs to; [`into_groups`](Self::into_groups) emits one `<g>` per
/// non-empty category in stacking order.
#[derive(Default)]
pub struct StackedOutput {
    items: Vec<(StackingCategory, SvgNode)>,
}

impl StackedOutput {
    /// Creates a new empty `StackedOutput`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node under the given category.
    pub fn add(&mut self, category: StackingCategory, node: SvgNode) {
        self.items.push((category, node));
    }

    /// Returns true when no nodes have been collected.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sorts the collected nodes into stacking order and emits one group
    /// per non-empty category, consuming the output.
    ///
    /// Each group carries the category's stable class name so hosts can
    /// address elements by class in the produced SVG. The sort is stable:
    /// nodes within one category keep their insertion order.
    pub fn into_groups(mut self) -> Vec<svg_element::Group> {
        if self.is_empty() {
            return Vec::new();
        }

        self.items.sort_by_key(|(category, _)| *category);

        let mut result = Vec::new();
        let mut current_category = self.items[0].0;
        let mut current_group =
            svg_element::Group::new().set("class", current_category.class_name());

        for (category, node) in self.items {
            if category != current_category {
                result.push(current_group);
                current_category = category;
                current_group = svg_element::Group::new().set("class", category.class_name());
            }

            current_group = current_group.add(node);
        }

        result.push(current_group);
        result
    }
}
