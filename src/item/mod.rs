//! The shape item: one vector shape drawn through at most two render nodes.
//!
//! A [`ShapeItem`] holds the shape's inputs (path, stroke, fill, geometry,
//! margins) and, once per frame, reconciles them with the render tree in
//! [`ShapeItem::update_node`]. The fill is drawn by a [`FillNode`] that is
//! always the first child of the item's parent node; the outline by a
//! [`BorderNode`] that is always the last. Nodes are created when their
//! style becomes visible, reused while it stays visible and removed when it
//! is hidden or the shape collapses to nothing.

#[cfg(test)]
mod tests;

use kurbo::Affine;
use quire_core::{Color, EdgeInsets, FillStyle, Rect, StrokeStyle, VectorPath};
use quire_render::{BorderNode, DirtyReason, FillNode, NodeId, NodeRole, RenderNode, RenderTree};
use tracing::debug;

use crate::config::ShapeConfig;
use crate::error::Result;
use crate::preset::PresetTable;
use crate::transform::transform_for_rects;
use crate::visibility::{effective_stroke_width, fill_visible, stroke_visible};

/// A filled and stroked vector shape.
///
/// Items are not `Clone`: each one exclusively owns the nodes its handles
/// point at.
#[derive(Debug)]
pub struct ShapeItem {
    path: VectorPath,
    stroke: StrokeStyle,
    fill: FillStyle,
    geometry: Rect,
    margins: EdgeInsets,
    fill_node: Option<NodeId>,
    border_node: Option<NodeId>,
    dirty: bool,
}

impl Default for ShapeItem {
    fn default() -> Self {
        Self::new()
    }
}

impl ShapeItem {
    /// Role tag of the fill node among the parent's children.
    pub const FILL_ROLE: NodeRole = NodeRole::new(0);
    /// Role tag of the border node among the parent's children.
    pub const BORDER_ROLE: NodeRole = NodeRole::new(1);

    /// Creates an item with an empty path, the default stroke and no fill.
    #[must_use]
    pub fn new() -> Self {
        Self {
            path: VectorPath::new(),
            stroke: StrokeStyle::default(),
            fill: FillStyle::default(),
            geometry: Rect::default(),
            margins: EdgeInsets::default(),
            fill_node: None,
            border_node: None,
            dirty: true,
        }
    }

    /// Creates an item using the margins of `config`.
    #[must_use]
    pub fn from_config(config: &ShapeConfig) -> Self {
        Self {
            margins: config.margins,
            ..Self::new()
        }
    }

    // ------------------------------------------------------------------
    // Mutators
    // ------------------------------------------------------------------

    /// Replaces the path.
    pub fn set_path(&mut self, path: VectorPath) {
        if self.path != path {
            self.path = path;
            self.dirty = true;
        }
    }

    /// Replaces the path with parsed SVG path data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Path`](crate::Error::Path) if `data` is malformed; the
    /// current path is kept.
    pub fn set_path_svg(&mut self, data: &str) -> Result<()> {
        self.set_path(VectorPath::from_svg(data)?);
        Ok(())
    }

    /// Replaces the outline style.
    pub fn set_stroke(&mut self, stroke: StrokeStyle) {
        if self.stroke != stroke {
            self.stroke = stroke;
            self.dirty = true;
        }
    }

    /// Fills with a diagonal gradient from `start` to `end`, or a solid color
    /// when both are equal.
    pub fn set_fill(&mut self, start: Color, end: Color) {
        self.set_fill_style(FillStyle::from_colors(start, end));
    }

    /// Like [`set_fill`](Self::set_fill), parsing hex color strings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Color`](crate::Error::Color) if either string is not
    /// a valid color; the current fill is kept.
    pub fn set_fill_hex(&mut self, start: &str, end: &str) -> Result<()> {
        let start = Color::try_from_hex(start)?;
        let end = Color::try_from_hex(end)?;
        self.set_fill(start, end);
        Ok(())
    }

    /// Replaces the fill style.
    pub fn set_fill_style(&mut self, fill: FillStyle) {
        if self.fill != fill {
            self.fill = fill;
            self.dirty = true;
        }
    }

    /// Fills with the first and last stop of a named preset.
    ///
    /// # Errors
    ///
    /// Fails if the preset is unknown or empty; the current fill is kept.
    pub fn set_fill_preset(&mut self, presets: &PresetTable, name: &str) -> Result<()> {
        let fill = presets.two_color(name)?;
        self.set_fill_style(fill);
        Ok(())
    }

    /// Sets the rectangle the item occupies.
    pub fn set_geometry(&mut self, geometry: Rect) {
        if self.geometry != geometry {
            self.geometry = geometry;
            self.dirty = true;
        }
    }

    /// Sets the margins between the geometry and the content rectangle.
    pub fn set_margins(&mut self, margins: impl Into<EdgeInsets>) {
        let margins = margins.into();
        if self.margins != margins {
            self.margins = margins;
            self.dirty = true;
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Current path.
    #[must_use]
    pub const fn path(&self) -> &VectorPath {
        &self.path
    }

    /// Current outline style.
    #[must_use]
    pub const fn stroke(&self) -> &StrokeStyle {
        &self.stroke
    }

    /// Current fill style.
    #[must_use]
    pub const fn fill(&self) -> &FillStyle {
        &self.fill
    }

    /// Rectangle the item occupies.
    #[must_use]
    pub const fn geometry(&self) -> Rect {
        self.geometry
    }

    /// Margins between geometry and content.
    #[must_use]
    pub const fn margins(&self) -> EdgeInsets {
        self.margins
    }

    /// Area the shape is drawn into: the geometry inset by the margins.
    #[must_use]
    pub fn content_rect(&self) -> Rect {
        self.geometry.inset(self.margins)
    }

    /// Returns `true` if an input changed since the last
    /// [`update_node`](Self::update_node).
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Fill node created by the last update, if any.
    #[must_use]
    pub const fn fill_node(&self) -> Option<NodeId> {
        self.fill_node
    }

    /// Border node created by the last update, if any.
    #[must_use]
    pub const fn border_node(&self) -> Option<NodeId> {
        self.border_node
    }

    // ------------------------------------------------------------------
    // Frame update
    // ------------------------------------------------------------------

    /// Brings the fill and border nodes under `parent` in line with the
    /// item's current inputs.
    ///
    /// Runs once per frame. Unchanged inputs leave the tree untouched.
    pub fn update_node(&mut self, tree: &mut RenderTree, parent: NodeId) {
        self.dirty = false;
        reclaim(tree, parent, &mut self.fill_node, "fill");
        reclaim(tree, parent, &mut self.border_node, "border");
        self.fill_node = locate::<FillNode>(tree, parent, Self::FILL_ROLE, self.fill_node);
        self.border_node = locate::<BorderNode>(tree, parent, Self::BORDER_ROLE, self.border_node);

        let content = self.content_rect();
        let bounds = self.path.bounding_rect();
        if content.is_empty() || bounds.is_empty() {
            destroy(tree, &mut self.fill_node, "fill");
            destroy(tree, &mut self.border_node, "border");
            return;
        }

        let outlined = stroke_visible(&self.stroke);

        if fill_visible(&self.fill) {
            let id = *self.fill_node.get_or_insert_with(|| {
                let id = tree.prepend_child(parent, Box::new(FillNode::new()));
                tree.set_role(id, Self::FILL_ROLE);
                debug!(?id, ?parent, "created fill node");
                id
            });

            let area = if outlined {
                let inset = effective_stroke_width(&self.stroke, content, bounds) / 2.0;
                content.inset(EdgeInsets::all(inset))
            } else {
                content
            };
            let transform = transform_for_rects(bounds, area);
            let paint = self.fill.paint_for(content);
            let changed = tree
                .get_mut::<FillNode>(id)
                .is_some_and(|node| node.update(&self.path, transform, paint));
            if changed {
                tree.mark_dirty(id, DirtyReason::Paint);
            }
        } else {
            destroy(tree, &mut self.fill_node, "fill");
        }

        if outlined {
            let id = *self.border_node.get_or_insert_with(|| {
                let id = tree.append_child(parent, Box::new(BorderNode::new()));
                tree.set_role(id, Self::BORDER_ROLE);
                debug!(?id, ?parent, "created border node");
                id
            });

            let transform = transform_for_rects(bounds, content);
            let changed = tree
                .get_mut::<BorderNode>(id)
                .is_some_and(|node| node.update(&self.path, transform, &self.stroke));
            if changed {
                tree.mark_dirty(id, DirtyReason::Paint);
            }
        } else {
            destroy(tree, &mut self.border_node, "border");
        }
    }

    /// Removes the item's nodes from the tree.
    pub fn release(&mut self, tree: &mut RenderTree) {
        destroy(tree, &mut self.fill_node, "fill");
        destroy(tree, &mut self.border_node, "border");
        self.dirty = true;
    }

    /// Transform held by the fill node, if the item has one.
    #[must_use]
    pub fn fill_transform(&self, tree: &RenderTree) -> Option<Affine> {
        self.fill_node
            .and_then(|id| tree.get::<FillNode>(id))
            .map(FillNode::transform)
    }
}

/// Revalidates a node handle, falling back to the first child of `parent`
/// tagged with `role`.
fn locate<T: RenderNode>(
    tree: &RenderTree,
    parent: NodeId,
    role: NodeRole,
    handle: Option<NodeId>,
) -> Option<NodeId> {
    let owned = |id: NodeId| {
        tree.parent(id) == Some(parent) && tree.role(id) == Some(role) && tree.get::<T>(id).is_some()
    };
    handle
        .filter(|id| owned(*id))
        .or_else(|| tree.find_child(parent, role).filter(|id| owned(*id)))
}

/// Removes a node still alive under a parent other than `parent`, so an
/// item that moves never leaves its old nodes behind.
fn reclaim(tree: &mut RenderTree, parent: NodeId, handle: &mut Option<NodeId>, kind: &'static str) {
    if let Some(id) = *handle
        && tree.contains(id)
        && tree.parent(id) != Some(parent)
    {
        destroy(tree, handle, kind);
    }
}

fn destroy(tree: &mut RenderTree, handle: &mut Option<NodeId>, kind: &'static str) {
    if let Some(id) = handle.take()
        && tree.remove(id)
    {
        debug!(?id, kind, "removed node");
    }
}
