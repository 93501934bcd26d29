//! Render tree infrastructure shared across backends.
//!
//! The [`RenderTree`] is an arena that owns every [`RenderNode`]. Owners
//! refer to nodes through [`NodeId`]s, which carry a generation so that an
//! identifier kept past its node's removal never resolves to whatever node
//! later reuses the slot.

pub mod render;


use core::any::Any;

use tracing::trace;

pub use render::{RenderCtx, RenderNode};

use crate::scene::Scene;

/// Identifier for a render node stored inside the [`RenderTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    index: u32,
    generation: u32,
}

impl NodeId {
    const fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Returns the raw slot index backing this identifier.
    #[must_use]
    pub const fn index(self) -> usize {
        self.index as usize
    }

    /// Returns the slot generation this identifier was issued for.
    #[must_use]
    pub const fn generation(self) -> u32 {
        self.generation
    }
}

/// Small tag distinguishing sibling nodes that play different parts for
/// their owner (for example a shape's fill and its border).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeRole(u8);

impl NodeRole {
    /// Creates a role tag.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Returns the raw tag.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

/// Reason why a node requires processing before the next frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirtyReason {
    /// Children were inserted or removed.
    Structure,
    /// Only paint output changed.
    Paint,
}

/// Entry describing a node that needs work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirtyNode {
    /// The affected node identifier.
    pub id: NodeId,
    /// Why the node became dirty.
    pub reason: DirtyReason,
}

#[derive(Debug)]
struct NodeEntry {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    role: Option<NodeRole>,
    node: Box<dyn RenderNode>,
}

impl NodeEntry {
    fn new(node: Box<dyn RenderNode>, parent: Option<NodeId>) -> Self {
        Self {
            parent,
            children: Vec::new(),
            role: None,
            node,
        }
    }
}

#[derive(Debug)]
struct Slot {
    generation: u32,
    entry: Option<NodeEntry>,
}

impl Slot {
    fn get(&self, id: NodeId) -> Option<&NodeEntry> {
        if self.generation == id.generation {
            self.entry.as_ref()
        } else {
            None
        }
    }

    fn get_mut(&mut self, id: NodeId) -> Option<&mut NodeEntry> {
        if self.generation == id.generation {
            self.entry.as_mut()
        } else {
            None
        }
    }
}

/// Arena storing the render nodes.
#[derive(Debug, Default)]
pub struct RenderTree {
    slots: Vec<Slot>,
    free: Vec<u32>,
    live: usize,
    root: Option<NodeId>,
    dirty: Vec<DirtyNode>,
}

impl RenderTree {
    /// Creates an empty render tree.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            live: 0,
            root: None,
            dirty: Vec::new(),
        }
    }

    /// Replaces the root node of the tree, removing every existing node.
    pub fn replace_root(&mut self, node: Box<dyn RenderNode>) -> NodeId {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.entry.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
                #[allow(clippy::cast_possible_truncation)]
                self.free.push(index as u32);
            }
        }
        self.live = 0;
        self.dirty.clear();

        let root_id = self.allocate(NodeEntry::new(node, None));
        self.root = Some(root_id);
        self.mark_dirty(root_id, DirtyReason::Structure);
        root_id
    }

    /// Adds a child after all existing children of `parent`.
    ///
    /// # Panics
    ///
    /// Panics if the parent node does not exist.
    pub fn append_child(&mut self, parent: NodeId, node: Box<dyn RenderNode>) -> NodeId {
        self.insert_child(parent, node, false)
    }

    /// Adds a child before all existing children of `parent`.
    ///
    /// # Panics
    ///
    /// Panics if the parent node does not exist.
    pub fn prepend_child(&mut self, parent: NodeId, node: Box<dyn RenderNode>) -> NodeId {
        self.insert_child(parent, node, true)
    }

    fn insert_child(&mut self, parent: NodeId, node: Box<dyn RenderNode>, front: bool) -> NodeId {
        assert!(
            self.contains(parent),
            "parent must exist before inserting children"
        );

        let name = node.name();
        let id = self.allocate(NodeEntry::new(node, Some(parent)));
        if let Some(entry) = self.entry_mut(parent) {
            if front {
                entry.children.insert(0, id);
            } else {
                entry.children.push(id);
            }
        }
        trace!(node = name, ?id, ?parent, front, "inserted render node");
        self.mark_dirty(parent, DirtyReason::Structure);
        id
    }

    /// Removes a node together with its whole subtree.
    ///
    /// Returns `false` if `id` does not refer to a live node.
    pub fn remove(&mut self, id: NodeId) -> bool {
        let Some(entry) = self.take_entry(id) else {
            return false;
        };
        trace!(node = entry.node.name(), ?id, "removed render node");

        if let Some(parent) = entry.parent {
            if let Some(parent_entry) = self.entry_mut(parent) {
                parent_entry.children.retain(|child| *child != id);
            }
            self.mark_dirty(parent, DirtyReason::Structure);
        }
        if self.root == Some(id) {
            self.root = None;
        }

        let mut pending = entry.children;
        while let Some(child) = pending.pop() {
            if let Some(child_entry) = self.take_entry(child) {
                pending.extend(child_entry.children);
            }
        }

        let slots = &self.slots;
        self.dirty.retain(|dirty| {
            slots
                .get(dirty.id.index())
                .and_then(|slot| slot.get(dirty.id))
                .is_some()
        });
        true
    }

    /// Returns `true` if `id` refers to a live node.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.entry(id).is_some()
    }

    /// Returns the root node identifier, if one exists.
    #[must_use]
    pub const fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Returns the parent of a node.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.entry(id).and_then(|entry| entry.parent)
    }

    /// Returns the child identifiers for the provided node, in paint order.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.entry(id)
            .map_or(&[], |entry| entry.children.as_slice())
    }

    /// Returns the role tag of a node.
    #[must_use]
    pub fn role(&self, id: NodeId) -> Option<NodeRole> {
        self.entry(id).and_then(|entry| entry.role)
    }

    /// Tags a node with a role. Returns `false` if the node does not exist.
    pub fn set_role(&mut self, id: NodeId, role: NodeRole) -> bool {
        let Some(entry) = self.entry_mut(id) else {
            return false;
        };
        entry.role = Some(role);
        true
    }

    /// Finds the first child of `parent` tagged with `role`.
    #[must_use]
    pub fn find_child(&self, parent: NodeId, role: NodeRole) -> Option<NodeId> {
        self.children(parent)
            .iter()
            .copied()
            .find(|child| self.role(*child) == Some(role))
    }

    /// Visits a node.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&dyn RenderNode> {
        self.entry(id).map(|entry| entry.node.as_ref())
    }

    /// Returns the node as its concrete type, if it is a `T`.
    #[must_use]
    pub fn get<T: RenderNode>(&self, id: NodeId) -> Option<&T> {
        let node: &dyn RenderNode = &*self.entry(id)?.node;
        let node: &dyn Any = node;
        node.downcast_ref()
    }

    /// Returns the node mutably as its concrete type, if it is a `T`.
    #[must_use]
    pub fn get_mut<T: RenderNode>(&mut self, id: NodeId) -> Option<&mut T> {
        let node: &mut dyn RenderNode = &mut *self.entry_mut(id)?.node;
        let node: &mut dyn Any = node;
        node.downcast_mut()
    }

    /// Marks a node as dirty for the provided reason.
    pub fn mark_dirty(&mut self, id: NodeId, reason: DirtyReason) {
        if self
            .dirty
            .iter()
            .any(|entry| entry.id == id && entry.reason == reason)
        {
            return;
        }
        self.dirty.push(DirtyNode { id, reason });
    }

    /// Returns `true` if anything changed since the dirty list was drained.
    #[must_use]
    pub fn has_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    /// Drains all dirty nodes discovered since the previous frame.
    pub fn drain_dirty(&mut self) -> impl Iterator<Item = DirtyNode> + '_ {
        self.dirty.drain(..)
    }

    /// Paints the tree depth-first from the root, parents before children.
    #[must_use]
    pub fn paint(&self) -> Scene {
        let mut ctx = RenderCtx::new();
        if let Some(root) = self.root {
            self.paint_subtree(&mut ctx, root);
        }
        ctx.finish()
    }

    fn paint_subtree(&self, ctx: &mut RenderCtx, id: NodeId) {
        let Some(entry) = self.entry(id) else {
            return;
        };
        entry.node.paint(ctx);
        for child in &entry.children {
            self.paint_subtree(ctx, *child);
        }
    }

    /// Returns the total number of live nodes stored in this tree.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.live
    }

    /// Returns `true` if the tree holds no nodes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.live == 0
    }

    fn entry(&self, id: NodeId) -> Option<&NodeEntry> {
        self.slots.get(id.index())?.get(id)
    }

    fn entry_mut(&mut self, id: NodeId) -> Option<&mut NodeEntry> {
        self.slots.get_mut(id.index())?.get_mut(id)
    }

    fn allocate(&mut self, entry: NodeEntry) -> NodeId {
        self.live += 1;
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.entry = Some(entry);
            return NodeId::new(index, slot.generation);
        }

        #[allow(clippy::cast_possible_truncation)]
        let index = self.slots.len() as u32;
        self.slots.push(Slot {
            generation: 0,
            entry: Some(entry),
        });
        NodeId::new(index, 0)
    }

    fn take_entry(&mut self, id: NodeId) -> Option<NodeEntry> {
        let slot = self.slots.get_mut(id.index())?;
        if slot.generation != id.generation {
            return None;
        }
        let entry = slot.entry.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        self.live -= 1;
        Some(entry)
    }
}
