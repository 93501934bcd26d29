//! Frame driver owning the render tree, the items drawn into it and the
//! backend that presents it.

use quire_core::Rect;
use quire_render::{
    FrameResult, GroupNode, Mirror, NodeId, RenderBackend, RenderTree, TextureAtlas, TextureId,
    TextureNode,
};
use tracing::{debug, trace};

use crate::item::ShapeItem;

/// Handle to an item attached to a [`ShapeHost`].
///
/// Slots of detached items are reused; the generation keeps an old handle
/// from reaching the item that took its slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId {
    index: usize,
    generation: u32,
}

#[derive(Debug)]
struct Attached {
    item: ShapeItem,
    node: NodeId,
}

#[derive(Debug, Default)]
struct ItemSlot {
    generation: u32,
    attached: Option<Attached>,
}

/// Drives shape items through a backend, one frame at a time.
///
/// Every attached item gets its own container node under the root, so the
/// fill and border nodes of different items never share a parent.
pub struct ShapeHost<B: RenderBackend> {
    backend: B,
    tree: RenderTree,
    root: NodeId,
    items: Vec<ItemSlot>,
    free: Vec<usize>,
    textures: TextureAtlas,
}

impl<B: RenderBackend> core::fmt::Debug for ShapeHost<B> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ShapeHost")
            .field("backend", &self.backend)
            .field("tree_nodes", &self.tree.len())
            .field("items", &self.len())
            .field("textures", &self.textures.len())
            .finish()
    }
}

impl<B: RenderBackend> ShapeHost<B> {
    /// Creates a host presenting through `backend`.
    #[must_use]
    pub fn new(backend: B) -> Self {
        let mut tree = RenderTree::new();
        let root = tree.replace_root(Box::new(GroupNode));
        Self {
            backend,
            tree,
            root,
            items: Vec::new(),
            free: Vec::new(),
            textures: TextureAtlas::new(),
        }
    }

    /// Adds an item, painted above every item attached before it.
    pub fn attach(&mut self, item: ShapeItem) -> ItemId {
        let node = self.tree.append_child(self.root, Box::new(GroupNode));
        let index = self.free.pop().unwrap_or_else(|| {
            self.items.push(ItemSlot::default());
            self.items.len() - 1
        });
        let slot = &mut self.items[index];
        slot.attached = Some(Attached { item, node });
        let id = ItemId {
            index,
            generation: slot.generation,
        };
        debug!(?id, ?node, "attached shape item");
        id
    }

    /// Removes an item and its nodes, handing the item back.
    pub fn detach(&mut self, id: ItemId) -> Option<ShapeItem> {
        let slot = self.items.get_mut(id.index)?;
        if slot.generation != id.generation {
            return None;
        }
        let Attached { mut item, node } = slot.attached.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        item.release(&mut self.tree);
        self.tree.remove(node);
        debug!(?id, "detached shape item");
        Some(item)
    }

    /// Returns an attached item.
    #[must_use]
    pub fn item(&self, id: ItemId) -> Option<&ShapeItem> {
        self.attached(id).map(|attached| &attached.item)
    }

    /// Returns an attached item for mutation. Changes show on the next frame.
    pub fn item_mut(&mut self, id: ItemId) -> Option<&mut ShapeItem> {
        let slot = self.items.get_mut(id.index)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.attached.as_mut().map(|attached| &mut attached.item)
    }

    /// Container node holding an item's fill and border nodes.
    #[must_use]
    pub fn item_node(&self, id: ItemId) -> Option<NodeId> {
        self.attached(id).map(|attached| attached.node)
    }

    /// Number of attached items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len() - self.free.len()
    }

    /// Returns `true` if no item is attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn attached(&self, id: ItemId) -> Option<&Attached> {
        let slot = self.items.get(id.index)?;
        if slot.generation == id.generation {
            slot.attached.as_ref()
        } else {
            None
        }
    }

    /// Adds a texture blit above everything attached so far.
    ///
    /// The node stays null if `texture` is not in [`textures`](Self::textures).
    pub fn add_texture(&mut self, texture: TextureId, rect: Rect, mirrored: Mirror) -> NodeId {
        let mut node = TextureNode::new();
        node.set_texture(&self.textures, rect, texture, mirrored);
        self.tree.append_child(self.root, Box::new(node))
    }

    /// Runs [`ShapeItem::update_node`] for every item changed since the last
    /// sync.
    pub fn sync(&mut self) {
        for attached in self.items.iter_mut().filter_map(|slot| slot.attached.as_mut()) {
            if attached.item.is_dirty() {
                attached.item.update_node(&mut self.tree, attached.node);
            }
        }
    }

    /// Syncs the items and renders the tree.
    pub fn frame(&mut self) -> FrameResult {
        self.sync();
        let result = self.backend.render(&mut self.tree, &self.textures);
        trace!(?result, nodes = self.tree.len(), "frame finished");
        result
    }

    /// Returns the render tree.
    #[must_use]
    pub const fn tree(&self) -> &RenderTree {
        &self.tree
    }

    /// Returns the texture registry.
    #[must_use]
    pub const fn textures(&self) -> &TextureAtlas {
        &self.textures
    }

    /// Returns the texture registry for registering images.
    pub const fn textures_mut(&mut self) -> &mut TextureAtlas {
        &mut self.textures
    }

    /// Returns a reference to the underlying backend.
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Returns a mutable reference to the underlying backend.
    pub const fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}
