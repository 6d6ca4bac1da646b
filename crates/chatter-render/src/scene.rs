#![forbid(unsafe_code)]

//! Retained scene graph.
//!
//! A [`Scene`] is an arena of positioned nodes. Every node stores its
//! position relative to its parent; the rendering surface walks the tree and
//! accumulates offsets. Node ids carry a generation so a removed node's id
//! can never alias a later node.
//!
//! # Invariants
//!
//! 1. The root exists for the lifetime of the scene and cannot be removed.
//! 2. A live node's parent is live, and the node appears exactly once in the
//!    parent's child list.
//! 3. Operations on a stale id are no-ops or return `None`; nothing panics.

use chatter_core::geometry::{Point, Size};
use smallvec::SmallVec;

use crate::image::ImageHandle;
use crate::style::TextStyle;

/// Generational handle to a node in a [`Scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    index: u32,
    generation: u32,
}

/// What a node draws.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Pure container; draws nothing itself.
    Group,
    /// An image stretched to `size`.
    Image { handle: ImageHandle, size: Size },
    /// A single-line text run. `width` is the measured advance.
    Label {
        text: String,
        style: TextStyle,
        width: f32,
    },
}

#[derive(Debug, Clone)]
struct Node {
    parent: Option<NodeId>,
    position: Point,
    kind: NodeKind,
    children: SmallVec<[NodeId; 4]>,
}

#[derive(Debug, Clone)]
struct Slot {
    generation: u32,
    node: Option<Node>,
}

/// Arena-backed tree of positioned nodes.
#[derive(Debug, Clone)]
pub struct Scene {
    slots: Vec<Slot>,
    free: Vec<u32>,
    root: NodeId,
    live: usize,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// Create a scene holding only an empty root group at the origin.
    #[must_use]
    pub fn new() -> Self {
        let root = NodeId {
            index: 0,
            generation: 0,
        };
        Self {
            slots: vec![Slot {
                generation: 0,
                node: Some(Node {
                    parent: None,
                    position: Point::ZERO,
                    kind: NodeKind::Group,
                    children: SmallVec::new(),
                }),
            }],
            free: Vec::new(),
            root,
            live: 1,
        }
    }

    /// The root group.
    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of live nodes, including the root.
    #[must_use]
    pub fn len(&self) -> usize {
        self.live
    }

    /// Whether only the root remains.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live == 1
    }

    /// Whether `id` refers to a live node.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    /// Add a group under `parent`. Returns `None` if `parent` is stale.
    pub fn add_group(&mut self, parent: NodeId, position: Point) -> Option<NodeId> {
        self.insert(parent, position, NodeKind::Group)
    }

    /// Add an image under `parent`.
    pub fn add_image(
        &mut self,
        parent: NodeId,
        position: Point,
        size: Size,
        handle: ImageHandle,
    ) -> Option<NodeId> {
        self.insert(parent, position, NodeKind::Image { handle, size })
    }

    /// Add a text label under `parent`.
    pub fn add_label(
        &mut self,
        parent: NodeId,
        position: Point,
        text: impl Into<String>,
        style: TextStyle,
        width: f32,
    ) -> Option<NodeId> {
        self.insert(
            parent,
            position,
            NodeKind::Label {
                text: text.into(),
                style,
                width,
            },
        )
    }

    /// Remove every descendant of `id`, keeping `id` itself.
    pub fn clear_children(&mut self, id: NodeId) {
        let Some(node) = self.node_mut(id) else {
            return;
        };
        let children = std::mem::take(&mut node.children);
        for child in children {
            self.free_subtree(child);
        }
    }

    /// Remove `id` and its whole subtree. The root cannot be removed.
    pub fn remove(&mut self, id: NodeId) {
        if id == self.root {
            return;
        }
        let Some(parent) = self.node(id).and_then(|n| n.parent) else {
            return;
        };
        if let Some(p) = self.node_mut(parent) {
            p.children.retain(|c| *c != id);
        }
        self.free_subtree(id);
    }

    /// Position relative to the parent.
    #[must_use]
    pub fn position(&self, id: NodeId) -> Option<Point> {
        self.node(id).map(|n| n.position)
    }

    /// Move a node relative to its parent.
    pub fn set_position(&mut self, id: NodeId, position: Point) {
        if let Some(node) = self.node_mut(id) {
            node.position = position;
        }
    }

    /// Set only the vertical offset.
    pub fn set_y(&mut self, id: NodeId, y: f32) {
        if let Some(node) = self.node_mut(id) {
            node.position.y = y;
        }
    }

    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|n| n.parent)
    }

    /// Direct children in insertion order. Empty for stale ids.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    #[must_use]
    pub fn kind(&self, id: NodeId) -> Option<&NodeKind> {
        self.node(id).map(|n| &n.kind)
    }

    /// All descendants of `id` in depth-first pre-order (excluding `id`).
    ///
    /// This is paint order: a node is drawn before its children, and
    /// earlier siblings before later ones.
    #[must_use]
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.children(next).iter().rev().copied());
        }
        out
    }

    fn insert(&mut self, parent: NodeId, position: Point, kind: NodeKind) -> Option<NodeId> {
        if !self.contains(parent) {
            return None;
        }
        let node = Node {
            parent: Some(parent),
            position,
            kind,
            children: SmallVec::new(),
        };
        let id = match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index as usize];
                slot.node = Some(node);
                NodeId {
                    index,
                    generation: slot.generation,
                }
            }
            None => {
                let index = u32::try_from(self.slots.len()).ok()?;
                self.slots.push(Slot {
                    generation: 0,
                    node: Some(node),
                });
                NodeId {
                    index,
                    generation: 0,
                }
            }
        };
        self.live += 1;
        if let Some(p) = self.node_mut(parent) {
            p.children.push(id);
        }
        Some(id)
    }

    fn free_subtree(&mut self, id: NodeId) {
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            let Some(slot) = self.slot_mut(next) else {
                continue;
            };
            let Some(node) = slot.node.take() else {
                continue;
            };
            slot.generation = slot.generation.wrapping_add(1);
            self.free.push(next.index);
            self.live -= 1;
            stack.extend(node.children);
        }
    }

    fn slot_mut(&mut self, id: NodeId) -> Option<&mut Slot> {
        self.slots
            .get_mut(id.index as usize)
            .filter(|s| s.generation == id.generation)
    }

    fn node(&self, id: NodeId) -> Option<&Node> {
        self.slots
            .get(id.index as usize)
            .filter(|s| s.generation == id.generation)
            .and_then(|s| s.node.as_ref())
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.slot_mut(id).and_then(|s| s.node.as_mut())
    }
}
