use indexmap::IndexSet;
use std::cell::Cell;
use tapkit_geometry::{IntPoint, IntSize, Point, Rect};

pub type NodeId = u64;

/// A rectangular region in the UI tree.
///
/// Nodes carry the placement state pointer-input code reads (position, size,
/// bounds) plus identity and parent/child bookkeeping. Placement mutators
/// take `&self`: position and size live in `Cell`s so shared fixtures can be
/// repositioned mid-test, mirroring how the host framework moves nodes
/// without exclusive access.
#[derive(Clone, Debug)]
pub struct LayoutNode {
    pub children: IndexSet<NodeId>,
    position: Cell<IntPoint>,
    size: Cell<IntSize>,
    // Dirty flag for selective re-layout
    needs_layout: Cell<bool>,
    // Parent tracking for bubbling
    parent: Cell<Option<NodeId>>,
    // Node's own ID (set by the arena on insert)
    id: Cell<Option<NodeId>>,
}

impl LayoutNode {
    pub fn new() -> Self {
        Self {
            children: IndexSet::new(),
            position: Cell::new(IntPoint::ZERO),
            size: Cell::new(IntSize::ZERO),
            needs_layout: Cell::new(true), // New nodes need initial placement
            parent: Cell::new(None),
            id: Cell::new(None),
        }
    }

    /// Places the node's top-left corner. Inverted or negative coordinates
    /// are not guarded against.
    pub fn move_to(&self, x: i32, y: i32) {
        self.position.set(IntPoint::new(x, y));
        self.mark_needs_layout();
    }

    /// Sets the node's size. Negative extents are not guarded against.
    pub fn resize(&self, width: i32, height: i32) {
        self.size.set(IntSize::new(width, height));
        self.mark_needs_layout();
    }

    pub fn position(&self) -> IntPoint {
        self.position.get()
    }

    pub fn size(&self) -> IntSize {
        self.size.get()
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.position.get().into(), self.size.get().into())
    }

    pub fn contains(&self, point: Point) -> bool {
        self.bounds().contains(point.x, point.y)
    }

    pub fn mark_needs_layout(&self) {
        self.needs_layout.set(true);
    }

    pub fn needs_layout(&self) -> bool {
        self.needs_layout.get()
    }

    pub fn clear_needs_layout(&self) {
        self.needs_layout.set(false);
    }

    /// Set this node's ID (called by the arena on insert).
    pub fn set_node_id(&self, id: NodeId) {
        self.id.set(Some(id));
    }

    pub fn node_id(&self) -> Option<NodeId> {
        self.id.get()
    }

    /// Set this node's parent (called when the node is added as a child).
    pub fn set_parent(&self, parent: NodeId) {
        self.parent.set(Some(parent));
    }

    /// Clear this node's parent (called when the node is removed).
    pub fn clear_parent(&self) {
        self.parent.set(None);
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent.get()
    }

    pub fn insert_child(&mut self, child: NodeId) {
        self.children.insert(child);
    }

    pub fn remove_child(&mut self, child: NodeId) {
        self.children.shift_remove(&child);
    }

    pub fn children(&self) -> Vec<NodeId> {
        self.children.iter().copied().collect()
    }
}

impl Default for LayoutNode {
    fn default() -> Self {
        Self::new()
    }
}
