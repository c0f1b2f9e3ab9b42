//! Id-addressed storage for layout-node fixtures.

use crate::{LayoutNode, NodeId};
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    Missing { id: NodeId },
    AlreadyAttached { id: NodeId, parent: NodeId },
}

impl std::fmt::Display for TreeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TreeError::Missing { id } => write!(f, "node {id} missing"),
            TreeError::AlreadyAttached { id, parent } => {
                write!(f, "node {id} already attached to parent {parent}")
            }
        }
    }
}

impl std::error::Error for TreeError {}

/// Owns layout nodes and resolves them by id, standing in for the host
/// framework's node registry in tests.
#[derive(Default)]
pub struct LayoutTree {
    nodes: FxHashMap<NodeId, LayoutNode>,
    next_id: NodeId,
}

impl LayoutTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes ownership of `node`, assigns it the next id, and returns it.
    pub fn insert(&mut self, node: LayoutNode) -> NodeId {
        self.next_id += 1;
        let id = self.next_id;
        node.set_node_id(id);
        log::trace!("inserting layout node {id}");
        self.nodes.insert(id, node);
        id
    }

    pub fn get(&self, id: NodeId) -> Result<&LayoutNode, TreeError> {
        self.nodes.get(&id).ok_or(TreeError::Missing { id })
    }

    pub fn get_mut(&mut self, id: NodeId) -> Result<&mut LayoutNode, TreeError> {
        self.nodes.get_mut(&id).ok_or(TreeError::Missing { id })
    }

    /// Attaches `child` under `parent`. A node keeps a single parent; adopt
    /// fails if the child already has one.
    pub fn adopt(&mut self, parent: NodeId, child: NodeId) -> Result<(), TreeError> {
        if !self.nodes.contains_key(&parent) {
            return Err(TreeError::Missing { id: parent });
        }
        let child_node = self.get(child)?;
        if let Some(existing) = child_node.parent() {
            return Err(TreeError::AlreadyAttached {
                id: child,
                parent: existing,
            });
        }
        child_node.set_parent(parent);
        self.get_mut(parent)?.insert_child(child);
        Ok(())
    }

    /// Detaches and returns the node. Its children become parentless roots.
    pub fn remove(&mut self, id: NodeId) -> Result<LayoutNode, TreeError> {
        let node = self.nodes.remove(&id).ok_or(TreeError::Missing { id })?;
        if let Some(parent) = node.parent() {
            if let Some(parent_node) = self.nodes.get_mut(&parent) {
                parent_node.remove_child(id);
            }
        }
        for child in node.children() {
            if let Some(child_node) = self.nodes.get(&child) {
                child_node.clear_parent();
            }
        }
        log::trace!("removed layout node {id}");
        Ok(node)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
