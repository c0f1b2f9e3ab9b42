//! Layout-node fixtures for Tapkit
//!
//! A layout node here is the placement state pointer-input code observes: a
//! rectangular region with identity and parent/child links. Measurement and
//! constraint solving belong to a host framework, not to this crate.

mod layout_node;
mod tree;

pub use layout_node::*;
pub use tree::*;

pub mod prelude {
    pub use crate::layout_node::{LayoutNode, NodeId};
    pub use crate::tree::{LayoutTree, TreeError};
}
