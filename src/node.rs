//! Live state nodes and their arena handles.
//!
//! Every node is owned by the chart's arena. Children are referred to by
//! `NodeId`, and so is the parent, which makes the parent link a plain
//! non-owning handle: ownership only ever runs parent -> children.

use crate::handlers::StateHandlers;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;

/// Handle to a node inside one `StateChart`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position in the arena, in build order (the root is 0)
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Structural role of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// Top of the tree; may have children
    Root,
    /// Has a parent and children
    Branch,
    /// Has a parent and no children
    Leaf,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Root => "root",
            Self::Branch => "branch",
            Self::Leaf => "leaf",
        })
    }
}

pub struct StateNode<E> {
    pub(crate) id: String,
    pub(crate) kind: NodeKind,
    pub(crate) parent: Option<NodeId>,
    /// Declaration order
    pub(crate) children: Vec<NodeId>,
    pub(crate) initial: Option<NodeId>,
    /// Last child entered (or the initial child before the first entry)
    pub(crate) current: Option<NodeId>,
    pub(crate) is_active: bool,
    pub(crate) is_lockable: bool,
    pub(crate) handlers: Rc<dyn StateHandlers<E>>,
}

impl<E> StateNode<E> {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn initial(&self) -> Option<NodeId> {
        self.initial
    }

    pub fn current(&self) -> Option<NodeId> {
        self.current
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn is_lockable(&self) -> bool {
        self.is_lockable
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

impl<E> fmt::Debug for StateNode<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateNode")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("parent", &self.parent)
            .field("children", &self.children)
            .field("current", &self.current)
            .field("is_active", &self.is_active)
            .field("is_lockable", &self.is_lockable)
            .finish_non_exhaustive()
    }
}
