//! Read-only views of the active configuration.

use super::StateChart;
use crate::constants::PATH_SEPARATOR;
use crate::node::NodeId;
use std::fmt::Write;

impl<E> StateChart<E> {
    /// Dotted active path from the root, e.g. `"editor.select.idle"`
    pub fn path(&self) -> String {
        self.path_of(self.root())
    }

    /// `node`'s id followed by its current child's path, for as long as the
    /// current child is active
    pub fn path_of(&self, node: NodeId) -> String {
        let mut path = String::new();
        for (i, n) in self.active_chain(node).into_iter().enumerate() {
            if i > 0 {
                path.push(PATH_SEPARATOR);
            }
            path.push_str(&self.nodes[n.0].id);
        }
        path
    }

    /// Handles along the active path, starting with the root
    pub fn active_path(&self) -> Vec<NodeId> {
        self.active_chain(self.root())
    }

    /// Deepest node on the active path, if the root is active
    pub fn active_leaf(&self) -> Option<NodeId> {
        let root = self.root();
        if !self.nodes[root.0].is_active {
            return None;
        }
        self.active_chain(root).last().copied()
    }

    fn active_chain(&self, node: NodeId) -> Vec<NodeId> {
        let mut chain = vec![node];
        let mut cursor = node;
        while let Some(child) = self.nodes[cursor.0].current {
            if !self.nodes[child.0].is_active {
                break;
            }
            chain.push(child);
            cursor = child;
        }
        chain
    }

    /// Resolve a dotted path of child ids starting below the root.
    ///
    /// Uses the same form as `transition` (`"select.translating"`), not the
    /// root-prefixed form returned by `path`.
    pub fn find(&self, path: &str) -> Option<NodeId> {
        self.find_from(self.root(), path)
    }

    pub fn find_from(&self, node: NodeId, path: &str) -> Option<NodeId> {
        path.split(PATH_SEPARATOR)
            .try_fold(node, |state, segment| self.child(state, segment))
    }

    /// Indented dump of the whole tree with kinds and runtime flags.
    ///
    /// ```text
    /// root (root, active)
    ///   idle (leaf, active, current)
    ///   busy (branch)
    /// ```
    pub fn describe(&self) -> String {
        let mut out = String::new();
        self.describe_node(self.root(), 0, &mut out);
        out
    }

    fn describe_node(&self, node: NodeId, depth: usize, out: &mut String) {
        let entry = &self.nodes[node.0];
        let _ = write!(out, "{}{} ({}", "  ".repeat(depth), entry.id, entry.kind);
        if entry.is_active {
            out.push_str(", active");
        }
        if entry
            .parent
            .is_some_and(|parent| self.nodes[parent.0].current == Some(node))
        {
            out.push_str(", current");
        }
        if !entry.is_lockable {
            out.push_str(", unlockable");
        }
        out.push_str(")\n");

        for &child in &entry.children {
            self.describe_node(child, depth + 1, out);
        }
    }
}
