//! Activation and deactivation of nodes.
//!
//! Entering is pre-order (the node's own `on_enter` runs before its initial
//! child is entered); exiting is post-order (the active child exits before
//! the node's own `on_exit`). A leaf's cleanup therefore always runs before
//! any ancestor's.

use super::StateChart;
use crate::context::StateContext;
use crate::error::StateResult;
use crate::handlers::{HookResult, StateHandlers, TransitionInfo};
use crate::node::NodeId;
use std::rc::Rc;
use tracing::debug;

impl<E: 'static> StateChart<E> {
    /// Enter the root, activating its initial chain
    pub fn enter(&mut self, editor: &mut E, info: &TransitionInfo, from: &str) -> StateResult<()> {
        self.enter_node(editor, self.root(), info, from)
    }

    /// Exit the root and everything active below it
    pub fn exit(&mut self, editor: &mut E, info: &TransitionInfo, to: &str) -> StateResult<()> {
        self.exit_node(editor, self.root(), info, to)
    }

    /// Mark `node` active, run its `on_enter`, then enter its current child.
    ///
    /// The current child is reset to the initial one before `on_enter` runs,
    /// so re-entering a branch always starts over at its initial child. If
    /// `on_enter` left the node inactive (a hook transitioned it away), the
    /// descent stops there; if it already entered one of the node's children,
    /// that child stays and the initial child is not entered.
    pub fn enter_node(
        &mut self,
        editor: &mut E,
        node: NodeId,
        info: &TransitionInfo,
        from: &str,
    ) -> StateResult<()> {
        let entry = &mut self.nodes[node.0];
        entry.is_active = true;
        if entry.initial.is_some() {
            entry.current = entry.initial;
        }
        debug!(state = %entry.id, from, "Enter");

        self.invoke(editor, node, |handlers, cx| handlers.on_enter(cx, info, from))?;

        let entry = &self.nodes[node.0];
        let Some(current) = entry.current.filter(|_| entry.is_active) else {
            return Ok(());
        };
        // `on_enter` may already have entered a child of its own choosing
        if self.nodes[current.0].is_active {
            debug!(state = %entry.id, child = %self.nodes[current.0].id, "Child entered by on_enter");
            return Ok(());
        }
        self.enter_node(editor, current, info, from)
    }

    /// Exit the active child of `node` (recursively), then mark `node`
    /// inactive and run its `on_exit`.
    pub fn exit_node(
        &mut self,
        editor: &mut E,
        node: NodeId,
        info: &TransitionInfo,
        to: &str,
    ) -> StateResult<()> {
        if let Some(current) = self.nodes[node.0].current {
            if self.nodes[current.0].is_active {
                self.exit_node(editor, current, info, to)?;
            }
        }

        self.nodes[node.0].is_active = false;
        debug!(state = %self.nodes[node.0].id, to, "Exit");

        self.invoke(editor, node, |handlers, cx| handlers.on_exit(cx, info, to))
    }

    /// Run one of `node`'s hooks with a context over this chart.
    ///
    /// The handler `Rc` is cloned out of the arena first, so the hook may
    /// freely re-enter the chart, including this same node.
    pub(crate) fn invoke<F>(&mut self, editor: &mut E, node: NodeId, hook: F) -> HookResult
    where
        F: FnOnce(&dyn StateHandlers<E>, &mut StateContext<'_, E>) -> HookResult,
    {
        let handlers = Rc::clone(&self.nodes[node.0].handlers);
        let mut cx = StateContext::new(self, editor, node);
        hook(handlers.as_ref(), &mut cx)
    }
}
