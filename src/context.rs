//! What a hook sees while it runs.
//!
//! `StateContext` mutably borrows both the chart and the editor for the
//! duration of one hook call. That is what lets a hook transition the tree
//! (its own children, its parent's children, or any node by handle) and
//! dispatch further events, all synchronously on the same call stack.

use crate::chart::StateChart;
use crate::error::{StateError, StateResult};
use crate::event::EventInfo;
use crate::handlers::TransitionInfo;
use crate::node::NodeId;

pub struct StateContext<'a, E> {
    chart: &'a mut StateChart<E>,
    editor: &'a mut E,
    node: NodeId,
}

impl<'a, E: 'static> StateContext<'a, E> {
    pub(crate) fn new(chart: &'a mut StateChart<E>, editor: &'a mut E, node: NodeId) -> Self {
        Self { chart, editor, node }
    }

    /// Handle of the node whose hook is running
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Id of the node whose hook is running
    pub fn id(&self) -> &str {
        self.chart.node(self.node).id()
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.chart.node(self.node).parent()
    }

    pub fn is_active(&self) -> bool {
        self.chart.is_active(self.node)
    }

    pub fn editor(&mut self) -> &mut E {
        &mut *self.editor
    }

    pub fn editor_ref(&self) -> &E {
        &*self.editor
    }

    /// Read-only view of the whole chart
    pub fn chart(&self) -> &StateChart<E> {
        &*self.chart
    }

    /// Transition this node's own children along `path`
    pub fn transition(&mut self, path: &str, info: &TransitionInfo) -> StateResult<NodeId> {
        self.chart.transition_from(self.editor, self.node, path, info)
    }

    /// Transition on behalf of the parent, e.g. a leaf moving to a sibling
    pub fn parent_transition(&mut self, path: &str, info: &TransitionInfo) -> StateResult<NodeId> {
        let parent = self.parent().ok_or_else(|| StateError::NoParent {
            id: self.id().to_string(),
        })?;
        self.chart.transition_from(self.editor, parent, path, info)
    }

    /// Transition starting at an arbitrary node
    pub fn transition_from(
        &mut self,
        node: NodeId,
        path: &str,
        info: &TransitionInfo,
    ) -> StateResult<NodeId> {
        self.chart.transition_from(self.editor, node, path, info)
    }

    /// Dispatch another event from the root before this hook returns
    pub fn handle_event(&mut self, event: &EventInfo) -> StateResult<()> {
        self.chart.handle_event(self.editor, event)
    }
}
