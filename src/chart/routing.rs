//! Event dispatch down the active path.

use super::StateChart;
use crate::error::StateResult;
use crate::event::EventInfo;
use crate::handlers;
use crate::node::NodeId;
use crate::profile_scope;
use tracing::trace;

impl<E: 'static> StateChart<E> {
    /// Deliver `event` to the root and down the active path
    pub fn handle_event(&mut self, editor: &mut E, event: &EventInfo) -> StateResult<()> {
        profile_scope!(event.name().as_str());
        self.handle_event_at(editor, self.root(), event)
    }

    /// Deliver `event` to `node`, then to its current child.
    ///
    /// The child is captured before the node's own handler runs. It only
    /// receives the event if the node is still active and the handler did not
    /// move the current pointer away from it; a child that was just exited,
    /// or the successor that replaced it, never sees this event.
    pub fn handle_event_at(&mut self, editor: &mut E, node: NodeId, event: &EventInfo) -> StateResult<()> {
        let captured = self.nodes[node.0].current;
        trace!(state = %self.nodes[node.0].id, event = %event.name(), "Dispatch");

        self.invoke(editor, node, |hooks, cx| handlers::dispatch(hooks, cx, event))?;

        let entry = &self.nodes[node.0];
        let forward = captured.filter(|&child| entry.is_active && entry.current == Some(child));
        match forward {
            Some(child) => self.handle_event_at(editor, child, event),
            None => Ok(()),
        }
    }
}
