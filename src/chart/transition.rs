//! Dotted-path transitions.
//!
//! `transition_from(node, "select.translating", info)` walks the path one
//! segment at a time starting at `node`. Segments that already name the
//! current child are skipped without firing hooks; otherwise the old child
//! exits, the current pointer moves, and the new child enters. Hooks may
//! transition again; those nested transitions finish before the outer walk
//! continues.

use super::StateChart;
use crate::constants::{INITIAL_FROM_ID, PATH_SEPARATOR};
use crate::error::{StateError, StateResult};
use crate::handlers::TransitionInfo;
use crate::node::NodeId;
use crate::profile_scope;
use tracing::{debug, warn};

impl<E: 'static> StateChart<E> {
    /// Transition the root's subtree along `path`
    pub fn transition(&mut self, editor: &mut E, path: &str, info: &TransitionInfo) -> StateResult<NodeId> {
        self.transition_from(editor, self.root(), path, info)
    }

    /// Transition the subtree of `node` along `path`, returning `node`.
    ///
    /// Fails with `NoSuchChild` at the first segment that is not a child of
    /// the node reached so far. Segments already applied stay applied.
    pub fn transition_from(
        &mut self,
        editor: &mut E,
        node: NodeId,
        path: &str,
        info: &TransitionInfo,
    ) -> StateResult<NodeId> {
        profile_scope!("transition");

        if let Some(limit) = self.max_transition_depth {
            if self.transition_depth >= limit {
                warn!(state = %self.nodes[node.0].id, path, limit, "Transition depth limit reached");
                return Err(StateError::ReentrancyLimit {
                    limit,
                    id: self.nodes[node.0].id.clone(),
                });
            }
        }

        self.transition_depth += 1;
        let result = self.walk_path(editor, node, path, info);
        self.transition_depth -= 1;
        result.map(|()| node)
    }

    fn walk_path(
        &mut self,
        editor: &mut E,
        node: NodeId,
        path: &str,
        info: &TransitionInfo,
    ) -> StateResult<()> {
        let mut state = node;

        for segment in path.split(PATH_SEPARATOR) {
            let target = self.child(state, segment).ok_or_else(|| StateError::NoSuchChild {
                parent: self.nodes[state.0].id.clone(),
                id: segment.to_string(),
            })?;

            let previous = self.nodes[state.0].current;
            if previous != Some(target) {
                let from = previous
                    .map(|p| self.nodes[p.0].id.clone())
                    .unwrap_or_else(|| INITIAL_FROM_ID.to_string());
                debug!(parent = %self.nodes[state.0].id, from = %from, to = segment, "Transition");

                if let Some(previous) = previous {
                    if self.nodes[previous.0].is_active {
                        self.exit_node(editor, previous, info, segment)?;
                    }
                }

                self.nodes[state.0].current = Some(target);
                self.enter_node(editor, target, info, &from)?;

                if !self.nodes[target.0].is_active {
                    debug!(state = segment, path, "Target left during entry, path partially applied");
                    break;
                }
            }

            state = target;
        }

        Ok(())
    }

    /// Current depth of nested transitions (0 outside any transition)
    pub fn transition_depth(&self) -> usize {
        self.transition_depth
    }
}
