//! The live statechart.
//!
//! A `StateChart` is built once from a root `StateDescriptor` and owns every
//! node of the resulting tree in an arena. All operations take the editor
//! context as a separate `&mut E` so hooks can reach both the tree and the
//! editor while they run.
//!
//! ## Modules
//!
//! - `lifecycle` - enter/exit of nodes and hook invocation
//! - `transition` - dotted-path transitions
//! - `routing` - event dispatch from the root to the active leaf
//! - `introspect` - active path, lookups and the debug dump

mod introspect;
mod lifecycle;
mod routing;
mod transition;

use crate::constants::PATH_SEPARATOR;
use crate::descriptor::StateDescriptor;
use crate::error::{ConfigurationError, StateResult};
use crate::node::{NodeId, NodeKind, StateNode};
use crate::settings::ChartSettings;
use tracing::debug;

pub struct StateChart<E> {
    nodes: Vec<StateNode<E>>,
    /// Opt-in guard against runaway re-entrant transitions
    max_transition_depth: Option<usize>,
    /// Transitions currently on the call stack
    transition_depth: usize,
}

impl<E: 'static> StateChart<E> {
    /// Instantiate the whole tree described by `descriptor`.
    ///
    /// Handler factories receive the editor. Nothing is entered yet: call
    /// [`StateChart::enter`] to activate the root and its initial chain.
    pub fn build(descriptor: &StateDescriptor<E>, editor: &E) -> StateResult<Self> {
        let mut chart = Self {
            nodes: Vec::new(),
            max_transition_depth: None,
            transition_depth: 0,
        };
        chart.instantiate(descriptor, None, editor)?;
        debug!(root = descriptor.id(), nodes = chart.nodes.len(), "Built state chart");
        Ok(chart)
    }

    /// Apply the runtime parts of `settings`
    pub fn with_settings(mut self, settings: &ChartSettings) -> Self {
        self.max_transition_depth = settings.max_transition_depth;
        self
    }

    pub fn set_max_transition_depth(&mut self, limit: Option<usize>) {
        self.max_transition_depth = limit;
    }

    pub fn max_transition_depth(&self) -> Option<usize> {
        self.max_transition_depth
    }

    fn instantiate(
        &mut self,
        descriptor: &StateDescriptor<E>,
        parent: Option<NodeId>,
        editor: &E,
    ) -> StateResult<NodeId> {
        let state = descriptor.id();
        if state.is_empty() || state.contains(PATH_SEPARATOR) {
            return Err(ConfigurationError::InvalidId { id: state.to_string() }.into());
        }

        let child_descriptors = descriptor.child_descriptors();
        let initial = match (&child_descriptors, descriptor.initial_id()) {
            (None, None) => None,
            (Some(_), Some(initial)) => Some(initial),
            (Some(_), None) => {
                return Err(ConfigurationError::MissingInitial { state: state.to_string() }.into());
            }
            (None, Some(initial)) => {
                return Err(ConfigurationError::InitialWithoutChildren {
                    state: state.to_string(),
                    initial: initial.to_string(),
                }
                .into());
            }
        };

        let kind = match (parent, child_descriptors.is_some()) {
            (None, _) => NodeKind::Root,
            (Some(_), true) => NodeKind::Branch,
            (Some(_), false) => NodeKind::Leaf,
        };

        let node = NodeId(self.nodes.len());
        self.nodes.push(StateNode {
            id: state.to_string(),
            kind,
            parent,
            children: Vec::new(),
            initial: None,
            current: None,
            is_active: false,
            is_lockable: descriptor.is_lockable(),
            handlers: descriptor.create_handlers(editor),
        });

        let (Some(children), Some(initial)) = (child_descriptors, initial) else {
            return Ok(node);
        };

        let mut child_ids = Vec::with_capacity(children.len());
        for child in &children {
            if child_ids.iter().any(|&c: &NodeId| self.nodes[c.0].id == child.id()) {
                return Err(ConfigurationError::DuplicateChild {
                    state: state.to_string(),
                    id: child.id().to_string(),
                }
                .into());
            }
            child_ids.push(self.instantiate(child, Some(node), editor)?);
        }

        let initial_node = child_ids
            .iter()
            .copied()
            .find(|c| self.nodes[c.0].id == initial)
            .ok_or_else(|| ConfigurationError::UnknownInitial {
                state: state.to_string(),
                initial: initial.to_string(),
            })?;

        let entry = &mut self.nodes[node.0];
        entry.children = child_ids;
        entry.initial = Some(initial_node);
        entry.current = Some(initial_node);
        Ok(node)
    }
}

impl<E> StateChart<E> {
    /// The root node (always the first node built)
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Node behind a handle.
    ///
    /// # Panics
    /// If `node` does not belong to this chart.
    pub fn node(&self, node: NodeId) -> &StateNode<E> {
        &self.nodes[node.0]
    }

    pub fn get(&self, node: NodeId) -> Option<&StateNode<E>> {
        self.nodes.get(node.0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in build order (pre-order, declaration order among siblings)
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &StateNode<E>)> {
        self.nodes.iter().enumerate().map(|(i, node)| (NodeId(i), node))
    }

    pub fn is_active(&self, node: NodeId) -> bool {
        self.nodes[node.0].is_active
    }

    /// Child of `node` with the given id
    pub fn child(&self, node: NodeId, id: &str) -> Option<NodeId> {
        self.nodes[node.0]
            .children
            .iter()
            .copied()
            .find(|c| self.nodes[c.0].id == id)
    }
}

impl<E> std::fmt::Debug for StateChart<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateChart")
            .field("nodes", &self.nodes)
            .field("max_transition_depth", &self.max_transition_depth)
            .finish_non_exhaustive()
    }
}
