//! Error types for the statechart.
//!
//! Configuration problems are detected while the tree is built and are fatal;
//! everything else surfaces synchronously from `transition`, `handle_event`
//! and the lifecycle entry points. Nothing is caught or retried internally.

use thiserror::Error;

/// Malformed descriptor detected while building the tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// Children were declared without naming the initial child
    #[error("state '{state}' declares children but no initial child")]
    MissingInitial { state: String },

    /// The initial id does not name any produced child
    #[error("state '{state}' names initial child '{initial}' which is not one of its children")]
    UnknownInitial { state: String, initial: String },

    /// An initial id was given but no children were declared
    #[error("state '{state}' names initial child '{initial}' but declares no children")]
    InitialWithoutChildren { state: String, initial: String },

    /// Two siblings share an id
    #[error("state '{state}' has more than one child with the id '{id}'")]
    DuplicateChild { state: String, id: String },

    /// Ids must be non-empty and must not contain the path separator
    #[error("invalid state id '{id}'")]
    InvalidId { id: String },
}

/// Errors raised by the statechart at build or run time.
#[derive(Error, Debug)]
pub enum StateError {
    /// Descriptor could not be turned into a tree
    #[error("invalid state configuration: {0}")]
    Configuration(#[from] ConfigurationError),

    /// A transition path named a child that does not exist at that point
    #[error("{parent} - no child state exists with the id {id}.")]
    NoSuchChild { parent: String, id: String },

    /// A node without a parent was asked to transition its parent
    #[error("state '{id}' has no parent")]
    NoParent { id: String },

    /// Nested transitions went deeper than the configured limit
    #[error("transition depth limit of {limit} exceeded at state '{id}'")]
    ReentrancyLimit { limit: usize, id: String },

    /// Failure reported by a user-supplied hook
    #[error("state hook failed: {0}")]
    Hook(#[from] anyhow::Error),

    /// Settings file could not be read
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),

    /// Settings content could not be parsed
    #[error("invalid settings: {0}")]
    Settings(#[from] serde_json::Error),
}

/// Result type alias for statechart operations
pub type StateResult<T> = Result<T, StateError>;

impl StateError {
    /// Returns true if this is a `NoSuchChild` error
    pub fn is_no_such_child(&self) -> bool {
        matches!(self, Self::NoSuchChild { .. })
    }

    /// The configuration problem, if this error came from the tree builder
    pub fn configuration(&self) -> Option<&ConfigurationError> {
        match self {
            Self::Configuration(err) => Some(err),
            _ => None,
        }
    }
}
