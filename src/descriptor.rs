//! Static, per-kind state metadata.
//!
//! A `StateDescriptor` says what a kind of state is (its id, which child it
//! starts in, which children it has, whether it can be locked) and how to
//! create its handlers. It is independent of any live tree: the same
//! descriptor can be built into any number of charts.
//!
//! ```ignore
//! let root = StateDescriptor::new("root")
//!     .initial("idle")
//!     .children(|| vec![StateDescriptor::new("idle"), StateDescriptor::new("active")])
//!     .handlers(|_editor| RootHandlers);
//! ```

use crate::handlers::{Passive, StateHandlers};
use std::fmt;
use std::rc::Rc;

type ChildFactory<E> = Rc<dyn Fn() -> Vec<StateDescriptor<E>>>;
type HandlerFactory<E> = Rc<dyn Fn(&E) -> Rc<dyn StateHandlers<E>>>;

pub struct StateDescriptor<E> {
    id: String,
    initial: Option<String>,
    children: Option<ChildFactory<E>>,
    is_lockable: bool,
    handlers: HandlerFactory<E>,
}

impl<E: 'static> StateDescriptor<E> {
    /// A lockable state with no children and no handlers
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            initial: None,
            children: None,
            is_lockable: true,
            handlers: Rc::new(|_: &E| Rc::new(Passive) as Rc<dyn StateHandlers<E>>),
        }
    }

    /// Name the child entered whenever this state is entered
    pub fn initial(mut self, id: impl Into<String>) -> Self {
        self.initial = Some(id.into());
        self
    }

    /// Declare the child kinds, produced when the tree is built
    pub fn children<F>(mut self, factory: F) -> Self
    where
        F: Fn() -> Vec<StateDescriptor<E>> + 'static,
    {
        self.children = Some(Rc::new(factory));
        self
    }

    pub fn lockable(mut self, is_lockable: bool) -> Self {
        self.is_lockable = is_lockable;
        self
    }

    /// Create this state's handlers from the editor context at build time
    pub fn handlers<F, H>(mut self, factory: F) -> Self
    where
        F: Fn(&E) -> H + 'static,
        H: StateHandlers<E> + 'static,
    {
        self.handlers = Rc::new(move |editor: &E| Rc::new(factory(editor)) as Rc<dyn StateHandlers<E>>);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn initial_id(&self) -> Option<&str> {
        self.initial.as_deref()
    }

    pub fn is_lockable(&self) -> bool {
        self.is_lockable
    }

    pub fn has_children(&self) -> bool {
        self.children.is_some()
    }

    /// Produce the declared child descriptors, in declaration order
    pub fn child_descriptors(&self) -> Option<Vec<StateDescriptor<E>>> {
        self.children.as_ref().map(|factory| factory())
    }

    pub(crate) fn create_handlers(&self, editor: &E) -> Rc<dyn StateHandlers<E>> {
        (self.handlers)(editor)
    }
}

impl<E> Clone for StateDescriptor<E> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            initial: self.initial.clone(),
            children: self.children.clone(),
            is_lockable: self.is_lockable,
            handlers: Rc::clone(&self.handlers),
        }
    }
}

impl<E> fmt::Debug for StateDescriptor<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateDescriptor")
            .field("id", &self.id)
            .field("initial", &self.initial)
            .field("has_children", &self.children.is_some())
            .field("is_lockable", &self.is_lockable)
            .finish_non_exhaustive()
    }
}
