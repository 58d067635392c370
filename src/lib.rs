//! Hierarchical state machine for canvas editor tools.
//!
//! A single active configuration of nested states decides how pointer,
//! keyboard, wheel and lifecycle events are interpreted: which tool is live,
//! whether the user is mid-drag, and so on.
//!
//! ## Architecture
//!
//! - `descriptor` - static per-kind metadata (`StateDescriptor`)
//! - `chart` - the live tree: build, enter/exit, transitions, event routing
//! - `handlers` - `StateHandlers`, the optional per-node hooks
//! - `context` - `StateContext`, what a hook can reach while it runs
//! - `event` - normalized input events
//! - `tools` - the select and pen tools built on the chart
//! - `settings` - JSON settings for the chart and tools
//! - `perf`, `logging` - instrumentation

pub mod chart;
pub mod constants;
pub mod context;
pub mod descriptor;
pub mod error;
pub mod event;
pub mod handlers;
pub mod logging;
pub mod node;
pub mod perf;
pub mod point;
pub mod settings;
pub mod tools;

pub use chart::StateChart;
pub use context::StateContext;
pub use descriptor::StateDescriptor;
pub use error::{ConfigurationError, StateError, StateResult};
pub use event::{EventInfo, EventName, Modifiers, PointerTarget, UiEventType};
pub use handlers::{HookResult, Passive, StateHandlers, TransitionInfo};
pub use node::{NodeId, NodeKind, StateNode};
pub use point::Vec2;
pub use settings::ChartSettings;
