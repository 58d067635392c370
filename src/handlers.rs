//! Per-node behavior: lifecycle hooks and one optional callback per event.
//!
//! A node author implements `StateHandlers` and overrides only the hooks the
//! state cares about; every default is a silent no-op. Handlers are shared
//! behind `Rc` so a node's hooks can run again while one of its own hooks is
//! still on the stack (a hook that transitions its parent away exits itself).
//! Tool-local mutable state therefore lives in `Cell`/`RefCell` fields.

use crate::context::StateContext;
use crate::error::StateResult;
use crate::event::{
    EventInfo, KeyboardEventInfo, PointerEventInfo, SignalEventInfo, TickEventInfo, WheelEventInfo,
};
use crate::point::Vec2;
use serde::{Deserialize, Serialize};

/// Result returned by every hook
pub type HookResult = StateResult<()>;

/// Context payload carried into enter and exit hooks by a transition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionInfo {
    #[default]
    Empty,
    /// The event that caused the transition
    Event(EventInfo),
    /// Free-form data from the caller
    Payload(serde_json::Value),
}

impl TransitionInfo {
    pub fn payload(value: serde_json::Value) -> Self {
        Self::Payload(value)
    }

    pub fn event(&self) -> Option<&EventInfo> {
        match self {
            Self::Event(event) => Some(event),
            _ => None,
        }
    }

    pub fn data(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Payload(value) => Some(value),
            _ => None,
        }
    }

    /// Point of the triggering event, if it had one
    pub fn point(&self) -> Option<Vec2> {
        self.event().and_then(EventInfo::point)
    }
}

impl From<EventInfo> for TransitionInfo {
    fn from(event: EventInfo) -> Self {
        Self::Event(event)
    }
}

impl From<&EventInfo> for TransitionInfo {
    fn from(event: &EventInfo) -> Self {
        Self::Event(event.clone())
    }
}

/// Behavior attached to a state node.
#[allow(unused_variables)]
pub trait StateHandlers<E> {
    /// Runs after the node is marked active and before its initial child is entered
    fn on_enter(&self, cx: &mut StateContext<'_, E>, info: &TransitionInfo, from: &str) -> HookResult {
        Ok(())
    }

    /// Runs after the node's active child has exited and the node is marked inactive
    fn on_exit(&self, cx: &mut StateContext<'_, E>, info: &TransitionInfo, to: &str) -> HookResult {
        Ok(())
    }

    fn on_pointer_down(&self, cx: &mut StateContext<'_, E>, info: &PointerEventInfo) -> HookResult {
        Ok(())
    }

    fn on_pointer_move(&self, cx: &mut StateContext<'_, E>, info: &PointerEventInfo) -> HookResult {
        Ok(())
    }

    fn on_pointer_up(&self, cx: &mut StateContext<'_, E>, info: &PointerEventInfo) -> HookResult {
        Ok(())
    }

    fn on_double_click(&self, cx: &mut StateContext<'_, E>, info: &PointerEventInfo) -> HookResult {
        Ok(())
    }

    fn on_key_down(&self, cx: &mut StateContext<'_, E>, info: &KeyboardEventInfo) -> HookResult {
        Ok(())
    }

    fn on_key_up(&self, cx: &mut StateContext<'_, E>, info: &KeyboardEventInfo) -> HookResult {
        Ok(())
    }

    fn on_wheel(&self, cx: &mut StateContext<'_, E>, info: &WheelEventInfo) -> HookResult {
        Ok(())
    }

    fn on_cancel(&self, cx: &mut StateContext<'_, E>, info: &SignalEventInfo) -> HookResult {
        Ok(())
    }

    fn on_complete(&self, cx: &mut StateContext<'_, E>, info: &SignalEventInfo) -> HookResult {
        Ok(())
    }

    fn on_interrupt(&self, cx: &mut StateContext<'_, E>, info: &SignalEventInfo) -> HookResult {
        Ok(())
    }

    fn on_tick(&self, cx: &mut StateContext<'_, E>, info: &TickEventInfo) -> HookResult {
        Ok(())
    }
}

/// Handler set for states that only exist to group or mark a mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct Passive;

impl<E> StateHandlers<E> for Passive {}

/// Route an event to the matching hook.
pub(crate) fn dispatch<E>(
    handlers: &dyn StateHandlers<E>,
    cx: &mut StateContext<'_, E>,
    event: &EventInfo,
) -> HookResult {
    match event {
        EventInfo::PointerDown(info) => handlers.on_pointer_down(cx, info),
        EventInfo::PointerMove(info) => handlers.on_pointer_move(cx, info),
        EventInfo::PointerUp(info) => handlers.on_pointer_up(cx, info),
        EventInfo::DoubleClick(info) => handlers.on_double_click(cx, info),
        EventInfo::KeyDown(info) => handlers.on_key_down(cx, info),
        EventInfo::KeyUp(info) => handlers.on_key_up(cx, info),
        EventInfo::Wheel(info) => handlers.on_wheel(cx, info),
        EventInfo::Cancel(info) => handlers.on_cancel(cx, info),
        EventInfo::Complete(info) => handlers.on_complete(cx, info),
        EventInfo::Interrupt(info) => handlers.on_interrupt(cx, info),
        EventInfo::Tick(info) => handlers.on_tick(cx, info),
    }
}
