//! Input events routed through the statechart.
//!
//! The input normalization layer turns raw mouse, touch, keyboard and timer
//! input into `EventInfo` values. Each variant carries only the fields that
//! make sense for its kind, so handlers never see a pointer event without a
//! point or a tick without an elapsed time.

use crate::point::Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Modifier keys held while the event was produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    #[serde(default)]
    pub shift: bool,
    #[serde(default)]
    pub alt: bool,
    #[serde(default)]
    pub ctrl: bool,
    #[serde(default)]
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        alt: false,
        ctrl: false,
        meta: false,
    };

    /// Returns true if any modifier is held
    pub fn any(&self) -> bool {
        self.shift || self.alt || self.ctrl || self.meta
    }
}

/// What the pointer was over when the event fired.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerTarget {
    #[default]
    Canvas,
    Shape { shape_id: String },
}

/// Payload of `pointer_down`, `pointer_move`, `pointer_up` and `double_click`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointerEventInfo {
    /// World-space position
    pub point: Vec2,
    pub pointer_id: u32,
    pub button: u8,
    #[serde(default)]
    pub target: PointerTarget,
    #[serde(default)]
    pub modifiers: Modifiers,
}

impl PointerEventInfo {
    /// Primary-button event on the canvas at `point`
    pub fn new(point: Vec2) -> Self {
        Self {
            point,
            pointer_id: 1,
            button: 0,
            target: PointerTarget::Canvas,
            modifiers: Modifiers::NONE,
        }
    }

    pub fn with_target(mut self, target: PointerTarget) -> Self {
        self.target = target;
        self
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Shape under the pointer, if any
    pub fn shape_id(&self) -> Option<&str> {
        match &self.target {
            PointerTarget::Shape { shape_id } => Some(shape_id),
            PointerTarget::Canvas => None,
        }
    }
}

/// Payload of `key_down` and `key_up`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyboardEventInfo {
    /// Logical key (`"Escape"`, `"p"`)
    pub key: String,
    /// Physical key code (`"Escape"`, `"KeyP"`)
    pub code: String,
    #[serde(default)]
    pub modifiers: Modifiers,
}

impl KeyboardEventInfo {
    pub fn new(key: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            code: code.into(),
            modifiers: Modifiers::NONE,
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// Payload of `wheel`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WheelEventInfo {
    pub delta: Vec2,
    pub point: Vec2,
    #[serde(default)]
    pub modifiers: Modifiers,
}

/// Payload of the signal events `cancel`, `complete` and `interrupt`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalEventInfo {
    #[serde(default)]
    pub modifiers: Modifiers,
}

/// Payload of `tick`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickEventInfo {
    /// Milliseconds since the previous tick
    pub elapsed: f64,
    #[serde(default)]
    pub modifiers: Modifiers,
}

/// Broad category of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UiEventType {
    Pointer,
    Click,
    Keyboard,
    Wheel,
    Misc,
}

/// Name of an event kind, one per `EventInfo` variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventName {
    PointerDown,
    PointerMove,
    PointerUp,
    DoubleClick,
    KeyDown,
    KeyUp,
    Wheel,
    Cancel,
    Complete,
    Interrupt,
    Tick,
}

impl EventName {
    pub const ALL: [EventName; 11] = [
        EventName::PointerDown,
        EventName::PointerMove,
        EventName::PointerUp,
        EventName::DoubleClick,
        EventName::KeyDown,
        EventName::KeyUp,
        EventName::Wheel,
        EventName::Cancel,
        EventName::Complete,
        EventName::Interrupt,
        EventName::Tick,
    ];

    /// Wire name (`pointer_down`, `double_click`, ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PointerDown => "pointer_down",
            Self::PointerMove => "pointer_move",
            Self::PointerUp => "pointer_up",
            Self::DoubleClick => "double_click",
            Self::KeyDown => "key_down",
            Self::KeyUp => "key_up",
            Self::Wheel => "wheel",
            Self::Cancel => "cancel",
            Self::Complete => "complete",
            Self::Interrupt => "interrupt",
            Self::Tick => "tick",
        }
    }

    pub fn event_type(&self) -> UiEventType {
        match self {
            Self::PointerDown | Self::PointerMove | Self::PointerUp => UiEventType::Pointer,
            Self::DoubleClick => UiEventType::Click,
            Self::KeyDown | Self::KeyUp => UiEventType::Keyboard,
            Self::Wheel => UiEventType::Wheel,
            Self::Cancel | Self::Complete | Self::Interrupt | Self::Tick => UiEventType::Misc,
        }
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single normalized input event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum EventInfo {
    PointerDown(PointerEventInfo),
    PointerMove(PointerEventInfo),
    PointerUp(PointerEventInfo),
    DoubleClick(PointerEventInfo),
    KeyDown(KeyboardEventInfo),
    KeyUp(KeyboardEventInfo),
    Wheel(WheelEventInfo),
    Cancel(SignalEventInfo),
    Complete(SignalEventInfo),
    Interrupt(SignalEventInfo),
    Tick(TickEventInfo),
}

impl EventInfo {
    pub fn pointer_down(point: Vec2) -> Self {
        Self::PointerDown(PointerEventInfo::new(point))
    }

    pub fn pointer_move(point: Vec2) -> Self {
        Self::PointerMove(PointerEventInfo::new(point))
    }

    pub fn pointer_up(point: Vec2) -> Self {
        Self::PointerUp(PointerEventInfo::new(point))
    }

    pub fn double_click(point: Vec2) -> Self {
        Self::DoubleClick(PointerEventInfo::new(point))
    }

    /// Key press where the code mirrors the key
    pub fn key_down(key: &str) -> Self {
        Self::KeyDown(KeyboardEventInfo::new(key, key))
    }

    pub fn key_up(key: &str) -> Self {
        Self::KeyUp(KeyboardEventInfo::new(key, key))
    }

    pub fn wheel(delta: Vec2, point: Vec2) -> Self {
        Self::Wheel(WheelEventInfo {
            delta,
            point,
            modifiers: Modifiers::NONE,
        })
    }

    pub fn cancel() -> Self {
        Self::Cancel(SignalEventInfo::default())
    }

    pub fn complete() -> Self {
        Self::Complete(SignalEventInfo::default())
    }

    pub fn interrupt() -> Self {
        Self::Interrupt(SignalEventInfo::default())
    }

    pub fn tick(elapsed: f64) -> Self {
        Self::Tick(TickEventInfo {
            elapsed,
            modifiers: Modifiers::NONE,
        })
    }

    pub fn name(&self) -> EventName {
        match self {
            Self::PointerDown(_) => EventName::PointerDown,
            Self::PointerMove(_) => EventName::PointerMove,
            Self::PointerUp(_) => EventName::PointerUp,
            Self::DoubleClick(_) => EventName::DoubleClick,
            Self::KeyDown(_) => EventName::KeyDown,
            Self::KeyUp(_) => EventName::KeyUp,
            Self::Wheel(_) => EventName::Wheel,
            Self::Cancel(_) => EventName::Cancel,
            Self::Complete(_) => EventName::Complete,
            Self::Interrupt(_) => EventName::Interrupt,
            Self::Tick(_) => EventName::Tick,
        }
    }

    pub fn event_type(&self) -> UiEventType {
        self.name().event_type()
    }

    pub fn modifiers(&self) -> Modifiers {
        match self {
            Self::PointerDown(info)
            | Self::PointerMove(info)
            | Self::PointerUp(info)
            | Self::DoubleClick(info) => info.modifiers,
            Self::KeyDown(info) | Self::KeyUp(info) => info.modifiers,
            Self::Wheel(info) => info.modifiers,
            Self::Cancel(info) | Self::Complete(info) | Self::Interrupt(info) => info.modifiers,
            Self::Tick(info) => info.modifiers,
        }
    }

    /// World-space position for pointer, click and wheel events
    pub fn point(&self) -> Option<Vec2> {
        match self {
            Self::PointerDown(info)
            | Self::PointerMove(info)
            | Self::PointerUp(info)
            | Self::DoubleClick(info) => Some(info.point),
            Self::Wheel(info) => Some(info.point),
            _ => None,
        }
    }
}
