//! Select tool: press, drag past a threshold, translate the selection.
//!
//! Hit-testing and the selection itself belong to the editor; this tool only
//! decides when a press becomes a drag and reports the movement.

use super::DrawingSurface;
use crate::constants::{IDLE_STATE_ID, POINTING_STATE_ID, SELECT_TOOL_ID, TRANSLATING_STATE_ID};
use crate::context::StateContext;
use crate::descriptor::StateDescriptor;
use crate::event::{EventInfo, PointerEventInfo, SignalEventInfo};
use crate::handlers::{HookResult, StateHandlers, TransitionInfo};
use crate::point::Vec2;
use crate::settings::SelectSettings;
use std::cell::Cell;
use std::rc::Rc;
use tracing::debug;

/// Press/drag bookkeeping shared by `pointing` and `translating`
#[derive(Debug, Default)]
struct Gesture {
    origin: Cell<Vec2>,
    last: Cell<Vec2>,
    /// Translation applied so far, undone on cancel
    total: Cell<Vec2>,
}

impl Gesture {
    fn start(&self, origin: Vec2) {
        self.origin.set(origin);
        self.last.set(origin);
        self.total.set(Vec2::ZERO);
    }

    /// Delta since the previous sample
    fn advance(&self, point: Vec2) -> Vec2 {
        let delta = point - self.last.get();
        self.last.set(point);
        self.total.set(self.total.get() + delta);
        delta
    }
}

pub(super) fn select_tool<E>(settings: &SelectSettings) -> StateDescriptor<E>
where
    E: DrawingSurface + 'static,
{
    let threshold = settings.drag_threshold;

    StateDescriptor::new(SELECT_TOOL_ID)
        .initial(IDLE_STATE_ID)
        .lockable(false)
        .children(move || {
            let gesture = Rc::new(Gesture::default());
            let pointing = Rc::clone(&gesture);
            vec![
                StateDescriptor::new(IDLE_STATE_ID).handlers(|_| SelectIdle),
                StateDescriptor::new(POINTING_STATE_ID).handlers(move |_| SelectPointing {
                    gesture: Rc::clone(&pointing),
                    threshold,
                }),
                StateDescriptor::new(TRANSLATING_STATE_ID).handlers(move |_| SelectTranslating {
                    gesture: Rc::clone(&gesture),
                }),
            ]
        })
}

/// Waiting for a press.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectIdle;

impl<E: DrawingSurface + 'static> StateHandlers<E> for SelectIdle {
    fn on_pointer_down(&self, cx: &mut StateContext<'_, E>, info: &PointerEventInfo) -> HookResult {
        cx.parent_transition(POINTING_STATE_ID, &EventInfo::PointerDown(info.clone()).into())?;
        Ok(())
    }
}

/// Pointer is down but has not moved far enough to count as a drag.
#[derive(Debug)]
pub struct SelectPointing {
    gesture: Rc<Gesture>,
    threshold: f64,
}

impl<E: DrawingSurface + 'static> StateHandlers<E> for SelectPointing {
    fn on_enter(&self, _cx: &mut StateContext<'_, E>, info: &TransitionInfo, _from: &str) -> HookResult {
        self.gesture.start(info.point().unwrap_or_default());
        Ok(())
    }

    fn on_pointer_move(&self, cx: &mut StateContext<'_, E>, info: &PointerEventInfo) -> HookResult {
        let travel = (info.point - self.gesture.origin.get()).length();
        if travel >= self.threshold {
            cx.parent_transition(TRANSLATING_STATE_ID, &EventInfo::PointerMove(info.clone()).into())?;
        }
        Ok(())
    }

    fn on_pointer_up(&self, cx: &mut StateContext<'_, E>, _info: &PointerEventInfo) -> HookResult {
        cx.parent_transition(IDLE_STATE_ID, &TransitionInfo::Empty)?;
        Ok(())
    }

    fn on_cancel(&self, cx: &mut StateContext<'_, E>, _info: &SignalEventInfo) -> HookResult {
        cx.parent_transition(IDLE_STATE_ID, &TransitionInfo::Empty)?;
        Ok(())
    }

    fn on_interrupt(&self, cx: &mut StateContext<'_, E>, _info: &SignalEventInfo) -> HookResult {
        cx.parent_transition(IDLE_STATE_ID, &TransitionInfo::Empty)?;
        Ok(())
    }
}

/// Dragging: every pointer sample moves the selection.
#[derive(Debug)]
pub struct SelectTranslating {
    gesture: Rc<Gesture>,
}

impl SelectTranslating {
    fn translate_to<E: DrawingSurface + 'static>(&self, cx: &mut StateContext<'_, E>, point: Vec2) {
        let delta = self.gesture.advance(point);
        let surface = cx.editor();
        surface.translate_selection(delta);
        surface.request_redraw();
    }

    fn revert<E: DrawingSurface + 'static>(&self, cx: &mut StateContext<'_, E>) -> HookResult {
        let total = self.gesture.total.replace(Vec2::ZERO);
        debug!(dx = total.x, dy = total.y, "Reverting translation");
        let surface = cx.editor();
        surface.translate_selection(-total);
        surface.request_redraw();
        cx.parent_transition(IDLE_STATE_ID, &TransitionInfo::Empty)?;
        Ok(())
    }
}

impl<E: DrawingSurface + 'static> StateHandlers<E> for SelectTranslating {
    fn on_enter(&self, cx: &mut StateContext<'_, E>, info: &TransitionInfo, _from: &str) -> HookResult {
        if let Some(point) = info.point() {
            self.translate_to(cx, point);
        }
        Ok(())
    }

    fn on_pointer_move(&self, cx: &mut StateContext<'_, E>, info: &PointerEventInfo) -> HookResult {
        self.translate_to(cx, info.point);
        Ok(())
    }

    fn on_pointer_up(&self, cx: &mut StateContext<'_, E>, _info: &PointerEventInfo) -> HookResult {
        cx.parent_transition(IDLE_STATE_ID, &TransitionInfo::Empty)?;
        Ok(())
    }

    fn on_complete(&self, cx: &mut StateContext<'_, E>, _info: &SignalEventInfo) -> HookResult {
        cx.parent_transition(IDLE_STATE_ID, &TransitionInfo::Empty)?;
        Ok(())
    }

    fn on_cancel(&self, cx: &mut StateContext<'_, E>, _info: &SignalEventInfo) -> HookResult {
        self.revert(cx)
    }

    fn on_interrupt(&self, cx: &mut StateContext<'_, E>, _info: &SignalEventInfo) -> HookResult {
        self.revert(cx)
    }
}
