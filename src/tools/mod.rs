//! Editor tools built on the statechart.
//!
//! ```text
//! editor (root)
//! ├── select            v
//! │   ├── idle          pointer_down -> pointing
//! │   ├── pointing      pointer_move past threshold -> translating, pointer_up/cancel/interrupt -> idle
//! │   └── translating   pointer_up/complete -> idle, cancel/interrupt -> undo, idle
//! └── pen               p
//!     ├── idle          pointer_down -> drawing
//!     └── drawing       pointer_up -> idle (commit), Escape/cancel -> idle (discard)
//! ```
//!
//! The tools talk to the editor only through `DrawingSurface`.

mod pen;
mod select;

pub use pen::{simplify_stroke, PenDrawing, PenIdle};
pub use select::{SelectIdle, SelectPointing, SelectTranslating};

use crate::constants::{
    EDITOR_STATE_ID, PEN_TOOL_ID, PEN_TOOL_SHORTCUT, SELECT_TOOL_ID, SELECT_TOOL_SHORTCUT,
};
use crate::context::StateContext;
use crate::descriptor::StateDescriptor;
use crate::event::{EventInfo, KeyboardEventInfo};
use crate::handlers::{HookResult, StateHandlers, TransitionInfo};
use crate::point::Vec2;
use crate::settings::{ChartSettings, StrokeStyle};
use tracing::debug;

/// Editor-side operations the tools need.
pub trait DrawingSurface {
    /// Start a live stroke preview at `origin`
    fn begin_stroke(&mut self, origin: Vec2, style: &StrokeStyle);

    /// Append buffered samples to the live stroke
    fn extend_stroke(&mut self, points: &[Vec2]);

    /// Replace the live stroke with its final, simplified points
    fn commit_stroke(&mut self, points: Vec<Vec2>);

    /// Drop the live stroke
    fn discard_stroke(&mut self);

    /// Move the current selection by `delta` world units
    fn translate_selection(&mut self, delta: Vec2);

    fn request_redraw(&mut self) {}

    /// While true, lockable tools cannot be switched away from by shortcut
    fn is_tool_locked(&self) -> bool {
        false
    }
}

/// The full tool tree with `select` as the initial tool
pub fn editor_tools<E>(settings: &ChartSettings) -> StateDescriptor<E>
where
    E: DrawingSurface + 'static,
{
    let select = select::select_tool::<E>(&settings.select);
    let pen = pen::pen_tool::<E>(&settings.pen);

    StateDescriptor::new(EDITOR_STATE_ID)
        .initial(SELECT_TOOL_ID)
        .children(move || vec![select.clone(), pen.clone()])
        .handlers(|_| ToolSwitcher)
}

/// Root handlers: single-key tool shortcuts.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToolSwitcher;

impl<E: DrawingSurface + 'static> StateHandlers<E> for ToolSwitcher {
    fn on_key_down(&self, cx: &mut StateContext<'_, E>, info: &KeyboardEventInfo) -> HookResult {
        if info.modifiers.ctrl || info.modifiers.meta || info.modifiers.alt {
            return Ok(());
        }

        let target = match info.key.as_str() {
            SELECT_TOOL_SHORTCUT => SELECT_TOOL_ID,
            PEN_TOOL_SHORTCUT => PEN_TOOL_ID,
            _ => return Ok(()),
        };

        if cx.editor_ref().is_tool_locked() {
            let chart = cx.chart();
            let locked = chart
                .node(cx.node())
                .current()
                .is_some_and(|tool| chart.node(tool).is_lockable());
            if locked {
                debug!(tool = target, "Tool lock engaged, ignoring shortcut");
                return Ok(());
            }
        }

        cx.transition(target, &TransitionInfo::Event(EventInfo::KeyDown(info.clone())))?;
        Ok(())
    }
}
