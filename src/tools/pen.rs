//! Pen tool: freehand strokes with buffered sampling.
//!
//! Pointer-move samples arrive far more often than the canvas needs to
//! redraw, so `drawing` buffers them and pushes them to the surface on
//! `tick` once `flush_interval_ms` has elapsed. On finish the stroke is
//! flushed, simplified and committed.

use super::DrawingSurface;
use crate::constants::{DRAWING_STATE_ID, ESCAPE_KEY, IDLE_STATE_ID, PEN_TOOL_ID};
use crate::context::StateContext;
use crate::descriptor::StateDescriptor;
use crate::event::{EventInfo, KeyboardEventInfo, PointerEventInfo, SignalEventInfo, TickEventInfo};
use crate::handlers::{HookResult, StateHandlers, TransitionInfo};
use crate::point::Vec2;
use crate::settings::PenSettings;
use std::cell::RefCell;
use tracing::debug;

pub(super) fn pen_tool<E>(settings: &PenSettings) -> StateDescriptor<E>
where
    E: DrawingSurface + 'static,
{
    let settings = settings.clone();

    StateDescriptor::new(PEN_TOOL_ID)
        .initial(IDLE_STATE_ID)
        .children(move || {
            let settings = settings.clone();
            vec![
                StateDescriptor::new(IDLE_STATE_ID).handlers(|_| PenIdle),
                StateDescriptor::new(DRAWING_STATE_ID)
                    .handlers(move |_| PenDrawing::new(settings.clone())),
            ]
        })
}

/// Drop points closer than `tolerance` to the previously kept point.
///
/// The first and last points are always kept; strokes of two points or
/// fewer are returned unchanged.
pub fn simplify_stroke(points: &[Vec2], tolerance: f64) -> Vec<Vec2> {
    if points.len() <= 2 {
        return points.to_vec();
    }

    let limit = tolerance * tolerance;
    let mut kept = vec![points[0]];
    let mut last_kept = 0;
    for (i, point) in points.iter().enumerate().skip(1) {
        if point.distance_squared(points[last_kept]) > limit {
            kept.push(*point);
            last_kept = i;
        }
    }

    if last_kept != points.len() - 1 {
        kept.push(points[points.len() - 1]);
    }
    kept
}

/// Waiting for a press.
#[derive(Debug, Clone, Copy, Default)]
pub struct PenIdle;

impl<E: DrawingSurface + 'static> StateHandlers<E> for PenIdle {
    fn on_pointer_down(&self, cx: &mut StateContext<'_, E>, info: &PointerEventInfo) -> HookResult {
        cx.parent_transition(DRAWING_STATE_ID, &EventInfo::PointerDown(info.clone()).into())?;
        Ok(())
    }
}

#[derive(Debug, Default)]
struct Stroke {
    /// Points already handed to the surface
    points: Vec<Vec2>,
    /// Samples waiting for the next flush
    pending: Vec<Vec2>,
    since_flush: f64,
    is_drawing: bool,
}

/// Pointer is down and a stroke is being recorded.
#[derive(Debug)]
pub struct PenDrawing {
    settings: PenSettings,
    stroke: RefCell<Stroke>,
}

impl PenDrawing {
    pub fn new(settings: PenSettings) -> Self {
        Self {
            settings,
            stroke: RefCell::new(Stroke::default()),
        }
    }

    /// Number of samples buffered but not yet flushed
    pub fn pending_len(&self) -> usize {
        self.stroke.borrow().pending.len()
    }

    fn begin<E: DrawingSurface>(&self, surface: &mut E, origin: Vec2) {
        *self.stroke.borrow_mut() = Stroke {
            points: vec![origin],
            is_drawing: true,
            ..Stroke::default()
        };
        surface.begin_stroke(origin, &self.settings.style);
        surface.request_redraw();
    }

    fn flush<E: DrawingSurface>(&self, surface: &mut E) {
        let pending = {
            let mut stroke = self.stroke.borrow_mut();
            stroke.since_flush = 0.0;
            if !stroke.is_drawing || stroke.pending.is_empty() {
                stroke.pending.clear();
                return;
            }
            let pending = std::mem::take(&mut stroke.pending);
            stroke.points.extend_from_slice(&pending);
            pending
        };
        surface.extend_stroke(&pending);
        surface.request_redraw();
    }

    fn finish<E: DrawingSurface>(&self, surface: &mut E) {
        self.flush(surface);
        let stroke = std::mem::take(&mut *self.stroke.borrow_mut());
        if !stroke.is_drawing {
            return;
        }
        let points = simplify_stroke(&stroke.points, self.settings.simplify_tolerance);
        debug!(raw = stroke.points.len(), kept = points.len(), "Committing stroke");
        surface.commit_stroke(points);
        surface.request_redraw();
    }

    fn discard<E: DrawingSurface>(&self, surface: &mut E) {
        let stroke = std::mem::take(&mut *self.stroke.borrow_mut());
        if stroke.is_drawing {
            surface.discard_stroke();
            surface.request_redraw();
        }
    }

    fn abandon<E: DrawingSurface + 'static>(&self, cx: &mut StateContext<'_, E>) -> HookResult {
        self.discard(cx.editor());
        cx.parent_transition(IDLE_STATE_ID, &TransitionInfo::Empty)?;
        Ok(())
    }
}

impl<E: DrawingSurface + 'static> StateHandlers<E> for PenDrawing {
    fn on_enter(&self, cx: &mut StateContext<'_, E>, info: &TransitionInfo, _from: &str) -> HookResult {
        *self.stroke.borrow_mut() = Stroke::default();
        if let Some(origin) = info.point() {
            self.begin(cx.editor(), origin);
        }
        Ok(())
    }

    /// Leaving by any route other than `Escape`/`cancel` keeps the stroke
    fn on_exit(&self, cx: &mut StateContext<'_, E>, _info: &TransitionInfo, _to: &str) -> HookResult {
        self.finish(cx.editor());
        Ok(())
    }

    fn on_pointer_move(&self, cx: &mut StateContext<'_, E>, info: &PointerEventInfo) -> HookResult {
        let is_drawing = self.stroke.borrow().is_drawing;
        if is_drawing {
            self.stroke.borrow_mut().pending.push(info.point);
        } else {
            self.begin(cx.editor(), info.point);
        }
        Ok(())
    }

    fn on_pointer_up(&self, cx: &mut StateContext<'_, E>, _info: &PointerEventInfo) -> HookResult {
        cx.parent_transition(IDLE_STATE_ID, &TransitionInfo::Empty)?;
        Ok(())
    }

    fn on_tick(&self, cx: &mut StateContext<'_, E>, info: &TickEventInfo) -> HookResult {
        let due = {
            let mut stroke = self.stroke.borrow_mut();
            stroke.since_flush += info.elapsed;
            stroke.since_flush >= self.settings.flush_interval_ms
        };
        if due {
            self.flush(cx.editor());
        }
        Ok(())
    }

    fn on_key_down(&self, cx: &mut StateContext<'_, E>, info: &KeyboardEventInfo) -> HookResult {
        if info.key == ESCAPE_KEY {
            self.abandon(cx)?;
        }
        Ok(())
    }

    fn on_cancel(&self, cx: &mut StateContext<'_, E>, _info: &SignalEventInfo) -> HookResult {
        self.abandon(cx)
    }
}
