//! A minimal two-state machine: press to activate, release to go idle.

use crate::helpers::{pt, send, Editor, Recorder};
use boardstate::event::PointerEventInfo;
use boardstate::{
    EventInfo, HookResult, StateChart, StateContext, StateDescriptor, StateHandlers, TransitionInfo,
};

struct Idle;

impl StateHandlers<Editor> for Idle {
    fn on_pointer_down(&self, cx: &mut StateContext<'_, Editor>, info: &PointerEventInfo) -> HookResult {
        cx.parent_transition("active", &EventInfo::PointerDown(info.clone()).into())?;
        Ok(())
    }
}

struct Active;

impl StateHandlers<Editor> for Active {
    fn on_enter(&self, cx: &mut StateContext<'_, Editor>, info: &TransitionInfo, _from: &str) -> HookResult {
        let point = info.point().unwrap_or_default();
        cx.editor().record(format!("pressed at {},{}", point.x, point.y));
        Ok(())
    }

    fn on_pointer_up(&self, cx: &mut StateContext<'_, Editor>, _info: &PointerEventInfo) -> HookResult {
        cx.parent_transition("idle", &TransitionInfo::Empty)?;
        Ok(())
    }
}

fn press_release() -> StateDescriptor<Editor> {
    StateDescriptor::new("root")
        .initial("idle")
        .handlers(|_| Recorder::new("root"))
        .children(|| {
            vec![
                StateDescriptor::new("idle").handlers(|_| Idle),
                StateDescriptor::new("active").handlers(|_| Active),
            ]
        })
}

fn started() -> (StateChart<Editor>, Editor) {
    let mut editor = Editor::new();
    let mut chart = StateChart::build(&press_release(), &editor).unwrap();
    chart.enter(&mut editor, &TransitionInfo::Empty, "initial").unwrap();
    (chart, editor)
}

#[test]
fn test_starts_idle() {
    let (chart, _editor) = started();

    assert_eq!(chart.path(), "root.idle");
    assert!(chart.is_active(chart.root()));
}

#[test]
fn test_press_and_release_cycle() {
    let (mut chart, mut editor) = started();

    send(&mut chart, &mut editor, EventInfo::pointer_down(pt(5.0, 7.0)));
    assert_eq!(chart.path(), "root.active");
    assert!(editor.log.contains(&"pressed at 5,7".to_string()));

    send(&mut chart, &mut editor, EventInfo::pointer_up(pt(5.0, 7.0)));
    assert_eq!(chart.path(), "root.idle");
}

#[test]
fn test_release_while_idle_is_ignored() {
    let (mut chart, mut editor) = started();

    send(&mut chart, &mut editor, EventInfo::pointer_up(pt(0.0, 0.0)));

    assert_eq!(chart.path(), "root.idle");
}

#[test]
fn test_repeated_press_does_not_reenter() {
    let (mut chart, mut editor) = started();

    send(&mut chart, &mut editor, EventInfo::pointer_down(pt(1.0, 1.0)));
    send(&mut chart, &mut editor, EventInfo::pointer_down(pt(2.0, 2.0)));

    let presses = editor.log.iter().filter(|line| line.starts_with("pressed")).count();
    assert_eq!(presses, 1);
    assert_eq!(chart.path(), "root.active");
}

#[test]
fn test_many_cycles_keep_one_active_leaf() {
    let (mut chart, mut editor) = started();

    for i in 0..50 {
        let p = pt(f64::from(i), 0.0);
        send(&mut chart, &mut editor, EventInfo::pointer_down(p));
        send(&mut chart, &mut editor, EventInfo::pointer_up(p));
    }

    let active_leaves = chart
        .nodes()
        .filter(|(_, node)| node.is_active() && !node.has_children())
        .count();
    assert_eq!(active_leaves, 1);
    assert_eq!(chart.path(), "root.idle");
}
