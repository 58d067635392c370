//! Tool shortcuts and the tool lock.

use crate::helpers::{pt, send, Editor};
use boardstate::event::KeyboardEventInfo;
use boardstate::tools::editor_tools;
use boardstate::{ChartSettings, EventInfo, Modifiers, StateChart, TransitionInfo};

fn tools() -> (StateChart<Editor>, Editor) {
    let mut editor = Editor::new();
    let mut chart = StateChart::build(&editor_tools(&ChartSettings::default()), &editor).unwrap();
    chart.enter(&mut editor, &TransitionInfo::Empty, "initial").unwrap();
    (chart, editor)
}

#[test]
fn test_shortcuts_switch_tools() {
    let (mut chart, mut editor) = tools();

    send(&mut chart, &mut editor, EventInfo::key_down("p"));
    assert_eq!(chart.path(), "editor.pen.idle");

    send(&mut chart, &mut editor, EventInfo::key_down("v"));
    assert_eq!(chart.path(), "editor.select.idle");
}

#[test]
fn test_shortcut_for_current_tool_is_a_no_op() {
    let (mut chart, mut editor) = tools();
    send(&mut chart, &mut editor, EventInfo::pointer_down(pt(0.0, 0.0)));

    send(&mut chart, &mut editor, EventInfo::key_down("v"));

    // Still mid-press: select was not re-entered
    assert_eq!(chart.path(), "editor.select.pointing");
}

#[test]
fn test_modified_keys_are_not_shortcuts() {
    let (mut chart, mut editor) = tools();
    let info = KeyboardEventInfo::new("p", "KeyP").with_modifiers(Modifiers {
        ctrl: true,
        ..Modifiers::NONE
    });

    send(&mut chart, &mut editor, EventInfo::KeyDown(info));

    assert_eq!(chart.path(), "editor.select.idle");
}

#[test]
fn test_tool_lock_keeps_lockable_tool() {
    let (mut chart, mut editor) = tools();
    send(&mut chart, &mut editor, EventInfo::key_down("p"));
    editor.tool_locked = true;

    send(&mut chart, &mut editor, EventInfo::key_down("v"));

    assert_eq!(chart.path(), "editor.pen.idle");
}

#[test]
fn test_tool_lock_ignores_unlockable_tool() {
    let (mut chart, mut editor) = tools();
    editor.tool_locked = true;

    send(&mut chart, &mut editor, EventInfo::key_down("p"));

    // select is not lockable, so the lock does not hold it
    assert_eq!(chart.path(), "editor.pen.idle");
}

#[test]
fn test_lockable_flags() {
    let (chart, _editor) = tools();

    assert!(!chart.node(chart.find("select").unwrap()).is_lockable());
    assert!(chart.node(chart.find("pen").unwrap()).is_lockable());
    assert!(chart.node(chart.root()).is_lockable());
}

#[test]
fn test_switch_away_from_drag_keeps_translation() {
    let (mut chart, mut editor) = tools();

    send(&mut chart, &mut editor, EventInfo::pointer_down(pt(0.0, 0.0)));
    send(&mut chart, &mut editor, EventInfo::pointer_move(pt(10.0, 0.0)));
    send(&mut chart, &mut editor, EventInfo::key_down("p"));

    assert_eq!(chart.path(), "editor.pen.idle");
    assert_eq!(editor.selection_offset, pt(10.0, 0.0));
    assert!(!chart.is_active(chart.find("select.translating").unwrap()));
}
