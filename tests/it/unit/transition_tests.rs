//! Dotted-path transitions.

use crate::helpers::{entered, nested, root_idle_active};
use boardstate::{StateError, TransitionInfo};

#[test]
fn test_exit_fires_before_enter() {
    let (mut chart, mut editor) = entered(root_idle_active());

    chart.transition(&mut editor, "active", &TransitionInfo::Empty).unwrap();

    assert_eq!(editor.log, ["exit idle -> active", "enter active <- idle"]);
    assert_eq!(chart.path(), "root.active");
    assert!(!chart.is_active(chart.find("idle").unwrap()));
    assert!(chart.is_active(chart.find("active").unwrap()));
}

#[test]
fn test_transition_returns_invoking_node() {
    let (mut chart, mut editor) = entered(nested());
    let tool = chart.find("tool").unwrap();

    let returned = chart
        .transition_from(&mut editor, tool, "busy", &TransitionInfo::Empty)
        .unwrap();

    assert_eq!(returned, tool);
    assert_eq!(chart.path(), "root.tool.busy");
}

#[test]
fn test_repeated_transition_is_a_no_op() {
    let (mut chart, mut editor) = entered(root_idle_active());

    chart.transition(&mut editor, "active", &TransitionInfo::Empty).unwrap();
    editor.log.clear();
    chart.transition(&mut editor, "active", &TransitionInfo::Empty).unwrap();

    assert!(editor.log.is_empty());
    assert_eq!(chart.path(), "root.active");
}

#[test]
fn test_matching_segment_still_descends() {
    let (mut chart, mut editor) = entered(nested());

    chart.transition(&mut editor, "tool.busy", &TransitionInfo::Empty).unwrap();

    // `tool` is already current, only its children change
    assert_eq!(editor.log, ["exit idle -> busy", "enter busy <- idle"]);
    assert_eq!(chart.path(), "root.tool.busy");
}

#[test]
fn test_exit_is_deepest_first() {
    let (mut chart, mut editor) = entered(nested());
    chart.transition(&mut editor, "tool.busy", &TransitionInfo::Empty).unwrap();
    editor.log.clear();

    chart.transition(&mut editor, "other", &TransitionInfo::Empty).unwrap();

    assert_eq!(
        editor.log,
        ["exit busy -> other", "exit tool -> other", "enter other <- tool"]
    );
}

#[test]
fn test_entering_branch_resets_to_initial() {
    let (mut chart, mut editor) = entered(nested());
    chart.transition(&mut editor, "tool.busy", &TransitionInfo::Empty).unwrap();
    chart.transition(&mut editor, "other", &TransitionInfo::Empty).unwrap();
    editor.log.clear();

    chart.transition(&mut editor, "tool", &TransitionInfo::Empty).unwrap();

    assert_eq!(
        editor.log,
        ["exit other -> tool", "enter tool <- other", "enter idle <- other"]
    );
    assert_eq!(chart.path(), "root.tool.idle");
}

#[test]
fn test_unknown_child_is_an_error() {
    let (mut chart, mut editor) = entered(root_idle_active());

    let err = chart
        .transition(&mut editor, "nonexistent", &TransitionInfo::Empty)
        .unwrap_err();

    assert!(err.is_no_such_child());
    assert_eq!(err.to_string(), "root - no child state exists with the id nonexistent.");
    assert!(editor.log.is_empty());
    assert_eq!(chart.path(), "root.idle");
}

#[test]
fn test_failing_segment_keeps_earlier_segments() {
    let (mut chart, mut editor) = entered(nested());

    let err = chart
        .transition(&mut editor, "other.missing", &TransitionInfo::Empty)
        .unwrap_err();

    assert!(matches!(
        err,
        StateError::NoSuchChild { ref parent, ref id } if parent == "other" && id == "missing"
    ));
    // No rollback: `other` was entered before the bad segment was reached
    assert_eq!(chart.path(), "root.other");
}

#[test]
fn test_transition_carries_info() {
    use crate::helpers::Editor;
    use boardstate::{HookResult, StateChart, StateContext, StateDescriptor, StateHandlers};

    struct Capture;

    impl StateHandlers<Editor> for Capture {
        fn on_enter(&self, cx: &mut StateContext<'_, Editor>, info: &TransitionInfo, _from: &str) -> HookResult {
            let value = info.data().and_then(|data| data["tool"].as_str()).unwrap_or("none");
            cx.editor().record(format!("payload {value}"));
            Ok(())
        }
    }

    let descriptor = StateDescriptor::<Editor>::new("root").initial("idle").children(|| {
        vec![
            StateDescriptor::new("idle"),
            StateDescriptor::new("busy").handlers(|_| Capture),
        ]
    });
    let mut editor = Editor::new();
    let mut chart = StateChart::build(&descriptor, &editor).unwrap();
    chart.enter(&mut editor, &TransitionInfo::Empty, "initial").unwrap();

    let info = TransitionInfo::payload(serde_json::json!({ "tool": "pen" }));
    chart.transition(&mut editor, "busy", &info).unwrap();

    assert_eq!(editor.log, ["payload pen"]);
}

#[test]
fn test_transition_on_inactive_chart_enters_target() {
    let mut editor = crate::helpers::Editor::new();
    let mut chart = boardstate::StateChart::build(&root_idle_active(), &editor).unwrap();

    chart.transition(&mut editor, "active", &TransitionInfo::Empty).unwrap();

    // `idle` was never entered, so it is not exited
    assert_eq!(editor.log, ["enter active <- idle"]);
    assert!(chart.is_active(chart.find("active").unwrap()));
    assert!(!chart.is_active(chart.root()));
}
