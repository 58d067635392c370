//! Enter/exit ordering and failure behavior.

use crate::helpers::{entered, nested, recording, Editor, Recorder};
use boardstate::{HookResult, StateChart, StateContext, StateDescriptor, StateHandlers, TransitionInfo};

#[test]
fn test_enter_is_pre_order() {
    let mut editor = Editor::new();
    let mut chart = StateChart::build(&nested(), &editor).unwrap();

    chart.enter(&mut editor, &TransitionInfo::Empty, "initial").unwrap();

    assert_eq!(
        editor.log,
        ["enter root <- initial", "enter tool <- initial", "enter idle <- initial"]
    );
    assert_eq!(chart.path(), "root.tool.idle");
}

#[test]
fn test_exit_is_post_order() {
    let (mut chart, mut editor) = entered(nested());

    chart.exit(&mut editor, &TransitionInfo::Empty, "disposed").unwrap();

    assert_eq!(
        editor.log,
        ["exit idle -> disposed", "exit tool -> disposed", "exit root -> disposed"]
    );
    assert!(chart.nodes().all(|(_, node)| !node.is_active()));
    assert_eq!(chart.active_leaf(), None);
}

#[test]
fn test_exactly_one_current_child_per_composite() {
    let (mut chart, mut editor) = entered(nested());
    chart.transition(&mut editor, "tool.busy", &TransitionInfo::Empty).unwrap();

    for (id, node) in chart.nodes() {
        if node.has_children() {
            let current = node.current().expect("composite without a current child");
            assert!(node.children().contains(&current));
            let active = node.children().iter().filter(|&&c| chart.is_active(c)).count();
            assert_eq!(active, 1, "node {:?}", chart.node(id).id());
        }
    }
}

#[test]
fn test_active_path_and_leaf() {
    let (mut chart, mut editor) = entered(nested());
    chart.transition(&mut editor, "tool.busy", &TransitionInfo::Empty).unwrap();

    let ids: Vec<_> = chart
        .active_path()
        .into_iter()
        .map(|n| chart.node(n).id().to_string())
        .collect();
    assert_eq!(ids, ["root", "tool", "busy"]);
    assert_eq!(chart.active_leaf(), chart.find("tool.busy"));
    assert_eq!(chart.path_of(chart.find("tool").unwrap()), "tool.busy");
}

/// `Recorder` that fails in one hook
struct Fails {
    recorder: Recorder,
    on_enter: bool,
}

impl StateHandlers<Editor> for Fails {
    fn on_enter(&self, cx: &mut StateContext<'_, Editor>, info: &TransitionInfo, from: &str) -> HookResult {
        self.recorder.on_enter(cx, info, from)?;
        if self.on_enter {
            return Err(anyhow::anyhow!("enter failed").into());
        }
        Ok(())
    }

    fn on_exit(&self, cx: &mut StateContext<'_, Editor>, info: &TransitionInfo, to: &str) -> HookResult {
        self.recorder.on_exit(cx, info, to)?;
        if !self.on_enter {
            return Err(anyhow::anyhow!("exit failed").into());
        }
        Ok(())
    }
}

fn failing(id: &'static str, on_enter: bool) -> StateDescriptor<Editor> {
    StateDescriptor::new(id).handlers(move |_| Fails {
        recorder: Recorder::new(id),
        on_enter,
    })
}

#[test]
fn test_failed_exit_leaves_target_unentered() {
    let descriptor = recording("root")
        .initial("idle")
        .children(|| vec![failing("idle", false), recording("active")]);
    let (mut chart, mut editor) = entered(descriptor);

    let err = chart.transition(&mut editor, "active", &TransitionInfo::Empty).unwrap_err();

    assert!(err.to_string().contains("exit failed"));
    assert_eq!(editor.log, ["exit idle -> active"]);
    // `idle` is already inactive and `active` never entered
    let root = chart.node(chart.root());
    assert_eq!(root.current(), chart.find("idle"));
    assert!(!chart.is_active(chart.find("idle").unwrap()));
    assert!(!chart.is_active(chart.find("active").unwrap()));
    assert_eq!(chart.path(), "root");
}

#[test]
fn test_failed_enter_keeps_partial_activation() {
    let descriptor = recording("root").initial("idle").children(|| {
        vec![
            recording("idle"),
            failing("active", true)
                .initial("inner")
                .children(|| vec![recording("inner")]),
        ]
    });
    let (mut chart, mut editor) = entered(descriptor);

    let err = chart.transition(&mut editor, "active", &TransitionInfo::Empty).unwrap_err();

    assert!(matches!(err, boardstate::StateError::Hook(_)));
    assert_eq!(editor.log, ["exit idle -> active", "enter active <- idle"]);
    assert_eq!(chart.path(), "root.active");
    assert!(!chart.is_active(chart.find("active.inner").unwrap()));
}

#[test]
fn test_exit_skips_inactive_child() {
    let mut editor = Editor::new();
    let mut chart = StateChart::build(&nested(), &editor).unwrap();

    chart.exit(&mut editor, &TransitionInfo::Empty, "gone").unwrap();

    // Only the root's own hook runs; nothing below it was ever entered
    assert_eq!(editor.log, ["exit root -> gone"]);
}
