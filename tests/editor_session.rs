//! End-to-end editor session scenarios
//!
//! These drive the public API the way a canvas shell would: typed events
//! in, rendered state out.

use std::time::{Duration, Instant};

use flowpad::{
    ConnectOutcome, ConnectRequest, Editor, EditorEvent, NodeCatalog, NodeId, NoticeKind, Panel,
    Position, SaveBlockReason, SAVE_BLOCKED_MESSAGE, SAVE_OK_MESSAGE,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn drop_at(editor: &mut Editor, x: f32, y: f32) -> NodeId {
    let before: Vec<NodeId> = editor.graph().node_ids().cloned().collect();
    editor.apply(EditorEvent::PaletteDrop {
        node_type: "textNode".to_string(),
        position: Position::new(x, y),
    });
    editor
        .graph()
        .node_ids()
        .find(|id| !before.contains(*id))
        .cloned()
        .expect("drop should create a node")
}

#[test]
fn build_a_flow_and_save_it() {
    init_tracing();
    let mut editor = Editor::seeded(NodeCatalog::builtin());

    // The seeded canvas is trivially savable
    assert!(editor.save().is_savable());

    // A second disconnected node blocks the save
    let start: NodeId = editor.graph().node_ids().next().cloned().unwrap();
    let second = drop_at(&mut editor, 400.0, 100.0);
    let check = editor.save();
    assert_eq!(check.reason, Some(SaveBlockReason::MultipleEntryPoints));
    assert_eq!(
        editor.notices().latest().unwrap().message,
        SAVE_BLOCKED_MESSAGE
    );

    // Wiring them up restores a single entry point
    editor.apply(EditorEvent::Connect(ConnectRequest::new(
        start,
        second.clone(),
    )));
    assert!(editor.save().is_savable());
    assert_eq!(editor.notices().latest().unwrap().message, SAVE_OK_MESSAGE);

    // Extending the chain keeps it savable
    let third = drop_at(&mut editor, 700.0, 100.0);
    assert!(!editor.save().is_savable());
    editor.apply(EditorEvent::Connect(ConnectRequest::new(second, third)));
    assert!(editor.save().is_savable());
}

#[test]
fn branching_is_silently_rejected() {
    let mut editor = Editor::new(NodeCatalog::builtin());
    let a = drop_at(&mut editor, 0.0, 0.0);
    let b = drop_at(&mut editor, 200.0, 0.0);
    let c = drop_at(&mut editor, 200.0, 200.0);

    assert!(editor
        .connect(ConnectRequest::new(a.clone(), b).with_handles("a", "in"))
        .is_added());

    // A second outgoing path from the same node is dropped without a notice
    let outcome = editor.connect(ConnectRequest::new(a, c));
    assert_eq!(outcome, ConnectOutcome::SourceOccupied);
    assert_eq!(editor.graph().edge_count(), 1);
    assert!(editor.notices().latest().is_none());
}

#[test]
fn settings_panel_edits_the_selected_node() {
    let mut editor = Editor::seeded(NodeCatalog::builtin());
    let node = editor.graph().node_ids().next().cloned().unwrap();

    editor.apply(EditorEvent::NodeClicked { id: node.clone() });
    assert_eq!(editor.panel(), Panel::Settings);

    editor.apply(EditorEvent::TextEdited {
        id: node.clone(),
        text: "Hi there! How can we help?".to_string(),
    });

    // The panel reads the edit straight from the graph
    assert_eq!(
        editor.selected_node().unwrap().data.text,
        "Hi there! How can we help?"
    );

    // The back button / pane click returns to the palette
    editor.apply(EditorEvent::PaneClicked);
    assert_eq!(editor.panel(), Panel::Palette);
    assert_eq!(
        editor.graph().get_node(&node).unwrap().data.text,
        "Hi there! How can we help?"
    );
}

#[test]
fn save_notice_expires_after_its_ttl() {
    let mut editor = Editor::new(NodeCatalog::builtin());
    editor.apply(EditorEvent::SaveRequested);

    let now = Instant::now();
    assert_eq!(
        editor.notices().visible(now).map(|n| n.kind),
        Some(NoticeKind::Success)
    );

    // The shell sweeps on its own clock; 3 seconds later the notice is gone
    let later = now + Duration::from_secs(4);
    editor.notices_mut().sweep(later);
    assert!(editor.notices().latest().is_none());
}

#[test]
fn journal_records_the_session_in_order() {
    let mut editor = Editor::new(NodeCatalog::builtin());
    let a = drop_at(&mut editor, 0.0, 0.0);
    let b = drop_at(&mut editor, 100.0, 0.0);

    editor.apply(EditorEvent::Connect(ConnectRequest::new(
        a.clone(),
        b.clone(),
    )));
    editor.apply(EditorEvent::Connect(ConnectRequest::new(a.clone(), b)));
    editor.apply(EditorEvent::SaveRequested);

    let entries = editor.journal().entries();
    let kinds: Vec<&str> = entries
        .iter()
        .map(|e| match &e.kind {
            flowpad::ActionKind::NodeAdded { .. } => "add",
            flowpad::ActionKind::ConnectAccepted { .. } => "connect",
            flowpad::ActionKind::ConnectRejected { .. } => "reject",
            flowpad::ActionKind::SaveAccepted { .. } => "save",
            _ => "other",
        })
        .collect();
    assert_eq!(kinds, vec!["add", "add", "connect", "reject", "save"]);

    // Sequence ids are dense and ordered
    for (i, entry) in entries.iter().enumerate() {
        assert_eq!(entry.id, i as u64);
    }

    // The rejected proposal is attributed to its source node
    assert!(editor
        .journal()
        .filter_node(&a)
        .iter()
        .any(|e| e.kind.is_rejection()));
}

#[test]
fn unknown_palette_types_never_reach_the_canvas() {
    let mut editor = Editor::new(NodeCatalog::builtin());

    editor.apply(EditorEvent::PaletteDrop {
        node_type: String::new(),
        position: Position::default(),
    });
    editor.apply(EditorEvent::PaletteDrop {
        node_type: "imageNode".to_string(),
        position: Position::default(),
    });

    assert_eq!(editor.graph().node_count(), 0);
    assert_eq!(editor.journal().rejections().len(), 2);
}
