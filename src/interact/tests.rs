// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Thalassa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Thalassa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::{Editor, Gesture, MenuChoice, Mode, PromptReply, PromptRequest};
use crate::model::{NodeId, PaletteColor, EDGE_DEFAULT_COLOR, EDGE_DEFAULT_THICKNESS};

fn press(x: f32, y: f32) -> Gesture {
    Gesture::Press { x, y }
}

fn movement(x: f32, y: f32) -> Gesture {
    Gesture::Move { x, y }
}

fn release(x: f32, y: f32) -> Gesture {
    Gesture::Release { x, y }
}

fn long_press(x: f32, y: f32) -> Gesture {
    Gesture::LongPress { x, y }
}

/// Long-press at a position, answer the label prompt, return the new node.
fn add_node(editor: &mut Editor, x: f32, y: f32, label: &str) -> NodeId {
    assert_eq!(editor.mode(), Mode::AddNode);
    let request = editor.handle_gesture(long_press(x, y)).expect("label prompt");
    assert!(matches!(request, PromptRequest::Text { .. }));
    let next = editor.resolve_prompt(PromptReply::Text(label.to_owned()));
    assert_eq!(next, None);
    editor
        .graph()
        .nodes()
        .last()
        .map(|node| node.id())
        .expect("node added")
}

fn editor_with_two_nodes() -> (Editor, NodeId, NodeId) {
    let mut editor = Editor::new();
    let a = add_node(&mut editor, 100.0, 100.0, "A");
    let b = add_node(&mut editor, 300.0, 100.0, "B");
    (editor, a, b)
}

fn connect(editor: &mut Editor, from: (f32, f32), to: (f32, f32), label: &str) {
    editor.set_mode(Mode::AddConnection);
    assert_eq!(editor.handle_gesture(press(from.0, from.1)), None);
    assert_eq!(editor.handle_gesture(movement(to.0, to.1)), None);
    let request = editor.handle_gesture(release(to.0, to.1)).expect("label prompt");
    assert!(matches!(request, PromptRequest::Text { .. }));
    assert_eq!(editor.resolve_prompt(PromptReply::Text(label.to_owned())), None);
}

#[test]
fn add_node_mode_prompts_on_long_press_and_adds_at_the_pressed_position() {
    let mut editor = Editor::new();
    let id = add_node(&mut editor, 42.0, 24.0, "hello");

    let node = editor.graph().node(id).expect("node");
    assert_eq!((node.x(), node.y()), (42.0, 24.0));
    assert_eq!(node.label(), "hello");
}

#[test]
fn add_node_mode_ignores_press_move_release() {
    let mut editor = Editor::new();
    assert_eq!(editor.handle_gesture(press(10.0, 10.0)), None);
    assert_eq!(editor.handle_gesture(movement(20.0, 20.0)), None);
    assert_eq!(editor.handle_gesture(release(20.0, 20.0)), None);
    assert!(editor.graph().nodes().is_empty());
}

#[test]
fn cancelling_the_node_label_prompt_adds_nothing() {
    let mut editor = Editor::new();
    editor.handle_gesture(long_press(10.0, 10.0)).expect("prompt");
    editor.cancel_prompt();
    assert!(editor.graph().nodes().is_empty());
    assert!(!editor.has_open_prompt());
}

#[test]
fn connection_drag_tracks_the_pointer_without_mutating_the_graph() {
    let (mut editor, a, _b) = editor_with_two_nodes();
    editor.set_mode(Mode::AddConnection);

    editor.handle_gesture(press(100.0, 100.0));
    let pending = editor.pending_edge().expect("pending edge");
    assert_eq!(pending.from(), a);

    editor.handle_gesture(movement(180.0, 140.0));
    let pending = editor.pending_edge().expect("pending edge");
    assert_eq!((pending.to_x(), pending.to_y()), (180.0, 140.0));

    assert!(editor.graph().edges().is_empty());
}

#[test]
fn connection_press_over_empty_space_starts_nothing() {
    let (mut editor, _a, _b) = editor_with_two_nodes();
    editor.set_mode(Mode::AddConnection);

    editor.handle_gesture(press(600.0, 600.0));
    assert_eq!(editor.pending_edge(), None);

    // The subsequent release over a node must not create an edge either.
    assert_eq!(editor.handle_gesture(release(300.0, 100.0)), None);
    assert!(editor.graph().edges().is_empty());
}

#[test]
fn connection_release_over_a_distinct_node_prompts_and_adds_with_defaults() {
    let (mut editor, a, b) = editor_with_two_nodes();
    connect(&mut editor, (100.0, 100.0), (300.0, 100.0), "L1");

    assert_eq!(editor.graph().edges().len(), 1);
    let edge = &editor.graph().edges()[0];
    assert_eq!(edge.from(), a);
    assert_eq!(edge.to(), b);
    assert_eq!(edge.label(), "L1");
    assert_eq!(edge.color(), EDGE_DEFAULT_COLOR);
    assert_eq!(edge.thickness(), EDGE_DEFAULT_THICKNESS);
    assert_eq!(editor.pending_edge(), None);
}

#[test]
fn connection_release_over_the_origin_never_adds_an_edge() {
    let (mut editor, _a, _b) = editor_with_two_nodes();
    editor.set_mode(Mode::AddConnection);

    editor.handle_gesture(press(100.0, 100.0));
    editor.handle_gesture(movement(110.0, 110.0));
    assert_eq!(editor.handle_gesture(release(110.0, 110.0)), None);

    assert!(editor.graph().edges().is_empty());
    assert_eq!(editor.pending_edge(), None);
}

#[test]
fn connection_release_over_empty_space_cancels_the_pending_edge() {
    let (mut editor, _a, _b) = editor_with_two_nodes();
    editor.set_mode(Mode::AddConnection);

    editor.handle_gesture(press(100.0, 100.0));
    assert_eq!(editor.handle_gesture(release(600.0, 600.0)), None);

    assert!(editor.graph().edges().is_empty());
    assert_eq!(editor.pending_edge(), None);
}

#[test]
fn cancelling_the_edge_label_prompt_drops_the_edge() {
    let (mut editor, _a, _b) = editor_with_two_nodes();
    editor.set_mode(Mode::AddConnection);

    editor.handle_gesture(press(100.0, 100.0));
    editor.handle_gesture(release(300.0, 100.0)).expect("prompt");
    editor.cancel_prompt();

    assert!(editor.graph().edges().is_empty());
}

#[test]
fn long_press_in_connection_mode_is_a_no_op() {
    let (mut editor, _a, _b) = editor_with_two_nodes();
    editor.set_mode(Mode::AddConnection);

    assert_eq!(editor.handle_gesture(long_press(100.0, 100.0)), None);
    assert!(!editor.has_open_prompt());

    // Also mid-drag.
    editor.handle_gesture(press(100.0, 100.0));
    assert_eq!(editor.handle_gesture(long_press(100.0, 100.0)), None);
    assert!(editor.pending_edge().is_some());
}

#[test]
fn modify_drag_moves_the_node_continuously() {
    let (mut editor, a, _b) = editor_with_two_nodes();
    editor.set_mode(Mode::Modify);

    editor.handle_gesture(press(100.0, 100.0));
    assert_eq!(editor.dragged_node(), Some(a));

    editor.handle_gesture(movement(150.0, 120.0));
    let node = editor.graph().node(a).expect("node");
    assert_eq!((node.x(), node.y()), (150.0, 120.0));

    editor.handle_gesture(movement(220.0, 90.0));
    let node = editor.graph().node(a).expect("node");
    assert_eq!((node.x(), node.y()), (220.0, 90.0));

    editor.handle_gesture(release(220.0, 90.0));
    assert_eq!(editor.dragged_node(), None);
}

#[test]
fn modify_drag_over_empty_space_does_nothing() {
    let (mut editor, a, b) = editor_with_two_nodes();
    editor.set_mode(Mode::Modify);

    editor.handle_gesture(press(600.0, 600.0));
    assert_eq!(editor.dragged_node(), None);
    editor.handle_gesture(movement(50.0, 50.0));

    let node_a = editor.graph().node(a).expect("a");
    let node_b = editor.graph().node(b).expect("b");
    assert_eq!((node_a.x(), node_a.y()), (100.0, 100.0));
    assert_eq!((node_b.x(), node_b.y()), (300.0, 100.0));
}

#[test]
fn dragging_an_endpoint_is_visible_through_the_edge() {
    let (mut editor, a, _b) = editor_with_two_nodes();
    connect(&mut editor, (100.0, 100.0), (300.0, 100.0), "L1");

    editor.set_mode(Mode::Modify);
    editor.handle_gesture(press(100.0, 100.0));
    editor.handle_gesture(movement(10.0, 10.0));

    let edge = &editor.graph().edges()[0];
    assert_eq!(edge.from(), a);
    let from = editor.graph().node(edge.from()).expect("from node");
    assert_eq!((from.x(), from.y()), (10.0, 10.0));
}

#[test]
fn modify_long_press_on_a_node_opens_the_node_menu() {
    let (mut editor, _a, _b) = editor_with_two_nodes();
    editor.set_mode(Mode::Modify);

    let request = editor.handle_gesture(long_press(100.0, 100.0)).expect("menu");
    assert_eq!(request, PromptRequest::Menu { title: "Node" });
}

#[test]
fn modify_long_press_prefers_nodes_over_edge_labels() {
    let mut editor = Editor::new();
    let _a = add_node(&mut editor, 0.0, 0.0, "a");
    let _b = add_node(&mut editor, 200.0, 0.0, "b");
    connect(&mut editor, (0.0, 0.0), (200.0, 0.0), "e");
    // A node sitting right on the edge's midpoint.
    editor.set_mode(Mode::AddNode);
    add_node(&mut editor, 100.0, 0.0, "mid");

    editor.set_mode(Mode::Modify);
    let request = editor.handle_gesture(long_press(100.0, 0.0)).expect("menu");
    assert_eq!(request, PromptRequest::Menu { title: "Node" });
}

#[test]
fn modify_long_press_over_nothing_opens_nothing() {
    let (mut editor, _a, _b) = editor_with_two_nodes();
    editor.set_mode(Mode::Modify);
    assert_eq!(editor.handle_gesture(long_press(600.0, 600.0)), None);
}

#[test]
fn node_menu_delete_cascades() {
    let (mut editor, _a, b) = editor_with_two_nodes();
    connect(&mut editor, (100.0, 100.0), (300.0, 100.0), "L1");

    editor.set_mode(Mode::Modify);
    editor.handle_gesture(long_press(100.0, 100.0)).expect("menu");
    assert_eq!(editor.resolve_prompt(PromptReply::Menu(MenuChoice::Delete)), None);

    assert_eq!(editor.graph().nodes().len(), 1);
    assert_eq!(editor.graph().nodes()[0].id(), b);
    assert!(editor.graph().edges().is_empty());
}

#[test]
fn node_menu_modify_chains_label_then_color() {
    let (mut editor, a, _b) = editor_with_two_nodes();
    editor.set_mode(Mode::Modify);

    editor.handle_gesture(long_press(100.0, 100.0)).expect("menu");
    let request = editor
        .resolve_prompt(PromptReply::Menu(MenuChoice::Modify))
        .expect("label prompt");
    assert_eq!(
        request,
        PromptRequest::Text {
            title: "Node label",
            initial: "A".to_owned(),
        }
    );

    let request = editor
        .resolve_prompt(PromptReply::Text("A2".to_owned()))
        .expect("color prompt");
    assert!(matches!(request, PromptRequest::Color { .. }));
    // The label is already applied before the color is picked.
    assert_eq!(editor.graph().node(a).expect("node").label(), "A2");

    assert_eq!(editor.resolve_prompt(PromptReply::Color(PaletteColor::Green)), None);
    assert_eq!(editor.graph().node(a).expect("node").color(), PaletteColor::Green);
}

#[test]
fn cancelling_mid_chain_keeps_the_applied_steps() {
    let (mut editor, a, _b) = editor_with_two_nodes();
    editor.set_mode(Mode::Modify);

    editor.handle_gesture(long_press(100.0, 100.0)).expect("menu");
    editor.resolve_prompt(PromptReply::Menu(MenuChoice::Modify)).expect("label prompt");
    editor.resolve_prompt(PromptReply::Text("renamed".to_owned())).expect("color prompt");
    editor.cancel_prompt();

    let node = editor.graph().node(a).expect("node");
    assert_eq!(node.label(), "renamed");
    assert_eq!(node.color(), crate::model::NODE_DEFAULT_COLOR);
    assert!(!editor.has_open_prompt());
}

#[test]
fn edge_menu_delete_removes_only_that_edge() {
    let (mut editor, _a, _b) = editor_with_two_nodes();
    connect(&mut editor, (100.0, 100.0), (300.0, 100.0), "L1");

    editor.set_mode(Mode::Modify);
    let request = editor.handle_gesture(long_press(200.0, 100.0)).expect("menu");
    assert_eq!(request, PromptRequest::Menu { title: "Connection" });

    assert_eq!(editor.resolve_prompt(PromptReply::Menu(MenuChoice::Delete)), None);
    assert!(editor.graph().edges().is_empty());
    assert_eq!(editor.graph().nodes().len(), 2);
}

#[test]
fn edge_menu_modify_chains_label_color_thickness() {
    let (mut editor, _a, _b) = editor_with_two_nodes();
    connect(&mut editor, (100.0, 100.0), (300.0, 100.0), "L1");

    editor.set_mode(Mode::Modify);
    editor.handle_gesture(long_press(200.0, 100.0)).expect("menu");

    let request = editor
        .resolve_prompt(PromptReply::Menu(MenuChoice::Modify))
        .expect("label prompt");
    assert_eq!(
        request,
        PromptRequest::Text {
            title: "Connection label",
            initial: "L1".to_owned(),
        }
    );

    let request = editor
        .resolve_prompt(PromptReply::Text("L2".to_owned()))
        .expect("color prompt");
    assert!(matches!(request, PromptRequest::Color { .. }));

    let request = editor
        .resolve_prompt(PromptReply::Color(PaletteColor::Blue))
        .expect("thickness prompt");
    assert_eq!(
        request,
        PromptRequest::Thickness {
            title: "Select thickness",
            current: EDGE_DEFAULT_THICKNESS,
        }
    );

    assert_eq!(editor.resolve_prompt(PromptReply::Thickness(5.0)), None);

    let edge = &editor.graph().edges()[0];
    assert_eq!(edge.label(), "L2");
    assert_eq!(edge.color(), PaletteColor::Blue);
    assert_eq!(edge.thickness(), 5.0);
}

#[test]
fn gestures_are_ignored_while_a_prompt_is_open() {
    let mut editor = Editor::new();
    editor.handle_gesture(long_press(10.0, 10.0)).expect("prompt");

    assert_eq!(editor.handle_gesture(long_press(90.0, 90.0)), None);
    assert_eq!(editor.handle_gesture(press(90.0, 90.0)), None);
    assert!(editor.has_open_prompt());

    editor.resolve_prompt(PromptReply::Text("only".to_owned()));
    assert_eq!(editor.graph().nodes().len(), 1);
    assert_eq!(editor.graph().nodes()[0].label(), "only");
}

#[test]
fn opening_a_prompt_clears_the_drag() {
    let (mut editor, _a, _b) = editor_with_two_nodes();
    editor.set_mode(Mode::Modify);

    editor.handle_gesture(press(100.0, 100.0));
    assert!(editor.dragged_node().is_some());

    editor.handle_gesture(long_press(100.0, 100.0)).expect("menu");
    assert_eq!(editor.dragged_node(), None);
}

#[test]
fn mismatched_reply_kind_drops_the_pending_mutation() {
    let mut editor = Editor::new();
    editor.handle_gesture(long_press(10.0, 10.0)).expect("text prompt");

    assert_eq!(editor.resolve_prompt(PromptReply::Color(PaletteColor::Red)), None);
    assert!(editor.graph().nodes().is_empty());
    assert!(!editor.has_open_prompt());
}

#[test]
fn switching_modes_abandons_the_gesture_in_progress() {
    let (mut editor, _a, _b) = editor_with_two_nodes();
    editor.set_mode(Mode::AddConnection);
    editor.handle_gesture(press(100.0, 100.0));
    assert!(editor.pending_edge().is_some());

    editor.set_mode(Mode::Modify);
    assert_eq!(editor.pending_edge(), None);
    assert_eq!(editor.dragged_node(), None);
}

#[test]
fn clear_edges_keeps_nodes() {
    let (mut editor, _a, _b) = editor_with_two_nodes();
    connect(&mut editor, (100.0, 100.0), (300.0, 100.0), "L1");

    editor.clear_edges();

    assert!(editor.graph().edges().is_empty());
    assert_eq!(editor.graph().nodes().len(), 2);
}

#[test]
fn replace_graph_drops_all_transient_state() {
    let (mut editor, _a, _b) = editor_with_two_nodes();
    editor.set_mode(Mode::AddConnection);
    editor.handle_gesture(press(100.0, 100.0));

    editor.replace_graph(crate::model::Graph::new());

    assert!(editor.graph().nodes().is_empty());
    assert_eq!(editor.pending_edge(), None);
    assert!(!editor.has_open_prompt());
}
