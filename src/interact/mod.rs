// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Thalassa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Thalassa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Interaction state machine.
//!
//! Maps raw pointer gestures to graph mutations and prompt requests. User
//! input is modeled as an explicit pending action instead of a callback
//! chain: a gesture may return a [`PromptRequest`], the shell collects the
//! answer modally, and [`Editor::resolve_prompt`] applies it (possibly
//! issuing the next request of a modify chain). This keeps the whole flow
//! testable without a UI.

use crate::model::{EdgeId, Graph, NodeId, PaletteColor};
use crate::query;

/// The exclusive edit mode governing gesture interpretation.
///
/// Set externally by the shell's mode keys; gestures never change it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    AddNode,
    AddConnection,
    Modify,
}

impl Mode {
    pub fn name(self) -> &'static str {
        match self {
            Self::AddNode => "add node",
            Self::AddConnection => "connect",
            Self::Modify => "modify",
        }
    }
}

/// A raw pointer gesture in canvas coordinates.
///
/// Long-press detection is independent of the press/move/release sequence;
/// both streams can fire from the same physical gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    Press { x: f32, y: f32 },
    Move { x: f32, y: f32 },
    Release { x: f32, y: f32 },
    LongPress { x: f32, y: f32 },
}

/// An edge being dragged out: fixed start node, free-floating endpoint.
///
/// Pure transient state; nothing is committed to the graph until release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingEdge {
    from: NodeId,
    to_x: f32,
    to_y: f32,
}

impl PendingEdge {
    pub fn from(&self) -> NodeId {
        self.from
    }

    pub fn to_x(&self) -> f32 {
        self.to_x
    }

    pub fn to_y(&self) -> f32 {
        self.to_y
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Delete,
    Modify,
}

/// What the shell should ask the user. Titles are display-ready.
#[derive(Debug, Clone, PartialEq)]
pub enum PromptRequest {
    Text {
        title: &'static str,
        initial: String,
    },
    Menu {
        title: &'static str,
    },
    Color {
        title: &'static str,
        current: PaletteColor,
    },
    Thickness {
        title: &'static str,
        current: f32,
    },
}

/// The user's answer to the outstanding [`PromptRequest`].
#[derive(Debug, Clone, PartialEq)]
pub enum PromptReply {
    Text(String),
    Menu(MenuChoice),
    Color(PaletteColor),
    Thickness(f32),
}

pub const TITLE_NODE_LABEL: &str = "Node label";
pub const TITLE_EDGE_LABEL: &str = "Connection label";
pub const TITLE_NODE_MENU: &str = "Node";
pub const TITLE_EDGE_MENU: &str = "Connection";
pub const TITLE_COLOR: &str = "Select color";
pub const TITLE_THICKNESS: &str = "Select thickness";

/// The mutation waiting on a prompt answer.
#[derive(Debug, Clone, Copy, PartialEq)]
enum PendingAction {
    AddNodeLabel { x: f32, y: f32 },
    AddEdgeLabel { from: NodeId, to: NodeId },
    NodeMenu(NodeId),
    NodeLabel(NodeId),
    NodeColor(NodeId),
    EdgeMenu(EdgeId),
    EdgeLabel(EdgeId),
    EdgeColor(EdgeId),
    EdgeThickness(EdgeId),
}

/// Owns the graph and all transient interaction state.
///
/// The editor is the only mutation path into the graph; rendering reads it
/// through [`Editor::graph`] and [`Editor::pending_edge`].
#[derive(Debug, Default)]
pub struct Editor {
    graph: Graph,
    mode: Mode,
    drag: Option<NodeId>,
    pending_edge: Option<PendingEdge>,
    pending: Option<PendingAction>,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_graph(graph: Graph) -> Self {
        Self {
            graph,
            ..Self::default()
        }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Switches the edit mode, abandoning any half-finished gesture.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.drag = None;
        self.pending_edge = None;
    }

    pub fn pending_edge(&self) -> Option<&PendingEdge> {
        self.pending_edge.as_ref()
    }

    pub fn dragged_node(&self) -> Option<NodeId> {
        self.drag
    }

    pub fn has_open_prompt(&self) -> bool {
        self.pending.is_some()
    }

    /// Clears all edges, keeping the nodes (the "reset connections" command).
    pub fn clear_edges(&mut self) {
        self.graph.clear_edges();
    }

    /// Replaces the whole graph (load), dropping all transient state.
    pub fn replace_graph(&mut self, graph: Graph) {
        self.graph = graph;
        self.drag = None;
        self.pending_edge = None;
        self.pending = None;
    }

    /// Feeds one gesture through the state machine.
    ///
    /// Returns a prompt request when user input is needed to finish the
    /// mutation. While a prompt is outstanding gestures are ignored — the
    /// dialog is modal.
    pub fn handle_gesture(&mut self, gesture: Gesture) -> Option<PromptRequest> {
        if self.pending.is_some() {
            return None;
        }

        let request = match (self.mode, gesture) {
            (Mode::AddNode, Gesture::LongPress { x, y }) => {
                self.pending = Some(PendingAction::AddNodeLabel { x, y });
                Some(PromptRequest::Text {
                    title: TITLE_NODE_LABEL,
                    initial: String::new(),
                })
            }
            (Mode::AddConnection, Gesture::Press { x, y }) => {
                if let Some(from) = query::node_at(&self.graph, x, y) {
                    self.pending_edge = Some(PendingEdge { from, to_x: x, to_y: y });
                }
                None
            }
            (Mode::AddConnection, Gesture::Move { x, y }) => {
                if let Some(pending_edge) = &mut self.pending_edge {
                    pending_edge.to_x = x;
                    pending_edge.to_y = y;
                }
                None
            }
            (Mode::AddConnection, Gesture::Release { x, y }) => {
                let pending_edge = self.pending_edge.take();
                let target = query::node_at(&self.graph, x, y);
                match (pending_edge, target) {
                    (Some(pending_edge), Some(target)) if target != pending_edge.from => {
                        self.pending = Some(PendingAction::AddEdgeLabel {
                            from: pending_edge.from,
                            to: target,
                        });
                        Some(PromptRequest::Text {
                            title: TITLE_EDGE_LABEL,
                            initial: String::new(),
                        })
                    }
                    _ => None,
                }
            }
            // Long-press while dragging out a connection stays a no-op.
            (Mode::AddConnection, Gesture::LongPress { .. }) => None,
            (Mode::Modify, Gesture::Press { x, y }) => {
                self.drag = query::node_at(&self.graph, x, y);
                None
            }
            (Mode::Modify, Gesture::Move { x, y }) => {
                if let Some(id) = self.drag {
                    if let Some(node) = self.graph.node_mut(id) {
                        node.set_position(x, y);
                    }
                }
                None
            }
            (Mode::Modify, Gesture::Release { .. }) => {
                self.drag = None;
                None
            }
            (Mode::Modify, Gesture::LongPress { x, y }) => {
                if let Some(node) = query::node_at(&self.graph, x, y) {
                    self.pending = Some(PendingAction::NodeMenu(node));
                    Some(PromptRequest::Menu {
                        title: TITLE_NODE_MENU,
                    })
                } else if let Some(edge) = query::edge_label_at(&self.graph, x, y) {
                    self.pending = Some(PendingAction::EdgeMenu(edge));
                    Some(PromptRequest::Menu {
                        title: TITLE_EDGE_MENU,
                    })
                } else {
                    None
                }
            }
            _ => None,
        };

        if request.is_some() {
            // The dialog takes over; a drag or rubber-band line must not
            // survive underneath it.
            self.drag = None;
            self.pending_edge = None;
        }

        request
    }

    /// Applies the user's answer to the outstanding prompt.
    ///
    /// Returns the next prompt of a modify chain, if any. A reply whose kind
    /// does not match the outstanding request is treated as a cancel.
    pub fn resolve_prompt(&mut self, reply: PromptReply) -> Option<PromptRequest> {
        let pending = self.pending.take()?;

        match (pending, reply) {
            (PendingAction::AddNodeLabel { x, y }, PromptReply::Text(label)) => {
                self.graph.add_node(x, y, label);
                None
            }
            (PendingAction::AddEdgeLabel { from, to }, PromptReply::Text(label)) => {
                // Endpoints cannot vanish while the dialog is modal; a miss
                // is a silent no-op.
                let _ = self.graph.add_edge(from, to, label);
                None
            }
            (PendingAction::NodeMenu(id), PromptReply::Menu(MenuChoice::Delete)) => {
                self.graph.remove_node(id);
                None
            }
            (PendingAction::NodeMenu(id), PromptReply::Menu(MenuChoice::Modify)) => {
                let initial = self
                    .graph
                    .node(id)
                    .map(|node| node.label().to_owned())?;
                self.pending = Some(PendingAction::NodeLabel(id));
                Some(PromptRequest::Text {
                    title: TITLE_NODE_LABEL,
                    initial,
                })
            }
            (PendingAction::NodeLabel(id), PromptReply::Text(label)) => {
                let node = self.graph.node_mut(id)?;
                node.set_label(label);
                let current = node.color();
                self.pending = Some(PendingAction::NodeColor(id));
                Some(PromptRequest::Color {
                    title: TITLE_COLOR,
                    current,
                })
            }
            (PendingAction::NodeColor(id), PromptReply::Color(color)) => {
                if let Some(node) = self.graph.node_mut(id) {
                    node.set_color(color);
                }
                None
            }
            (PendingAction::EdgeMenu(id), PromptReply::Menu(MenuChoice::Delete)) => {
                self.graph.remove_edge(id);
                None
            }
            (PendingAction::EdgeMenu(id), PromptReply::Menu(MenuChoice::Modify)) => {
                let initial = self
                    .graph
                    .edge(id)
                    .map(|edge| edge.label().to_owned())?;
                self.pending = Some(PendingAction::EdgeLabel(id));
                Some(PromptRequest::Text {
                    title: TITLE_EDGE_LABEL,
                    initial,
                })
            }
            (PendingAction::EdgeLabel(id), PromptReply::Text(label)) => {
                let edge = self.graph.edge_mut(id)?;
                edge.set_label(label);
                let current = edge.color();
                self.pending = Some(PendingAction::EdgeColor(id));
                Some(PromptRequest::Color {
                    title: TITLE_COLOR,
                    current,
                })
            }
            (PendingAction::EdgeColor(id), PromptReply::Color(color)) => {
                let edge = self.graph.edge_mut(id)?;
                edge.set_color(color);
                let current = edge.thickness();
                self.pending = Some(PendingAction::EdgeThickness(id));
                Some(PromptRequest::Thickness {
                    title: TITLE_THICKNESS,
                    current,
                })
            }
            (PendingAction::EdgeThickness(id), PromptReply::Thickness(thickness)) => {
                if let Some(edge) = self.graph.edge_mut(id) {
                    edge.set_thickness(thickness);
                }
                None
            }
            // Kind mismatch: drop the pending mutation.
            _ => None,
        }
    }

    /// Dismisses the outstanding prompt without confirming.
    ///
    /// The pending mutation is dropped; steps of a modify chain applied by
    /// earlier replies stay applied.
    pub fn cancel_prompt(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests;
