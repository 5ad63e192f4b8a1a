// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Thalassa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Thalassa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use super::ids::{EdgeId, NodeId};
use super::palette::{
    PaletteColor, EDGE_DEFAULT_COLOR, EDGE_DEFAULT_THICKNESS, NODE_DEFAULT_COLOR,
};

/// A labeled, colored point entity on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    id: NodeId,
    x: f32,
    y: f32,
    label: String,
    color: PaletteColor,
}

impl Node {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn color(&self) -> PaletteColor {
        self.color
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn set_color(&mut self, color: PaletteColor) {
        self.color = color;
    }
}

/// A labeled, colored, weighted connection between two nodes.
///
/// Endpoints are non-owning [`NodeId`] handles into the same graph; an edge
/// never outlives its endpoints because node removal cascades.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    id: EdgeId,
    from: NodeId,
    to: NodeId,
    label: String,
    color: PaletteColor,
    thickness: f32,
}

impl Edge {
    pub fn id(&self) -> EdgeId {
        self.id
    }

    pub fn from(&self) -> NodeId {
        self.from
    }

    pub fn to(&self) -> NodeId {
        self.to
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn color(&self) -> PaletteColor {
        self.color
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn set_color(&mut self, color: PaletteColor) {
        self.color = color;
    }

    pub fn set_thickness(&mut self, thickness: f32) {
        self.thickness = thickness;
    }
}

/// The complete node + edge collection; the persisted unit.
///
/// Both sequences keep insertion order (rendering and serialization are
/// deterministic); order carries no further meaning. Every edge endpoint is
/// guaranteed to exist in the node sequence at all times.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    next_node_id: u64,
    next_edge_id: u64,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|node| node.id == id)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|node| node.id == id)
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.iter().find(|edge| edge.id == id)
    }

    pub fn edge_mut(&mut self, id: EdgeId) -> Option<&mut Edge> {
        self.edges.iter_mut().find(|edge| edge.id == id)
    }

    /// Adds a node at the given position with the default color.
    pub fn add_node(&mut self, x: f32, y: f32, label: impl Into<String>) -> NodeId {
        self.add_node_with(x, y, label, NODE_DEFAULT_COLOR)
    }

    pub fn add_node_with(
        &mut self,
        x: f32,
        y: f32,
        label: impl Into<String>,
        color: PaletteColor,
    ) -> NodeId {
        let id = NodeId::new(self.next_node_id);
        self.next_node_id += 1;
        self.nodes.push(Node {
            id,
            x,
            y,
            label: label.into(),
            color,
        });
        id
    }

    /// Adds an edge with the default color and thickness.
    ///
    /// Both endpoints must already exist; this is what keeps the no-dangling
    /// invariant intact. Self-loops are not rejected here — the interaction
    /// layer never constructs one since it requires two distinct hit nodes.
    pub fn add_edge(
        &mut self,
        from: NodeId,
        to: NodeId,
        label: impl Into<String>,
    ) -> Result<EdgeId, GraphError> {
        self.add_edge_with(from, to, label, EDGE_DEFAULT_COLOR, EDGE_DEFAULT_THICKNESS)
    }

    pub fn add_edge_with(
        &mut self,
        from: NodeId,
        to: NodeId,
        label: impl Into<String>,
        color: PaletteColor,
        thickness: f32,
    ) -> Result<EdgeId, GraphError> {
        for endpoint in [from, to] {
            if self.node(endpoint).is_none() {
                return Err(GraphError::MissingNode { node_id: endpoint });
            }
        }

        let id = EdgeId::new(self.next_edge_id);
        self.next_edge_id += 1;
        self.edges.push(Edge {
            id,
            from,
            to,
            label: label.into(),
            color,
            thickness,
        });
        Ok(id)
    }

    /// Removes the node and, atomically, every edge touching it.
    ///
    /// Returns `false` if the node was not present.
    pub fn remove_node(&mut self, id: NodeId) -> bool {
        let before = self.nodes.len();
        self.nodes.retain(|node| node.id != id);
        if self.nodes.len() == before {
            return false;
        }

        self.edges.retain(|edge| edge.from != id && edge.to != id);
        true
    }

    pub fn remove_edge(&mut self, id: EdgeId) -> bool {
        let before = self.edges.len();
        self.edges.retain(|edge| edge.id != id);
        self.edges.len() != before
    }

    /// Clears all edges, keeping the nodes.
    pub fn clear_edges(&mut self) {
        self.edges.clear();
    }

    /// Clears edges and nodes.
    pub fn clear_all(&mut self) {
        self.edges.clear();
        self.nodes.clear();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    MissingNode { node_id: NodeId },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingNode { node_id } => {
                write!(f, "edge endpoint not found (node id={node_id})")
            }
        }
    }
}

impl std::error::Error for GraphError {}
