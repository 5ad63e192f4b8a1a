// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Thalassa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Thalassa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Read-only hit-testing queries over the graph.
//!
//! Every interactive mode resolves pointer positions through these lookups.
//! A miss is a normal negative result (`None`), not an error.

use crate::model::{EdgeId, Graph, NodeId};

/// How close a press must land to a node's center to hit it.
pub const NODE_HIT_RADIUS: f32 = 40.0;
/// How close a press must land to an edge's label midpoint to hit it.
pub const EDGE_LABEL_HIT_RADIUS: f32 = 50.0;

/// First node in insertion order whose center lies within
/// [`NODE_HIT_RADIUS`] of the point.
///
/// First match wins, not the nearest: with overlapping nodes the earliest
/// one in the sequence is selected.
pub fn node_at(graph: &Graph, x: f32, y: f32) -> Option<NodeId> {
    graph
        .nodes()
        .iter()
        .find(|node| distance(x, y, node.x(), node.y()) <= NODE_HIT_RADIUS)
        .map(|node| node.id())
}

/// First edge in insertion order whose label midpoint (the mean of its
/// endpoints) lies strictly within [`EDGE_LABEL_HIT_RADIUS`] of the point.
pub fn edge_label_at(graph: &Graph, x: f32, y: f32) -> Option<EdgeId> {
    graph
        .edges()
        .iter()
        .find(|edge| {
            let (Some(from), Some(to)) = (graph.node(edge.from()), graph.node(edge.to())) else {
                return false;
            };
            let mid_x = (from.x() + to.x()) / 2.0;
            let mid_y = (from.y() + to.y()) / 2.0;
            distance(x, y, mid_x, mid_y) < EDGE_LABEL_HIT_RADIUS
        })
        .map(|edge| edge.id())
}

fn distance(x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    (x1 - x2).hypot(y1 - y2)
}
