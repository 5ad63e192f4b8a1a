// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Thalassa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Thalassa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Render projection.
//!
//! A pure pass from graph + transient interaction state to an ordered list
//! of draw primitives. Backends (the TUI canvas) consume the list; nothing
//! here mutates or caches model state, so projecting twice yields the same
//! primitives.

use crate::interact::PendingEdge;
use crate::model::{Graph, PaletteColor, EDGE_DEFAULT_COLOR, EDGE_DEFAULT_THICKNESS};

/// Radius nodes are drawn with, in canvas units.
pub const NODE_RADIUS: f32 = 40.0;

const NODE_LABEL_GAP: f32 = 5.0;
const EDGE_LABEL_OFFSET_X: f32 = 10.0;
const EDGE_LABEL_OFFSET_Y: f32 = -10.0;
const TEXT_COLOR: PaletteColor = PaletteColor::Black;

/// One draw command in canvas coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        color: PaletteColor,
        thickness: f32,
    },
    Circle {
        x: f32,
        y: f32,
        radius: f32,
        color: PaletteColor,
    },
    Text {
        x: f32,
        y: f32,
        text: String,
        color: PaletteColor,
    },
}

/// Projects the diagram (plus an in-progress edge, if any) to primitives.
///
/// Order: per edge a line and its label at the midpoint; per node a filled
/// circle and its label beside it; finally the rubber-band line of the edge
/// being dragged out.
pub fn project(graph: &Graph, pending_edge: Option<&PendingEdge>) -> Vec<Primitive> {
    let mut primitives =
        Vec::with_capacity(graph.edges().len() * 2 + graph.nodes().len() * 2 + 1);

    for edge in graph.edges() {
        let (Some(from), Some(to)) = (graph.node(edge.from()), graph.node(edge.to())) else {
            continue;
        };
        primitives.push(Primitive::Line {
            x1: from.x(),
            y1: from.y(),
            x2: to.x(),
            y2: to.y(),
            color: edge.color(),
            thickness: edge.thickness(),
        });
        let mid_x = (from.x() + to.x()) / 2.0;
        let mid_y = (from.y() + to.y()) / 2.0;
        primitives.push(Primitive::Text {
            x: mid_x + EDGE_LABEL_OFFSET_X,
            y: mid_y + EDGE_LABEL_OFFSET_Y,
            text: edge.label().to_owned(),
            color: TEXT_COLOR,
        });
    }

    for node in graph.nodes() {
        primitives.push(Primitive::Circle {
            x: node.x(),
            y: node.y(),
            radius: NODE_RADIUS,
            color: node.color(),
        });
        primitives.push(Primitive::Text {
            x: node.x() + NODE_RADIUS + NODE_LABEL_GAP,
            y: node.y(),
            text: node.label().to_owned(),
            color: TEXT_COLOR,
        });
    }

    if let Some(pending) = pending_edge {
        if let Some(from) = graph.node(pending.from()) {
            primitives.push(Primitive::Line {
                x1: from.x(),
                y1: from.y(),
                x2: pending.to_x(),
                y2: pending.to_y(),
                color: EDGE_DEFAULT_COLOR,
                thickness: EDGE_DEFAULT_THICKNESS,
            });
        }
    }

    primitives
}
