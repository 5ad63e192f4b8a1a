// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Thalassa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Thalassa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::{Graph, GraphError, PaletteColor};

// Wire types are kept separate from the model so the document shape can stay
// stable while the in-memory representation evolves. Edge endpoints are
// encoded as indices into the node array: two edges that share an endpoint
// in memory share one entry in the document, and deserialization hands both
// the same reconstructed handle.

#[derive(Debug, Serialize, Deserialize)]
struct DocumentJson {
    nodes: Vec<NodeJson>,
    edges: Vec<EdgeJson>,
}

#[derive(Debug, Serialize, Deserialize)]
struct NodeJson {
    x: f32,
    y: f32,
    label: String,
    color: ColorJson,
}

#[derive(Debug, Serialize, Deserialize)]
struct EdgeJson {
    from: usize,
    to: usize,
    label: String,
    color: ColorJson,
    thickness: f32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum ColorJson {
    Red,
    Green,
    Blue,
    Orange,
    Cyan,
    Magenta,
    Black,
}

impl From<PaletteColor> for ColorJson {
    fn from(color: PaletteColor) -> Self {
        match color {
            PaletteColor::Red => Self::Red,
            PaletteColor::Green => Self::Green,
            PaletteColor::Blue => Self::Blue,
            PaletteColor::Orange => Self::Orange,
            PaletteColor::Cyan => Self::Cyan,
            PaletteColor::Magenta => Self::Magenta,
            PaletteColor::Black => Self::Black,
        }
    }
}

impl From<ColorJson> for PaletteColor {
    fn from(color: ColorJson) -> Self {
        match color {
            ColorJson::Red => Self::Red,
            ColorJson::Green => Self::Green,
            ColorJson::Blue => Self::Blue,
            ColorJson::Orange => Self::Orange,
            ColorJson::Cyan => Self::Cyan,
            ColorJson::Magenta => Self::Magenta,
            ColorJson::Black => Self::Black,
        }
    }
}

#[derive(Debug)]
pub enum FormatError {
    Json {
        source: serde_json::Error,
    },
    /// An edge references a node index outside the document's node array.
    EdgeEndpointOutOfRange {
        edge_index: usize,
        node_index: usize,
        node_count: usize,
    },
    NonPositiveThickness {
        edge_index: usize,
        thickness: f32,
    },
    /// An in-memory edge references a node the graph no longer holds.
    DetachedEdge {
        edge_index: usize,
        source: GraphError,
    },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json { source } => write!(f, "malformed diagram document: {source}"),
            Self::EdgeEndpointOutOfRange {
                edge_index,
                node_index,
                node_count,
            } => write!(
                f,
                "edge {edge_index} references node {node_index}, but the document has {node_count} nodes"
            ),
            Self::NonPositiveThickness {
                edge_index,
                thickness,
            } => write!(f, "edge {edge_index} has non-positive thickness {thickness}"),
            Self::DetachedEdge { edge_index, source } => {
                write!(f, "edge {edge_index} is detached: {source}")
            }
        }
    }
}

impl std::error::Error for FormatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json { source } => Some(source),
            Self::DetachedEdge { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Serializes the full graph to a pretty-printed JSON document.
pub fn serialize_graph(graph: &Graph) -> Result<String, FormatError> {
    let mut node_index = HashMap::with_capacity(graph.nodes().len());
    let mut nodes = Vec::with_capacity(graph.nodes().len());
    for (index, node) in graph.nodes().iter().enumerate() {
        node_index.insert(node.id(), index);
        nodes.push(NodeJson {
            x: node.x(),
            y: node.y(),
            label: node.label().to_owned(),
            color: node.color().into(),
        });
    }

    let mut edges = Vec::with_capacity(graph.edges().len());
    for (edge_index, edge) in graph.edges().iter().enumerate() {
        let resolve = |node_id| {
            node_index
                .get(&node_id)
                .copied()
                .ok_or(FormatError::DetachedEdge {
                    edge_index,
                    source: GraphError::MissingNode { node_id },
                })
        };
        edges.push(EdgeJson {
            from: resolve(edge.from())?,
            to: resolve(edge.to())?,
            label: edge.label().to_owned(),
            color: edge.color().into(),
            thickness: edge.thickness(),
        });
    }

    let document = DocumentJson { nodes, edges };
    serde_json::to_string_pretty(&document).map_err(|source| FormatError::Json { source })
}

/// Parses a JSON document into a fresh graph.
///
/// The result is a complete replacement: callers swap it in for their
/// current graph rather than merging. Edges pick up handles from the nodes
/// rebuilt in this call, so shared endpoints stay shared.
pub fn deserialize_graph(text: &str) -> Result<Graph, FormatError> {
    let document: DocumentJson =
        serde_json::from_str(text).map_err(|source| FormatError::Json { source })?;

    let mut graph = Graph::new();
    let mut handles = Vec::with_capacity(document.nodes.len());
    for node in document.nodes {
        handles.push(graph.add_node_with(node.x, node.y, node.label, node.color.into()));
    }

    let node_count = handles.len();
    for (edge_index, edge) in document.edges.into_iter().enumerate() {
        if edge.thickness <= 0.0 {
            return Err(FormatError::NonPositiveThickness {
                edge_index,
                thickness: edge.thickness,
            });
        }

        let resolve = |node_index: usize| {
            handles
                .get(node_index)
                .copied()
                .ok_or(FormatError::EdgeEndpointOutOfRange {
                    edge_index,
                    node_index,
                    node_count,
                })
        };
        let from = resolve(edge.from)?;
        let to = resolve(edge.to)?;

        graph
            .add_edge_with(from, to, edge.label, edge.color.into(), edge.thickness)
            .map_err(|source| FormatError::DetachedEdge { edge_index, source })?;
    }

    Ok(graph)
}
