// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Thalassa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Thalassa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core diagram model.
//!
//! A diagram is a flat node + edge graph; edges reference nodes through
//! stable handles so shared endpoints stay shared under mutation.

pub mod graph;
pub mod ids;
pub mod palette;

pub use graph::{Edge, Graph, GraphError, Node};
pub use ids::{EdgeId, Id, NodeId};
pub use palette::{
    PaletteColor, EDGE_DEFAULT_COLOR, EDGE_DEFAULT_THICKNESS, NODE_DEFAULT_COLOR,
    THICKNESS_CHOICES,
};
