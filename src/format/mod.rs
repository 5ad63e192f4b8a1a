// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Thalassa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Thalassa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Diagram document codec.
//!
//! One flat JSON document per diagram; round-trip safe, including shared
//! edge endpoints.

pub mod document;

pub use document::{deserialize_graph, serialize_graph, FormatError};
