// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Thalassa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Thalassa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Thalassa — node-and-edge diagram editor for the terminal.
//!
//! Single-crate layout: the diagram model, its JSON codec, hit-testing,
//! the gesture-driven editor core, and the ratatui shell.

pub mod format;
pub mod interact;
pub mod model;
pub mod query;
pub mod render;
pub mod store;
pub mod tui;
