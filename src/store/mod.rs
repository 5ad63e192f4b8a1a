// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Thalassa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Thalassa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! File persistence.
//!
//! One flat JSON document per diagram file; saves are atomic.

pub mod graph_file;

pub use graph_file::{GraphFile, StoreError};
