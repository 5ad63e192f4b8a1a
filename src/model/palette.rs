// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Thalassa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Thalassa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Fixed style palette shared by nodes and edges.

use std::fmt;

/// One of the seven palette colors a node or edge can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteColor {
    Red,
    Green,
    Blue,
    Orange,
    Cyan,
    Magenta,
    Black,
}

impl PaletteColor {
    /// All palette colors in the order the color picker presents them.
    pub const ALL: [PaletteColor; 7] = [
        Self::Red,
        Self::Green,
        Self::Blue,
        Self::Orange,
        Self::Cyan,
        Self::Magenta,
        Self::Black,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Orange => "orange",
            Self::Cyan => "cyan",
            Self::Magenta => "magenta",
            Self::Black => "black",
        }
    }
}

impl fmt::Display for PaletteColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub const NODE_DEFAULT_COLOR: PaletteColor = PaletteColor::Red;
pub const EDGE_DEFAULT_COLOR: PaletteColor = PaletteColor::Black;
pub const EDGE_DEFAULT_THICKNESS: f32 = 15.0;

/// The thickness choices the picker offers.
pub const THICKNESS_CHOICES: [f32; 4] = [5.0, 10.0, 15.0, 20.0];
