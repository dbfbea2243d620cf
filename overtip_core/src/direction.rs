// Copyright 2026 the Overtip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Compass side of the anchor the tooltip is placed on.
///
/// This is a fixed, closed set of eight values; placement dispatch is an
/// array indexed by [`Direction::index`], never open-ended string matching.
/// The short names double as the CSS class applied to the tooltip node so
/// stylesheets can orient the pin indicator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Above the anchor, horizontally centered.
    #[default]
    North,
    /// Below the anchor, horizontally centered.
    South,
    /// Right of the anchor, vertically centered.
    East,
    /// Left of the anchor, vertically centered.
    West,
    /// Above and right of the anchor.
    NorthEast,
    /// Above and left of the anchor.
    NorthWest,
    /// Below and right of the anchor.
    SouthEast,
    /// Below and left of the anchor.
    SouthWest,
}

impl Direction {
    /// All eight directions, in dispatch-table order.
    pub const ALL: [Self; 8] = [
        Self::North,
        Self::South,
        Self::East,
        Self::West,
        Self::NorthEast,
        Self::NorthWest,
        Self::SouthEast,
        Self::SouthWest,
    ];

    /// Stable index into the placement dispatch table (0..8).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::North => 0,
            Self::South => 1,
            Self::East => 2,
            Self::West => 3,
            Self::NorthEast => 4,
            Self::NorthWest => 5,
            Self::SouthEast => 6,
            Self::SouthWest => 7,
        }
    }

    /// Short compass name, also used as the tooltip node's direction class.
    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::North => "n",
            Self::South => "s",
            Self::East => "e",
            Self::West => "w",
            Self::NorthEast => "ne",
            Self::NorthWest => "nw",
            Self::SouthEast => "se",
            Self::SouthWest => "sw",
        }
    }

    /// Parses a short compass name (`"n"`, `"sw"`, ...).
    ///
    /// Returns `None` for anything outside the closed set.
    #[must_use]
    pub fn from_class_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.class_name() == name)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}
