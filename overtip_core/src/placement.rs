// Copyright 2026 the Overtip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Direction dispatch: mapping a compass [`Direction`] plus a projected
//! anchor bbox to the tooltip's `(top, left)` corner.
//!
//! The mapping is a fixed table indexed by the eight-value enum, and the
//! `n` direction carries an extra horizontal fit step so the tooltip body
//! stays inside the root element while the pin indicator keeps pointing at
//! the anchor center.
//!
//! ```
//! use kurbo::{Affine, Rect, Size};
//! use overtip_core::{Direction, ScreenBbox, place};
//!
//! let bbox = ScreenBbox::project(Rect::new(80.0, 50.0, 120.0, 90.0), Affine::IDENTITY);
//! let spot = place(Direction::North, &bbox, Size::new(40.0, 20.0));
//! assert_eq!(spot.top, 30.0);
//! assert_eq!(spot.left, 80.0);
//! ```

use kurbo::Size;

use crate::bbox::ScreenBbox;
use crate::direction::Direction;

/// A computed tooltip position, in screen pixels before scroll and per-call
/// offsets are added.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Placement {
    /// CSS `top`, in pixels.
    pub top: f64,
    /// CSS `left`, in pixels.
    pub left: f64,
}

/// Result of the north horizontal fit: the corrected `left` plus, when the
/// body was shifted, the inline `left` to give the pin indicator so it still
/// points at the anchor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NorthFit {
    /// Corrected CSS `left` for the tooltip body.
    pub left: f64,
    /// Inline `left` for the pin indicator, or `None` when no shift was
    /// needed and any previous inline value should be cleared.
    pub pin_left: Option<f64>,
}

type CoordFn = fn(&ScreenBbox, Size) -> Placement;

// Indexed by `Direction::index`.
const COORD_FNS: [CoordFn; 8] = [
    north, south, east, west, north_east, north_west, south_east, south_west,
];

/// Looks up the `(top, left)` for `direction` given the projected anchor
/// bbox and the tooltip node's rendered size.
///
/// The north overflow fit is a separate step; see [`fit_north`].
#[must_use]
pub fn place(direction: Direction, bbox: &ScreenBbox, node: Size) -> Placement {
    COORD_FNS[direction.index()](bbox, node)
}

fn north(bbox: &ScreenBbox, node: Size) -> Placement {
    Placement {
        top: bbox.n.y - node.height,
        left: bbox.n.x - node.width / 2.0,
    }
}

fn south(bbox: &ScreenBbox, node: Size) -> Placement {
    Placement {
        top: bbox.s.y,
        left: bbox.s.x - node.width / 2.0,
    }
}

fn east(bbox: &ScreenBbox, node: Size) -> Placement {
    Placement {
        top: bbox.e.y - node.height / 2.0,
        left: bbox.e.x,
    }
}

fn west(bbox: &ScreenBbox, node: Size) -> Placement {
    Placement {
        top: bbox.w.y - node.height / 2.0,
        left: bbox.w.x - node.width,
    }
}

fn north_east(bbox: &ScreenBbox, node: Size) -> Placement {
    Placement {
        top: bbox.ne.y - node.height,
        left: bbox.ne.x,
    }
}

fn north_west(bbox: &ScreenBbox, node: Size) -> Placement {
    Placement {
        top: bbox.nw.y - node.height,
        left: bbox.nw.x - node.width,
    }
}

fn south_east(bbox: &ScreenBbox, _node: Size) -> Placement {
    Placement {
        top: bbox.se.y,
        // Inherited quirk: `left` uses the east midpoint, not the se corner.
        // Kept bug-for-bug compatible; see the regression test.
        left: bbox.e.x,
    }
}

fn south_west(bbox: &ScreenBbox, node: Size) -> Placement {
    Placement {
        top: bbox.sw.y,
        left: bbox.sw.x - node.width,
    }
}

/// Clamps a north placement's `left` into `[0, root_width - node_width]` and
/// computes the compensating pin-indicator offset.
///
/// `left` is the naive north left edge (`bbox.n.x - node_width / 2`). When
/// the body would run past the root's right edge it is shifted left by the
/// overflow and the pin shifted right by the same amount; when the body
/// would start left of zero it is shifted right and the pin left. Either
/// way the pin stays over the anchor center.
#[must_use]
pub fn fit_north(left: f64, node_width: f64, root_width: f64) -> NorthFit {
    let center = node_width / 2.0;
    if left < 0.0 {
        let diff = -left;
        NorthFit {
            left: left + diff,
            pin_left: Some(center - diff),
        }
    } else if left + node_width > root_width {
        let diff = left + node_width - root_width;
        NorthFit {
            left: left - diff,
            pin_left: Some(center + diff),
        }
    } else {
        NorthFit {
            left,
            pin_left: None,
        }
    }
}
