// Copyright 2026 the Overtip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overtip Core: compass-direction tooltip placement for SVG-anchored
//! overlays.
//!
//! This crate is the headless half of Overtip. It owns the geometry — the
//! eight-point screen projection of an anchor's bounding box, the closed
//! direction dispatch table, and the north overflow fit — plus the
//! [`Tooltip`] state machine that drives one absolutely-positioned overlay
//! node. Everything that touches a live document goes through the
//! [`TipHost`] trait; `overtip_web` implements it over the real DOM, and
//! tests implement it in memory.
//!
//! ## Placement model
//!
//! Each `show` call projects the anchor's local bounding box into screen
//! space as four corners and four edge midpoints ([`ScreenBbox`]), picks
//! one of eight compass positions ([`Direction`]) from a fixed dispatch
//! table, clamps north placements horizontally into the root element
//! ([`fit_north`]), and writes `top`/`left` plus the document scroll offset
//! onto the node.
//!
//! ## Minimal geometry example
//!
//! ```
//! use kurbo::{Affine, Rect, Size};
//! use overtip_core::{Direction, ScreenBbox, fit_north, place};
//!
//! // An anchor shape at 80..120 x 50..90, already in screen coordinates.
//! let bbox = ScreenBbox::project(Rect::new(80.0, 50.0, 120.0, 90.0), Affine::IDENTITY);
//!
//! // A 40x20 tooltip placed north sits centered above the shape.
//! let spot = place(Direction::North, &bbox, Size::new(40.0, 20.0));
//! assert_eq!((spot.top, spot.left), (30.0, 80.0));
//!
//! // Near the left viewport edge the body clamps and the pin compensates.
//! let fit = fit_north(-10.0, 40.0, 1000.0);
//! assert_eq!(fit.left, 0.0);
//! assert_eq!(fit.pin_left, Some(10.0));
//! ```
//!
//! ## Driving a host
//!
//! [`Tooltip`] holds three configurable [`Producer`]s — direction, pixel
//! offset, and markup — each either a constant or a function of
//! `(datum, index)`. A typical hover wiring:
//!
//! - `mount(handle)` once the visualization's SVG root exists;
//! - `show(datum, index, anchor)` from pointer-enter, with the hovered
//!   shape passed explicitly as the anchor;
//! - `hide()` from pointer-leave;
//! - `destroy()` when tearing the visualization down. The node slot is
//!   lazy, so a destroyed positioner revives on the next call.
//!
//! This crate is `no_std` (with `alloc`).

#![no_std]

extern crate alloc;

mod bbox;
mod direction;
mod host;
mod placement;
mod positioner;
mod producer;

pub use bbox::ScreenBbox;
pub use direction::Direction;
pub use host::TipHost;
pub use placement::{NorthFit, Placement, fit_north, place};
pub use positioner::Tooltip;
pub use producer::Producer;
