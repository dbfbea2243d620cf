// Copyright 2026 the Overtip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use kurbo::{Size, Vec2};

use crate::bbox::ScreenBbox;
use crate::direction::Direction;

/// The document surface a [`Tooltip`](crate::Tooltip) drives.
///
/// The positioner itself is headless; everything that touches a live
/// document goes through this trait. `overtip_web` implements it against
/// the real DOM via `web-sys`; tests implement it with an in-memory
/// recorder.
///
/// Node handles are expected to be cheap clones (in the DOM they are
/// reference-counted JS handles), which lets the positioner hold one in its
/// ownership slot while passing copies back into host methods.
pub trait TipHost {
    /// Handle the host resolves to an SVG root at [`TipHost::bind`] time.
    type Handle: ?Sized;
    /// An SVG-rendered shape with a local bounding box and a screen CTM.
    type Anchor: ?Sized;
    /// The container element the tooltip node mounts into.
    type Root;
    /// The tooltip element itself.
    type Node: Clone;
    /// Geometry failure reported by [`TipHost::anchor_bbox`].
    type Error;

    /// Resolves the SVG root for `handle` (the handle's element if it is an
    /// SVG root, else its nearest owning SVG ancestor) and scopes a
    /// reusable screen-projection context to it.
    ///
    /// Returns `false` when no SVG root is resolvable; the caller treats
    /// that as a silent no-op.
    fn bind(&mut self, handle: &Self::Handle) -> bool;

    /// Creates a fresh, hidden tooltip node. Ownership stays with the
    /// positioner; the host only materializes it.
    fn create_node(&mut self) -> Self::Node;

    /// Appends `node` to the configured root element.
    fn attach(&mut self, node: &Self::Node);

    /// Removes `node` from the document.
    fn detach(&mut self, node: &Self::Node);

    /// Replaces the mount container.
    fn set_root(&mut self, root: Self::Root);

    /// The current mount container, if the host has one.
    fn root(&self) -> Option<&Self::Root>;

    /// Rendered width of the mount container, for the north overflow fit.
    fn root_width(&self) -> f64;

    /// Current document scroll offset (x added to `left`, y to `top`).
    fn scroll_offset(&self) -> Vec2;

    /// Replaces the node's inner markup.
    fn set_content(&mut self, node: &Self::Node, html: &str);

    /// Removes all eight direction classes from `node`, then adds exactly
    /// the class for `direction`.
    fn set_direction_class(&mut self, node: &Self::Node, direction: Direction);

    /// Shows or hides the node (opacity, pointer-events, and display).
    fn set_visible(&mut self, node: &Self::Node, visible: bool);

    /// Writes the node's absolute `top`/`left`, in pixels.
    fn set_position(&mut self, node: &Self::Node, top: f64, left: f64);

    /// Sets the pin indicator's inline `left` (the node's last child), or
    /// clears it when `left` is `None`.
    fn shift_pin(&mut self, node: &Self::Node, left: Option<f64>);

    /// The node's current rendered size. Only meaningful while visible.
    fn node_size(&self, node: &Self::Node) -> Size;

    /// Reads an attribute off the node.
    fn attr(&self, node: &Self::Node, name: &str) -> Option<String>;

    /// Writes an attribute on the node.
    fn set_attr(&mut self, node: &Self::Node, name: &str, value: &str);

    /// Reads an inline style property off the node.
    fn style(&self, node: &Self::Node, name: &str) -> Option<String>;

    /// Writes an inline style property on the node.
    fn set_style(&mut self, node: &Self::Node, name: &str, value: &str);

    /// Projects `anchor`'s local bounding box into the eight screen points.
    ///
    /// Fails when the anchor is detached (no bounding box or no screen
    /// transform); that error propagates out of `show` unswallowed.
    fn anchor_bbox(&mut self, anchor: &Self::Anchor) -> Result<ScreenBbox, Self::Error>;
}
