// Copyright 2026 the Overtip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::fmt;

use kurbo::Vec2;

use crate::direction::Direction;
use crate::host::TipHost;
use crate::placement::{Placement, fit_north, place};
use crate::producer::Producer;

/// A tooltip positioner: one owned overlay node, anchored per call to an
/// SVG shape through a [`TipHost`].
///
/// The positioner tracks three configurable producers (direction, offset,
/// markup), an optional owned node slot, and the most recent placement.
/// All document access is delegated to the host.
///
/// The node slot is lazy: the node is created on the first operation that
/// needs it, and [`Tooltip::destroy`] empties the slot so a later call
/// recreates it. Anchors are always passed explicitly to [`Tooltip::show`];
/// there is no ambient event-target fallback.
pub struct Tooltip<H: TipHost, D> {
    host: H,
    direction: Producer<D, Direction>,
    offset: Producer<D, Vec2>,
    html: Producer<D, String>,
    node: Option<H::Node>,
    last: Option<Placement>,
}

impl<H: TipHost, D> Tooltip<H, D> {
    /// Creates a positioner over `host` with pure defaults: direction
    /// north, zero offset, empty markup.
    pub fn new(host: H) -> Self {
        Self {
            host,
            direction: Producer::Constant(Direction::North),
            offset: Producer::Constant(Vec2::ZERO),
            html: Producer::Constant(String::new()),
            node: None,
            last: None,
        }
    }

    /// The underlying host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the underlying host.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Binds the positioner to the SVG root resolved from `handle` and
    /// mounts the tooltip node into the root element.
    ///
    /// Silent no-op when no SVG root is resolvable; the positioner stays
    /// usable and a later `mount` can succeed.
    pub fn mount(&mut self, handle: &H::Handle) {
        if !self.host.bind(handle) {
            return;
        }
        match &self.node {
            Some(node) => {
                // Re-append so an already-created node lands under the
                // current root element.
                let node = node.clone();
                self.host.attach(&node);
            }
            None => {
                self.ensure_node();
            }
        }
    }

    /// Places the tooltip for `datum` against `anchor` and makes it
    /// visible.
    ///
    /// `index` is handed to the configured producers alongside the datum.
    /// Returns the final placement (direction coordinate plus per-call
    /// offset plus document scroll), which is also retained for
    /// [`Tooltip::last_placement`]. Errors only when the anchor's screen
    /// bbox cannot be resolved.
    pub fn show(
        &mut self,
        datum: &D,
        index: usize,
        anchor: &H::Anchor,
    ) -> Result<Placement, H::Error> {
        let markup = self.html.call(datum, index);
        let offset = self.offset.call(datum, index);
        let direction = self.direction.call(datum, index);

        let node = self.ensure_node();
        self.host.set_content(&node, &markup);
        // Visible before measuring: a display:none node has no size.
        self.host.set_visible(&node, true);
        self.host.set_direction_class(&node, direction);

        let bbox = self.host.anchor_bbox(anchor)?;
        let size = self.host.node_size(&node);
        let mut spot = place(direction, &bbox, size);
        let pin = if direction == Direction::North {
            let fit = fit_north(spot.left, size.width, self.host.root_width());
            spot.left = fit.left;
            fit.pin_left
        } else {
            None
        };
        self.host.shift_pin(&node, pin);

        let scroll = self.host.scroll_offset();
        let placed = Placement {
            top: spot.top + offset.y + scroll.y,
            left: spot.left + offset.x + scroll.x,
        };
        self.host.set_position(&node, placed.top, placed.left);
        self.last = Some(placed);
        Ok(placed)
    }

    /// Hides the tooltip. Content and position are left untouched;
    /// repeated calls are idempotent.
    pub fn hide(&mut self) {
        let node = self.ensure_node();
        self.host.set_visible(&node, false);
    }

    /// Detaches and releases the tooltip node. The next operation that
    /// needs a node lazily recreates one.
    pub fn destroy(&mut self) {
        if let Some(node) = self.node.take() {
            self.host.detach(&node);
        }
    }

    /// Ensure-present accessor for the owned node: creates (and mounts) it
    /// if absent, then returns a handle.
    pub fn node(&mut self) -> H::Node {
        self.ensure_node()
    }

    /// Reads an attribute off the tooltip node.
    pub fn attr(&mut self, name: &str) -> Option<String> {
        let node = self.ensure_node();
        self.host.attr(&node, name)
    }

    /// Writes an attribute on the tooltip node.
    pub fn set_attr(&mut self, name: &str, value: &str) -> &mut Self {
        let node = self.ensure_node();
        self.host.set_attr(&node, name, value);
        self
    }

    /// Reads an inline style property off the tooltip node.
    pub fn style(&mut self, name: &str) -> Option<String> {
        let node = self.ensure_node();
        self.host.style(&node, name)
    }

    /// Writes an inline style property on the tooltip node.
    pub fn set_style(&mut self, name: &str, value: &str) -> &mut Self {
        let node = self.ensure_node();
        self.host.set_style(&node, name, value);
        self
    }

    /// The direction producer.
    pub fn direction(&self) -> &Producer<D, Direction> {
        &self.direction
    }

    /// Sets the direction producer; a bare [`Direction`] converts to a
    /// constant.
    pub fn set_direction(&mut self, direction: impl Into<Producer<D, Direction>>) -> &mut Self {
        self.direction = direction.into();
        self
    }

    /// The offset producer (x is added to `left`, y to `top`).
    pub fn offset(&self) -> &Producer<D, Vec2> {
        &self.offset
    }

    /// Sets the offset producer; a bare [`Vec2`] converts to a constant.
    pub fn set_offset(&mut self, offset: impl Into<Producer<D, Vec2>>) -> &mut Self {
        self.offset = offset.into();
        self
    }

    /// The markup producer.
    pub fn html(&self) -> &Producer<D, String> {
        &self.html
    }

    /// Sets the markup producer; a bare `String` converts to a constant.
    pub fn set_html(&mut self, html: impl Into<Producer<D, String>>) -> &mut Self {
        self.html = html.into();
        self
    }

    /// The current mount container, if the host has one.
    pub fn root_element(&self) -> Option<&H::Root> {
        self.host.root()
    }

    /// Replaces the mount container.
    pub fn set_root_element(&mut self, root: H::Root) -> &mut Self {
        self.host.set_root(root);
        self
    }

    /// The most recent placement written by [`Tooltip::show`].
    pub fn last_placement(&self) -> Option<Placement> {
        self.last
    }

    fn ensure_node(&mut self) -> H::Node {
        match &self.node {
            Some(node) => node.clone(),
            None => {
                let node = self.host.create_node();
                self.host.attach(&node);
                self.node = Some(node.clone());
                node
            }
        }
    }
}

impl<H: TipHost, D> fmt::Debug for Tooltip<H, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tooltip")
            .field("direction", &self.direction)
            .field("offset", &self.offset)
            .field("has_node", &self.node.is_some())
            .field("last", &self.last)
            .finish_non_exhaustive()
    }
}
