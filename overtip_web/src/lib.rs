// Copyright 2026 the Overtip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM host for Overtip, backed by `web-sys` when targeting `wasm32`.
//!
//! This crate provides [`WebTipHost`], a [`TipHost`] implementation that
//! drives a real absolutely-positioned `<div>` overlay:
//!
//! - the SVG root is resolved from the visualization handle (the element
//!   itself when it is an `<svg>`, else its owning SVG root), and one
//!   scratch `SVGPoint` scoped to it is reused for every projection;
//! - anchor bounding boxes come from `getBBox()` projected through
//!   `matrixTransform(getScreenCTM())` in the fixed
//!   nw→ne→se→sw→w→e→n→s order;
//! - node size is the rendered `offsetWidth`/`offsetHeight`, scroll comes
//!   from the window's page offsets, and the overflow fit uses the root
//!   element's client width.
//!
//! # Usage
//!
//! ```no_run
//! #[cfg(target_arch = "wasm32")]
//! fn make_tip(
//!     svg: web_sys::Element,
//! ) -> overtip_core::Tooltip<overtip_web::WebTipHost, f64> {
//!     let host = overtip_web::WebTipHost::new(overtip_web::WebTipConfig::default());
//!     let mut tip = overtip_core::Tooltip::new(host);
//!     tip.mount(&svg);
//!     tip
//! }
//! ```
//!
//! On non-wasm targets the crate compiles to a stub so it can live in the
//! workspace; every host method panics with `unimplemented!`.

#![no_std]

extern crate alloc;

use overtip_core::TipHost;

#[cfg(target_arch = "wasm32")]
use alloc::{format, string::String};
#[cfg(target_arch = "wasm32")]
use core::fmt;
#[cfg(target_arch = "wasm32")]
use kurbo::{Point, Size, Vec2};
#[cfg(target_arch = "wasm32")]
use overtip_core::{Direction, ScreenBbox};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, JsValue};
#[cfg(target_arch = "wasm32")]
use web_sys::{
    Element, HtmlElement, SvgElement, SvgGraphicsElement, SvgMatrix, SvgPoint, SvgsvgElement,
};

/// Construction-time configuration for [`WebTipHost`].
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Debug, Default)]
pub struct WebTipConfig {
    /// Container the tooltip node is appended into. Defaults to the
    /// document body when absent.
    pub root_element: Option<HtmlElement>,
    /// Optional selector; matching elements get the `overtip-blur` marker
    /// class while the tooltip is visible. Cosmetic only.
    pub blur: Option<String>,
}

/// Geometry or DOM failure from the web host.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Debug)]
pub enum WebTipError {
    /// The anchor has no bounding box or no screen transform; it is not
    /// currently rendered in the document.
    DetachedAnchor,
    /// An underlying DOM call failed.
    Dom(JsValue),
}

#[cfg(target_arch = "wasm32")]
impl fmt::Display for WebTipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DetachedAnchor => f.write_str("anchor is detached from the document"),
            Self::Dom(_) => f.write_str("DOM call failed"),
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl From<JsValue> for WebTipError {
    fn from(value: JsValue) -> Self {
        Self::Dom(value)
    }
}

#[cfg(target_arch = "wasm32")]
fn document() -> web_sys::Document {
    web_sys::window()
        .and_then(|w| w.document())
        .expect("window/document available")
}

/// The element's SVG root: itself when it is an `<svg>`, else the owning
/// SVG root, else `None` (detached or not SVG content at all).
#[cfg(target_arch = "wasm32")]
fn svg_root_of(element: &Element) -> Option<SvgsvgElement> {
    if let Some(svg) = element.dyn_ref::<SvgsvgElement>() {
        return Some(svg.clone());
    }
    element.dyn_ref::<SvgElement>()?.owner_svg_element()
}

/// [`TipHost`] over the live DOM (only available on `wasm32`).
#[cfg(target_arch = "wasm32")]
pub struct WebTipHost {
    root: Option<HtmlElement>,
    blur: Option<String>,
    svg: Option<SvgsvgElement>,
    point: Option<SvgPoint>,
}

#[cfg(target_arch = "wasm32")]
impl fmt::Debug for WebTipHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("WebTipHost { .. }")
    }
}

#[cfg(target_arch = "wasm32")]
impl WebTipHost {
    /// Marker class applied to `blur`-matched elements while visible.
    pub const BLUR_CLASS: &'static str = "overtip-blur";

    /// Creates a host from `config`.
    #[must_use]
    pub fn new(config: WebTipConfig) -> Self {
        Self {
            root: config.root_element,
            blur: config.blur,
            svg: None,
            point: None,
        }
    }

    fn effective_root(&self) -> Option<HtmlElement> {
        self.root.clone().or_else(|| document().body())
    }

    /// The scratch point, creating one scoped to the anchor's own SVG root
    /// when `mount` never ran (explicit-anchor calls on a never-mounted
    /// positioner are still valid).
    fn scratch_point(&mut self, anchor: &SvgGraphicsElement) -> Result<SvgPoint, WebTipError> {
        if let Some(point) = &self.point {
            return Ok(point.clone());
        }
        let svg = self
            .svg
            .clone()
            .or_else(|| svg_root_of(anchor))
            .ok_or(WebTipError::DetachedAnchor)?;
        let point = svg.create_svg_point();
        self.point = Some(point.clone());
        Ok(point)
    }

    fn set_blur_marks(&self, on: bool) {
        let Some(selector) = &self.blur else {
            return;
        };
        let Ok(matches) = document().query_selector_all(selector) else {
            return;
        };
        for i in 0..matches.length() {
            let Some(el) = matches.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };
            let _ = if on {
                el.class_list().add_1(Self::BLUR_CLASS)
            } else {
                el.class_list().remove_1(Self::BLUR_CLASS)
            };
        }
    }

    fn pin_element(node: &HtmlElement) -> Option<HtmlElement> {
        node.last_child()?.dyn_into::<HtmlElement>().ok()
    }
}

#[cfg(target_arch = "wasm32")]
impl TipHost for WebTipHost {
    type Handle = Element;
    type Anchor = SvgGraphicsElement;
    type Root = HtmlElement;
    type Node = HtmlElement;
    type Error = WebTipError;

    fn bind(&mut self, handle: &Element) -> bool {
        let Some(svg) = svg_root_of(handle) else {
            return false;
        };
        self.point = Some(svg.create_svg_point());
        self.svg = Some(svg);
        true
    }

    fn create_node(&mut self) -> HtmlElement {
        let node = document()
            .create_element("div")
            .expect("create <div> element")
            .dyn_into::<HtmlElement>()
            .expect("div is HtmlElement");
        let style = node.style();
        let _ = style.set_property("position", "absolute");
        let _ = style.set_property("top", "0");
        let _ = style.set_property("left", "0");
        let _ = style.set_property("opacity", "0");
        let _ = style.set_property("pointer-events", "none");
        let _ = style.set_property("display", "none");
        let _ = style.set_property("box-sizing", "border-box");
        node
    }

    fn attach(&mut self, node: &HtmlElement) {
        if let Some(root) = self.effective_root() {
            let _ = root.append_child(node);
        }
    }

    fn detach(&mut self, node: &HtmlElement) {
        node.remove();
    }

    fn set_root(&mut self, root: HtmlElement) {
        self.root = Some(root);
    }

    fn root(&self) -> Option<&HtmlElement> {
        self.root.as_ref()
    }

    fn root_width(&self) -> f64 {
        self.effective_root()
            .map_or(0.0, |root| f64::from(root.client_width()))
    }

    fn scroll_offset(&self) -> Vec2 {
        let Some(window) = web_sys::window() else {
            return Vec2::ZERO;
        };
        Vec2::new(
            window.page_x_offset().unwrap_or(0.0),
            window.page_y_offset().unwrap_or(0.0),
        )
    }

    fn set_content(&mut self, node: &HtmlElement, html: &str) {
        node.set_inner_html(html);
    }

    fn set_direction_class(&mut self, node: &HtmlElement, direction: Direction) {
        let classes = node.class_list();
        for dir in Direction::ALL {
            let _ = classes.remove_1(dir.class_name());
        }
        let _ = classes.add_1(direction.class_name());
    }

    fn set_visible(&mut self, node: &HtmlElement, visible: bool) {
        let style = node.style();
        if visible {
            let _ = style.set_property("opacity", "1");
            let _ = style.set_property("pointer-events", "all");
            let _ = style.set_property("display", "block");
        } else {
            let _ = style.set_property("opacity", "0");
            let _ = style.set_property("pointer-events", "none");
            let _ = style.set_property("display", "none");
        }
        self.set_blur_marks(visible);
    }

    fn set_position(&mut self, node: &HtmlElement, top: f64, left: f64) {
        let style = node.style();
        let _ = style.set_property("top", &format!("{top}px"));
        let _ = style.set_property("left", &format!("{left}px"));
    }

    fn shift_pin(&mut self, node: &HtmlElement, left: Option<f64>) {
        let Some(pin) = Self::pin_element(node) else {
            return;
        };
        match left {
            Some(left) => {
                let _ = pin.style().set_property("left", &format!("{left}px"));
            }
            None => {
                let _ = pin.style().remove_property("left");
            }
        }
    }

    fn node_size(&self, node: &HtmlElement) -> Size {
        Size::new(
            f64::from(node.offset_width()),
            f64::from(node.offset_height()),
        )
    }

    fn attr(&self, node: &HtmlElement, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn set_attr(&mut self, node: &HtmlElement, name: &str, value: &str) {
        let _ = node.set_attribute(name, value);
    }

    fn style(&self, node: &HtmlElement, name: &str) -> Option<String> {
        let value = node.style().get_property_value(name).ok()?;
        if value.is_empty() { None } else { Some(value) }
    }

    fn set_style(&mut self, node: &HtmlElement, name: &str, value: &str) {
        let _ = node.style().set_property(name, value);
    }

    fn anchor_bbox(&mut self, anchor: &SvgGraphicsElement) -> Result<ScreenBbox, Self::Error> {
        let local = anchor
            .get_b_box()
            .map_err(|_| WebTipError::DetachedAnchor)?;
        let matrix = anchor
            .get_screen_ctm()
            .ok_or(WebTipError::DetachedAnchor)?;
        let point = self.scratch_point(anchor)?;

        let (width, height) = (local.width(), local.height());
        let project = |point: &SvgPoint, matrix: &SvgMatrix| {
            let p = point.matrix_transform(matrix);
            Point::new(f64::from(p.x()), f64::from(p.y()))
        };

        // One scratch point walked through the corners and midpoints, the
        // same order the projection has always used.
        point.set_x(local.x());
        point.set_y(local.y());
        let nw = project(&point, &matrix);
        point.set_x(point.x() + width);
        let ne = project(&point, &matrix);
        point.set_y(point.y() + height);
        let se = project(&point, &matrix);
        point.set_x(point.x() - width);
        let sw = project(&point, &matrix);
        point.set_y(point.y() - height / 2.0);
        let w = project(&point, &matrix);
        point.set_x(point.x() + width);
        let e = project(&point, &matrix);
        point.set_x(point.x() - width / 2.0);
        point.set_y(point.y() - height / 2.0);
        let n = project(&point, &matrix);
        point.set_y(point.y() + height);
        let s = project(&point, &matrix);

        Ok(ScreenBbox {
            n,
            s,
            e,
            w,
            ne,
            nw,
            se,
            sw,
        })
    }
}

/// Stub type for non-wasm targets so the crate can be included in the
/// workspace.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Default)]
pub struct WebTipHost;

#[cfg(not(target_arch = "wasm32"))]
impl TipHost for WebTipHost {
    type Handle = ();
    type Anchor = ();
    type Root = ();
    type Node = ();
    type Error = ();

    fn bind(&mut self, _handle: &()) -> bool {
        unimplemented!("WebTipHost is only available on wasm32")
    }
    fn create_node(&mut self) -> Self::Node {
        unimplemented!("WebTipHost is only available on wasm32")
    }
    fn attach(&mut self, _node: &()) {
        unimplemented!("WebTipHost is only available on wasm32")
    }
    fn detach(&mut self, _node: &()) {
        unimplemented!("WebTipHost is only available on wasm32")
    }
    fn set_root(&mut self, _root: ()) {
        unimplemented!("WebTipHost is only available on wasm32")
    }
    fn root(&self) -> Option<&()> {
        unimplemented!("WebTipHost is only available on wasm32")
    }
    fn root_width(&self) -> f64 {
        unimplemented!("WebTipHost is only available on wasm32")
    }
    fn scroll_offset(&self) -> kurbo::Vec2 {
        unimplemented!("WebTipHost is only available on wasm32")
    }
    fn set_content(&mut self, _node: &(), _html: &str) {
        unimplemented!("WebTipHost is only available on wasm32")
    }
    fn set_direction_class(&mut self, _node: &(), _direction: overtip_core::Direction) {
        unimplemented!("WebTipHost is only available on wasm32")
    }
    fn set_visible(&mut self, _node: &(), _visible: bool) {
        unimplemented!("WebTipHost is only available on wasm32")
    }
    fn set_position(&mut self, _node: &(), _top: f64, _left: f64) {
        unimplemented!("WebTipHost is only available on wasm32")
    }
    fn shift_pin(&mut self, _node: &(), _left: Option<f64>) {
        unimplemented!("WebTipHost is only available on wasm32")
    }
    fn node_size(&self, _node: &()) -> kurbo::Size {
        unimplemented!("WebTipHost is only available on wasm32")
    }
    fn attr(&self, _node: &(), _name: &str) -> Option<alloc::string::String> {
        unimplemented!("WebTipHost is only available on wasm32")
    }
    fn set_attr(&mut self, _node: &(), _name: &str, _value: &str) {
        unimplemented!("WebTipHost is only available on wasm32")
    }
    fn style(&self, _node: &(), _name: &str) -> Option<alloc::string::String> {
        unimplemented!("WebTipHost is only available on wasm32")
    }
    fn set_style(&mut self, _node: &(), _name: &str, _value: &str) {
        unimplemented!("WebTipHost is only available on wasm32")
    }
    fn anchor_bbox(&mut self, _anchor: &()) -> Result<overtip_core::ScreenBbox, ()> {
        unimplemented!("WebTipHost is only available on wasm32")
    }
}
