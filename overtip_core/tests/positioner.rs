// Copyright 2026 the Overtip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `Tooltip` positioner driven through an in-memory host.
//!
//! The mock host hands back a fixed projected bbox and records every write
//! the positioner makes, so these tests pin down the full show/hide/destroy
//! lifecycle without a document.

use std::collections::HashMap;

use kurbo::{Size, Vec2};
use overtip_core::{Direction, Placement, Producer, ScreenBbox, TipHost, Tooltip};

/// Anchor rect 80..120 x 50..90 in screen space: n = (100, 50), s = (100, 90),
/// e = (120, 70), w = (80, 70).
fn anchor_bbox() -> ScreenBbox {
    ScreenBbox::project(
        kurbo::Rect::new(80.0, 50.0, 120.0, 90.0),
        kurbo::Affine::IDENTITY,
    )
}

#[derive(Debug, PartialEq, Eq)]
struct DetachedAnchor;

#[derive(Debug)]
struct MockAnchor {
    detached: bool,
}

const ATTACHED: MockAnchor = MockAnchor { detached: false };

#[derive(Debug)]
struct MockHost {
    bbox: ScreenBbox,
    node_size: Size,
    root_width: f64,
    scroll: Vec2,
    has_svg_root: bool,

    root: Option<&'static str>,
    nodes_created: usize,
    attach_count: usize,
    detach_count: usize,
    content: String,
    classes: Vec<&'static str>,
    visible: Option<bool>,
    position: Option<(f64, f64)>,
    pin_left: Option<f64>,
    attrs: HashMap<String, String>,
    styles: HashMap<String, String>,
    bound: bool,
}

impl MockHost {
    fn new() -> Self {
        Self {
            bbox: anchor_bbox(),
            node_size: Size::new(40.0, 20.0),
            root_width: 1000.0,
            scroll: Vec2::ZERO,
            has_svg_root: true,
            root: Some("body"),
            nodes_created: 0,
            attach_count: 0,
            detach_count: 0,
            content: String::new(),
            classes: Vec::new(),
            visible: None,
            position: None,
            pin_left: None,
            attrs: HashMap::new(),
            styles: HashMap::new(),
            bound: false,
        }
    }

    fn direction_classes(&self) -> Vec<&'static str> {
        self.classes
            .iter()
            .copied()
            .filter(|c| Direction::from_class_name(c).is_some())
            .collect()
    }
}

impl TipHost for MockHost {
    type Handle = ();
    type Anchor = MockAnchor;
    type Root = &'static str;
    type Node = u32;
    type Error = DetachedAnchor;

    fn bind(&mut self, _handle: &()) -> bool {
        if self.has_svg_root {
            self.bound = true;
        }
        self.has_svg_root
    }

    fn create_node(&mut self) -> u32 {
        self.nodes_created += 1;
        u32::try_from(self.nodes_created).expect("node count fits u32")
    }

    fn attach(&mut self, _node: &u32) {
        self.attach_count += 1;
    }

    fn detach(&mut self, _node: &u32) {
        self.detach_count += 1;
    }

    fn set_root(&mut self, root: &'static str) {
        self.root = Some(root);
    }

    fn root(&self) -> Option<&&'static str> {
        self.root.as_ref()
    }

    fn root_width(&self) -> f64 {
        self.root_width
    }

    fn scroll_offset(&self) -> Vec2 {
        self.scroll
    }

    fn set_content(&mut self, _node: &u32, html: &str) {
        self.content = html.to_string();
    }

    fn set_direction_class(&mut self, _node: &u32, direction: Direction) {
        self.classes
            .retain(|c| Direction::from_class_name(c).is_none());
        self.classes.push(direction.class_name());
    }

    fn set_visible(&mut self, _node: &u32, visible: bool) {
        self.visible = Some(visible);
    }

    fn set_position(&mut self, _node: &u32, top: f64, left: f64) {
        self.position = Some((top, left));
    }

    fn shift_pin(&mut self, _node: &u32, left: Option<f64>) {
        self.pin_left = left;
    }

    fn node_size(&self, _node: &u32) -> Size {
        self.node_size
    }

    fn attr(&self, _node: &u32, name: &str) -> Option<String> {
        self.attrs.get(name).cloned()
    }

    fn set_attr(&mut self, _node: &u32, name: &str, value: &str) {
        self.attrs.insert(name.to_string(), value.to_string());
    }

    fn style(&self, _node: &u32, name: &str) -> Option<String> {
        self.styles.get(name).cloned()
    }

    fn set_style(&mut self, _node: &u32, name: &str, value: &str) {
        self.styles.insert(name.to_string(), value.to_string());
    }

    fn anchor_bbox(&mut self, anchor: &MockAnchor) -> Result<ScreenBbox, DetachedAnchor> {
        if anchor.detached {
            Err(DetachedAnchor)
        } else {
            Ok(self.bbox)
        }
    }
}

fn tip() -> Tooltip<MockHost, u32> {
    Tooltip::new(MockHost::new())
}

#[test]
fn show_matches_direction_table() {
    // (direction, top, left) for the fixed bbox and a 40x20 node.
    let expected = [
        (Direction::North, 30.0, 80.0),
        (Direction::South, 90.0, 80.0),
        (Direction::East, 60.0, 120.0),
        (Direction::West, 60.0, 40.0),
        (Direction::NorthEast, 30.0, 120.0),
        (Direction::NorthWest, 30.0, 40.0),
        (Direction::SouthEast, 90.0, 120.0),
        (Direction::SouthWest, 90.0, 40.0),
    ];
    for (direction, top, left) in expected {
        let mut tip = tip();
        tip.set_direction(direction);
        let placed = tip.show(&0, 0, &ATTACHED).unwrap();
        assert_eq!(placed, Placement { top, left }, "direction {direction}");
        assert_eq!(tip.host().position, Some((top, left)), "direction {direction}");
    }
}

#[test]
fn south_east_left_reuses_east_point() {
    // Hand-built bbox with e.x pulled away from se.x to expose the quirk.
    let mut tip = tip();
    let mut bbox = anchor_bbox();
    bbox.e.x = 300.0;
    tip.host_mut().bbox = bbox;
    tip.set_direction(Direction::SouthEast);
    let placed = tip.show(&0, 0, &ATTACHED).unwrap();
    assert_eq!(placed.left, 300.0);
    assert_ne!(placed.left, bbox.se.x);
}

#[test]
fn show_adds_offset_and_scroll() {
    let mut tip = tip();
    tip.host_mut().scroll = Vec2::new(3.0, 11.0);
    tip.set_direction(Direction::South);
    tip.set_offset(Vec2::new(5.0, 7.0));
    let placed = tip.show(&0, 0, &ATTACHED).unwrap();
    // top = s.y + offset.y + scroll.y, left = s.x - w/2 + offset.x + scroll.x.
    assert_eq!(placed.top, 90.0 + 7.0 + 11.0);
    assert_eq!(placed.left, 80.0 + 5.0 + 3.0);
    assert_eq!(tip.last_placement(), Some(placed));
}

#[test]
fn north_clamps_left_edge_and_shifts_pin() {
    let mut tip = tip();
    // Anchor with n = (10, 50): naive left = -10 for a 40-wide node.
    tip.host_mut().bbox = ScreenBbox::project(
        kurbo::Rect::new(-10.0, 50.0, 30.0, 90.0),
        kurbo::Affine::IDENTITY,
    );
    let placed = tip.show(&0, 0, &ATTACHED).unwrap();
    assert_eq!(placed.left, 0.0);
    assert_eq!(tip.host().pin_left, Some(10.0));
}

#[test]
fn north_clamps_right_edge_and_shifts_pin() {
    let mut tip = tip();
    // n = (990, 50), root 1000 wide: naive left = 970, right edge overflows by 10.
    tip.host_mut().bbox = ScreenBbox::project(
        kurbo::Rect::new(970.0, 50.0, 1010.0, 90.0),
        kurbo::Affine::IDENTITY,
    );
    let placed = tip.show(&0, 0, &ATTACHED).unwrap();
    assert_eq!(placed.left, 960.0);
    assert_eq!(tip.host().pin_left, Some(30.0));
}

#[test]
fn fitted_north_pin_clears_on_next_unclamped_show() {
    let mut tip = tip();
    tip.host_mut().bbox = ScreenBbox::project(
        kurbo::Rect::new(-10.0, 50.0, 30.0, 90.0),
        kurbo::Affine::IDENTITY,
    );
    tip.show(&0, 0, &ATTACHED).unwrap();
    assert_eq!(tip.host().pin_left, Some(10.0));

    tip.host_mut().bbox = anchor_bbox();
    tip.show(&0, 0, &ATTACHED).unwrap();
    assert_eq!(tip.host().pin_left, None);
}

#[test]
fn repeated_shows_leave_exactly_one_direction_class() {
    let mut tip = tip();
    for direction in Direction::ALL {
        tip.set_direction(direction);
        tip.show(&0, 0, &ATTACHED).unwrap();
        assert_eq!(tip.host().direction_classes(), vec![direction.class_name()]);
    }
}

#[test]
fn show_writes_content_and_visibility() {
    let mut tip = tip();
    tip.set_html(Producer::computed(|d: &u32, i| format!("value {d} at {i}")));
    tip.show(&42, 3, &ATTACHED).unwrap();
    assert_eq!(tip.host().content, "value 42 at 3");
    assert_eq!(tip.host().visible, Some(true));
}

#[test]
fn hide_is_idempotent() {
    let mut tip = tip();
    tip.show(&0, 0, &ATTACHED).unwrap();
    tip.hide();
    let after_first = (tip.host().visible, tip.host().position);
    tip.hide();
    tip.hide();
    assert_eq!(tip.host().visible, Some(false));
    assert_eq!((tip.host().visible, tip.host().position), after_first);
}

#[test]
fn destroy_then_show_recreates_node() {
    let mut tip = tip();
    tip.show(&0, 0, &ATTACHED).unwrap();
    assert_eq!(tip.host().nodes_created, 1);

    tip.destroy();
    assert_eq!(tip.host().detach_count, 1);

    tip.show(&0, 0, &ATTACHED).unwrap();
    assert_eq!(tip.host().nodes_created, 2);
    assert_eq!(tip.host().attach_count, 2);
}

#[test]
fn destroy_without_node_is_a_no_op() {
    let mut tip = tip();
    tip.destroy();
    assert_eq!(tip.host().detach_count, 0);
}

#[test]
fn mount_without_svg_root_is_silent() {
    let mut tip = tip();
    tip.host_mut().has_svg_root = false;
    tip.mount(&());
    assert!(!tip.host().bound);
    assert_eq!(tip.host().nodes_created, 0);
    assert_eq!(tip.host().attach_count, 0);
}

#[test]
fn mount_creates_and_attaches_node() {
    let mut tip = tip();
    tip.mount(&());
    assert!(tip.host().bound);
    assert_eq!(tip.host().nodes_created, 1);
    assert_eq!(tip.host().attach_count, 1);
}

#[test]
fn detached_anchor_propagates_error() {
    let mut tip = tip();
    let result = tip.show(&0, 0, &MockAnchor { detached: true });
    assert_eq!(result.unwrap_err(), DetachedAnchor);
}

#[test]
fn direction_round_trips_through_producer() {
    let mut tip = tip();
    tip.set_direction(Direction::SouthWest);
    assert_eq!(tip.direction().call(&0, 0), Direction::SouthWest);

    tip.set_direction(Producer::computed(|_: &u32, i| {
        if i % 2 == 0 {
            Direction::North
        } else {
            Direction::South
        }
    }));
    assert_eq!(tip.direction().call(&0, 0), Direction::North);
    assert_eq!(tip.direction().call(&0, 1), Direction::South);
}

#[test]
fn attr_and_style_pass_through_with_chaining() {
    let mut tip = tip();
    tip.set_attr("id", "tip").set_style("z-index", "10");
    assert_eq!(tip.attr("id").as_deref(), Some("tip"));
    assert_eq!(tip.style("z-index").as_deref(), Some("10"));
    assert_eq!(tip.attr("class"), None);
    // The accessors lazily created the node.
    assert_eq!(tip.host().nodes_created, 1);
}

#[test]
fn root_element_accessor_round_trips() {
    let mut tip = tip();
    assert_eq!(tip.root_element(), Some(&"body"));
    tip.set_root_element("chart");
    assert_eq!(tip.root_element(), Some(&"chart"));
}
