// Copyright 2026 the Overtip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect};

/// The anchor's bounding box projected into screen space as eight points:
/// the four corners and the four edge midpoints.
///
/// Consistency holds by construction: the transform is affine, so edge
/// midpoints in screen space equal the midpoints of the projected corners
/// (`n` sits halfway between `nw` and `ne`, and so on).
///
/// A bbox must be recomputed on every placement; the anchor may have moved
/// or the document scrolled since the last one was taken.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenBbox {
    /// Midpoint of the top edge.
    pub n: Point,
    /// Midpoint of the bottom edge.
    pub s: Point,
    /// Midpoint of the right edge.
    pub e: Point,
    /// Midpoint of the left edge.
    pub w: Point,
    /// Top-right corner.
    pub ne: Point,
    /// Top-left corner.
    pub nw: Point,
    /// Bottom-right corner.
    pub se: Point,
    /// Bottom-left corner.
    pub sw: Point,
}

impl ScreenBbox {
    /// Projects a local bounding box through a local-to-screen transform.
    ///
    /// This is the headless equivalent of walking a scratch `SVGPoint`
    /// through `matrixTransform(getScreenCTM())`; hosts that can read the
    /// screen CTM as an [`Affine`] can build the bbox with no DOM round
    /// trips per point.
    ///
    /// ```
    /// use kurbo::{Affine, Rect};
    /// use overtip_core::ScreenBbox;
    ///
    /// let local = Rect::new(10.0, 20.0, 30.0, 60.0);
    /// let bbox = ScreenBbox::project(local, Affine::translate((5.0, -5.0)));
    /// assert_eq!(bbox.nw.x, 15.0);
    /// assert_eq!(bbox.n.x, 25.0); // horizontal center
    /// assert_eq!(bbox.se.y, 55.0);
    /// ```
    #[must_use]
    pub fn project(local: Rect, to_screen: Affine) -> Self {
        let (width, height) = (local.width(), local.height());
        // Same scratch-point walk the DOM path uses: nw, ne, se, sw, w, e, n, s.
        let mut p = Point::new(local.x0, local.y0);
        let nw = to_screen * p;
        p.x += width;
        let ne = to_screen * p;
        p.y += height;
        let se = to_screen * p;
        p.x -= width;
        let sw = to_screen * p;
        p.y -= height / 2.0;
        let w = to_screen * p;
        p.x += width;
        let e = to_screen * p;
        p.x -= width / 2.0;
        p.y -= height / 2.0;
        let n = to_screen * p;
        p.y += height;
        let s = to_screen * p;
        Self {
            n,
            s,
            e,
            w,
            ne,
            nw,
            se,
            sw,
        }
    }
}
