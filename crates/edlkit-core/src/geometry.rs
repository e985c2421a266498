//! The positioned, sized rectangle every widget and layout is measured by.
//!
//! Coordinates are integer pixels, as in EDM screen files. Derived values
//! (`right`, `bottom`, `center`) are computed from the current anchor and
//! size on every call and never cached.

use serde::{Deserialize, Serialize};

/// A point in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A rectangle anchored at its top-left corner.
///
/// Width and height are never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width.
    pub w: i32,
    /// Height.
    pub h: i32,
}

impl Rect {
    /// The empty rectangle at the origin.
    pub const ZERO: Rect = Rect {
        x: 0,
        y: 0,
        w: 0,
        h: 0,
    };

    /// Create a rectangle. Negative sizes are clamped to zero.
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            x,
            y,
            w: w.max(0),
            h: h.max(0),
        }
    }

    /// Right edge (`x + w`).
    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    /// Bottom edge (`y + h`).
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Centre point, rounded towards the anchor.
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.w / 2, self.y + self.h / 2)
    }

    /// Move horizontally so the right edge lands on `edge`.
    pub fn place_right(&mut self, edge: i32) {
        self.x = edge - self.w;
    }

    /// Move vertically so the bottom edge lands on `edge`.
    pub fn place_bottom(&mut self, edge: i32) {
        self.y = edge - self.h;
    }

    /// Move so the centre matches the given coordinates.
    ///
    /// Only the supplied axes move; `None` leaves that axis alone.
    pub fn recenter(&mut self, x: Option<i32>, y: Option<i32>) {
        if let Some(x) = x {
            self.x = x - self.w / 2;
        }
        if let Some(y) = y {
            self.y = y - self.h / 2;
        }
    }

    /// Smallest rectangle covering every rectangle in `rects`.
    ///
    /// Returns [`Rect::ZERO`] for an empty iterator.
    pub fn bounding<I>(rects: I) -> Rect
    where
        I: IntoIterator<Item = Rect>,
    {
        let mut iter = rects.into_iter();
        let Some(first) = iter.next() else {
            return Rect::ZERO;
        };

        let (mut left, mut top) = (first.x, first.y);
        let (mut right, mut bottom) = (first.right(), first.bottom());
        for rect in iter {
            left = left.min(rect.x);
            top = top.min(rect.y);
            right = right.max(rect.right());
            bottom = bottom.max(rect.bottom());
        }

        Rect::new(left, top, right - left, bottom - top)
    }
}
