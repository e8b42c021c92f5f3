//! Drop-target geometry: points, bounding boxes, hit testing.

use serde::{Deserialize, Serialize};

/// A pointer position in pixels, window-space (native bridge) or
/// client-space (DOM bridge). The two spaces are treated as equivalent;
/// both are measured against the same rendered window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The drop target's current on-screen rectangle. Owned by whoever measures
/// the target; everyone else only reads it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub top: f64,
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
}

impl BoundingBox {
    /// Sentinel for an unmounted drop target. Bounds are inverted so that
    /// every point classifies outside.
    pub const DETACHED: Self = Self {
        top: 0.0,
        left: 0.0,
        right: -1.0,
        bottom: -1.0,
    };

    pub fn new(top: f64, left: f64, right: f64, bottom: f64) -> Self {
        Self {
            top,
            left,
            right,
            bottom,
        }
    }

    /// Inclusive-bounds hit test. A box with `left > right` or
    /// `top > bottom` contains nothing.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left && point.x <= self.right && point.y >= self.top && point.y <= self.bottom
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::DETACHED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_inside_box() {
        let b = BoundingBox::new(10.0, 20.0, 120.0, 80.0);
        assert!(b.contains(Point::new(50.0, 40.0)));
    }

    #[test]
    fn test_point_outside_either_axis() {
        let b = BoundingBox::new(10.0, 20.0, 120.0, 80.0);
        assert!(!b.contains(Point::new(19.9, 40.0)));
        assert!(!b.contains(Point::new(120.1, 40.0)));
        assert!(!b.contains(Point::new(50.0, 9.9)));
        assert!(!b.contains(Point::new(50.0, 80.1)));
    }

    #[test]
    fn test_boundary_coordinates_are_inside() {
        let b = BoundingBox::new(10.0, 20.0, 120.0, 80.0);
        assert!(b.contains(Point::new(20.0, 10.0)));
        assert!(b.contains(Point::new(120.0, 80.0)));
        assert!(b.contains(Point::new(20.0, 80.0)));
    }

    #[test]
    fn test_inverted_box_contains_nothing() {
        let b = BoundingBox::new(80.0, 120.0, 20.0, 10.0);
        assert!(!b.contains(Point::new(50.0, 40.0)));
        assert!(!b.contains(Point::new(0.0, 0.0)));
    }

    #[test]
    fn test_detached_box_excludes_origin() {
        assert!(!BoundingBox::DETACHED.contains(Point::new(0.0, 0.0)));
    }
}
