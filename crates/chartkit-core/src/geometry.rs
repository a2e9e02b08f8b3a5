//! Geometric primitives shared by all scene elements.

use serde::{Deserialize, Serialize};

/// Represents a 2D point with X and Y coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point with the given X and Y coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Calculates the distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    /// Linear interpolation towards `other` at `t` (0 = self, 1 = other).
    /// Values outside 0..1 extrapolate.
    pub fn lerp(&self, other: &Point, t: f64) -> Point {
        Point {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }
}

/// An ordered vertex list, implicitly closed by the path close command.
pub type Ring = Vec<Point>;

/// One polygon shape: an outer surface ring plus an optional hole ring.
///
/// The surface contributes to both the path and the bounding box; the hole
/// is cut into the path only and never affects the bounding box.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PolygonRings {
    pub surface: Ring,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hole: Option<Ring>,
}

impl PolygonRings {
    /// A shape with no hole.
    pub fn new(surface: Ring) -> Self {
        Self {
            surface,
            hole: None,
        }
    }

    /// A shape with a hole cut into it.
    pub fn with_hole(surface: Ring, hole: Ring) -> Self {
        Self {
            surface,
            hole: Some(hole),
        }
    }

    /// Average of the surface vertices. Zero point for an empty surface.
    pub fn surface_centroid(&self) -> Point {
        if self.surface.is_empty() {
            return Point::default();
        }
        let n = self.surface.len() as f64;
        let (sx, sy) = self
            .surface
            .iter()
            .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
        Point::new(sx / n, sy / n)
    }
}

/// The full multi-shape input a polygon element draws from.
pub type PolygonInput = Vec<PolygonRings>;

/// Axis-aligned bounding box in element-local coordinates.
///
/// Starts at all-zero and may carry NaN after degenerate input; consumers
/// are expected to tolerate both.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The midpoint of the box.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Running extrema tracker used while emitting path commands.
///
/// Starts with NaN extrema. The update rule is
/// `if extreme < v || extreme is NaN { extreme = v }` (mirrored for minima):
/// a NaN coordinate never clobbers an already-numeric extremum, while a
/// not-yet-numeric extremum accepts whatever arrives next.
#[derive(Debug, Clone, Copy)]
pub struct Extrema {
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
}

impl Extrema {
    pub fn new() -> Self {
        Self {
            left: f64::NAN,
            right: f64::NAN,
            top: f64::NAN,
            bottom: f64::NAN,
        }
    }

    /// Folds one point into the running extrema.
    pub fn fold(&mut self, point: Point) {
        if self.right < point.x || self.right.is_nan() {
            self.right = point.x;
        }
        if self.left > point.x || self.left.is_nan() {
            self.left = point.x;
        }
        if self.bottom < point.y || self.bottom.is_nan() {
            self.bottom = point.y;
        }
        if self.top > point.y || self.top.is_nan() {
            self.top = point.y;
        }
    }

    /// Folds the corners of another bounding box.
    pub fn fold_box(&mut self, bbox: BoundingBox) {
        self.fold(Point::new(bbox.x, bbox.y));
        self.fold(Point::new(bbox.x + bbox.width, bbox.y + bbox.height));
    }

    /// The box spanned so far. NaN fields when nothing numeric was folded.
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox {
            x: self.left,
            y: self.top,
            width: self.right - self.left,
            height: self.bottom - self.top,
        }
    }
}

impl Default for Extrema {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_point_distance() {
        let p1 = Point::new(0.0, 0.0);
        let p2 = Point::new(3.0, 4.0);
        assert_eq!(p1.distance_to(&p2), 5.0);
    }

    #[test]
    fn test_point_lerp() {
        let p1 = Point::new(0.0, 10.0);
        let p2 = Point::new(10.0, 20.0);
        let mid = p1.lerp(&p2, 0.5);
        assert_relative_eq!(mid.x, 5.0);
        assert_relative_eq!(mid.y, 15.0);
        // extrapolation is allowed
        let past = p1.lerp(&p2, 1.5);
        assert_relative_eq!(past.x, 15.0);
    }

    #[test]
    fn test_bounding_box_center() {
        let bbox = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        let center = bbox.center();
        assert_eq!(center, Point::new(5.0, 5.0));
    }

    #[test]
    fn test_extrema_basic() {
        let mut extrema = Extrema::new();
        extrema.fold(Point::new(0.0, 0.0));
        extrema.fold(Point::new(10.0, 5.0));
        extrema.fold(Point::new(-2.0, 8.0));
        let bbox = extrema.bounding_box();
        assert_eq!(bbox, BoundingBox::new(-2.0, 0.0, 12.0, 8.0));
    }

    #[test]
    fn test_extrema_nan_does_not_clobber() {
        let mut extrema = Extrema::new();
        extrema.fold(Point::new(0.0, 0.0));
        extrema.fold(Point::new(10.0, 10.0));
        extrema.fold(Point::new(f64::NAN, f64::NAN));
        let bbox = extrema.bounding_box();
        assert_eq!(bbox, BoundingBox::new(0.0, 0.0, 10.0, 10.0));
    }

    #[test]
    fn test_extrema_recovers_after_leading_nan() {
        let mut extrema = Extrema::new();
        extrema.fold(Point::new(f64::NAN, f64::NAN));
        extrema.fold(Point::new(3.0, 4.0));
        let bbox = extrema.bounding_box();
        assert_eq!(bbox, BoundingBox::new(3.0, 4.0, 0.0, 0.0));
    }

    #[test]
    fn test_surface_centroid() {
        let shape = PolygonRings::new(vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ]);
        assert_eq!(shape.surface_centroid(), Point::new(5.0, 5.0));
    }
}
