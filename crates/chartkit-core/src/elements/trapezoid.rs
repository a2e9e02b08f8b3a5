//! Trapezoid element: a box with four adjustable side lengths.

use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use crate::element::{Element, ElementBase};
use crate::error::Result;
use crate::geometry::{BoundingBox, Extrema, Point};
use crate::paths;
use crate::percent::{percent, Length, Percent};
use crate::properties::set_if_changed;

/// Drawn from the element's pixel width/height and four side lengths, each
/// either absolute pixels or relative to the corresponding box dimension.
/// Every side is centered in the box, so shrinking one produces the
/// slanted silhouette. An optional neck pinches the slanted edges towards
/// a funnel shape.
#[derive(Debug)]
pub struct Trapezoid {
    base: ElementBase,
    top_side: Length,
    bottom_side: Length,
    left_side: Length,
    right_side: Length,
    horizontal_neck: Option<Percent>,
    vertical_neck: Option<Percent>,
}

impl Trapezoid {
    pub fn new() -> Self {
        Self {
            base: ElementBase::new(),
            top_side: Length::Relative(percent(100.0)),
            bottom_side: Length::Relative(percent(100.0)),
            left_side: Length::Relative(percent(100.0)),
            right_side: Length::Relative(percent(100.0)),
            horizontal_neck: None,
            vertical_neck: None,
        }
    }

    pub fn set_size(&mut self, width: f64, height: f64) {
        let changed = set_if_changed(&mut self.base.width, width)
            | set_if_changed(&mut self.base.height, height);
        if changed {
            self.base.invalidate();
            self.draw();
        }
    }

    pub fn top_side(&self) -> Length {
        self.top_side
    }

    pub fn set_top_side(&mut self, length: Length) {
        if set_if_changed(&mut self.top_side, length) {
            self.base.invalidate();
            self.draw();
        }
    }

    pub fn bottom_side(&self) -> Length {
        self.bottom_side
    }

    pub fn set_bottom_side(&mut self, length: Length) {
        if set_if_changed(&mut self.bottom_side, length) {
            self.base.invalidate();
            self.draw();
        }
    }

    pub fn left_side(&self) -> Length {
        self.left_side
    }

    pub fn set_left_side(&mut self, length: Length) {
        if set_if_changed(&mut self.left_side, length) {
            self.base.invalidate();
            self.draw();
        }
    }

    pub fn right_side(&self) -> Length {
        self.right_side
    }

    pub fn set_right_side(&mut self, length: Length) {
        if set_if_changed(&mut self.right_side, length) {
            self.base.invalidate();
            self.draw();
        }
    }

    /// Pinch position on the slanted left/right edges, relative to height.
    pub fn set_horizontal_neck(&mut self, neck: Option<Percent>) {
        if set_if_changed(&mut self.horizontal_neck, neck) {
            self.base.invalidate();
            self.draw();
        }
    }

    /// Pinch position on the slanted top/bottom edges, relative to width.
    pub fn set_vertical_neck(&mut self, neck: Option<Percent>) {
        if set_if_changed(&mut self.vertical_neck, neck) {
            self.base.invalidate();
            self.draw();
        }
    }

    pub fn draw(&mut self) {
        let w = self.base.width;
        let h = self.base.height;

        let ts = self.top_side.relative_to_value(w);
        let bs = self.bottom_side.relative_to_value(w);
        let ls = self.left_side.relative_to_value(h);
        let rs = self.right_side.relative_to_value(h);

        let x0 = (w - ts) / 2.0;
        let x1 = w - (w - ts) / 2.0;
        let x2 = w - (w - bs) / 2.0;
        let x3 = (w - bs) / 2.0;

        let y0 = (h - ls) / 2.0;
        let y1 = (h - rs) / 2.0;
        let y2 = h - (h - rs) / 2.0;
        let y3 = h - (h - ls) / 2.0;

        let top_left = Point::new(x0, y0);
        let top_right = Point::new(x1, y1);
        let bottom_right = Point::new(x2, y2);
        let bottom_left = Point::new(x3, y3);

        let corners: Vec<Point> = if let Some(neck) = self.horizontal_neck {
            let neck_y = h * neck.value();
            vec![
                top_left,
                top_right,
                Point::new((x1 + x2) / 2.0, neck_y),
                bottom_right,
                bottom_left,
                Point::new((x0 + x3) / 2.0, neck_y),
            ]
        } else if let Some(neck) = self.vertical_neck {
            let neck_x = w * neck.value();
            vec![
                top_left,
                Point::new(neck_x, (y0 + y1) / 2.0),
                top_right,
                bottom_right,
                Point::new(neck_x, (y2 + y3) / 2.0),
                bottom_left,
            ]
        } else {
            vec![top_left, top_right, bottom_right, bottom_left]
        };

        let mut path = paths::polyline(&corners);
        path.push_str(paths::close());

        let mut extrema = Extrema::new();
        for corner in &corners {
            extrema.fold(*corner);
        }
        self.base.set_bbox(extrema.bounding_box());
        self.base.set_path(path);
    }

    pub fn dispose(&mut self) {
        self.base.dispose();
    }
}

impl Default for Trapezoid {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct TrapezoidConfig {
    width: Option<f64>,
    height: Option<f64>,
    top_side: Option<Length>,
    bottom_side: Option<Length>,
    left_side: Option<Length>,
    right_side: Option<Length>,
    horizontal_neck: Option<Percent>,
    vertical_neck: Option<Percent>,
}

impl Element for Trapezoid {
    fn class_name(&self) -> &'static str {
        "Trapezoid"
    }

    fn id(&self) -> Uuid {
        self.base.id()
    }

    fn draw(&mut self) {
        Trapezoid::draw(self);
    }

    fn path(&self) -> &str {
        self.base.path()
    }

    fn bounding_box(&self) -> BoundingBox {
        self.base.bbox()
    }

    fn configure(&mut self, config: &Value) -> Result<()> {
        let config = TrapezoidConfig::deserialize(config)?;
        if let Some(length) = config.top_side {
            self.top_side = length;
        }
        if let Some(length) = config.bottom_side {
            self.bottom_side = length;
        }
        if let Some(length) = config.left_side {
            self.left_side = length;
        }
        if let Some(length) = config.right_side {
            self.right_side = length;
        }
        if let Some(neck) = config.horizontal_neck {
            self.horizontal_neck = Some(neck);
        }
        if let Some(neck) = config.vertical_neck {
            self.vertical_neck = Some(neck);
        }
        self.base.width = config.width.unwrap_or(self.base.width);
        self.base.height = config.height.unwrap_or(self.base.height);
        self.base.invalidate();
        self.draw();
        Ok(())
    }

    fn dispose(&mut self) {
        Trapezoid::dispose(self);
    }

    fn is_disposed(&self) -> bool {
        self.base.is_disposed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_sides_make_a_rectangle() {
        let mut trapezoid = Trapezoid::new();
        trapezoid.set_size(100.0, 60.0);

        assert_eq!(
            trapezoid.base.path(),
            "M 0 0 L 100 0 L 100 60 L 0 60 Z "
        );
        assert_eq!(
            trapezoid.base.bbox(),
            BoundingBox::new(0.0, 0.0, 100.0, 60.0)
        );
    }

    #[test]
    fn test_shorter_bottom_slants_the_sides() {
        let mut trapezoid = Trapezoid::new();
        trapezoid.set_size(100.0, 100.0);
        trapezoid.set_bottom_side(Length::Relative(percent(40.0)));

        // bottom edge runs from x=30 to x=70, centered
        assert!(trapezoid.base.path().contains("L 70 100 "));
        assert!(trapezoid.base.path().contains("L 30 100 "));
    }

    #[test]
    fn test_pixel_side_lengths() {
        let mut trapezoid = Trapezoid::new();
        trapezoid.set_size(100.0, 100.0);
        trapezoid.set_top_side(Length::Pixels(50.0));

        assert!(trapezoid.base.path().starts_with("M 25 0 L 75 0 "));
    }

    #[test]
    fn test_horizontal_neck_pinches_the_funnel() {
        let mut trapezoid = Trapezoid::new();
        trapezoid.set_size(100.0, 100.0);
        trapezoid.set_bottom_side(Length::Relative(percent(40.0)));
        trapezoid.set_horizontal_neck(Some(percent(80.0)));

        let path = trapezoid.base.path();
        // pinch points midway along the slanted edges, at 80% height
        assert!(path.contains("L 85 80 "));
        assert!(path.contains("L 15 80 "));
        assert_eq!(path.matches('L').count(), 5);
    }

    #[test]
    fn test_vertical_neck_pinches_top_and_bottom() {
        let mut trapezoid = Trapezoid::new();
        trapezoid.set_size(100.0, 100.0);
        trapezoid.set_right_side(Length::Relative(percent(50.0)));
        trapezoid.set_vertical_neck(Some(percent(30.0)));

        let path = trapezoid.base.path();
        // top edge slants from y=0 to y=25; pinch at x=30
        assert!(path.contains("L 30 12.5 "));
        assert_eq!(path.matches('L').count(), 5);
    }

    #[test]
    fn test_unchanged_setter_skips_redraw() {
        let mut trapezoid = Trapezoid::new();
        trapezoid.set_size(100.0, 60.0);
        assert!(!trapezoid.base.is_invalid());

        trapezoid.set_top_side(Length::Relative(percent(100.0)));
        assert!(!trapezoid.base.is_invalid());
    }

    #[test]
    fn test_configure_from_json() {
        let mut trapezoid = Trapezoid::new();
        let config = json!({
            "width": 200,
            "height": 100,
            "topSide": "50%",
            "bottomSide": 80,
            "horizontalNeck": 60
        });
        trapezoid.configure(&config).unwrap();

        assert_eq!(trapezoid.top_side(), Length::Relative(percent(50.0)));
        assert_eq!(trapezoid.bottom_side(), Length::Pixels(80.0));
        // neck row sits at 60% of the 100px height
        assert!(trapezoid.base.path().contains(" 60 "));
        assert_eq!(
            trapezoid.base.bbox(),
            BoundingBox::new(50.0, 0.0, 100.0, 100.0)
        );
    }
}
