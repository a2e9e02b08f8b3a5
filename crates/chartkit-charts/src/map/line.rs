//! Line elements drawn over projected map coordinates.

use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use chartkit_core::element::{Element, ElementBase};
use chartkit_core::error::Result;
use chartkit_core::geometry::{BoundingBox, Extrema, Point};
use chartkit_core::paths;
use chartkit_core::properties::set_if_changed;

/// An open multi-part polyline. Each part is emitted as its own move/line
/// run; nothing is closed.
#[derive(Debug)]
pub struct MapLine {
    base: ElementBase,
    points: Vec<Vec<Point>>,
}

impl MapLine {
    pub fn new() -> Self {
        Self {
            base: ElementBase::new(),
            points: Vec::new(),
        }
    }

    pub fn points(&self) -> &Vec<Vec<Point>> {
        &self.points
    }

    pub fn set_points(&mut self, points: Vec<Vec<Point>>) {
        if set_if_changed(&mut self.points, points) {
            self.base.invalidate();
            self.draw();
        }
    }

    pub fn draw(&mut self) {
        let mut path = String::new();
        let mut extrema = Extrema::new();
        for part in &self.points {
            path.push_str(&paths::polyline(part));
            for point in part {
                extrema.fold(*point);
            }
        }
        if !path.is_empty() {
            self.base.set_bbox(extrema.bounding_box());
        }
        self.base.set_path(path);
    }

    pub fn dispose(&mut self) {
        self.base.dispose();
    }
}

impl Default for MapLine {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct MapLineConfig {
    points: Vec<Vec<Point>>,
}

impl Element for MapLine {
    fn class_name(&self) -> &'static str {
        "MapLine"
    }

    fn id(&self) -> Uuid {
        self.base.id()
    }

    fn draw(&mut self) {
        MapLine::draw(self);
    }

    fn path(&self) -> &str {
        self.base.path()
    }

    fn bounding_box(&self) -> BoundingBox {
        self.base.bbox()
    }

    fn configure(&mut self, config: &Value) -> Result<()> {
        let config = MapLineConfig::deserialize(config)?;
        self.set_points(config.points);
        Ok(())
    }

    fn dispose(&mut self) {
        MapLine::dispose(self);
    }

    fn is_disposed(&self) -> bool {
        self.base.is_disposed()
    }
}

/// A multi-part line smoothed with a tension spline. Tension 1 degenerates
/// to straight segments; the 0.8 default gives the gently curved look.
/// Parts with fewer than three points stay straight.
#[derive(Debug)]
pub struct MapSpline {
    base: ElementBase,
    points: Vec<Vec<Point>>,
    tension_x: f64,
    tension_y: f64,
}

impl MapSpline {
    pub fn new() -> Self {
        Self {
            base: ElementBase::new(),
            points: Vec::new(),
            tension_x: 0.8,
            tension_y: 0.8,
        }
    }

    pub fn points(&self) -> &Vec<Vec<Point>> {
        &self.points
    }

    pub fn set_points(&mut self, points: Vec<Vec<Point>>) {
        if set_if_changed(&mut self.points, points) {
            self.base.invalidate();
            self.draw();
        }
    }

    pub fn tension(&self) -> (f64, f64) {
        (self.tension_x, self.tension_y)
    }

    pub fn set_tension(&mut self, tension_x: f64, tension_y: f64) {
        let changed = set_if_changed(&mut self.tension_x, tension_x)
            | set_if_changed(&mut self.tension_y, tension_y);
        if changed {
            self.base.invalidate();
            self.draw();
        }
    }

    pub fn draw(&mut self) {
        let mut path = String::new();
        let mut extrema = Extrema::new();
        for part in &self.points {
            path.push_str(&paths::tension_polyline(part, self.tension_x, self.tension_y));
            for point in part {
                extrema.fold(*point);
            }
        }
        if !path.is_empty() {
            self.base.set_bbox(extrema.bounding_box());
        }
        self.base.set_path(path);
    }

    pub fn dispose(&mut self) {
        self.base.dispose();
    }
}

impl Default for MapSpline {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct MapSplineConfig {
    points: Vec<Vec<Point>>,
    tension_x: Option<f64>,
    tension_y: Option<f64>,
}

impl Element for MapSpline {
    fn class_name(&self) -> &'static str {
        "MapSpline"
    }

    fn id(&self) -> Uuid {
        self.base.id()
    }

    fn draw(&mut self) {
        MapSpline::draw(self);
    }

    fn path(&self) -> &str {
        self.base.path()
    }

    fn bounding_box(&self) -> BoundingBox {
        self.base.bbox()
    }

    fn configure(&mut self, config: &Value) -> Result<()> {
        let config = MapSplineConfig::deserialize(config)?;
        self.tension_x = config.tension_x.unwrap_or(self.tension_x);
        self.tension_y = config.tension_y.unwrap_or(self.tension_y);
        self.points = config.points;
        self.base.invalidate();
        self.draw();
        Ok(())
    }

    fn dispose(&mut self) {
        MapSpline::dispose(self);
    }

    fn is_disposed(&self) -> bool {
        self.base.is_disposed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_line_multi_part() {
        let mut line = MapLine::new();
        line.set_points(vec![
            vec![Point::new(0.0, 0.0), Point::new(10.0, 10.0)],
            vec![Point::new(20.0, 0.0), Point::new(30.0, 5.0)],
        ]);

        assert_eq!(
            line.base.path(),
            "M 0 0 L 10 10 M 20 0 L 30 5 "
        );
        assert!(!line.base.path().contains('Z'));
        assert_eq!(line.base.bbox(), BoundingBox::new(0.0, 0.0, 30.0, 10.0));
    }

    #[test]
    fn test_map_line_empty_keeps_bbox() {
        let mut line = MapLine::new();
        line.set_points(vec![vec![Point::new(0.0, 0.0), Point::new(10.0, 10.0)]]);
        let before = line.base.bbox();

        line.set_points(Vec::new());
        assert_eq!(line.base.path(), "");
        assert_eq!(line.base.bbox(), before);
    }

    #[test]
    fn test_unchanged_points_skip_redraw() {
        let mut line = MapLine::new();
        let points = vec![vec![Point::new(0.0, 0.0), Point::new(5.0, 5.0)]];
        line.set_points(points.clone());
        assert!(!line.base.is_invalid());
        line.set_points(points);
        assert!(!line.base.is_invalid());
    }

    #[test]
    fn test_spline_smooths_with_cubics() {
        let mut spline = MapSpline::new();
        spline.set_points(vec![vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 5.0),
            Point::new(20.0, -5.0),
            Point::new(30.0, 0.0),
        ]]);

        assert_eq!(spline.base.path().matches('C').count(), 3);
        assert_eq!(spline.base.bbox(), BoundingBox::new(0.0, -5.0, 30.0, 10.0));
    }

    #[test]
    fn test_spline_two_points_stays_straight() {
        let mut spline = MapSpline::new();
        spline.set_points(vec![vec![Point::new(0.0, 0.0), Point::new(10.0, 10.0)]]);
        assert_eq!(spline.base.path(), "M 0 0 L 10 10 ");
    }

    #[test]
    fn test_spline_full_tension_is_straight_cubics() {
        let mut spline = MapSpline::new();
        spline.set_tension(1.0, 1.0);
        spline.set_points(vec![vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(20.0, 10.0),
        ]]);
        assert_eq!(
            spline.base.path(),
            "M 0 0 C 0 0 10 0 10 0 C 10 0 20 10 20 10 "
        );
    }

    #[test]
    fn test_spline_configure() {
        let mut spline = MapSpline::new();
        let config = serde_json::json!({
            "points": [[
                { "x": 0.0, "y": 0.0 },
                { "x": 10.0, "y": 5.0 },
                { "x": 20.0, "y": 0.0 }
            ]],
            "tensionX": 1.0,
            "tensionY": 1.0
        });
        spline.configure(&config).unwrap();
        assert_eq!(spline.tension(), (1.0, 1.0));
        assert_eq!(spline.base.path().matches('C').count(), 2);
    }

    #[test]
    fn test_spline_configure_keeps_tension_when_omitted() {
        let mut spline = MapSpline::new();
        spline.set_tension(1.0, 1.0);
        let config = serde_json::json!({
            "points": [[
                { "x": 0.0, "y": 0.0 },
                { "x": 10.0, "y": 0.0 },
                { "x": 20.0, "y": 10.0 }
            ]]
        });
        spline.configure(&config).unwrap();

        assert_eq!(spline.tension(), (1.0, 1.0));
        assert_eq!(
            spline.base.path(),
            "M 0 0 C 0 0 10 0 10 0 C 10 0 20 10 20 10 "
        );
    }
}
