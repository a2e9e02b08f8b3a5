//! Polygon element: multi-shape point rings with optional holes.

use std::rc::Rc;

use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use crate::element::{Element, ElementBase};
use crate::error::Result;
use crate::geometry::{BoundingBox, Extrema, Point, PolygonInput};
use crate::morpher::Morpher;
use crate::paths;

/// Draws a list of shapes, each an outer surface ring plus an optional
/// hole ring, into one path string with a single close command.
///
/// The element keeps two point sets: `points` is authoritative, while
/// `current_points` is the working set the draw consumes. Morph frames are
/// swapped into the working set only, so the authoritative geometry
/// survives an animation. Point sets are shared as `Rc` and compared by
/// allocation identity, not by value.
#[derive(Debug)]
pub struct Polygon {
    base: ElementBase,
    points: Rc<PolygonInput>,
    current_points: Rc<PolygonInput>,
    morpher: Option<Morpher>,
}

impl Polygon {
    pub fn new() -> Self {
        let empty: Rc<PolygonInput> = Rc::new(Vec::new());
        Self {
            base: ElementBase::new(),
            points: Rc::clone(&empty),
            current_points: empty,
            morpher: None,
        }
    }

    /// The authoritative point set.
    pub fn points(&self) -> &Rc<PolygonInput> {
        &self.points
    }

    /// Stores a new authoritative point set, resets the working set to the
    /// same allocation, and redraws.
    pub fn set_points(&mut self, points: PolygonInput) {
        let points = Rc::new(points);
        self.points = Rc::clone(&points);
        self.current_points = points;
        self.base.invalidate();
        self.draw();
    }

    /// The working point set the next draw consumes.
    pub fn current_points(&self) -> &Rc<PolygonInput> {
        &self.current_points
    }

    /// Swaps in a new working set and redraws. Passing the allocation
    /// already held is a no-op fast path: nothing is invalidated and no
    /// redraw happens.
    pub fn set_current_points(&mut self, points: Rc<PolygonInput>) {
        if Rc::ptr_eq(&self.current_points, &points) {
            return;
        }
        self.current_points = points;
        self.base.invalidate();
        self.draw();
    }

    /// Recomputes the path and bounding box from the working set.
    ///
    /// Surface rings are emitted as a move followed by a line through every
    /// surface point, so the first vertex is visited twice; each surface
    /// point also folds into the extrema. Hole rings are emitted the same
    /// way but never touch the extrema. One close command is appended when
    /// any content was emitted, and only then is the bounding box stored;
    /// a draw that emits nothing leaves the previous box untouched.
    pub fn draw(&mut self) {
        let mut path = String::new();
        let mut extrema = Extrema::new();

        for shape in self.current_points.iter() {
            if let Some(first) = shape.surface.first() {
                path.push_str(&paths::move_to(*first));
                for point in &shape.surface {
                    path.push_str(&paths::line_to(*point));
                    extrema.fold(*point);
                }
            }
            if let Some(hole) = &shape.hole {
                if let Some(first) = hole.first() {
                    path.push_str(&paths::move_to(*first));
                    for point in hole {
                        path.push_str(&paths::line_to(*point));
                    }
                }
            }
        }

        if !path.is_empty() {
            path.push_str(paths::close());
            self.base.set_bbox(extrema.bounding_box());
        }
        self.base.set_path(path);
    }

    /// Midpoint of the bounding box.
    pub fn center_point(&self) -> Point {
        self.base.bbox().center()
    }

    /// The morph helper for this element, created lazily on first access
    /// and disposed together with the element.
    pub fn morpher(&mut self) -> &mut Morpher {
        let current = &self.current_points;
        self.morpher
            .get_or_insert_with(|| Morpher::new(Rc::clone(current)))
    }

    /// Prepares a morph from the working set towards `target`.
    pub fn morph_to_points(&mut self, target: PolygonInput) {
        let from = Rc::clone(&self.current_points);
        self.morpher().begin(from, Rc::new(target));
    }

    /// Prepares a morph towards a circle over the current bounding box.
    /// Default radius is half the larger box side.
    pub fn morph_to_circle(&mut self, radius: Option<f64>) {
        let bbox = self.base.bbox();
        let radius = radius.unwrap_or_else(|| bbox.width.max(bbox.height) / 2.0);
        let vertex_count = self
            .current_points
            .first()
            .map(|shape| shape.surface.len())
            .unwrap_or(0)
            .max(32);
        let target = Morpher::circle_rings(bbox.center(), radius, vertex_count);
        self.morph_to_points(target);
    }

    /// Prepares a morph towards an axis-aligned rectangle anchored at the
    /// current bounding box origin.
    pub fn morph_to_rectangle(&mut self, width: f64, height: f64) {
        let bbox = self.base.bbox();
        let target = Morpher::rectangle_rings(Point::new(bbox.x, bbox.y), width, height);
        self.morph_to_points(target);
    }

    /// Advances the prepared morph and swaps the frame into the working
    /// set. Does nothing when no morpher was created.
    pub fn morph_frame(&mut self, progress: f64) {
        let frame = match self.morpher.as_mut() {
            Some(morpher) => morpher.frame(progress),
            None => return,
        };
        self.set_current_points(frame);
    }

    /// Reverses the prepared morph direction.
    pub fn morph_back(&mut self) {
        if let Some(morpher) = self.morpher.as_mut() {
            morpher.morph_back();
        }
    }

    pub fn dispose(&mut self) {
        if self.base.is_disposed() {
            return;
        }
        if let Some(morpher) = self.morpher.as_mut() {
            morpher.dispose();
        }
        self.base.dispose();
    }

    pub fn is_disposed(&self) -> bool {
        self.base.is_disposed()
    }
}

impl Default for Polygon {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct PolygonConfig {
    points: PolygonInput,
}

impl Element for Polygon {
    fn class_name(&self) -> &'static str {
        "Polygon"
    }

    fn id(&self) -> Uuid {
        self.base.id()
    }

    fn draw(&mut self) {
        Polygon::draw(self);
    }

    fn path(&self) -> &str {
        self.base.path()
    }

    fn bounding_box(&self) -> BoundingBox {
        self.base.bbox()
    }

    fn configure(&mut self, config: &Value) -> Result<()> {
        let config = PolygonConfig::deserialize(config)?;
        self.set_points(config.points);
        Ok(())
    }

    fn dispose(&mut self) {
        Polygon::dispose(self);
    }

    fn is_disposed(&self) -> bool {
        Polygon::is_disposed(self)
    }
}
