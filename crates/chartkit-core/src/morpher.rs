//! Shape interpolation between two polygon point sets.
//!
//! A morpher is owned by a polygon element, created lazily on first use and
//! disposed with it. It prepares a normalized (from, to) pair once, then an
//! external animation driver asks for in-between frames; the element swaps
//! each frame into its working point set.

use std::mem;
use std::rc::Rc;

use crate::geometry::{Point, PolygonInput, PolygonRings, Ring};

#[derive(Debug)]
pub struct Morpher {
    from: Rc<PolygonInput>,
    to: Rc<PolygonInput>,
    progress: Option<f64>,
    disposed: bool,
}

impl Morpher {
    /// A morpher that starts out pinned to `initial` on both ends.
    pub fn new(initial: Rc<PolygonInput>) -> Self {
        Self {
            from: Rc::clone(&initial),
            to: initial,
            progress: None,
            disposed: false,
        }
    }

    /// Captures a morph pair, normalized to congruent structure: equal
    /// shape counts (missing shapes collapse to a point at the counterpart
    /// shape's centroid) and per-shape equal ring lengths (extra vertices
    /// inserted along the longest edges).
    pub fn begin(&mut self, from: Rc<PolygonInput>, to: Rc<PolygonInput>) {
        let (from, to) = normalize(&from, &to);
        self.from = Rc::new(from);
        self.to = Rc::new(to);
        self.progress = None;
    }

    /// The interpolated point set at `progress` (0 = from, 1 = to). Values
    /// outside 0..1 extrapolate; no clamping.
    pub fn frame(&mut self, progress: f64) -> Rc<PolygonInput> {
        let mut result: PolygonInput = Vec::with_capacity(self.from.len());
        for (shape_from, shape_to) in self.from.iter().zip(self.to.iter()) {
            let surface = lerp_ring(&shape_from.surface, &shape_to.surface, progress);
            let hole = match (&shape_from.hole, &shape_to.hole) {
                (Some(hole_from), Some(hole_to)) => Some(lerp_ring(hole_from, hole_to, progress)),
                _ => None,
            };
            result.push(PolygonRings { surface, hole });
        }
        self.progress = Some(progress);
        Rc::new(result)
    }

    /// Swaps the morph direction so the driver can run the reverse pass.
    pub fn morph_back(&mut self) {
        mem::swap(&mut self.from, &mut self.to);
        self.progress = None;
    }

    pub fn morph_from(&self) -> &Rc<PolygonInput> {
        &self.from
    }

    pub fn morph_to(&self) -> &Rc<PolygonInput> {
        &self.to
    }

    /// The progress of the most recent frame, if any.
    pub fn progress(&self) -> Option<f64> {
        self.progress
    }

    /// Drops the captured point sets. Idempotent.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.from = Rc::new(Vec::new());
        self.to = Rc::new(Vec::new());
        self.progress = None;
        self.disposed = true;
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// A single-shape circle target sampled at `vertex_count` points
    /// (minimum 3), centered at `center`.
    pub fn circle_rings(center: Point, radius: f64, vertex_count: usize) -> PolygonInput {
        let count = vertex_count.max(3);
        let mut ring: Ring = Vec::with_capacity(count);
        for i in 0..count {
            let angle = (i as f64 / count as f64) * std::f64::consts::TAU;
            ring.push(Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            ));
        }
        vec![PolygonRings::new(ring)]
    }

    /// A single-shape axis-aligned rectangle target anchored at `origin`.
    pub fn rectangle_rings(origin: Point, width: f64, height: f64) -> PolygonInput {
        vec![PolygonRings::new(vec![
            Point::new(origin.x, origin.y),
            Point::new(origin.x + width, origin.y),
            Point::new(origin.x + width, origin.y + height),
            Point::new(origin.x, origin.y + height),
        ])]
    }
}

fn lerp_ring(a: &[Point], b: &[Point], t: f64) -> Ring {
    a.iter().zip(b.iter()).map(|(pa, pb)| pa.lerp(pb, t)).collect()
}

fn normalize(a: &[PolygonRings], b: &[PolygonRings]) -> (PolygonInput, PolygonInput) {
    let count = a.len().max(b.len());
    let mut out_a: PolygonInput = Vec::with_capacity(count);
    let mut out_b: PolygonInput = Vec::with_capacity(count);

    for i in 0..count {
        let (mut shape_a, mut shape_b) = match (a.get(i), b.get(i)) {
            (Some(sa), Some(sb)) => (sa.clone(), sb.clone()),
            (Some(sa), None) => (sa.clone(), collapse_like(sa)),
            (None, Some(sb)) => (collapse_like(sb), sb.clone()),
            (None, None) => continue,
        };

        let centroid_a = shape_a.surface_centroid();
        let centroid_b = shape_b.surface_centroid();

        // An empty-but-present ring grows from its counterpart's centroid.
        if shape_a.surface.is_empty() && !shape_b.surface.is_empty() {
            shape_a.surface.push(centroid_b);
        }
        if shape_b.surface.is_empty() && !shape_a.surface.is_empty() {
            shape_b.surface.push(centroid_a);
        }
        equalize(&mut shape_a.surface, &mut shape_b.surface);

        if shape_a.hole.is_some() || shape_b.hole.is_some() {
            let hole_a = shape_a.hole.get_or_insert_with(Vec::new);
            let hole_b = shape_b.hole.get_or_insert_with(Vec::new);
            if hole_a.is_empty() && !hole_b.is_empty() {
                hole_a.push(centroid_a);
            }
            if hole_b.is_empty() && !hole_a.is_empty() {
                hole_b.push(centroid_b);
            }
            equalize(hole_a, hole_b);
        }

        out_a.push(shape_a);
        out_b.push(shape_b);
    }

    (out_a, out_b)
}

/// A one-point shape at the centroid of `shape`, so a missing counterpart
/// grows from (or collapses to) the existing shape's center.
fn collapse_like(shape: &PolygonRings) -> PolygonRings {
    PolygonRings::new(vec![shape.surface_centroid()])
}

fn equalize(a: &mut Ring, b: &mut Ring) {
    let target = a.len().max(b.len());
    add_points(a, target);
    add_points(b, target);
}

/// Grows `ring` to `target` vertices by splitting the longest edge.
fn add_points(ring: &mut Ring, target: usize) {
    if ring.is_empty() {
        return;
    }
    while ring.len() < target {
        if ring.len() == 1 {
            let only = ring[0];
            ring.push(only);
            continue;
        }
        let mut split = 0;
        let mut longest = -1.0;
        for i in 0..ring.len() - 1 {
            let d = ring[i].distance_to(&ring[i + 1]);
            if d > longest {
                longest = d;
                split = i;
            }
        }
        let mid = ring[split].lerp(&ring[split + 1], 0.5);
        ring.insert(split + 1, mid);
    }
}
