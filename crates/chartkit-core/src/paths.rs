//! SVG path-string command builders.
//!
//! All elements serialize their geometry into this dialect: space-separated
//! absolute commands with a trailing space, ready for a `<path d="..">`
//! attribute or any SVG-compatible rendering surface. Coordinates are
//! written with `f64` display formatting; no validation or rounding is
//! applied, so NaN coordinates surface verbatim in the output.

use crate::geometry::Point;

/// Move command: `M x y `.
pub fn move_to(point: Point) -> String {
    format!("M {} {} ", point.x, point.y)
}

/// Line command: `L x y `.
pub fn line_to(point: Point) -> String {
    format!("L {} {} ", point.x, point.y)
}

/// Cubic curve command towards `to` with control points `ctrl_a`, `ctrl_b`.
pub fn cubic_curve_to(to: Point, ctrl_a: Point, ctrl_b: Point) -> String {
    format!(
        "C {} {} {} {} {} {} ",
        ctrl_a.x, ctrl_a.y, ctrl_b.x, ctrl_b.y, to.x, to.y
    )
}

/// Elliptical arc command towards `to`.
pub fn arc_to(radius_x: f64, radius_y: f64, large_arc: bool, sweep: bool, to: Point) -> String {
    format!(
        "A {} {} 0 {} {} {} {} ",
        radius_x, radius_y, large_arc as u8, sweep as u8, to.x, to.y
    )
}

/// Close command.
pub fn close() -> &'static str {
    "Z "
}

/// Straight polyline: move to the first point, line through the rest.
/// Empty input yields an empty string.
pub fn polyline(points: &[Point]) -> String {
    let mut path = String::new();
    if let Some(first) = points.first() {
        path.push_str(&move_to(*first));
        for point in &points[1..] {
            path.push_str(&line_to(*point));
        }
    }
    path
}

/// The point on a circle of `radius` around the origin at `angle_deg`
/// degrees (0 along +x, increasing towards +y).
pub fn point_on_circle(radius: f64, angle_deg: f64) -> Point {
    let a = angle_deg.to_radians();
    Point::new(radius * a.cos(), radius * a.sin())
}

/// Annular-sector outline around the origin: outer arc from `start_angle`
/// to `end_angle` (degrees), radial edge, inner arc back, close.
///
/// `inner_radius` 0 produces a pie wedge with a sharp tip. A positive
/// `corner_radius` rounds the sector corners with small arc fillets,
/// clamped so they never consume more than half the available edge or
/// sweep. Degenerate sweep or radius yields an empty string. A sweep of
/// 360 or more produces the full ring.
pub fn annular_sector(
    start_angle: f64,
    end_angle: f64,
    radius: f64,
    inner_radius: f64,
    corner_radius: f64,
) -> String {
    let (a0, a1) = if end_angle < start_angle {
        (end_angle, start_angle)
    } else {
        (start_angle, end_angle)
    };
    let sweep = a1 - a0;
    if !(sweep > 0.0) || !(radius > 0.0) {
        return String::new();
    }

    let inner = inner_radius.clamp(0.0, radius);

    if sweep >= 360.0 {
        return full_ring(a0, radius, inner);
    }

    let mut cr = corner_radius.max(0.0);
    cr = cr.min((radius - inner) / 2.0);
    cr = cr.min(radius * (sweep / 2.0).to_radians());
    if inner > 0.0 {
        cr = cr.min(inner * (sweep / 2.0).to_radians());
    }

    if cr <= f64::EPSILON {
        return plain_sector(a0, a1, sweep, radius, inner);
    }
    rounded_sector(a0, a1, sweep, radius, inner, cr)
}

fn full_ring(start: f64, radius: f64, inner: f64) -> String {
    let mut path = String::new();
    let o0 = point_on_circle(radius, start);
    let o180 = point_on_circle(radius, start + 180.0);
    path.push_str(&move_to(o0));
    path.push_str(&arc_to(radius, radius, false, true, o180));
    path.push_str(&arc_to(radius, radius, false, true, o0));
    path.push_str(close());
    if inner > 0.0 {
        let i0 = point_on_circle(inner, start);
        let i180 = point_on_circle(inner, start + 180.0);
        path.push_str(&move_to(i0));
        path.push_str(&arc_to(inner, inner, false, false, i180));
        path.push_str(&arc_to(inner, inner, false, false, i0));
        path.push_str(close());
    }
    path
}

fn plain_sector(a0: f64, a1: f64, sweep: f64, radius: f64, inner: f64) -> String {
    let large = sweep > 180.0;
    let mut path = move_to(point_on_circle(radius, a0));
    path.push_str(&arc_to(
        radius,
        radius,
        large,
        true,
        point_on_circle(radius, a1),
    ));
    if inner > 0.0 {
        path.push_str(&line_to(point_on_circle(inner, a1)));
        path.push_str(&arc_to(
            inner,
            inner,
            large,
            false,
            point_on_circle(inner, a0),
        ));
    } else {
        path.push_str(&line_to(Point::new(0.0, 0.0)));
    }
    path.push_str(close());
    path
}

fn rounded_sector(a0: f64, a1: f64, sweep: f64, radius: f64, inner: f64, cr: f64) -> String {
    // Angular margin the fillet consumes at each arc end.
    let phi_outer = (cr / radius).to_degrees();
    let outer_large = sweep - 2.0 * phi_outer > 180.0;

    let mut path = move_to(point_on_circle(radius, a0 + phi_outer));
    path.push_str(&arc_to(
        radius,
        radius,
        outer_large,
        true,
        point_on_circle(radius, a1 - phi_outer),
    ));
    path.push_str(&arc_to(cr, cr, false, true, point_on_circle(radius - cr, a1)));

    if inner > 0.0 {
        let phi_inner = (cr / inner).to_degrees();
        let inner_large = sweep - 2.0 * phi_inner > 180.0;
        path.push_str(&line_to(point_on_circle(inner + cr, a1)));
        path.push_str(&arc_to(
            cr,
            cr,
            false,
            true,
            point_on_circle(inner, a1 - phi_inner),
        ));
        path.push_str(&arc_to(
            inner,
            inner,
            inner_large,
            false,
            point_on_circle(inner, a0 + phi_inner),
        ));
        path.push_str(&arc_to(cr, cr, false, true, point_on_circle(inner + cr, a0)));
        path.push_str(&line_to(point_on_circle(radius - cr, a0)));
    } else {
        // Pie wedge: the tip stays sharp, only the outer corners round.
        path.push_str(&line_to(Point::new(0.0, 0.0)));
        path.push_str(&line_to(point_on_circle(radius - cr, a0)));
    }

    path.push_str(&arc_to(
        cr,
        cr,
        false,
        true,
        point_on_circle(radius, a0 + phi_outer),
    ));
    path.push_str(close());
    path
}

/// Smoothed polyline: cubic segments through `points` with control points
/// derived from each vertex's neighbors, scaled by `1 - tension`.
///
/// Tension 1 degenerates to straight segments; lower values smooth harder.
/// Fewer than three points fall back to [`polyline`]. When the first and
/// last points coincide (rounded to 3 decimals) the line is treated as
/// closed and neighbor lookup wraps around.
pub fn tension_polyline(points: &[Point], tension_x: f64, tension_y: f64) -> String {
    let len = points.len();
    if len < 3 {
        return polyline(points);
    }

    let first = points[0];
    let last = points[len - 1];
    let closed = round3(first.x) == round3(last.x) && round3(first.y) == round3(last.y);

    let mut path = move_to(first);
    for i in 0..len - 1 {
        let p1 = points[i];
        let p2 = points[i + 1];
        let p0 = if i == 0 {
            if closed {
                points[len - 2]
            } else {
                points[i]
            }
        } else {
            points[i - 1]
        };
        let p3 = if i == len - 2 {
            if closed {
                points[1]
            } else {
                points[i + 1]
            }
        } else {
            points[i + 2]
        };

        let ctrl_a = cubic_control_a(p0, p1, p2, tension_x, tension_y);
        let ctrl_b = cubic_control_b(p1, p2, p3, tension_x, tension_y);
        path.push_str(&cubic_curve_to(p2, ctrl_a, ctrl_b));
    }
    path
}

fn cubic_control_a(p0: Point, p1: Point, p2: Point, tension_x: f64, tension_y: f64) -> Point {
    let tx = 1.0 - tension_x;
    let ty = 1.0 - tension_y;
    Point::new(p1.x + (p2.x - p0.x) * tx, p1.y + (p2.y - p0.y) * ty)
}

fn cubic_control_b(p1: Point, p2: Point, p3: Point, tension_x: f64, tension_y: f64) -> Point {
    let tx = 1.0 - tension_x;
    let ty = 1.0 - tension_y;
    Point::new(p2.x - (p3.x - p1.x) * tx, p2.y - (p3.y - p1.y) * ty)
}

fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_commands() {
        assert_eq!(move_to(Point::new(5.0, 5.0)), "M 5 5 ");
        assert_eq!(line_to(Point::new(10.0, 0.5)), "L 10 0.5 ");
        assert_eq!(close(), "Z ");
    }

    #[test]
    fn test_polyline() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
        ];
        assert_eq!(polyline(&points), "M 0 0 L 10 0 L 10 10 ");
        assert_eq!(polyline(&[]), "");
    }

    #[test]
    fn test_nan_surfaces_in_output() {
        let cmd = line_to(Point::new(f64::NAN, 1.0));
        assert!(cmd.contains("NaN"));
    }

    #[test]
    fn test_annular_sector_wedge() {
        let path = annular_sector(0.0, 90.0, 100.0, 0.0, 0.0);
        assert!(path.starts_with("M 100 0 "));
        // wedge closes through the center
        assert!(path.contains("L 0 0 "));
        assert!(path.ends_with("Z "));
        assert_eq!(path.matches('A').count(), 1);
    }

    #[test]
    fn test_annular_sector_ring_band() {
        let path = annular_sector(0.0, 90.0, 100.0, 40.0, 0.0);
        // outer arc forward, inner arc back
        assert_eq!(path.matches('A').count(), 2);
        assert!(path.ends_with("Z "));
    }

    #[test]
    fn test_annular_sector_reversed_angles() {
        let forward = annular_sector(0.0, 90.0, 100.0, 40.0, 0.0);
        let reversed = annular_sector(90.0, 0.0, 100.0, 40.0, 0.0);
        assert_eq!(forward, reversed);
    }

    #[test]
    fn test_annular_sector_corner_fillets() {
        let path = annular_sector(0.0, 90.0, 100.0, 40.0, 6.0);
        // two main arcs plus four corner fillets
        assert_eq!(path.matches('A').count(), 6);
    }

    #[test]
    fn test_annular_sector_degenerate() {
        assert_eq!(annular_sector(45.0, 45.0, 100.0, 0.0, 0.0), "");
        assert_eq!(annular_sector(0.0, 90.0, 0.0, 0.0, 0.0), "");
    }

    #[test]
    fn test_annular_sector_full_circle() {
        let path = annular_sector(0.0, 360.0, 50.0, 20.0, 0.0);
        // two subpaths, two half arcs each
        assert_eq!(path.matches('M').count(), 2);
        assert_eq!(path.matches('A').count(), 4);
    }

    #[test]
    fn test_tension_polyline_short_input_falls_back() {
        let points = vec![Point::new(0.0, 0.0), Point::new(10.0, 10.0)];
        assert_eq!(tension_polyline(&points, 0.8, 0.8), polyline(&points));
    }

    #[test]
    fn test_tension_one_is_straight() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(20.0, 10.0),
        ];
        let path = tension_polyline(&points, 1.0, 1.0);
        // control points collapse onto the segment endpoints
        assert_eq!(path, "M 0 0 C 0 0 10 0 10 0 C 10 0 20 10 20 10 ");
    }

    #[test]
    fn test_tension_polyline_segment_count() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 5.0),
            Point::new(20.0, -5.0),
            Point::new(30.0, 0.0),
        ];
        let path = tension_polyline(&points, 0.8, 0.8);
        assert_eq!(path.matches('C').count(), points.len() - 1);
    }

    #[test]
    fn test_tension_polyline_closed_ring_wraps_neighbors() {
        let ring = vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
            Point::new(0.0, 0.0),
        ];
        // first segment leans towards the wrapped previous vertex, last
        // segment towards the wrapped second vertex
        let path = tension_polyline(&ring, 0.75, 0.75);
        assert_eq!(
            path,
            "M 0 0 C 2.5 -2.5 7.5 -2.5 10 0 C 12.5 2.5 12.5 7.5 10 10 \
             C 7.5 12.5 2.5 10 0 10 C -2.5 7.5 -2.5 2.5 0 0 "
        );

        // endpoints matching after 3-decimal rounding also close the ring
        let mut nearly = ring.clone();
        nearly[4] = Point::new(0.0004, -0.0004);
        assert!(tension_polyline(&nearly, 0.75, 0.75).starts_with("M 0 0 C 2.5 -2.5 "));

        // open run: the first vertex doubles as its own previous neighbor
        let mut open = ring;
        open[4] = Point::new(0.002, 0.0);
        assert!(tension_polyline(&open, 0.75, 0.75).starts_with("M 0 0 C 2.5 0 "));
    }
}
