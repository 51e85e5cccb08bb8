//! Canonical shapes as paths.
//!
//! Pure geometry: every function turns parameters into a [`Path`] in local
//! coordinates and touches no graphics state. Quarter arcs use cubic Béziers
//! with control points at `KAPPA * radius`.

use super::path::{Path, PathBuilder};
use crate::error::{Error, Result};
use crate::geometry::Point;
use std::f32::consts::PI;

/// Bézier control offset for a quarter circle: `4 * (sqrt(2) - 1) / 3`.
pub const KAPPA: f32 = 0.552_284_8;

fn check_positive(name: &str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::invalid(format!("{} must be > 0, got {}", name, value)))
    }
}

fn check_finite(values: &[f32]) -> Result<()> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(Error::invalid("coordinates must be finite"))
    }
}

/// Straight line segment from `from` to `to`.
pub fn line(from: Point, to: Point) -> Result<Path> {
    check_finite(&[from.x, from.y, to.x, to.y])?;
    let mut b = PathBuilder::new();
    b.move_to(from)?;
    b.line_to(to)?;
    b.build()
}

/// Axis-aligned rectangle, counter-clockwise from the bottom-left corner.
///
/// Four line segments (the last one returns to the start) plus a close.
pub fn rectangle(x: f32, y: f32, width: f32, height: f32) -> Result<Path> {
    check_finite(&[x, y])?;
    check_positive("width", width)?;
    check_positive("height", height)?;

    let mut b = PathBuilder::new();
    b.move_to(Point::new(x, y))?;
    b.line_to(Point::new(x + width, y))?;
    b.line_to(Point::new(x + width, y + height))?;
    b.line_to(Point::new(x, y + height))?;
    b.line_to(Point::new(x, y))?;
    b.close()?;
    b.build()
}

/// Rectangle with quarter-circle corners of `radius`.
///
/// Eight segments after the move-to: the four straight edges alternate with
/// the four corner arcs, counter-clockwise from the bottom edge, then a close.
/// No zero-length connector lines are emitted; when `radius` is exactly half
/// the shorter side, two of the straight edges have zero length.
///
/// Fails when `radius` exceeds half the shorter side. A zero radius gives
/// the plain [`rectangle`].
pub fn rounded_rectangle(x: f32, y: f32, width: f32, height: f32, radius: f32) -> Result<Path> {
    check_finite(&[x, y])?;
    check_positive("width", width)?;
    check_positive("height", height)?;
    if !radius.is_finite() || radius < 0.0 {
        return Err(Error::invalid(format!("corner radius must be >= 0, got {}", radius)));
    }
    let max_radius = width.min(height) / 2.0;
    if radius > max_radius {
        return Err(Error::invalid(format!(
            "corner radius {} exceeds half the shorter side ({})",
            radius, max_radius
        )));
    }
    if radius == 0.0 {
        return rectangle(x, y, width, height);
    }

    let r = radius;
    let k = r * KAPPA;
    let x_right = x + width;
    let y_top = y + height;

    let mut b = PathBuilder::new();
    // bottom edge, right of the bottom-left arc
    b.move_to(Point::new(x + r, y))?;
    b.line_to(Point::new(x_right - r, y))?;
    b.curve_to(
        Point::new(x_right - r + k, y),
        Point::new(x_right, y + r - k),
        Point::new(x_right, y + r),
    )?;
    b.line_to(Point::new(x_right, y_top - r))?;
    b.curve_to(
        Point::new(x_right, y_top - r + k),
        Point::new(x_right - r + k, y_top),
        Point::new(x_right - r, y_top),
    )?;
    b.line_to(Point::new(x + r, y_top))?;
    b.curve_to(
        Point::new(x + r - k, y_top),
        Point::new(x, y_top - r + k),
        Point::new(x, y_top - r),
    )?;
    b.line_to(Point::new(x, y + r))?;
    b.curve_to(Point::new(x, y + r - k), Point::new(x + r - k, y), Point::new(x + r, y))?;
    b.close()?;
    b.build()
}

/// Ellipse centred on `(cx, cy)`, four Bézier arcs starting at 3 o'clock.
pub fn ellipse(cx: f32, cy: f32, rx: f32, ry: f32) -> Result<Path> {
    check_finite(&[cx, cy])?;
    check_positive("rx", rx)?;
    check_positive("ry", ry)?;

    let kx = rx * KAPPA;
    let ky = ry * KAPPA;

    let mut b = PathBuilder::new();
    b.move_to(Point::new(cx + rx, cy))?;
    b.curve_to(
        Point::new(cx + rx, cy + ky),
        Point::new(cx + kx, cy + ry),
        Point::new(cx, cy + ry),
    )?;
    b.curve_to(
        Point::new(cx - kx, cy + ry),
        Point::new(cx - rx, cy + ky),
        Point::new(cx - rx, cy),
    )?;
    b.curve_to(
        Point::new(cx - rx, cy - ky),
        Point::new(cx - kx, cy - ry),
        Point::new(cx, cy - ry),
    )?;
    b.curve_to(
        Point::new(cx + kx, cy - ry),
        Point::new(cx + rx, cy - ky),
        Point::new(cx + rx, cy),
    )?;
    b.close()?;
    b.build()
}

/// Circle of `radius` centred on `(cx, cy)`.
pub fn circle(cx: f32, cy: f32, radius: f32) -> Result<Path> {
    ellipse(cx, cy, radius, radius)
}

/// Regular star with `points` tips, the first tip straight above the centre.
///
/// Vertices alternate between `r_outer` and `r_inner`, at angle
/// `PI/2 + i*PI/points` for `i in 0..2*points`.
pub fn regular_star(cx: f32, cy: f32, r_outer: f32, r_inner: f32, points: u32) -> Result<Path> {
    check_finite(&[cx, cy])?;
    if points < 3 {
        return Err(Error::invalid(format!("star needs at least 3 points, got {}", points)));
    }
    check_positive("inner radius", r_inner)?;
    check_positive("outer radius", r_outer)?;
    if r_inner >= r_outer {
        return Err(Error::invalid(format!(
            "inner radius {} must be smaller than outer radius {}",
            r_inner, r_outer
        )));
    }

    let mut b = PathBuilder::new();
    for i in 0..points * 2 {
        let angle = PI / 2.0 + i as f32 * PI / points as f32;
        let r = if i % 2 == 0 { r_outer } else { r_inner };
        let vertex = Point::new(cx + r * angle.cos(), cy + r * angle.sin());
        if i == 0 {
            b.move_to(vertex)?;
        } else {
            b.line_to(vertex)?;
        }
    }
    b.close()?;
    b.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::path::PathSegment;

    const EPS: f32 = 1e-3;

    fn distance(a: Point, b: Point) -> f32 {
        (a.x - b.x).hypot(a.y - b.y)
    }

    #[test]
    fn test_rectangle_segments() {
        let path = rectangle(80.0, 642.0, 200.0, 150.0).unwrap();
        let segs = path.segments();
        assert_eq!(segs.len(), 6);
        assert_eq!(segs[0], PathSegment::MoveTo(Point::new(80.0, 642.0)));
        assert_eq!(segs[1], PathSegment::LineTo(Point::new(280.0, 642.0)));
        assert_eq!(segs[2], PathSegment::LineTo(Point::new(280.0, 792.0)));
        assert_eq!(segs[3], PathSegment::LineTo(Point::new(80.0, 792.0)));
        assert_eq!(segs[4], PathSegment::LineTo(Point::new(80.0, 642.0)));
        assert_eq!(segs[5], PathSegment::Close);
    }

    #[test]
    fn test_rectangle_rejects_negative_size() {
        assert!(matches!(rectangle(0.0, 0.0, -1.0, 5.0), Err(Error::InvalidParameter(_))));
        assert!(rectangle(0.0, 0.0, 5.0, 0.0).is_err());
    }

    #[test]
    fn test_rounded_rectangle_radius_too_large() {
        assert!(matches!(
            rounded_rectangle(0.0, 0.0, 180.0, 50.0, 25.5),
            Err(Error::InvalidParameter(_))
        ));
        assert!(rounded_rectangle(0.0, 0.0, 180.0, 50.0, 25.0).is_ok());
        assert!(rounded_rectangle(0.0, 0.0, 180.0, 50.0, -1.0).is_err());
    }

    #[test]
    fn test_rounded_rectangle_shape() {
        let path = rounded_rectangle(80.0, 100.0, 180.0, 50.0, 10.0).unwrap();
        let curves = path
            .segments()
            .iter()
            .filter(|s| matches!(s, PathSegment::CurveTo { .. }))
            .count();
        let lines = path
            .segments()
            .iter()
            .filter(|s| matches!(s, PathSegment::LineTo(_)))
            .count();
        assert_eq!(curves, 4);
        assert_eq!(lines, 4);
        assert_eq!(path.segments().len(), 10);

        // edges and corner arcs alternate between the move-to and the close
        for (i, seg) in path.segments()[1..9].iter().enumerate() {
            if i % 2 == 0 {
                assert!(matches!(seg, PathSegment::LineTo(_)), "segment {}: {:?}", i + 1, seg);
            } else {
                assert!(matches!(seg, PathSegment::CurveTo { .. }), "segment {}: {:?}", i + 1, seg);
            }
        }
        assert!(path.is_closed());
        let bbox = path.bounding_box();
        assert!((bbox.width - 180.0).abs() < EPS);
        assert!((bbox.height - 50.0).abs() < EPS);
    }

    #[test]
    fn test_rounded_rectangle_zero_radius_is_rectangle() {
        let rounded = rounded_rectangle(10.0, 20.0, 30.0, 40.0, 0.0).unwrap();
        let plain = rectangle(10.0, 20.0, 30.0, 40.0).unwrap();
        assert_eq!(rounded, plain);
    }

    #[test]
    fn test_circle_is_closed_four_arcs() {
        let path = circle(100.0, 200.0, 40.0).unwrap();
        assert_eq!(path.segments().len(), 6);
        assert!(path.is_closed());
        for v in path.vertices() {
            assert!((distance(v, Point::new(100.0, 200.0)) - 40.0).abs() < EPS);
        }
    }

    #[test]
    fn test_ellipse_control_points() {
        let path = ellipse(0.0, 0.0, 20.0, 10.0).unwrap();
        match path.segments()[1] {
            PathSegment::CurveTo { ctrl1, ctrl2, end } => {
                assert!((ctrl1.y - 10.0 * KAPPA).abs() < EPS);
                assert!((ctrl2.x - 20.0 * KAPPA).abs() < EPS);
                assert_eq!(end, Point::new(0.0, 10.0));
            },
            other => panic!("expected curve, got {:?}", other),
        }
    }

    #[test]
    fn test_ellipse_rejects_zero_radius() {
        assert!(ellipse(0.0, 0.0, 0.0, 10.0).is_err());
        assert!(circle(0.0, 0.0, -5.0).is_err());
    }

    #[test]
    fn test_star_vertices() {
        let center = Point::new(170.0, 300.0);
        let path = regular_star(center.x, center.y, 50.0, 20.0, 5).unwrap();
        let vertices = path.vertices();
        assert_eq!(vertices.len(), 10);
        for (i, v) in vertices.iter().enumerate() {
            let expected = if i % 2 == 0 { 50.0 } else { 20.0 };
            assert!((distance(*v, center) - expected).abs() < EPS);
        }
        assert!((vertices[0].x - 170.0).abs() < EPS);
        assert!((vertices[0].y - 350.0).abs() < EPS);
        assert!(path.is_closed());
    }

    #[test]
    fn test_star_rejects_degenerate() {
        assert!(matches!(regular_star(0.0, 0.0, 50.0, 20.0, 2), Err(Error::InvalidParameter(_))));
        assert!(regular_star(0.0, 0.0, 20.0, 20.0, 5).is_err());
        assert!(regular_star(0.0, 0.0, 20.0, 30.0, 5).is_err());
        assert!(regular_star(0.0, 0.0, 20.0, 0.0, 5).is_err());
    }

    #[test]
    fn test_line() {
        let path = line(Point::new(0.0, 0.0), Point::new(3.0, 4.0)).unwrap();
        assert_eq!(path.vertices().len(), 2);
        assert!(!path.is_closed());
    }
}
