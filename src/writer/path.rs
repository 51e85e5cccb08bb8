//! Path segments and the path builder.
//!
//! A [`Path`] is a non-empty segment list that starts with a move-to. It may
//! hold several subpaths; a close segment, when present, ends its subpath and
//! only a new move-to may follow it.

use crate::error::{Error, Result};
use crate::geometry::{Matrix, Point, Rect};
use serde::Serialize;

/// A single path segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum PathSegment {
    /// Start a new subpath (m operator)
    MoveTo(Point),
    /// Straight line to a point (l operator)
    LineTo(Point),
    /// Cubic Bézier curve (c operator)
    CurveTo {
        /// First control point
        ctrl1: Point,
        /// Second control point
        ctrl2: Point,
        /// End point
        end: Point,
    },
    /// Close the current subpath back to its start (h operator)
    Close,
}

impl PathSegment {
    fn map(&self, m: &Matrix) -> PathSegment {
        match *self {
            PathSegment::MoveTo(p) => PathSegment::MoveTo(m.transform_point(p)),
            PathSegment::LineTo(p) => PathSegment::LineTo(m.transform_point(p)),
            PathSegment::CurveTo { ctrl1, ctrl2, end } => PathSegment::CurveTo {
                ctrl1: m.transform_point(ctrl1),
                ctrl2: m.transform_point(ctrl2),
                end: m.transform_point(end),
            },
            PathSegment::Close => PathSegment::Close,
        }
    }

    /// End point of the segment (None for close).
    pub fn end_point(&self) -> Option<Point> {
        match *self {
            PathSegment::MoveTo(p) | PathSegment::LineTo(p) => Some(p),
            PathSegment::CurveTo { end, .. } => Some(end),
            PathSegment::Close => None,
        }
    }
}

/// A validated, immutable sequence of path segments.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Path {
    segments: Vec<PathSegment>,
}

impl Path {
    /// The segments in drawing order.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Number of subpaths (one per move-to).
    pub fn subpath_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, PathSegment::MoveTo(_)))
            .count()
    }

    /// End points of every non-close segment, in order.
    pub fn vertices(&self) -> Vec<Point> {
        self.segments.iter().filter_map(|s| s.end_point()).collect()
    }

    /// True when every point, control points included, is finite.
    pub fn is_finite(&self) -> bool {
        self.segments.iter().all(|s| match s {
            PathSegment::MoveTo(p) | PathSegment::LineTo(p) => p.is_finite(),
            PathSegment::CurveTo { ctrl1, ctrl2, end } => {
                ctrl1.is_finite() && ctrl2.is_finite() && end.is_finite()
            },
            PathSegment::Close => true,
        })
    }

    /// True when the final segment is a close.
    pub fn is_closed(&self) -> bool {
        matches!(self.segments.last(), Some(PathSegment::Close))
    }

    /// The same path with every point mapped through `m`.
    pub fn transformed(&self, m: &Matrix) -> Path {
        Path {
            segments: self.segments.iter().map(|s| s.map(m)).collect(),
        }
    }

    /// Bounding box of all points, control points included.
    pub fn bounding_box(&self) -> Rect {
        let mut min_x = f32::MAX;
        let mut min_y = f32::MAX;
        let mut max_x = f32::MIN;
        let mut max_y = f32::MIN;

        let mut include = |p: &Point| {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        };

        for segment in &self.segments {
            match segment {
                PathSegment::MoveTo(p) | PathSegment::LineTo(p) => include(p),
                PathSegment::CurveTo { ctrl1, ctrl2, end } => {
                    include(ctrl1);
                    include(ctrl2);
                    include(end);
                },
                PathSegment::Close => {},
            }
        }

        Rect::from_points(min_x, min_y, max_x, max_y)
    }
}

fn check_point(p: &Point) -> Result<()> {
    if p.is_finite() {
        Ok(())
    } else {
        Err(Error::invalid(format!("path point must be finite, got ({}, {})", p.x, p.y)))
    }
}

/// Accumulates segments in local coordinates.
///
/// # Example
///
/// ```
/// use pagecraft::geometry::Point;
/// use pagecraft::writer::PathBuilder;
///
/// let mut builder = PathBuilder::new();
/// builder.move_to(Point::new(50.0, 100.0)).unwrap();
/// builder.curve_to(
///     Point::new(150.0, 180.0),
///     Point::new(250.0, 20.0),
///     Point::new(350.0, 100.0),
/// ).unwrap();
/// let path = builder.build().unwrap();
/// assert_eq!(path.segments().len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PathBuilder {
    segments: Vec<PathSegment>,
    /// Start point of the open subpath
    subpath_start: Option<Point>,
    /// Whether the current subpath ended with a close
    closed: bool,
}

impl PathBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new subpath at `p`.
    ///
    /// A move-to that directly follows another move-to replaces it, since the
    /// earlier subpath has nothing drawn in it.
    pub fn move_to(&mut self, p: Point) -> Result<&mut Self> {
        check_point(&p)?;
        if let Some(PathSegment::MoveTo(_)) = self.segments.last() {
            self.segments.pop();
        }
        self.segments.push(PathSegment::MoveTo(p));
        self.subpath_start = Some(p);
        self.closed = false;
        Ok(self)
    }

    fn ensure_open(&self) -> Result<()> {
        if self.subpath_start.is_none() {
            return Err(Error::NoActiveSubpath);
        }
        if self.closed {
            return Err(Error::AlreadyClosed);
        }
        Ok(())
    }

    /// Straight line from the current point to `p`.
    pub fn line_to(&mut self, p: Point) -> Result<&mut Self> {
        self.ensure_open()?;
        check_point(&p)?;
        self.segments.push(PathSegment::LineTo(p));
        Ok(self)
    }

    /// Cubic Bézier from the current point to `end`.
    pub fn curve_to(&mut self, ctrl1: Point, ctrl2: Point, end: Point) -> Result<&mut Self> {
        self.ensure_open()?;
        for p in [&ctrl1, &ctrl2, &end] {
            check_point(p)?;
        }
        self.segments.push(PathSegment::CurveTo { ctrl1, ctrl2, end });
        Ok(self)
    }

    /// Close the current subpath back to its start point.
    pub fn close(&mut self) -> Result<&mut Self> {
        self.ensure_open()?;
        self.segments.push(PathSegment::Close);
        self.closed = true;
        Ok(self)
    }

    /// True when no segment has been added.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Finish the path.
    pub fn build(self) -> Result<Path> {
        if self.segments.is_empty() {
            return Err(Error::NoActiveSubpath);
        }
        Ok(Path {
            segments: self.segments,
        })
    }
}
