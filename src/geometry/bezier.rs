use crate::geometry::path::{LineSegment, Path, PathEval, PathSegment, SegmentedPath};
use crate::geometry::vec2::Vector2;

/// Bezier curve of any order, evaluated by repeated linear interpolation.
///
/// Only cubic (four-point) curves are built by the program layer, but the
/// evaluation generalizes to any control-point count.
#[derive(Clone, Debug, PartialEq)]
pub struct BezierCurve {
    points: Vec<Vector2>,
}

impl BezierCurve {
    pub fn new(points: Vec<Vector2>) -> Self {
        Self { points }
    }

    /// De Casteljau evaluation at parameter `t` in `[0, 1]`.
    pub fn evaluate(&self, t: f64) -> Vector2 {
        let mut points = self.points.clone();
        let n = points.len();
        for r in 1..n {
            for i in 0..n - r {
                points[i] = points[i] * (1.0 - t) + points[i + 1] * t;
            }
        }
        points.first().copied().unwrap_or(Vector2::ZERO)
    }

    /// First derivative at `t`, via the hodograph (scaled forward differences).
    pub fn derivative(&self, t: f64) -> Vector2 {
        let n = self.points.len().saturating_sub(1);
        if n == 0 {
            return Vector2::ZERO;
        }
        let hodograph: Vec<Vector2> = self
            .points
            .windows(2)
            .map(|w| (w[1] - w[0]) * n as f64)
            .collect();
        BezierCurve::new(hodograph).evaluate(t)
    }
}

/// A Bezier curve flattened into a polyline for arclength indexing.
///
/// The curve has no closed-form arclength parametrization, so it is sampled at
/// `segments` uniform parameter steps and stitched into a [`SegmentedPath`] of
/// line segments. Traversal speed therefore varies with curvature even under a
/// uniform easing; that is the intended behavior. Start/end tangents come from
/// the exact hodograph, not the polyline chords.
#[derive(Clone, Debug, PartialEq)]
pub struct ApproxBezier {
    inner: SegmentedPath,
    start: PathEval,
    end: PathEval,
}

impl ApproxBezier {
    pub fn new(bezier: &BezierCurve, segments: u32) -> Self {
        let segments = segments.max(1);
        let step = 1.0 / f64::from(segments);
        let mut polyline = Vec::with_capacity(segments as usize);
        let mut prev = bezier.evaluate(0.0);
        for i in 1..=segments {
            let curr = bezier.evaluate(f64::from(i) * step);
            polyline.push(PathSegment::Line(LineSegment::new(prev, curr)));
            prev = curr;
        }
        let start = PathEval {
            position: bezier.evaluate(0.0),
            direction: bezier.derivative(0.0).normalized(),
        };
        let end = PathEval {
            position: bezier.evaluate(1.0),
            direction: bezier.derivative(1.0).normalized(),
        };
        Self {
            inner: SegmentedPath::new(start.position, start.direction, polyline),
            start,
            end,
        }
    }
}

impl Path for ApproxBezier {
    fn length(&self) -> f64 {
        self.inner.length()
    }

    fn at(&self, t: f64) -> PathEval {
        self.inner.at(t)
    }

    fn at_start(&self) -> PathEval {
        self.start
    }

    fn at_end(&self) -> PathEval {
        self.end
    }
}
