use crate::geometry::bezier::ApproxBezier;
use crate::geometry::vec2::Vector2;

/// Position and unit tangent at one arclength parameter.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PathEval {
    pub position: Vector2,
    pub direction: Vector2,
}

/// A curve indexed by arclength.
///
/// `at(t)` clamps `t` to `[0, length()]`. Implementations are total: degenerate
/// inputs (zero-length segments, empty concatenations) evaluate to a fixed
/// position/direction instead of dividing by zero.
pub trait Path {
    fn length(&self) -> f64;

    fn at(&self, t: f64) -> PathEval;

    fn at_start(&self) -> PathEval {
        self.at(0.0)
    }

    fn at_end(&self) -> PathEval {
        self.at(self.length())
    }
}

/// Straight segment between two points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineSegment {
    pub start: Vector2,
    pub end: Vector2,
}

impl LineSegment {
    pub fn new(start: Vector2, end: Vector2) -> Self {
        Self { start, end }
    }
}

impl Path for LineSegment {
    fn length(&self) -> f64 {
        (self.end - self.start).length()
    }

    fn at(&self, t: f64) -> PathEval {
        let clamped = t.clamp(0.0, self.length());
        let direction = (self.end - self.start).normalized();
        PathEval {
            position: self.start + direction * clamped,
            direction,
        }
    }
}

/// Circular arc with a signed angle span.
///
/// Spans beyond a full turn are legal and simply produce longer arcs; nothing
/// here normalizes angles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arc {
    pub center: Vector2,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl Arc {
    pub fn new(center: Vector2, radius: f64, start_angle: f64, end_angle: f64) -> Self {
        Self {
            center,
            radius,
            start_angle,
            end_angle,
        }
    }
}

impl Path for Arc {
    fn length(&self) -> f64 {
        (self.end_angle - self.start_angle).abs() * self.radius
    }

    fn at(&self, t: f64) -> PathEval {
        let len = self.length();
        let clamped = t.clamp(0.0, len);
        // Zero-length arcs evaluate at the start angle.
        let frac = if len == 0.0 { 0.0 } else { clamped / len };
        let angle = self.start_angle + (self.end_angle - self.start_angle) * frac;
        let (sin_a, cos_a) = angle.sin_cos();
        let position = self.center + Vector2::new(cos_a, sin_a) * self.radius;
        // Tangent is the angle derivative, flipped for clockwise sweeps.
        let direction = if self.end_angle > self.start_angle {
            Vector2::new(-sin_a, cos_a)
        } else {
            Vector2::new(sin_a, -cos_a)
        };
        PathEval {
            position,
            direction,
        }
    }
}

/// Closed set of segment kinds a path is made of.
#[derive(Clone, Debug, PartialEq)]
pub enum PathSegment {
    Line(LineSegment),
    Arc(Arc),
    Bezier(ApproxBezier),
}

impl Path for PathSegment {
    fn length(&self) -> f64 {
        match self {
            Self::Line(s) => s.length(),
            Self::Arc(s) => s.length(),
            Self::Bezier(s) => s.length(),
        }
    }

    fn at(&self, t: f64) -> PathEval {
        match self {
            Self::Line(s) => s.at(t),
            Self::Arc(s) => s.at(t),
            Self::Bezier(s) => s.at(t),
        }
    }

    fn at_start(&self) -> PathEval {
        match self {
            Self::Line(s) => s.at_start(),
            Self::Arc(s) => s.at_start(),
            Self::Bezier(s) => s.at_start(),
        }
    }

    fn at_end(&self) -> PathEval {
        match self {
            Self::Line(s) => s.at_end(),
            Self::Arc(s) => s.at_end(),
            Self::Bezier(s) => s.at_end(),
        }
    }
}

/// Concatenation of segments indexed by cumulative arclength.
#[derive(Clone, Debug, PartialEq)]
pub struct SegmentedPath {
    start_position: Vector2,
    start_direction: Vector2,
    segments: Vec<PathSegment>,
    cumulative: Vec<f64>,
    total: f64,
}

impl SegmentedPath {
    pub fn new(
        start_position: Vector2,
        start_direction: Vector2,
        segments: Vec<PathSegment>,
    ) -> Self {
        let mut cumulative = Vec::with_capacity(segments.len());
        let mut total = 0.0;
        for segment in &segments {
            total += segment.length();
            cumulative.push(total);
        }
        Self {
            start_position,
            start_direction,
            segments,
            cumulative,
            total,
        }
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Owning segment index and local arclength offset for a clamped `t`.
    fn locate(&self, t: f64) -> (usize, f64) {
        let idx = self
            .cumulative
            .partition_point(|&c| c <= t)
            .min(self.segments.len() - 1);
        let segment_start = if idx == 0 { 0.0 } else { self.cumulative[idx - 1] };
        (idx, t - segment_start)
    }
}

impl Path for SegmentedPath {
    fn length(&self) -> f64 {
        self.total
    }

    fn at(&self, t: f64) -> PathEval {
        if self.total == 0.0 {
            return PathEval {
                position: self.start_position,
                direction: self.start_direction,
            };
        }
        let clamped = t.clamp(0.0, self.total);
        // Rounding in the cumulative sums can leave the local offset an ulp
        // short of the last child's length; the end is delegated so it stays
        // exact.
        if clamped == self.total {
            if let Some(last) = self.segments.last() {
                return last.at_end();
            }
        }
        let (idx, local) = self.locate(clamped);
        self.segments[idx].at(local)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_interpolates_and_clamps() {
        let line = LineSegment::new(Vector2::ZERO, Vector2::new(2.0, 0.0));
        assert_eq!(line.length(), 2.0);
        assert_eq!(line.at(1.0).position, Vector2::new(1.0, 0.0));
        assert_eq!(line.at(-5.0).position, Vector2::ZERO);
        assert_eq!(line.at(99.0).position, Vector2::new(2.0, 0.0));
        assert_eq!(line.at(1.0).direction, Vector2::UNIT_X);
    }

    #[test]
    fn zero_length_line_is_total() {
        let line = LineSegment::new(Vector2::new(1.0, 1.0), Vector2::new(1.0, 1.0));
        let eval = line.at(0.0);
        assert_eq!(eval.position, Vector2::new(1.0, 1.0));
        assert_eq!(eval.direction, Vector2::ZERO);
    }

    #[test]
    fn ccw_arc_tangent_leads_the_angle() {
        // Quarter turn from (1, 0) to (0, 1) around the origin.
        let arc = Arc::new(Vector2::ZERO, 1.0, 0.0, std::f64::consts::FRAC_PI_2);
        assert!((arc.length() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        let start = arc.at_start();
        assert!((start.position.x - 1.0).abs() < 1e-12);
        assert!((start.direction.y - 1.0).abs() < 1e-12);
        let end = arc.at_end();
        assert!((end.position.y - 1.0).abs() < 1e-12);
        assert!((end.direction.x + 1.0).abs() < 1e-12);
    }

    #[test]
    fn cw_arc_tangent_is_flipped() {
        let arc = Arc::new(Vector2::ZERO, 1.0, std::f64::consts::FRAC_PI_2, 0.0);
        let start = arc.at_start();
        // Starts at (0, 1) moving in +x.
        assert!((start.position.y - 1.0).abs() < 1e-12);
        assert!((start.direction.x - 1.0).abs() < 1e-12);
    }

    #[test]
    fn zero_radius_arc_has_zero_length() {
        let arc = Arc::new(Vector2::new(3.0, 4.0), 0.0, 0.0, 2.0);
        assert_eq!(arc.length(), 0.0);
        assert_eq!(arc.at(0.0).position, Vector2::new(3.0, 4.0));
    }

    #[test]
    fn arc_span_beyond_full_turn_is_not_normalized() {
        let arc = Arc::new(Vector2::ZERO, 1.0, 0.0, 3.0 * std::f64::consts::TAU);
        assert!((arc.length() - 3.0 * std::f64::consts::TAU).abs() < 1e-9);
    }

    #[test]
    fn segmented_path_length_is_additive() {
        let a = LineSegment::new(Vector2::ZERO, Vector2::new(1.0, 0.0));
        let b = LineSegment::new(Vector2::new(1.0, 0.0), Vector2::new(1.0, 2.0));
        let path = SegmentedPath::new(
            Vector2::ZERO,
            Vector2::UNIT_X,
            vec![PathSegment::Line(a), PathSegment::Line(b)],
        );
        assert_eq!(path.length(), 3.0);
        assert_eq!(path.at(0.0).position, Vector2::ZERO);
        assert_eq!(path.at(3.0).position, Vector2::new(1.0, 2.0));
        // Inside the second child.
        assert_eq!(path.at(2.0).position, Vector2::new(1.0, 1.0));
        assert_eq!(path.at(2.0).direction, Vector2::new(0.0, 1.0));
    }

    #[test]
    fn empty_path_returns_fixed_degenerate_eval() {
        let path = SegmentedPath::new(Vector2::new(5.0, 6.0), Vector2::UNIT_X, Vec::new());
        assert_eq!(path.length(), 0.0);
        let eval = path.at(10.0);
        assert_eq!(eval.position, Vector2::new(5.0, 6.0));
        assert_eq!(eval.direction, Vector2::UNIT_X);
    }

    #[test]
    fn at_total_length_is_the_exact_last_child_end() {
        use crate::geometry::bezier::{ApproxBezier, BezierCurve};
        // Ten 0.1-long steps accumulate rounding in the cumulative lengths.
        let mut segments: Vec<PathSegment> = (0..10)
            .map(|i| {
                PathSegment::Line(LineSegment::new(
                    Vector2::new(f64::from(i) * 0.1, 0.0),
                    Vector2::new(f64::from(i + 1) * 0.1, 0.0),
                ))
            })
            .collect();
        // The flattened cubic's end must come from its exact cached eval, not
        // from a polyline chord an ulp short of the end.
        let curve = BezierCurve::new(vec![
            Vector2::new(1.0, 0.0),
            Vector2::new(1.0, 2.0),
            Vector2::new(0.5, 4.0),
            Vector2::new(0.0, 5.0),
        ]);
        segments.push(PathSegment::Bezier(ApproxBezier::new(&curve, 100)));
        let path = SegmentedPath::new(Vector2::ZERO, Vector2::UNIT_X, segments);
        assert_eq!(path.at(path.length()).position, Vector2::new(0.0, 5.0));
    }

    #[test]
    fn zero_length_children_are_skipped() {
        let degenerate = LineSegment::new(Vector2::ZERO, Vector2::ZERO);
        let real = LineSegment::new(Vector2::ZERO, Vector2::new(1.0, 0.0));
        let path = SegmentedPath::new(
            Vector2::ZERO,
            Vector2::UNIT_X,
            vec![PathSegment::Line(degenerate), PathSegment::Line(real)],
        );
        assert_eq!(path.at(0.5).position, Vector2::new(0.5, 0.0));
    }
}
