use std::f64::consts::FRAC_PI_2;

use crate::geometry::bezier::{ApproxBezier, BezierCurve};
use crate::geometry::path::{Arc, LineSegment, Path, PathSegment, SegmentedPath};
use crate::geometry::vec2::Vector2;
use crate::motion::ease::Ease;
use crate::motion::mover::{SequencedMover, SimpleMover};

/// Accumulates path segments while threading a cursor (current position plus
/// current unit tangent) through consecutive calls.
///
/// Absolute calls take literal endpoints/centers; `*_continue` calls are
/// relative to the cursor and keep the new segment tangent-continuous with
/// whatever precedes it. Calls move the builder by value, so each step is an
/// explicit new state rather than shared mutation across a chain.
#[derive(Clone, Debug)]
pub struct PathBuilder {
    start_position: Vector2,
    start_direction: Vector2,
    last_position: Vector2,
    last_direction: Vector2,
    segments: Vec<PathSegment>,
}

impl Default for PathBuilder {
    fn default() -> Self {
        Self::new(Vector2::ZERO, Vector2::UNIT_X)
    }
}

impl PathBuilder {
    pub fn new(position: Vector2, direction: Vector2) -> Self {
        Self {
            start_position: position,
            start_direction: direction,
            last_position: position,
            last_direction: direction,
            segments: Vec::new(),
        }
    }

    pub fn cursor_position(&self) -> Vector2 {
        self.last_position
    }

    pub fn cursor_direction(&self) -> Vector2 {
        self.last_direction
    }

    /// Move the cursor without emitting a segment. The tangent is untouched.
    pub fn start(mut self, start: Vector2) -> Self {
        self.last_position = start;
        self
    }

    pub fn line(mut self, end: Vector2) -> Self {
        let segment = LineSegment::new(self.last_position, end);
        self.segments.push(PathSegment::Line(segment));
        self.last_direction = (end - self.last_position).normalized();
        self.last_position = end;
        self
    }

    /// Extend along the current tangent by `length`.
    pub fn line_continue(self, length: f64) -> Self {
        let end = self.last_position + self.last_direction * length;
        self.line(end)
    }

    /// Sweep `angle` radians around `center`, starting at the cursor.
    ///
    /// The radius is derived from the cursor, never stored as a literal.
    pub fn arc(mut self, center: Vector2, angle: f64) -> Self {
        let to_cursor = self.last_position - center;
        let radius = to_cursor.length();
        let start_angle = to_cursor.angle();
        let end_angle = start_angle + angle;
        self.segments
            .push(PathSegment::Arc(Arc::new(center, radius, start_angle, end_angle)));
        let (sin_e, cos_e) = end_angle.sin_cos();
        self.last_position = center + Vector2::new(cos_e, sin_e) * radius;
        let tangent_angle = end_angle + if angle > 0.0 { FRAC_PI_2 } else { -FRAC_PI_2 };
        self.last_direction = Vector2::new(tangent_angle.cos(), tangent_angle.sin());
        self
    }

    /// Arc of the given radius starting tangent to the cursor direction.
    ///
    /// The center sits perpendicular to the tangent, on the side chosen by the
    /// sign of `angle`.
    pub fn arc_continue(self, radius: f64, angle: f64) -> Self {
        let offset = if angle > 0.0 {
            self.last_direction.perp()
        } else {
            -self.last_direction.perp()
        };
        let center = self.last_position + offset * radius;
        self.arc(center, angle)
    }

    pub fn bezier(mut self, c1: Vector2, c2: Vector2, end: Vector2, segments: u32) -> Self {
        let curve = BezierCurve::new(vec![self.last_position, c1, c2, end]);
        let approx = ApproxBezier::new(&curve, segments);
        self.last_direction = approx.at_end().direction;
        self.last_position = end;
        self.segments.push(PathSegment::Bezier(approx));
        self
    }

    /// Cubic whose first control point lies `c1_offset` along the current
    /// tangent, guaranteeing incoming tangent continuity.
    pub fn bezier_continue(self, c1_offset: f64, c2: Vector2, end: Vector2, segments: u32) -> Self {
        let c1 = self.last_position + self.last_direction * c1_offset;
        self.bezier(c1, c2, end, segments)
    }

    pub fn build(self) -> SegmentedPath {
        SegmentedPath::new(self.start_position, self.start_direction, self.segments)
    }
}

/// Chains easing phases, passing the ending cursor of each phase as the
/// starting cursor of the next so continuity holds across phase boundaries.
#[derive(Clone, Debug)]
pub struct SequencedMoverBuilder {
    last_position: Vector2,
    last_direction: Vector2,
    phases: Vec<SimpleMover>,
}

impl Default for SequencedMoverBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SequencedMoverBuilder {
    pub fn new() -> Self {
        Self {
            last_position: Vector2::ZERO,
            last_direction: Vector2::UNIT_X,
            phases: Vec::new(),
        }
    }

    /// Add one phase: a path built from the current cursor, traversed over
    /// `duration` with `ease`.
    pub fn phase(
        mut self,
        duration: f64,
        ease: Ease,
        build: impl FnOnce(PathBuilder) -> PathBuilder,
    ) -> Self {
        let pb = build(PathBuilder::new(self.last_position, self.last_direction));
        self.last_position = pb.cursor_position();
        self.last_direction = pb.cursor_direction();
        self.phases.push(SimpleMover::new(pb.build(), duration, ease));
        self
    }

    pub fn build(self) -> SequencedMover {
        SequencedMover::new(self.phases)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::mover::Mover;

    #[test]
    fn start_moves_position_but_not_tangent() {
        let pb = PathBuilder::default().start(Vector2::new(2.0, 3.0));
        assert_eq!(pb.cursor_position(), Vector2::new(2.0, 3.0));
        assert_eq!(pb.cursor_direction(), Vector2::UNIT_X);
    }

    #[test]
    fn line_updates_the_cursor() {
        let pb = PathBuilder::default().line(Vector2::new(0.0, 2.0));
        assert_eq!(pb.cursor_position(), Vector2::new(0.0, 2.0));
        assert_eq!(pb.cursor_direction(), Vector2::new(0.0, 1.0));
    }

    #[test]
    fn line_continue_extends_along_the_tangent() {
        let path = PathBuilder::default()
            .line(Vector2::new(1.0, 0.0))
            .line_continue(2.0)
            .build();
        assert_eq!(path.length(), 3.0);
        assert_eq!(path.at_end().position, Vector2::new(3.0, 0.0));
    }

    #[test]
    fn arc_continue_quarter_turn_from_origin() {
        // Cursor at the origin facing +x; ccw quarter turn of radius 1.
        let pb = PathBuilder::default().arc_continue(1.0, FRAC_PI_2);
        let end = pb.cursor_position();
        assert!((end.x - 1.0).abs() < 1e-12);
        assert!((end.y - 1.0).abs() < 1e-12);
        let dir = pb.cursor_direction();
        assert!(dir.x.abs() < 1e-12);
        assert!((dir.y - 1.0).abs() < 1e-12);
        let path = pb.build();
        assert!((path.length() - FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn negative_angle_puts_the_center_on_the_other_side() {
        let pb = PathBuilder::default().arc_continue(1.0, -FRAC_PI_2);
        let end = pb.cursor_position();
        assert!((end.x - 1.0).abs() < 1e-12);
        assert!((end.y + 1.0).abs() < 1e-12);
    }

    #[test]
    fn bezier_continue_is_tangent_continuous() {
        let pb = PathBuilder::default()
            .line(Vector2::new(0.0, 1.0))
            .bezier_continue(1.0, Vector2::new(2.0, 3.0), Vector2::new(3.0, 0.0), 64);
        let path = pb.build();
        // Incoming tangent of the cubic matches the line's outgoing tangent.
        let seam = path.at(1.0 + 1e-9).direction;
        assert!(seam.y > 0.99);
    }

    #[test]
    fn phases_thread_the_cursor_across_boundaries() {
        let mover = SequencedMoverBuilder::new()
            .phase(1.0, Ease::Uniform, |pb| pb.line(Vector2::new(1.0, 0.0)))
            .phase(1.0, Ease::Uniform, |pb| pb.line_continue(1.0))
            .build();
        let before = mover.evaluate(1.0 - 1e-9).position;
        let after = mover.evaluate(1.0 + 1e-9).position;
        assert!((before - after).length() < 1e-6);
        assert_eq!(mover.evaluate(2.0).position, Vector2::new(2.0, 0.0));
    }
}
