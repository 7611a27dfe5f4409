use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::geometry::vec2::Vector2;
use crate::motion::builder::PathBuilder;
use crate::program::ast::{PathStatement, Program};
use crate::program::compile::apply_statement;

/// Structural index of the literal a control point edits:
/// (mover statement, path statement, argument within the statement).
///
/// This is a selector into one `Program` snapshot, not a persistent handle; it
/// is only valid against the program it was derived from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ControlPath {
    pub mover: usize,
    pub path: usize,
    pub argument: usize,
}

impl ControlPath {
    fn new(mover: usize, path: usize, argument: usize) -> Self {
        Self {
            mover,
            path,
            argument,
        }
    }
}

/// An editable geometric handle derived from one AST literal, frozen together
/// with the geometric context needed to invert a later drag.
///
/// A control-point list is a disposable snapshot of one `Program`; regenerate
/// it after every [`Program::apply_change`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum ControlPoint {
    /// An absolute literal point; drags replace it verbatim.
    Free {
        path: ControlPath,
        position: Vector2,
    },
    /// A scalar offset along a fixed tangent; drags project onto the ray and
    /// discard the perpendicular component.
    Ray {
        path: ControlPath,
        from: Vector2,
        direction: Vector2,
        length: f64,
    },
    /// A signed angle literal, rendered as a point on a circle. Drags apply the
    /// shortest-turn delta from the old absolute angle so multi-turn sweeps
    /// never snap across a 2-pi wrap.
    OnArc {
        path: ControlPath,
        center: Vector2,
        radius: f64,
        base_angle: f64,
        angle: f64,
        /// Clamp edits away from crossing zero, preserving the sweep direction
        /// and with it tangent continuity into the next segment.
        keep_positivity: bool,
    },
    /// A radius literal of a tangent-continuation arc; the handle sits at the
    /// implied center. Dragging across the tangent line flips the paired sweep
    /// angle's sign so the endpoint tangent stays consistent.
    Radius {
        path: ControlPath,
        start: Vector2,
        direction: Vector2,
        counter_clockwise: bool,
        radius: f64,
    },
}

impl ControlPoint {
    pub fn control_path(&self) -> ControlPath {
        match *self {
            Self::Free { path, .. }
            | Self::Ray { path, .. }
            | Self::OnArc { path, .. }
            | Self::Radius { path, .. } => path,
        }
    }

    /// Forward projection: where this handle sits in world space.
    pub fn position(&self) -> Vector2 {
        match *self {
            Self::Free { position, .. } => position,
            Self::Ray {
                from,
                direction,
                length,
                ..
            } => from + direction * length,
            Self::OnArc {
                center,
                radius,
                base_angle,
                angle,
                ..
            } => {
                let (sin_a, cos_a) = (base_angle + angle).sin_cos();
                center + Vector2::new(cos_a, sin_a) * radius
            }
            Self::Radius {
                start,
                direction,
                counter_clockwise,
                radius,
                ..
            } => {
                let normal = direction.normalized().perp();
                if counter_clockwise {
                    start + normal * radius
                } else {
                    start + -normal * radius
                }
            }
        }
    }
}

/// Center of an `ArcContinue` arc: perpendicular offset from the cursor, on
/// the side chosen by the sweep sign. Mirrors `PathBuilder::arc_continue`.
fn continue_center(position: Vector2, direction: Vector2, radius: f64, angle: f64) -> Vector2 {
    if angle > 0.0 {
        position + direction.perp() * radius
    } else {
        position + -direction.perp() * radius
    }
}

/// Shortest-turn delta from `old` to `new`, wrapped into `(-pi, pi]`.
fn shortest_turn(new: f64, old: f64) -> f64 {
    let mut delta = (new - old) % TAU;
    if delta > PI {
        delta -= TAU;
    }
    if delta < -PI {
        delta += TAU;
    }
    delta
}

/// New angle literal for an on-arc drag: shortest-turn delta from the old
/// absolute angle, optionally clamped away from a sign flip.
fn dragged_angle(
    new_position: Vector2,
    center: Vector2,
    base_angle: f64,
    angle: f64,
    keep_positivity: bool,
) -> f64 {
    let new_absolute = (new_position - center).angle();
    let delta = shortest_turn(new_absolute, base_angle + angle);
    let mut next = angle + delta;
    if keep_positivity {
        if angle > 0.0 && next < 0.0 {
            next = 0.01;
        } else if angle < 0.0 && next > 0.0 {
            next = -0.01;
        }
    }
    next
}

/// The replacement statement for one drag, or `None` when the control point
/// does not address a literal the statement owns (the edit is then absorbed
/// as a no-op).
fn edited_statement(
    statement: &PathStatement,
    control_point: &ControlPoint,
    argument: usize,
    new_position: Vector2,
) -> Option<PathStatement> {
    match (control_point, statement) {
        (ControlPoint::Free { .. }, PathStatement::Start { .. }) => Some(PathStatement::Start {
            start: new_position,
        }),
        (ControlPoint::Free { .. }, PathStatement::Line { .. }) => {
            Some(PathStatement::Line { end: new_position })
        }
        (ControlPoint::Free { .. }, &PathStatement::Arc { angle, .. }) => Some(PathStatement::Arc {
            center: new_position,
            angle,
        }),
        (ControlPoint::Free { .. }, &PathStatement::Bezier {
            c1,
            c2,
            end,
            segments,
        }) => match argument {
            0 => Some(PathStatement::Bezier {
                c1: new_position,
                c2,
                end,
                segments,
            }),
            1 => Some(PathStatement::Bezier {
                c1,
                c2: new_position,
                end,
                segments,
            }),
            2 => Some(PathStatement::Bezier {
                c1,
                c2,
                end: new_position,
                segments,
            }),
            _ => None,
        },
        (ControlPoint::Free { .. }, &PathStatement::BezierContinue {
            c1_offset,
            c2,
            end,
            segments,
        }) => match argument {
            1 => Some(PathStatement::BezierContinue {
                c1_offset,
                c2: new_position,
                end,
                segments,
            }),
            2 => Some(PathStatement::BezierContinue {
                c1_offset,
                c2,
                end: new_position,
                segments,
            }),
            _ => None,
        },
        (&ControlPoint::Ray {
            from, direction, ..
        }, statement) => {
            // Project onto the ray; the perpendicular component is discarded.
            let length = (new_position - from).dot(direction.normalized());
            match *statement {
                PathStatement::LineContinue { .. } => Some(PathStatement::LineContinue { length }),
                PathStatement::BezierContinue {
                    c2, end, segments, ..
                } => Some(PathStatement::BezierContinue {
                    c1_offset: length,
                    c2,
                    end,
                    segments,
                }),
                _ => None,
            }
        }
        (&ControlPoint::OnArc {
            center,
            base_angle,
            angle,
            keep_positivity,
            ..
        }, statement) => {
            let next = dragged_angle(new_position, center, base_angle, angle, keep_positivity);
            match *statement {
                PathStatement::Arc { center, .. } => Some(PathStatement::Arc {
                    center,
                    angle: next,
                }),
                PathStatement::ArcContinue { radius, .. } => Some(PathStatement::ArcContinue {
                    radius,
                    angle: next,
                }),
                _ => None,
            }
        }
        (&ControlPoint::Radius {
            start,
            direction,
            counter_clockwise,
            ..
        }, &PathStatement::ArcContinue { angle, .. }) => {
            let normal = direction.rotate(FRAC_PI_2).normalized();
            let mut radius = (new_position - start).dot(normal);
            let mut now_counter_clockwise = true;
            if radius < 0.0 {
                radius = -radius;
                now_counter_clockwise = false;
            }
            // Crossing the tangent line flips the sweep sign with the radius.
            let angle = if now_counter_clockwise != counter_clockwise {
                -angle
            } else {
                angle
            };
            Some(PathStatement::ArcContinue { radius, angle })
        }
        _ => None,
    }
}

impl Program {
    /// Derive the editable handles of every statement, replaying the same
    /// cursor rule the builder uses (including threading across movers).
    pub fn to_control_points(&self) -> Vec<ControlPoint> {
        let mut points = Vec::new();
        let mut cursor_position = Vector2::ZERO;
        let mut cursor_direction = Vector2::UNIT_X;
        for (mover_index, mover) in self.movers.iter().enumerate() {
            let mut pb = PathBuilder::new(cursor_position, cursor_direction);
            for (path_index, statement) in mover.paths.iter().enumerate() {
                let before_position = pb.cursor_position();
                let before_direction = pb.cursor_direction();
                pb = apply_statement(pb, statement);
                let at = |argument| ControlPath::new(mover_index, path_index, argument);
                match *statement {
                    PathStatement::Start { .. } => points.push(ControlPoint::Free {
                        path: at(0),
                        position: pb.cursor_position(),
                    }),
                    PathStatement::Line { .. } => points.push(ControlPoint::Free {
                        path: at(0),
                        position: pb.cursor_position(),
                    }),
                    PathStatement::LineContinue { length } => points.push(ControlPoint::Ray {
                        path: at(0),
                        from: before_position,
                        direction: before_direction,
                        length,
                    }),
                    PathStatement::Arc { center, angle } => {
                        let to_cursor = before_position - center;
                        points.push(ControlPoint::Free {
                            path: at(0),
                            position: center,
                        });
                        points.push(ControlPoint::OnArc {
                            path: at(1),
                            center,
                            radius: to_cursor.length(),
                            base_angle: to_cursor.angle(),
                            angle,
                            keep_positivity: false,
                        });
                    }
                    PathStatement::ArcContinue { radius, angle } => {
                        let center =
                            continue_center(before_position, before_direction, radius, angle);
                        points.push(ControlPoint::Radius {
                            path: at(0),
                            start: before_position,
                            direction: before_direction,
                            counter_clockwise: angle > 0.0,
                            radius,
                        });
                        points.push(ControlPoint::OnArc {
                            path: at(1),
                            center,
                            radius,
                            base_angle: (before_position - center).angle(),
                            angle,
                            keep_positivity: true,
                        });
                    }
                    PathStatement::Bezier { c1, c2, end, .. } => {
                        points.push(ControlPoint::Free {
                            path: at(0),
                            position: c1,
                        });
                        points.push(ControlPoint::Free {
                            path: at(1),
                            position: c2,
                        });
                        points.push(ControlPoint::Free {
                            path: at(2),
                            position: end,
                        });
                    }
                    PathStatement::BezierContinue {
                        c1_offset, c2, end, ..
                    } => {
                        points.push(ControlPoint::Ray {
                            path: at(0),
                            from: before_position,
                            direction: before_direction,
                            length: c1_offset,
                        });
                        points.push(ControlPoint::Free {
                            path: at(1),
                            position: c2,
                        });
                        points.push(ControlPoint::Free {
                            path: at(2),
                            position: end,
                        });
                    }
                }
            }
            cursor_position = pb.cursor_position();
            cursor_direction = pb.cursor_direction();
        }
        points
    }

    /// Apply a dragged handle back onto the literal it addresses, returning a
    /// new program with exactly that one statement replaced.
    ///
    /// Pure: the receiver is untouched. A control point that does not match
    /// any literal the addressed statement owns is absorbed as a no-op.
    pub fn apply_change(&self, control_point: &ControlPoint, new_position: Vector2) -> Program {
        let mut next = self.clone();
        let selector = control_point.control_path();
        let Some(mover) = next.movers.get_mut(selector.mover) else {
            return next;
        };
        let Some(statement) = mover.paths.get_mut(selector.path) else {
            return next;
        };
        if let Some(edited) =
            edited_statement(statement, control_point, selector.argument, new_position)
        {
            *statement = edited;
        }
        next
    }
}
