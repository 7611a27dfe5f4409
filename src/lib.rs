//! Traject compiles a small fluent-builder language describing a 2D path
//! traversed over time into an evaluable motion, and supports round-trip
//! interactive editing of the compiled program:
//!
//! - [`parse`] source text into a [`Program`] statement tree
//! - [`Program::to_sequenced_mover`] for time evaluation
//! - [`Program::to_control_points`] / [`Program::apply_change`] to expose the
//!   program's literals as draggable handles and fold edits back in
//! - [`Program::to_program_string`] for the canonical source form
#![forbid(unsafe_code)]

pub mod foundation;
pub mod geometry;
pub mod motion;
pub mod program;

pub use foundation::error::{TrajectError, TrajectResult};
pub use geometry::bezier::{ApproxBezier, BezierCurve};
pub use geometry::path::{Arc, LineSegment, Path, PathEval, PathSegment, SegmentedPath};
pub use geometry::vec2::Vector2;
pub use motion::builder::{PathBuilder, SequencedMoverBuilder};
pub use motion::ease::Ease;
pub use motion::mover::{MotionSample, Mover, SequencedMover, SimpleMover};
pub use program::ast::{MoverMethod, MoverStatement, PathStatement, Program};
pub use program::control::{ControlPath, ControlPoint};
pub use program::parser::parse;
