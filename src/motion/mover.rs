use crate::geometry::path::{Path, SegmentedPath};
use crate::geometry::vec2::Vector2;
use crate::motion::ease::Ease;

/// Motion state at one elapsed time: position, unit travel direction, and
/// instantaneous scalar speed.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MotionSample {
    pub position: Vector2,
    pub direction: Vector2,
    pub speed: f64,
}

impl MotionSample {
    /// Fixed sample used when there is nothing to evaluate.
    fn degenerate() -> Self {
        Self {
            position: Vector2::ZERO,
            direction: Vector2::UNIT_X,
            speed: 0.0,
        }
    }
}

/// A time-evaluable motion. Sampling is stateless and idempotent; elapsed time
/// is always an explicit parameter.
pub trait Mover {
    fn duration(&self) -> f64;

    fn evaluate(&self, elapsed: f64) -> MotionSample;
}

/// One easing phase over one path.
#[derive(Clone, Debug)]
pub struct SimpleMover {
    path: SegmentedPath,
    duration: f64,
    ease: Ease,
}

impl SimpleMover {
    pub fn new(path: SegmentedPath, duration: f64, ease: Ease) -> Self {
        Self {
            path,
            duration,
            ease,
        }
    }

    pub fn path(&self) -> &SegmentedPath {
        &self.path
    }
}

impl Mover for SimpleMover {
    fn duration(&self) -> f64 {
        self.duration
    }

    fn evaluate(&self, elapsed: f64) -> MotionSample {
        // A zero-duration phase collapses to its end state.
        let relative = if self.duration == 0.0 {
            1.0
        } else {
            (elapsed / self.duration).clamp(0.0, 1.0)
        };
        let progress = self.ease.apply(relative);
        let path_length = self.path.length();
        let eval = self.path.at(progress * path_length);
        // Chain rule; the duration division happens exactly once, here.
        let speed = if self.duration == 0.0 {
            0.0
        } else {
            self.ease.derivative(relative) * path_length / self.duration
        };
        MotionSample {
            position: eval.position,
            direction: eval.direction,
            speed,
        }
    }
}

/// Phases sequenced by cumulative duration.
#[derive(Clone, Debug)]
pub struct SequencedMover {
    phases: Vec<SimpleMover>,
    cumulative: Vec<f64>,
    total: f64,
}

impl SequencedMover {
    pub fn new(phases: Vec<SimpleMover>) -> Self {
        let mut cumulative = Vec::with_capacity(phases.len());
        let mut total = 0.0;
        for phase in &phases {
            total += phase.duration();
            cumulative.push(total);
        }
        Self {
            phases,
            cumulative,
            total,
        }
    }

    pub fn phases(&self) -> &[SimpleMover] {
        &self.phases
    }
}

impl Mover for SequencedMover {
    fn duration(&self) -> f64 {
        self.total
    }

    fn evaluate(&self, elapsed: f64) -> MotionSample {
        if self.phases.is_empty() {
            return MotionSample::degenerate();
        }
        let clamped = elapsed.clamp(0.0, self.total);
        // Few phases in practice; a linear scan is enough.
        let mut idx = 0;
        while idx < self.phases.len() - 1 && clamped > self.cumulative[idx] {
            idx += 1;
        }
        let phase_start = if idx == 0 { 0.0 } else { self.cumulative[idx - 1] };
        self.phases[idx].evaluate(clamped - phase_start)
    }
}
