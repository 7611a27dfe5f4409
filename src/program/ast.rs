use crate::geometry::vec2::Vector2;
use crate::motion::ease::Ease;

/// One path-building call, carrying only literal geometric arguments.
///
/// These literals are the exact values a control-point edit rewrites, so the
/// tree stores what the source text said, not derived geometry. An `Arc`
/// radius, for example, is derived from cursor and center at build time; only
/// `ArcContinue` owns a radius literal.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum PathStatement {
    Start {
        start: Vector2,
    },
    Line {
        end: Vector2,
    },
    LineContinue {
        length: f64,
    },
    Arc {
        center: Vector2,
        angle: f64,
    },
    ArcContinue {
        radius: f64,
        angle: f64,
    },
    Bezier {
        c1: Vector2,
        c2: Vector2,
        end: Vector2,
        segments: u32,
    },
    BezierContinue {
        c1_offset: f64,
        c2: Vector2,
        end: Vector2,
        segments: u32,
    },
}

/// The easing method named by a mover call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum MoverMethod {
    Uniform,
    Sine,
    Cosine,
    SmoothStep,
    InverseSmoothStep,
    /// Parses like `Uniform`; semantically a pause over its (typically empty)
    /// path, holding position for the duration.
    Wait,
}

impl MoverMethod {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Uniform" => Some(Self::Uniform),
            "Sine" => Some(Self::Sine),
            "Cosine" => Some(Self::Cosine),
            "SmoothStep" => Some(Self::SmoothStep),
            "InverseSmoothStep" => Some(Self::InverseSmoothStep),
            "Wait" => Some(Self::Wait),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Uniform => "Uniform",
            Self::Sine => "Sine",
            Self::Cosine => "Cosine",
            Self::SmoothStep => "SmoothStep",
            Self::InverseSmoothStep => "InverseSmoothStep",
            Self::Wait => "Wait",
        }
    }

    /// Easing curve used when the phase is compiled. `Wait` runs uniform; with
    /// no path segments it simply holds position.
    pub fn ease(self) -> Ease {
        match self {
            Self::Uniform | Self::Wait => Ease::Uniform,
            Self::Sine => Ease::Sine,
            Self::Cosine => Ease::Cosine,
            Self::SmoothStep => Ease::SmoothStep,
            Self::InverseSmoothStep => Ease::InverseSmoothStep,
        }
    }
}

/// One easing phase: method, duration, and the path calls inside it.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MoverStatement {
    pub method: MoverMethod,
    pub duration: f64,
    pub paths: Vec<PathStatement>,
}

/// The program root: an ordered sequence of mover statements.
///
/// A `Program` is a pure value. Every edit produces a new `Program`; nothing
/// is shared between two instances that differ.
#[derive(Clone, Debug, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct Program {
    pub movers: Vec<MoverStatement>,
}

impl Program {
    pub fn new(movers: Vec<MoverStatement>) -> Self {
        Self { movers }
    }
}
