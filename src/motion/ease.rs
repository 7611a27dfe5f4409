use std::f64::consts::FRAC_PI_2;

/// Easing curve family: monotonic maps from normalized time to normalized
/// path progress, each paired with its first derivative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    Uniform,
    Sine,
    Cosine,
    SmoothStep,
    /// Functional inverse of [`Ease::SmoothStep`]: `0.5 - sin(asin(1 - 2t) / 3)`,
    /// so `SmoothStep.apply(InverseSmoothStep.apply(t)) == t`.
    InverseSmoothStep,
}

impl Ease {
    /// Progress at normalized time `t`; `t` is clamped to `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Uniform => t,
            Self::Sine => (t * FRAC_PI_2).sin(),
            Self::Cosine => 1.0 - (t * FRAC_PI_2).cos(),
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::InverseSmoothStep => 0.5 - ((1.0 - 2.0 * t).asin() / 3.0).sin(),
        }
    }

    /// First derivative at normalized time `t`; `t` is clamped to `[0, 1]`.
    ///
    /// InverseSmoothStep has vertical tangents at the endpoints; evaluating the
    /// denominator through `cos(asin(..))` keeps it nonzero in f64, so the
    /// result there is very large but finite.
    pub fn derivative(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Uniform => 1.0,
            Self::Sine => FRAC_PI_2 * (t * FRAC_PI_2).cos(),
            Self::Cosine => FRAC_PI_2 * (t * FRAC_PI_2).sin(),
            Self::SmoothStep => 6.0 * t * (1.0 - t),
            Self::InverseSmoothStep => {
                let theta = (1.0 - 2.0 * t).asin();
                (2.0 / 3.0) * (theta / 3.0).cos() / theta.cos()
            }
        }
    }
}
