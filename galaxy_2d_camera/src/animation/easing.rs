/// Easing curves for tweens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// No easing
    #[default]
    Linear,
    /// Slow start, fast end
    QuadraticIn,
    /// Fast start, slow end
    QuadraticOut,
    /// Hermite smoothstep: slow at both ends
    SmoothStep,
}

impl Easing {
    /// Evaluate the curve at `t`, clamped to [0, 1]. Returns a value in [0, 1].
    #[inline]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Easing::Linear => t,
            Easing::QuadraticIn => t * t,
            Easing::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            Easing::SmoothStep => t * t * (3.0 - 2.0 * t),
        }
    }
}
