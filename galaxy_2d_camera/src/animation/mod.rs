//! Position animation primitives.
//!
//! `PositionAnimation` describes a tween; `Tweener` is a ready-made
//! `AnimationScheduler` for hosts that do not have their own.

mod easing;
mod tweener;

pub use easing::Easing;
pub use tweener::Tweener;

use glam::Vec3;

/// How a tween plays back over its duration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Playback {
    /// from -> to, ends at `to`
    Once,
    /// from -> to -> from within the duration, ends at `from`
    OncePingPong,
}

/// A single position tween
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionAnimation {
    pub from: Vec3,
    pub to: Vec3,
    /// Total duration in seconds (both legs for ping-pong)
    pub duration: f32,
    pub easing: Easing,
    pub playback: Playback,
}

impl PositionAnimation {
    /// Position at normalized time `t` (clamped to [0, 1])
    pub fn sample(&self, t: f32) -> Vec3 {
        let t = t.clamp(0.0, 1.0);
        let phase = match self.playback {
            Playback::Once => t,
            Playback::OncePingPong => {
                if t <= 0.5 { t * 2.0 } else { 2.0 - t * 2.0 }
            }
        };
        self.from.lerp(self.to, self.easing.evaluate(phase))
    }
}

#[cfg(test)]
#[path = "animation_tests.rs"]
mod tests;
