/// Tweener: minimal frame-driven position animator.
///
/// Implements `AnimationScheduler` for hosts without an animation system.
/// The host calls `update()` once per frame; completed animations are
/// returned as their completion tokens, to be handed back to
/// `CameraManager::on_shake_tick_complete()`.

use crate::camera::ShakeTick;
use crate::host::{AnimationScheduler, ObjectKey, TransformSystem};
use super::PositionAnimation;

#[derive(Debug, Clone)]
struct ActiveTween {
    object: ObjectKey,
    animation: PositionAnimation,
    elapsed: f32,
    on_complete: ShakeTick,
}

/// Frame-driven position animator. At most one position tween per object.
#[derive(Debug, Default)]
pub struct Tweener {
    tweens: Vec<ActiveTween>,
}

impl Tweener {
    pub fn new() -> Self {
        Self { tweens: Vec::new() }
    }

    /// Number of running tweens
    pub fn active_count(&self) -> usize {
        self.tweens.len()
    }

    /// True if a position tween is running on `object`
    pub fn is_animating(&self, object: ObjectKey) -> bool {
        self.tweens.iter().any(|t| t.object == object)
    }

    /// Advance every tween by `dt` seconds and write positions.
    ///
    /// Returns the completion tokens of the tweens that finished this frame,
    /// in start order. Finished tweens are removed before returning.
    pub fn update(&mut self, dt: f32, transforms: &mut dyn TransformSystem) -> Vec<ShakeTick> {
        let mut completed = Vec::new();

        self.tweens.retain_mut(|tween| {
            tween.elapsed += dt;
            let duration = tween.animation.duration;
            let finished = duration <= 0.0 || tween.elapsed >= duration;
            let t = if finished { 1.0 } else { tween.elapsed / duration };

            transforms.set_position(tween.object, tween.animation.sample(t));

            if finished {
                completed.push(tween.on_complete);
            }
            !finished
        });

        completed
    }
}

impl AnimationScheduler for Tweener {
    fn animate_position(&mut self, object: ObjectKey, animation: PositionAnimation, on_complete: ShakeTick) {
        self.tweens.retain(|t| t.object != object);
        self.tweens.push(ActiveTween {
            object,
            animation,
            elapsed: 0.0,
            on_complete,
        });
    }

    fn cancel_position(&mut self, object: ObjectKey) {
        self.tweens.retain(|t| t.object != object);
    }
}
