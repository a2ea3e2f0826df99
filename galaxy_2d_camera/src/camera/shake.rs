/// Shake Controller: procedural position perturbation of a camera's target.
///
/// Per camera the controller is either idle or shaking. A shake is a
/// sequence of ticks; each tick tweens the target from its recorded origin to
/// a random point at `radius` distance and back, then scales duration and
/// radius for the next tick. The host's `AnimationScheduler` runs the tweens
/// and hands each `ShakeTick` token back through `on_shake_tick_complete()`.
///
/// Natural completion leaves the target wherever the last tick left it
/// (back at the origin for ping-pong tweens); only `cancel_shake()` snaps it
/// back explicitly.

use std::f32::consts::TAU;
use glam::Vec3;
use rand::Rng;
use crate::animation::{Easing, Playback, PositionAnimation};
use crate::error::Result;
use crate::host::{AnimationScheduler, ObjectKey, TransformSystem};
use crate::{engine_bail, engine_debug, engine_trace, engine_warn};
use super::camera_manager::{CameraManager, SOURCE};

/// Which object a shake moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShakeAnchor {
    /// The camera's own object
    #[default]
    Object,
    /// The parent of the camera's object
    Parent,
}

/// Shake parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShakeParams {
    /// Number of ticks (>= 1)
    pub repeat_count: u32,
    /// Duration of the first tick in seconds (out and back)
    pub duration: f32,
    /// Offset distance of the first tick
    pub radius: f32,
    /// Applied to the duration after every tick (1 = constant)
    pub duration_scalar: f32,
    /// Applied to the radius after every tick (1 = constant, < 1 = decay)
    pub radius_scalar: f32,
}

impl ShakeParams {
    /// Constant-strength shake
    pub fn new(repeat_count: u32, duration: f32, radius: f32) -> Self {
        Self {
            repeat_count,
            duration,
            radius,
            duration_scalar: 1.0,
            radius_scalar: 1.0,
        }
    }

    pub fn with_duration_scalar(mut self, scalar: f32) -> Self {
        self.duration_scalar = scalar;
        self
    }

    pub fn with_radius_scalar(mut self, scalar: f32) -> Self {
        self.radius_scalar = scalar;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.repeat_count == 0 {
            engine_bail!(InvalidParameter, SOURCE, "Shake repeat_count must be >= 1");
        }
        let values = [
            ("duration", self.duration),
            ("radius", self.radius),
            ("duration_scalar", self.duration_scalar),
            ("radius_scalar", self.radius_scalar),
        ];
        for (name, value) in values {
            if !(value.is_finite() && value >= 0.0) {
                engine_bail!(InvalidParameter, SOURCE,
                    "Shake {} must be finite and >= 0, got {}", name, value);
            }
        }
        Ok(())
    }
}

/// Completion token of one shake tick.
///
/// Handed to the `AnimationScheduler` with each tween and returned to
/// `CameraManager::on_shake_tick_complete()` when that tween finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShakeTick {
    pub(crate) camera: ObjectKey,
    pub(crate) sequence: u64,
}

impl ShakeTick {
    /// Camera whose shake produced this tick
    pub fn camera(&self) -> ObjectKey {
        self.camera
    }
}

/// State of an active shake sequence
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ShakeSequence {
    pub(crate) id: u64,
    pub(crate) target: ObjectKey,
    pub(crate) origin: Vec3,
    pub(crate) completed: u32,
    pub(crate) repeat_count: u32,
    pub(crate) duration: f32,
    pub(crate) radius: f32,
    pub(crate) duration_scalar: f32,
    pub(crate) radius_scalar: f32,
}

impl CameraManager {
    /// Start shaking the camera's object (or its parent).
    ///
    /// An active shake on the same camera is cancelled first, restoring its
    /// origin, so calling `shake()` repeatedly restarts cleanly. A shake of
    /// another camera moving the same target is cancelled too: one target
    /// carries at most one sequence.
    ///
    /// # Errors
    ///
    /// - `CameraNotFound` if `object` has no camera
    /// - `InvalidParameter` if the parameters are out of range, or the
    ///   anchor object has no position (or no parent for `ShakeAnchor::Parent`)
    ///
    /// On error the running shake, if any, is left untouched.
    pub fn shake(
        &mut self,
        object: ObjectKey,
        anchor: ShakeAnchor,
        params: ShakeParams,
        transforms: &mut dyn TransformSystem,
        scheduler: &mut dyn AnimationScheduler,
    ) -> Result<()> {
        params.validate()?;
        self.camera(object)?;

        let target = Self::shake_target(object, anchor, transforms)?;
        if transforms.position(target).is_none() {
            engine_bail!(InvalidParameter, SOURCE, "Shake target {:?} has no position", target);
        }

        self.stop_shake(object, transforms, scheduler);
        for other in self.cameras_shaking(target) {
            engine_debug!(SOURCE, "Shake of {:?} by camera {:?} superseded by camera {:?}",
                target, other, object);
            self.stop_shake(other, transforms, scheduler);
        }

        // Origin must be read after the restores above
        let Some(origin) = transforms.position(target) else {
            engine_bail!(InvalidParameter, SOURCE, "Shake target {:?} has no position", target);
        };

        let id = self.next_shake_sequence;
        self.next_shake_sequence += 1;

        self.camera_mut(object)?.shake = Some(ShakeSequence {
            id,
            target,
            origin,
            completed: 0,
            repeat_count: params.repeat_count,
            duration: params.duration,
            radius: params.radius,
            duration_scalar: params.duration_scalar,
            radius_scalar: params.radius_scalar,
        });

        engine_debug!(SOURCE, "Shake #{} started on {:?} ({} ticks, radius {})",
            id, target, params.repeat_count, params.radius);

        self.start_shake_tick(object, scheduler);
        Ok(())
    }

    /// Stop the camera's shake and put the target back at its origin.
    ///
    /// No-op if the camera is not shaking. The sequence always restores the
    /// target it recorded at start; an `anchor` that now resolves elsewhere
    /// is reported as a warning.
    pub fn cancel_shake(
        &mut self,
        object: ObjectKey,
        anchor: ShakeAnchor,
        transforms: &mut dyn TransformSystem,
        scheduler: &mut dyn AnimationScheduler,
    ) -> Result<()> {
        let Some(target) = self.camera(object)?.shake.map(|s| s.target) else {
            return Ok(());
        };

        let anchored = match anchor {
            ShakeAnchor::Object => Some(object),
            ShakeAnchor::Parent => transforms.parent(object),
        };
        if anchored != Some(target) {
            engine_warn!(SOURCE, "cancel_shake anchor {:?} does not match shake target {:?}",
                anchor, target);
        }

        self.stop_shake(object, transforms, scheduler);
        Ok(())
    }

    /// Clear the camera's sequence, stop its tween and restore the recorded
    /// target. No-op for idle or unregistered cameras.
    fn stop_shake(
        &mut self,
        object: ObjectKey,
        transforms: &mut dyn TransformSystem,
        scheduler: &mut dyn AnimationScheduler,
    ) {
        let Some(sequence) = self.try_camera_mut(object).and_then(|c| c.shake.take()) else {
            return;
        };

        scheduler.cancel_position(sequence.target);
        transforms.set_position(sequence.target, sequence.origin);

        engine_debug!(SOURCE, "Shake #{} cancelled after {}/{} ticks",
            sequence.id, sequence.completed, sequence.repeat_count);
    }

    /// Advance a shake after one of its tweens finished.
    ///
    /// Silently ignores ticks whose camera was unregistered, whose shake was
    /// cancelled, or that belong to a superseded sequence.
    pub fn on_shake_tick_complete(&mut self, tick: ShakeTick, scheduler: &mut dyn AnimationScheduler) {
        let Some(camera) = self.try_camera_mut(tick.camera) else {
            engine_trace!(SOURCE, "Shake tick for unregistered camera {:?} abandoned", tick.camera);
            return;
        };
        let Some(sequence) = camera.shake.as_mut().filter(|s| s.id == tick.sequence) else {
            engine_trace!(SOURCE, "Stale shake tick #{} ignored", tick.sequence);
            return;
        };

        sequence.completed += 1;
        sequence.duration *= sequence.duration_scalar;
        sequence.radius *= sequence.radius_scalar;

        if sequence.completed >= sequence.repeat_count {
            let id = sequence.id;
            camera.shake = None;
            engine_debug!(SOURCE, "Shake #{} finished", id);
            return;
        }

        self.start_shake_tick(tick.camera, scheduler);
    }

    fn shake_target(
        object: ObjectKey,
        anchor: ShakeAnchor,
        transforms: &dyn TransformSystem,
    ) -> Result<ObjectKey> {
        match anchor {
            ShakeAnchor::Object => Ok(object),
            ShakeAnchor::Parent => match transforms.parent(object) {
                Some(parent) => Ok(parent),
                None => engine_bail!(InvalidParameter, SOURCE,
                    "Camera object {:?} has no parent to shake", object),
            },
        }
    }

    fn start_shake_tick(&mut self, object: ObjectKey, scheduler: &mut dyn AnimationScheduler) {
        let Some(sequence) = self.try_camera_mut(object).and_then(|c| c.shake) else {
            return;
        };

        let angle: f32 = self.rng.random_range(0.0..TAU);
        let offset = Vec3::new(angle.cos(), angle.sin(), 0.0) * sequence.radius;

        engine_trace!(SOURCE, "Shake #{} tick {} offset ({:.2}, {:.2})",
            sequence.id, sequence.completed + 1, offset.x, offset.y);

        scheduler.animate_position(
            sequence.target,
            PositionAnimation {
                from: sequence.origin,
                to: sequence.origin + offset,
                duration: sequence.duration,
                easing: Easing::Linear,
                playback: Playback::OncePingPong,
            },
            ShakeTick {
                camera: object,
                sequence: sequence.id,
            },
        );
    }
}

#[cfg(test)]
#[path = "shake_tests.rs"]
mod tests;
