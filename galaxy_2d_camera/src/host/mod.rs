//! Host collaborator seams.
//!
//! The camera subsystem never owns a window, a GPU, a scene graph or an
//! animation clock. It talks to the host through the traits below; hosts
//! (and tests) provide the implementations.

mod window;

#[cfg(test)]
pub(crate) mod mock_host;

pub use window::WindowSize;

use glam::{Mat4, Vec3};
use slotmap::new_key_type;
use crate::error::Result;
use crate::animation::PositionAnimation;
use crate::camera::{ShakeTick, Viewport};

new_key_type! {
    /// Opaque identity of a host object (game object, scene node, ...).
    ///
    /// Cameras are attached to objects and keyed by this identity.
    pub struct ObjectKey;
}

/// Rendering pipeline sink, fed by `CameraManager::activate()`.
pub trait RenderPipeline {
    /// Set the screen-space rectangle to render into
    fn set_viewport(&mut self, viewport: Viewport) -> Result<()>;

    /// Set the view matrix
    fn set_view(&mut self, view: Mat4) -> Result<()>;

    /// Set the projection matrix
    fn set_projection(&mut self, projection: Mat4) -> Result<()>;
}

/// Host transform system: object positions and hierarchy.
pub trait TransformSystem {
    /// World position of an object, or None if the object does not exist
    fn position(&self, object: ObjectKey) -> Option<Vec3>;

    /// Move an object
    fn set_position(&mut self, object: ObjectKey, position: Vec3);

    /// Parent of an object in the hierarchy, if any
    fn parent(&self, object: ObjectKey) -> Option<ObjectKey>;
}

/// Host animation facility for position tweens.
///
/// When an animation started with `animate_position` finishes, the host hands
/// its `ShakeTick` back to `CameraManager::on_shake_tick_complete()`.
/// A cancelled animation must never report completion.
pub trait AnimationScheduler {
    /// Start animating the position of `object`, replacing any running
    /// position animation on it
    fn animate_position(&mut self, object: ObjectKey, animation: PositionAnimation, on_complete: ShakeTick);

    /// Stop every position animation running on `object`
    fn cancel_position(&mut self, object: ObjectKey);
}
