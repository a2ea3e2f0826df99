/// Camera record: the per-object state held by the `CameraManager`.
///
/// A camera computes nothing on its own. The manager resolves viewport,
/// projection and frustum from these fields plus the display reference and
/// the current window size.

use glam::{Mat4, Vec3};
use crate::host::ObjectKey;
use super::shake::ShakeSequence;
use super::viewport::Viewport;

/// How a camera adapts its output when the window does not match the
/// design resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScaleBehavior {
    /// Keep the design aspect ratio, letterbox the excess window area
    #[default]
    Center,
    /// Fill the window and show more (or less) of the world
    Expand,
    /// Fill the window, distorting the design aspect ratio
    Stretch,
}

/// Registration parameters for a camera
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraDesc {
    /// View matrix (usually the inverse of the camera object's world transform)
    pub view: Mat4,
    /// Design-space viewport rectangle. `None` covers the whole design resolution.
    pub viewport: Option<Viewport>,
    pub behavior: ScaleBehavior,
    pub zoom: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraDesc {
    fn default() -> Self {
        Self {
            view: Mat4::IDENTITY,
            viewport: None,
            behavior: ScaleBehavior::Center,
            zoom: 1.0,
            near: -1.0,
            far: 1.0,
        }
    }
}

/// A registered camera.
#[derive(Debug, Clone)]
pub struct Camera {
    pub(crate) object: ObjectKey,
    pub(crate) view: Mat4,
    pub(crate) viewport: Viewport,
    pub(crate) behavior: ScaleBehavior,
    pub(crate) zoom: f32,
    pub(crate) near: f32,
    pub(crate) far: f32,
    pub(crate) shake: Option<ShakeSequence>,
}

impl Camera {
    pub(crate) fn new(object: ObjectKey, desc: &CameraDesc, viewport: Viewport) -> Self {
        Self {
            object,
            view: desc.view,
            viewport,
            behavior: desc.behavior,
            zoom: desc.zoom,
            near: desc.near,
            far: desc.far,
            shake: None,
        }
    }

    // ===== GETTERS =====

    /// Object this camera is attached to
    pub fn object(&self) -> ObjectKey {
        self.object
    }

    pub fn view_matrix(&self) -> &Mat4 {
        &self.view
    }

    /// Design-space viewport rectangle (before window scaling)
    pub fn design_viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn behavior(&self) -> ScaleBehavior {
        self.behavior
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn near(&self) -> f32 {
        self.near
    }

    pub fn far(&self) -> f32 {
        self.far
    }

    /// Position to restore on cancellation. `Some` exactly while a shake is active.
    pub fn shake_origin(&self) -> Option<Vec3> {
        self.shake.as_ref().map(|s| s.origin)
    }

    pub fn is_shaking(&self) -> bool {
        self.shake.is_some()
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
