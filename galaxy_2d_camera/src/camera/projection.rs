/// Projection Resolver: orthographic projection per scale behavior.

use glam::Mat4;
use crate::config::DisplayReference;
use crate::host::WindowSize;
use super::camera::{Camera, ScaleBehavior};

/// Half extents (right, top) of the visible world area, in world units.
///
/// `Center` and `Stretch` always show the design area; `Stretch` gets its
/// distortion from the viewport alone. `Expand` follows the window size.
pub(crate) fn half_extents(display: &DisplayReference, camera: &Camera, window: WindowSize) -> (f32, f32) {
    match camera.behavior {
        ScaleBehavior::Center | ScaleBehavior::Stretch => (
            display.width() / 2.0 / camera.zoom,
            display.height() / 2.0 / camera.zoom,
        ),
        // Clamped to one pixel so a minimized window keeps a finite projection
        ScaleBehavior::Expand => (
            window.width.max(1) as f32 / 2.0 / camera.zoom,
            window.height.max(1) as f32 / 2.0 / camera.zoom,
        ),
    }
}

/// Orthographic projection over `(-right, right, -top, top, near, far)`,
/// OpenGL clip conventions.
pub(crate) fn resolve_projection(display: &DisplayReference, camera: &Camera, window: WindowSize) -> Mat4 {
    let (right, top) = half_extents(display, camera, window);
    Mat4::orthographic_rh_gl(-right, right, -top, top, camera.near, camera.far)
}

#[cfg(test)]
#[path = "projection_tests.rs"]
mod tests;
