//! Camera module: registry, viewport/projection resolution, coordinate
//! conversion and camera shake.
//!
//! Cameras are attached to host objects and stored in a `CameraManager`
//! owned by the caller. Window size, render pipeline, transforms and
//! animation are host collaborators passed in per call.

mod camera;
mod camera_manager;
mod frustum;
mod projection;
mod shake;
mod viewport;

pub use camera::{Camera, CameraDesc, ScaleBehavior};
pub use camera_manager::CameraManager;
pub use frustum::{
    Frustum, is_inside_clip,
    PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP,
};
pub use shake::{ShakeAnchor, ShakeParams, ShakeTick};
pub use viewport::Viewport;
