/// Camera manager: the camera registry and everything computed from it.
///
/// Owns every camera record, keyed by the host object the camera is
/// attached to. All operations read the current record at call time; nothing
/// is cached across frames.

use std::fmt;
use glam::{Mat4, Vec2, Vec3};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use rustc_hash::FxHashMap;
use crate::config::DisplayReference;
use crate::error::Result;
use crate::host::{ObjectKey, RenderPipeline, WindowSize};
use crate::{engine_bail, engine_debug, engine_err};
use super::camera::{Camera, CameraDesc, ScaleBehavior};
use super::frustum::{is_inside_clip, Frustum};
use super::projection::resolve_projection;
use super::viewport::{resolve_viewport, Viewport};

pub(crate) const SOURCE: &str = "galaxy2d::CameraManager";

pub struct CameraManager {
    display: DisplayReference,
    cameras: FxHashMap<ObjectKey, Camera>,
    /// Angle source for shake ticks
    pub(crate) rng: Box<dyn RngCore + Send>,
    /// Id handed to the next shake sequence (stale tick tokens never match)
    pub(crate) next_shake_sequence: u64,
}

impl fmt::Debug for CameraManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CameraManager")
            .field("display", &self.display)
            .field("cameras", &self.cameras)
            .finish_non_exhaustive()
    }
}

impl CameraManager {
    /// Create an empty manager with an OS-seeded random source
    pub fn new(display: DisplayReference) -> Self {
        Self::with_rng(display, StdRng::from_os_rng())
    }

    /// Create an empty manager with an injected random source
    /// (seeded generators make shake offsets reproducible)
    pub fn with_rng<R: RngCore + Send + 'static>(display: DisplayReference, rng: R) -> Self {
        Self {
            display,
            cameras: FxHashMap::default(),
            rng: Box::new(rng),
            next_shake_sequence: 0,
        }
    }

    pub fn display(&self) -> &DisplayReference {
        &self.display
    }

    // ===== REGISTRY =====

    /// Attach a camera to `object`.
    ///
    /// # Errors
    ///
    /// - `InitializationFailed` if the object already has a camera
    /// - `InvalidParameter` if zoom <= 0 or near >= far
    pub fn register_camera(&mut self, object: ObjectKey, desc: CameraDesc) -> Result<()> {
        if self.cameras.contains_key(&object) {
            engine_bail!(InitializationFailed, SOURCE,
                "Camera already registered for {:?}", object);
        }
        Self::validate_zoom(desc.zoom)?;
        Self::validate_clip_range(desc.near, desc.far)?;

        let viewport = desc.viewport.unwrap_or_else(|| {
            Viewport::new(0.0, 0.0, self.display.width(), self.display.height())
        });
        self.cameras.insert(object, Camera::new(object, &desc, viewport));

        engine_debug!(SOURCE, "Registered camera for {:?} ({:?})", object, desc.behavior);
        Ok(())
    }

    /// Detach and return the camera of `object`.
    ///
    /// A shake in flight is abandoned: its next tick finds no camera and stops.
    pub fn unregister_camera(&mut self, object: ObjectKey) -> Result<Camera> {
        match self.cameras.remove(&object) {
            Some(camera) => {
                engine_debug!(SOURCE, "Unregistered camera for {:?}", object);
                Ok(camera)
            }
            None => Err(Self::not_found(object)),
        }
    }

    pub fn camera(&self, object: ObjectKey) -> Result<&Camera> {
        self.cameras.get(&object).ok_or_else(|| Self::not_found(object))
    }

    pub(crate) fn camera_mut(&mut self, object: ObjectKey) -> Result<&mut Camera> {
        self.cameras.get_mut(&object).ok_or_else(|| Self::not_found(object))
    }

    /// Lookup used by the shake tick handler, which must not log a missing camera as an error
    pub(crate) fn try_camera_mut(&mut self, object: ObjectKey) -> Option<&mut Camera> {
        self.cameras.get_mut(&object)
    }

    pub fn contains_camera(&self, object: ObjectKey) -> bool {
        self.cameras.contains_key(&object)
    }

    pub fn camera_count(&self) -> usize {
        self.cameras.len()
    }

    /// Objects that currently have a camera (arbitrary order)
    pub fn camera_objects(&self) -> Vec<ObjectKey> {
        self.cameras.keys().copied().collect()
    }

    /// Cameras whose active shake moves `target`
    pub(crate) fn cameras_shaking(&self, target: ObjectKey) -> Vec<ObjectKey> {
        self.cameras
            .iter()
            .filter(|(_, camera)| camera.shake.is_some_and(|s| s.target == target))
            .map(|(object, _)| *object)
            .collect()
    }

    fn not_found(object: ObjectKey) -> crate::error::Error {
        engine_err!(CameraNotFound, SOURCE, "No camera registered for {:?}", object)
    }

    fn validate_zoom(zoom: f32) -> Result<()> {
        if !(zoom > 0.0 && zoom.is_finite()) {
            engine_bail!(InvalidParameter, SOURCE, "Camera zoom must be > 0, got {}", zoom);
        }
        Ok(())
    }

    fn validate_clip_range(near: f32, far: f32) -> Result<()> {
        if !(near < far) {
            engine_bail!(InvalidParameter, SOURCE,
                "Camera near plane must be < far plane, got near={} far={}", near, far);
        }
        Ok(())
    }

    // ===== SETTERS =====

    pub fn set_view(&mut self, object: ObjectKey, view: Mat4) -> Result<()> {
        self.camera_mut(object)?.view = view;
        Ok(())
    }

    pub fn set_behavior(&mut self, object: ObjectKey, behavior: ScaleBehavior) -> Result<()> {
        self.camera_mut(object)?.behavior = behavior;
        Ok(())
    }

    pub fn set_zoom(&mut self, object: ObjectKey, zoom: f32) -> Result<()> {
        let camera = self.camera_mut(object)?;
        Self::validate_zoom(zoom)?;
        camera.zoom = zoom;
        Ok(())
    }

    /// Replace the design-space viewport rectangle
    pub fn set_viewport_rect(&mut self, object: ObjectKey, viewport: Viewport) -> Result<()> {
        self.camera_mut(object)?.viewport = viewport;
        Ok(())
    }

    pub fn set_clip_range(&mut self, object: ObjectKey, near: f32, far: f32) -> Result<()> {
        let camera = self.camera_mut(object)?;
        Self::validate_clip_range(near, far)?;
        camera.near = near;
        camera.far = far;
        Ok(())
    }

    // ===== RESOLVERS =====

    /// Window-space rectangle the camera renders into
    pub fn resolve_viewport(&self, object: ObjectKey, window: WindowSize) -> Result<Viewport> {
        let camera = self.camera(object)?;
        Ok(resolve_viewport(&self.display, camera, window))
    }

    /// Orthographic projection for the camera (window size matters for `Expand` only)
    pub fn resolve_projection(&self, object: ObjectKey, window: WindowSize) -> Result<Mat4> {
        let camera = self.camera(object)?;
        Ok(resolve_projection(&self.display, camera, window))
    }

    /// Composed projection × view snapshot
    pub fn frustum(&self, object: ObjectKey, window: WindowSize) -> Result<Frustum> {
        let camera = self.camera(object)?;
        Ok(self.frustum_for(camera, window))
    }

    fn frustum_for(&self, camera: &Camera, window: WindowSize) -> Frustum {
        Frustum::new(resolve_projection(&self.display, camera, window), camera.view)
    }

    /// Push viewport, view and projection to the pipeline and return
    /// projection × view.
    ///
    /// A minimized window yields an empty viewport; the projection stays finite.
    pub fn activate(
        &self,
        object: ObjectKey,
        window: WindowSize,
        pipeline: &mut dyn RenderPipeline,
    ) -> Result<Mat4> {
        let camera = self.camera(object)?;
        let viewport = resolve_viewport(&self.display, camera, window);
        let projection = resolve_projection(&self.display, camera, window);

        pipeline.set_viewport(viewport)?;
        pipeline.set_view(camera.view)?;
        pipeline.set_projection(projection)?;

        Ok(projection * camera.view)
    }

    // ===== COORDINATE TRANSFORMS =====

    /// Convert a window position (pixels, bottom-left origin) to a world
    /// position on the z = 0 plane.
    ///
    /// With `clip_to_visible`, points outside the camera's viewport yield
    /// `Ok(None)`. A minimized window has no screen space: always `Ok(None)`.
    pub fn screen_to_world(
        &self,
        object: ObjectKey,
        window: WindowSize,
        screen: Vec2,
        clip_to_visible: bool,
    ) -> Result<Option<Vec3>> {
        let camera = self.camera(object)?;
        if window.is_minimized() {
            return Ok(None);
        }
        let viewport = resolve_viewport(&self.display, camera, window);

        let clip = (screen - viewport.origin()) / viewport.size() * 2.0 - Vec2::ONE;
        if clip_to_visible && !is_inside_clip(clip) {
            return Ok(None);
        }

        let world = self.frustum_for(camera, window).clip_to_world(clip);
        Ok(Some(Vec3::new(world.x, world.y, 0.0)))
    }

    /// Convert a world position to a window position (pixels, bottom-left origin).
    ///
    /// With `clip_to_visible`, positions the camera does not see yield `Ok(None)`.
    /// A minimized window has no screen space: always `Ok(None)`.
    pub fn world_to_screen(
        &self,
        object: ObjectKey,
        window: WindowSize,
        world: Vec3,
        clip_to_visible: bool,
    ) -> Result<Option<Vec2>> {
        let camera = self.camera(object)?;
        if window.is_minimized() {
            return Ok(None);
        }
        let clip = self.frustum_for(camera, window).world_to_clip(world).truncate();
        if clip_to_visible && !is_inside_clip(clip) {
            return Ok(None);
        }

        let viewport = resolve_viewport(&self.display, camera, window);
        Ok(Some(viewport.origin() + (clip + Vec2::ONE) * 0.5 * viewport.size()))
    }

    /// Conservative visibility test for a world-space rectangle on the z = 0 plane
    pub fn is_rect_visible(&self, object: ObjectKey, window: WindowSize, min: Vec2, max: Vec2) -> Result<bool> {
        let camera = self.camera(object)?;
        Ok(self.frustum_for(camera, window).intersects_rect(min, max))
    }
}

#[cfg(test)]
#[path = "camera_manager_tests.rs"]
mod tests;
