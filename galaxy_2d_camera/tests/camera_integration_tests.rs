//! Integration tests for the camera subsystem
//!
//! A minimal host (flat scene, recording pipeline, built-in Tweener) drives
//! the public API through a few frames: configuration, activation, pointer
//! picking, culling and shake.
//!
//! Run with: cargo test --test camera_integration_tests

use galaxy_2d_camera::galaxy2d::{CameraManager, Error, Result};
use galaxy_2d_camera::galaxy2d::animation::Tweener;
use galaxy_2d_camera::galaxy2d::camera::{CameraDesc, ScaleBehavior, ShakeAnchor, ShakeParams, Viewport};
use galaxy_2d_camera::galaxy2d::config::{DisplayConfig, DisplayReference};
use galaxy_2d_camera::galaxy2d::host::{ObjectKey, RenderPipeline, TransformSystem, WindowSize};
use galaxy_2d_camera::glam::{Mat4, Vec2, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;
use slotmap::SlotMap;

// ============================================================================
// TEST HOST
// ============================================================================

struct Node {
    position: Vec3,
    parent: Option<ObjectKey>,
}

#[derive(Default)]
struct Scene {
    nodes: SlotMap<ObjectKey, Node>,
}

impl Scene {
    fn spawn(&mut self, position: Vec3, parent: Option<ObjectKey>) -> ObjectKey {
        self.nodes.insert(Node { position, parent })
    }

    /// World position, accumulated through the parent chain
    fn world_position(&self, object: ObjectKey) -> Vec3 {
        let node = &self.nodes[object];
        match node.parent {
            Some(parent) => self.world_position(parent) + node.position,
            None => node.position,
        }
    }
}

impl TransformSystem for Scene {
    fn position(&self, object: ObjectKey) -> Option<Vec3> {
        self.nodes.get(object).map(|n| n.position)
    }

    fn set_position(&mut self, object: ObjectKey, position: Vec3) {
        if let Some(node) = self.nodes.get_mut(object) {
            node.position = position;
        }
    }

    fn parent(&self, object: ObjectKey) -> Option<ObjectKey> {
        self.nodes.get(object).and_then(|n| n.parent)
    }
}

#[derive(Default)]
struct RecordingPipeline {
    frames: Vec<(Viewport, Mat4, Mat4)>,
    pending_viewport: Option<Viewport>,
    pending_view: Option<Mat4>,
}

impl RenderPipeline for RecordingPipeline {
    fn set_viewport(&mut self, viewport: Viewport) -> Result<()> {
        self.pending_viewport = Some(viewport);
        Ok(())
    }

    fn set_view(&mut self, view: Mat4) -> Result<()> {
        self.pending_view = Some(view);
        Ok(())
    }

    fn set_projection(&mut self, projection: Mat4) -> Result<()> {
        let viewport = self.pending_viewport.take().unwrap();
        let view = self.pending_view.take().unwrap();
        self.frames.push((viewport, view, projection));
        Ok(())
    }
}

const PROJECT_TOML: &str = r#"
[display]
width = 1280
height = 720
"#;

fn display() -> DisplayReference {
    let config = DisplayConfig::from_toml_str(PROJECT_TOML).unwrap();
    DisplayReference::new(&config).unwrap()
}

/// Host-side camera follow: the view tracks the camera object's world position
fn sync_view(cameras: &mut CameraManager, scene: &Scene, camera: ObjectKey) {
    let eye = scene.world_position(camera);
    cameras
        .set_view(camera, Mat4::from_translation(Vec3::new(-eye.x, -eye.y, 0.0)))
        .unwrap();
}

// ============================================================================
// FRAME LOOP
// ============================================================================

#[test]
fn test_integration_activate_and_pick() {
    let mut scene = Scene::default();
    let mut cameras = CameraManager::new(display());
    let camera = scene.spawn(Vec3::new(200.0, 100.0, 0.0), None);
    cameras.register_camera(camera, CameraDesc::default()).unwrap();
    sync_view(&mut cameras, &scene, camera);

    let mut pipeline = RecordingPipeline::default();
    let window = WindowSize::new(1920, 900);
    let view_projection = cameras.activate(camera, window, &mut pipeline).unwrap();

    let (viewport, view, projection) = pipeline.frames[0];
    assert_eq!(viewport, Viewport::new(160.0, 0.0, 1600.0, 900.0));
    assert_eq!(view_projection, projection * view);

    // Click in the middle of the window hits the camera center
    let picked = cameras
        .screen_to_world(camera, window, Vec2::new(960.0, 450.0), true)
        .unwrap()
        .unwrap();
    assert!((picked - Vec3::new(200.0, 100.0, 0.0)).length() < 1e-3);

    // Click on the letterbox bar hits nothing
    assert_eq!(cameras.screen_to_world(camera, window, Vec2::new(50.0, 450.0), true).unwrap(), None);

    // And the camera center projects back onto the middle of the window
    let screen = cameras
        .world_to_screen(camera, window, Vec3::new(200.0, 100.0, 0.0), true)
        .unwrap()
        .unwrap();
    assert!((screen - Vec2::new(960.0, 450.0)).length() < 1e-3);
}

#[test]
fn test_integration_window_resize_between_frames() {
    let mut scene = Scene::default();
    let mut cameras = CameraManager::new(display());
    let camera = scene.spawn(Vec3::ZERO, None);
    cameras
        .register_camera(camera, CameraDesc { behavior: ScaleBehavior::Expand, ..Default::default() })
        .unwrap();

    let mut pipeline = RecordingPipeline::default();
    for (w, h) in [(1280, 720), (1920, 1080), (800, 800)] {
        cameras.activate(camera, WindowSize::new(w, h), &mut pipeline).unwrap();
    }

    let viewports: Vec<Viewport> = pipeline.frames.iter().map(|f| f.0).collect();
    assert_eq!(viewports, vec![
        Viewport::new(0.0, 0.0, 1280.0, 720.0),
        Viewport::new(0.0, 0.0, 1920.0, 1080.0),
        Viewport::new(0.0, 0.0, 800.0, 800.0),
    ]);

    // Expand shows more world in a bigger window
    let first = pipeline.frames[0].2;
    let second = pipeline.frames[1].2;
    assert!(second.x_axis.x < first.x_axis.x);
}

#[test]
fn test_integration_split_screen() {
    let mut scene = Scene::default();
    let mut cameras = CameraManager::new(display());
    let left = scene.spawn(Vec3::new(-1000.0, 0.0, 0.0), None);
    let right = scene.spawn(Vec3::new(1000.0, 0.0, 0.0), None);

    for (camera, x) in [(left, 0.0), (right, 640.0)] {
        let desc = CameraDesc {
            viewport: Some(Viewport::new(x, 0.0, 640.0, 720.0)),
            behavior: ScaleBehavior::Stretch,
            ..Default::default()
        };
        cameras.register_camera(camera, desc).unwrap();
        sync_view(&mut cameras, &scene, camera);
    }

    let window = WindowSize::new(2560, 1440);
    assert_eq!(cameras.resolve_viewport(left, window).unwrap(), Viewport::new(0.0, 0.0, 1280.0, 1440.0));
    assert_eq!(cameras.resolve_viewport(right, window).unwrap(), Viewport::new(1280.0, 0.0, 1280.0, 1440.0));

    // Each camera only sees its own side of the world
    let near_left = (Vec2::new(-1010.0, -10.0), Vec2::new(-990.0, 10.0));
    assert!(cameras.is_rect_visible(left, window, near_left.0, near_left.1).unwrap());
    assert!(!cameras.is_rect_visible(right, window, near_left.0, near_left.1).unwrap());
}

#[test]
fn test_integration_shake_frame_loop() {
    let mut scene = Scene::default();
    let mut cameras = CameraManager::with_rng(display(), StdRng::seed_from_u64(2024));
    let mut tweener = Tweener::new();
    let mut pipeline = RecordingPipeline::default();
    let window = WindowSize::new(1280, 720);

    let rig = scene.spawn(Vec3::new(50.0, 50.0, 0.0), None);
    let camera = scene.spawn(Vec3::ZERO, Some(rig));
    cameras.register_camera(camera, CameraDesc::default()).unwrap();

    let params = ShakeParams::new(4, 0.2, 12.0).with_radius_scalar(0.5);
    cameras.shake(camera, ShakeAnchor::Parent, params, &mut scene, &mut tweener).unwrap();

    let dt = 1.0 / 60.0;
    let mut max_offset: f32 = 0.0;
    let mut frames = 0;
    while cameras.camera(camera).unwrap().is_shaking() {
        for tick in tweener.update(dt, &mut scene) {
            cameras.on_shake_tick_complete(tick, &mut tweener);
        }
        sync_view(&mut cameras, &scene, camera);
        cameras.activate(camera, window, &mut pipeline).unwrap();

        let offset = scene.world_position(camera) - Vec3::new(50.0, 50.0, 0.0);
        max_offset = max_offset.max(offset.length());

        frames += 1;
        assert!(frames < 600, "shake never finished");
    }

    // The rig moved, never further than the first tick's radius
    assert!(max_offset > 0.0);
    assert!(max_offset <= 12.0 + 1e-3);
    // Ping-pong ticks bring the rig home; the camera's local position was never touched
    assert!((scene.world_position(camera) - Vec3::new(50.0, 50.0, 0.0)).length() < 1e-3);
    assert_eq!(scene.nodes[camera].position, Vec3::ZERO);
    assert_eq!(pipeline.frames.len(), frames);
}

#[test]
fn test_integration_cancel_shake_mid_frame() {
    let mut scene = Scene::default();
    let mut cameras = CameraManager::with_rng(display(), StdRng::seed_from_u64(7));
    let mut tweener = Tweener::new();
    let camera = scene.spawn(Vec3::new(10.0, -5.0, 0.0), None);
    cameras.register_camera(camera, CameraDesc::default()).unwrap();

    cameras
        .shake(camera, ShakeAnchor::Object, ShakeParams::new(10, 0.5, 30.0), &mut scene, &mut tweener)
        .unwrap();
    for _ in 0..10 {
        for tick in tweener.update(1.0 / 60.0, &mut scene) {
            cameras.on_shake_tick_complete(tick, &mut tweener);
        }
    }
    assert_ne!(scene.world_position(camera), Vec3::new(10.0, -5.0, 0.0));

    cameras.cancel_shake(camera, ShakeAnchor::Object, &mut scene, &mut tweener).unwrap();

    assert_eq!(scene.world_position(camera), Vec3::new(10.0, -5.0, 0.0));
    assert!(!cameras.camera(camera).unwrap().is_shaking());
    assert_eq!(tweener.active_count(), 0);
}

#[test]
fn test_integration_unregistered_camera_is_an_error() {
    let mut scene = Scene::default();
    let mut cameras = CameraManager::new(display());
    let camera = scene.spawn(Vec3::ZERO, None);
    cameras.register_camera(camera, CameraDesc::default()).unwrap();
    cameras.unregister_camera(camera).unwrap();

    let mut pipeline = RecordingPipeline::default();
    let result = cameras.activate(camera, WindowSize::new(1280, 720), &mut pipeline);
    assert!(matches!(result, Err(Error::CameraNotFound(_))));
    assert!(pipeline.frames.is_empty());
}
