use glam::{Mat4, Vec3};
use slotmap::SlotMap;
use crate::host::ObjectKey;
use super::*;

fn object_key() -> ObjectKey {
    let mut keys: SlotMap<ObjectKey, ()> = SlotMap::with_key();
    keys.insert(())
}

// ============================================================================
// CameraDesc
// ============================================================================

#[test]
fn test_camera_desc_default() {
    let desc = CameraDesc::default();

    assert_eq!(desc.view, Mat4::IDENTITY);
    assert!(desc.viewport.is_none());
    assert_eq!(desc.behavior, ScaleBehavior::Center);
    assert_eq!(desc.zoom, 1.0);
    assert!(desc.near < desc.far);
}

#[test]
fn test_scale_behavior_default_is_center() {
    assert_eq!(ScaleBehavior::default(), ScaleBehavior::Center);
}

// ============================================================================
// Camera
// ============================================================================

#[test]
fn test_camera_new_copies_desc() {
    let object = object_key();
    let view = Mat4::from_translation(Vec3::new(-10.0, -20.0, 0.0));
    let desc = CameraDesc {
        view,
        behavior: ScaleBehavior::Expand,
        zoom: 2.0,
        near: -5.0,
        far: 5.0,
        ..Default::default()
    };
    let viewport = Viewport::new(0.0, 0.0, 320.0, 240.0);

    let camera = Camera::new(object, &desc, viewport);

    assert_eq!(camera.object(), object);
    assert_eq!(*camera.view_matrix(), view);
    assert_eq!(*camera.design_viewport(), viewport);
    assert_eq!(camera.behavior(), ScaleBehavior::Expand);
    assert_eq!(camera.zoom(), 2.0);
    assert_eq!(camera.near(), -5.0);
    assert_eq!(camera.far(), 5.0);
}

#[test]
fn test_new_camera_is_idle() {
    let camera = Camera::new(object_key(), &CameraDesc::default(), Viewport::new(0.0, 0.0, 1.0, 1.0));

    assert!(!camera.is_shaking());
    assert!(camera.shake_origin().is_none());
}
