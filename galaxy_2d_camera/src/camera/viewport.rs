/// Viewport Resolver: design-space rectangle to window-space rectangle.

use glam::Vec2;
use crate::config::DisplayReference;
use crate::host::WindowSize;
use super::camera::{Camera, ScaleBehavior};

/// Axis-aligned rectangle in pixels. Origin is the bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// True if `point` lies inside the rectangle (edges included)
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }
}

/// Scale the camera's design viewport to the window, then letterbox it for
/// `Center` cameras whose window aspect ratio differs from the design one.
///
/// The scaling is per axis: x/width by `window.width / display.width`,
/// y/height by `window.height / display.height`.
pub(crate) fn resolve_viewport(display: &DisplayReference, camera: &Camera, window: WindowSize) -> Viewport {
    let window_width = window.width as f32;
    let window_height = window.height as f32;
    let sx = window_width / display.width();
    let sy = window_height / display.height();

    let design = &camera.viewport;
    let mut viewport = Viewport {
        x: design.x * sx,
        y: design.y * sy,
        width: design.width * sx,
        height: design.height * sy,
    };

    let window_ratio = window.aspect_ratio();
    match camera.behavior {
        ScaleBehavior::Expand | ScaleBehavior::Stretch => viewport,
        ScaleBehavior::Center if window_ratio == display.aspect_ratio() => viewport,
        ScaleBehavior::Center => {
            if window_ratio < display.aspect_ratio() {
                // Window is taller than the design: bars top and bottom
                let proportional_height = display.height() * sx;
                let margin = (window_height - proportional_height) / 2.0;
                viewport.y += margin;
                viewport.height -= 2.0 * margin;
            } else {
                // Window is wider than the design: bars left and right
                let proportional_width = display.width() * sy;
                let margin = (window_width - proportional_width) / 2.0;
                viewport.x += margin;
                viewport.width -= 2.0 * margin;
            }
            viewport
        }
    }
}

#[cfg(test)]
#[path = "viewport_tests.rs"]
mod tests;
