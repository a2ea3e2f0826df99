/// Frustum: composed projection × view, with its inverse and side planes.
///
/// The same snapshot serves activation (the composed matrix), coordinate
/// conversion (forward and inverse transforms) and 2D visibility culling
/// (left/right/bottom/top planes; near/far are irrelevant on the z = 0 plane).
///
/// Each plane is a Vec4 (A, B, C, D) with an inward-pointing normal: a point
/// P is inside if dot(plane, P_homogeneous) >= 0 for all planes.

use glam::{Mat4, Vec2, Vec3, Vec4};

/// Frustum plane indices
pub const PLANE_LEFT: usize = 0;
pub const PLANE_RIGHT: usize = 1;
pub const PLANE_BOTTOM: usize = 2;
pub const PLANE_TOP: usize = 3;

/// True if a clip-space point lies within [-1, 1] on both axes
pub fn is_inside_clip(clip: Vec2) -> bool {
    clip.x >= -1.0 && clip.x <= 1.0 && clip.y >= -1.0 && clip.y <= 1.0
}

#[derive(Debug, Clone, Copy)]
pub struct Frustum {
    view_projection: Mat4,
    inverse: Mat4,
    /// left, right, bottom, top
    pub planes: [Vec4; 4],
}

impl Frustum {
    /// Compose `projection * view`.
    ///
    /// The composed matrix must be invertible (sane zoom and near < far).
    pub fn new(projection: Mat4, view: Mat4) -> Self {
        let view_projection = projection * view;
        Self {
            view_projection,
            inverse: view_projection.inverse(),
            planes: Self::extract_planes(&view_projection),
        }
    }

    /// Gribb & Hartmann plane extraction, normalized so (A, B, C) is a unit vector
    fn extract_planes(vp: &Mat4) -> [Vec4; 4] {
        let m = vp.to_cols_array_2d();

        let mut planes = [
            // Left:   row3 + row0
            Vec4::new(m[0][3] + m[0][0], m[1][3] + m[1][0], m[2][3] + m[2][0], m[3][3] + m[3][0]),
            // Right:  row3 - row0
            Vec4::new(m[0][3] - m[0][0], m[1][3] - m[1][0], m[2][3] - m[2][0], m[3][3] - m[3][0]),
            // Bottom: row3 + row1
            Vec4::new(m[0][3] + m[0][1], m[1][3] + m[1][1], m[2][3] + m[2][1], m[3][3] + m[3][1]),
            // Top:    row3 - row1
            Vec4::new(m[0][3] - m[0][1], m[1][3] - m[1][1], m[2][3] - m[2][1], m[3][3] - m[3][1]),
        ];

        for plane in &mut planes {
            let normal_len = Vec3::new(plane.x, plane.y, plane.z).length();
            if normal_len > 0.0 {
                *plane /= normal_len;
            }
        }

        planes
    }

    /// projection * view
    pub fn matrix(&self) -> &Mat4 {
        &self.view_projection
    }

    /// Inverse of `matrix()`
    pub fn inverse_matrix(&self) -> &Mat4 {
        &self.inverse
    }

    /// Project a world position to normalized device coordinates
    pub fn world_to_clip(&self, world: Vec3) -> Vec3 {
        let clip = self.view_projection * world.extend(1.0);
        clip.truncate() / clip.w
    }

    /// Unproject the clip-space point `(clip.x, clip.y, 0, 1)` to world space
    pub fn clip_to_world(&self, clip: Vec2) -> Vec3 {
        let world = self.inverse * Vec4::new(clip.x, clip.y, 0.0, 1.0);
        world.truncate() / world.w
    }

    /// True if the world point (x, y, 0) is inside all four side planes
    pub fn contains_point(&self, point: Vec2) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.x * point.x + plane.y * point.y + plane.w >= 0.0)
    }

    /// Test a world-space rectangle on the z = 0 plane against the side planes.
    ///
    /// Uses the "positive vertex" test. Conservative: may return false
    /// positives, never false negatives.
    pub fn intersects_rect(&self, min: Vec2, max: Vec2) -> bool {
        for plane in &self.planes {
            let p_vertex = Vec2::new(
                if plane.x >= 0.0 { max.x } else { min.x },
                if plane.y >= 0.0 { max.y } else { min.y },
            );

            if plane.x * p_vertex.x + plane.y * p_vertex.y + plane.w < 0.0 {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
