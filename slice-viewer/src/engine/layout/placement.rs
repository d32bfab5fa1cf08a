use bevy::prelude::*;
use std::f32::consts::{FRAC_PI_2, TAU};

/// Where a slice sits on the cylinder: a point on the horizontal circle and a
/// yaw turning the slice plane to face away from the centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliceTransform {
    /// Polar angle of the slice on the circle.
    pub angle: f32,
    pub position: Vec3,
    /// Rotation about +Y, always `angle + π/2`.
    pub rotation_y: f32,
}

impl SliceTransform {
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_y(self.rotation_y)
    }

    pub fn to_transform(&self) -> Transform {
        Transform::from_translation(self.position).with_rotation(self.rotation())
    }
}

/// Angle of slice `index` when a full turn holds `total` slices.
pub fn slice_angle(index: usize, total: usize) -> f32 {
    debug_assert!(total > 0, "slice layout needs at least one slice");
    index as f32 * TAU / total as f32
}

/// Places slice `index` of `total` on a circle of `radius` in the XZ plane.
pub fn place_slice(index: usize, total: usize, radius: f32) -> SliceTransform {
    let angle = slice_angle(index, total);
    SliceTransform {
        angle,
        position: Vec3::new(radius * angle.cos(), 0.0, radius * angle.sin()),
        rotation_y: angle + FRAC_PI_2,
    }
}
