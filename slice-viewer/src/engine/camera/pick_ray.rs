use bevy::prelude::*;

/// Turns a normalized device coordinate into a world-space ray.
pub trait PickRaySource {
    fn ray_from_ndc(&self, ndc: Vec2) -> Option<Ray3d>;
}

/// Symmetric perspective view described by its pose and frustum, for
/// exercising picking without a render world.
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub(crate) struct PerspectiveView {
    pub transform: Transform,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Width over height.
    pub aspect: f32,
}

#[cfg(test)]
impl PickRaySource for PerspectiveView {
    fn ray_from_ndc(&self, ndc: Vec2) -> Option<Ray3d> {
        let half_height = (self.fov_y * 0.5).tan();
        let view_dir = Vec3::new(
            ndc.x * half_height * self.aspect,
            ndc.y * half_height,
            -1.0,
        );
        let direction = Dir3::new(self.transform.rotation * view_dir).ok()?;
        Some(Ray3d::new(self.transform.translation, direction))
    }
}

/// A live Bevy camera and its global transform.
pub struct CameraView<'a> {
    pub camera: &'a Camera,
    pub transform: &'a GlobalTransform,
}

impl PickRaySource for CameraView<'_> {
    fn ray_from_ndc(&self, ndc: Vec2) -> Option<Ray3d> {
        // Reverse-z: 1 is the near plane, values close to 0 approach the far plane.
        let near = self.camera.ndc_to_world(self.transform, ndc.extend(1.0))?;
        let far = self
            .camera
            .ndc_to_world(self.transform, ndc.extend(f32::EPSILON))?;
        let direction = Dir3::new(far - near).ok()?;
        Some(Ray3d::new(near, direction))
    }
}
