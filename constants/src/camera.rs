/// Initial camera distance from the origin along +Z.
pub const CAMERA_DISTANCE: f32 = 20.0;

/// Vertical field of view in degrees.
pub const CAMERA_FOV_DEGREES: f32 = 75.0;

pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

/// Orbit sensitivity in radians per pixel of mouse motion.
pub const ORBIT_SENSITIVITY: f32 = 0.005;

/// Closest and farthest orbit distance allowed by zooming.
pub const MIN_ORBIT_DISTANCE: f32 = 2.0;
pub const MAX_ORBIT_DISTANCE: f32 = 200.0;
