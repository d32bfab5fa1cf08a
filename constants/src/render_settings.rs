use bevy::color::Color;

/// Sphere radius of a single point marker.
pub const POINT_RADIUS: f32 = 0.1;

/// Longitude and latitude segment count of point spheres.
pub const POINT_SEGMENTS: u32 = 16;

/// Point colours as sRGB triples so layout files can override them.
pub const DEFAULT_POINT_RGB: [f32; 3] = [1.0, 0.0, 0.0];
pub const HIGHLIGHT_POINT_RGB: [f32; 3] = [0.0, 1.0, 0.0];

/// Pick targets stay near-invisible until hovered.
pub const DEFAULT_TARGET_OPACITY: f32 = 0.01;
pub const HIGHLIGHT_TARGET_OPACITY: f32 = 0.5;

pub const PICK_TARGET_COLOR: Color = Color::WHITE;

pub const GUIDE_RING_COLOR: Color = Color::srgba(0.267, 0.267, 0.267, 0.5);

/// Guide ring tessellation around the full circle.
pub const GUIDE_RING_RESOLUTION: u32 = 64;

pub const AMBIENT_BRIGHTNESS: f32 = 1000.0;
