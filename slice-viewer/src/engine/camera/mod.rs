//! Viewport camera for the slice scene.
//!
//! Provides orbit controls around the cylinder axis and the ray sources used
//! for picking.

/// Pointer ray construction from normalized device coordinates.
pub mod pick_ray;

/// Orbit camera resource and controller system for scene navigation.
pub mod viewport_camera;
