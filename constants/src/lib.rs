//! Shared layout and render defaults for the slice viewer.

/// Cylinder layout defaults: slice count, radius and point spacing.
pub mod layout;

/// Colours, opacities and mesh sizes used when drawing slices.
pub mod render_settings;

/// Camera placement and projection defaults.
pub mod camera;
