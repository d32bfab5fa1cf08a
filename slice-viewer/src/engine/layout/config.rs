use bevy::prelude::*;
use constants::layout::{CYLINDER_RADIUS, PICK_TARGET_SIZE, POINT_SPACING, TOTAL_SLICES};
use constants::render_settings::{
    DEFAULT_POINT_RGB, DEFAULT_TARGET_OPACITY, HIGHLIGHT_POINT_RGB, HIGHLIGHT_TARGET_OPACITY,
    POINT_RADIUS,
};
use serde::{Deserialize, Serialize};

use crate::engine::slices::error::{SliceError, SliceResult};

/// Layout and appearance options for the slice cylinder.
///
/// Missing fields in a serialized layout fall back to the workspace defaults.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliceLayoutConfig {
    /// Slices per full turn; sets the angular step.
    pub total_slices: usize,
    pub cylinder_radius: f32,
    /// Distance between neighbouring cells inside a slice.
    pub point_spacing: f32,
    pub point_radius: f32,
    /// Edge length of the square pick target.
    pub pick_target_size: f32,
    pub default_point_color: [f32; 3],
    pub highlight_point_color: [f32; 3],
    pub default_target_opacity: f32,
    pub highlight_target_opacity: f32,
}

impl Default for SliceLayoutConfig {
    fn default() -> Self {
        Self {
            total_slices: TOTAL_SLICES,
            cylinder_radius: CYLINDER_RADIUS,
            point_spacing: POINT_SPACING,
            point_radius: POINT_RADIUS,
            pick_target_size: PICK_TARGET_SIZE,
            default_point_color: DEFAULT_POINT_RGB,
            highlight_point_color: HIGHLIGHT_POINT_RGB,
            default_target_opacity: DEFAULT_TARGET_OPACITY,
            highlight_target_opacity: HIGHLIGHT_TARGET_OPACITY,
        }
    }
}

impl SliceLayoutConfig {
    pub fn validate(&self) -> SliceResult<()> {
        if self.total_slices == 0 {
            return Err(SliceError::InvalidSliceCount(self.total_slices));
        }

        let lengths = [
            ("cylinder_radius", self.cylinder_radius),
            ("point_spacing", self.point_spacing),
            ("point_radius", self.point_radius),
            ("pick_target_size", self.pick_target_size),
        ];
        for (name, value) in lengths {
            if !value.is_finite() || value <= 0.0 {
                return Err(SliceError::invalid_layout(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        let opacities = [
            ("default_target_opacity", self.default_target_opacity),
            ("highlight_target_opacity", self.highlight_target_opacity),
        ];
        for (name, value) in opacities {
            if !(0.0..=1.0).contains(&value) {
                return Err(SliceError::invalid_layout(format!(
                    "{name} must lie in 0..=1, got {value}"
                )));
            }
        }

        let colours = [
            ("default_point_color", self.default_point_color),
            ("highlight_point_color", self.highlight_point_color),
        ];
        for (name, rgb) in colours {
            if rgb.iter().any(|c| !(0.0..=1.0).contains(c)) {
                return Err(SliceError::invalid_layout(format!(
                    "{name} components must lie in 0..=1, got {rgb:?}"
                )));
            }
        }

        Ok(())
    }

    pub fn default_point_color(&self) -> Color {
        Color::srgb_from_array(self.default_point_color)
    }

    pub fn highlight_point_color(&self) -> Color {
        Color::srgb_from_array(self.highlight_point_color)
    }
}
