use bevy::prelude::*;

use super::controller::SliceVisualState;
use crate::engine::layout::config::SliceLayoutConfig;
use crate::engine::slices::registry::Slice;

/// Point colour and pick-target opacity for a visual state.
pub fn visual_style(state: SliceVisualState, config: &SliceLayoutConfig) -> (Color, f32) {
    match state {
        SliceVisualState::Default => {
            (config.default_point_color(), config.default_target_opacity)
        }
        SliceVisualState::Highlighted => (
            config.highlight_point_color(),
            config.highlight_target_opacity,
        ),
    }
}

/// Recolours a spawned slice's points and sets its pick-target opacity.
/// Slices without render handles are left untouched.
pub fn apply_visual_state(
    slice: &Slice,
    state: SliceVisualState,
    config: &SliceLayoutConfig,
    materials: &mut Assets<StandardMaterial>,
) {
    let Some(handles) = &slice.handles else {
        return;
    };
    let (point_color, target_opacity) = visual_style(state, config);

    for handle in &handles.point_materials {
        if let Some(material) = materials.get_mut(handle) {
            material.base_color = point_color;
        }
    }
    if let Some(material) = materials.get_mut(&handles.target_material) {
        material.base_color = material.base_color.with_alpha(target_opacity);
    }
}
