/// Cylinder footprint ring and axis helpers
use bevy::prelude::*;
use constants::layout::{AXIS_LENGTH, GUIDE_RING_HALF_WIDTH};
use constants::render_settings::{GUIDE_RING_COLOR, GUIDE_RING_RESOLUTION};
use std::f32::consts::FRAC_PI_2;

#[derive(Component)]
pub struct GuideRing;

/// Flat ring on the horizontal plane marking where slices stand.
pub fn spawn_guide_ring(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    radius: f32,
) -> Entity {
    let inner = (radius - GUIDE_RING_HALF_WIDTH).max(0.0);
    let ring = Annulus::new(inner, radius + GUIDE_RING_HALF_WIDTH)
        .mesh()
        .resolution(GUIDE_RING_RESOLUTION)
        .build();

    commands
        .spawn((
            Mesh3d(meshes.add(ring)),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: GUIDE_RING_COLOR,
                alpha_mode: AlphaMode::Blend,
                unlit: true,
                cull_mode: None,
                double_sided: true,
                ..default()
            })),
            // Annulus is built in XY; lay it onto XZ.
            Transform::from_rotation(Quat::from_rotation_x(FRAC_PI_2)),
            GuideRing,
        ))
        .id()
}

/// Axis lines through the origin, positive and negative halves.
pub fn draw_axes(mut gizmos: Gizmos) {
    let axes = [
        (Vec3::X, Color::srgb(1.0, 0.0, 0.0)),
        (Vec3::Y, Color::srgb(0.0, 1.0, 0.0)),
        (Vec3::Z, Color::srgb(0.0, 0.0, 1.0)),
    ];
    for (axis, color) in axes {
        gizmos.line(-axis * AXIS_LENGTH, axis * AXIS_LENGTH, color);
    }
}
