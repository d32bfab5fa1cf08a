use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use super::controller::{CanvasRect, HoverNotification, PickingController, PointerMove};
use super::visuals::apply_visual_state;
use crate::engine::camera::pick_ray::CameraView;
use crate::engine::session::SliceSession;

/// Hover state after each pointer move, for tooltip and frontend consumers.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct SliceHoverEvent(pub HoverNotification);

/// Runs the picking controller for the latest cursor move of the frame and
/// applies the resulting material changes.
pub fn pick_slices_on_pointer_move(
    mut cursor_moved: EventReader<CursorMoved>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform)>,
    mut session: ResMut<SliceSession>,
    mut controller: ResMut<PickingController>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut hover_events: EventWriter<SliceHoverEvent>,
) {
    // Earlier moves in the same frame are superseded by the last one.
    let Some(moved) = cursor_moved.read().last() else {
        return;
    };

    let Ok(window) = windows.single() else {
        session.report_missing_view("primary window");
        return;
    };
    let Some((camera, camera_xf)) = session.camera.and_then(|e| cameras.get(e).ok()) else {
        session.report_missing_view("picking camera");
        return;
    };
    session.view_available();

    let canvas = camera
        .logical_viewport_rect()
        .map(CanvasRect::from)
        .unwrap_or(CanvasRect {
            min: Vec2::ZERO,
            size: window.size(),
        });

    let view = CameraView {
        camera,
        transform: camera_xf,
    };
    let outcome = controller.handle_pointer_move(
        &PointerMove {
            client: moved.position,
        },
        &canvas,
        &view,
        &mut session,
    );

    for change in &outcome.changes {
        if let Some(slice) = session.registry.get(change.index) {
            apply_visual_state(slice, change.state, &session.config, &mut materials);
        }
    }

    hover_events.write(SliceHoverEvent(outcome.notification));
}
