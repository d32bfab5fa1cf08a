use bevy::prelude::*;
use serde::Serialize;

use super::ray::pick_visible;
use crate::engine::camera::pick_ray::PickRaySource;
use crate::engine::session::SliceSession;

/// Raw pointer position in client (window) pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerMove {
    pub client: Vec2,
}

/// Bounding box of the drawing surface in client pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasRect {
    pub min: Vec2,
    pub size: Vec2,
}

impl From<Rect> for CanvasRect {
    fn from(rect: Rect) -> Self {
        Self {
            min: rect.min,
            size: rect.size(),
        }
    }
}

/// Payload handed to the tooltip collaborator while a slice is hovered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoverInfo {
    pub slice_index: usize,
    pub screen_x: f32,
    pub screen_y: f32,
}

/// `Some` while a slice is hovered, `None` once the hover is cleared.
pub type HoverNotification = Option<HoverInfo>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliceVisualState {
    Default,
    Highlighted,
}

/// Material update the render side has to apply for one slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisualChange {
    pub index: usize,
    pub state: SliceVisualState,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PickOutcome {
    pub notification: HoverNotification,
    /// Resets first, then at most one highlight.
    pub changes: Vec<VisualChange>,
}

/// Maps client coordinates to normalized device coordinates, `+y` up.
/// Returns `None` for a degenerate canvas.
pub fn pointer_to_ndc(client: Vec2, canvas: &CanvasRect) -> Option<Vec2> {
    if canvas.size.x <= 0.0 || canvas.size.y <= 0.0 {
        return None;
    }
    let relative = (client - canvas.min) / canvas.size;
    Some(Vec2::new(relative.x * 2.0 - 1.0, -relative.y * 2.0 + 1.0))
}

/// Resolves pointer moves to the slice under the cursor and keeps highlight
/// flags consistent across events.
#[derive(Resource, Debug, Default)]
pub struct PickingController {
    last_hovered: Option<usize>,
}

impl PickingController {
    pub fn handle_pointer_move(
        &mut self,
        event: &PointerMove,
        canvas: &CanvasRect,
        camera: &impl PickRaySource,
        session: &mut SliceSession,
    ) -> PickOutcome {
        let ray = pointer_to_ndc(event.client, canvas).and_then(|ndc| camera.ray_from_ndc(ndc));

        // Every visible highlight is reset, not only the last hovered slice:
        // visibility may have changed since the previous event.
        let mut changes = Vec::new();
        for slice in session.registry.visible_slices_mut() {
            if slice.is_highlighted() {
                slice.set_highlighted(false);
                changes.push(VisualChange {
                    index: slice.index,
                    state: SliceVisualState::Default,
                });
            }
        }

        let hit = ray.and_then(|ray| pick_visible(&session.registry, &ray));
        let notification = hit.and_then(|hit| {
            let slice = session.registry.get_mut(hit.index)?;
            slice.set_highlighted(true);
            changes.push(VisualChange {
                index: hit.index,
                state: SliceVisualState::Highlighted,
            });
            Some(HoverInfo {
                slice_index: hit.index,
                screen_x: event.client.x,
                screen_y: event.client.y,
            })
        });

        session.highlighted = notification.map(|info| info.slice_index);
        if self.last_hovered != session.highlighted {
            match session.highlighted {
                Some(index) => debug!("Hovering slice {index}"),
                None => debug!("Slice hover cleared"),
            }
            self.last_hovered = session.highlighted;
        }

        PickOutcome {
            notification,
            changes,
        }
    }

    pub fn last_hovered(&self) -> Option<usize> {
        self.last_hovered
    }
}
