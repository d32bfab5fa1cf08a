//! Slice picking: pointer to ray, ray to nearest visible pick target, and the
//! highlight bookkeeping that follows.
//!
//! ## Event Flow
//!
//! ```text
//! CursorMoved
//!   └─> pick_slices_on_pointer_move()
//!       ├─> PickingController::handle_pointer_move()
//!       │   ├─> reset every visible highlighted slice
//!       │   ├─> ray vs visible pick targets, nearest wins
//!       │   └─> highlight hit slice
//!       ├─> apply_visual_state() per VisualChange
//!       └─> SliceHoverEvent (Some = hover, None = hover cleared)
//! ```
//!
//! Pick targets are squares on each slice's local `z = 0` plane. Rays are moved
//! into slice-local space, so the test is a single plane crossing and a bounds
//! check. Both faces are hit.

/// Stateful controller resolving pointer moves into highlight changes.
pub mod controller;

/// Ray tests against slice pick targets.
pub mod ray;

/// ECS glue driving the controller from cursor events.
pub mod systems;

/// Material updates for default and highlighted slices.
pub mod visuals;

use bevy::prelude::*;

use crate::engine::core::app_state::AppState;
use controller::PickingController;
use systems::{SliceHoverEvent, pick_slices_on_pointer_move};

pub struct SlicePickingPlugin;

impl Plugin for SlicePickingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PickingController>()
            .add_event::<SliceHoverEvent>()
            .add_systems(
                Update,
                pick_slices_on_pointer_move.run_if(in_state(AppState::Running)),
            );
    }
}
