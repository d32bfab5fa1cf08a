use bevy::prelude::*;

use crate::engine::layout::config::SliceLayoutConfig;
use crate::engine::slices::registry::SliceRegistry;

/// Everything the picking and scene systems share: layout, registry, the
/// picking camera and the slice currently under the pointer.
#[derive(Resource, Default)]
pub struct SliceSession {
    pub config: SliceLayoutConfig,
    pub registry: SliceRegistry,
    /// Camera used to turn pointer positions into rays. Set once at setup.
    pub camera: Option<Entity>,
    pub highlighted: Option<usize>,
    missing_view_reported: bool,
}

impl SliceSession {
    /// Logs a missing camera or window the first time only.
    pub fn report_missing_view(&mut self, what: &str) {
        if !self.missing_view_reported {
            warn!("Slice picking disabled: {what} is not available");
            self.missing_view_reported = true;
        }
    }

    pub fn view_available(&mut self) {
        self.missing_view_reported = false;
    }
}
