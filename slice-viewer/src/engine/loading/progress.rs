use bevy::prelude::*;

#[derive(Resource, Default)]
pub struct LoadingProgress {
    pub frames_loaded: bool,
    pub load_failed: bool,
    pub slices_created: bool,
    /// Slice indices whose frames were malformed in the last build.
    pub skipped_slices: Vec<usize>,
}
