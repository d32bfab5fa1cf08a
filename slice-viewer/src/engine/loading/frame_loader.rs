use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::engine::assets::frame_sequence::FrameSequence;
use crate::engine::loading::progress::LoadingProgress;

/// Frames file, relative to the asset directory.
pub const FRAMES_ASSET_PATH: &str = "frames/frames.json";

#[derive(Resource, Default)]
pub struct FrameLoader {
    pub handle: Option<Handle<FrameSequence>>,
}

// Start the loading process
pub fn start_loading(mut frame_loader: ResMut<FrameLoader>, asset_server: Res<AssetServer>) {
    info!("Loading frames from: {}", FRAMES_ASSET_PATH);
    frame_loader.handle = Some(asset_server.load(FRAMES_ASSET_PATH));
}

// Watch the frames handle until it is loaded or has failed
pub fn check_frame_loading(
    mut loading_progress: ResMut<LoadingProgress>,
    frame_loader: Res<FrameLoader>,
    asset_server: Res<AssetServer>,
) {
    if loading_progress.frames_loaded || loading_progress.load_failed {
        return;
    }
    let Some(handle) = &frame_loader.handle else {
        return;
    };

    match asset_server.get_load_state(handle) {
        Some(LoadState::Loaded) => {
            info!("✓ Frames loaded");
            loading_progress.frames_loaded = true;
        }
        Some(LoadState::Failed(error)) => {
            error!("Failed to load frames from {}: {}", FRAMES_ASSET_PATH, error);
            loading_progress.load_failed = true;
        }
        _ => {}
    }
}
