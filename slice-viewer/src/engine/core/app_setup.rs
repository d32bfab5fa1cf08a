use bevy::asset::AssetMetaCheck;
use bevy::prelude::*;
use bevy::render::camera::Projection;
use bevy_common_assets::json::JsonAssetPlugin;
use constants::camera::{CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR};
use constants::render_settings::AMBIENT_BRIGHTNESS;

// Crate engine modules
use crate::engine::assets::frame_sequence::FrameSequence;
use crate::engine::camera::viewport_camera::{PickingCamera, ViewportCamera, camera_controller};
use crate::engine::core::app_state::{AppState, transition_to_running};
use crate::engine::core::window_config::create_window_config;
use crate::engine::layout::config::SliceLayoutConfig;
use crate::engine::loading::frame_loader::{FrameLoader, check_frame_loading, start_loading};
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::loading::slice_creator::{
    create_slices_when_ready, rebuild_slices_on_frames_changed,
};
use crate::engine::scene::guide::draw_axes;
use crate::engine::session::SliceSession;
// Crate tools modules
use crate::tools::picking::SlicePickingPlugin;
use crate::tools::visibility::{
    SliceVisibilityRequest, apply_visibility_requests, sync_slice_visibility,
};
// Web RPC
use crate::rpc::web_rpc::WebRpcPlugin;

#[cfg(not(target_arch = "wasm32"))]
use crate::tools::tooltip::{spawn_slice_tooltip, update_slice_tooltip};
#[cfg(not(target_arch = "wasm32"))]
use crate::tools::visibility::handle_visibility_shortcuts;

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        // Registers FrameSequence as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<FrameSequence>::new(&["json"]))
        .add_plugins(SlicePickingPlugin)
        .add_plugins(WebRpcPlugin);

    // Initialise resources early
    app.init_resource::<LoadingProgress>()
        .init_resource::<FrameLoader>()
        .init_resource::<SliceLayoutConfig>()
        .init_resource::<SliceSession>()
        .init_resource::<ViewportCamera>()
        .add_event::<SliceVisibilityRequest>();

    app.add_systems(Startup, (setup, start_loading).chain())
        .add_systems(
            Update,
            (
                // Loading phase systems
                check_frame_loading,
                create_slices_when_ready,
                transition_to_running,
            )
                .chain()
                .run_if(in_state(AppState::Loading)),
        );

    // Base runtime systems that run on all platforms.
    let runtime_systems = (
        camera_controller,
        draw_axes,
        (rebuild_slices_on_frames_changed, create_slices_when_ready).chain(),
        (apply_visibility_requests, sync_slice_visibility).chain(),
    );

    app.add_systems(Update, runtime_systems.run_if(in_state(AppState::Running)));

    #[cfg(not(target_arch = "wasm32"))]
    {
        app.add_systems(Startup, spawn_slice_tooltip).add_systems(
            Update,
            (
                update_slice_tooltip.after(apply_visibility_requests),
                handle_visibility_shortcuts.before(apply_visibility_requests),
            )
                .run_if(in_state(AppState::Running)),
        );
    }

    app
}

fn spawn_lighting(commands: &mut Commands) {
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: AMBIENT_BRIGHTNESS,
        ..default()
    });
}

fn spawn_camera(commands: &mut Commands, viewport_camera: &ViewportCamera) -> Entity {
    commands
        .spawn((
            Camera3d::default(),
            Projection::Perspective(PerspectiveProjection {
                fov: CAMERA_FOV_DEGREES.to_radians(),
                near: CAMERA_NEAR,
                far: CAMERA_FAR,
                ..default()
            }),
            viewport_camera.transform(),
            PickingCamera,
        ))
        .id()
}

// Startup system that only handles basic initialisation
fn setup(
    mut commands: Commands,
    mut session: ResMut<SliceSession>,
    base_layout: Res<SliceLayoutConfig>,
    viewport_camera: Res<ViewportCamera>,
) {
    info!("=== SLICE VIEWER ===");
    spawn_lighting(&mut commands);
    session.camera = Some(spawn_camera(&mut commands, &viewport_camera));
    session.config = base_layout.clone();
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
