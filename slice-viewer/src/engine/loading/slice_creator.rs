use bevy::prelude::*;

use crate::engine::assets::frame_sequence::FrameSequence;
use crate::engine::layout::config::SliceLayoutConfig;
use crate::engine::loading::frame_loader::FrameLoader;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::guide::{GuideRing, spawn_guide_ring};
use crate::engine::scene::slice_spawner::{SliceMeshes, spawn_slice, teardown_slices};
use crate::engine::session::SliceSession;
use crate::engine::slices::builder::build_slices;

/// Layout for the next build: a valid override from the frames file, else `base`.
pub fn resolve_layout(
    base: &SliceLayoutConfig,
    layout_override: Option<&SliceLayoutConfig>,
) -> SliceLayoutConfig {
    match layout_override {
        Some(layout) => match layout.validate() {
            Ok(()) => layout.clone(),
            Err(error) => {
                warn!("Ignoring layout from frames file: {}", error);
                base.clone()
            }
        },
        None => base.clone(),
    }
}

pub fn create_slices_when_ready(
    mut loading_progress: ResMut<LoadingProgress>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut session: ResMut<SliceSession>,
    base_layout: Res<SliceLayoutConfig>,
    frame_loader: Res<FrameLoader>,
    sequences: Res<Assets<FrameSequence>>,
) {
    if loading_progress.slices_created || !loading_progress.frames_loaded {
        return;
    }

    let Some(sequence) = frame_loader.handle.as_ref().and_then(|h| sequences.get(h)) else {
        return;
    };

    if sequence.is_empty() {
        warn!("Frames file contains no frames");
    }

    session.config = resolve_layout(&base_layout, sequence.layout.as_ref());
    let report = build_slices(&sequence.frames, &session.config);
    for (index, error) in &report.failures {
        if error.is_malformed_input() {
            warn!("Slice {} skipped: {}", index, error);
        } else {
            error!("Slice {} failed: {}", index, error);
        }
    }

    let slice_meshes = SliceMeshes::new(&mut meshes, &session.config);
    let mut spawned = 0;
    for blueprint in report.blueprints {
        match spawn_slice(
            &mut commands,
            &slice_meshes,
            &mut materials,
            &mut session,
            blueprint,
        ) {
            Ok(()) => spawned += 1,
            Err(error) => error!("Slice registration failed: {}", error),
        }
    }

    spawn_guide_ring(
        &mut commands,
        &mut meshes,
        &mut materials,
        session.config.cylinder_radius,
    );
    commands.insert_resource(slice_meshes);

    loading_progress.skipped_slices = report.failures.iter().map(|(index, _)| *index).collect();
    loading_progress.slices_created = true;
    info!(
        "{} of {} slices ready ({} skipped)",
        spawned,
        sequence.len(),
        loading_progress.skipped_slices.len()
    );
}

/// Tears every slice down when the loaded frames file changes so the next
/// frame rebuilds from the new data.
pub fn rebuild_slices_on_frames_changed(
    mut events: EventReader<AssetEvent<FrameSequence>>,
    mut loading_progress: ResMut<LoadingProgress>,
    mut commands: Commands,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut session: ResMut<SliceSession>,
    frame_loader: Res<FrameLoader>,
    guides: Query<Entity, With<GuideRing>>,
) {
    let Some(handle) = &frame_loader.handle else {
        return;
    };
    let modified = events.read().any(|event| event.is_modified(handle.id()));
    if !modified || !loading_progress.slices_created {
        return;
    }

    info!("Frames changed, rebuilding slices");
    teardown_slices(&mut commands, &mut session, &mut materials);
    for guide in &guides {
        commands.entity(guide).despawn();
    }
    loading_progress.slices_created = false;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::frame_sequence::Frame;
    use crate::engine::slices::builder::build_slice;
    use crate::engine::slices::registry::SliceRoot;
    use bevy::ecs::system::RunSystemOnce;

    const FRAMES_HANDLE: Handle<FrameSequence> = Handle::weak_from_u128(0x51ce_0001);

    fn spawn_scene(
        mut commands: Commands,
        mut meshes: ResMut<Assets<Mesh>>,
        mut materials: ResMut<Assets<StandardMaterial>>,
        mut session: ResMut<SliceSession>,
    ) {
        let config = session.config.clone();
        let slice_meshes = SliceMeshes::new(&mut meshes, &config);
        let frame = Frame::new(vec![vec![1, 0], vec![0, 1]]);
        for index in 0..3 {
            let blueprint = build_slice(index, &frame, &config).expect("valid frame");
            spawn_slice(
                &mut commands,
                &slice_meshes,
                &mut materials,
                &mut session,
                blueprint,
            )
            .expect("fresh index");
        }
        spawn_guide_ring(
            &mut commands,
            &mut meshes,
            &mut materials,
            config.cylinder_radius,
        );
    }

    fn built_world() -> World {
        let mut world = World::new();
        world.init_resource::<Assets<Mesh>>();
        world.init_resource::<Assets<StandardMaterial>>();
        world.init_resource::<Events<AssetEvent<FrameSequence>>>();
        world.insert_resource(SliceSession::default());
        world.insert_resource(FrameLoader {
            handle: Some(FRAMES_HANDLE),
        });
        world.insert_resource(LoadingProgress {
            frames_loaded: true,
            slices_created: true,
            ..default()
        });
        world.run_system_once(spawn_scene).expect("spawn scene");
        world
    }

    fn entity_count<C: Component>(world: &mut World) -> usize {
        world.query::<&C>().iter(world).count()
    }

    #[test]
    fn modified_frames_tear_the_scene_down() {
        let mut world = built_world();
        assert_eq!(entity_count::<SliceRoot>(&mut world), 3);
        assert_eq!(entity_count::<GuideRing>(&mut world), 1);

        world.send_event(AssetEvent::Modified {
            id: FRAMES_HANDLE.id(),
        });
        world
            .run_system_once(rebuild_slices_on_frames_changed)
            .expect("rebuild");

        assert!(world.resource::<SliceSession>().registry.is_empty());
        assert_eq!(entity_count::<SliceRoot>(&mut world), 0);
        assert_eq!(entity_count::<GuideRing>(&mut world), 0);
        assert!(!world.resource::<LoadingProgress>().slices_created);
    }

    #[test]
    fn unrelated_asset_change_keeps_the_scene() {
        let mut world = built_world();

        world.send_event(AssetEvent::Modified {
            id: Handle::<FrameSequence>::weak_from_u128(0x51ce_0002).id(),
        });
        world
            .run_system_once(rebuild_slices_on_frames_changed)
            .expect("rebuild");

        assert_eq!(world.resource::<SliceSession>().registry.len(), 3);
        assert_eq!(entity_count::<SliceRoot>(&mut world), 3);
        assert_eq!(entity_count::<GuideRing>(&mut world), 1);
        assert!(world.resource::<LoadingProgress>().slices_created);
    }

    #[test]
    fn missing_override_keeps_base_layout() {
        let base = SliceLayoutConfig {
            cylinder_radius: 7.0,
            ..default()
        };
        assert_eq!(resolve_layout(&base, None), base);
    }

    #[test]
    fn valid_override_replaces_base_layout() {
        let base = SliceLayoutConfig::default();
        let layout = SliceLayoutConfig {
            total_slices: 12,
            ..default()
        };
        assert_eq!(resolve_layout(&base, Some(&layout)).total_slices, 12);
    }

    #[test]
    fn invalid_override_is_ignored() {
        let base = SliceLayoutConfig::default();
        let layout = SliceLayoutConfig {
            total_slices: 0,
            ..default()
        };
        assert_eq!(resolve_layout(&base, Some(&layout)), base);
    }
}
