use bevy::prelude::*;
use constants::render_settings::{PICK_TARGET_COLOR, POINT_SEGMENTS};

use crate::engine::layout::config::SliceLayoutConfig;
use crate::engine::session::SliceSession;
use crate::engine::slices::builder::SliceBlueprint;
use crate::engine::slices::error::{SliceError, SliceResult};
use crate::engine::slices::registry::{PickTarget, Slice, SliceChildKind, SliceHandles, SliceRoot};

/// Meshes shared by every slice: one point sphere and one pick-target square.
#[derive(Resource, Clone)]
pub struct SliceMeshes {
    pub point: Handle<Mesh>,
    pub pick_target: Handle<Mesh>,
}

impl SliceMeshes {
    pub fn new(meshes: &mut Assets<Mesh>, config: &SliceLayoutConfig) -> Self {
        Self {
            point: meshes.add(
                Sphere::new(config.point_radius)
                    .mesh()
                    .uv(POINT_SEGMENTS, POINT_SEGMENTS),
            ),
            pick_target: meshes.add(Rectangle::new(
                config.pick_target_size,
                config.pick_target_size,
            )),
        }
    }
}

/// Spawns a slice root with its point and pick-target children and registers it.
pub fn spawn_slice(
    commands: &mut Commands,
    meshes: &SliceMeshes,
    materials: &mut Assets<StandardMaterial>,
    session: &mut SliceSession,
    blueprint: SliceBlueprint,
) -> SliceResult<()> {
    let index = blueprint.index;
    // Nothing is allocated for an index the registry would reject.
    if session.registry.get(index).is_some() {
        return Err(SliceError::DuplicateSlice(index));
    }
    let config = &session.config;

    let target_material = materials.add(StandardMaterial {
        base_color: PICK_TARGET_COLOR.with_alpha(config.default_target_opacity),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        cull_mode: None,
        double_sided: true,
        ..default()
    });
    let point_materials: Vec<Handle<StandardMaterial>> = blueprint
        .points
        .iter()
        .map(|_| {
            materials.add(StandardMaterial {
                base_color: config.default_point_color(),
                metallic: 0.3,
                perceptual_roughness: 0.7,
                ..default()
            })
        })
        .collect();

    let root = commands
        .spawn((
            SliceRoot { index },
            blueprint.transform.to_transform(),
            Visibility::Visible,
        ))
        .id();

    let mut pick_target = Entity::PLACEHOLDER;
    commands.entity(root).with_children(|parent| {
        for (point, material) in blueprint.points.iter().zip(&point_materials) {
            parent.spawn((
                Mesh3d(meshes.point.clone()),
                MeshMaterial3d(material.clone()),
                Transform::from_translation(*point),
                SliceChildKind::Point,
            ));
        }
        pick_target = parent
            .spawn((
                Mesh3d(meshes.pick_target.clone()),
                MeshMaterial3d(target_material.clone()),
                Transform::IDENTITY,
                SliceChildKind::PickTarget,
            ))
            .id();
    });

    let slice = Slice::new(
        blueprint,
        PickTarget {
            size: config.pick_target_size,
        },
    )
    .with_handles(SliceHandles {
        root,
        pick_target,
        target_material,
        point_materials,
    });

    session.registry.register(index, slice)
}

/// Despawns a slice's entities and drops its materials from the asset store.
fn release_slice(commands: &mut Commands, slice: &Slice, materials: &mut Assets<StandardMaterial>) {
    let Some(handles) = &slice.handles else {
        return;
    };
    commands.entity(handles.root).despawn();
    materials.remove(&handles.target_material);
    for handle in &handles.point_materials {
        materials.remove(handle);
    }
}

/// Empties the registry, despawning every slice and releasing its materials.
/// Returns the number of slices torn down.
pub fn teardown_slices(
    commands: &mut Commands,
    session: &mut SliceSession,
    materials: &mut Assets<StandardMaterial>,
) -> usize {
    let slices = session.registry.drain();
    session.highlighted = None;

    for slice in &slices {
        release_slice(commands, slice, materials);
    }

    info!("Tore down {} slices", slices.len());
    slices.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::layout::placement::place_slice;
    use bevy::ecs::system::RunSystemOnce;

    fn blueprint(index: usize, points: usize) -> SliceBlueprint {
        SliceBlueprint {
            index,
            transform: place_slice(index, 24, 5.0),
            points: (0..points).map(|i| Vec3::new(i as f32, 0.0, 0.0)).collect(),
        }
    }

    #[derive(Resource)]
    struct PendingBlueprints(Vec<SliceBlueprint>);

    fn test_world(blueprints: Vec<SliceBlueprint>) -> World {
        let mut world = World::new();
        world.init_resource::<Assets<StandardMaterial>>();
        world.insert_resource(SliceSession::default());
        world.insert_resource(PendingBlueprints(blueprints));
        world.insert_resource(SliceMeshes {
            point: Handle::default(),
            pick_target: Handle::default(),
        });
        world
    }

    fn spawn_pending(
        mut commands: Commands,
        meshes: Res<SliceMeshes>,
        mut materials: ResMut<Assets<StandardMaterial>>,
        mut session: ResMut<SliceSession>,
        pending: Res<PendingBlueprints>,
    ) -> Vec<SliceResult<()>> {
        pending
            .0
            .iter()
            .cloned()
            .map(|b| spawn_slice(&mut commands, &meshes, &mut materials, &mut session, b))
            .collect()
    }

    fn teardown_all(
        mut commands: Commands,
        mut session: ResMut<SliceSession>,
        mut materials: ResMut<Assets<StandardMaterial>>,
    ) -> usize {
        teardown_slices(&mut commands, &mut session, &mut materials)
    }

    fn count<C: Component + PartialEq>(world: &mut World, value: C) -> usize {
        world
            .query::<&C>()
            .iter(world)
            .filter(|c| **c == value)
            .count()
    }

    #[test]
    fn spawned_slices_are_registered_with_children() {
        let mut world = test_world(vec![blueprint(0, 2), blueprint(1, 3)]);
        let results = world.run_system_once(spawn_pending).unwrap();
        assert!(results.iter().all(Result::is_ok));

        let session = world.resource::<SliceSession>();
        assert_eq!(session.registry.len(), 2);
        let handles = session.registry.get(1).unwrap().handles.clone().unwrap();
        assert_eq!(handles.point_materials.len(), 3);

        assert_eq!(world.query::<&SliceRoot>().iter(&world).count(), 2);
        assert_eq!(count(&mut world, SliceChildKind::Point), 5);
        assert_eq!(count(&mut world, SliceChildKind::PickTarget), 2);
        assert_eq!(world.resource::<Assets<StandardMaterial>>().len(), 7);
    }

    #[test]
    fn duplicate_spawn_is_rolled_back() {
        let mut world = test_world(vec![blueprint(4, 1), blueprint(4, 2)]);
        let results = world.run_system_once(spawn_pending).unwrap();

        assert!(results[0].is_ok());
        assert!(results[1].is_err());
        assert_eq!(world.resource::<SliceSession>().registry.len(), 1);
        assert_eq!(world.query::<&SliceRoot>().iter(&world).count(), 1);
        assert_eq!(count(&mut world, SliceChildKind::Point), 1);
        assert_eq!(world.resource::<Assets<StandardMaterial>>().len(), 2);
    }

    #[test]
    fn teardown_leaves_no_entries_behind() {
        let mut world = test_world((0..24).map(|i| blueprint(i, 2)).collect());
        world.run_system_once(spawn_pending).unwrap();
        assert_eq!(world.resource::<SliceSession>().registry.len(), 24);

        let removed = world.run_system_once(teardown_all).unwrap();

        assert_eq!(removed, 24);
        assert!(world.resource::<SliceSession>().registry.is_empty());
        assert_eq!(world.query::<&SliceRoot>().iter(&world).count(), 0);
        assert_eq!(world.query::<&SliceChildKind>().iter(&world).count(), 0);
        assert_eq!(world.resource::<Assets<StandardMaterial>>().len(), 0);
    }
}
