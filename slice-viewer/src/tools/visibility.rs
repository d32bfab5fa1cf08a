use bevy::prelude::*;

use crate::engine::session::SliceSession;
use crate::engine::slices::registry::SliceRoot;
use crate::tools::picking::systems::SliceHoverEvent;

/// Visibility change requested from the keyboard or the frontend.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliceVisibilityRequest {
    Set { index: usize, visible: bool },
    ShowAll,
}

/// `H` hides the highlighted slice, `R` reveals every slice.
pub fn handle_visibility_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    session: Res<SliceSession>,
    mut requests: EventWriter<SliceVisibilityRequest>,
) {
    if keyboard.just_pressed(KeyCode::KeyH) {
        if let Some(index) = session.highlighted {
            requests.write(SliceVisibilityRequest::Set {
                index,
                visible: false,
            });
        }
    }
    if keyboard.just_pressed(KeyCode::KeyR) {
        requests.write(SliceVisibilityRequest::ShowAll);
    }
}

/// Applies queued visibility changes. Hiding the hovered slice clears the
/// hover so the tooltip and frontend stop naming it.
pub fn apply_visibility_requests(
    mut requests: EventReader<SliceVisibilityRequest>,
    mut session: ResMut<SliceSession>,
    mut hover_events: EventWriter<SliceHoverEvent>,
) {
    for request in requests.read() {
        match *request {
            SliceVisibilityRequest::Set { index, visible } => {
                match session.registry.set_visibility(index, visible) {
                    Ok(()) => info!("Slice {} visible: {}", index, visible),
                    Err(error) => {
                        warn!("Visibility change rejected: {}", error);
                        continue;
                    }
                }
                if !visible && session.highlighted == Some(index) {
                    session.highlighted = None;
                    hover_events.write(SliceHoverEvent(None));
                }
            }
            SliceVisibilityRequest::ShowAll => {
                session.registry.show_all();
                info!("All slices visible");
            }
        }
    }
}

/// Mirrors registry visibility onto slice root entities.
pub fn sync_slice_visibility(
    session: Res<SliceSession>,
    mut roots: Query<(&SliceRoot, &mut Visibility)>,
) {
    if !session.is_changed() {
        return;
    }
    for (root, mut visibility) in &mut roots {
        let visible = session
            .registry
            .get(root.index)
            .is_some_and(|slice| slice.is_visible());
        let target = if visible {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
        if *visibility != target {
            *visibility = target;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::slices::registry::tests::test_slice;
    use bevy::ecs::system::RunSystemOnce;

    fn world_with_slices(indices: &[usize]) -> World {
        let mut world = World::new();
        let mut session = SliceSession::default();
        for &index in indices {
            session
                .registry
                .register(index, test_slice(index))
                .expect("register");
            world.spawn((SliceRoot { index }, Visibility::Visible));
        }
        world.insert_resource(session);
        world.init_resource::<Events<SliceVisibilityRequest>>();
        world.init_resource::<Events<SliceHoverEvent>>();
        world
    }

    fn hover_events(world: &World) -> Vec<SliceHoverEvent> {
        world
            .resource::<Events<SliceHoverEvent>>()
            .iter_current_update_events()
            .copied()
            .collect()
    }

    #[test]
    fn hiding_the_hovered_slice_clears_the_hover() {
        let mut world = world_with_slices(&[0, 1]);
        world.resource_mut::<SliceSession>().highlighted = Some(1);

        world.send_event(SliceVisibilityRequest::Set {
            index: 1,
            visible: false,
        });
        world
            .run_system_once(apply_visibility_requests)
            .expect("apply");

        assert_eq!(world.resource::<SliceSession>().highlighted, None);
        assert_eq!(hover_events(&world), vec![SliceHoverEvent(None)]);
    }

    #[test]
    fn hiding_another_slice_keeps_the_hover() {
        let mut world = world_with_slices(&[0, 1]);
        world.resource_mut::<SliceSession>().highlighted = Some(1);

        world.send_event(SliceVisibilityRequest::Set {
            index: 0,
            visible: false,
        });
        world
            .run_system_once(apply_visibility_requests)
            .expect("apply");

        assert_eq!(world.resource::<SliceSession>().highlighted, Some(1));
        assert!(hover_events(&world).is_empty());
    }

    fn root_visibility(world: &mut World, index: usize) -> Visibility {
        let mut query = world.query::<(&SliceRoot, &Visibility)>();
        query
            .iter(world)
            .find(|(root, _)| root.index == index)
            .map(|(_, visibility)| *visibility)
            .expect("root exists")
    }

    #[test]
    fn hide_then_show_all_round_trips_through_entities() {
        let mut world = world_with_slices(&[0, 1]);

        world.send_event(SliceVisibilityRequest::Set {
            index: 1,
            visible: false,
        });
        world
            .run_system_once(apply_visibility_requests)
            .expect("apply");
        world
            .run_system_once(sync_slice_visibility)
            .expect("sync");
        assert_eq!(root_visibility(&mut world, 0), Visibility::Visible);
        assert_eq!(root_visibility(&mut world, 1), Visibility::Hidden);

        world.send_event(SliceVisibilityRequest::ShowAll);
        world
            .run_system_once(apply_visibility_requests)
            .expect("apply");
        world
            .run_system_once(sync_slice_visibility)
            .expect("sync");
        assert_eq!(root_visibility(&mut world, 1), Visibility::Visible);
    }

    #[test]
    fn unknown_index_leaves_registry_untouched() {
        let mut world = world_with_slices(&[0]);
        world.send_event(SliceVisibilityRequest::Set {
            index: 9,
            visible: false,
        });
        world
            .run_system_once(apply_visibility_requests)
            .expect("apply");

        let session = world.resource::<SliceSession>();
        assert_eq!(session.registry.visible_slices().len(), 1);
    }
}
