use bevy::prelude::*;

use crate::tools::picking::systems::SliceHoverEvent;

/// Offset from the cursor so the label does not sit under the pointer.
const TOOLTIP_OFFSET: Vec2 = Vec2::new(12.0, 12.0);

#[derive(Component)]
pub struct SliceTooltip;

/// Tooltip label, one-based for display.
pub fn tooltip_text(slice_index: usize) -> String {
    format!("Slice {}", slice_index + 1)
}

pub fn spawn_slice_tooltip(mut commands: Commands) {
    commands.spawn((
        Text::new(""),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(Color::WHITE),
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        Node {
            position_type: PositionType::Absolute,
            padding: UiRect::all(Val::Px(4.0)),
            ..default()
        },
        Visibility::Hidden,
        SliceTooltip,
    ));
}

/// Moves the tooltip next to the cursor on hover and hides it when cleared.
pub fn update_slice_tooltip(
    mut hover_events: EventReader<SliceHoverEvent>,
    mut tooltips: Query<(&mut Text, &mut Node, &mut Visibility), With<SliceTooltip>>,
) {
    let Some(SliceHoverEvent(notification)) = hover_events.read().last().copied() else {
        return;
    };
    let Ok((mut text, mut node, mut visibility)) = tooltips.single_mut() else {
        return;
    };

    match notification {
        Some(info) => {
            text.0 = tooltip_text(info.slice_index);
            node.left = Val::Px(info.screen_x + TOOLTIP_OFFSET.x);
            node.top = Val::Px(info.screen_y + TOOLTIP_OFFSET.y);
            *visibility = Visibility::Visible;
        }
        None => *visibility = Visibility::Hidden,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::picking::controller::HoverInfo;
    use bevy::ecs::system::RunSystemOnce;

    fn world_with_tooltip() -> World {
        let mut world = World::new();
        world.init_resource::<Events<SliceHoverEvent>>();
        world
            .run_system_once(spawn_slice_tooltip)
            .expect("spawn tooltip");
        world
    }

    fn tooltip_state(world: &mut World) -> (String, Val, Visibility) {
        let mut query = world.query_filtered::<(&Text, &Node, &Visibility), With<SliceTooltip>>();
        let (text, node, visibility) = query.single(world).expect("one tooltip");
        (text.0.clone(), node.left, *visibility)
    }

    #[test]
    fn label_is_one_based() {
        assert_eq!(tooltip_text(0), "Slice 1");
        assert_eq!(tooltip_text(23), "Slice 24");
    }

    #[test]
    fn hover_shows_label_next_to_cursor() {
        let mut world = world_with_tooltip();
        world.send_event(SliceHoverEvent(Some(HoverInfo {
            slice_index: 4,
            screen_x: 100.0,
            screen_y: 50.0,
        })));
        world
            .run_system_once(update_slice_tooltip)
            .expect("update tooltip");

        let (text, left, visibility) = tooltip_state(&mut world);
        assert_eq!(text, "Slice 5");
        assert_eq!(left, Val::Px(112.0));
        assert_eq!(visibility, Visibility::Visible);
    }

    #[test]
    fn hover_cleared_hides_label() {
        let mut world = world_with_tooltip();
        world.send_event(SliceHoverEvent(Some(HoverInfo {
            slice_index: 4,
            screen_x: 100.0,
            screen_y: 50.0,
        })));
        world.send_event(SliceHoverEvent(None));
        world
            .run_system_once(update_slice_tooltip)
            .expect("update tooltip");

        let (_, _, visibility) = tooltip_state(&mut world);
        assert_eq!(visibility, Visibility::Hidden);
    }
}
