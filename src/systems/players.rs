use hecs::World;

use crate::components::{Paddle, PlayerId, Side};

/// Bind a joining player to the first unowned paddle, offering the left
/// slot before the right. Returns the bound side. A full arena, or a
/// player that already holds a paddle, drops the join.
pub fn bind_player(world: &mut World, player: PlayerId) -> Option<Side> {
    let mut slots: Vec<(hecs::Entity, Side, Option<PlayerId>)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(e, p)| (e, p.side, p.owner))
        .collect();
    slots.sort_by_key(|&(_, side, _)| side);

    // One paddle per connected player
    if slots.iter().any(|&(_, _, owner)| owner == Some(player)) {
        return None;
    }

    for (entity, side, owner) in slots {
        if owner.is_none() {
            if let Ok(mut paddle) = world.get::<&mut Paddle>(entity) {
                paddle.owner = Some(player);
                log::debug!("player {player} bound to {side:?} paddle");
                return Some(side);
            }
        }
    }
    None
}

/// Free the paddle owned by a departing player, leaving its position and
/// health untouched. Returns whether a paddle was released.
pub fn release_player(world: &mut World, player: PlayerId) -> bool {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.owner == Some(player) {
            paddle.owner = None;
            log::debug!("player {player} released {:?} paddle", paddle.side);
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ArenaConfig;
    use crate::create_paddle;

    fn setup_world() -> World {
        let mut world = World::new();
        let config = ArenaConfig::new();
        // Spawn right first so binding order depends on sides, not on
        // entity order
        create_paddle(&mut world, Side::Right, 0.0, &config);
        create_paddle(&mut world, Side::Left, 0.0, &config);
        world
    }

    fn owner_of(world: &World, side: Side) -> Option<PlayerId> {
        world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .and_then(|(_e, p)| p.owner)
    }

    #[test]
    fn test_join_binds_left_then_right() {
        let mut world = setup_world();

        assert_eq!(bind_player(&mut world, 1), Some(Side::Left));
        assert_eq!(bind_player(&mut world, 2), Some(Side::Right));
        assert_eq!(owner_of(&world, Side::Left), Some(1));
        assert_eq!(owner_of(&world, Side::Right), Some(2));
    }

    #[test]
    fn test_join_with_full_arena_is_dropped() {
        let mut world = setup_world();
        bind_player(&mut world, 1);
        bind_player(&mut world, 2);

        assert_eq!(bind_player(&mut world, 3), None, "Both slots are owned");
        assert_eq!(owner_of(&world, Side::Left), Some(1));
        assert_eq!(owner_of(&world, Side::Right), Some(2));
    }

    #[test]
    fn test_rejoin_while_bound_is_dropped() {
        let mut world = setup_world();
        bind_player(&mut world, 1);

        assert_eq!(
            bind_player(&mut world, 1),
            None,
            "A player holds at most one paddle"
        );
        assert_eq!(owner_of(&world, Side::Left), Some(1));
        assert_eq!(owner_of(&world, Side::Right), None);
    }

    #[test]
    fn test_leave_frees_the_slot() {
        let mut world = setup_world();
        bind_player(&mut world, 1);

        assert!(release_player(&mut world, 1));
        assert_eq!(owner_of(&world, Side::Left), None);
    }

    #[test]
    fn test_leave_for_unknown_player_is_noop() {
        let mut world = setup_world();
        bind_player(&mut world, 1);

        assert!(!release_player(&mut world, 42));
        assert_eq!(owner_of(&world, Side::Left), Some(1));
    }

    #[test]
    fn test_vacated_slot_is_reused() {
        let mut world = setup_world();
        bind_player(&mut world, 1);
        bind_player(&mut world, 2);

        release_player(&mut world, 1);

        assert_eq!(
            bind_player(&mut world, 3),
            Some(Side::Left),
            "New player takes the vacated slot, not the occupied one"
        );
        assert_eq!(owner_of(&world, Side::Right), Some(2));
    }
}
