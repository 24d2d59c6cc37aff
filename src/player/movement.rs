use bevy::prelude::*;

use super::types::{Facing, GridMover, Player};
use super::MovementConfig;
use crate::map::{GridPos, WorldMap};

/// Resolve the pressed arrow keys into a cell delta and a facing.
/// Horizontal movement wins and vertical keys then bend it into a
/// diagonal; opposing keys cancel each other out.
pub fn resolve_step(left: bool, right: bool, up: bool, down: bool) -> Option<(IVec2, Facing)> {
    let go_left = left && !right;
    let go_right = right && !left;
    let go_up = up && !down;
    let go_down = down && !up;

    if go_left {
        let mut delta = IVec2::new(-1, 0);
        let mut facing = Facing::West;
        if go_up {
            facing = Facing::NorthWest;
            delta.y -= 1;
        } else if go_down {
            facing = Facing::SouthWest;
            delta.y += 1;
        }
        Some((delta, facing))
    } else if go_right {
        let mut delta = IVec2::new(1, 0);
        let mut facing = Facing::East;
        if go_up {
            facing = Facing::NorthEast;
            delta.y -= 1;
        } else if go_down {
            facing = Facing::SouthEast;
            delta.y += 1;
        }
        Some((delta, facing))
    } else if go_up {
        Some((IVec2::new(0, -1), Facing::North))
    } else if go_down {
        Some((IVec2::new(0, 1), Facing::South))
    } else {
        None
    }
}

/// Where a step from `from` by `delta` actually lands, or `None` if the
/// clamped candidate is blocked or produces no movement.
pub fn step_target(map: &WorldMap, from: GridPos, delta: IVec2) -> Option<GridPos> {
    let candidate = map.clamp(from.offset(delta));
    if candidate == from || map.is_blocked(candidate) {
        return None;
    }
    Some(candidate)
}

/// System: turn arrow-key input into a new walk step while the player is
/// standing still. Facing updates even when the step itself is rejected.
pub fn read_walk_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    map: Res<WorldMap>,
    mut query: Query<(&mut GridMover, &mut Facing), With<Player>>,
) {
    for (mut mover, mut facing) in &mut query {
        if !mover.is_idle() {
            continue;
        }

        let Some((delta, new_facing)) = resolve_step(
            keyboard.pressed(KeyCode::ArrowLeft),
            keyboard.pressed(KeyCode::ArrowRight),
            keyboard.pressed(KeyCode::ArrowUp),
            keyboard.pressed(KeyCode::ArrowDown),
        ) else {
            continue;
        };

        *facing = new_facing;

        if let Some(target) = step_target(&map, mover.cell, delta) {
            mover.begin_step(target);
        }
    }
}

/// System: advance in-flight walk steps by the frame delta.
pub fn advance_walk(
    time: Res<Time>,
    config: Res<MovementConfig>,
    mut query: Query<&mut GridMover, With<Player>>,
) {
    let amount = time.delta_secs() * config.walk_speed;
    for mut mover in &mut query {
        if mover.is_idle() {
            continue;
        }
        if mover.advance(amount) {
            debug!("Player reached cell {:?}", mover.cell);
        }
    }
}

/// System: place the player sprite at the interpolated walk position.
pub fn sync_player_transform(mut query: Query<(&GridMover, &mut Transform), With<Player>>) {
    for (mover, mut transform) in &mut query {
        let pos = mover.sprite_pos();
        transform.translation.x = pos.x;
        transform.translation.y = pos.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::TileGrid;

    #[test]
    fn test_resolve_cardinal_steps() {
        assert_eq!(
            resolve_step(true, false, false, false),
            Some((IVec2::new(-1, 0), Facing::West))
        );
        assert_eq!(
            resolve_step(false, true, false, false),
            Some((IVec2::new(1, 0), Facing::East))
        );
        assert_eq!(
            resolve_step(false, false, true, false),
            Some((IVec2::new(0, -1), Facing::North))
        );
        assert_eq!(
            resolve_step(false, false, false, true),
            Some((IVec2::new(0, 1), Facing::South))
        );
    }

    #[test]
    fn test_resolve_diagonal_steps() {
        assert_eq!(
            resolve_step(true, false, true, false),
            Some((IVec2::new(-1, -1), Facing::NorthWest))
        );
        assert_eq!(
            resolve_step(true, false, false, true),
            Some((IVec2::new(-1, 1), Facing::SouthWest))
        );
        assert_eq!(
            resolve_step(false, true, true, false),
            Some((IVec2::new(1, -1), Facing::NorthEast))
        );
        assert_eq!(
            resolve_step(false, true, false, true),
            Some((IVec2::new(1, 1), Facing::SouthEast))
        );
    }

    #[test]
    fn test_opposing_keys_cancel() {
        assert_eq!(resolve_step(false, false, false, false), None);
        assert_eq!(resolve_step(true, true, false, false), None);
        assert_eq!(resolve_step(false, false, true, true), None);

        // Cancelled vertical pair leaves a plain horizontal step
        assert_eq!(
            resolve_step(true, false, true, true),
            Some((IVec2::new(-1, 0), Facing::West))
        );
        // Cancelled horizontal pair leaves a plain vertical step
        assert_eq!(
            resolve_step(true, true, true, false),
            Some((IVec2::new(0, -1), Facing::North))
        );
    }

    fn test_map() -> WorldMap {
        // 3x3, centre column blocked at (1, 0)
        let mut collision = TileGrid::empty(3, 3);
        collision.set(GridPos::new(1, 0), 0);
        WorldMap {
            layers: [
                TileGrid::empty(3, 3),
                TileGrid::empty(3, 3),
                TileGrid::empty(3, 3),
            ],
            collision,
        }
    }

    #[test]
    fn test_step_target_walks_onto_free_cells() {
        let map = test_map();
        assert_eq!(
            step_target(&map, GridPos::new(1, 1), IVec2::new(1, 0)),
            Some(GridPos::new(2, 1))
        );
    }

    #[test]
    fn test_step_target_rejects_blocked_cells() {
        let map = test_map();
        assert_eq!(step_target(&map, GridPos::new(1, 1), IVec2::new(0, -1)), None);
    }

    #[test]
    fn test_step_target_clamps_at_map_edge() {
        let map = test_map();
        // Walking off the edge clamps back onto the same cell: no step
        assert_eq!(step_target(&map, GridPos::new(0, 1), IVec2::new(-1, 0)), None);
        // A diagonal off the corner still moves along the surviving axis
        assert_eq!(
            step_target(&map, GridPos::new(0, 1), IVec2::new(-1, 1)),
            Some(GridPos::new(0, 2))
        );
    }
}
