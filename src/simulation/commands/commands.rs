use tracing::{debug, info};

use crate::core::{ModelError, ModelResult, Vec2};
use crate::entities::Worm;

use super::{GameCore, WormId};

/// Worms descend this fraction of their radius per fall sample
const FALL_STEP_FRACTION: f64 = 0.1;

pub(super) fn add_worm(
    game: &mut GameCore,
    position: Vec2,
    direction: f64,
    radius: f64,
    name: &str,
) -> ModelResult<WormId> {
    let worm = Worm::new(position, direction, radius, name)?;
    let id = game.worms.len() as WormId;
    info!(worm_id = id, name, x = position.x, y = position.y, "worm added");
    game.worms.push(Some(worm));
    Ok(id)
}

pub(super) fn move_worm(game: &mut GameCore, id: WormId, steps: i32) -> ModelResult<()> {
    game.worm_mut(id)?.move_steps(steps)?;
    game.retire_if_out_of_play(id)?;
    Ok(())
}

pub(super) fn turn_worm(game: &mut GameCore, id: WormId, angle: f64) -> ModelResult<()> {
    game.worm_mut(id)?.turn(angle)
}

pub(super) fn jump_worm(game: &mut GameCore, id: WormId) -> ModelResult<Vec2> {
    let landing = game.worm_mut(id)?.jump()?;
    debug!(worm_id = id, x = landing.x, y = landing.y, "worm jumped");
    game.retire_if_out_of_play(id)?;
    Ok(landing)
}

/// Free to fall: inside the world, footprint clear and nothing underneath to rest on
pub(super) fn can_fall(game: &GameCore, id: WormId) -> ModelResult<bool> {
    let worm = game.worm(id)?;
    let (pos, r) = (worm.position(), worm.radius());
    Ok(game.terrain.is_inside_world(pos, r)
        && game.terrain.is_passable_area(pos, r)
        && !game.terrain.is_adjacent(pos, r))
}

/// Drop the worm straight down until it rests on terrain or leaves the world.
/// Returns the distance fallen.
pub(super) fn fall(game: &mut GameCore, id: WormId) -> ModelResult<f64> {
    if !can_fall(game, id)? {
        return Err(ModelError::CannotFall);
    }

    let worm = game.worm(id)?;
    let start = worm.position();
    let radius = worm.radius();
    let step = Vec2::new(0.0, -radius * FALL_STEP_FRACTION);

    let mut pos = start;
    loop {
        if !game.terrain.is_inside_world(pos, radius) || game.terrain.is_adjacent(pos, radius) {
            break;
        }
        let next = pos + step;
        // the adjacency band is as thick as one step, so it can be skipped over
        if !game.terrain.is_passable_area(next, radius) {
            break;
        }
        pos = next;
    }

    let distance = start.y - pos.y;
    let damage = (game.settings.fall_damage_per_metre * distance).floor() as u32;

    let worm = game.worm_mut(id)?;
    worm.set_position(pos)?;
    worm.damage(damage);
    info!(worm_id = id, distance, damage, "worm fell");

    game.retire_if_out_of_play(id)?;
    Ok(distance)
}

pub(super) fn select_next_weapon(game: &mut GameCore, id: WormId) -> ModelResult<()> {
    game.worm_mut(id)?.select_next_weapon();
    Ok(())
}
