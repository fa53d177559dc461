use tracing::info;

use crate::core::{ModelError, ModelResult};

use super::{GameCore, WormId};

pub(super) fn start_game(game: &mut GameCore) -> ModelResult<WormId> {
    let first = game.live_worms().map(|(id, _)| id).next().ok_or(ModelError::NoWorms)?;
    game.current = Some(first);
    game.projectile = None;
    game.worm_mut(first)?.restore_action_points();
    info!(worm_id = first, worms = game.worm_count(), "game started");
    Ok(first)
}

/// Hand the turn to the next live worm by handle order, wrapping around
pub(super) fn next_turn(game: &mut GameCore) -> ModelResult<WormId> {
    let current = game.current.ok_or(ModelError::GameNotStarted)?;

    let next = game
        .live_worms()
        .map(|(id, _)| id)
        .find(|&id| id > current)
        .or_else(|| game.live_worms().map(|(id, _)| id).next())
        .ok_or(ModelError::NoWorms)?;

    let bonus = game.settings.turn_hit_point_bonus;
    let worm = game.worm_mut(next)?;
    worm.restore_action_points();
    worm.heal(bonus);

    game.current = Some(next);
    game.projectile = None;
    info!(worm_id = next, "turn passed");
    Ok(next)
}

/// Current worm, unless it has been removed since its turn began
pub(super) fn current_worm(game: &GameCore) -> Option<WormId> {
    game.current.filter(|&id| game.contains_worm(id))
}

/// Last worm standing, or the one team every remaining worm belongs to
pub(super) fn winner(game: &GameCore) -> Option<String> {
    let mut worms = game.live_worms().map(|(_, w)| w);
    let first = worms.next()?;
    let mut rest = worms.peekable();
    if rest.peek().is_none() {
        return Some(first.name().to_string());
    }

    let team = first.team()?;
    rest.all(|w| w.team() == Some(team)).then(|| team.to_string())
}
