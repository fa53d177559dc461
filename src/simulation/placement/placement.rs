use rand::Rng;
use tracing::info;

use crate::core::{ModelError, ModelResult, FULL_TURN};
use crate::domain::constants::MIN_WORM_RADIUS;
use crate::domain::names::is_valid_worm_name;
use crate::entities::Worm;

use super::commands;
use super::{GameCore, WormId};

/// Drop a new worm on a random cell centre where it rests against terrain
pub(super) fn add_worm_at_random(game: &mut GameCore, radius: f64, name: &str) -> ModelResult<WormId> {
    if !Worm::is_valid_radius(radius) {
        return Err(ModelError::InvalidRadius { radius, minimum: MIN_WORM_RADIUS });
    }
    // Reject before drawing so a bad name does not advance the RNG
    if !is_valid_worm_name(name) {
        return Err(ModelError::InvalidName(name.to_string()));
    }

    let spots = game.terrain.adjacent_cell_centres(radius);
    if spots.is_empty() {
        return Err(ModelError::NoAdjacentLocation(radius));
    }

    let position = spots[game.rng.gen_range(0..spots.len())];
    let direction = game.rng.gen_range(0.0..FULL_TURN);
    info!(candidates = spots.len(), x = position.x, y = position.y, "random spot chosen");

    commands::add_worm(game, position, direction, radius, name)
}
