use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::spatial::TerrainMap;

use super::settings::GameSettings;
use super::GameCore;

pub(super) fn create_game_core(terrain: TerrainMap, settings: GameSettings) -> GameCore {
    debug!(
        width = terrain.width(),
        height = terrain.height(),
        rows = terrain.rows(),
        cols = terrain.cols(),
        seed = settings.seed,
        "game core created"
    );
    GameCore {
        rng: ChaCha8Rng::seed_from_u64(settings.seed),
        terrain,
        worms: Vec::new(),
        teams: Vec::new(),
        projectile: None,
        settings,
        current: None,
    }
}
