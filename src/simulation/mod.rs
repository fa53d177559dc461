//! Game core - the explicit context every action runs against
//!
//! Owns the terrain, the worms (addressed by `WormId` handles), teams, the last
//! fired projectile, settings and the seeded RNG. Nothing here is global.
//!
//! Handle resolution (`worm` / `worm_mut`) is the single place where an unknown
//! or removed handle turns into `ModelError::UnknownWorm`.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::core::{ModelError, ModelResult, Vec2};
use crate::entities::{Ballistic, Projectile, ProjectileSnapshot, Worm, WormSnapshot};
use crate::spatial::TerrainMap;

#[path = "init/settings.rs"]
mod settings;
#[path = "init/init.rs"]
mod init;
#[path = "commands/commands.rs"]
mod commands;
#[path = "commands/shoot.rs"]
mod shoot;
#[path = "teams/teams.rs"]
mod teams;
#[path = "turns/turns.rs"]
mod turns;
#[path = "placement/placement.rs"]
mod placement;
mod facade;

pub use facade::Game;
pub use settings::{GameSettings, SettingsError};
pub use shoot::ShotReport;
pub use teams::Team;

/// Stable handle of a worm for the lifetime of a game
pub type WormId = u32;

pub struct GameCore {
    terrain: TerrainMap,
    worms: Vec<Option<Worm>>,
    teams: Vec<Team>,
    projectile: Option<Projectile>,
    settings: GameSettings,
    rng: ChaCha8Rng,
    current: Option<WormId>,
}

impl GameCore {
    pub fn new(terrain: TerrainMap, settings: GameSettings) -> Self {
        init::create_game_core(terrain, settings)
    }

    pub fn terrain(&self) -> &TerrainMap {
        &self.terrain
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    /// Replace the settings; the RNG restarts from the new seed
    pub fn apply_settings(&mut self, settings: GameSettings) {
        self.rng = ChaCha8Rng::seed_from_u64(settings.seed);
        self.settings = settings;
    }

    /// Last fired projectile, resting where it stopped, until the next turn
    pub fn projectile(&self) -> Option<&Projectile> {
        self.projectile.as_ref()
    }

    // === Handles ===

    pub fn worm(&self, id: WormId) -> ModelResult<&Worm> {
        self.worms
            .get(id as usize)
            .and_then(Option::as_ref)
            .ok_or(ModelError::UnknownWorm(id))
    }

    pub fn worm_mut(&mut self, id: WormId) -> ModelResult<&mut Worm> {
        self.worms
            .get_mut(id as usize)
            .and_then(Option::as_mut)
            .ok_or(ModelError::UnknownWorm(id))
    }

    pub fn contains_worm(&self, id: WormId) -> bool {
        self.worm(id).is_ok()
    }

    /// Handles of every worm still in play, in creation order
    pub fn worm_ids(&self) -> Vec<WormId> {
        self.live_worms().map(|(id, _)| id).collect()
    }

    pub fn worm_count(&self) -> usize {
        self.live_worms().count()
    }

    pub(crate) fn live_worms(&self) -> impl Iterator<Item = (WormId, &Worm)> + '_ {
        self.worms
            .iter()
            .enumerate()
            .filter_map(|(id, slot)| slot.as_ref().map(|w| (id as WormId, w)))
    }

    /// Take a worm out of play and out of its team. The handle is never reused.
    pub fn remove_worm(&mut self, id: WormId) -> ModelResult<Worm> {
        self.worm(id)?;
        let worm = self.worms[id as usize].take().ok_or(ModelError::UnknownWorm(id))?;
        if let Some(team) = worm.team() {
            if let Some(t) = self.teams.iter_mut().find(|t| t.name() == team) {
                t.remove_member(id);
            }
        }
        info!(worm_id = id, name = worm.name(), "worm removed");
        Ok(worm)
    }

    pub fn worm_snapshot(&self, id: WormId) -> ModelResult<WormSnapshot> {
        Ok(WormSnapshot::new(id, self.worm(id)?))
    }

    pub fn projectile_snapshot(&self) -> Option<ProjectileSnapshot> {
        self.projectile.as_ref().map(ProjectileSnapshot::from)
    }

    // === Worm actions ===

    pub fn add_worm(&mut self, position: Vec2, direction: f64, radius: f64, name: &str) -> ModelResult<WormId> {
        commands::add_worm(self, position, direction, radius, name)
    }

    pub fn add_worm_at_random(&mut self, radius: f64, name: &str) -> ModelResult<WormId> {
        placement::add_worm_at_random(self, radius, name)
    }

    /// Move `steps` radii forward; a worm that ends up outside the world is removed
    pub fn move_worm(&mut self, id: WormId, steps: i32) -> ModelResult<()> {
        commands::move_worm(self, id, steps)
    }

    pub fn turn_worm(&mut self, id: WormId, angle: f64) -> ModelResult<()> {
        commands::turn_worm(self, id, angle)
    }

    pub fn jump_worm(&mut self, id: WormId) -> ModelResult<Vec2> {
        commands::jump_worm(self, id)
    }

    pub fn jump_time(&self, id: WormId) -> ModelResult<f64> {
        self.worm(id)?.jump_time()
    }

    pub fn jump_step(&self, id: WormId, t: f64) -> ModelResult<Vec2> {
        self.worm(id)?.jump_step(t)
    }

    pub fn can_fall(&self, id: WormId) -> ModelResult<bool> {
        commands::can_fall(self, id)
    }

    /// Drop the worm until it rests on terrain; returns the distance fallen
    pub fn fall(&mut self, id: WormId) -> ModelResult<f64> {
        commands::fall(self, id)
    }

    pub fn can_shoot(&self, id: WormId) -> ModelResult<bool> {
        shoot::can_shoot(self, id)
    }

    pub fn shoot(&mut self, id: WormId, propulsion_yield: u32) -> ModelResult<ShotReport> {
        shoot::shoot(self, id, propulsion_yield)
    }

    pub fn select_next_weapon(&mut self, id: WormId) -> ModelResult<()> {
        commands::select_next_weapon(self, id)
    }

    // === Teams ===

    pub fn add_team(&mut self, name: &str) -> ModelResult<()> {
        teams::add_team(self, name)
    }

    pub fn join_team(&mut self, id: WormId, team: &str) -> ModelResult<()> {
        teams::join_team(self, id, team)
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn team(&self, name: &str) -> ModelResult<&Team> {
        self.teams
            .iter()
            .find(|t| t.name() == name)
            .ok_or_else(|| ModelError::UnknownTeam(name.to_string()))
    }

    // === Turns ===

    pub fn start_game(&mut self) -> ModelResult<WormId> {
        turns::start_game(self)
    }

    pub fn next_turn(&mut self) -> ModelResult<WormId> {
        turns::next_turn(self)
    }

    pub fn current_worm(&self) -> Option<WormId> {
        turns::current_worm(self)
    }

    pub fn winner(&self) -> Option<String> {
        turns::winner(self)
    }

    pub fn is_game_finished(&self) -> bool {
        self.winner().is_some()
    }

    /// Remove the worm if it left the world or ran out of hit points
    fn retire_if_out_of_play(&mut self, id: WormId) -> ModelResult<bool> {
        let worm = self.worm(id)?;
        let out = !worm.is_alive() || !self.terrain.is_inside_world(worm.position(), worm.radius());
        if out {
            self.remove_worm(id)?;
        }
        Ok(out)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
