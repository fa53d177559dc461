use serde::Serialize;
use tracing::info;

use crate::core::{ModelError, ModelResult};
use crate::domain::names::is_valid_team_name;

use super::{GameCore, WormId};

/// Named group of worms; membership mirrors each worm's `team` field
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Team {
    name: String,
    members: Vec<WormId>,
}

impl Team {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn members(&self) -> &[WormId] {
        &self.members
    }

    pub(super) fn add_member(&mut self, id: WormId) {
        if !self.members.contains(&id) {
            self.members.push(id);
        }
    }

    pub(super) fn remove_member(&mut self, id: WormId) {
        self.members.retain(|&m| m != id);
    }
}

pub(super) fn add_team(game: &mut GameCore, name: &str) -> ModelResult<()> {
    if !is_valid_team_name(name) {
        return Err(ModelError::InvalidName(name.to_string()));
    }
    if game.teams.iter().any(|t| t.name == name) {
        return Err(ModelError::DuplicateTeam(name.to_string()));
    }
    if game.teams.len() >= game.settings.max_teams {
        return Err(ModelError::TooManyTeams(game.settings.max_teams));
    }
    game.teams.push(Team { name: name.to_string(), members: Vec::new() });
    info!(team = name, "team added");
    Ok(())
}

/// Move the worm into `team`, leaving whatever team it was in before
pub(super) fn join_team(game: &mut GameCore, id: WormId, team: &str) -> ModelResult<()> {
    let target = game
        .teams
        .iter()
        .position(|t| t.name == team)
        .ok_or_else(|| ModelError::UnknownTeam(team.to_string()))?;

    let previous = game.worm(id)?.team().map(str::to_string);
    if let Some(prev) = previous {
        if let Some(t) = game.teams.iter_mut().find(|t| t.name == prev) {
            t.remove_member(id);
        }
    }

    game.teams[target].add_member(id);
    game.worm_mut(id)?.set_team(Some(team.to_string()));
    info!(worm_id = id, team, "worm joined team");
    Ok(())
}
