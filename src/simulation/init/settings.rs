use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tunables a host can override with a JSON document; missing fields keep
/// their defaults
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Seed for worm placement; physics never draws from the RNG
    pub seed: u64,
    /// Seconds between projectile flight samples
    pub projectile_time_step: f64,
    /// Hit points lost per metre fallen
    pub fall_damage_per_metre: f64,
    /// Hit points a worm regains when its turn starts
    pub turn_hit_point_bonus: u32,
    pub max_teams: usize,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            seed: 12345,
            projectile_time_step: 0.01,
            fall_damage_per_metre: 3.0,
            turn_hit_point_bonus: 10,
            max_teams: 10,
        }
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings are not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("projectile_time_step must be positive and finite, got {0}")]
    TimeStep(f64),
    #[error("fall_damage_per_metre must be non-negative and finite, got {0}")]
    FallDamage(f64),
}

impl GameSettings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: GameSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let dt = self.projectile_time_step;
        if !(dt.is_finite() && dt > 0.0) {
            return Err(SettingsError::TimeStep(dt));
        }
        let fall = self.fall_damage_per_metre;
        if !(fall.is_finite() && fall >= 0.0) {
            return Err(SettingsError::FallDamage(fall));
        }
        Ok(())
    }
}
