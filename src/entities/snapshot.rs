// Read-only views handed across the facade as JSON.

use serde::Serialize;

use crate::domain::Weapon;

use super::{Projectile, Worm};

#[derive(Debug, Clone, Serialize)]
pub struct WormSnapshot {
    pub id: u32,
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub direction: f64,
    pub radius: f64,
    pub action_points: u32,
    pub max_action_points: u32,
    pub hit_points: u32,
    pub team: Option<String>,
    pub weapon: Weapon,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectileSnapshot {
    pub x: f64,
    pub y: f64,
    pub direction: f64,
    pub radius: f64,
    pub weapon: Weapon,
}

impl WormSnapshot {
    pub fn new(id: u32, w: &Worm) -> Self {
        let pos = w.position();
        Self {
            id,
            name: w.name().to_string(),
            x: pos.x,
            y: pos.y,
            direction: w.direction(),
            radius: w.radius(),
            action_points: w.action_points(),
            max_action_points: w.max_action_points(),
            hit_points: w.hit_points(),
            team: w.team().map(str::to_string),
            weapon: w.weapon(),
        }
    }
}

impl From<&Projectile> for ProjectileSnapshot {
    fn from(p: &Projectile) -> Self {
        let pos = p.position();
        Self {
            x: pos.x,
            y: pos.y,
            direction: p.direction(),
            radius: p.radius(),
            weapon: p.weapon(),
        }
    }
}
