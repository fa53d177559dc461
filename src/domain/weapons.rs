//! Weapon table - static mass / force / damage / cost lookup
//!
//! The engine only ever reads plain numbers from here.

use serde::{Deserialize, Serialize};

use super::constants::{sphere_radius, PROJECTILE_DENSITY};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weapon {
    #[default]
    Rifle,
    Bazooka,
}

/// Constant properties of a weapon's projectile
#[derive(Clone, Copy, Debug)]
pub struct WeaponProps {
    pub name: &'static str,
    /// Projectile mass (kg)
    pub mass: f64,
    pub action_point_cost: u32,
    pub damage: u32,
    /// Force at yield 0 (N)
    pub min_force: f64,
    /// Force at yield 100 (N)
    pub max_force: f64,
}

pub const WEAPON_DATA: [WeaponProps; 2] = [
    WeaponProps {
        name: "Rifle",
        mass: 0.010,
        action_point_cost: 10,
        damage: 20,
        min_force: 1.5,
        max_force: 1.5,
    },
    WeaponProps {
        name: "Bazooka",
        mass: 0.300,
        action_point_cost: 50,
        damage: 80,
        min_force: 2.5,
        max_force: 9.5,
    },
];

pub const ALL_WEAPONS: [Weapon; 2] = [Weapon::Rifle, Weapon::Bazooka];

impl Weapon {
    #[inline]
    pub fn props(self) -> &'static WeaponProps {
        &WEAPON_DATA[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.props().name
    }

    /// Propulsion force for a yield percentage (clamped to 0..=100)
    pub fn force(self, propulsion_yield: u32) -> f64 {
        let p = self.props();
        let y = propulsion_yield.min(100) as f64 / 100.0;
        p.min_force + (p.max_force - p.min_force) * y
    }

    pub fn projectile_radius(self) -> f64 {
        sphere_radius(PROJECTILE_DENSITY, self.props().mass)
    }

    /// Next weapon in table order, wrapping around
    pub fn next(self) -> Weapon {
        ALL_WEAPONS[(self as usize + 1) % ALL_WEAPONS.len()]
    }
}
