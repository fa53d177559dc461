use crate::core::{is_valid_direction, ModelError, ModelResult, Vec2};
use crate::domain::Weapon;
use crate::systems::{launch_speed, Trajectory};

use super::Ballistic;

/// A fired projectile: mass and size come from its weapon, speed from the
/// propulsion yield it was fired with
#[derive(Clone, Debug)]
pub struct Projectile {
    position: Vec2,
    direction: f64,
    weapon: Weapon,
    force: f64,
}

impl Projectile {
    pub fn new(position: Vec2, direction: f64, weapon: Weapon, propulsion_yield: u32) -> ModelResult<Self> {
        if position.is_nan() {
            return Err(ModelError::InvalidCoordinate { x: position.x, y: position.y });
        }
        if !is_valid_direction(direction) {
            return Err(ModelError::InvalidDirection(direction));
        }
        Ok(Self {
            position,
            direction,
            weapon,
            force: weapon.force(propulsion_yield),
        })
    }

    pub fn position(&self) -> Vec2 { self.position }
    pub fn direction(&self) -> f64 { self.direction }
    pub fn weapon(&self) -> Weapon { self.weapon }
    pub fn force(&self) -> f64 { self.force }

    pub fn mass(&self) -> f64 {
        self.weapon.props().mass
    }

    pub fn radius(&self) -> f64 {
        self.weapon.projectile_radius()
    }

    pub fn damage(&self) -> u32 {
        self.weapon.props().damage
    }

    pub(crate) fn set_position(&mut self, position: Vec2) -> ModelResult<()> {
        if position.is_nan() {
            return Err(ModelError::InvalidCoordinate { x: position.x, y: position.y });
        }
        self.position = position;
        Ok(())
    }

    /// Move to where the closed-form trajectory returns to launch height
    pub fn jump(&mut self) -> ModelResult<Vec2> {
        let landing = self.trajectory().landing();
        self.set_position(landing)?;
        Ok(landing)
    }
}

impl Ballistic for Projectile {
    fn trajectory(&self) -> Trajectory {
        Trajectory::new(self.position, launch_speed(self.force, self.mass()), self.direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::constants::GRAVITY;
    use std::f64::consts::FRAC_PI_4;

    #[test]
    fn rifle_bullet_speed() {
        let p = Projectile::new(Vec2::zero(), 0.0, Weapon::Rifle, 0).unwrap();
        // 1.5 N on 10 g for half a second
        assert!((p.trajectory().speed - 75.0).abs() < 1e-9);
    }

    #[test]
    fn bazooka_jump_uses_yield() {
        let mut p = Projectile::new(Vec2::zero(), FRAC_PI_4, Weapon::Bazooka, 100).unwrap();
        let v = 9.5 / 0.3 * 0.5;
        let landing = p.jump().unwrap();
        assert!((landing.x - v * v / GRAVITY).abs() < 1e-6);
        assert_eq!(p.position(), landing);
    }

    #[test]
    fn rejects_invalid_launch_state() {
        assert!(Projectile::new(Vec2::new(0.0, f64::NAN), 0.0, Weapon::Rifle, 0).is_err());
        assert!(Projectile::new(Vec2::zero(), -1.0, Weapon::Rifle, 0).is_err());
    }
}
