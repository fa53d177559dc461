//! Entities - worms and the projectiles they fire
//!
//! Both are flat structs. The only behaviour they share is flying along a
//! `Trajectory`, which the `Ballistic` trait exposes.

mod projectile;
mod snapshot;
mod worm;

pub use projectile::Projectile;
pub use snapshot::{ProjectileSnapshot, WormSnapshot};
pub use worm::Worm;

use crate::core::{ModelResult, Vec2};
use crate::systems::Trajectory;

pub trait Ballistic {
    /// Trajectory the entity would follow if launched right now
    fn trajectory(&self) -> Trajectory;

    /// Rejects launches the entity is not allowed to make
    fn launch_check(&self) -> ModelResult<()> {
        Ok(())
    }

    fn jump_time(&self) -> ModelResult<f64> {
        self.launch_check()?;
        Ok(self.trajectory().flight_time())
    }

    fn jump_step(&self, t: f64) -> ModelResult<Vec2> {
        self.launch_check()?;
        self.trajectory().position_at(t)
    }
}
