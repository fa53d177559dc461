//! Ballistics - closed-form jump kinematics
//!
//! A body launched with speed `v` along direction `θ` under gravity `g`:
//! - range        d = v² sin(2θ) / g
//! - flight time  T = d / (v cos θ)
//! - position     p(t) = p₀ + (v cos θ · t, v sin θ · t − ½ g t²)
//!
//! Worms and projectiles only differ in how they obtain `v`.

use crate::core::{ModelError, ModelResult, Vec2};
use crate::domain::constants::{FORCE_DURATION, GRAVITY};

/// Launch speed of `mass` kilograms pushed by `force` newtons for `FORCE_DURATION` seconds
#[inline]
pub fn launch_speed(force: f64, mass: f64) -> f64 {
    force / mass * FORCE_DURATION
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Trajectory {
    pub origin: Vec2,
    pub speed: f64,
    pub direction: f64,
}

impl Trajectory {
    pub fn new(origin: Vec2, speed: f64, direction: f64) -> Self {
        Self { origin, speed, direction }
    }

    /// Horizontal distance covered before returning to the launch height
    pub fn distance(&self) -> f64 {
        self.speed * self.speed * (2.0 * self.direction).sin() / GRAVITY
    }

    pub fn flight_time(&self) -> f64 {
        self.distance() / (self.speed * self.direction.cos())
    }

    /// Where the body comes back down to its launch height
    pub fn landing(&self) -> Vec2 {
        Vec2::new(self.origin.x + self.distance(), self.origin.y)
    }

    /// Position `t` seconds into the flight; `t` must lie in `[0, flight_time]`
    pub fn position_at(&self, t: f64) -> ModelResult<Vec2> {
        let flight_time = self.flight_time();
        if !(t >= 0.0 && t <= flight_time) {
            return Err(ModelError::TimeOutsideFlight { time: t, flight_time });
        }
        Ok(self.position_unbounded(t))
    }

    /// Position `t` seconds after launch, ignoring where the closed-form flight ends
    #[inline]
    pub fn position_unbounded(&self, t: f64) -> Vec2 {
        let (sin, cos) = self.direction.sin_cos();
        Vec2::new(
            self.origin.x + self.speed * cos * t,
            self.origin.y + self.speed * sin * t - 0.5 * GRAVITY * t * t,
        )
    }
}
