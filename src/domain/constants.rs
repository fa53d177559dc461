//! Physical and rules constants shared by worms and projectiles.

/// Standard gravity (m/s²)
pub const GRAVITY: f64 = 9.80665;

/// Worm density (kg/m³)
pub const WORM_DENSITY: f64 = 1062.0;

/// Projectile density (kg/m³)
pub const PROJECTILE_DENSITY: f64 = 7800.0;

/// Smallest radius a worm may have (m)
pub const MIN_WORM_RADIUS: f64 = 0.25;

/// Seconds a jump or shot force is applied for
pub const FORCE_DURATION: f64 = 0.5;

/// Newtons of jump force bought by each remaining action point
pub const JUMP_FORCE_PER_ACTION_POINT: f64 = 5.0;

/// Action points a full revolution costs
pub const FULL_TURN_COST: f64 = 60.0;

/// Per-step move cost weights: |cos θ| * horizontal + |sin θ| * vertical
pub const MOVE_COST_HORIZONTAL: f64 = 1.0;
pub const MOVE_COST_VERTICAL: f64 = 4.0;

/// Mass of a uniform sphere of `radius` metres.
#[inline]
pub fn sphere_mass(density: f64, radius: f64) -> f64 {
    density * 4.0 / 3.0 * std::f64::consts::PI * radius.powi(3)
}

/// Radius of a uniform sphere of `mass` kilograms.
#[inline]
pub fn sphere_radius(density: f64, mass: f64) -> f64 {
    (3.0 * mass / (4.0 * std::f64::consts::PI * density)).cbrt()
}
