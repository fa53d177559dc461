use std::f64::consts::TAU;

/// One full revolution in radians.
pub const FULL_TURN: f64 = TAU;

/// Map any finite angle into `[0, 2π)`.
///
/// Non-finite input is returned unchanged so that `is_valid_direction` can reject it.
#[inline]
pub fn normalize_direction(theta: f64) -> f64 {
    if !theta.is_finite() {
        return theta;
    }
    let wrapped = theta.rem_euclid(FULL_TURN);
    // rem_euclid can round up to exactly 2π for tiny negative inputs
    if wrapped >= FULL_TURN {
        0.0
    } else {
        wrapped
    }
}

#[inline]
pub fn is_valid_direction(theta: f64) -> bool {
    theta.is_finite() && (0.0..FULL_TURN).contains(&theta)
}

/// Facing strictly below the horizon: θ ∈ (π, 2π).
#[inline]
pub fn faces_downward(theta: f64) -> bool {
    theta > std::f64::consts::PI && theta < FULL_TURN
}
