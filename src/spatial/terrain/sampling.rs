use super::*;

use crate::core::FULL_TURN;

/// Samples around each ring of a disc
pub const ANGULAR_STEPS: usize = 16;

/// Rings from centre to rim; each ring is 5% of the radius further out
pub const RADIAL_STEPS: usize = 20;

/// An entity touches terrain when a disc this much larger is blocked
pub const ADJACENCY_SCALE: f64 = 1.1;

impl TerrainMap {
    /// A point is passable iff its cell is. Points outside the world are open sky,
    /// NaN points are never passable.
    #[inline]
    pub fn is_passable_point(&self, p: Vec2) -> bool {
        if p.is_nan() {
            return false;
        }
        match self.cell_of(p) {
            Some((row, col)) => self.is_cell_passable(row, col),
            None => true,
        }
    }

    /// Approximate disc test: every sample on a 16-angle x 5%-radius polar grid
    /// must be passable
    pub fn is_passable_area(&self, centre: Vec2, radius: f64) -> bool {
        if radius.is_nan() || !self.is_passable_point(centre) {
            return false;
        }
        for ring in 1..=RADIAL_STEPS {
            let r = radius * ring as f64 / RADIAL_STEPS as f64;
            for k in 0..ANGULAR_STEPS {
                let theta = FULL_TURN * k as f64 / ANGULAR_STEPS as f64;
                if !self.is_passable_point(centre + Vec2::from_angle(theta) * r) {
                    return false;
                }
            }
        }
        true
    }

    /// Footprint is clear but the 10%-wider disc touches impassable terrain
    pub fn is_adjacent(&self, centre: Vec2, radius: f64) -> bool {
        self.is_passable_area(centre, radius)
            && !self.is_passable_area(centre, radius * ADJACENCY_SCALE)
    }
}
