use serde::Serialize;
use tracing::info;

use crate::core::{ModelError, ModelResult, Vec2};
use crate::entities::{Ballistic, Projectile};

use super::{GameCore, WormId};

/// Cap on flight samples so a degenerate trajectory cannot spin forever
const MAX_FLIGHT_STEPS: u32 = 1_000_000;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ShotReport {
    /// Where the projectile stopped
    pub impact: Vec2,
    /// Worm that took the damage, if any
    pub hit: Option<WormId>,
    /// Projectile flew out of the world without touching anything
    pub left_world: bool,
}

pub(super) fn can_shoot(game: &GameCore, id: WormId) -> ModelResult<bool> {
    let worm = game.worm(id)?;
    Ok(worm.action_points() >= worm.weapon().props().action_point_cost
        && game.terrain.is_passable_area(worm.position(), worm.radius()))
}

/// Fire the worm's selected weapon and fly the projectile until it hits a worm,
/// hits terrain or leaves the world
pub(super) fn shoot(game: &mut GameCore, id: WormId, propulsion_yield: u32) -> ModelResult<ShotReport> {
    let dt = game.settings.projectile_time_step;
    if !(dt.is_finite() && dt > 0.0) {
        return Err(ModelError::InvalidTimeStep(dt));
    }

    let worm = game.worm(id)?;
    let cost = worm.weapon().props().action_point_cost;
    if worm.action_points() < cost {
        return Err(ModelError::InsufficientActionPoints {
            required: cost,
            available: worm.action_points(),
        });
    }
    if !game.terrain.is_passable_area(worm.position(), worm.radius()) {
        return Err(ModelError::ShooterObstructed);
    }

    let muzzle = worm.position() + Vec2::from_angle(worm.direction()) * worm.radius();
    let mut projectile = Projectile::new(muzzle, worm.direction(), worm.weapon(), propulsion_yield)?;
    game.worm_mut(id)?.spend_action_points(cost)?;

    let trajectory = projectile.trajectory();
    let radius = projectile.radius();
    // a sub-step no longer than this cannot skip a whole cell
    let max_substep = radius + game.terrain.cell_width().min(game.terrain.cell_height());
    let mut report = ShotReport { impact: muzzle, hit: None, left_world: false };

    let mut prev = muzzle;
    'flight: for step in 1..=MAX_FLIGHT_STEPS {
        let next = trajectory.position_unbounded(dt * step as f64);
        let pieces = ((next.distance(prev) / max_substep).ceil() as u32).max(1);

        let mut from = prev;
        for k in 1..=pieces {
            let to = if k == pieces {
                next
            } else {
                prev + (next - prev) * (k as f64 / pieces as f64)
            };

            if let Some((victim, contact)) = worm_hit_on_segment(game, id, from, to, radius) {
                report.impact = contact;
                report.hit = Some(victim);
                break 'flight;
            }
            report.impact = to;
            if !game.terrain.is_inside_world(to, radius) {
                report.left_world = true;
                break 'flight;
            }
            if !game.terrain.is_passable_area(to, radius) {
                break 'flight;
            }
            from = to;
        }
        prev = next;
    }

    projectile.set_position(report.impact)?;
    info!(
        shooter_id = id,
        weapon = projectile.weapon().name(),
        x = report.impact.x,
        y = report.impact.y,
        hit = ?report.hit,
        "projectile stopped"
    );

    if let Some(victim) = report.hit {
        let damage = projectile.damage();
        game.worm_mut(victim)?.damage(damage);
        info!(victim_id = victim, shooter_id = id, damage, "worm hit");
        game.retire_if_out_of_play(victim)?;
    }
    game.projectile = Some(projectile);
    Ok(report)
}

/// Worm other than the shooter that the projectile's disc first touches while
/// moving from `from` to `to`, with the projectile centre at closest approach
fn worm_hit_on_segment(
    game: &GameCore,
    shooter: WormId,
    from: Vec2,
    to: Vec2,
    radius: f64,
) -> Option<(WormId, Vec2)> {
    let path = to - from;
    let len2 = path.length_squared();

    game.live_worms()
        .filter(|&(wid, _)| wid != shooter)
        .filter_map(|(wid, w)| {
            let u = if len2 > 0.0 {
                ((w.position() - from).dot(path) / len2).clamp(0.0, 1.0)
            } else {
                0.0
            };
            let closest = from + path * u;
            (closest.distance(w.position()) < w.radius() + radius).then_some((u, wid, closest))
        })
        .min_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, wid, closest)| (wid, closest))
}
