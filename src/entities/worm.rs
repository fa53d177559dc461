use crate::core::angle::faces_downward;
use crate::core::{is_valid_direction, normalize_direction, ModelError, ModelResult, Vec2, FULL_TURN};
use crate::domain::constants::{
    sphere_mass, FULL_TURN_COST, GRAVITY, JUMP_FORCE_PER_ACTION_POINT, MIN_WORM_RADIUS,
    MOVE_COST_HORIZONTAL, MOVE_COST_VERTICAL, WORM_DENSITY,
};
use crate::domain::names::is_valid_worm_name;
use crate::domain::Weapon;
use crate::systems::{launch_speed, Trajectory};

use super::Ballistic;

/// A worm: a disc with a facing direction and two mass-derived budgets
///
/// Every mutator validates first and only then writes, so a rejected call leaves
/// the worm untouched. `jump` is the one exception: it always spends the budget.
#[derive(Clone, Debug)]
pub struct Worm {
    name: String,
    position: Vec2,
    direction: f64,
    radius: f64,
    action_points: u32,
    hit_points: u32,
    team: Option<String>,
    weapon: Weapon,
}

impl Worm {
    /// Create a worm with full action and hit points
    pub fn new(position: Vec2, direction: f64, radius: f64, name: &str) -> ModelResult<Self> {
        if position.is_nan() {
            return Err(ModelError::InvalidCoordinate { x: position.x, y: position.y });
        }
        if !is_valid_direction(direction) {
            return Err(ModelError::InvalidDirection(direction));
        }
        if !Self::is_valid_radius(radius) {
            return Err(ModelError::InvalidRadius { radius, minimum: MIN_WORM_RADIUS });
        }
        if !is_valid_worm_name(name) {
            return Err(ModelError::InvalidName(name.to_string()));
        }

        let max_points = Self::max_points_for(radius);
        Ok(Self {
            name: name.to_string(),
            position,
            direction,
            radius,
            action_points: max_points,
            hit_points: max_points,
            team: None,
            weapon: Weapon::default(),
        })
    }

    #[inline]
    pub fn is_valid_radius(radius: f64) -> bool {
        radius.is_finite() && radius >= MIN_WORM_RADIUS
    }

    fn max_points_for(radius: f64) -> u32 {
        sphere_mass(WORM_DENSITY, radius).round() as u32
    }

    // === Accessors ===
    pub fn name(&self) -> &str { &self.name }
    pub fn position(&self) -> Vec2 { self.position }
    pub fn direction(&self) -> f64 { self.direction }
    pub fn radius(&self) -> f64 { self.radius }
    pub fn action_points(&self) -> u32 { self.action_points }
    pub fn hit_points(&self) -> u32 { self.hit_points }
    pub fn team(&self) -> Option<&str> { self.team.as_deref() }
    pub fn weapon(&self) -> Weapon { self.weapon }

    pub fn mass(&self) -> f64 {
        sphere_mass(WORM_DENSITY, self.radius)
    }

    pub fn max_action_points(&self) -> u32 {
        Self::max_points_for(self.radius)
    }

    pub fn max_hit_points(&self) -> u32 {
        Self::max_points_for(self.radius)
    }

    pub fn is_alive(&self) -> bool {
        self.hit_points > 0
    }

    pub fn set_name(&mut self, name: &str) -> ModelResult<()> {
        if !is_valid_worm_name(name) {
            return Err(ModelError::InvalidName(name.to_string()));
        }
        self.name = name.to_string();
        Ok(())
    }

    /// Resize the worm; both budgets are clamped to the new maximum
    pub fn set_radius(&mut self, radius: f64) -> ModelResult<()> {
        if !Self::is_valid_radius(radius) {
            return Err(ModelError::InvalidRadius { radius, minimum: MIN_WORM_RADIUS });
        }
        self.radius = radius;
        let max = self.max_action_points();
        self.action_points = self.action_points.min(max);
        self.hit_points = self.hit_points.min(max);
        Ok(())
    }

    pub(crate) fn set_position(&mut self, position: Vec2) -> ModelResult<()> {
        if position.is_nan() {
            return Err(ModelError::InvalidCoordinate { x: position.x, y: position.y });
        }
        self.position = position;
        Ok(())
    }

    pub(crate) fn set_team(&mut self, team: Option<String>) {
        self.team = team;
    }

    // === Turning ===

    /// floor(60 · |Δθ mod 2π| / 2π)
    pub fn turn_cost(angle: f64) -> u32 {
        (FULL_TURN_COST * ((angle % FULL_TURN).abs() / FULL_TURN)).floor() as u32
    }

    pub fn can_turn(&self, angle: f64) -> bool {
        angle.is_finite() && Self::turn_cost(angle) <= self.action_points
    }

    pub fn turn(&mut self, angle: f64) -> ModelResult<()> {
        let new_direction = normalize_direction(self.direction + angle);
        if !is_valid_direction(new_direction) {
            return Err(ModelError::InvalidDirection(new_direction));
        }
        let cost = Self::turn_cost(angle);
        self.check_budget(cost)?;

        self.direction = new_direction;
        self.action_points -= cost;
        Ok(())
    }

    // === Moving ===

    /// steps · (|cos θ| + 4|sin θ|), rounded to whole action points
    pub fn move_cost(&self, steps: i32) -> u32 {
        let (sin, cos) = self.direction.sin_cos();
        let per_step = MOVE_COST_HORIZONTAL * cos.abs() + MOVE_COST_VERTICAL * sin.abs();
        (steps.max(0) as f64 * per_step).round() as u32
    }

    pub fn can_move(&self, steps: i32) -> bool {
        steps > 0 && self.move_cost(steps) <= self.action_points
    }

    /// Advance `steps` radii along the facing direction
    pub fn move_steps(&mut self, steps: i32) -> ModelResult<()> {
        if steps <= 0 {
            return Err(ModelError::NonPositiveSteps { steps });
        }
        let cost = self.move_cost(steps);
        self.check_budget(cost)?;

        let target = self.position + Vec2::from_angle(self.direction) * (self.radius * steps as f64);
        self.set_position(target)?;
        self.action_points -= cost;
        Ok(())
    }

    // === Jumping ===

    pub fn can_jump(&self) -> bool {
        !faces_downward(self.direction)
    }

    /// Jump to where the closed-form trajectory lands
    ///
    /// The remaining action points are spent even when the jump is rejected.
    pub fn jump(&mut self) -> ModelResult<Vec2> {
        let trajectory = self.trajectory();
        self.action_points = 0;
        self.launch_check()?;

        let landing = trajectory.landing();
        self.set_position(landing)?;
        Ok(landing)
    }

    /// Jump force: 5 N per action point plus the worm's own weight
    pub fn jump_force(&self) -> f64 {
        JUMP_FORCE_PER_ACTION_POINT * self.action_points as f64 + self.mass() * GRAVITY
    }

    // === Budgets ===

    fn check_budget(&self, cost: u32) -> ModelResult<()> {
        if cost > self.action_points {
            return Err(ModelError::InsufficientActionPoints {
                required: cost,
                available: self.action_points,
            });
        }
        Ok(())
    }

    pub(crate) fn spend_action_points(&mut self, cost: u32) -> ModelResult<()> {
        self.check_budget(cost)?;
        self.action_points -= cost;
        Ok(())
    }

    pub fn restore_action_points(&mut self) {
        self.action_points = self.max_action_points();
    }

    /// Lose `amount` hit points, never dropping below zero
    pub fn damage(&mut self, amount: u32) {
        self.hit_points = self.hit_points.saturating_sub(amount);
    }

    pub fn heal(&mut self, amount: u32) {
        self.hit_points = self.hit_points.saturating_add(amount).min(self.max_hit_points());
    }

    pub fn select_next_weapon(&mut self) {
        self.weapon = self.weapon.next();
    }
}

impl Ballistic for Worm {
    fn trajectory(&self) -> Trajectory {
        Trajectory::new(
            self.position,
            launch_speed(self.jump_force(), self.mass()),
            self.direction,
        )
    }

    fn launch_check(&self) -> ModelResult<()> {
        if faces_downward(self.direction) {
            return Err(ModelError::JumpFacingDown(self.direction));
        }
        Ok(())
    }
}
