use wasm_bindgen::prelude::*;

use crate::core::Vec2;
use crate::spatial::TerrainMap;

use super::{GameCore, GameSettings, WormId};

fn to_js(e: impl ToString) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(to_js)
}

#[wasm_bindgen]
pub struct Game {
    core: GameCore,
}

#[wasm_bindgen]
impl Game {
    /// Create a game over a `rows x cols` grid given row-major, top row first.
    /// Non-zero cells are passable.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64, rows: usize, cols: usize, cells: Vec<u8>) -> Result<Game, JsValue> {
        let passable = cells.iter().map(|&c| c != 0).collect();
        let terrain = TerrainMap::from_flat(width, height, rows, cols, passable).map_err(to_js)?;
        Ok(Self { core: GameCore::new(terrain, GameSettings::default()) })
    }

    /// `#` is rock, anything else is air; one line per row
    #[wasm_bindgen(js_name = fromAscii)]
    pub fn from_ascii(width: f64, height: f64, text: &str) -> Result<Game, JsValue> {
        let terrain = TerrainMap::from_ascii(width, height, text).map_err(to_js)?;
        Ok(Self { core: GameCore::new(terrain, GameSettings::default()) })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f64 { self.core.terrain().width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f64 { self.core.terrain().height() }

    #[wasm_bindgen(getter)]
    pub fn worm_count(&self) -> usize { self.core.worm_count() }

    pub fn worm_ids(&self) -> Vec<u32> {
        self.core.worm_ids()
    }

    pub fn load_settings(&mut self, json: &str) -> Result<(), JsValue> {
        let settings = GameSettings::from_json(json).map_err(to_js)?;
        self.core.apply_settings(settings);
        Ok(())
    }

    pub fn settings_json(&self) -> String {
        self.core.settings().to_json()
    }

    // === Terrain queries ===

    pub fn is_passable(&self, x: f64, y: f64, radius: f64) -> bool {
        self.core.terrain().is_passable_area(Vec2::new(x, y), radius)
    }

    pub fn is_adjacent(&self, x: f64, y: f64, radius: f64) -> bool {
        self.core.terrain().is_adjacent(Vec2::new(x, y), radius)
    }

    // === Worms ===

    /// Returns the new worm's handle
    pub fn add_worm(&mut self, x: f64, y: f64, direction: f64, radius: f64, name: &str) -> Result<WormId, JsValue> {
        self.core.add_worm(Vec2::new(x, y), direction, radius, name).map_err(to_js)
    }

    pub fn add_worm_at_random(&mut self, radius: f64, name: &str) -> Result<WormId, JsValue> {
        self.core.add_worm_at_random(radius, name).map_err(to_js)
    }

    pub fn remove_worm(&mut self, id: WormId) -> Result<(), JsValue> {
        self.core.remove_worm(id).map(|_| ()).map_err(to_js)
    }

    pub fn worm_json(&self, id: WormId) -> Result<String, JsValue> {
        let snapshot = self.core.worm_snapshot(id).map_err(to_js)?;
        to_json(&snapshot)
    }

    pub fn can_turn(&self, id: WormId, angle: f64) -> Result<bool, JsValue> {
        Ok(self.core.worm(id).map_err(to_js)?.can_turn(angle))
    }

    pub fn turn_worm(&mut self, id: WormId, angle: f64) -> Result<(), JsValue> {
        self.core.turn_worm(id, angle).map_err(to_js)
    }

    pub fn can_move(&self, id: WormId, steps: i32) -> Result<bool, JsValue> {
        Ok(self.core.worm(id).map_err(to_js)?.can_move(steps))
    }

    pub fn move_worm(&mut self, id: WormId, steps: i32) -> Result<(), JsValue> {
        self.core.move_worm(id, steps).map_err(to_js)
    }

    pub fn can_jump(&self, id: WormId) -> Result<bool, JsValue> {
        Ok(self.core.worm(id).map_err(to_js)?.can_jump())
    }

    /// Jump and return the landing point as `[x, y]`
    pub fn jump_worm(&mut self, id: WormId) -> Result<Vec<f64>, JsValue> {
        let p = self.core.jump_worm(id).map_err(to_js)?;
        Ok(vec![p.x, p.y])
    }

    pub fn jump_time(&self, id: WormId) -> Result<f64, JsValue> {
        self.core.jump_time(id).map_err(to_js)
    }

    /// Position `t` seconds into the jump as `[x, y]`
    pub fn jump_step(&self, id: WormId, t: f64) -> Result<Vec<f64>, JsValue> {
        let p = self.core.jump_step(id, t).map_err(to_js)?;
        Ok(vec![p.x, p.y])
    }

    pub fn can_fall(&self, id: WormId) -> Result<bool, JsValue> {
        self.core.can_fall(id).map_err(to_js)
    }

    pub fn fall(&mut self, id: WormId) -> Result<f64, JsValue> {
        self.core.fall(id).map_err(to_js)
    }

    pub fn select_next_weapon(&mut self, id: WormId) -> Result<(), JsValue> {
        self.core.select_next_weapon(id).map_err(to_js)
    }

    // === Shooting ===

    pub fn can_shoot(&self, id: WormId) -> Result<bool, JsValue> {
        self.core.can_shoot(id).map_err(to_js)
    }

    /// Fire and return the shot report as JSON
    pub fn shoot(&mut self, id: WormId, propulsion_yield: u32) -> Result<String, JsValue> {
        let report = self.core.shoot(id, propulsion_yield).map_err(to_js)?;
        to_json(&report)
    }

    pub fn projectile_json(&self) -> Result<Option<String>, JsValue> {
        self.core.projectile_snapshot().map(|p| to_json(&p)).transpose()
    }

    // === Teams ===

    pub fn add_team(&mut self, name: &str) -> Result<(), JsValue> {
        self.core.add_team(name).map_err(to_js)
    }

    pub fn join_team(&mut self, id: WormId, team: &str) -> Result<(), JsValue> {
        self.core.join_team(id, team).map_err(to_js)
    }

    pub fn teams_json(&self) -> Result<String, JsValue> {
        to_json(&self.core.teams())
    }

    // === Turns ===

    pub fn start_game(&mut self) -> Result<WormId, JsValue> {
        self.core.start_game().map_err(to_js)
    }

    pub fn next_turn(&mut self) -> Result<WormId, JsValue> {
        self.core.next_turn().map_err(to_js)
    }

    pub fn current_worm(&self) -> Option<WormId> {
        self.core.current_worm()
    }

    pub fn winner(&self) -> Option<String> {
        self.core.winner()
    }

    pub fn is_game_finished(&self) -> bool {
        self.core.is_game_finished()
    }
}
