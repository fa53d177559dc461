//! Wormfield Engine - turn-based artillery game model in WASM
//!
//! Worms move, turn, jump, fall and shoot across a tile terrain. Every action
//! is paid for from a mass-derived action-point budget.
//!
//! Architecture:
//! - core/          - Value types, angles, the error family
//! - domain/        - Physical constants, weapon table, naming rules
//! - systems/       - Ballistics shared by worms and projectiles
//! - entities/      - Worm and projectile state plus read-only snapshots
//! - spatial/       - Terrain passability sampling
//! - simulation/    - Game core: handles, teams, turns, placement
//! - api/           - Public API

pub mod core;
pub mod domain;
pub mod systems;
pub mod entities;
pub mod spatial;
pub mod simulation;
pub mod api;

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"Wormfield WASM engine initialized".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use api::wasm::Game;
pub use crate::core::{ModelError, ModelResult, Vec2};
pub use domain::Weapon;
pub use entities::{Ballistic, Projectile, Worm};
pub use simulation::{GameCore, GameSettings, ShotReport, WormId};
pub use spatial::TerrainMap;

/// Gravitational acceleration used by every trajectory, for JS
#[wasm_bindgen]
pub fn gravity() -> f64 { domain::constants::GRAVITY }
#[wasm_bindgen]
pub fn min_worm_radius() -> f64 { domain::constants::MIN_WORM_RADIUS }
