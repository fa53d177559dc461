//! Domain - game rules expressed as constants and lookup tables

pub mod constants;
pub mod names;
pub mod weapons;

pub use weapons::{Weapon, WeaponProps, ALL_WEAPONS};
