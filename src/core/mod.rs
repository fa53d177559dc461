//! Core - shared value types used by every other layer
//!
//! - error:  the single `ModelError` family returned by game actions
//! - angle:  orientation normalisation
//! - vec2:   2D vector in world metres

pub mod angle;
pub mod error;
pub mod vec2;

pub use angle::{is_valid_direction, normalize_direction, FULL_TURN};
pub use error::{ModelError, ModelResult};
pub use vec2::Vec2;
