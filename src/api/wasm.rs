// The wasm-bindgen facade lives next to the core it wraps; this is its public path.
pub use crate::simulation::Game;
