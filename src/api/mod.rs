//! Public API surface handed to JS hosts

pub mod wasm;
