//! CellGrid Engine - falling-sand cellular automaton
//!
//! Architecture:
//! - core/        - logging macros
//! - domain/      - materials, prototype registry, config loading
//! - spatial/     - slot grid and the deduplicating update queue
//! - systems/     - per-category behaviors (grain, liquid, gas)
//! - simulation/  - frame driver and the wasm-bindgen `World` facade

// Logging macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod spatial;
pub mod domain;
pub mod systems;
pub mod simulation;

// Compatibility re-exports (short paths used throughout the crate)
pub use spatial::grid;
pub use spatial::update_queue;
pub use domain::material;
pub use domain::registry;
pub use domain::config;
pub use systems::behaviors;

use wasm_bindgen::prelude::*;

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

    console_log!("cellgrid engine {} initialized", version());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::config::SimConfig;
pub use domain::material::{Category, Cell, Color, MaterialTraits};
pub use grid::Grid;
pub use simulation::{PerfStats, Simulation, World};
