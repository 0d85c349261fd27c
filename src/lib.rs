//! Sandcell Engine - falling sand cellular automaton in WASM
//!
//! Architecture:
//! - core/        - errors, host logging, randomness
//! - spatial/     - grid storage
//! - domain/      - element definitions and the content registry
//! - systems/     - per-material update rules
//! - simulation/  - tick scheduling, render extraction, brush, JS facade

pub mod core;
pub mod spatial;
pub mod domain;
pub mod systems;
pub mod simulation;

pub mod world {
    pub use crate::simulation::*;
}

// Short paths used across the crate
pub use spatial::grid;
pub use domain::elements;
pub use domain::content;
pub use systems::behaviors;

use wasm_bindgen::prelude::*;

// Thread pool initialization for the parallel render pass in the browser
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

    crate::core::console::log("sandcell engine initialized");
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::{EngineError, SimRng};
pub use domain::content::ContentRegistry;
pub use domain::elements::{ElementClass, ElementDefinition, ElementId, Rgb};
pub use grid::Grid;
pub use simulation::{EngineConfig, PointerState, TickHook, World, WorldCore};

// Built-in element ids for JS
#[wasm_bindgen]
pub fn el_air() -> u8 { domain::elements::EL_AIR }
#[wasm_bindgen]
pub fn el_sand() -> u8 { domain::elements::EL_SAND }
#[wasm_bindgen]
pub fn el_water() -> u8 { domain::elements::EL_WATER }
#[wasm_bindgen]
pub fn el_wood() -> u8 { domain::elements::EL_WOOD }
