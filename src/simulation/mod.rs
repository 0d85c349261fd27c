//! World - one falling-sand simulation
//!
//! A tick runs three phases in order, never overlapping:
//! 1. update pass: every cell visited once, bottom row first, right to left
//! 2. render: base color + per-cell shade into the ABGR color buffer
//! 3. paint: the brush applies the current pointer state
//!
//! Tick hooks run after all three, with read access to the grid.

use std::sync::Arc;

use crate::core::{EngineError, SimRng};
use crate::domain::content::ContentRegistry;
use crate::elements::{ElementDefinition, ElementId};
use crate::grid::Grid;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/update.rs"]
mod update;
#[path = "step/step.rs"]
mod step;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "commands/commands.rs"]
mod commands;
#[path = "commands/paint.rs"]
mod paint;
#[path = "input/pointer.rs"]
mod pointer;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::World;
pub use perf_stats::PerfStats;
pub use pointer::PointerState;
pub use settings::EngineConfig;
pub use update::{update_pass, PassCounters};

use perf_timer::PerfTimer;

/// Observer invoked once per tick, after painting.
pub trait TickHook {
    fn after_tick(&mut self, frame: u64, grid: &Grid, content: &ContentRegistry);
}

impl<F> TickHook for F
where
    F: FnMut(u64, &Grid, &ContentRegistry),
{
    fn after_tick(&mut self, frame: u64, grid: &Grid, content: &ContentRegistry) {
        (*self)(frame, grid, content)
    }
}

pub(crate) struct RenderBuffers {
    pub(crate) colors: Vec<u32>,
}

/// The simulation world
pub struct WorldCore {
    content: Arc<ContentRegistry>,
    grid: Grid,
    render: RenderBuffers,
    pointer: PointerState,
    hooks: Vec<Box<dyn TickHook>>,

    // Settings
    shade_seed: u32,

    // State
    frame: u64,
    rng: SimRng,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl WorldCore {
    /// Create a new world with given dimensions and default settings
    pub fn new(width: u32, height: u32) -> Result<Self, EngineError> {
        init::create_world_core(EngineConfig::new(width, height))
    }

    pub fn from_config(config: EngineConfig) -> Result<Self, EngineError> {
        init::create_world_core(config)
    }

    pub fn from_config_json(json: &str) -> Result<Self, EngineError> {
        init::create_world_core(EngineConfig::from_json(json)?)
    }

    /// Register one extension material. Call before the first `step`.
    pub fn register(&mut self, def: ElementDefinition) -> Result<ElementId, EngineError> {
        Arc::make_mut(&mut self.content).register(def)
    }

    /// Register a JSON bundle of extension materials, all or nothing.
    pub fn register_bundle_json(&mut self, json: &str) -> Result<Vec<ElementId>, EngineError> {
        Arc::make_mut(&mut self.content).register_bundle_json(json)
    }

    pub fn content(&self) -> &ContentRegistry { &self.content }

    pub fn grid(&self) -> &Grid { &self.grid }

    pub fn width(&self) -> u32 { self.grid.width() }

    pub fn height(&self) -> u32 { self.grid.height() }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn shade_seed(&self) -> u32 { self.shade_seed }

    /// Cells holding anything other than the empty material.
    pub fn particle_count(&self) -> usize {
        self.grid
            .cells()
            .iter()
            .filter(|&&id| !self.content.is_empty_id(id))
            .count()
    }

    pub fn pointer(&self) -> &PointerState { &self.pointer }

    /// Host input layer writes here before each `step`.
    pub fn pointer_mut(&mut self) -> &mut PointerState { &mut self.pointer }

    pub fn set_pointer(&mut self, pointer: PointerState) {
        self.pointer = pointer;
    }

    pub fn add_hook<H>(&mut self, hook: H)
    where
        H: TickHook + 'static,
    {
        self.hooks.push(Box::new(hook));
    }

    /// Place `name` at `(x, y)`. Unknown names and off-grid cells do nothing.
    pub fn set_at_position(&mut self, x: i32, y: i32, name: &str) -> bool {
        commands::set_at_position(self, x, y, name)
    }

    /// Fill a `size`x`size` square centered on `(cx, cy)` with `name`.
    pub fn fill_block(&mut self, cx: i32, cy: i32, size: u32, name: &str) -> usize {
        commands::fill_block(self, cx, cy, size, name)
    }

    /// Reset every cell to the empty material and the frame counter to zero
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    /// Advance one tick: update pass, render, paint, hooks
    pub fn step(&mut self) {
        step::step(self);
    }

    /// Shaded ABGR color per cell, as of the last render phase
    pub fn colors(&self) -> &[u32] { &self.render.colors }

    /// Get pointer to colors array (for JS rendering)
    pub fn colors_ptr(&self) -> *const u32 { self.render.colors.as_ptr() }

    pub fn colors_len(&self) -> usize { self.render.colors.len() }

    /// Get pointer to element ids (for JS inspection)
    pub fn cells_ptr(&self) -> *const ElementId { self.grid.cells().as_ptr() }

    pub fn cells_len(&self) -> usize { self.grid.size() }

    /// Re-render the color buffer from the current grid without ticking
    pub fn refresh_colors(&mut self) {
        render_extract::render_colors(self);
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
