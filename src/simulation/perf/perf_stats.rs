use wasm_bindgen::prelude::*;

/// Timings and counters for the last `step`. All zero while perf metrics are off.
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) update_ms: f64,
    pub(super) render_ms: f64,
    pub(super) paint_ms: f64,
    pub(super) rules_invoked: u32,
    pub(super) swaps: u32,
    pub(super) cells_painted: u32,
    pub(super) particle_count: u32,
    pub(super) frame: u64,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn update_ms(&self) -> f64 { self.update_ms }
    #[wasm_bindgen(getter)]
    pub fn render_ms(&self) -> f64 { self.render_ms }
    #[wasm_bindgen(getter)]
    pub fn paint_ms(&self) -> f64 { self.paint_ms }
    #[wasm_bindgen(getter)]
    pub fn rules_invoked(&self) -> u32 { self.rules_invoked }
    #[wasm_bindgen(getter)]
    pub fn swaps(&self) -> u32 { self.swaps }
    #[wasm_bindgen(getter)]
    pub fn cells_painted(&self) -> u32 { self.cells_painted }
    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.particle_count }
    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.frame }
}
