use wasm_bindgen::prelude::*;

use crate::core::EngineError;
use crate::elements::ElementId;

use super::perf_stats::PerfStats;
use super::{EngineConfig, WorldCore};

fn to_js(e: EngineError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// JS-facing handle around `WorldCore`.
///
/// The host loop sets pointer state, calls `step`, then copies `colors_len`
/// ABGR pixels starting at `colors_ptr` out of wasm memory.
#[wasm_bindgen]
pub struct World {
    core: WorldCore,
}

#[wasm_bindgen]
impl World {
    /// Create a new world with given dimensions (in cells)
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Result<World, JsValue> {
        let core = WorldCore::new(width, height).map_err(to_js)?;
        Ok(Self { core })
    }

    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: &str) -> Result<World, JsValue> {
        let core = WorldCore::from_config_json(json).map_err(to_js)?;
        Ok(Self { core })
    }

    /// Grid sized from a canvas in pixels and a cell scale, with the classic
    /// 10x10 sand block in the middle.
    #[wasm_bindgen(js_name = fromCanvas)]
    pub fn from_canvas(width_px: u32, height_px: u32, scale: u32) -> Result<World, JsValue> {
        let scale = scale.max(1);
        let config = EngineConfig::new(width_px / scale, height_px / scale).with_starter_block(10);
        let core = WorldCore::from_config(config).map_err(to_js)?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.core.particle_count() as u32 }

    /// Register extension elements from a JSON bundle; returns their ids
    pub fn register_bundle_json(&mut self, json: &str) -> Result<Vec<u8>, JsValue> {
        self.core.register_bundle_json(json).map_err(to_js)
    }

    pub fn manifest_json(&self) -> String {
        self.core.content().manifest_json()
    }

    pub fn id_by_name(&self, name: &str) -> Option<ElementId> {
        self.core.content().id_by_name(name)
    }

    // === Pointer / brush ===

    pub fn set_pointer(&mut self, x: i32, y: i32) {
        self.core.pointer_mut().move_to(x, y);
    }

    pub fn set_deposit(&mut self, down: bool) {
        self.core.pointer_mut().deposit = down;
    }

    pub fn set_erase(&mut self, down: bool) {
        self.core.pointer_mut().erase = down;
    }

    pub fn set_brush_radius(&mut self, radius: i32) {
        self.core.pointer_mut().radius = radius.max(0);
    }

    pub fn set_active_material(&mut self, name: String) {
        self.core.pointer_mut().active = name;
    }

    pub fn active_material(&self) -> String {
        self.core.pointer().active.clone()
    }

    // === Direct placement ===

    pub fn set_at_position(&mut self, x: i32, y: i32, name: &str) -> bool {
        self.core.set_at_position(x, y, name)
    }

    pub fn fill_block(&mut self, cx: i32, cy: i32, size: u32, name: &str) -> u32 {
        self.core.fill_block(cx, cy, size, name) as u32
    }

    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Step the simulation forward
    pub fn step(&mut self) {
        self.core.step();
    }

    // === Render buffers ===

    pub fn colors_ptr(&self) -> *const u32 { self.core.colors_ptr() }

    pub fn colors_len(&self) -> usize { self.core.colors_len() }

    pub fn cells_ptr(&self) -> *const u8 { self.core.cells_ptr() }

    pub fn cells_len(&self) -> usize { self.core.cells_len() }

    pub fn refresh_colors(&mut self) {
        self.core.refresh_colors();
    }

    // === Perf ===

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }
}

impl World {
    pub fn core(&self) -> &WorldCore {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut WorldCore {
        &mut self.core
    }
}
