use serde::Deserialize;

use crate::core::EngineError;
use crate::elements::NAME_SAND;

use super::perf_stats::PerfStats;
use super::pointer::DEFAULT_BRUSH_RADIUS;
use super::WorldCore;

/// Engine construction settings. Deserializes from camelCase JSON.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    /// Grid width in cells.
    pub width: u32,
    /// Grid height in cells.
    pub height: u32,
    /// Seed for the simulation random stream; host entropy when absent.
    pub seed: Option<u64>,
    /// Seed for the per-cell shading hash.
    pub shade_seed: u32,
    pub brush_radius: i32,
    pub active_material: String,
    /// Side of a square of sand placed at the grid center on creation. 0 disables it.
    pub starter_block: u32,
    pub perf_metrics: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            seed: None,
            shade_seed: 0,
            brush_radius: DEFAULT_BRUSH_RADIUS,
            active_material: NAME_SAND.to_string(),
            starter_block: 0,
            perf_metrics: false,
        }
    }
}

impl EngineConfig {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, ..Self::default() }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_starter_block(mut self, size: u32) -> Self {
        self.starter_block = size;
        self
    }

    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| EngineError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.width == 0 || self.height == 0 {
            return Err(EngineError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.brush_radius < 0 {
            return Err(EngineError::InvalidConfig(format!(
                "brushRadius must not be negative, got {}",
                self.brush_radius
            )));
        }
        Ok(())
    }
}

pub(super) fn enable_perf_metrics(world: &mut WorldCore, enabled: bool) {
    world.perf_enabled = enabled;
    if !enabled {
        world.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(world: &WorldCore) -> PerfStats {
    world.perf_stats.clone()
}
