use std::sync::Arc;

use crate::core::console;
use crate::core::{EngineError, SimRng};
use crate::domain::content::ContentRegistry;
use crate::elements::NAME_SAND;
use crate::grid::Grid;

use super::perf_stats::PerfStats;
use super::settings::EngineConfig;
use super::{PointerState, RenderBuffers, WorldCore};

pub(super) fn create_world_core(config: EngineConfig) -> Result<WorldCore, EngineError> {
    config.validate()?;
    let grid = Grid::new(config.width, config.height)?;

    let rng = match config.seed {
        Some(seed) => SimRng::seeded(seed),
        None => SimRng::from_host_entropy(),
    };

    let pointer = PointerState {
        radius: config.brush_radius,
        active: config.active_material.clone(),
        ..PointerState::default()
    };

    let mut world = WorldCore {
        content: Arc::new(ContentRegistry::builtin()),
        render: RenderBuffers {
            colors: vec![0u32; grid.size()],
        },
        grid,
        pointer,
        hooks: Vec::new(),
        shade_seed: config.shade_seed,
        frame: 0,
        rng,
        perf_enabled: config.perf_metrics,
        perf_stats: PerfStats::default(),
    };

    if config.starter_block > 0 {
        let (cx, cy) = ((config.width / 2) as i32, (config.height / 2) as i32);
        world.fill_block(cx, cy, config.starter_block, NAME_SAND);
    }
    world.refresh_colors();

    console::log(&format!(
        "world created: {}x{} cells, {} elements",
        config.width,
        config.height,
        world.content.element_count()
    ));
    Ok(world)
}
