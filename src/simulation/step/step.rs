use super::{paint, render_extract, update, PerfTimer, WorldCore};

pub(super) fn step(world: &mut WorldCore) {
    let perf_on = world.perf_enabled;
    if perf_on {
        world.perf_stats.reset();
    }
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    // === UPDATE PASS ===
    let counters = if perf_on {
        let t0 = PerfTimer::start();
        let c = update::update_pass(&mut world.grid, &world.content, &mut world.rng);
        world.perf_stats.update_ms = t0.elapsed_ms();
        c
    } else {
        update::update_pass(&mut world.grid, &world.content, &mut world.rng)
    };

    // === RENDER ===
    // Reflects the grid after the update pass and before this tick's paint.
    if perf_on {
        let t0 = PerfTimer::start();
        render_extract::render_colors(world);
        world.perf_stats.render_ms = t0.elapsed_ms();
    } else {
        render_extract::render_colors(world);
    }

    // === PAINT ===
    let painted = if perf_on {
        let t0 = PerfTimer::start();
        let n = paint::apply_brush(world);
        world.perf_stats.paint_ms = t0.elapsed_ms();
        n
    } else {
        paint::apply_brush(world)
    };

    world.frame += 1;

    for hook in world.hooks.iter_mut() {
        hook.after_tick(world.frame, &world.grid, &world.content);
    }

    if let Some(t) = step_start {
        world.perf_stats.step_ms = t.elapsed_ms();
        world.perf_stats.rules_invoked = counters.rules_invoked;
        world.perf_stats.swaps = counters.swaps;
        world.perf_stats.cells_painted = painted;
        world.perf_stats.particle_count = world.particle_count() as u32;
        world.perf_stats.frame = world.frame;
    }
}
