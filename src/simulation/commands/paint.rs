//! Brush application. Runs once per tick after the update pass and render.

use crate::core::SimRng;
use crate::elements::{ElementId, EL_AIR};
use crate::grid::Grid;

use super::WorldCore;

/// Chance of skipping a cell when depositing a grainy material.
const GRAIN_SKIP_CHANCE: f64 = 0.5;

/// Apply the current pointer state. Returns the number of cells written.
pub(super) fn apply_brush(world: &mut WorldCore) -> u32 {
    let pointer = &world.pointer;
    if pointer.idle() {
        return 0;
    }

    // Deposit wins when both are held. An unknown active material paints nothing.
    let (id, sparse) = if pointer.deposit {
        match world.content.definition_by_name(&pointer.active) {
            Some(def) => (def.id(), def.grain),
            None => return 0,
        }
    } else {
        (EL_AIR, false)
    };

    let (cx, cy, radius) = (pointer.x, pointer.y, pointer.radius);
    paint_circle(&mut world.grid, &mut world.rng, cx, cy, radius, id, sparse)
}

/// Write `id` into every on-grid cell within `radius` of `(cx, cy)`.
///
/// With `sparse`, each cell is independently skipped with probability 0.5.
pub(crate) fn paint_circle(
    grid: &mut Grid,
    rng: &mut SimRng,
    cx: i32,
    cy: i32,
    radius: i32,
    id: ElementId,
    sparse: bool,
) -> u32 {
    let r = radius.max(0) as i64;
    let r2 = r * r;
    let (cx, cy) = (cx as i64, cy as i64);

    // Only the part of the bounding square that overlaps the grid.
    let x0 = (cx - r).max(0);
    let y0 = (cy - r).max(0);
    let x1 = (cx + r).min(grid.width() as i64 - 1);
    let y1 = (cy + r).min(grid.height() as i64 - 1);

    let mut painted = 0;
    for y in y0..=y1 {
        for x in x0..=x1 {
            let (dx, dy) = (x - cx, y - cy);
            if dx * dx + dy * dy > r2 {
                continue;
            }
            if sparse && rng.chance(GRAIN_SKIP_CHANCE) {
                continue;
            }
            grid.set(x as i32, y as i32, id);
            painted += 1;
        }
    }
    painted
}
