use crate::elements::EL_AIR;

use super::WorldCore;

pub(super) fn set_at_position(world: &mut WorldCore, x: i32, y: i32, name: &str) -> bool {
    let Some(id) = world.content.id_by_name(name) else {
        return false;
    };
    if !world.grid.in_bounds(x, y) {
        return false;
    }
    world.grid.set(x, y, id);
    true
}

pub(super) fn fill_block(world: &mut WorldCore, cx: i32, cy: i32, size: u32, name: &str) -> usize {
    let Some(id) = world.content.id_by_name(name) else {
        return 0;
    };
    let size = size as i64;
    let x0 = cx as i64 - size / 2;
    let y0 = cy as i64 - size / 2;

    // Clip the square to the grid; an off-grid square leaves an empty range.
    let x_start = x0.max(0);
    let y_start = y0.max(0);
    let x_end = (x0 + size).min(world.grid.width() as i64);
    let y_end = (y0 + size).min(world.grid.height() as i64);

    let mut placed = 0;
    for y in y_start..y_end {
        for x in x_start..x_end {
            world.grid.set(x as i32, y as i32, id);
            placed += 1;
        }
    }
    placed
}

pub(super) fn clear(world: &mut WorldCore) {
    world.grid.fill(EL_AIR);
    world.frame = 0;
    super::render_extract::render_colors(world);
}
