//! Color buffer extraction: base color plus a deterministic per-cell shade.
//!
//! Output is ABGR packed `u32` (bytes RR,GG,BB,AA), ready for canvas ImageData.
//! Cell-to-pixel scaling is left to the host renderer.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::core::shade_hash;
use crate::domain::content::ContentRegistry;
use crate::elements::{ElementId, Rgb};
use crate::grid::Grid;

use super::WorldCore;

/// Brightness range added on top of a material's base color.
pub const SHADE_RANGE: f64 = 32.0;

/// Shade offset for a non-empty cell at `(x, y)`, rounded to the nearest level.
#[inline]
pub fn shade_offset(x: u32, y: u32, seed: u32) -> u8 {
    (shade_hash(x, y, seed) * SHADE_RANGE).round() as u8
}

/// Per-id base color and whether the id is shaded.
struct Palette {
    entries: Vec<(Rgb, bool)>,
}

impl Palette {
    fn new(content: &ContentRegistry) -> Self {
        let entries = content
            .definitions()
            .map(|d| (d.color, !d.is_empty_class()))
            .collect();
        Self { entries }
    }

    #[inline]
    fn color_at(&self, id: ElementId, x: u32, y: u32, seed: u32) -> u32 {
        match self.entries.get(id as usize) {
            Some(&(base, true)) => base.shaded(shade_offset(x, y, seed)).to_abgr(),
            Some(&(base, false)) => base.to_abgr(),
            None => 0,
        }
    }
}

pub(super) fn render_colors(world: &mut WorldCore) {
    let seed = world.shade_seed;
    render_into(&world.grid, &world.content, seed, &mut world.render.colors);
}

pub(crate) fn render_into(grid: &Grid, content: &ContentRegistry, seed: u32, out: &mut Vec<u32>) {
    let width = grid.width() as usize;
    out.resize(grid.size(), 0);
    let palette = Palette::new(content);
    let cells = grid.cells();

    let fill_row = |(y, row): (usize, &mut [u32])| {
        let src = &cells[y * width..(y + 1) * width];
        for (x, (px, &id)) in row.iter_mut().zip(src.iter()).enumerate() {
            *px = palette.color_at(id, x as u32, y as u32, seed);
        }
    };

    #[cfg(feature = "parallel")]
    out.par_chunks_mut(width).enumerate().for_each(fill_row);

    #[cfg(not(feature = "parallel"))]
    out.chunks_mut(width).enumerate().for_each(fill_row);
}
