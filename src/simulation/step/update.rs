use crate::behaviors::{Behavior, UpdateContext};
use crate::core::SimRng;
use crate::domain::content::ContentRegistry;
use crate::grid::Grid;

/// What one update pass did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PassCounters {
    pub rules_invoked: u32,
    pub swaps: u32,
}

/// Visit every cell once: rows from the bottom up, columns right to left.
///
/// The material is re-read at each visit, so a cell emptied or filled by an
/// earlier swap this pass is seen in its new state. A grain that falls moves
/// into a row that has already been visited and is not evaluated twice.
pub fn update_pass(grid: &mut Grid, content: &ContentRegistry, rng: &mut SimRng) -> PassCounters {
    let mut counters = PassCounters::default();
    let (width, height) = (grid.width(), grid.height());

    for y in (0..height).rev() {
        for x in (0..width).rev() {
            let Some(id) = grid.get(x as i32, y as i32) else {
                continue;
            };
            let Some(rule) = content.rule(id) else {
                continue;
            };

            let mut ctx = UpdateContext::new(grid, content, rng, x, y);
            rule.update(&mut ctx);

            counters.rules_invoked += 1;
            if ctx.swapped() {
                counters.swaps += 1;
            }
        }
    }

    counters
}
