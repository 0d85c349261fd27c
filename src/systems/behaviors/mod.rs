//! Behaviors - per-material update rules
//!
//! A rule looks at the cell it was invoked for and its neighbors and performs
//! at most one swap. There is no per-cell state between ticks: the element id
//! in the cell is the whole state.

mod liquid;
mod powder;

pub use liquid::LiquidBehavior;
pub use powder::PowderBehavior;

use crate::core::SimRng;
use crate::domain::content::ContentRegistry;
use crate::grid::Grid;

/// Everything a rule may read or touch for one visited cell.
pub struct UpdateContext<'a> {
    pub grid: &'a mut Grid,
    pub content: &'a ContentRegistry,
    pub rng: &'a mut SimRng,
    pub x: u32,
    pub y: u32,
    swapped: bool,
}

impl<'a> UpdateContext<'a> {
    pub fn new(
        grid: &'a mut Grid,
        content: &'a ContentRegistry,
        rng: &'a mut SimRng,
        x: u32,
        y: u32,
    ) -> Self {
        Self { grid, content, rng, x, y, swapped: false }
    }

    /// True when `(x, y)` is on the grid and holds an empty-class material.
    #[inline]
    pub fn is_empty_at(&self, x: i32, y: i32) -> bool {
        match self.grid.get(x, y) {
            Some(id) => self.content.is_empty_id(id),
            None => false,
        }
    }

    /// Swap the visited cell with `(tx, ty)`. Only the first swap per visit is applied.
    #[inline]
    pub fn swap_with(&mut self, tx: i32, ty: i32) -> bool {
        if self.swapped {
            return false;
        }
        self.swapped = self.grid.swap(self.x as i32, self.y as i32, tx, ty);
        self.swapped
    }

    /// Move into the first empty cell among `offsets`, tried in order.
    pub fn move_to_first_empty(&mut self, offsets: &[(i32, i32)]) -> bool {
        let (x, y) = (self.x as i32, self.y as i32);
        for &(dx, dy) in offsets {
            if self.is_empty_at(x + dx, y + dy) {
                return self.swap_with(x + dx, y + dy);
            }
        }
        false
    }

    #[inline]
    pub fn swapped(&self) -> bool {
        self.swapped
    }
}

/// Update rule attached to a material definition.
pub trait Behavior {
    fn update(&self, ctx: &mut UpdateContext);
}
