//! LiquidBehavior - liquids (water)
//!
//! Same as powder, plus a sideways step at the same height when both the
//! cell below and the chosen diagonal are taken.

use super::{Behavior, UpdateContext};

#[derive(Default)]
pub struct LiquidBehavior;

impl LiquidBehavior {
    pub fn new() -> Self {
        Self
    }
}

impl Behavior for LiquidBehavior {
    fn update(&self, ctx: &mut UpdateContext) {
        let dir = ctx.rng.random_sign();
        ctx.move_to_first_empty(&[(0, 1), (dir, 1), (dir, 0)]);
    }
}
