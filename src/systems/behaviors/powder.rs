//! PowderBehavior - granular materials (sand)
//!
//! Falls straight down into empty space, otherwise slides to one randomly
//! chosen diagonal below, otherwise rests.

use super::{Behavior, UpdateContext};

#[derive(Default)]
pub struct PowderBehavior;

impl PowderBehavior {
    pub fn new() -> Self {
        Self
    }
}

impl Behavior for PowderBehavior {
    fn update(&self, ctx: &mut UpdateContext) {
        // Drawn on every visit, even when the grain falls straight down.
        let dir = ctx.rng.random_sign();
        ctx.move_to_first_empty(&[(0, 1), (dir, 1)]);
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{grid_with, run_rule_at};
    use crate::core::SimRng;
    use crate::domain::content::ContentRegistry;
    use crate::elements::{EL_AIR, EL_SAND, EL_WATER, EL_WOOD};

    #[test]
    fn falls_into_empty_below() {
        let content = ContentRegistry::builtin();
        let mut grid = grid_with(3, 3, &[(1, 0, EL_SAND)]);
        let mut rng = SimRng::seeded(3);
        assert!(run_rule_at(&mut grid, &content, &mut rng, 1, 0));
        assert_eq!(grid.get(1, 0), Some(EL_AIR));
        assert_eq!(grid.get(1, 1), Some(EL_SAND));
    }

    #[test]
    fn slides_diagonally_when_blocked() {
        let content = ContentRegistry::builtin();
        for seed in 0..16 {
            let mut grid = grid_with(3, 2, &[(1, 0, EL_SAND), (1, 1, EL_WOOD)]);
            let mut rng = SimRng::seeded(seed);
            assert!(run_rule_at(&mut grid, &content, &mut rng, 1, 0));
            let left = grid.get(0, 1) == Some(EL_SAND);
            let right = grid.get(2, 1) == Some(EL_SAND);
            assert!(left ^ right, "grain should land on exactly one diagonal");
            assert_eq!(grid.get(1, 0), Some(EL_AIR));
        }
    }

    #[test]
    fn rests_on_the_floor() {
        let content = ContentRegistry::builtin();
        let mut grid = grid_with(3, 1, &[(1, 0, EL_SAND)]);
        let mut rng = SimRng::seeded(5);
        assert!(!run_rule_at(&mut grid, &content, &mut rng, 1, 0));
        assert_eq!(grid.get(1, 0), Some(EL_SAND));
    }

    #[test]
    fn does_not_sink_through_water() {
        let content = ContentRegistry::builtin();
        let mut grid = grid_with(
            3,
            2,
            &[(1, 0, EL_SAND), (0, 1, EL_WATER), (1, 1, EL_WATER), (2, 1, EL_WATER)],
        );
        let mut rng = SimRng::seeded(5);
        assert!(!run_rule_at(&mut grid, &content, &mut rng, 1, 0));
        assert_eq!(grid.get(1, 0), Some(EL_SAND));
    }

    #[test]
    fn never_slides_across_the_side_walls() {
        let content = ContentRegistry::builtin();
        for seed in 0..16 {
            let mut grid = grid_with(1, 2, &[(0, 0, EL_SAND), (0, 1, EL_WOOD)]);
            let mut rng = SimRng::seeded(seed);
            assert!(!run_rule_at(&mut grid, &content, &mut rng, 0, 0));
            assert_eq!(grid.get(0, 0), Some(EL_SAND));
        }
    }
}
