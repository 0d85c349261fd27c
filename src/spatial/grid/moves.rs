use super::*;

impl Grid {
    /// Exchange two cells by flat index. No-op if either index is out of range.
    ///
    /// This is the only way material moves: nothing is created or destroyed.
    #[inline]
    pub fn swap_cells(&mut self, a: usize, b: usize) {
        if a >= self.size || b >= self.size {
            return;
        }
        self.cells.swap(a, b);
    }

    /// Coordinate form of `swap_cells`. Returns whether both cells exist.
    pub fn swap(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) -> bool {
        match (self.index(x1, y1), self.index(x2, y2)) {
            (Some(a), Some(b)) => {
                self.cells.swap(a, b);
                true
            }
            _ => false,
        }
    }
}
