use super::*;

impl Grid {
    /// Element at `(x, y)`, `None` off-grid.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<ElementId> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Write `id` at `(x, y)`. Off-grid writes are dropped.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, id: ElementId) {
        if let Some(idx) = self.index(x, y) {
            self.cells[idx] = id;
        }
    }

    #[inline]
    pub fn get_idx(&self, idx: usize) -> Option<ElementId> {
        self.cells.get(idx).copied()
    }
}
