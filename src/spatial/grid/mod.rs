//! Grid - flat row-major storage of element ids
//!
//! Out-of-bounds reads return `None` and out-of-bounds writes are ignored:
//! the border behaves as a wall with no material behind it.

use crate::core::EngineError;
use crate::elements::{ElementId, EL_AIR};

mod accessors;
mod indexing;
mod moves;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    size: usize,
    cells: Vec<ElementId>,
}

impl Grid {
    /// Grid of `width * height` cells, all air.
    pub fn new(width: u32, height: u32) -> Result<Self, EngineError> {
        if width == 0 || height == 0 {
            return Err(EngineError::InvalidDimensions { width, height });
        }
        let size = (width as usize)
            .checked_mul(height as usize)
            .ok_or(EngineError::InvalidDimensions { width, height })?;
        Ok(Self {
            width,
            height,
            size,
            cells: vec![EL_AIR; size],
        })
    }

    /// Reset every cell to `id`.
    pub fn fill(&mut self, id: ElementId) {
        self.cells.fill(id);
    }

    /// Read-only view of all cells in row-major order.
    #[inline]
    pub fn cells(&self) -> &[ElementId] {
        &self.cells
    }

    /// Number of cells holding `id`.
    pub fn count_of(&self, id: ElementId) -> usize {
        self.cells.iter().filter(|&&c| c == id).count()
    }

    /// Cell count per element id, indexed by id.
    pub fn histogram(&self) -> Vec<usize> {
        let mut counts = vec![0usize; ElementId::MAX as usize + 1];
        for &c in self.cells.iter() {
            counts[c as usize] += 1;
        }
        let used = counts.iter().rposition(|&n| n > 0).map_or(0, |i| i + 1);
        counts.truncate(used);
        counts
    }
}
