//! Square cell-state matrix used for both of a board's grids.
//!
//! Cells are stored row-major; `x` selects the column and `y` the row.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::cell::CellState;
use crate::common::EngineError;

#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    size: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Create an `size×size` grid with every cell `Empty`.
    pub fn new(size: usize) -> Self {
        Grid {
            size,
            cells: vec![CellState::Empty; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.size && y < self.size
    }

    /// State of the cell at (`x`, `y`).
    pub fn get(&self, x: usize, y: usize) -> Result<CellState, EngineError> {
        self.check_bounds(x, y)?;
        Ok(self.cells[y * self.size + x])
    }

    /// Overwrite the cell at (`x`, `y`).
    pub fn set(&mut self, x: usize, y: usize, state: CellState) -> Result<(), EngineError> {
        self.check_bounds(x, y)?;
        self.cells[y * self.size + x] = state;
        Ok(())
    }

    /// Reset every cell to `state`.
    pub fn fill(&mut self, state: CellState) {
        self.cells.iter_mut().for_each(|c| *c = state);
    }

    /// Rows from top (`y = 0`) to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> + '_ {
        self.cells.chunks(self.size.max(1))
    }

    /// Number of cells matching `pred`.
    pub fn count(&self, pred: impl Fn(CellState) -> bool) -> usize {
        self.cells.iter().filter(|c| pred(**c)).count()
    }

    /// Coordinates of every cell matching `pred`, row-major.
    pub fn positions(&self, pred: impl Fn(CellState) -> bool) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| pred(**c))
            .map(|(i, _)| (i % self.size, i / self.size))
            .collect()
    }

    #[inline]
    fn check_bounds(&self, x: usize, y: usize) -> Result<(), EngineError> {
        if self.in_bounds(x, y) {
            Ok(())
        } else {
            Err(EngineError::OutOfBounds)
        }
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {}x{}:", self.size, self.size)?;
        for row in self.rows() {
            for cell in row {
                let ch = match cell {
                    CellState::Empty => '.',
                    CellState::Miss => 'o',
                    CellState::Hit => 'X',
                    _ => 'S',
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
