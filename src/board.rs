//! Board state: own-ships grid, tracking grid and the pieces left to place.

use alloc::vec::Vec;
use core::fmt;
use log::{debug, warn};
use rand::Rng;

use crate::cell::CellState;
use crate::common::EngineError;
use crate::config::{MAX_PLACEMENT_ATTEMPTS, PIECES};
use crate::grid::Grid;
use crate::piece::{Orientation, PieceType};

#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    size: usize,
    primary: Grid,
    tracking: Grid,
    pieces_available: Vec<PieceType>,
}

impl Board {
    /// Create an empty `size×size` board. No pieces are offered until
    /// [`Board::init`] is called.
    pub fn new(size: usize) -> Self {
        Board {
            size,
            primary: Grid::new(size),
            tracking: Grid::new(size),
            pieces_available: Vec::new(),
        }
    }

    /// Clear both grids and offer the full catalog again.
    pub fn init(&mut self) {
        self.primary.fill(CellState::Empty);
        self.tracking.fill(CellState::Empty);
        self.pieces_available.clear();
        self.pieces_available.extend_from_slice(&PIECES);
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Own ships merged with incoming shot results.
    pub fn primary_grid(&self) -> &Grid {
        &self.primary
    }

    /// Outcomes of shots fired at the opponent.
    pub fn tracking_grid(&self) -> &Grid {
        &self.tracking
    }

    /// Pieces not yet placed, in catalog order.
    pub fn pieces_available(&self) -> &[PieceType] {
        &self.pieces_available
    }

    /// Place a piece by catalog name and orientation string.
    ///
    /// Returns `Ok(false)` when the orientation is unknown, the clamped span
    /// does not fit, or it overlaps another piece. Nothing is mutated unless
    /// `Ok(true)` is returned.
    pub fn place_piece(
        &mut self,
        name: &str,
        x: usize,
        y: usize,
        orientation: &str,
    ) -> Result<bool, EngineError> {
        let piece: PieceType = name.parse()?;
        self.check_placeable(piece, x, y)?;
        match Orientation::parse(orientation) {
            Some(o) => Ok(self.commit(piece, x, y, o)),
            None => Ok(false),
        }
    }

    /// Typed form of [`Board::place_piece`].
    pub fn place(
        &mut self,
        piece: PieceType,
        x: usize,
        y: usize,
        orientation: Orientation,
    ) -> Result<bool, EngineError> {
        self.check_placeable(piece, x, y)?;
        Ok(self.commit(piece, x, y, orientation))
    }

    /// Randomly place every remaining piece, always drawing for the first
    /// piece still available.
    pub fn place_random<R: Rng>(&mut self, rng: &mut R) -> Result<(), EngineError> {
        if self.size == 0 && !self.pieces_available.is_empty() {
            return Err(EngineError::Failed);
        }
        let mut attempts = 0;
        while let Some(&piece) = self.pieces_available.first() {
            if attempts >= MAX_PLACEMENT_ATTEMPTS {
                warn!(
                    "giving up random placement after {} attempts ({} pieces left)",
                    attempts,
                    self.pieces_available.len()
                );
                return Err(EngineError::Failed);
            }
            attempts += 1;
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let x = rng.random_range(0..self.size);
            let y = rng.random_range(0..self.size);
            self.place(piece, x, y, orientation)?;
        }
        Ok(())
    }

    /// Fire at `target` from this board.
    ///
    /// Returns `Ok(true)` on a hit. The tracking cell here and the primary
    /// cell on `target` are always written together.
    pub fn shoot(&mut self, target: &mut Board, x: usize, y: usize) -> Result<bool, EngineError> {
        if target.is_cell_shot(x, y)? {
            return Err(EngineError::AlreadyShoot);
        }
        if !self.tracking.in_bounds(x, y) {
            return Err(EngineError::OutOfBounds);
        }
        let hit = target.primary.get(x, y)?.is_occupied();
        let mark = if hit { CellState::Hit } else { CellState::Miss };
        self.tracking.set(x, y, mark)?;
        target.primary.set(x, y, mark)?;
        debug!("shot at ({}, {}): {:?}", x, y, mark);
        Ok(hit)
    }

    /// Number of unhit ship cells on the primary grid.
    pub fn alives(&self) -> usize {
        self.primary.count(|c| c.is_occupied())
    }

    /// `true` while some primary cell has not been shot at.
    pub fn has_unshot_cell(&self) -> bool {
        self.primary.count(|c| !c.is_shot()) > 0
    }

    /// Coordinates of the primary cells not yet shot at.
    pub fn unshot_cells(&self) -> Vec<(usize, usize)> {
        self.primary.positions(|c| !c.is_shot())
    }

    fn is_cell_shot(&self, x: usize, y: usize) -> Result<bool, EngineError> {
        Ok(self.primary.get(x, y)?.is_shot())
    }

    fn check_placeable(&self, piece: PieceType, x: usize, y: usize) -> Result<(), EngineError> {
        if !self.pieces_available.contains(&piece) {
            return Err(EngineError::NoPieceAvailable);
        }
        if !self.primary.in_bounds(x, y) {
            return Err(EngineError::OutOfBounds);
        }
        Ok(())
    }

    /// Clamp the request onto the grid, then stamp the span only if every
    /// target cell is free.
    fn commit(&mut self, piece: PieceType, x: usize, y: usize, orientation: Orientation) -> bool {
        let len = piece.length();
        let offset = piece.pivot();
        if len > self.size {
            return false;
        }
        // an in-bounds anchor is moved so the whole span lands on the grid
        let clamp = |v: usize| v.min(self.size - (len - offset)).max(offset);
        let (x, y) = match orientation {
            Orientation::Horizontal => (clamp(x), y.min(self.size - 1)),
            Orientation::Vertical => (x.min(self.size - 1), clamp(y)),
        };
        let cell_at = |i: usize| match orientation {
            Orientation::Horizontal => (x - offset + i, y),
            Orientation::Vertical => (x, y - offset + i),
        };

        for i in 0..len {
            let (cx, cy) = cell_at(i);
            match self.primary.get(cx, cy) {
                Ok(c) if !c.is_occupied() => {}
                _ => return false,
            }
        }

        let (first, middle, last) = match orientation {
            Orientation::Horizontal => (
                CellState::PieceLeft,
                CellState::PieceMiddleHorizontal,
                CellState::PieceRight,
            ),
            Orientation::Vertical => (
                CellState::PieceTop,
                CellState::PieceMiddleVertical,
                CellState::PieceBottom,
            ),
        };
        for i in 0..len {
            let (cx, cy) = cell_at(i);
            let state = if i == 0 {
                first
            } else if i == len - 1 {
                last
            } else {
                middle
            };
            let stamped = self.primary.set(cx, cy, state);
            debug_assert!(stamped.is_ok(), "span left the grid at ({}, {})", cx, cy);
        }
        self.pieces_available.retain(|p| *p != piece);
        debug!("placed {} at ({}, {}) {:?}", piece, x, y, orientation);
        true
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  size: {},\n  pieces_available: {:?},\n  primary: {:?},\n  tracking: {:?}\n}}",
            self.size, self.pieces_available, self.primary, self.tracking
        )
    }
}
