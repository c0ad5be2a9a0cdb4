//! Reveal-state tracker: which cells are currently face-up.

use crate::types::CellPos;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealState {
    width: u16,
    height: u16,
    cells: Vec<bool>,
}

impl RevealState {
    /// A grid with every cell set to `value`.
    pub fn new(width: u16, height: u16, value: bool) -> Self {
        Self {
            width,
            height,
            cells: vec![value; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline(always)]
    fn idx(&self, cell: CellPos) -> Option<usize> {
        if cell.x >= self.width || cell.y >= self.height {
            return None;
        }
        Some(cell.x as usize + cell.y as usize * self.width as usize)
    }

    /// Out-of-bounds cells read as not revealed.
    pub fn is_revealed(&self, cell: CellPos) -> bool {
        self.idx(cell).is_some_and(|i| self.cells[i])
    }

    /// Set a cell. Returns false when `cell` is out of bounds.
    pub fn set(&mut self, cell: CellPos, value: bool) -> bool {
        match self.idx(cell) {
            Some(i) => {
                self.cells[i] = value;
                true
            }
            None => false,
        }
    }

    pub fn reveal(&mut self, cell: CellPos) -> bool {
        self.set(cell, true)
    }

    pub fn cover(&mut self, cell: CellPos) -> bool {
        self.set(cell, false)
    }

    pub fn reset(&mut self, value: bool) {
        self.cells.fill(value);
    }

    pub fn revealed_count(&self) -> usize {
        self.cells.iter().filter(|&&r| r).count()
    }

    /// Whether every cell is face-up. Vacuously true for an empty grid.
    pub fn all_revealed(&self) -> bool {
        self.cells.iter().all(|&r| r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_revealed_checks_every_row() {
        let mut state = RevealState::new(3, 2, true);
        assert!(state.all_revealed());

        // Only the last row has a covered cell.
        state.cover(CellPos::new(2, 1));
        assert!(!state.all_revealed());
    }

    #[test]
    fn all_false_is_not_won() {
        let state = RevealState::new(10, 7, false);
        assert!(!state.all_revealed());
        assert_eq!(state.revealed_count(), 0);
    }

    #[test]
    fn empty_grid_is_vacuously_revealed() {
        assert!(RevealState::new(0, 0, false).all_revealed());
    }

    #[test]
    fn out_of_bounds_access() {
        let mut state = RevealState::new(2, 2, false);
        assert!(!state.reveal(CellPos::new(2, 0)));
        assert!(!state.is_revealed(CellPos::new(0, 5)));
        assert!(state.reveal(CellPos::new(1, 1)));
        assert!(state.is_revealed(CellPos::new(1, 1)));
        assert_eq!(state.revealed_count(), 1);
    }

    #[test]
    fn reset_overwrites_everything() {
        let mut state = RevealState::new(4, 2, false);
        state.reveal(CellPos::new(0, 0));
        state.reset(false);
        assert_eq!(state.revealed_count(), 0);
        state.reset(true);
        assert_eq!(state.revealed_count(), 8);
    }
}
