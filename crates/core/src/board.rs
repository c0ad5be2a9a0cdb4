//! Board module - the grid of paired icons
//!
//! A board is generated once per round and never mutated; winning replaces it
//! wholesale. Storage is a flat vector indexed by `x + y * width`.

use std::collections::HashMap;

use crate::config::GameConfig;
use crate::error::{BoardError, Result};
use crate::rng::SimpleRng;
use crate::types::{CellPos, Icon};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u16,
    height: u16,
    cells: Vec<Icon>,
}

impl Board {
    /// Generate a randomized board.
    ///
    /// Builds every color × shape combination, shuffles it, keeps one icon per
    /// pair, doubles that list, shuffles again and deals it out column by
    /// column.
    pub fn generate(config: &GameConfig, rng: &mut SimpleRng) -> Result<Self> {
        config.validate()?;

        let mut pool: Vec<Icon> = config
            .colors
            .iter()
            .flat_map(|&color| config.shapes.iter().map(move |&shape| Icon::new(shape, color)))
            .collect();
        rng.shuffle(&mut pool);
        pool.truncate(config.pairs());

        let mut icons = Vec::with_capacity(config.cell_count());
        icons.extend_from_slice(&pool);
        icons.extend_from_slice(&pool);
        rng.shuffle(&mut icons);

        Self::from_icons(config.board_width, config.board_height, icons)
    }

    /// Build a board from icons listed column by column.
    ///
    /// Fails if the count does not match the dimensions or if any icon does
    /// not appear exactly twice.
    pub fn from_icons(width: u16, height: u16, icons: Vec<Icon>) -> Result<Self> {
        let expected = width as usize * height as usize;
        if icons.len() != expected {
            return Err(BoardError::DimensionMismatch {
                expected,
                actual: icons.len(),
            });
        }
        if !is_perfectly_paired(&icons) {
            return Err(BoardError::Unpaired);
        }

        // `icons` is column-major, storage is row-major.
        let (w, h) = (width as usize, height as usize);
        let cells = (0..expected).map(|i| icons[(i % w) * h + i / w]).collect();

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Icon under `cell`, or `None` when out of bounds.
    pub fn icon(&self, cell: CellPos) -> Option<Icon> {
        if cell.x >= self.width || cell.y >= self.height {
            return None;
        }
        self.cells
            .get(cell.x as usize + cell.y as usize * self.width as usize)
            .copied()
    }

    /// Row-major view of all icons.
    pub fn icons(&self) -> &[Icon] {
        &self.cells
    }
}

fn is_perfectly_paired(icons: &[Icon]) -> bool {
    let mut counts: HashMap<Icon, u32> = HashMap::with_capacity(icons.len() / 2);
    for icon in icons {
        *counts.entry(*icon).or_default() += 1;
    }
    counts.values().all(|&n| n == 2)
}
