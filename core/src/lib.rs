#![no_std]

extern crate alloc;

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod engine;
mod error;
mod generator;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub rows: Coord,
    pub cols: Coord,
    pub lit_chance: f64,
}

impl GameConfig {
    pub const fn new_unchecked(rows: Coord, cols: Coord, lit_chance: f64) -> Self {
        Self {
            rows,
            cols,
            lit_chance,
        }
    }

    pub fn new(rows: Coord, cols: Coord, lit_chance: f64) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(GameError::InvalidSize);
        }
        if !(0.0..=1.0).contains(&lit_chance) {
            return Err(GameError::InvalidChance);
        }
        Ok(Self::new_unchecked(rows, cols, lit_chance))
    }

    pub const fn size(&self) -> Coord2 {
        (self.rows, self.cols)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.cols)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(3, 3, 0.25)
    }
}

/// Immutable snapshot of the board, `true` meaning a lit cell. Toggling never
/// mutates a snapshot; it produces the next one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    lights: Array2<bool>,
}

impl Grid {
    pub fn from_lit_mask(lights: Array2<bool>) -> Self {
        Self { lights }
    }

    pub fn from_lit_coords(size: Coord2, lit: &[Coord2]) -> Result<Self> {
        let mut lights: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in lit {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::InvalidCoords);
            }
            lights[coords.to_nd_index()] = true;
        }

        Ok(Self::from_lit_mask(lights))
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.lights.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn rows(&self) -> Coord {
        self.size().0
    }

    pub fn cols(&self) -> Coord {
        self.size().1
    }

    pub fn total_cells(&self) -> CellCount {
        self.lights.len().try_into().unwrap()
    }

    pub fn lit_count(&self) -> CellCount {
        self.lights
            .iter()
            .filter(|&&lit| lit)
            .count()
            .try_into()
            .unwrap()
    }

    pub fn is_lit(&self, coords: Coord2) -> bool {
        self[coords]
    }

    /// Returns a new grid with the cell at `center` and its four orthogonal
    /// neighbors flipped. Each of the five candidates is flipped only if it
    /// lies on the board; the rest are skipped, center included.
    pub fn toggled(&self, center: Coord2) -> Grid {
        let mut lights = self.lights.clone();
        for pos in self.lights.iter_cross(center) {
            let cell = &mut lights[pos.to_nd_index()];
            *cell = !*cell;
        }
        Self::from_lit_mask(lights)
    }

    /// Win predicate: every cell is unlit.
    pub fn is_cleared(&self) -> bool {
        self.lights.iter().all(|&lit| !lit)
    }
}

impl Index<Coord2> for Grid {
    type Output = bool;

    fn index(&self, (row, col): Coord2) -> &Self::Output {
        &self.lights[(row as usize, col as usize)]
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ToggleOutcome {
    NoChange,
    Toggled,
    Cleared,
}

impl ToggleOutcome {
    pub const fn has_update(self) -> bool {
        use ToggleOutcome::*;
        match self {
            NoChange => false,
            Toggled => true,
            Cleared => true,
        }
    }
}
