//! Terrain - boolean passability grid laid over continuous world coordinates
//!
//! The bitmap is stored row-major with row 0 at the TOP of the world (y = height),
//! matching how terrain images are authored. World y grows upward.
//!
//! - indexing: continuous coordinate <-> (row, col)
//! - sampling: point / disc / adjacency queries
//! - scan:     brute-force whole-grid scans (row-parallel with `parallel`)

use crate::core::{ModelError, ModelResult, Vec2};

mod indexing;
mod sampling;
mod scan;

pub use sampling::{ADJACENCY_SCALE, ANGULAR_STEPS, RADIAL_STEPS};

#[derive(Clone, Debug)]
pub struct TerrainMap {
    width: f64,
    height: f64,
    rows: usize,
    cols: usize,
    cell_width: f64,
    cell_height: f64,
    passable: Vec<bool>,
}

impl TerrainMap {
    /// Build from a row-major flat bitmap (`rows * cols` cells, top row first)
    pub fn from_flat(width: f64, height: f64, rows: usize, cols: usize, passable: Vec<bool>) -> ModelResult<Self> {
        if !(width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0) {
            return Err(ModelError::InvalidTerrain(format!(
                "world size must be positive and finite, got {}x{}",
                width, height
            )));
        }
        if rows == 0 || cols == 0 {
            return Err(ModelError::InvalidTerrain("bitmap has no cells".to_string()));
        }
        let cells = rows.checked_mul(cols).ok_or_else(|| {
            ModelError::InvalidTerrain(format!("{}x{} bitmap is too large", rows, cols))
        })?;
        if passable.len() != cells {
            return Err(ModelError::InvalidTerrain(format!(
                "expected {} cells for {}x{} bitmap, got {}",
                cells,
                rows,
                cols,
                passable.len()
            )));
        }

        Ok(Self {
            width,
            height,
            rows,
            cols,
            cell_width: width / cols as f64,
            cell_height: height / rows as f64,
            passable,
        })
    }

    /// Build from nested rows; every row must have the same length
    pub fn new(width: f64, height: f64, cells: &[Vec<bool>]) -> ModelResult<Self> {
        let cols = cells.first().map_or(0, Vec::len);
        if let Some(bad) = cells.iter().position(|row| row.len() != cols) {
            return Err(ModelError::InvalidTerrain(format!(
                "row {} has {} cells, expected {}",
                bad,
                cells[bad].len(),
                cols
            )));
        }
        let flat = cells.iter().flatten().copied().collect();
        Self::from_flat(width, height, cells.len(), cols, flat)
    }

    /// Parse an ASCII map: `#` is impassable, anything else passable.
    /// One line per row, top row first; blank lines are ignored.
    pub fn from_ascii(width: f64, height: f64, text: &str) -> ModelResult<Self> {
        let cells: Vec<Vec<bool>> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| line.chars().map(|c| c != '#').collect())
            .collect();
        Self::new(width, height, &cells)
    }

    /// Fully passable map (open sky)
    pub fn open(width: f64, height: f64, rows: usize, cols: usize) -> ModelResult<Self> {
        Self::from_flat(width, height, rows, cols, vec![true; rows * cols])
    }

    /// Centre of the world
    pub fn centre(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}
