use super::*;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

impl TerrainMap {
    /// Share of cells marked passable, in [0, 1]
    pub fn passable_fraction(&self) -> f64 {
        let open = self.passable.iter().filter(|&&p| p).count();
        open as f64 / self.passable.len() as f64
    }

    /// Centres of every cell where a disc of `radius` would sit inside the world
    /// and rest against terrain. Row-major order, top row first.
    ///
    /// Rows are scanned in parallel when the `parallel` feature is on; the result
    /// is identical to the sequential scan.
    pub fn adjacent_cell_centres(&self, radius: f64) -> Vec<Vec2> {
        #[cfg(feature = "parallel")]
        {
            (0..self.rows)
                .into_par_iter()
                .flat_map_iter(|row| self.adjacent_in_row(row, radius))
                .collect()
        }

        #[cfg(not(feature = "parallel"))]
        {
            (0..self.rows)
                .flat_map(|row| self.adjacent_in_row(row, radius))
                .collect()
        }
    }

    fn adjacent_in_row(&self, row: usize, radius: f64) -> Vec<Vec2> {
        (0..self.cols)
            .map(|col| self.cell_centre(row, col))
            .filter(|&c| self.is_inside_world(c, radius) && self.is_adjacent(c, radius))
            .collect()
    }
}
