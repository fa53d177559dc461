use super::*;

impl TerrainMap {
    // === Dimensions ===
    #[inline]
    pub fn width(&self) -> f64 { self.width }

    #[inline]
    pub fn height(&self) -> f64 { self.height }

    #[inline]
    pub fn rows(&self) -> usize { self.rows }

    #[inline]
    pub fn cols(&self) -> usize { self.cols }

    #[inline]
    pub fn cell_width(&self) -> f64 { self.cell_width }

    #[inline]
    pub fn cell_height(&self) -> f64 { self.cell_height }

    // === Index conversion ===
    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Cell containing `p`, or `None` outside the world.
    /// Points on the right / bottom edge belong to the last column / row.
    #[inline]
    pub fn cell_of(&self, p: Vec2) -> Option<(usize, usize)> {
        if !self.is_inside(p) {
            return None;
        }
        let col = ((p.x / self.cell_width).floor() as usize).min(self.cols - 1);
        let row = (((self.height - p.y) / self.cell_height).floor() as usize).min(self.rows - 1);
        Some((row, col))
    }

    /// World coordinate at the middle of a cell
    #[inline]
    pub fn cell_centre(&self, row: usize, col: usize) -> Vec2 {
        Vec2::new(
            (col as f64 + 0.5) * self.cell_width,
            self.height - (row as f64 + 0.5) * self.cell_height,
        )
    }

    #[inline]
    pub fn is_cell_passable(&self, row: usize, col: usize) -> bool {
        debug_assert!(
            row < self.rows && col < self.cols,
            "is_cell_passable: out of bounds ({}, {}) for {}x{} bitmap",
            row,
            col,
            self.rows,
            self.cols
        );
        self.passable[self.index(row, col)]
    }

    // === Bounds checking ===
    #[inline]
    pub fn is_inside(&self, p: Vec2) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
    }

    /// Whole disc lies within the world rectangle
    pub fn is_inside_world(&self, centre: Vec2, radius: f64) -> bool {
        centre.x - radius >= 0.0
            && centre.x + radius <= self.width
            && centre.y - radius >= 0.0
            && centre.y + radius <= self.height
    }
}
