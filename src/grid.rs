/// Destination pixel grid of a `width` x `height` region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelGrid {
    pub width: u32,
    pub height: u32,
}

impl PixelGrid {
    pub fn new(width: u32, height: u32) -> PixelGrid {
        PixelGrid { width, height }
    }

    pub fn len(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Center of the grid in pixel units, `((width - 1) / 2, (height - 1) / 2)`.
    pub fn center(&self) -> (f64, f64) {
        (
            (self.width as f64 - 1.0) / 2.0,
            (self.height as f64 - 1.0) / 2.0,
        )
    }

    /// Diagonal length `sqrt(width^2 + height^2)`.
    pub fn diagonal(&self) -> f64 {
        (self.width as f64).hypot(self.height as f64)
    }

    /// Row-major `(col, row)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        (0..self.height).flat_map(move |row| (0..self.width).map(move |col| (col, row)))
    }

    /// Materialized column and row index arrays, flat and row-major:
    /// `i[row * width + col] = col`, `j[row * width + col] = row`.
    pub fn meshgrid(&self) -> (Vec<u32>, Vec<u32>) {
        self.iter().unzip()
    }
}
