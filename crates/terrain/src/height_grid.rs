use std::fmt::Write as _;

use crate::terrain_error::TerrainError;

/// Square grid of elevations, row-major, `size` samples per side.
///
/// Produced by `diamond_square::generate` and read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct HeightGrid {
    pub(crate) heights: Vec<f32>,
    size: usize,
}

impl HeightGrid {
    /// A `size x size` grid with every cell set to NaN, so unassigned cells
    /// are detectable.
    pub(crate) fn unassigned(size: usize) -> Self {
        Self {
            heights: vec![f32::NAN; size * size],
            size,
        }
    }

    /// Build a grid from explicit rows. Every row must have as many entries
    /// as there are rows.
    pub fn from_rows(rows: Vec<Vec<f32>>) -> Result<Self, TerrainError> {
        let size = rows.len();
        if let Some(bad) = rows.iter().find(|r| r.len() != size) {
            return Err(TerrainError::NotSquare {
                rows: size,
                cols: bad.len(),
            });
        }
        Ok(Self {
            heights: rows.into_iter().flatten().collect(),
            size,
        })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    #[inline]
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.heights[self.index(row, col)]
    }

    #[inline]
    pub(crate) fn set(&mut self, row: usize, col: usize, height: f32) {
        let idx = self.index(row, col);
        self.heights[idx] = height;
    }

    pub fn heights(&self) -> &[f32] {
        &self.heights
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f32]> {
        self.heights.chunks(self.size.max(1))
    }

    /// (min, max) elevation, or `None` for an empty grid.
    pub fn min_max(&self) -> Option<(f32, f32)> {
        self.heights.iter().fold(None, |acc, &h| match acc {
            None => Some((h, h)),
            Some((lo, hi)) => Some((lo.min(h), hi.max(h))),
        })
    }

    /// Row-by-row text listing of the elevations, for debugging only.
    ///
    /// Each row is written as `h0, h1, ..., ` followed by a newline.
    pub fn dump(&self) -> String {
        let mut out = String::with_capacity(self.heights.len() * 8);
        for row in self.rows() {
            for h in row {
                let _ = write!(out, "{h}, ");
            }
            out.push('\n');
        }
        out
    }
}
