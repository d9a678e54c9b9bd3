mod derive_face_colors;

pub use derive_face_colors::DeriveFaceColors;

use crate::math::Rgba;

/// One RGBA color per render cell of the board mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorBuffer {
    colors: Vec<Rgba>,
}

impl ColorBuffer {
    /// Creates a buffer of `cell_count` cells, all set to `fill`.
    #[must_use]
    pub fn new(cell_count: usize, fill: Rgba) -> Self {
        Self {
            colors: vec![fill; cell_count],
        }
    }

    /// Returns the color of `cell`, if it exists.
    #[must_use]
    pub fn get(&self, cell: usize) -> Option<Rgba> {
        self.colors.get(cell).copied()
    }

    /// Number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns `true` if the buffer has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// All cell colors in cell order.
    #[must_use]
    pub fn as_slice(&self) -> &[Rgba] {
        &self.colors
    }

    /// Flattens the buffer to `[r, g, b, a, r, g, b, a, ...]` for upload.
    #[must_use]
    pub fn to_flat(&self) -> Vec<f64> {
        self.colors.iter().flat_map(|c| c.to_array()).collect()
    }

    fn paint(&mut self, cells: &[usize], color: Rgba) {
        for &cell in cells {
            self.colors[cell] = color;
        }
    }
}
