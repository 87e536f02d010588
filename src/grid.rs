//! Flat N×N×N storage and quarter-turn permutations of its cells.
//!
//! Cells live in one `Vec` indexed x-major: `idx = i * N * N + j * N + k`.
//! Rotations are computed on doubled, centered coordinates so odd and even
//! sizes are handled the same way without floating point: a cell at grid
//! index `c` has doubled offset `2c - (N - 1)` from the center along each
//! axis.

use crate::geometry::{Axis, Matrix};

/// Grid coordinates `[i, j, k]` along axes 0, 1, 2.
pub type Coord = [usize; 3];

/// Converts coordinates to a linear cell index.
#[inline(always)]
pub const fn coord_to_idx(size: usize, [i, j, k]: Coord) -> usize {
    i * size * size + j * size + k
}

/// Converts a linear cell index back to coordinates.
#[inline(always)]
pub const fn idx_to_coord(size: usize, cell_index: usize) -> Coord {
    [
        cell_index / (size * size),
        (cell_index / size) % size,
        cell_index % size,
    ]
}

/// Applies `rotation` to a cell position about the grid center.
///
/// `rotation` must be a signed permutation matrix.
pub fn rotate_coord(size: usize, coord: Coord, rotation: &Matrix) -> Coord {
    let dim_m1 = size as i32 - 1;

    // doubled centered coordinates
    let centered = coord.map(|c| 2 * c as i32 - dim_m1);
    let mut rotated = [0i32; 3];
    for (row, out) in rotation.iter().zip(&mut rotated) {
        *out = (0..3)
            .map(|col| i32::from(row[col]) * centered[col])
            .sum();
    }
    rotated.map(|r| ((r + dim_m1) / 2) as usize)
}

/// An owned cubic grid of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    size: usize,
    cells: Vec<T>,
}

impl<T: Copy> Grid<T> {
    /// Creates a grid with every cell set to `fill`.
    pub fn new(size: usize, fill: T) -> Self {
        Self {
            size,
            cells: vec![fill; size * size * size],
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the cell at `coord`, or `None` if it is outside the grid.
    pub fn get(&self, coord: Coord) -> Option<&T> {
        if coord.iter().all(|&c| c < self.size) {
            self.cells.get(coord_to_idx(self.size, coord))
        } else {
            None
        }
    }

    /// All cells in index order.
    #[inline]
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    #[inline]
    pub fn cells_mut(&mut self) -> &mut [T] {
        &mut self.cells
    }

    /// Iterates over every cell together with its coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &T)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, cell)| (idx_to_coord(self.size, idx), cell))
    }

    /// Returns the indices of the slice at `layer` along `axis`, row-major
    /// over the two remaining axes.
    pub fn slice_indices(&self, axis: Axis, layer: usize) -> impl Iterator<Item = usize> + '_ {
        let (a, b) = axis.others();
        let size = self.size;
        (0..size).flat_map(move |u| {
            (0..size).map(move |v| {
                let mut coord = [0; 3];
                coord[axis.index()] = layer;
                coord[a.index()] = u;
                coord[b.index()] = v;
                coord_to_idx(size, coord)
            })
        })
    }

    /// Rotates the slice at `layer` along `axis` in place.
    ///
    /// `rotation` must fix `axis`, which every quarter turn about it does.
    pub fn rotate_slice(&mut self, axis: Axis, layer: usize, rotation: &Matrix) {
        let moved: Vec<(usize, T)> = self
            .slice_indices(axis, layer)
            .map(|idx| {
                let dest = rotate_coord(self.size, idx_to_coord(self.size, idx), rotation);
                (coord_to_idx(self.size, dest), self.cells[idx])
            })
            .collect();

        for (dest, cell) in moved {
            self.cells[dest] = cell;
        }
    }

    /// Rotates the whole grid at once.
    pub fn rotate_all(&mut self, rotation: &Matrix) {
        let mut rotated = self.cells.clone();
        for (idx, &cell) in self.cells.iter().enumerate() {
            let dest = rotate_coord(self.size, idx_to_coord(self.size, idx), rotation);
            rotated[coord_to_idx(self.size, dest)] = cell;
        }
        self.cells = rotated;
    }
}
