//! Dense square grids indexed by row-major linear offset.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use core::ops::{Add, Index, IndexMut, Sub};
use num_traits::Zero;

/// Integer cell coordinate. `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Coordinate with both axes swapped.
    #[inline]
    pub const fn swapped(self) -> Self {
        Self { x: self.y, y: self.x }
    }

    /// Squared euclidean distance to `other`.
    #[inline]
    pub fn distance_sq(self, other: Coord) -> i32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Manhattan distance to `other`.
    #[inline]
    pub fn manhattan(self, other: Coord) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

impl Add for Coord {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Coord::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Coord {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Coord::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Coord::new(x, y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A `size × size` grid of `T` stored row by row.
#[derive(Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid<T> {
    size: usize,
    cells: Vec<T>,
}

impl<T: Copy> Grid<T> {
    /// Create a grid with every cell set to `value`.
    pub fn filled(size: usize, value: T) -> Self {
        Self {
            size,
            cells: vec![value; size * size],
        }
    }

    /// Set every cell to `value`.
    pub fn fill(&mut self, value: T) {
        self.cells.iter_mut().for_each(|c| *c = value);
    }

    /// Value at `coord`, or `None` when out of bounds.
    #[inline]
    pub fn get(&self, coord: Coord) -> Option<T> {
        self.offset(coord).map(|i| self.cells[i])
    }
}

impl<T: Copy + Zero> Grid<T> {
    /// Create a grid with every cell zeroed.
    pub fn zeroed(size: usize) -> Self {
        Self::filled(size, T::zero())
    }

    /// Reset every cell to zero.
    pub fn clear(&mut self) {
        self.fill(T::zero());
    }

    /// Resize to `size` if needed, then zero every cell.
    pub fn reset(&mut self, size: usize) {
        if self.size != size {
            *self = Self::zeroed(size);
        } else {
            self.clear();
        }
    }
}

impl<T> Grid<T> {
    /// Side length.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns true if `coord` lies inside the grid.
    #[inline]
    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.x >= 0 && coord.y >= 0 && (coord.x as usize) < self.size && (coord.y as usize) < self.size
    }

    /// Linear offset of `coord`.
    #[inline]
    pub fn offset(&self, coord: Coord) -> Option<usize> {
        if self.in_bounds(coord) {
            Some(coord.y as usize * self.size + coord.x as usize)
        } else {
            None
        }
    }

    /// Mutable reference to the cell at `coord`.
    #[inline]
    pub fn get_mut(&mut self, coord: Coord) -> Option<&mut T> {
        match self.offset(coord) {
            Some(i) => Some(&mut self.cells[i]),
            None => None,
        }
    }

    /// Store `value` at `coord`. Returns false when out of bounds.
    pub fn set(&mut self, coord: Coord, value: T) -> bool {
        match self.get_mut(coord) {
            Some(cell) => {
                *cell = value;
                true
            }
            None => false,
        }
    }

    /// Every coordinate in raster order (row by row).
    pub fn coords(&self) -> Coords {
        Coords {
            size: self.size as i32,
            next: 0,
        }
    }

    /// Cells in raster order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.cells.iter()
    }

    /// Raw cell storage.
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }
}

impl<T> Index<Coord> for Grid<T> {
    type Output = T;
    /// Panics when `coord` is out of bounds.
    fn index(&self, coord: Coord) -> &T {
        assert!(self.in_bounds(coord), "coordinate {} outside grid", coord);
        let i = coord.y as usize * self.size + coord.x as usize;
        &self.cells[i]
    }
}

impl<T> IndexMut<Coord> for Grid<T> {
    fn index_mut(&mut self, coord: Coord) -> &mut T {
        assert!(self.in_bounds(coord), "coordinate {} outside grid", coord);
        let i = coord.y as usize * self.size + coord.x as usize;
        &mut self.cells[i]
    }
}

impl<T: fmt::Debug> fmt::Debug for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid<{}>:", self.size)?;
        for row in self.cells.chunks(self.size.max(1)) {
            for cell in row {
                write!(f, "{:?} ", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the coordinates of a grid in raster order.
#[derive(Clone, Copy)]
pub struct Coords {
    size: i32,
    next: i32,
}

impl Iterator for Coords {
    type Item = Coord;
    #[inline]
    fn next(&mut self) -> Option<Coord> {
        if self.next >= self.size * self.size {
            return None;
        }
        let i = self.next;
        self.next += 1;
        Some(Coord::new(i % self.size, i / self.size))
    }
}
