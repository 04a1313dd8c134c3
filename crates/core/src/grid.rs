//! Fixed-size 2D cell buffer shared by every generation stage.

use std::ops::{Index, IndexMut};

use serde::Serialize;

use crate::error::{DungeonError, Result};
use crate::types::{Pos, Side};

const DIAGONAL_OFFSETS: [(i64, i64); 4] = [(-1, 1), (1, 1), (-1, -1), (1, -1)];

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Grid<T> {
    width: usize,
    length: usize,
    cells: Vec<T>,
}

impl<T: Clone + Default> Grid<T> {
    pub fn new(width: usize, length: usize) -> Self {
        Self::filled(width, length, T::default())
    }
}

impl<T: Clone> Grid<T> {
    pub fn filled(width: usize, length: usize, value: T) -> Self {
        Self { width, length, cells: vec![value; width * length] }
    }
}

impl<T> Grid<T> {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn contains(&self, x: i64, z: i64) -> bool {
        x >= 0 && z >= 0 && (x as usize) < self.width && (z as usize) < self.length
    }

    pub fn is_border(&self, x: usize, z: usize) -> bool {
        x == 0 || z == 0 || x + 1 == self.width || z + 1 == self.length
    }

    /// Every cell position, `x` outer and `z` inner.
    pub fn positions(&self) -> impl Iterator<Item = Pos> + use<T> {
        let length = self.length;
        (0..self.width).flat_map(move |x| (0..length).map(move |z| Pos { x, z }))
    }

    fn index_of(&self, x: usize, z: usize) -> Option<usize> {
        (x < self.width && z < self.length).then_some(z * self.width + x)
    }

    fn out_of_range(&self, x: usize, z: usize) -> DungeonError {
        DungeonError::OutOfRange { x, z, width: self.width, length: self.length }
    }
}

impl<T: Copy> Grid<T> {
    pub fn get(&self, x: usize, z: usize) -> Result<T> {
        self.index_of(x, z).map(|index| self.cells[index]).ok_or_else(|| self.out_of_range(x, z))
    }

    pub fn set(&mut self, x: usize, z: usize, value: T) -> Result<()> {
        let index = self.index_of(x, z).ok_or_else(|| self.out_of_range(x, z))?;
        self.cells[index] = value;
        Ok(())
    }

    /// Cell at `(x + dx, z + dz)`, or `None` when that lands off the grid.
    pub fn neighbor(&self, x: usize, z: usize, dx: i64, dz: i64) -> Option<T> {
        let nx = x as i64 + dx;
        let nz = z as i64 + dz;
        if !self.contains(nx, nz) {
            return None;
        }
        Some(self[(nx as usize, nz as usize)])
    }
}

impl<T: Copy + PartialEq> Grid<T> {
    pub fn count(&self, value: T) -> usize {
        self.cells.iter().filter(|&&cell| cell == value).count()
    }

    pub fn count_adjacent(&self, x: usize, z: usize, value: T) -> usize {
        self.count_offsets(x, z, value, &Side::ALL.map(Side::offset))
    }

    pub fn count_diagonal(&self, x: usize, z: usize, value: T) -> usize {
        self.count_offsets(x, z, value, &DIAGONAL_OFFSETS)
    }

    /// True when all eight surrounding cells exist and hold `value`.
    pub fn fully_enclosed_by(&self, x: usize, z: usize, value: T) -> bool {
        self.count_adjacent(x, z, value) == 4 && self.count_diagonal(x, z, value) == 4
    }

    fn count_offsets(&self, x: usize, z: usize, value: T, offsets: &[(i64, i64)]) -> usize {
        offsets
            .iter()
            .filter(|&&(dx, dz)| self.neighbor(x, z, dx, dz) == Some(value))
            .count()
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (x, z): (usize, usize)) -> &T {
        assert!(x < self.width && z < self.length, "cell ({x}, {z}) outside grid");
        &self.cells[z * self.width + x]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    fn index_mut(&mut self, (x, z): (usize, usize)) -> &mut T {
        assert!(x < self.width && z < self.length, "cell ({x}, {z}) outside grid");
        &mut self.cells[z * self.width + x]
    }
}
