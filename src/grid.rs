use std::fmt::Display;

use crate::area::Rect;

/// A fixed-size 2D array, row-major with the origin at the top-left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Create a grid with every cell set to `fill`.
    pub fn new(width: usize, height: usize, fill: T) -> Self {
        Self {
            width,
            height,
            cells: vec![fill; width * height],
        }
    }

    /// Write `value` into every cell of `area` that lies on the grid.
    /// Areas with a zero or negative extent write nothing.
    pub fn set_area(&mut self, area: &Rect, value: T) {
        let x0 = area.x.max(0);
        let y0 = area.y.max(0);
        let x1 = (area.x + area.width).min(self.width as i32);
        let y1 = (area.y + area.height).min(self.height as i32);
        for y in y0..y1 {
            for x in x0..x1 {
                let idx = y as usize * self.width + x as usize;
                self.cells[idx] = value.clone();
            }
        }
    }
}

impl<T> Grid<T> {
    /// Create a grid by calling `initializer(x, y)` for every cell in row-major order.
    pub fn from_fn<F>(width: usize, height: usize, mut initializer: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                cells.push(initializer(x, y));
            }
        }
        Self { width, height, cells }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    pub fn get(&self, x: i32, y: i32) -> Option<&T> {
        let idx = self.index(x, y)?;
        Some(&self.cells[idx])
    }

    pub fn get_mut(&mut self, x: i32, y: i32) -> Option<&mut T> {
        let idx = self.index(x, y)?;
        Some(&mut self.cells[idx])
    }

    /// Overwrite one cell. Returns false, leaving the grid untouched, when
    /// the coordinates are off the grid.
    pub fn set(&mut self, x: i32, y: i32, value: T) -> bool {
        match self.get_mut(x, y) {
            Some(cell) => {
                *cell = value;
                true
            }
            None => false,
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks_exact(0) panics, and a zero-width grid has no cells anyway
        self.cells.chunks_exact(self.width.max(1))
    }

    pub fn for_each_with_coordinates<F>(&self, mut f: F)
    where
        F: FnMut(&T, usize, usize),
    {
        for (i, value) in self.cells.iter().enumerate() {
            f(value, i % self.width, i / self.width);
        }
    }

    pub fn map<U, F>(&self, f: F) -> Grid<U>
    where
        F: FnMut(&T) -> U,
    {
        Grid {
            width: self.width,
            height: self.height,
            cells: self.cells.iter().map(f).collect(),
        }
    }

    /// Build a new grid from `f(value, x, y)`. `f` sees the unmodified source grid.
    pub fn map_with_coordinates<U, F>(&self, mut f: F) -> Grid<U>
    where
        F: FnMut(&T, usize, usize) -> U,
    {
        let cells = self
            .cells
            .iter()
            .enumerate()
            .map(|(i, value)| f(value, i % self.width, i / self.width))
            .collect();
        Grid {
            width: self.width,
            height: self.height,
            cells,
        }
    }
}

impl<T: Display> Grid<T> {
    /// One line per row, cells concatenated without separators.
    pub fn inspect(&self) -> String {
        self.rows()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
