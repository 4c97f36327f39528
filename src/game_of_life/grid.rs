//! Double-buffered cell storage and coordinate conversion

/// Neighbour offsets `(dx, dy)`, walked in the same order for every cell.
pub const NEIGHBOUR_OFFSETS: [(isize, isize); 8] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];

/// Two generations of cell states with a selector for the current one.
///
/// Reads always hit the current generation and writes made through
/// [`write_next`](Self::write_next) always land in the other one, so a generation can
/// never observe its own partial output. [`swap`](Self::swap) publishes the written
/// generation in O(1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridBuffer {
    columns: usize,
    rows: usize,
    buffers: [Vec<bool>; 2],
    active: usize,
}

impl GridBuffer {
    /// Create a new all-dead buffer pair
    pub fn new(columns: usize, rows: usize) -> Self {
        let cell_count = columns * rows;
        Self {
            columns,
            rows,
            buffers: [vec![false; cell_count], vec![false; cell_count]],
            active: 0,
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cell_count(&self) -> usize {
        self.columns * self.rows
    }

    /// Convert grid coordinates to a linear row-major index
    #[inline]
    pub fn to_index(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.columns && y < self.rows {
            Some(x + y * self.columns)
        } else {
            None
        }
    }

    /// Convert a linear index back to `(x, y)`
    #[inline]
    pub fn from_index(&self, index: usize) -> (usize, usize) {
        (index % self.columns, index / self.columns)
    }

    /// State of a cell in the current generation
    #[inline]
    pub fn read(&self, index: usize) -> bool {
        self.buffers[self.active][index]
    }

    /// Write a cell of the generation being built
    #[inline]
    pub fn write_next(&mut self, index: usize, alive: bool) {
        self.buffers[1 - self.active][index] = alive;
    }

    /// Make the generation being built the current one
    pub fn swap(&mut self) {
        self.active = 1 - self.active;
    }

    /// Overwrite a cell of the current generation (editing and seeding)
    pub fn set_current(&mut self, index: usize, alive: bool) {
        self.buffers[self.active][index] = alive;
    }

    /// Fill the current generation from a per-index generator
    pub fn fill_current<F>(&mut self, mut f: F)
    where
        F: FnMut(usize) -> bool,
    {
        for (index, cell) in self.buffers[self.active].iter_mut().enumerate() {
            *cell = f(index);
        }
    }

    /// The current generation as a slice
    pub fn current(&self) -> &[bool] {
        &self.buffers[self.active]
    }

    /// Count living cells in the current generation
    pub fn living_count(&self) -> usize {
        self.current().iter().filter(|&&cell| cell).count()
    }

    /// Check if the current generation has no living cells
    pub fn is_empty(&self) -> bool {
        self.current().iter().all(|&cell| !cell)
    }

    /// Count living neighbours of a cell, wrapping at every edge
    pub fn count_neighbours(&self, index: usize) -> u8 {
        let (x, y) = self.from_index(index);
        let columns = self.columns as isize;
        let rows = self.rows as isize;

        NEIGHBOUR_OFFSETS
            .iter()
            .filter(|&&(dx, dy)| {
                let ox = (x as isize + dx).rem_euclid(columns) as usize;
                let oy = (y as isize + dy).rem_euclid(rows) as usize;
                self.read(ox + oy * self.columns)
            })
            .count() as u8
    }
}
