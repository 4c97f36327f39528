//! Generation stepping with per-cell age tracking

use super::grid::GridBuffer;
use super::rules::{RuleFamily, RuleTable};
use tracing::debug;

/// Advances a toroidal grid one generation at a time under the active rule table.
///
/// Indices handed to the raw accessors here must already be in range; the
/// [`World`](crate::world::World) command layer is where callers get checked access.
#[derive(Debug, Clone)]
pub struct AutomatonEngine {
    grid: GridBuffer,
    ages: Vec<u32>,
    table: RuleTable,
    max_age_seen: u32,
    generation: u64,
}

impl AutomatonEngine {
    /// Create an all-dead engine
    pub fn new(columns: usize, rows: usize, family: RuleFamily) -> Self {
        let grid = GridBuffer::new(columns, rows);
        let ages = vec![0; grid.cell_count()];
        Self {
            grid,
            ages,
            table: RuleTable::select(family),
            max_age_seen: 0,
            generation: 0,
        }
    }

    pub fn grid(&self) -> &GridBuffer {
        &self.grid
    }

    pub fn columns(&self) -> usize {
        self.grid.columns()
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn cell_count(&self) -> usize {
        self.grid.cell_count()
    }

    pub fn family(&self) -> RuleFamily {
        self.table.family()
    }

    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    /// Generations advanced since construction
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn max_age_seen(&self) -> u32 {
        self.max_age_seen
    }

    /// Rebind the transition table
    pub fn select_family(&mut self, family: RuleFamily) {
        debug!(family = family.display_name(), rule = %family.rule_string(), "rule table selected");
        self.table = RuleTable::select(family);
    }

    pub fn cell_alive_at(&self, index: usize) -> bool {
        self.grid.read(index)
    }

    pub fn cell_age_at(&self, index: usize) -> u32 {
        self.ages[index]
    }

    pub fn neighbour_count(&self, index: usize) -> u8 {
        self.grid.count_neighbours(index)
    }

    /// Step every cell once, then publish the new generation
    pub fn advance(&mut self) {
        for index in 0..self.grid.cell_count() {
            let neighbours = self.grid.count_neighbours(index);
            let next = self.table.apply(neighbours, self.grid.read(index));
            self.ages[index] = if next { self.ages[index].saturating_add(1) } else { 0 };
            self.grid.write_next(index, next);
        }
        self.grid.swap();
        self.generation += 1;
    }

    /// Edit a single cell of the current generation, restarting its age
    pub fn set_cell(&mut self, index: usize, alive: bool) {
        self.grid.set_current(index, alive);
        self.ages[index] = u32::from(alive);
        self.max_age_seen = 1;
    }

    /// Replace the current generation from a per-index generator
    pub fn reseed<F>(&mut self, mut f: F)
    where
        F: FnMut(usize) -> bool,
    {
        let ages = &mut self.ages;
        self.grid.fill_current(|index| {
            let alive = f(index);
            ages[index] = u32::from(alive);
            alive
        });
        self.max_age_seen = 1;
    }

    /// Kill every cell and forget all ages
    pub fn clear(&mut self) {
        self.grid.fill_current(|_| false);
        self.ages.iter_mut().for_each(|age| *age = 0);
        self.max_age_seen = 0;
    }

    /// Count living cells and refresh the age high-water mark
    pub fn census(&mut self) -> usize {
        let mut live = 0;
        for (index, &age) in self.ages.iter().enumerate() {
            if self.grid.read(index) {
                live += 1;
            }
            self.max_age_seen = self.max_age_seen.max(age);
        }
        live
    }
}
