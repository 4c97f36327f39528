//! The caller-owned simulation instance and its command surface

use crate::config::Settings;
use crate::control::{route, Command, ControlStateMachine, Key, MouseButton, Prompt, RunState};
use crate::error::{WorldError, WorldResult};
use crate::game_of_life::seed::MAX_DENSITY_DIGIT;
use crate::game_of_life::{density_from_digit, AutomatonEngine, GridBuffer, Layout, RuleFamily, SeedGenerator};
use tracing::{debug, info};

/// Whether the front end should keep polling after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// What one tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    pub advanced: bool,
    pub auto_stopped: bool,
}

/// A grid, its rules, its controls and its seeder, owned by a single caller.
///
/// Each frame the caller invokes [`tick`](Self::tick), which advances one generation
/// when running and then takes the census the status bar and auto-stop rely on.
#[derive(Debug, Clone)]
pub struct World {
    layout: Layout,
    engine: AutomatonEngine,
    control: ControlStateMachine,
    seeder: SeedGenerator,
    live_count: usize,
}

impl World {
    /// Build a world from validated settings
    pub fn new(settings: &Settings) -> WorldResult<Self> {
        let display = &settings.display;
        let layout = Layout::new(
            display.screen_width,
            display.screen_height,
            display.cell_size,
            display.status_bar_height,
        )?;
        let simulation = &settings.simulation;
        Self::with_layout(
            layout,
            simulation.rule_family,
            simulation.initial_density,
            simulation.seed,
        )
    }

    /// Build a world on an explicit layout and seed it at `density`
    pub fn with_layout(
        layout: Layout,
        family: RuleFamily,
        density: f64,
        seed: Option<u64>,
    ) -> WorldResult<Self> {
        check_density(density)?;
        debug!(
            field_width = layout.field_width,
            field_height = layout.field_height,
            columns = layout.columns,
            rows = layout.rows,
            remainder_width = layout.remainder_width,
            remainder_height = layout.remainder_height,
            "world layout"
        );

        let mut engine = AutomatonEngine::new(layout.columns, layout.rows, family);
        let mut seeder = SeedGenerator::new(seed);
        seeder.uniform(&mut engine, density);
        let live_count = engine.census();

        Ok(Self {
            layout,
            engine,
            control: ControlStateMachine::new(family),
            seeder,
            live_count,
        })
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn grid(&self) -> &GridBuffer {
        self.engine.grid()
    }

    pub fn columns(&self) -> usize {
        self.layout.columns
    }

    pub fn rows(&self) -> usize {
        self.layout.rows
    }

    pub fn cell_size(&self) -> usize {
        self.layout.cell_size
    }

    pub fn cell_count(&self) -> usize {
        self.engine.cell_count()
    }

    pub fn generation(&self) -> u64 {
        self.engine.generation()
    }

    pub fn state(&self) -> RunState {
        self.control.state()
    }

    pub fn prompt(&self) -> Prompt {
        self.control.prompt()
    }

    /// Family whose table is currently applied
    pub fn family(&self) -> RuleFamily {
        self.engine.family()
    }

    /// Family highlighted in the mode prompt
    pub fn pending_family(&self) -> RuleFamily {
        self.control.pending_family()
    }

    pub fn engine(&self) -> &AutomatonEngine {
        &self.engine
    }

    /// Live cells as of the last census
    pub fn live_count(&self) -> usize {
        self.live_count
    }

    pub fn live_ratio(&self) -> f64 {
        self.live_count as f64 / self.cell_count() as f64
    }

    pub fn max_age_seen(&self) -> u32 {
        self.engine.max_age_seen()
    }

    /// Panics on an out-of-range index
    pub fn cell_alive_at(&self, index: usize) -> bool {
        self.engine.cell_alive_at(index)
    }

    /// Panics on an out-of-range index
    pub fn cell_age_at(&self, index: usize) -> u32 {
        self.engine.cell_age_at(index)
    }

    pub fn cell_index_from_screen_point(&self, px: i64, py: i64) -> Option<usize> {
        self.layout.cell_index_from_screen_point(px, py)
    }

    /// Advance one generation regardless of the run state
    pub fn advance(&mut self) {
        self.engine.advance();
    }

    /// One frame: advance when running, then count cells and stop on extinction or saturation
    pub fn tick(&mut self) -> TickOutcome {
        let advanced = self.control.is_running();
        if advanced {
            self.engine.advance();
        }

        TickOutcome {
            advanced,
            auto_stopped: self.census(),
        }
    }

    /// Count live cells without advancing; returns true when this stopped the world
    pub fn census(&mut self) -> bool {
        self.live_count = self.engine.census();
        let settled = self.live_count == 0 || self.live_count == self.cell_count();
        let auto_stopped = settled && self.state() != RunState::Stop;
        if auto_stopped {
            info!(
                generation = self.generation(),
                live = self.live_count,
                "grid settled, stopping"
            );
            self.control.stop();
        }
        auto_stopped
    }

    pub fn run(&mut self) {
        self.control.run();
    }

    pub fn stop(&mut self) {
        self.control.stop();
    }

    pub fn toggle_run_stop(&mut self) {
        self.control.toggle_run_stop();
    }

    pub fn clear(&mut self) {
        debug!("clear");
        self.engine.clear();
    }

    pub fn gradient(&mut self) {
        self.seeder.gradient(&mut self.engine);
    }

    pub fn uniform_seed(&mut self, density: f64) -> WorldResult<()> {
        check_density(density)?;
        self.seeder.uniform(&mut self.engine, density);
        Ok(())
    }

    pub fn set_cell(&mut self, index: usize, alive: bool) -> WorldResult<()> {
        let cell_count = self.cell_count();
        if index >= cell_count {
            return Err(WorldError::CellOutOfRange { index, cell_count });
        }
        self.engine.set_cell(index, alive);
        Ok(())
    }

    /// Edit the cell under a screen point; points off the grid are ignored
    pub fn paint_at(&mut self, px: i64, py: i64, button: MouseButton) -> Option<usize> {
        let index = self.cell_index_from_screen_point(px, py)?;
        self.engine.set_cell(index, button.paints_alive());
        Some(index)
    }

    pub fn begin_density_prompt(&mut self) {
        self.control.begin_density_prompt();
    }

    /// Reseed at `digit / 11` and close the density prompt
    pub fn enter_density_digit(&mut self, digit: u8) -> WorldResult<()> {
        if digit > MAX_DENSITY_DIGIT {
            return Err(WorldError::InvalidDigit(digit));
        }
        let density = density_from_digit(digit);
        debug!(digit, density, "density digit entered");
        self.seeder.uniform(&mut self.engine, density);
        self.control.cancel_prompt();
        Ok(())
    }

    pub fn begin_mode_prompt(&mut self) {
        self.control.begin_mode_prompt();
    }

    pub fn step_mode_selection(&mut self, delta: i32) -> RuleFamily {
        self.control.step_mode_selection(delta)
    }

    /// Commit the pending family and rebind the rule table
    pub fn confirm_mode_selection(&mut self) -> RuleFamily {
        let family = self.control.confirm_mode_selection();
        self.engine.select_family(family);
        family
    }

    pub fn cancel_prompt(&mut self) {
        self.control.cancel_prompt();
    }

    /// Carry out a routed command
    pub fn apply(&mut self, command: Command) -> WorldResult<Flow> {
        match command {
            Command::Run => self.run(),
            Command::Stop => self.stop(),
            Command::ToggleRunStop => self.toggle_run_stop(),
            Command::Clear => self.clear(),
            Command::Gradient => self.gradient(),
            Command::BeginDensityPrompt => self.begin_density_prompt(),
            Command::DensityDigit(digit) => self.enter_density_digit(digit)?,
            Command::BeginModePrompt => self.begin_mode_prompt(),
            Command::StepMode(delta) => {
                self.step_mode_selection(delta);
            }
            Command::ConfirmMode => {
                self.confirm_mode_selection();
            }
            Command::CancelPrompt => self.cancel_prompt(),
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Route a key press through the open prompt and apply it
    pub fn handle_key(&mut self, key: Key) -> WorldResult<Flow> {
        match route(self.prompt(), key) {
            Some(command) => self.apply(command),
            None => Ok(Flow::Continue),
        }
    }
}

fn check_density(density: f64) -> WorldResult<()> {
    if (0.0..=1.0).contains(&density) {
        Ok(())
    } else {
        Err(WorldError::InvalidDensity(density))
    }
}
