//! Run/stop state and the prompt sub-state

use crate::game_of_life::RuleFamily;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Top-level simulation state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    /// Shown but not advancing; only reachable by constructing a new world
    #[default]
    Wait,
    /// Advances one generation per tick
    Run,
    /// Frozen
    Stop,
}

/// Which multi-key command, if any, the user is in the middle of
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Prompt {
    #[default]
    None,
    DensityDigit,
    ModeChoice,
}

#[derive(Debug, Clone, Default)]
pub struct ControlStateMachine {
    state: RunState,
    prompt: Prompt,
    active_family: RuleFamily,
    pending_family: RuleFamily,
}

impl ControlStateMachine {
    pub fn new(family: RuleFamily) -> Self {
        Self {
            state: RunState::Wait,
            prompt: Prompt::None,
            active_family: family,
            pending_family: family,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn prompt(&self) -> Prompt {
        self.prompt
    }

    pub fn active_family(&self) -> RuleFamily {
        self.active_family
    }

    pub fn pending_family(&self) -> RuleFamily {
        self.pending_family
    }

    /// Whether the engine should advance this tick
    pub fn is_running(&self) -> bool {
        self.state == RunState::Run
    }

    pub fn run(&mut self) {
        self.state = RunState::Run;
    }

    pub fn stop(&mut self) {
        self.state = RunState::Stop;
    }

    /// Flip between running and stopped; waiting is left alone
    pub fn toggle_run_stop(&mut self) {
        self.state = match self.state {
            RunState::Run => RunState::Stop,
            RunState::Stop => RunState::Run,
            RunState::Wait => RunState::Wait,
        };
    }

    pub fn begin_density_prompt(&mut self) {
        self.prompt = Prompt::DensityDigit;
    }

    /// Open mode selection, starting from the family currently in use
    pub fn begin_mode_prompt(&mut self) {
        self.pending_family = self.active_family;
        self.prompt = Prompt::ModeChoice;
    }

    /// Move the pending selection without touching the live rule table
    pub fn step_mode_selection(&mut self, delta: i32) -> RuleFamily {
        self.pending_family = self.pending_family.step(delta);
        debug!(
            index = self.pending_family.index(),
            family = self.pending_family.display_name(),
            "pending mode"
        );
        self.pending_family
    }

    /// Commit the pending selection and close the prompt
    pub fn confirm_mode_selection(&mut self) -> RuleFamily {
        self.active_family = self.pending_family;
        self.prompt = Prompt::None;
        self.active_family
    }

    /// Close whatever prompt is open, dropping an uncommitted mode choice
    pub fn cancel_prompt(&mut self) {
        if self.prompt == Prompt::ModeChoice {
            self.pending_family = self.active_family;
        }
        self.prompt = Prompt::None;
    }
}
