//! Serializable summaries of headless runs

use crate::game_of_life::RuleFamily;
use crate::world::World;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Outcome of one headless run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub family: RuleFamily,
    /// Canonical rule string of `family`
    pub rule: String,
    pub columns: usize,
    pub rows: usize,
    pub seed: u64,
    pub generations_requested: u64,
    pub generations_run: u64,
    pub initial_live_count: usize,
    pub final_live_count: usize,
    pub final_live_ratio: f64,
    pub max_age_seen: u32,
    /// Generation at which the grid died out or filled up
    pub settled_at: Option<u64>,
    #[serde(skip)]
    pub elapsed: Duration,
}

impl RunReport {
    pub(crate) fn from_world(
        world: &World,
        seed: u64,
        generations_requested: u64,
        initial_live_count: usize,
        settled_at: Option<u64>,
        elapsed: Duration,
    ) -> Self {
        let family = world.family();
        Self {
            family,
            rule: family.rule_string(),
            columns: world.columns(),
            rows: world.rows(),
            seed,
            generations_requested,
            generations_run: world.generation(),
            initial_live_count,
            final_live_count: world.live_count(),
            final_live_ratio: world.live_ratio(),
            max_age_seen: world.max_age_seen(),
            settled_at,
            elapsed,
        }
    }

    /// Whether the run ended in extinction
    pub fn died_out(&self) -> bool {
        self.settled_at.is_some() && self.final_live_count == 0
    }

    /// Whether the run ended with every cell alive
    pub fn saturated(&self) -> bool {
        self.settled_at.is_some() && self.final_live_count == self.columns * self.rows
    }

    /// Export as JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
