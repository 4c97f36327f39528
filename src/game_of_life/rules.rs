//! Birth/survival rule families and their transition tables

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of entries in a transition table (neighbour counts 0 to 8)
pub const TABLE_SIZE: usize = 9;

/// What happens to a cell for one neighbour count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transition {
    /// Dead next generation
    Perish,
    /// Keeps its state: survives if alive, stays dead if dead
    Rest,
    /// Alive next generation
    Wake,
    /// Born if dead, dies if alive
    Flip,
}

impl Transition {
    #[inline]
    pub fn apply(self, alive: bool) -> bool {
        match self {
            Transition::Perish => false,
            Transition::Rest => alive,
            Transition::Wake => true,
            Transition::Flip => !alive,
        }
    }

    /// Single-letter code used in rule listings
    pub fn code(self) -> char {
        match self {
            Transition::Perish => 'P',
            Transition::Rest => 'R',
            Transition::Wake => 'W',
            Transition::Flip => 'F',
        }
    }

    fn from_membership(born: bool, survives: bool) -> Self {
        match (born, survives) {
            (true, true) => Transition::Wake,
            (true, false) => Transition::Flip,
            (false, true) => Transition::Rest,
            (false, false) => Transition::Perish,
        }
    }
}

/// The twelve supported rule families, in mode-selection order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleFamily {
    #[default]
    Conway,
    Replicator,
    Seeds,
    #[serde(rename = "b25_s4")]
    B25S4,
    LifeWithoutDeath,
    #[serde(rename = "34_life")]
    ThreeFourLife,
    Diamoeba,
    #[serde(rename = "2x2")]
    TwoByTwo,
    HighLife,
    DayAndNight,
    Morley,
    Anneal,
}

impl RuleFamily {
    pub const COUNT: usize = 12;

    pub const ALL: [RuleFamily; Self::COUNT] = [
        RuleFamily::Conway,
        RuleFamily::Replicator,
        RuleFamily::Seeds,
        RuleFamily::B25S4,
        RuleFamily::LifeWithoutDeath,
        RuleFamily::ThreeFourLife,
        RuleFamily::Diamoeba,
        RuleFamily::TwoByTwo,
        RuleFamily::HighLife,
        RuleFamily::DayAndNight,
        RuleFamily::Morley,
        RuleFamily::Anneal,
    ];

    /// Position in the mode-selection cycle
    pub fn index(self) -> usize {
        self as usize
    }

    /// Family at a cycle position; wraps modulo the family count
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::COUNT]
    }

    /// Step through the cycle, wrapping in both directions
    pub fn step(self, delta: i32) -> Self {
        let count = Self::COUNT as i64;
        let next = (self.index() as i64 + delta as i64).rem_euclid(count);
        Self::ALL[next as usize]
    }

    /// Short name shown in the status bar
    pub fn display_name(self) -> &'static str {
        match self {
            RuleFamily::Conway => "CONWAY",
            RuleFamily::Replicator => "Replicator",
            RuleFamily::Seeds => "Seeds",
            RuleFamily::B25S4 => "B25_S4",
            RuleFamily::LifeWithoutDeath => "Life_without_death",
            RuleFamily::ThreeFourLife => "34_Life",
            RuleFamily::Diamoeba => "Diamoeba",
            RuleFamily::TwoByTwo => "2x2",
            RuleFamily::HighLife => "HighLife",
            RuleFamily::DayAndNight => "Day_Night",
            RuleFamily::Morley => "Morley",
            RuleFamily::Anneal => "Anneal",
        }
    }

    /// Neighbour counts at which a dead cell is born
    pub fn birth_counts(self) -> &'static [u8] {
        match self {
            RuleFamily::Conway => &[3],
            RuleFamily::Replicator => &[1, 3, 5, 7],
            RuleFamily::Seeds => &[2],
            RuleFamily::B25S4 => &[2, 5],
            RuleFamily::LifeWithoutDeath => &[3],
            RuleFamily::ThreeFourLife => &[3, 4],
            RuleFamily::Diamoeba => &[3, 5, 6, 7, 8],
            RuleFamily::TwoByTwo => &[3, 6],
            RuleFamily::HighLife => &[3, 6],
            RuleFamily::DayAndNight => &[3, 6, 7, 8],
            RuleFamily::Morley => &[3, 6, 8],
            RuleFamily::Anneal => &[4, 6, 7, 8],
        }
    }

    /// Neighbour counts at which a live cell survives
    pub fn survival_counts(self) -> &'static [u8] {
        match self {
            RuleFamily::Conway => &[2, 3],
            RuleFamily::Replicator => &[1, 3, 5, 7],
            RuleFamily::Seeds => &[],
            RuleFamily::B25S4 => &[4],
            RuleFamily::LifeWithoutDeath => &[0, 1, 2, 3, 4, 5, 6, 7, 8],
            RuleFamily::ThreeFourLife => &[3, 4],
            RuleFamily::Diamoeba => &[5, 6, 7, 8],
            RuleFamily::TwoByTwo => &[1, 2, 5],
            RuleFamily::HighLife => &[2, 3],
            RuleFamily::DayAndNight => &[3, 4, 6, 7, 8],
            RuleFamily::Morley => &[2, 4, 5],
            RuleFamily::Anneal => &[3, 5, 6, 7, 8],
        }
    }

    /// Canonical rule string, e.g. `B3/S23`
    pub fn rule_string(self) -> String {
        format!(
            "B{}/S{}",
            self.birth_counts().iter().join(""),
            self.survival_counts().iter().join("")
        )
    }
}

impl fmt::Display for RuleFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.display_name(), self.rule_string())
    }
}

impl FromStr for RuleFamily {
    type Err = anyhow::Error;

    /// Accepts a cycle index, a display name or a canonical rule string
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        if let Ok(index) = wanted.parse::<usize>() {
            if index < Self::COUNT {
                return Ok(Self::from_index(index));
            }
            anyhow::bail!("Rule family index {} out of range 0-{}", index, Self::COUNT - 1);
        }

        Self::ALL
            .iter()
            .copied()
            .find(|family| {
                family.display_name().eq_ignore_ascii_case(wanted)
                    || family.rule_string().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| anyhow::anyhow!("Unknown rule family: {}", wanted))
    }
}

/// The active nine-entry transition table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleTable {
    family: RuleFamily,
    transitions: [Transition; TABLE_SIZE],
}

impl RuleTable {
    /// Build the table for a rule family
    pub fn select(family: RuleFamily) -> Self {
        let births = family.birth_counts();
        let survivals = family.survival_counts();
        let mut transitions = [Transition::Perish; TABLE_SIZE];
        for (count, slot) in transitions.iter_mut().enumerate() {
            let count = count as u8;
            *slot = Transition::from_membership(births.contains(&count), survivals.contains(&count));
        }
        Self { family, transitions }
    }

    pub fn family(&self) -> RuleFamily {
        self.family
    }

    pub fn transitions(&self) -> &[Transition; TABLE_SIZE] {
        &self.transitions
    }

    /// Next state of a cell with `neighbour_count` live neighbours
    #[inline]
    pub fn apply(&self, neighbour_count: u8, alive: bool) -> bool {
        self.transitions[neighbour_count as usize].apply(alive)
    }

    /// Compact listing such as `PPRWPPPPP`
    pub fn codes(&self) -> String {
        self.transitions.iter().map(|t| t.code()).collect()
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::select(RuleFamily::Conway)
    }
}
