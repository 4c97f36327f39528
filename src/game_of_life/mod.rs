//! Cellular automaton core: grid buffers, rule tables, stepping and seeding

pub mod engine;
pub mod grid;
pub mod layout;
pub mod rules;
pub mod seed;

pub use engine::AutomatonEngine;
pub use grid::GridBuffer;
pub use layout::Layout;
pub use rules::{RuleFamily, RuleTable, Transition};
pub use seed::{density_from_digit, SeedGenerator};
