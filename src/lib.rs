//! Two-state cellular automaton simulator
//!
//! Conway's Game of Life and eleven related birth/survival rule families on a
//! toroidal grid, with per-cell ages for colouring and a small run/stop/prompt
//! state machine for interactive front ends.

pub mod config;
pub mod control;
pub mod error;
pub mod game_of_life;
pub mod presentation;
pub mod session;
pub mod utils;
pub mod world;

pub use config::Settings;
pub use error::{WorldError, WorldResult};
pub use session::RunReport;
pub use world::World;
