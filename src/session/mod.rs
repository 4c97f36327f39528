//! Headless runs over a configured world

pub mod report;
pub mod runner;

pub use report::RunReport;
pub use runner::{simulate, survey};
