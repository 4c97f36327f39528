//! Error types for the simulation core

use thiserror::Error;

/// Errors reported by the [`World`](crate::world::World) command surface.
///
/// The engine itself has no failure path; these only surface when a caller hands the
/// command layer an index, digit or density that does not fit the grid.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorldError {
    #[error("cell index {index} is outside a grid of {cell_count} cells")]
    CellOutOfRange { index: usize, cell_count: usize },

    #[error("density digit must be 0-9, got {0}")]
    InvalidDigit(u8),

    #[error("density must lie in 0.0..=1.0, got {0}")]
    InvalidDensity(f64),

    #[error("a {field_width}x{field_height} field cannot hold cells of size {cell_size}")]
    InvalidLayout {
        field_width: usize,
        field_height: usize,
        cell_size: usize,
    },
}

pub type WorldResult<T> = std::result::Result<T, WorldError>;
