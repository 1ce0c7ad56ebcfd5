//! Error types for the simulation engine.
//!
//! Every variant signals a bug in the caller or in rule ordering; none of
//! them is recovered. Extinction, empty cells and depleted energy are normal
//! control flow and never surface here.

use predation_data::{Cell, EntityId};
use thiserror::Error;

/// Main error type for engine operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    /// Cell coordinate outside the grid extent, before any wrap is applied.
    #[error("Cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: u16,
        y: u16,
        width: u16,
        height: u16,
    },

    /// Entity is not present (double removal or stale id).
    #[error("Entity not found: {0}")]
    NotFound(EntityId),

    /// Entity is already registered (on the grid or in the scheduler).
    #[error("Entity already present: {0}")]
    AlreadyPresent(EntityId),

    /// Entity lacks a component its breed requires.
    #[error("Entity {id} has no {component} component")]
    MissingComponent {
        id: EntityId,
        component: &'static str,
    },
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, SimError>;

impl SimError {
    #[must_use]
    pub fn out_of_bounds(cell: Cell, width: u16, height: u16) -> Self {
        Self::OutOfBounds {
            x: cell.x,
            y: cell.y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn missing(id: EntityId, component: &'static str) -> Self {
        Self::MissingComponent { id, component }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SimError::out_of_bounds(Cell::new(20, 3), 20, 10);
        assert_eq!(err.to_string(), "Cell (20, 3) is outside the 20x10 grid");
    }

    #[test]
    fn test_not_found_display() {
        let err = SimError::NotFound(EntityId(7));
        assert_eq!(err.to_string(), "Entity not found: #7");
    }

    #[test]
    fn test_missing_component() {
        let err = SimError::missing(EntityId(1), "Energy");
        assert!(matches!(
            err,
            SimError::MissingComponent {
                component: "Energy",
                ..
            }
        ));
    }
}
