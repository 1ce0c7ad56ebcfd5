use super::entity::{Breed, Cell, EntityId};
use serde::{Deserialize, Serialize};

/// One row of the per-tick time series.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickSample {
    pub tick: u64,
    /// Live carnivore count.
    pub wolves: usize,
    /// Live herbivore count.
    pub sheep: usize,
    /// Fully grown patches times the herbivore gain per graze.
    pub grass_energy: i64,
}

/// Read-only view of a single entity for external renderers.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityView {
    pub id: EntityId,
    pub breed: Breed,
    pub cell: Cell,
    /// Animals only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy: Option<i64>,
    /// Vegetation only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fully_grown: Option<bool>,
}
