use super::entity::{Breed, Cell, EntityId};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeathCause {
    /// Eaten by a carnivore.
    Predation,
    /// Energy fell to zero or below.
    Starvation,
}

impl fmt::Display for DeathCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeathCause::Predation => f.write_str("predation"),
            DeathCause::Starvation => f.write_str("starvation"),
        }
    }
}

/// Lifecycle events emitted while a tick is processed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "event")]
pub enum LiveEvent {
    Birth {
        id: EntityId,
        parent_id: EntityId,
        breed: Breed,
        cell: Cell,
        energy: i64,
        tick: u64,
    },
    Death {
        id: EntityId,
        breed: Breed,
        cause: DeathCause,
        tick: u64,
    },
    /// A breed that had members at the start of the tick has none left.
    Extinction { breed: Breed, tick: u64 },
}

impl LiveEvent {
    #[must_use]
    pub fn tick(&self) -> u64 {
        match self {
            LiveEvent::Birth { tick, .. }
            | LiveEvent::Death { tick, .. }
            | LiveEvent::Extinction { tick, .. } => *tick,
        }
    }
}
