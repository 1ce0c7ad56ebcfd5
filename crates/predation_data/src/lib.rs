//! # Predation Data
//!
//! Plain, serializable data shared by the engine and its consumers:
//! identifiers, grid cells, breeds, entity components, lifecycle events,
//! per-tick samples and entity views.

pub mod data;

pub use data::entity::{Breed, Cell, Energy, EntityId, Grass, Identity, Movement, Neighborhood};
pub use data::events::{DeathCause, LiveEvent};
pub use data::stats::{EntityView, TickSample};
