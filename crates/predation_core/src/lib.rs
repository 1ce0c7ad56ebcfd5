//! # Predation Core
//!
//! The simulation engine for a wolf/sheep/grass predator-prey ecosystem on a
//! toroidal grid.
//!
//! This crate contains the discrete-time simulation logic:
//! - Toroidal occupancy grid with O(1) cell lookup
//! - Breed-partitioned random activation scheduler
//! - Grazing, predation, reproduction and regrowth rules
//! - Mortality sweep and per-tick series collection
//! - Metrics collection and structured logging
//!
//! ## Architecture
//!
//! - **Component storage**: identity, breed, cell, energy, movement mode and
//!   grass state live in a `hecs` world behind a [`registry::Registry`]
//! - **System-based updates**: movement, ecological and biological rules in
//!   [`systems`], dispatched once per activation on the entity's breed
//! - **Deterministic simulation**: one seeded `ChaCha8Rng` drives every
//!   random choice, so a seed and a configuration fix the whole run
//!
//! ## Example
//!
//! ```
//! use predation_core::config::AppConfig;
//! use predation_core::world::World;
//! use predation_data::Breed;
//!
//! let mut config = AppConfig::default();
//! config.world.seed = Some(42);
//! config.vegetation.enabled = true;
//!
//! let mut world = World::new(config).unwrap();
//! world.run(10).unwrap();
//!
//! assert_eq!(world.collector().samples().len(), 10);
//! assert_eq!(world.breed_count(Breed::Vegetation), 400);
//! ```

pub mod config;
pub mod error;
pub mod grid;
pub mod metrics;
pub mod registry;
pub mod scheduler;
pub mod systems;
pub mod world;
