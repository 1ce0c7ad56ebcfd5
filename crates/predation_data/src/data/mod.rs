//! Core data structures for the predation simulation.

pub mod entity;
pub mod events;
pub mod stats;
