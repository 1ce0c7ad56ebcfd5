//! Biological system - asexual reproduction and metabolic cost.

use super::ActivationContext;
use crate::error::Result;
use predation_data::{Breed, EntityId, LiveEvent};
use rand::seq::SliceRandom;
use rand::Rng;

/// Splits a parent's energy for reproduction.
///
/// Returns `(parent_after, child)` with `child = energy / 2` (floored) and
/// `parent_after + child == energy`, or `None` when the parent has no energy
/// to spare.
#[must_use]
pub fn split_energy(energy: i64) -> Option<(i64, i64)> {
    if energy <= 1 {
        return None;
    }
    let child = energy.div_euclid(2);
    Some((energy - child, child))
}

/// One reproduction attempt.
///
/// A single roll against the breed's probability; on success and with energy
/// to spare, the offspring is spawned on a random cell of the parent's
/// neighborhood (its own cell included) and staged in the scheduler so it is
/// first activated next tick. Returns the child's id.
pub fn try_reproduce<R: Rng>(
    ctx: &mut ActivationContext<'_, R>,
    id: EntityId,
    breed: Breed,
) -> Result<Option<EntityId>> {
    let Some(params) = ctx.config.animal(breed) else {
        return Ok(None);
    };
    if !ctx.rng.gen_bool(params.reproduce_prob) {
        return Ok(None);
    }
    let energy = ctx.registry.energy(id)?;
    let Some((parent_after, child_energy)) = split_energy(energy) else {
        return Ok(None);
    };

    let mode = ctx.registry.neighborhood_of(id)?;
    let home = ctx.registry.cell_of(id)?;
    let candidates = ctx.registry.grid().neighborhood(home, mode, true);
    // The center is always a candidate, so this never falls back.
    let cell = candidates.choose(&mut *ctx.rng).copied().unwrap_or(home);

    ctx.registry.set_energy(id, parent_after)?;
    let child = ctx
        .registry
        .spawn_animal(breed, cell, child_energy, mode, Some(id), ctx.tick)?;
    ctx.scheduler.stage(child, breed)?;

    tracing::debug!(
        parent = id.0,
        child = child.0,
        breed = %breed,
        energy = child_energy,
        tick = ctx.tick,
        "Entity born"
    );
    ctx.events.push(LiveEvent::Birth {
        id: child,
        parent_id: id,
        breed,
        cell,
        energy: child_energy,
        tick: ctx.tick,
    });
    Ok(Some(child))
}

/// Per-tick energy tax of one unit. Returns the energy left.
pub fn metabolize<R: Rng>(ctx: &mut ActivationContext<'_, R>, id: EntityId) -> Result<i64> {
    ctx.registry.add_energy(id, -1)
}
