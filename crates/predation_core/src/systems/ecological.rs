//! Ecological system - grazing, predation and vegetation regrowth.

use super::{remove_entity, ActivationContext};
use crate::error::Result;
use predation_data::{Breed, DeathCause, EntityId, Grass};
use rand::Rng;

/// Herbivore feeding. Crops the first fully grown patch on the herbivore's
/// cell, if any. Returns whether it fed.
pub fn graze<R: Rng>(ctx: &mut ActivationContext<'_, R>, id: EntityId) -> Result<bool> {
    let cell = ctx.registry.cell_of(id)?;
    let regrowth = ctx.config.vegetation.regrowth_ticks;
    for patch in ctx.registry.occupants_of(cell, Breed::Vegetation) {
        let grass = ctx.registry.grass_mut(patch)?;
        if crop(grass, regrowth) {
            ctx.registry
                .add_energy(id, ctx.config.herbivore.gain_from_food)?;
            return Ok(true);
        }
    }
    Ok(false)
}

/// Carnivore feeding. Eats every herbivore sharing its cell, gaining the
/// configured fixed amount per kill. Returns the number of kills.
pub fn hunt<R: Rng>(ctx: &mut ActivationContext<'_, R>, id: EntityId) -> Result<usize> {
    let cell = ctx.registry.cell_of(id)?;
    let victims = ctx.registry.occupants_of(cell, Breed::Herbivore);
    for &victim in &victims {
        remove_entity(ctx, victim, Breed::Herbivore, DeathCause::Predation)?;
        ctx.registry
            .add_energy(id, ctx.config.carnivore.gain_from_food)?;
    }
    if !victims.is_empty() {
        tracing::debug!(
            predator = id.0,
            kills = victims.len(),
            tick = ctx.tick,
            "Carnivore fed"
        );
    }
    Ok(victims.len())
}

/// Eats a grown patch, restarting its countdown. No-op on a regrowing patch.
pub fn crop(grass: &mut Grass, regrowth_ticks: u32) -> bool {
    if !grass.fully_grown {
        return false;
    }
    grass.fully_grown = false;
    grass.countdown = regrowth_ticks;
    true
}

/// One tick of regrowth: count down while positive, become grown at zero.
pub fn advance_regrowth(grass: &mut Grass) {
    if grass.countdown > 0 {
        grass.countdown -= 1;
    }
    if grass.countdown == 0 {
        grass.fully_grown = true;
    }
}
