//! Per-entity rules applied during an activation pass.
//!
//! Each breed has exactly one dispatch point, [`activate`]. The individual
//! rules live in the submodules and operate on an [`ActivationContext`].

pub mod biological;
pub mod ecological;
pub mod movement;

use crate::config::AppConfig;
use crate::error::Result;
use crate::registry::Registry;
use crate::scheduler::BreedScheduler;
use predation_data::{Breed, DeathCause, EntityId, LiveEvent};
use rand::Rng;

/// Mutable view of the world handed to every rule.
pub struct ActivationContext<'a, R: Rng> {
    pub config: &'a AppConfig,
    pub registry: &'a mut Registry,
    pub scheduler: &'a mut BreedScheduler,
    pub rng: &'a mut R,
    pub tick: u64,
    pub events: &'a mut Vec<LiveEvent>,
}

/// Runs one entity's step.
///
/// Animals move, feed, attempt reproduction once and then pay their energy
/// tax. Vegetation only advances its regrowth countdown.
pub fn activate<R: Rng>(ctx: &mut ActivationContext<'_, R>, id: EntityId, breed: Breed) -> Result<()> {
    match breed {
        Breed::Herbivore => {
            movement::random_move(ctx, id)?;
            if ctx.config.vegetation.enabled {
                ecological::graze(ctx, id)?;
            }
            biological::try_reproduce(ctx, id, breed)?;
            if !ctx.config.vegetation.enabled {
                let energy = biological::metabolize(ctx, id)?;
                if energy <= 0 {
                    remove_entity(ctx, id, breed, DeathCause::Starvation)?;
                }
            }
        }
        Breed::Carnivore => {
            movement::random_move(ctx, id)?;
            ecological::hunt(ctx, id)?;
            biological::try_reproduce(ctx, id, breed)?;
            // Depleted wolves are left for the mortality sweep.
            biological::metabolize(ctx, id)?;
        }
        Breed::Vegetation => {
            let grass = ctx.registry.grass_mut(id)?;
            ecological::advance_regrowth(grass);
        }
    }
    Ok(())
}

/// Removes an entity from the grid, the component store and the scheduler,
/// and records its death.
pub fn remove_entity<R: Rng>(
    ctx: &mut ActivationContext<'_, R>,
    id: EntityId,
    breed: Breed,
    cause: DeathCause,
) -> Result<()> {
    ctx.registry.despawn(id)?;
    ctx.scheduler.remove(id)?;
    tracing::debug!(id = id.0, breed = %breed, cause = %cause, tick = ctx.tick, "Entity died");
    ctx.events.push(LiveEvent::Death {
        id,
        breed,
        cause,
        tick: ctx.tick,
    });
    Ok(())
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use predation_data::{Cell, Grass, Neighborhood};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    /// Owned state that an [`ActivationContext`] can borrow in unit tests.
    pub struct Fixture {
        pub config: AppConfig,
        pub registry: Registry,
        pub scheduler: BreedScheduler,
        pub rng: ChaCha8Rng,
        pub events: Vec<LiveEvent>,
    }

    impl Fixture {
        pub fn new(width: u16, height: u16) -> Self {
            let mut config = AppConfig::default();
            config.world.width = width;
            config.world.height = height;
            Self {
                config,
                registry: Registry::new(width, height),
                scheduler: BreedScheduler::new(),
                rng: ChaCha8Rng::seed_from_u64(17),
                events: Vec::new(),
            }
        }

        pub fn animal(&mut self, breed: Breed, cell: Cell, energy: i64) -> EntityId {
            let id = self
                .registry
                .spawn_animal(breed, cell, energy, Neighborhood::Moore, None, 0)
                .unwrap();
            self.scheduler.add(id, breed).unwrap();
            id
        }

        pub fn grass(&mut self, cell: Cell, grass: Grass) -> EntityId {
            let id = self.registry.spawn_grass(cell, grass).unwrap();
            self.scheduler.add(id, Breed::Vegetation).unwrap();
            id
        }

        pub fn ctx(&mut self) -> ActivationContext<'_, ChaCha8Rng> {
            ActivationContext {
                config: &self.config,
                registry: &mut self.registry,
                scheduler: &mut self.scheduler,
                rng: &mut self.rng,
                tick: 1,
                events: &mut self.events,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::Fixture;
    use super::*;
    use predation_data::{Cell, Grass};

    #[test]
    fn test_herbivore_taxed_without_vegetation() {
        let mut fx = Fixture::new(3, 3);
        fx.config.herbivore.reproduce_prob = 0.0;
        let id = fx.animal(Breed::Herbivore, Cell::new(1, 1), 3);
        activate(&mut fx.ctx(), id, Breed::Herbivore).unwrap();
        assert_eq!(fx.registry.energy(id), Ok(2));
    }

    #[test]
    fn test_herbivore_removes_itself_when_depleted() {
        let mut fx = Fixture::new(3, 3);
        fx.config.herbivore.reproduce_prob = 0.0;
        let id = fx.animal(Breed::Herbivore, Cell::new(1, 1), 1);
        activate(&mut fx.ctx(), id, Breed::Herbivore).unwrap();
        assert!(!fx.registry.contains(id));
        assert!(!fx.scheduler.contains(id));
        assert!(matches!(
            fx.events.as_slice(),
            [LiveEvent::Death {
                cause: DeathCause::Starvation,
                ..
            }]
        ));
    }

    #[test]
    fn test_herbivore_not_taxed_with_vegetation() {
        let mut fx = Fixture::new(1, 1);
        fx.config.vegetation.enabled = true;
        fx.config.herbivore.reproduce_prob = 0.0;
        let id = fx.animal(Breed::Herbivore, Cell::new(0, 0), 5);
        fx.grass(Cell::new(0, 0), Grass::regrowing(10));
        activate(&mut fx.ctx(), id, Breed::Herbivore).unwrap();
        assert_eq!(fx.registry.energy(id), Ok(5));
    }

    #[test]
    fn test_carnivore_left_for_sweep() {
        let mut fx = Fixture::new(3, 3);
        fx.config.carnivore.reproduce_prob = 0.0;
        let id = fx.animal(Breed::Carnivore, Cell::new(0, 0), 1);
        activate(&mut fx.ctx(), id, Breed::Carnivore).unwrap();
        assert_eq!(fx.registry.energy(id), Ok(0));
        assert!(fx.scheduler.contains(id));
        assert!(fx.events.is_empty());
    }

    #[test]
    fn test_vegetation_activation_counts_down() {
        let mut fx = Fixture::new(2, 2);
        let id = fx.grass(Cell::new(1, 1), Grass::regrowing(2));
        activate(&mut fx.ctx(), id, Breed::Vegetation).unwrap();
        assert_eq!(fx.registry.grass(id), Ok(Grass::regrowing(1)));
    }

    #[test]
    fn test_remove_entity_twice_fails() {
        let mut fx = Fixture::new(2, 2);
        let id = fx.animal(Breed::Herbivore, Cell::new(0, 0), 4);
        let mut ctx = fx.ctx();
        remove_entity(&mut ctx, id, Breed::Herbivore, DeathCause::Predation).unwrap();
        assert!(remove_entity(&mut ctx, id, Breed::Herbivore, DeathCause::Predation).is_err());
    }
}
