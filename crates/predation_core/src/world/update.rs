use crate::error::Result;
use crate::systems::{self, ActivationContext};
use crate::world::World;
use predation_data::{Breed, DeathCause, LiveEvent};
use std::time::Instant;

impl World {
    /// Advances the simulation by one tick.
    ///
    /// - Activation pass over every breed in shuffled order, staged births
    ///   merged at the end of the pass
    /// - Mortality sweep over animals with no energy left
    /// - Extinction detection and series sampling
    ///
    /// # Returns
    /// The births, deaths and extinctions that occurred this tick, in the
    /// order they happened.
    pub fn step(&mut self) -> Result<Vec<LiveEvent>> {
        let start = Instant::now();
        self.tick += 1;
        let tick = self.tick;
        let animals_before = [Breed::Herbivore, Breed::Carnivore].map(|b| self.breed_count(b));
        let mut events = Vec::new();

        {
            let World {
                config,
                registry,
                scheduler,
                rng,
                ..
            } = self;
            scheduler.step(rng, |scheduler, rng, id, breed| {
                let mut ctx = ActivationContext {
                    config: &*config,
                    registry: &mut *registry,
                    scheduler,
                    rng,
                    tick,
                    events: &mut events,
                };
                systems::activate(&mut ctx, id, breed)
            })?;
        }

        self.sweep_depleted(&mut events)?;

        for (breed, before) in [Breed::Herbivore, Breed::Carnivore].into_iter().zip(animals_before) {
            if before > 0 && self.breed_count(breed) == 0 {
                events.push(LiveEvent::Extinction { breed, tick });
            }
        }

        let sample = self.sample();
        self.collector.push(sample);
        self.metrics.record_events(&events);
        self.metrics.record_tick(start.elapsed(), &sample);
        Ok(events)
    }

    /// Calls [`World::step`] exactly `steps` times. Extinction does not stop
    /// the run.
    pub fn run(&mut self, steps: u64) -> Result<Vec<LiveEvent>> {
        let mut events = Vec::new();
        for _ in 0..steps {
            events.extend(self.step()?);
        }
        self.metrics.log_summary(&self.sample());
        Ok(events)
    }

    /// Removes every animal whose energy is zero or below.
    fn sweep_depleted(&mut self, events: &mut Vec<LiveEvent>) -> Result<()> {
        for (id, breed) in self.registry.depleted_animals() {
            self.registry.despawn(id)?;
            self.scheduler.remove(id)?;
            tracing::debug!(id = id.0, breed = %breed, tick = self.tick, "Entity starved");
            events.push(LiveEvent::Death {
                id,
                breed,
                cause: DeathCause::Starvation,
                tick: self.tick,
            });
        }
        debug_assert!(self.registry.depleted_animals().is_empty());
        Ok(())
    }
}
