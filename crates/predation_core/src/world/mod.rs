use crate::config::AppConfig;
use crate::error::Result;
use crate::metrics::{DataCollector, Metrics};
use crate::registry::Registry;
use crate::scheduler::BreedScheduler;
use predation_data::{Breed, Cell, EntityId, EntityView, Grass, TickSample};
use rand_chacha::ChaCha8Rng;

pub mod init;
pub mod update;

/// The simulation engine: owns the grid, the population, the generator and
/// the collected series.
pub struct World {
    pub config: AppConfig,
    tick: u64,
    seed: u64,
    rng: ChaCha8Rng,
    registry: Registry,
    scheduler: BreedScheduler,
    collector: DataCollector,
    metrics: Metrics,
}

impl World {
    /// Completed ticks.
    #[inline]
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Seed the generator was created from, whether configured or drawn.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.registry.grid().width()
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.registry.grid().height()
    }

    /// Live members of a breed, including births staged this tick.
    pub fn breed_count(&self, breed: Breed) -> usize {
        self.scheduler.breed_count(breed)
    }

    /// Live animals and vegetation patches.
    pub fn population_count(&self) -> usize {
        self.scheduler.len()
    }

    pub fn fully_grown_grass_count(&self) -> usize {
        self.registry.fully_grown_count()
    }

    /// Grown patches weighted by the energy a herbivore gets from each.
    pub fn grass_energy(&self) -> i64 {
        self.fully_grown_grass_count() as i64 * self.config.herbivore.gain_from_food
    }

    /// Current values of the three collected series.
    pub fn sample(&self) -> TickSample {
        TickSample {
            tick: self.tick,
            wolves: self.breed_count(Breed::Carnivore),
            sheep: self.breed_count(Breed::Herbivore),
            grass_energy: self.grass_energy(),
        }
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.scheduler.contains(id)
    }

    pub fn energy(&self, id: EntityId) -> Result<i64> {
        self.registry.energy(id)
    }

    pub fn grass(&self, id: EntityId) -> Result<Grass> {
        self.registry.grass(id)
    }

    pub fn cell_of(&self, id: EntityId) -> Result<Cell> {
        self.registry.cell_of(id)
    }

    pub fn occupants(&self, cell: Cell) -> &[EntityId] {
        self.registry.occupants(cell)
    }

    /// Active members of a breed.
    pub fn members(&self, breed: Breed) -> &[EntityId] {
        self.scheduler.members(breed)
    }

    /// Views of every live entity, sorted by id.
    pub fn entity_views(&self) -> Vec<EntityView> {
        self.registry.views()
    }

    pub fn collector(&self) -> &DataCollector {
        &self.collector
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}
