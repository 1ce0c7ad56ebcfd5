use crate::config::AppConfig;
use crate::error::Result;
use crate::metrics::{DataCollector, Metrics};
use crate::registry::Registry;
use crate::scheduler::BreedScheduler;
use crate::world::World;
use predation_data::{Breed, Cell, EntityId, Grass};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

impl World {
    /// Builds a populated world: herbivores, then carnivores at uniformly
    /// random cells, then one vegetation patch per cell when vegetation is
    /// enabled.
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        let mut world = Self::empty(config)?;
        world.populate()?;
        tracing::info!(
            seed = world.seed,
            width = world.width(),
            height = world.height(),
            sheep = world.breed_count(Breed::Herbivore),
            wolves = world.breed_count(Breed::Carnivore),
            grass = world.breed_count(Breed::Vegetation),
            fingerprint = %world.config.fingerprint(),
            "World initialized"
        );
        Ok(world)
    }

    /// Builds a world with the configured grid and generator but no
    /// entities.
    pub fn empty(config: AppConfig) -> anyhow::Result<Self> {
        config.validate()?;
        let seed = match config.world.seed {
            Some(seed) => seed,
            None => {
                let seed: u64 = ChaCha8Rng::from_entropy().gen();
                tracing::warn!(seed, "No seed configured, run will not be reproducible");
                seed
            }
        };
        Ok(Self {
            tick: 0,
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
            registry: Registry::new(config.world.width, config.world.height),
            scheduler: BreedScheduler::new(),
            collector: DataCollector::new(),
            metrics: Metrics::new(config.metrics.log_interval),
            config,
        })
    }

    fn populate(&mut self) -> Result<()> {
        let (width, height) = (self.width(), self.height());
        for breed in [Breed::Herbivore, Breed::Carnivore] {
            let Some(params) = self.config.animal(breed) else {
                continue;
            };
            for _ in 0..params.initial_count {
                let x = self.rng.gen_range(0..width);
                let y = self.rng.gen_range(0..height);
                self.spawn_animal(breed, Cell::new(x, y), params.initial_energy)?;
            }
        }

        if self.config.vegetation.enabled {
            let fraction = self.config.vegetation.initial_grown_fraction;
            let regrowth = self.config.vegetation.regrowth_ticks;
            for x in 0..width {
                for y in 0..height {
                    let grass = if self.rng.gen_bool(fraction) {
                        Grass::grown()
                    } else {
                        Grass::regrowing(self.rng.gen_range(0..=regrowth))
                    };
                    self.spawn_grass(Cell::new(x, y), grass)?;
                }
            }
        }
        Ok(())
    }

    /// Adds an animal that takes part from the next tick on. Uses the
    /// configured neighborhood mode.
    pub fn spawn_animal(&mut self, breed: Breed, cell: Cell, energy: i64) -> Result<EntityId> {
        let id = self.registry.spawn_animal(
            breed,
            cell,
            energy,
            self.config.world.neighborhood,
            None,
            self.tick,
        )?;
        self.scheduler.add(id, breed)?;
        Ok(id)
    }

    /// Adds a vegetation patch.
    pub fn spawn_grass(&mut self, cell: Cell, grass: Grass) -> Result<EntityId> {
        let id = self.registry.spawn_grass(cell, grass)?;
        self.scheduler.add(id, Breed::Vegetation)?;
        Ok(id)
    }
}
