pub mod macros;

use predation_lib::model::config::AppConfig;
use predation_lib::model::data::{Breed, Cell, EntityId, Grass};
use predation_lib::model::world::World;

enum Spawn {
    Animal(Breed, Cell, i64),
    Patch(Cell, Grass),
}

/// Builds small hand-placed worlds. Starts from an empty, seeded world with
/// reproduction switched off.
#[allow(dead_code)]
pub struct WorldBuilder {
    config: AppConfig,
    spawns: Vec<Spawn>,
}

#[allow(dead_code)]
impl WorldBuilder {
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.world.seed = Some(7);
        config.herbivore.initial_count = 0;
        config.carnivore.initial_count = 0;
        config.herbivore.reproduce_prob = 0.0;
        config.carnivore.reproduce_prob = 0.0;
        Self {
            config,
            spawns: Vec::new(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.world.seed = Some(seed);
        self
    }

    pub fn with_size(mut self, width: u16, height: u16) -> Self {
        self.config.world.width = width;
        self.config.world.height = height;
        self
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut AppConfig),
    {
        modifier(&mut self.config);
        self
    }

    pub fn with_vegetation(mut self, regrowth_ticks: u32) -> Self {
        self.config.vegetation.enabled = true;
        self.config.vegetation.regrowth_ticks = regrowth_ticks;
        self
    }

    pub fn with_herbivore(mut self, x: u16, y: u16, energy: i64) -> Self {
        self.spawns
            .push(Spawn::Animal(Breed::Herbivore, Cell::new(x, y), energy));
        self
    }

    pub fn with_carnivore(mut self, x: u16, y: u16, energy: i64) -> Self {
        self.spawns
            .push(Spawn::Animal(Breed::Carnivore, Cell::new(x, y), energy));
        self
    }

    pub fn with_grass(mut self, x: u16, y: u16, grass: Grass) -> Self {
        self.spawns.push(Spawn::Patch(Cell::new(x, y), grass));
        self
    }

    /// Builds the world. Ids are returned in the order entities were added.
    pub fn build(self) -> (World, Vec<EntityId>) {
        let mut world = World::empty(self.config).expect("Failed to create world in test builder");
        let ids = self
            .spawns
            .into_iter()
            .map(|spawn| match spawn {
                Spawn::Animal(breed, cell, energy) => world.spawn_animal(breed, cell, energy),
                Spawn::Patch(cell, grass) => world.spawn_grass(cell, grass),
            })
            .collect::<Result<Vec<_>, _>>()
            .expect("Failed to spawn entity in test builder");
        (world, ids)
    }
}

/// Default configuration with a fixed seed.
#[allow(dead_code)]
pub fn seeded_config(seed: u64) -> AppConfig {
    let mut config = AppConfig::default();
    config.world.seed = Some(seed);
    config
}
