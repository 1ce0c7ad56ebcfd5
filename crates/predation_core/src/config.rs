//! Configuration management for simulation parameters.
//!
//! Strongly-typed configuration structures that map to `config.toml`. Every
//! parameter is independently settable; any key left out of the file keeps
//! its default.
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [world]
//! width = 20
//! height = 20
//! seed = 42
//!
//! [herbivore]
//! initial_count = 100
//! reproduce_prob = 0.04
//!
//! [carnivore]
//! gain_from_food = 20
//!
//! [vegetation]
//! enabled = true
//! regrowth_ticks = 30
//! ```

use predation_data::{Breed, Neighborhood};
use serde::{Deserialize, Serialize};

/// Upper bound for configured initial energies and food gains.
pub const MAX_ENERGY: i64 = 1_000_000;

/// World-level configuration: grid extent, randomness and movement rule.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    pub width: u16,
    pub height: u16,
    /// Seed of the shared generator. `None` seeds from entropy, which makes
    /// the run non-reproducible.
    pub seed: Option<u64>,
    /// Adjacency rule given to every animal at creation.
    pub neighborhood: Neighborhood,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 20,
            height: 20,
            seed: None,
            neighborhood: Neighborhood::Moore,
        }
    }
}

/// Breed-independent view of an animal section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimalParams {
    pub initial_count: usize,
    pub initial_energy: i64,
    pub reproduce_prob: f64,
    pub gain_from_food: i64,
}

/// Sheep parameters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct HerbivoreConfig {
    pub initial_count: usize,
    pub initial_energy: i64,
    /// Probability of a reproduction attempt succeeding each tick.
    pub reproduce_prob: f64,
    /// Energy gained per graze. Also the weight of one grown patch in the
    /// grass energy series.
    pub gain_from_food: i64,
}

impl Default for HerbivoreConfig {
    fn default() -> Self {
        Self {
            initial_count: 100,
            initial_energy: 40,
            reproduce_prob: 0.04,
            gain_from_food: 4,
        }
    }
}

/// Wolf parameters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct CarnivoreConfig {
    pub initial_count: usize,
    pub initial_energy: i64,
    /// Probability of a reproduction attempt succeeding each tick.
    pub reproduce_prob: f64,
    /// Fixed energy gained per herbivore eaten. The victim's own energy is
    /// never transferred.
    pub gain_from_food: i64,
}

impl Default for CarnivoreConfig {
    fn default() -> Self {
        Self {
            initial_count: 50,
            initial_energy: 40,
            reproduce_prob: 0.05,
            gain_from_food: 20,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct VegetationConfig {
    /// Grazing mode when true; fixed herbivore energy tax when false.
    pub enabled: bool,
    /// Probability that a patch starts fully grown.
    pub initial_grown_fraction: f64,
    pub regrowth_ticks: u32,
}

impl Default for VegetationConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            initial_grown_fraction: 0.3,
            regrowth_ticks: 30,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct MetricsConfig {
    /// Emit an info-level summary every this many ticks. 0 disables it.
    pub log_interval: u64,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self { log_interval: 100 }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub world: WorldConfig,
    pub herbivore: HerbivoreConfig,
    pub carnivore: CarnivoreConfig,
    pub vegetation: VegetationConfig,
    pub metrics: MetricsConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            world: WorldConfig::default(),
            herbivore: HerbivoreConfig::default(),
            carnivore: CarnivoreConfig::default(),
            vegetation: VegetationConfig::default(),
            metrics: MetricsConfig::default(),
        }
    }
}

impl AppConfig {
    /// Animal parameters of a breed. Vegetation has none.
    #[must_use]
    pub fn animal(&self, breed: Breed) -> Option<AnimalParams> {
        match breed {
            Breed::Herbivore => Some(AnimalParams {
                initial_count: self.herbivore.initial_count,
                initial_energy: self.herbivore.initial_energy,
                reproduce_prob: self.herbivore.reproduce_prob,
                gain_from_food: self.herbivore.gain_from_food,
            }),
            Breed::Carnivore => Some(AnimalParams {
                initial_count: self.carnivore.initial_count,
                initial_energy: self.carnivore.initial_energy,
                reproduce_prob: self.carnivore.reproduce_prob,
                gain_from_food: self.carnivore.gain_from_food,
            }),
            Breed::Vegetation => None,
        }
    }

    /// Validates all configuration parameters.
    ///
    /// # Validation Rules
    /// - Grid dimensions must be positive and at most 1000
    /// - Initial counts must be at most 100000 per breed
    /// - Initial energies must be positive, gains non-negative
    /// - Probabilities and fractions must be in [0.0, 1.0]
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.world.width > 0, "Grid width must be positive");
        anyhow::ensure!(self.world.width <= 1000, "Grid width too large (max 1000)");
        anyhow::ensure!(self.world.height > 0, "Grid height must be positive");
        anyhow::ensure!(
            self.world.height <= 1000,
            "Grid height too large (max 1000)"
        );

        for breed in [Breed::Herbivore, Breed::Carnivore] {
            let Some(animal) = self.animal(breed) else {
                continue;
            };
            let name = breed.label();
            anyhow::ensure!(
                animal.initial_count <= 100_000,
                "Initial {name} count too large (max 100000)"
            );
            anyhow::ensure!(
                animal.initial_energy > 0,
                "Initial {name} energy must be positive"
            );
            anyhow::ensure!(
                animal.initial_energy <= MAX_ENERGY,
                "Initial {name} energy too large (max {MAX_ENERGY})"
            );
            anyhow::ensure!(
                (0.0..=1.0).contains(&animal.reproduce_prob),
                "{name} reproduce probability must be in [0.0, 1.0]"
            );
            anyhow::ensure!(
                animal.gain_from_food >= 0,
                "{name} gain from food must be non-negative"
            );
            anyhow::ensure!(
                animal.gain_from_food <= MAX_ENERGY,
                "{name} gain from food too large (max {MAX_ENERGY})"
            );
        }

        anyhow::ensure!(
            (0.0..=1.0).contains(&self.vegetation.initial_grown_fraction),
            "Initial grown vegetation fraction must be in [0.0, 1.0]"
        );

        Ok(())
    }

    /// Parses and validates a TOML document.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Hex SHA-256 of the parameters that shape population dynamics.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.world).as_bytes());
        hasher.update(format!("{:?}", self.herbivore).as_bytes());
        hasher.update(format!("{:?}", self.carnivore).as_bytes());
        hasher.update(format!("{:?}", self.vegetation).as_bytes());
        hex::encode(hasher.finalize())
    }
}
