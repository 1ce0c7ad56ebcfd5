use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of an entity. Assigned from a monotonically increasing
/// counter and never reused within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A grid cell. Also used as the position component of every entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub x: u16,
    pub y: u16,
}

impl Cell {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Species category of an entity. Determines its behavior set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Breed {
    Herbivore,
    Carnivore,
    Vegetation,
}

impl Breed {
    pub const ALL: [Breed; 3] = [Breed::Herbivore, Breed::Carnivore, Breed::Vegetation];

    #[must_use]
    pub fn is_animal(self) -> bool {
        matches!(self, Breed::Herbivore | Breed::Carnivore)
    }

    /// Dense index used for per-breed buckets.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Breed::Herbivore => 0,
            Breed::Carnivore => 1,
            Breed::Vegetation => 2,
        }
    }

    /// Series label, as shown on population charts.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Breed::Herbivore => "Sheep",
            Breed::Carnivore => "Wolves",
            Breed::Vegetation => "Grass",
        }
    }
}

impl fmt::Display for Breed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Adjacency rule used for movement and spawn-cell selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Neighborhood {
    /// 8 surrounding cells, diagonals included.
    #[default]
    Moore,
    /// 4 orthogonally adjacent cells.
    VonNeumann,
}

/// Identity of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: EntityId,
    pub parent_id: Option<EntityId>,
    pub birth_tick: u64,
}

/// Energy of an animal. May be zero or negative between an activation and
/// the mortality sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Energy(pub i64);

impl Energy {
    #[must_use]
    pub fn is_depleted(self) -> bool {
        self.0 <= 0
    }
}

/// Movement mode of an animal, fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movement {
    pub neighborhood: Neighborhood,
}

/// State of a vegetation patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grass {
    pub fully_grown: bool,
    /// Ticks until regrowth. Not consulted while `fully_grown`.
    pub countdown: u32,
}

impl Grass {
    #[must_use]
    pub fn grown() -> Self {
        Self {
            fully_grown: true,
            countdown: 0,
        }
    }

    #[must_use]
    pub fn regrowing(countdown: u32) -> Self {
        Self {
            fully_grown: false,
            countdown,
        }
    }
}
