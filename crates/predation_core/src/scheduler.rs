//! Breed-partitioned random activation.
//!
//! Every tick the breed order is shuffled, then each breed's members are
//! snapshotted, shuffled and activated one by one. Entities removed while the
//! pass is running are skipped; entities born during the pass are staged and
//! only join their bucket when [`BreedScheduler::commit_births`] runs at the
//! tick boundary.

use crate::error::{Result, SimError};
use predation_data::{Breed, EntityId};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Membership {
    Active(Breed),
    Staged(Breed),
}

impl Membership {
    fn breed(self) -> Breed {
        match self {
            Membership::Active(breed) | Membership::Staged(breed) => breed,
        }
    }
}

/// Live population registry, partitioned by breed.
#[derive(Debug, Clone, Default)]
pub struct BreedScheduler {
    buckets: [Vec<EntityId>; 3],
    staged: Vec<(EntityId, Breed)>,
    members: HashMap<EntityId, Membership>,
    counts: [usize; 3],
    steps: u64,
}

impl BreedScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entity that takes part in the next activation pass.
    pub fn add(&mut self, id: EntityId, breed: Breed) -> Result<()> {
        if self.members.contains_key(&id) {
            return Err(SimError::AlreadyPresent(id));
        }
        self.members.insert(id, Membership::Active(breed));
        self.buckets[breed.index()].push(id);
        self.counts[breed.index()] += 1;
        Ok(())
    }

    /// Adds an entity born during the current pass. It is counted right away
    /// but not activated before the next tick.
    pub fn stage(&mut self, id: EntityId, breed: Breed) -> Result<()> {
        if self.members.contains_key(&id) {
            return Err(SimError::AlreadyPresent(id));
        }
        self.members.insert(id, Membership::Staged(breed));
        self.staged.push((id, breed));
        self.counts[breed.index()] += 1;
        Ok(())
    }

    /// Merges staged births into their buckets. Returns how many were merged.
    pub fn commit_births(&mut self) -> usize {
        let staged = std::mem::take(&mut self.staged);
        let merged = staged.len();
        for (id, breed) in staged {
            self.members.insert(id, Membership::Active(breed));
            self.buckets[breed.index()].push(id);
        }
        merged
    }

    /// Removes an entity, active or staged, returning its breed.
    pub fn remove(&mut self, id: EntityId) -> Result<Breed> {
        let membership = self.members.remove(&id).ok_or(SimError::NotFound(id))?;
        let breed = membership.breed();
        match membership {
            Membership::Active(_) => {
                let bucket = &mut self.buckets[breed.index()];
                if let Some(pos) = bucket.iter().position(|&other| other == id) {
                    bucket.remove(pos);
                }
            }
            Membership::Staged(_) => {
                self.staged.retain(|&(other, _)| other != id);
            }
        }
        self.counts[breed.index()] -= 1;
        Ok(breed)
    }

    #[inline]
    pub fn contains(&self, id: EntityId) -> bool {
        self.members.contains_key(&id)
    }

    /// Live population of a breed, including births staged this tick.
    #[inline]
    pub fn breed_count(&self, breed: Breed) -> usize {
        self.counts[breed.index()]
    }

    /// Total live population across breeds.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Births waiting for the tick boundary.
    pub fn staged_len(&self) -> usize {
        self.staged.len()
    }

    /// Completed activation passes.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Active members of a breed in insertion order.
    pub fn members(&self, breed: Breed) -> &[EntityId] {
        &self.buckets[breed.index()]
    }

    /// Breed processing order for one tick.
    pub fn breed_order<R: Rng>(&self, rng: &mut R) -> [Breed; 3] {
        let mut order = Breed::ALL;
        order.shuffle(rng);
        order
    }

    /// Shuffled copy of a breed's current active members.
    pub fn snapshot<R: Rng>(&self, breed: Breed, rng: &mut R) -> Vec<EntityId> {
        let mut snapshot = self.buckets[breed.index()].clone();
        snapshot.shuffle(rng);
        snapshot
    }

    /// Runs one full activation pass.
    ///
    /// `activate` is called exactly once for every entity that was active
    /// when its breed's turn began and is still present when its turn comes.
    /// It receives the scheduler so it can remove entities and stage births.
    /// Staged births are merged after the pass.
    pub fn step<R, F>(&mut self, rng: &mut R, mut activate: F) -> Result<()>
    where
        R: Rng,
        F: FnMut(&mut Self, &mut R, EntityId, Breed) -> Result<()>,
    {
        for breed in self.breed_order(rng) {
            let snapshot = self.snapshot(breed, rng);
            for id in snapshot {
                if self.members.get(&id) != Some(&Membership::Active(breed)) {
                    continue;
                }
                activate(self, rng, id, breed)?;
            }
        }
        self.commit_births();
        self.steps += 1;
        Ok(())
    }
}
