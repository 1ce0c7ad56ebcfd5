//! Component storage and spatial placement, kept in lockstep.
//!
//! Components live in a [`hecs::World`]; the [`SpatialGrid`] indexes entity
//! positions. Every mutation that touches a position goes through this type
//! so the `Cell` component and the grid never disagree.

use crate::error::{Result, SimError};
use crate::grid::SpatialGrid;
use predation_data::{
    Breed, Cell, Energy, EntityId, EntityView, Grass, Identity, Movement, Neighborhood,
};
use std::collections::HashMap;

pub struct Registry {
    ecs: hecs::World,
    grid: SpatialGrid,
    handles: HashMap<EntityId, hecs::Entity>,
    next_id: u64,
}

impl Registry {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            ecs: hecs::World::new(),
            grid: SpatialGrid::new(width, height),
            handles: HashMap::new(),
            next_id: 1,
        }
    }

    #[inline]
    pub fn grid(&self) -> &SpatialGrid {
        &self.grid
    }

    /// Number of entities, vegetation included.
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    fn allocate_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    fn handle(&self, id: EntityId) -> Result<hecs::Entity> {
        self.handles.get(&id).copied().ok_or(SimError::NotFound(id))
    }

    /// Creates an animal and places it on the grid.
    pub fn spawn_animal(
        &mut self,
        breed: Breed,
        cell: Cell,
        energy: i64,
        neighborhood: Neighborhood,
        parent_id: Option<EntityId>,
        tick: u64,
    ) -> Result<EntityId> {
        debug_assert!(breed.is_animal());
        if !self.grid.in_bounds(cell) {
            return Err(SimError::out_of_bounds(
                cell,
                self.grid.width(),
                self.grid.height(),
            ));
        }
        let id = self.allocate_id();
        self.grid.place(id, cell)?;
        let handle = self.ecs.spawn((
            Identity {
                id,
                parent_id,
                birth_tick: tick,
            },
            breed,
            cell,
            Energy(energy),
            Movement { neighborhood },
        ));
        self.handles.insert(id, handle);
        Ok(id)
    }

    /// Creates a vegetation patch and places it on the grid.
    pub fn spawn_grass(&mut self, cell: Cell, grass: Grass) -> Result<EntityId> {
        if !self.grid.in_bounds(cell) {
            return Err(SimError::out_of_bounds(
                cell,
                self.grid.width(),
                self.grid.height(),
            ));
        }
        let id = self.allocate_id();
        self.grid.place(id, cell)?;
        let handle = self.ecs.spawn((
            Identity {
                id,
                parent_id: None,
                birth_tick: 0,
            },
            Breed::Vegetation,
            cell,
            grass,
        ));
        self.handles.insert(id, handle);
        Ok(id)
    }

    /// Removes an entity from the grid and the component store.
    pub fn despawn(&mut self, id: EntityId) -> Result<()> {
        let handle = self.handles.remove(&id).ok_or(SimError::NotFound(id))?;
        self.grid.remove(id)?;
        self.ecs
            .despawn(handle)
            .map_err(|_| SimError::NotFound(id))
    }

    #[inline]
    pub fn contains(&self, id: EntityId) -> bool {
        self.handles.contains_key(&id)
    }

    pub fn breed(&self, id: EntityId) -> Result<Breed> {
        let handle = self.handle(id)?;
        self.ecs
            .get::<&Breed>(handle)
            .map(|breed| *breed)
            .map_err(|_| SimError::missing(id, "Breed"))
    }

    pub fn energy(&self, id: EntityId) -> Result<i64> {
        let handle = self.handle(id)?;
        self.ecs
            .get::<&Energy>(handle)
            .map(|energy| energy.0)
            .map_err(|_| SimError::missing(id, "Energy"))
    }

    /// Adds `delta` (possibly negative) to an animal's energy and returns the
    /// new value. Saturates at the `i64` bounds.
    pub fn add_energy(&mut self, id: EntityId, delta: i64) -> Result<i64> {
        let handle = self.handle(id)?;
        let energy = self
            .ecs
            .query_one_mut::<&mut Energy>(handle)
            .map_err(|_| SimError::missing(id, "Energy"))?;
        energy.0 = energy.0.saturating_add(delta);
        Ok(energy.0)
    }

    pub fn set_energy(&mut self, id: EntityId, value: i64) -> Result<()> {
        let handle = self.handle(id)?;
        let energy = self
            .ecs
            .query_one_mut::<&mut Energy>(handle)
            .map_err(|_| SimError::missing(id, "Energy"))?;
        energy.0 = value;
        Ok(())
    }

    pub fn grass(&self, id: EntityId) -> Result<Grass> {
        let handle = self.handle(id)?;
        self.ecs
            .get::<&Grass>(handle)
            .map(|grass| *grass)
            .map_err(|_| SimError::missing(id, "Grass"))
    }

    pub fn grass_mut(&mut self, id: EntityId) -> Result<&mut Grass> {
        let handle = self.handle(id)?;
        self.ecs
            .query_one_mut::<&mut Grass>(handle)
            .map_err(|_| SimError::missing(id, "Grass"))
    }

    pub fn neighborhood_of(&self, id: EntityId) -> Result<Neighborhood> {
        let handle = self.handle(id)?;
        self.ecs
            .get::<&Movement>(handle)
            .map(|movement| movement.neighborhood)
            .map_err(|_| SimError::missing(id, "Movement"))
    }

    pub fn identity(&self, id: EntityId) -> Result<Identity> {
        let handle = self.handle(id)?;
        self.ecs
            .get::<&Identity>(handle)
            .map(|identity| *identity)
            .map_err(|_| SimError::missing(id, "Identity"))
    }

    pub fn cell_of(&self, id: EntityId) -> Result<Cell> {
        self.grid.cell_of(id).ok_or(SimError::NotFound(id))
    }

    /// Moves an entity, updating its grid placement and `Cell` component.
    pub fn move_to(&mut self, id: EntityId, cell: Cell) -> Result<()> {
        let handle = self.handle(id)?;
        self.grid.move_to(id, cell)?;
        let position = self
            .ecs
            .query_one_mut::<&mut Cell>(handle)
            .map_err(|_| SimError::missing(id, "Cell"))?;
        *position = cell;
        Ok(())
    }

    #[inline]
    pub fn occupants(&self, cell: Cell) -> &[EntityId] {
        self.grid.occupants(cell)
    }

    /// Occupants of a cell belonging to `breed`, in placement order.
    pub fn occupants_of(&self, cell: Cell, breed: Breed) -> Vec<EntityId> {
        self.grid
            .occupants(cell)
            .iter()
            .copied()
            .filter(|&id| self.breed(id).map_or(false, |b| b == breed))
            .collect()
    }

    /// Number of fully grown vegetation patches.
    pub fn fully_grown_count(&self) -> usize {
        self.ecs
            .query::<&Grass>()
            .iter()
            .filter(|(_, grass)| grass.fully_grown)
            .count()
    }

    /// Animals whose energy is zero or below, sorted by id.
    pub fn depleted_animals(&self) -> Vec<(EntityId, Breed)> {
        let mut depleted: Vec<_> = self
            .ecs
            .query::<(&Identity, &Breed, &Energy)>()
            .iter()
            .filter(|(_, (_, _, energy))| energy.is_depleted())
            .map(|(_, (identity, breed, _))| (identity.id, *breed))
            .collect();
        depleted.sort_by_key(|(id, _)| *id);
        depleted
    }

    /// Read-only views of every entity, sorted by id.
    pub fn views(&self) -> Vec<EntityView> {
        let mut views: Vec<EntityView> = self
            .ecs
            .query::<(&Identity, &Breed, &Cell, Option<&Energy>, Option<&Grass>)>()
            .iter()
            .map(|(_, (identity, breed, cell, energy, grass))| EntityView {
                id: identity.id,
                breed: *breed,
                cell: *cell,
                energy: energy.map(|e| e.0),
                fully_grown: grass.map(|g| g.fully_grown),
            })
            .collect();
        views.sort_by_key(|view| view.id);
        views
    }
}
