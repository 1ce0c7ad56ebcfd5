use crate::error::{Result, SimError};
use predation_data::{Cell, EntityId, Neighborhood};
use std::collections::HashMap;

const MOORE_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

const VON_NEUMANN_OFFSETS: [(i32, i32); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];

/// Toroidal occupancy grid with O(1) cell lookup.
///
/// Each cell holds the ids of the entities standing on it, in placement
/// order. Any number of entities of any breed may share a cell. A reverse
/// index keeps `remove` and `cell_of` O(1) in the number of cells.
///
/// Coordinates handed to [`SpatialGrid::place`] must already be inside the
/// grid; callers moving across an edge go through [`SpatialGrid::wrap`].
///
/// # Examples
/// ```
/// use predation_core::grid::SpatialGrid;
/// use predation_data::{Cell, EntityId};
///
/// let mut grid = SpatialGrid::new(10, 10);
/// grid.place(EntityId(1), Cell::new(0, 4)).unwrap();
///
/// let west = grid.wrap(-1, 4);
/// assert_eq!(west, Cell::new(9, 4));
/// assert_eq!(grid.occupants(Cell::new(0, 4)), &[EntityId(1)]);
/// ```
#[derive(Clone, Debug)]
pub struct SpatialGrid {
    width: u16,
    height: u16,
    /// cells[y * width + x] contains ids of entities at that cell
    cells: Vec<Vec<EntityId>>,
    locations: HashMap<EntityId, Cell>,
}

impl SpatialGrid {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Vec::new(); width as usize * height as usize],
            locations: HashMap::new(),
        }
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Number of cells.
    #[inline]
    pub fn area(&self) -> usize {
        self.cells.len()
    }

    /// Number of placed entities.
    #[inline]
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    #[inline]
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.x < self.width && cell.y < self.height
    }

    #[inline]
    fn index(&self, cell: Cell) -> usize {
        cell.y as usize * self.width as usize + cell.x as usize
    }

    /// Maps any signed coordinate onto the torus.
    #[inline]
    pub fn wrap(&self, x: i32, y: i32) -> Cell {
        Cell {
            x: x.rem_euclid(i32::from(self.width)) as u16,
            y: y.rem_euclid(i32::from(self.height)) as u16,
        }
    }

    /// Registers an entity at a cell.
    pub fn place(&mut self, id: EntityId, cell: Cell) -> Result<()> {
        if !self.in_bounds(cell) {
            return Err(SimError::out_of_bounds(cell, self.width, self.height));
        }
        if self.locations.contains_key(&id) {
            return Err(SimError::AlreadyPresent(id));
        }
        let idx = self.index(cell);
        self.cells[idx].push(id);
        self.locations.insert(id, cell);
        Ok(())
    }

    /// Unregisters an entity, returning the cell it occupied.
    pub fn remove(&mut self, id: EntityId) -> Result<Cell> {
        let cell = self.locations.remove(&id).ok_or(SimError::NotFound(id))?;
        let idx = self.index(cell);
        let occupants = &mut self.cells[idx];
        if let Some(pos) = occupants.iter().position(|&other| other == id) {
            occupants.remove(pos);
        }
        Ok(cell)
    }

    /// Moves a placed entity to another cell.
    pub fn move_to(&mut self, id: EntityId, cell: Cell) -> Result<()> {
        if !self.in_bounds(cell) {
            return Err(SimError::out_of_bounds(cell, self.width, self.height));
        }
        self.remove(id)?;
        self.place(id, cell)
    }

    /// Entities at a cell. Empty for unoccupied or out-of-range cells.
    #[inline]
    pub fn occupants(&self, cell: Cell) -> &[EntityId] {
        if self.in_bounds(cell) {
            &self.cells[self.index(cell)]
        } else {
            &[]
        }
    }

    #[inline]
    pub fn cell_of(&self, id: EntityId) -> Option<Cell> {
        self.locations.get(&id).copied()
    }

    #[inline]
    pub fn contains(&self, id: EntityId) -> bool {
        self.locations.contains_key(&id)
    }

    /// Cells adjacent to `cell` under `mode`, wrapped onto the torus.
    ///
    /// With `include_center` the cell itself comes first. Duplicates produced
    /// by wrapping on grids narrower than three cells are dropped, so every
    /// distinct cell appears once. Without `include_center` the cell never
    /// appears, even when an offset wraps back onto it, except on a 1x1
    /// torus where it is the only cell.
    pub fn neighborhood(&self, cell: Cell, mode: Neighborhood, include_center: bool) -> Vec<Cell> {
        let offsets: &[(i32, i32)] = match mode {
            Neighborhood::Moore => &MOORE_OFFSETS,
            Neighborhood::VonNeumann => &VON_NEUMANN_OFFSETS,
        };

        let mut cells = Vec::with_capacity(offsets.len() + 1);
        if include_center {
            cells.push(cell);
        }
        for &(dx, dy) in offsets {
            let next = self.wrap(i32::from(cell.x) + dx, i32::from(cell.y) + dy);
            if next != cell && !cells.contains(&next) {
                cells.push(next);
            }
        }
        if cells.is_empty() {
            cells.push(cell);
        }
        cells
    }
}
