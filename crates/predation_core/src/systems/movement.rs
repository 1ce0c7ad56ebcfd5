use super::ActivationContext;
use crate::error::Result;
use predation_data::{Cell, EntityId};
use rand::seq::SliceRandom;
use rand::Rng;

/// Moves an animal to a uniformly random adjacent cell, wrapping at edges.
/// Returns the destination.
pub fn random_move<R: Rng>(ctx: &mut ActivationContext<'_, R>, id: EntityId) -> Result<Cell> {
    let from = ctx.registry.cell_of(id)?;
    let mode = ctx.registry.neighborhood_of(id)?;
    let candidates = ctx.registry.grid().neighborhood(from, mode, false);
    let Some(&to) = candidates.choose(&mut *ctx.rng) else {
        return Ok(from);
    };
    if to != from {
        ctx.registry.move_to(id, to)?;
    }
    Ok(to)
}

#[cfg(test)]
mod tests {
    use super::super::test_support::Fixture;
    use super::*;
    use predation_data::{Breed, Neighborhood};

    #[test]
    fn test_move_lands_on_adjacent_cell() {
        let mut fx = Fixture::new(10, 10);
        let start = Cell::new(0, 0);
        let id = fx.animal(Breed::Herbivore, start, 5);
        let neighbors = fx.registry.grid().neighborhood(start, Neighborhood::Moore, false);
        let to = random_move(&mut fx.ctx(), id).unwrap();
        assert!(neighbors.contains(&to));
        assert_ne!(to, start);
        assert_eq!(fx.registry.cell_of(id), Ok(to));
        assert!(fx.registry.occupants(start).is_empty());
    }

    #[test]
    fn test_single_cell_world_stays_put() {
        let mut fx = Fixture::new(1, 1);
        let id = fx.animal(Breed::Carnivore, Cell::new(0, 0), 5);
        for _ in 0..5 {
            assert_eq!(random_move(&mut fx.ctx(), id).unwrap(), Cell::new(0, 0));
        }
        assert_eq!(fx.registry.occupants(Cell::new(0, 0)), &[id]);
    }

    #[test]
    fn test_single_column_world_always_moves() {
        let mut fx = Fixture::new(1, 5);
        let id = fx.animal(Breed::Herbivore, Cell::new(0, 2), 5);
        for _ in 0..30 {
            let from = fx.registry.cell_of(id).unwrap();
            let to = random_move(&mut fx.ctx(), id).unwrap();
            assert_ne!(to, from);
            assert_eq!(to.x, 0);
        }
    }

    #[test]
    fn test_von_neumann_never_moves_diagonally() {
        let mut fx = Fixture::new(10, 10);
        let start = Cell::new(5, 5);
        let id = fx
            .registry
            .spawn_animal(Breed::Herbivore, start, 5, Neighborhood::VonNeumann, None, 0)
            .unwrap();
        for _ in 0..20 {
            let from = fx.registry.cell_of(id).unwrap();
            let to = random_move(&mut fx.ctx(), id).unwrap();
            let dx = (i32::from(to.x) - i32::from(from.x)).rem_euclid(10);
            let dy = (i32::from(to.y) - i32::from(from.y)).rem_euclid(10);
            let manhattan = dx.min(10 - dx) + dy.min(10 - dy);
            assert_eq!(manhattan, 1);
        }
    }

    #[test]
    fn test_moving_missing_entity_fails() {
        let mut fx = Fixture::new(3, 3);
        assert!(random_move(&mut fx.ctx(), EntityId(99)).is_err());
    }
}
