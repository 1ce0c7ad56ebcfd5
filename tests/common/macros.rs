/// Asserts that the entity has exactly the given energy.
#[macro_export]
macro_rules! assert_energy {
    ($world:expr, $id:expr, $energy:expr) => {
        assert_eq!(
            $world.energy($id).expect("Entity not found in world"),
            $energy,
            "Energy mismatch for entity {}",
            $id
        );
    };
}

/// Asserts that an entity with the given ID is NOT present in the world (dead/despawned).
#[macro_export]
macro_rules! assert_entity_dead {
    ($world:expr, $id:expr) => {
        assert!(
            !$world.contains($id),
            "Entity {} should be dead but was found alive",
            $id
        );
        assert!(
            $world.cell_of($id).is_err(),
            "Entity {} is dead but still on the grid",
            $id
        );
    };
}

/// Asserts that the live count of a breed matches the expected value.
#[macro_export]
macro_rules! assert_population {
    ($world:expr, $breed:expr, $count:expr) => {
        assert_eq!(
            $world.breed_count($breed),
            $count,
            "Population count mismatch for {}",
            $breed
        );
    };
}

/// Asserts that no animal with depleted energy survived the last sweep.
#[macro_export]
macro_rules! assert_no_depleted_animals {
    ($world:expr) => {
        for view in $world.entity_views() {
            if let Some(energy) = view.energy {
                assert!(
                    energy > 0,
                    "Entity {} survived the sweep with energy {}",
                    view.id,
                    energy
                );
            }
        }
    };
}
