use std::collections::HashSet;

use goblin_trail_core::HexCoord;
use goblin_trail_system_grid::{cell_count, generate};
use proptest::prelude::*;

proptest! {
    #[test]
    fn every_coordinate_lies_inside_the_hexagon(radius in 1i32..12, size in 0.5f32..5.0) {
        let cells = generate(radius, size).expect("valid grid");

        for cell in &cells {
            prop_assert!(cell.coord().within_radius(radius));
        }
    }

    #[test]
    fn coordinates_are_unique_and_exhaustive(radius in 1i32..12) {
        let cells = generate(radius, 1.0).expect("valid grid");
        let unique: HashSet<HexCoord> = cells.iter().map(|cell| cell.coord()).collect();

        prop_assert_eq!(unique.len(), cells.len());
        prop_assert_eq!(cells.len(), cell_count(radius));
    }

    #[test]
    fn positions_are_a_pure_function_of_coordinates(radius in 1i32..8, size in 0.5f32..5.0) {
        let cells = generate(radius, size).expect("valid grid");

        for cell in &cells {
            prop_assert_eq!(cell.position(), cell.coord().to_world(size));
        }
    }
}

#[test]
fn generation_is_deterministic() {
    let first = generate(6, 2.5).expect("valid grid");
    let second = generate(6, 2.5).expect("valid grid");

    assert_eq!(first, second, "same radius and size must yield the same grid");
    assert_eq!(first.len(), 127);
}
