use std::collections::BTreeSet;

use goblin_trail_core::{Cell, CellId, ConfigurationError, Path};
use goblin_trail_system_grid::generate;
use goblin_trail_system_hazards::place;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn straight_board(length: u32) -> (Vec<Cell>, Path) {
    let cells = generate(4, 1.0).expect("valid grid");
    let path = Path::new((0..length).map(CellId::new).collect(), 2.0);
    (cells, path)
}

#[test]
fn places_requested_number_of_distinct_interior_hazards() {
    for seed in 0..64 {
        let (mut cells, path) = straight_board(50);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let goblins = place(&mut cells, &path, 7, &mut rng).expect("seven fit in 48 cells");

        let indices: BTreeSet<usize> = goblins.iter().map(|goblin| goblin.path_index).collect();
        assert_eq!(indices.len(), 7, "seed {seed} placed duplicate goblins");
        assert!(!indices.contains(&0), "entry must stay safe");
        assert!(!indices.contains(&49), "exit must stay safe");
        for goblin in &goblins {
            assert_eq!(path.get(goblin.path_index), Some(goblin.cell));
            assert!(cells[goblin.cell.index()].is_hazard());
            assert!(!goblin.name.is_empty());
        }
        let flagged = cells.iter().filter(|cell| cell.is_hazard()).count();
        assert_eq!(flagged, 7, "only chosen cells are flagged");
    }
}

#[test]
fn goblins_are_returned_in_path_order() {
    let (mut cells, path) = straight_board(30);
    let mut rng = ChaCha8Rng::seed_from_u64(12);

    let goblins = place(&mut cells, &path, 10, &mut rng).expect("ten fit in 28 cells");

    assert!(goblins
        .windows(2)
        .all(|pair| pair[0].path_index < pair[1].path_index));
}

#[test]
fn every_interior_cell_can_be_chosen() {
    let mut seen = BTreeSet::new();
    for seed in 0..400 {
        let (mut cells, path) = straight_board(10);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let goblins = place(&mut cells, &path, 2, &mut rng).expect("two fit in eight cells");
        seen.extend(goblins.into_iter().map(|goblin| goblin.path_index));
    }

    assert_eq!(seen, (1..9).collect::<BTreeSet<usize>>());
}

#[test]
fn rejects_counts_that_fill_the_interior() {
    let (mut cells, path) = straight_board(10);
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let result = place(&mut cells, &path, 8, &mut rng);

    assert_eq!(
        result,
        Err(ConfigurationError::TooManyHazards {
            hazard_count: 8,
            interior: 8,
        })
    );
    assert!(cells.iter().all(|cell| !cell.is_hazard()));
}

#[test]
fn zero_hazards_leave_the_board_untouched() {
    let (mut cells, path) = straight_board(10);
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let goblins = place(&mut cells, &path, 0, &mut rng).expect("zero is always valid");

    assert!(goblins.is_empty());
    assert!(cells.iter().all(|cell| !cell.is_hazard()));
}
