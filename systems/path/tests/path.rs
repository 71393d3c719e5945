use std::collections::HashSet;

use goblin_trail_core::{
    Cell, CellId, ConfigurationError, GameConfig, HexCoord, Path, PathAlgorithm, SetupError,
};
use goblin_trail_system_grid::generate;
use goblin_trail_system_path::{Adjacency, PathBuilder};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn build(config: &GameConfig, seed: u64) -> (Vec<Cell>, Result<Path, SetupError>) {
    let mut cells = generate(config.grid_radius, config.cell_size).expect("valid grid");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let path = PathBuilder::from_config(config).build(&mut cells, &mut rng);
    (cells, path)
}

fn assert_path_invariants(config: &GameConfig, cells: &[Cell], path: &Path) {
    assert_eq!(path.len(), config.path_length);

    let unique: HashSet<CellId> = path.cells().iter().copied().collect();
    assert_eq!(unique.len(), path.len(), "path revisits a cell");

    for pair in path.cells().windows(2) {
        let from = cells[pair[0].index()].position();
        let to = cells[pair[1].index()].position();
        assert!(
            from.distance(to) <= path.step_limit(),
            "consecutive cells {:?} and {:?} are not adjacent",
            pair[0],
            pair[1]
        );
    }

    for (index, id) in path.cells().iter().enumerate() {
        assert_eq!(cells[id.index()].path_index(), Some(index));
    }
    let marked = cells.iter().filter(|cell| cell.is_path()).count();
    assert_eq!(marked, path.len(), "only path cells may be marked");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn random_walk_paths_satisfy_invariants(seed in any::<u64>()) {
        let config = GameConfig::default();
        let (cells, path) = build(&config, seed);
        let path = path.expect("default board always fits a path");
        assert_path_invariants(&config, &cells, &path);
    }

    #[test]
    fn a_star_paths_satisfy_invariants(seed in any::<u64>()) {
        let config = GameConfig {
            path_algorithm: PathAlgorithm::AStar,
            ..GameConfig::default()
        };
        let (cells, path) = build(&config, seed);
        let path = path.expect("default board always fits a path");
        assert_path_invariants(&config, &cells, &path);
    }
}

#[test]
fn default_threshold_links_exactly_the_hex_neighbours() {
    let config = GameConfig::default();
    let cells = generate(config.grid_radius, config.cell_size).expect("valid grid");
    let adjacency = Adjacency::build(&cells, config.adjacency_threshold());

    for cell in &cells {
        let linked: HashSet<HexCoord> = adjacency
            .neighbors(cell.id())
            .iter()
            .map(|neighbor| cells[neighbor.cell.index()].coord())
            .collect();
        let expected: HashSet<HexCoord> = cell
            .coord()
            .neighbors()
            .filter(|coord| coord.within_radius(config.grid_radius))
            .collect();

        assert_eq!(linked, expected, "cell {:?}", cell.coord());
    }
}

#[test]
fn same_seed_lays_the_same_path() {
    let config = GameConfig::default();
    let (_, first) = build(&config, 99);
    let (_, second) = build(&config, 99);

    assert_eq!(first.expect("path"), second.expect("path"));
}

#[test]
fn path_longer_than_grid_is_a_configuration_error() {
    let config = GameConfig {
        grid_radius: 1,
        path_length: 8,
        hazard_count: 1,
        ..GameConfig::default()
    };
    let (cells, path) = build(&config, 1);

    assert_eq!(
        path,
        Err(SetupError::Configuration(
            ConfigurationError::PathExceedsGrid {
                path_length: 8,
                cell_count: 7,
            }
        ))
    );
    assert!(cells.iter().all(|cell| !cell.is_path()));
}

#[test]
fn disconnected_cells_report_generation_failure() {
    let mut cells = vec![
        Cell::new(CellId::new(0), HexCoord::new(0, 0), 1.0),
        Cell::new(CellId::new(1), HexCoord::new(5, 0), 1.0),
    ];
    let config = GameConfig {
        cell_size: 1.0,
        path_length: 2,
        path_attempts: 4,
        path_relaxations: 0,
        ..GameConfig::default()
    };
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    let result = PathBuilder::from_config(&config).build(&mut cells, &mut rng);

    assert_eq!(
        result,
        Err(SetupError::PathGenerationFailed {
            target_length: 2,
            best_length: 1,
            attempts: 4,
        })
    );
    assert!(cells.iter().all(|cell| !cell.is_path()));
}

#[test]
fn relaxed_threshold_bridges_gaps() {
    let mut cells = vec![
        Cell::new(CellId::new(0), HexCoord::new(0, 0), 1.0),
        Cell::new(CellId::new(1), HexCoord::new(2, 0), 1.0),
    ];
    let config = GameConfig {
        cell_size: 1.0,
        path_length: 2,
        path_attempts: 2,
        path_relaxations: 1,
        ..GameConfig::default()
    };
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    let path = PathBuilder::from_config(&config)
        .build(&mut cells, &mut rng)
        .expect("doubling the threshold reaches the second ring");

    assert_eq!(path.len(), 2);
    assert!(path.step_limit() > config.adjacency_threshold());
}
