#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Path system that threads the playable route through the hex grid.
//!
//! Two strategies are available: a constrained random walk and chained A*
//! segments. Both retry from fresh starting cells and widen the adjacency
//! threshold before giving up, and neither ever hands back a path shorter
//! than requested.

use goblin_trail_core::{
    Cell, CellId, ConfigurationError, GameConfig, HexCoord, Path, PathAlgorithm, SetupError,
};
use rand::{seq::SliceRandom, Rng};
use tracing::debug;

mod adjacency;
mod astar;
mod walk;

pub use adjacency::{Adjacency, Neighbor};
pub use astar::shortest_path;
pub use walk::random_walk;

/// Builds paths of a fixed length over a generated grid.
#[derive(Clone, Debug)]
pub struct PathBuilder {
    algorithm: PathAlgorithm,
    target_length: usize,
    walk_candidates: usize,
    attempts: u32,
    relaxations: u32,
    hazard_cost: u32,
    base_threshold: f32,
}

impl PathBuilder {
    /// Creates a builder using the path constants of the configuration.
    #[must_use]
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            algorithm: config.path_algorithm,
            target_length: config.path_length,
            walk_candidates: config.walk_candidates,
            attempts: config.path_attempts,
            relaxations: config.path_relaxations,
            hazard_cost: config.hazard_edge_cost,
            base_threshold: config.adjacency_threshold(),
        }
    }

    /// Lays a path of exactly the target length across `cells`.
    ///
    /// On success every selected cell is marked with its index along the
    /// path. On failure the cells are left untouched.
    pub fn build<R>(&self, cells: &mut [Cell], rng: &mut R) -> Result<Path, SetupError>
    where
        R: Rng + ?Sized,
    {
        if self.target_length < 2 {
            return Err(ConfigurationError::PathTooShort {
                path_length: self.target_length,
            }
            .into());
        }
        if self.target_length > cells.len() {
            return Err(ConfigurationError::PathExceedsGrid {
                path_length: self.target_length,
                cell_count: cells.len(),
            }
            .into());
        }

        let mut best_length = 0;
        let mut attempts_made = 0;
        for relaxation in 0..=self.relaxations {
            let threshold = self.base_threshold * (1 + relaxation) as f32;
            let adjacency = Adjacency::build(cells, threshold);

            for attempt in 0..self.attempts {
                attempts_made += 1;
                let mut candidate = match self.algorithm {
                    PathAlgorithm::RandomWalk => {
                        let start = CellId::new(rng.gen_range(0..cells.len()) as u32);
                        random_walk(
                            &adjacency,
                            start,
                            self.target_length,
                            self.walk_candidates,
                            rng,
                        )
                    }
                    PathAlgorithm::AStar => self.chain_segments(cells, &adjacency, rng),
                };

                if candidate.len() >= self.target_length {
                    candidate.truncate(self.target_length);
                    for (index, id) in candidate.iter().enumerate() {
                        if let Some(cell) = cells.get_mut(id.index()) {
                            cell.mark_path(index);
                        }
                    }
                    debug!(
                        algorithm = ?self.algorithm,
                        attempts = attempts_made,
                        threshold,
                        "path laid"
                    );
                    return Ok(Path::new(candidate, threshold));
                }

                best_length = best_length.max(candidate.len());
                debug!(
                    attempt,
                    relaxation,
                    reached = candidate.len(),
                    "path attempt got stuck"
                );
            }
        }

        Err(SetupError::PathGenerationFailed {
            target_length: self.target_length,
            best_length,
            attempts: attempts_made,
        })
    }

    fn chain_segments<R>(&self, cells: &[Cell], adjacency: &Adjacency, rng: &mut R) -> Vec<CellId>
    where
        R: Rng + ?Sized,
    {
        let Some(start) = extremal_cell(cells, rng) else {
            return Vec::new();
        };

        let mut visited = vec![false; cells.len()];
        visited[start.index()] = true;
        let mut route = vec![start];
        let mut goals: Vec<CellId> = Vec::with_capacity(cells.len());

        while route.len() < self.target_length {
            let Some(&head) = route.last() else {
                break;
            };

            goals.clear();
            goals.extend(
                cells
                    .iter()
                    .map(Cell::id)
                    .filter(|id| !visited[id.index()]),
            );
            goals.shuffle(rng);

            let segment = goals.iter().find_map(|&goal| {
                shortest_path(
                    cells,
                    adjacency,
                    head,
                    goal,
                    self.hazard_cost,
                    |cell| visited[cell.index()],
                    |cell| cells.get(cell.index()).is_some_and(Cell::is_hazard),
                )
            });
            let Some(segment) = segment else {
                break;
            };

            for cell in segment.into_iter().skip(1) {
                visited[cell.index()] = true;
                route.push(cell);
            }
        }

        route
    }
}

/// Picks one of the cells farthest from the grid centre.
fn extremal_cell<R>(cells: &[Cell], rng: &mut R) -> Option<CellId>
where
    R: Rng + ?Sized,
{
    let farthest = cells
        .iter()
        .map(|cell| cell.coord().hex_distance(HexCoord::ORIGIN))
        .max()?;
    let corners: Vec<CellId> = cells
        .iter()
        .filter(|cell| cell.coord().hex_distance(HexCoord::ORIGIN) == farthest)
        .map(Cell::id)
        .collect();
    corners.choose(rng).copied()
}
