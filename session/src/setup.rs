//! Board setup pipeline: grid, then path, then goblins.

use goblin_trail_core::{Board, GameConfig, SetupError};
use goblin_trail_system_hazards as hazards;
use goblin_trail_system_path::PathBuilder;
use rand::Rng;
use tracing::info;

/// Builds a complete board, or nothing at all.
///
/// Each stage consumes the finished output of the previous one. Any error
/// aborts the pipeline and the partially marked cells are discarded.
pub fn build_board<R>(config: &GameConfig, rng: &mut R) -> Result<Board, SetupError>
where
    R: Rng + ?Sized,
{
    config.validate()?;

    let mut cells = goblin_trail_system_grid::generate(config.grid_radius, config.cell_size)?;
    let path = PathBuilder::from_config(config).build(&mut cells, rng)?;
    let goblins = hazards::place(&mut cells, &path, config.hazard_count, rng)?;

    info!(
        cells = cells.len(),
        path_length = path.len(),
        goblins = goblins.len(),
        algorithm = ?config.path_algorithm,
        "board ready"
    );
    Ok(Board::new(cells, path, goblins))
}
