#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Hazard system that hides goblins along the interior of the path.

use goblin_trail_core::{Cell, ConfigurationError, Goblin, Path};
use rand::{seq::index::sample, seq::SliceRandom, Rng};

const NAME_PREFIXES: [&str; 5] = ["Grunk", "Snark", "Thrak", "Gork", "Mork"];
const NAME_SUFFIXES: [&str; 4] = ["the Cruel", "Bonecrusher", "Shadowstalker", "Doombringer"];

/// Places `count` goblins on distinct interior cells of the path.
///
/// The entry (index 0) and the exit (last index) are never chosen. Every
/// interior cell is equally likely and no cell receives two goblins. The
/// chosen cells are flagged as hazardous, and the goblins are returned in
/// path order.
pub fn place<R>(
    cells: &mut [Cell],
    path: &Path,
    count: usize,
    rng: &mut R,
) -> Result<Vec<Goblin>, ConfigurationError>
where
    R: Rng + ?Sized,
{
    let interior = path.len().saturating_sub(2);
    if count >= interior {
        return Err(ConfigurationError::TooManyHazards {
            hazard_count: count,
            interior,
        });
    }

    let mut indices: Vec<usize> = sample(rng, interior, count)
        .into_iter()
        .map(|offset| offset + 1)
        .collect();
    indices.sort_unstable();

    let mut goblins = Vec::with_capacity(count);
    for path_index in indices {
        let Some(id) = path.get(path_index) else {
            continue;
        };
        if let Some(cell) = cells.get_mut(id.index()) {
            cell.mark_hazard();
        }
        goblins.push(Goblin {
            path_index,
            cell: id,
            name: goblin_name(rng),
        });
    }

    Ok(goblins)
}

/// Invents a name such as "Thrak Shadowstalker".
pub fn goblin_name<R>(rng: &mut R) -> String
where
    R: Rng + ?Sized,
{
    let prefix = NAME_PREFIXES.choose(rng).copied().unwrap_or("Grunk");
    let suffix = NAME_SUFFIXES.choose(rng).copied().unwrap_or("the Cruel");
    format!("{prefix} {suffix}")
}
