//! Constrained self-avoiding random walk.

use goblin_trail_core::CellId;
use rand::{seq::SliceRandom, Rng};

use crate::adjacency::{Adjacency, Neighbor};

/// Walks from `start` through unvisited neighbours until `target_length`
/// cells are collected or every neighbour of the walk's head is visited.
///
/// Each step picks uniformly among the `candidates` nearest unvisited
/// neighbours. Equidistant neighbours are shuffled first so none of them is
/// favoured by arena order. The returned walk is shorter than
/// `target_length` when it got stuck.
pub fn random_walk<R>(
    adjacency: &Adjacency,
    start: CellId,
    target_length: usize,
    candidates: usize,
    rng: &mut R,
) -> Vec<CellId>
where
    R: Rng + ?Sized,
{
    let mut visited = vec![false; adjacency.len()];
    let mut walk = Vec::with_capacity(target_length);
    let mut open: Vec<Neighbor> = Vec::new();

    let Some(slot) = visited.get_mut(start.index()) else {
        return walk;
    };
    *slot = true;
    walk.push(start);

    while walk.len() < target_length {
        let Some(&head) = walk.last() else {
            break;
        };

        open.clear();
        open.extend(
            adjacency
                .neighbors(head)
                .iter()
                .filter(|neighbor| !visited[neighbor.cell.index()]),
        );
        if open.is_empty() {
            break;
        }

        open.shuffle(rng);
        open.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        let eligible = open.len().min(candidates.max(1));
        let next = open[rng.gen_range(0..eligible)].cell;

        visited[next.index()] = true;
        walk.push(next);
    }

    walk
}
