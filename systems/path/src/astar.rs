//! Weighted A* search over the neighbour graph.

use std::{cmp::Ordering, collections::BinaryHeap};

use goblin_trail_core::{Cell, CellId};

use crate::adjacency::Adjacency;

#[derive(Clone, Copy, Debug)]
struct OpenEntry {
    f_score: f32,
    g_score: u32,
    sequence: u64,
    cell: CellId,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenEntry {
    // Max-heap: lowest f first, then the most recently relaxed entry.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f_score
            .total_cmp(&self.f_score)
            .then(self.sequence.cmp(&other.sequence))
    }
}

/// Finds the cheapest route from `start` to `goal`.
///
/// Stepping onto a cell costs 1, or `hazard_cost` when `is_hazard` reports
/// the cell as dangerous. Cells for which `is_blocked` holds are never
/// entered; `start` itself is exempt. The heuristic is the Euclidean distance
/// to the goal divided by the graph's edge threshold, so it never
/// overestimates the remaining hop count. Each cell is finalised at most
/// once. The route is returned from `start` to `goal` inclusive.
pub fn shortest_path<B, H>(
    cells: &[Cell],
    adjacency: &Adjacency,
    start: CellId,
    goal: CellId,
    hazard_cost: u32,
    is_blocked: B,
    is_hazard: H,
) -> Option<Vec<CellId>>
where
    B: Fn(CellId) -> bool,
    H: Fn(CellId) -> bool,
{
    let goal_position = cells.get(goal.index())?.position();
    let _ = cells.get(start.index())?;
    if start == goal {
        return Some(vec![start]);
    }

    let scale = adjacency.threshold().max(f32::EPSILON);
    let heuristic = |cell: CellId| {
        cells
            .get(cell.index())
            .map_or(0.0, |cell| cell.position().distance(goal_position) / scale)
    };

    let mut g_scores = vec![u32::MAX; cells.len()];
    let mut came_from: Vec<Option<CellId>> = vec![None; cells.len()];
    let mut closed = vec![false; cells.len()];
    let mut open = BinaryHeap::new();
    let mut sequence = 0u64;

    g_scores[start.index()] = 0;
    open.push(OpenEntry {
        f_score: heuristic(start),
        g_score: 0,
        sequence,
        cell: start,
    });

    while let Some(entry) = open.pop() {
        let current = entry.cell;
        if closed[current.index()] || entry.g_score > g_scores[current.index()] {
            continue;
        }
        closed[current.index()] = true;

        if current == goal {
            return Some(reconstruct(&came_from, start, goal));
        }

        for neighbor in adjacency.neighbors(current) {
            let next = neighbor.cell;
            if next.index() >= cells.len() || closed[next.index()] || is_blocked(next) {
                continue;
            }

            let step_cost = if is_hazard(next) {
                hazard_cost.max(1)
            } else {
                1
            };
            let tentative = entry.g_score.saturating_add(step_cost);
            if tentative >= g_scores[next.index()] {
                continue;
            }

            g_scores[next.index()] = tentative;
            came_from[next.index()] = Some(current);
            sequence += 1;
            open.push(OpenEntry {
                f_score: tentative as f32 + heuristic(next),
                g_score: tentative,
                sequence,
                cell: next,
            });
        }
    }

    None
}

fn reconstruct(came_from: &[Option<CellId>], start: CellId, goal: CellId) -> Vec<CellId> {
    let mut route = vec![goal];
    let mut current = goal;
    while current != start {
        match came_from.get(current.index()).copied().flatten() {
            Some(previous) => {
                route.push(previous);
                current = previous;
            }
            None => break,
        }
    }
    route.reverse();
    route
}
