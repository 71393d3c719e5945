//! Distance-thresholded neighbour graph over the generated cells.

use goblin_trail_core::{Cell, CellId};

/// Neighbour of a cell together with the distance separating them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Neighbor {
    /// Neighbouring cell.
    pub cell: CellId,
    /// Centre-to-centre distance, rounded to a thousandth of a world unit so
    /// geometrically equal distances compare equal.
    pub distance: f32,
}

/// Adjacency lists of every cell, nearest neighbours first.
#[derive(Clone, Debug)]
pub struct Adjacency {
    threshold: f32,
    neighbors: Vec<Vec<Neighbor>>,
}

impl Adjacency {
    /// Connects every pair of cells whose centres lie within `threshold`.
    #[must_use]
    pub fn build(cells: &[Cell], threshold: f32) -> Self {
        let mut neighbors = vec![Vec::new(); cells.len()];
        for (index, cell) in cells.iter().enumerate() {
            let list: &mut Vec<Neighbor> = &mut neighbors[index];
            for other in cells {
                if other.id() == cell.id() {
                    continue;
                }
                let distance = cell.position().distance(other.position());
                if distance <= threshold {
                    list.push(Neighbor {
                        cell: other.id(),
                        distance: (distance * 1_000.0).round() / 1_000.0,
                    });
                }
            }
            list.sort_by(|a, b| a.distance.total_cmp(&b.distance).then(a.cell.cmp(&b.cell)));
        }

        Self {
            threshold,
            neighbors,
        }
    }

    /// Largest distance spanned by an edge of the graph.
    #[must_use]
    pub const fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Number of cells the graph was built from.
    #[must_use]
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    /// Reports whether the graph holds no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    /// Neighbours of the provided cell, nearest first.
    #[must_use]
    pub fn neighbors(&self, cell: CellId) -> &[Neighbor] {
        self.neighbors
            .get(cell.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use goblin_trail_core::{step_length, HexCoord};

    fn cells_at(coords: &[HexCoord]) -> Vec<Cell> {
        coords
            .iter()
            .enumerate()
            .map(|(index, coord)| Cell::new(CellId::new(index as u32), *coord, 1.0))
            .collect()
    }

    #[test]
    fn connects_edge_sharing_hexes_only() {
        let cells = cells_at(&[
            HexCoord::new(0, 0),
            HexCoord::new(1, 0),
            HexCoord::new(2, 0),
        ]);
        let adjacency = Adjacency::build(&cells, step_length(1.0) * 1.05);

        let around_origin: Vec<CellId> = adjacency
            .neighbors(CellId::new(0))
            .iter()
            .map(|neighbor| neighbor.cell)
            .collect();
        assert_eq!(around_origin, vec![CellId::new(1)]);
        assert_eq!(adjacency.neighbors(CellId::new(1)).len(), 2);
    }

    #[test]
    fn widened_threshold_reaches_second_ring() {
        let cells = cells_at(&[HexCoord::new(0, 0), HexCoord::new(2, 0)]);
        let adjacency = Adjacency::build(&cells, step_length(1.0) * 2.1);

        assert_eq!(adjacency.neighbors(CellId::new(0)).len(), 1);
    }

    #[test]
    fn unknown_cell_has_no_neighbors() {
        let adjacency = Adjacency::build(&[], 1.0);
        assert!(adjacency.is_empty());
        assert!(adjacency.neighbors(CellId::new(3)).is_empty());
    }
}
