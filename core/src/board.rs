//! Static board description produced once per game by the setup pipeline.

use serde::{Deserialize, Serialize};

use crate::{HexCoord, WorldPoint};

/// Arena index of a cell, assigned in generation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellId(u32);

impl CellId {
    /// Creates a new cell identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Identifier as a slice index into the cell arena.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.0 as usize
    }
}

/// Single hex cell of the board.
///
/// Cells are created by the grid generator. Only the path and hazard markers
/// change afterwards, and only while the board is being set up.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    id: CellId,
    coord: HexCoord,
    position: WorldPoint,
    path_index: Option<usize>,
    hazard: bool,
}

impl Cell {
    /// Creates an unmarked cell at the provided coordinate.
    #[must_use]
    pub fn new(id: CellId, coord: HexCoord, cell_size: f32) -> Self {
        Self {
            id,
            coord,
            position: coord.to_world(cell_size),
            path_index: None,
            hazard: false,
        }
    }

    /// Arena identifier of the cell.
    #[must_use]
    pub const fn id(&self) -> CellId {
        self.id
    }

    /// Axial coordinate of the cell.
    #[must_use]
    pub const fn coord(&self) -> HexCoord {
        self.coord
    }

    /// Centre of the cell on the world plane.
    #[must_use]
    pub const fn position(&self) -> WorldPoint {
        self.position
    }

    /// Reports whether the cell belongs to the playable path.
    #[must_use]
    pub const fn is_path(&self) -> bool {
        self.path_index.is_some()
    }

    /// Position of the cell along the path, if it is part of it.
    #[must_use]
    pub const fn path_index(&self) -> Option<usize> {
        self.path_index
    }

    /// Reports whether a goblin lurks on the cell.
    #[must_use]
    pub const fn is_hazard(&self) -> bool {
        self.hazard
    }

    /// Marks the cell as the `index`-th step of the path.
    pub fn mark_path(&mut self, index: usize) {
        self.path_index = Some(index);
    }

    /// Flags the cell as hazardous.
    pub fn mark_hazard(&mut self) {
        self.hazard = true;
    }
}

/// Ordered sequence of cells an agent travels from entry to goal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Path {
    cells: Vec<CellId>,
    step_limit: f32,
}

impl Path {
    /// Creates a path from cells that are pairwise within `step_limit` of their successor.
    #[must_use]
    pub fn new(cells: Vec<CellId>, step_limit: f32) -> Self {
        Self { cells, step_limit }
    }

    /// Number of cells along the path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Reports whether the path holds no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Index of the goal cell, `len - 1`.
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    /// Cell at the provided path index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<CellId> {
        self.cells.get(index).copied()
    }

    /// Cells in travel order.
    #[must_use]
    pub fn cells(&self) -> &[CellId] {
        &self.cells
    }

    /// Adjacency threshold every consecutive pair of cells satisfies.
    #[must_use]
    pub const fn step_limit(&self) -> f32 {
        self.step_limit
    }
}

/// Goblin lurking on a hazardous path cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goblin {
    /// Index along the path of the cell the goblin guards.
    pub path_index: usize,
    /// Cell the goblin guards.
    pub cell: CellId,
    /// Name the goblin announces itself with.
    pub name: String,
}

/// Completed board: every generated cell, the path through them and its goblins.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Vec<Cell>,
    path: Path,
    goblins: Vec<Goblin>,
}

impl Board {
    /// Assembles a board from the output of the setup pipeline.
    ///
    /// Goblins are kept sorted by path index.
    #[must_use]
    pub fn new(cells: Vec<Cell>, path: Path, mut goblins: Vec<Goblin>) -> Self {
        goblins.sort_by_key(|goblin| goblin.path_index);
        Self {
            cells,
            path,
            goblins,
        }
    }

    /// Every generated cell in arena order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cell stored under the provided identifier.
    #[must_use]
    pub fn cell(&self, id: CellId) -> Option<&Cell> {
        self.cells.get(id.index())
    }

    /// Playable path through the grid.
    #[must_use]
    pub const fn path(&self) -> &Path {
        &self.path
    }

    /// Goblins in path order.
    #[must_use]
    pub fn goblins(&self) -> &[Goblin] {
        &self.goblins
    }

    /// Cell located at the provided index along the path.
    #[must_use]
    pub fn path_cell(&self, index: usize) -> Option<&Cell> {
        self.path.get(index).and_then(|id| self.cell(id))
    }

    /// Goblin guarding the provided path index, if any.
    #[must_use]
    pub fn goblin_at(&self, index: usize) -> Option<&Goblin> {
        self.goblins
            .binary_search_by_key(&index, |goblin| goblin.path_index)
            .ok()
            .and_then(|position| self.goblins.get(position))
    }

    /// Reports whether the cell at the provided path index is hazardous.
    #[must_use]
    pub fn is_hazard_at(&self, index: usize) -> bool {
        self.path_cell(index).is_some_and(Cell::is_hazard)
    }

    /// First path cell, where both agents start.
    #[must_use]
    pub fn entry(&self) -> Option<&Cell> {
        self.path_cell(0)
    }

    /// Last path cell; reaching it wins the game.
    #[must_use]
    pub fn exit(&self) -> Option<&Cell> {
        self.path_cell(self.path.last_index())
    }
}
