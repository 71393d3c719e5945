#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure grid system that lays out every hex cell inside a radius.

use goblin_trail_core::{Cell, CellId, ConfigurationError, HexCoord};

/// Generates the cells of a hexagonal grid centred on the origin.
///
/// Cells are produced in a fixed scan order (`q` ascending, then `r`
/// ascending) and receive consecutive identifiers starting at zero, so the
/// same radius and size always yield the same grid.
pub fn generate(radius: i32, cell_size: f32) -> Result<Vec<Cell>, ConfigurationError> {
    if radius <= 0 {
        return Err(ConfigurationError::NonPositiveRadius { radius });
    }
    if !(cell_size.is_finite() && cell_size > 0.0) {
        return Err(ConfigurationError::InvalidCellSize { cell_size });
    }

    let mut cells = Vec::with_capacity(cell_count(radius));
    for q in -radius..=radius {
        let r_min = (-radius).max(-q - radius);
        let r_max = radius.min(-q + radius);
        for r in r_min..=r_max {
            let id = CellId::new(cells.len() as u32);
            cells.push(Cell::new(id, HexCoord::new(q, r), cell_size));
        }
    }

    Ok(cells)
}

/// Number of cells inside a hexagon of the provided radius, `3R(R + 1) + 1`.
#[must_use]
pub fn cell_count(radius: i32) -> usize {
    if radius < 0 {
        return 0;
    }
    let radius = radius as usize;
    3 * radius * (radius + 1) + 1
}
