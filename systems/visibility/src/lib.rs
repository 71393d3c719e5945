#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Fog-of-war system that reveals cells around an observer.
//!
//! Visibility is recomputed from scratch for every observer position rather
//! than patched incrementally, so a set can never hold stale entries.

use goblin_trail_core::{Cell, CellVisibility, VisibilitySet, WorldPoint};

/// Computes the visibility of every cell as seen from `observer`.
///
/// A cell is visible when its centre lies within `radius` of the observer.
/// The fade is `1 - distance / radius` clamped to `[0, 1]`; a zero radius only
/// reveals a cell sharing the observer's exact position.
#[must_use]
pub fn compute_visibility(observer: WorldPoint, cells: &[Cell], radius: f32) -> VisibilitySet {
    let entries = cells
        .iter()
        .map(|cell| {
            let distance = observer.distance(cell.position());
            CellVisibility {
                cell: cell.id(),
                visible: distance <= radius,
                fade: fade(distance, radius),
            }
        })
        .collect();
    VisibilitySet::from_entries(entries)
}

fn fade(distance: f32, radius: f32) -> f32 {
    if radius <= 0.0 {
        return if distance <= 0.0 { 1.0 } else { 0.0 };
    }
    (1.0 - distance / radius).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use goblin_trail_core::{CellId, HexCoord};

    #[test]
    fn fade_is_clamped_to_unit_interval() {
        assert_eq!(fade(0.0, 20.0), 1.0);
        assert_eq!(fade(40.0, 20.0), 0.0);
        assert!((fade(10.0, 20.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn zero_radius_only_reveals_the_observer_cell() {
        let cells = vec![
            Cell::new(CellId::new(0), HexCoord::new(0, 0), 1.0),
            Cell::new(CellId::new(1), HexCoord::new(1, 0), 1.0),
        ];

        let set = compute_visibility(WorldPoint::new(0.0, 0.0), &cells, 0.0);

        assert!(set.is_visible(CellId::new(0)));
        assert!(!set.is_visible(CellId::new(1)));
        assert_eq!(set.get(CellId::new(0)).map(|entry| entry.fade), Some(1.0));
        assert_eq!(set.get(CellId::new(1)).map(|entry| entry.fade), Some(0.0));
    }
}
