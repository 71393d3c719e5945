use goblin_trail_core::{Cell, CellId, HexCoord, WorldPoint};
use goblin_trail_system_grid::generate;
use goblin_trail_system_visibility::compute_visibility;

fn lone_cell() -> Vec<Cell> {
    vec![Cell::new(CellId::new(0), HexCoord::ORIGIN, 2.5)]
}

#[test]
fn distant_cells_stay_hidden() {
    let set = compute_visibility(WorldPoint::new(15.0, 20.0), &lone_cell(), 20.0);

    let entry = set.get(CellId::new(0)).expect("cell is described");
    assert!(!entry.visible);
    assert_eq!(entry.fade, 0.0);
}

#[test]
fn nearby_cells_are_revealed_with_fade() {
    let set = compute_visibility(WorldPoint::new(3.0, 4.0), &lone_cell(), 20.0);

    let entry = set.get(CellId::new(0)).expect("cell is described");
    assert!(entry.visible);
    assert!((entry.fade - 0.75).abs() < 1e-5, "fade was {}", entry.fade);
}

#[test]
fn cells_on_the_boundary_are_visible() {
    let set = compute_visibility(WorldPoint::new(12.0, 16.0), &lone_cell(), 20.0);

    assert!(set.is_visible(CellId::new(0)));
}

#[test]
fn every_cell_is_described_and_revealed_by_distance() {
    let cells = generate(6, 2.5).expect("valid grid");
    let observer = cells[0].position();

    let set = compute_visibility(observer, &cells, 20.0);

    assert_eq!(set.len(), cells.len());
    for cell in &cells {
        let entry = set.get(cell.id()).expect("every cell is described");
        assert_eq!(entry.cell, cell.id());
        assert_eq!(entry.visible, observer.distance(cell.position()) <= 20.0);
        assert!((0.0..=1.0).contains(&entry.fade));
    }
    assert!(set.revealed().count() < cells.len(), "the far rim stays fogged");
}

#[test]
fn recomputation_follows_the_observer() {
    let cells = generate(6, 2.5).expect("valid grid");
    let first = cells[0].position();
    let last = cells[cells.len() - 1].position();

    let before = compute_visibility(first, &cells, 20.0);
    let after = compute_visibility(last, &cells, 20.0);

    assert!(before.is_visible(cells[0].id()));
    assert!(!after.is_visible(cells[0].id()));
    assert!(after.is_visible(cells[cells.len() - 1].id()));
}
