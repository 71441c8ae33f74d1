//! Literal end-to-end scenarios (S1–S6).

use freightpack::feasibility::forklift_access_ok;
use freightpack::grid::SpatialGrid;
use freightpack::{pack_shipment, CargoSpec, ContainerKind, Strategy};

fn spec(id: u32, l: i64, w: i64, h: i64, weight: i64, qty: u32, unstackable: bool) -> CargoSpec {
    CargoSpec {
        id,
        name: format!("s{id}"),
        length: l,
        width: w,
        height: h,
        weight,
        quantity: qty,
        unstackable,
        tag: None,
    }
}

#[test]
fn s1_empty_input_yields_nothing() {
    let shipment = pack_shipment(&[], Strategy::Uniform(ContainerKind::Gp20), None, None);
    assert!(shipment.results.is_empty());
    assert!(shipment.unplaced().is_empty());
}

#[test]
fn s2_single_item_fits_on_the_floor() {
    let specs = vec![spec(1, 120, 100, 100, 50, 1, false)];
    let shipment = pack_shipment(&specs, Strategy::Uniform(ContainerKind::Gp20), None, None);
    assert_eq!(shipment.results.len(), 1);
    let result = &shipment.results[0];
    assert_eq!(result.placements.len(), 1);
    let placement = &result.placements[0];
    assert_eq!((placement.pos.x, placement.pos.y, placement.pos.z), (0, 0, 0));
    assert_eq!((placement.dims.l, placement.dims.w, placement.dims.h), (120, 100, 100));
    assert_eq!(placement.sequence, 1);
    assert_eq!(result.used_volume_cm3, 120 * 100 * 100);

    let expected_utilization = (120.0 * 100.0 * 100.0) / (580.0 * 235.0 * 239.0);
    assert!((result.volume_utilization - expected_utilization).abs() < 1e-6);
    assert!((result.volume_utilization * 100.0 - 3.68).abs() < 0.01);
}

#[test]
fn s3_extra_tall_items_force_40hq() {
    let specs = vec![spec(1, 120, 100, 230, 100, 2, false)];
    let shipment = pack_shipment(&specs, Strategy::SmartMix, None, None);
    assert_eq!(shipment.results.len(), 1);
    let result = &shipment.results[0];
    assert_eq!(result.container_kind, ContainerKind::Hq40);
    assert_eq!(result.placements.len(), 2);
    assert!(result.placements.iter().all(|p| p.pos.y == 0));
}

#[test]
fn s4_stacking_with_unstackable_cap() {
    let specs = vec![
        spec(1, 120, 100, 80, 40, 3, false),
        spec(2, 120, 100, 60, 30, 1, true),
    ];
    let shipment = pack_shipment(&specs, Strategy::SmartMix, None, None);
    let result = &shipment.results[0];
    let cap = result.placements.iter().find(|p| p.unstackable).expect("cap item placed");
    let top_gap = result.container_kind.spec().height - (cap.pos.y + cap.dims.h);
    if cap.pos.y == 0 {
        assert!(top_gap <= 40, "unstackable item at the base must not leave > 40cm of airspace above");
    }
}

#[test]
fn s5_same_spec_items_cluster_together() {
    let specs = vec![spec(1, 100, 100, 100, 50, 4, false), spec(2, 100, 100, 100, 50, 4, false)];
    let shipment = pack_shipment(&specs, Strategy::Uniform(ContainerKind::Gp40), None, None);
    let result = &shipment.results[0];

    for spec_id in [1u32, 2] {
        let group: Vec<_> = result.placements.iter().filter(|p| p.spec_id == spec_id).collect();
        if group.len() < 2 {
            continue;
        }
        for item in &group {
            let has_neighbour = group.iter().any(|other| {
                other.id != item.id
                    && (other.pos.x - item.pos.x).abs() <= item.dims.l.max(other.dims.l)
                    && (other.pos.z - item.pos.z).abs() <= item.dims.w.max(other.dims.w)
            });
            assert!(has_neighbour, "every same-spec placement should have a nearby sibling");
        }
    }
}

#[test]
fn s6_forklift_blocking_routes_around_the_obstruction() {
    let specs = vec![spec(1, 100, 100, 100, 50, 1, false), spec(2, 200, 100, 100, 50, 1, false)];
    let shipment = pack_shipment(&specs, Strategy::Uniform(ContainerKind::Gp20), None, None);
    let result = &shipment.results[0];
    assert_eq!(result.placements.len(), 2);
    let container = result.container_kind.spec();

    let mut ordered = result.placements.clone();
    ordered.sort_by_key(|p| p.sequence);
    let mut grid = SpatialGrid::new();
    for p in &ordered {
        assert!(
            forklift_access_ok(p.pos, p.dims, &container, &grid),
            "placement {} has no reachable forklift chassis position against earlier commits",
            p.id
        );
        grid.insert(*p);
    }
}
