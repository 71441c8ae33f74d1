//! Shipment planner (spec §4.7): pre-sort, container-sequencing
//! strategies, and the SMART_MIX comparative simulation.

use itertools::Itertools;

use crate::container::{CargoSpec, ContainerKind, Piece};
use crate::packer::pack_one;
use crate::placement::{PackResult, Shipment};
use crate::progress::{CancellationToken, ProgressCallback};

const BASE_AREA_EPSILON: i128 = 50;
const QUANTITY_EPSILON: i64 = 10;

/// One of the three ways a [`Shipment`] may sequence containers (spec §4.7).
#[derive(Clone, Debug)]
pub enum Strategy {
    /// Simulate 20GP / 40GP / 40HQ at each step and pick the best fit.
    SmartMix,
    /// Repeat one container kind until residual is empty or a container
    /// places nothing.
    Uniform(ContainerKind),
    /// Fixed sequence of container kinds, piping residuals forward.
    Plan(Vec<ContainerKind>),
}

/// Expands each [`CargoSpec`]'s quantity into individual [`Piece`]s and
/// applies the spec's pre-sort: stackable first, then base area
/// descending (epsilon 50 cm²), then quantity descending (epsilon 10),
/// then weight descending. A stable sort preserves input order within
/// ties, which §4.5's determinism requirement depends on.
pub fn presort(specs: &[CargoSpec]) -> Vec<Piece> {
    let mut pieces: Vec<Piece> = specs.iter().flat_map(|spec| {
        std::iter::repeat_with(|| Piece::from_spec(spec)).take(spec.quantity as usize)
    }).collect();

    let qty_of = |spec_id: u32| -> u32 {
        specs.iter().find(|s| s.id == spec_id).map(|s| s.quantity).unwrap_or(0)
    };

    // `sorted_by` is a stable sort (like `Vec::sort_by`), which the
    // determinism requirement in spec §4.5 depends on for tie-breaking.
    pieces
        .into_iter()
        .sorted_by(|a, b| {
            match (a.unstackable, b.unstackable) {
                (false, true) => return std::cmp::Ordering::Less,
                (true, false) => return std::cmp::Ordering::Greater,
                _ => {}
            }
            let area_a = a.base_area();
            let area_b = b.base_area();
            if (area_a - area_b).abs() > BASE_AREA_EPSILON {
                return area_b.cmp(&area_a);
            }
            let qty_a = qty_of(a.spec_id) as i64;
            let qty_b = qty_of(b.spec_id) as i64;
            if (qty_a - qty_b).abs() > QUANTITY_EPSILON {
                return qty_b.cmp(&qty_a);
            }
            b.weight.cmp(&a.weight)
        })
        .collect()
}

fn report(progress: &mut Option<ProgressCallback<'_>>, stage: &str) {
    if let Some(cb) = progress.as_mut() {
        cb(stage);
    }
}

/// Runs one container's worth of packing and folds the result into `shipment`.
/// Returns whether the run was cancelled.
fn run_container(
    kind: ContainerKind,
    residual: &mut Vec<Piece>,
    next_id: &mut u64,
    container_index: usize,
    cancellation: Option<&CancellationToken>,
) -> (PackResult, bool) {
    pack_one(kind, residual, next_id, container_index, cancellation)
}

/// Orchestrates a full [`Shipment`] from a cargo list under a chosen
/// [`Strategy`] (spec §4.7, §6 "external interfaces").
pub fn pack_shipment(
    specs: &[CargoSpec],
    strategy: Strategy,
    mut progress: Option<ProgressCallback<'_>>,
    cancellation: Option<&CancellationToken>,
) -> Shipment {
    let mut residual = presort(specs);
    let mut shipment = Shipment::new();
    let mut next_id: u64 = 1;
    let mut container_index = 0;

    match strategy {
        Strategy::Plan(sequence) => {
            for kind in sequence {
                if residual.is_empty() {
                    break;
                }
                report(&mut progress, &format!("Packing container {} ({:?})…", container_index + 1, kind));
                let (result, cancelled) =
                    run_container(kind, &mut residual, &mut next_id, container_index, cancellation);
                let placed_any = !result.placements.is_empty();
                shipment.push(result);
                container_index += 1;
                if cancelled {
                    break;
                }
                if !placed_any {
                    break;
                }
            }
        }
        Strategy::Uniform(kind) => loop {
            if residual.is_empty() {
                break;
            }
            report(&mut progress, &format!("Packing container {} ({:?})…", container_index + 1, kind));
            let (result, cancelled) =
                run_container(kind, &mut residual, &mut next_id, container_index, cancellation);
            let placed_any = !result.placements.is_empty();
            shipment.push(result);
            container_index += 1;
            if cancelled || !placed_any {
                break;
            }
        },
        Strategy::SmartMix => loop {
            if residual.is_empty() {
                break;
            }
            report(&mut progress, &format!("Simulating permutations for container {}…", container_index + 1));
            let (kind, cancelled) =
                smart_mix_choice(&residual, &mut next_id, container_index, cancellation);
            report(&mut progress, &format!("Packing container {} ({:?})…", container_index + 1, kind));
            let (result, run_cancelled) =
                run_container(kind, &mut residual, &mut next_id, container_index, cancellation);
            let placed_any = !result.placements.is_empty();
            shipment.push(result);
            container_index += 1;
            if cancelled || run_cancelled || !placed_any {
                break;
            }
        },
    }

    if let Some(last) = shipment.results.last_mut() {
        last.unplaced = residual;
    } else if !residual.is_empty() {
        shipment.push(PackResult::new(ContainerKind::Gp20, Vec::new(), residual));
    }

    shipment
}

/// The SMART_MIX decision for a single container, given the residual
/// *before* that container is packed (spec §4.7). Simulates candidates
/// on a scratch copy of the residual and throws the simulation away —
/// only the chosen kind is returned, leaving the caller's `residual`
/// untouched so it can run the real pack afterward.
fn smart_mix_choice(
    residual: &[Piece],
    next_id: &mut u64,
    container_index: usize,
    cancellation: Option<&CancellationToken>,
) -> (ContainerKind, bool) {
    let scratch_id = &mut next_id.clone();

    let mut gp20_trial = residual.to_vec();
    let (_gp20_result, gp20_cancelled) =
        pack_one(ContainerKind::Gp20, &mut gp20_trial, scratch_id, container_index, cancellation);
    if gp20_trial.is_empty() {
        return (ContainerKind::Gp20, gp20_cancelled);
    }

    let gp40_usable = ContainerKind::Gp40.spec().usable_height();
    let has_extra_tall = residual.iter().any(|p| p.height > gp40_usable);
    if has_extra_tall {
        return (ContainerKind::Hq40, gp20_cancelled);
    }

    let mut gp40_trial = residual.to_vec();
    let mut hq40_trial = residual.to_vec();
    let mut gp40_id = next_id.clone();
    let mut hq40_id = next_id.clone();
    let ((gp40_result, gp40_cancelled), (hq40_result, hq40_cancelled)) = rayon::join(
        || pack_one(ContainerKind::Gp40, &mut gp40_trial, &mut gp40_id, container_index, cancellation),
        || pack_one(ContainerKind::Hq40, &mut hq40_trial, &mut hq40_id, container_index, cancellation),
    );

    let gp40_count = gp40_result.placements.len();
    let hq40_count = hq40_result.placements.len();
    let cancelled = gp20_cancelled || gp40_cancelled || hq40_cancelled;

    let choose_hq40 = if hq40_count > gp40_count {
        true
    } else if hq40_count == gp40_count {
        hq40_trial.is_empty() || hq40_result.used_volume_cm3 - gp40_result.used_volume_cm3 >= 2_000_000
    } else {
        false
    };

    if choose_hq40 {
        (ContainerKind::Hq40, cancelled)
    } else {
        (ContainerKind::Gp40, cancelled)
    }
}
