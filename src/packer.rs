//! Single-container packer (spec §4.6): iterates the candidate
//! generator, feasibility oracle, and scorer until a full pass yields
//! no admissible move.

use crate::candidates::{unique_representatives, z_slide, AnchorSet, Orientation};
use crate::container::{ContainerKind, ContainerSpec, Piece};
use crate::feasibility::{door_fits_piece, is_valid};
use crate::grid::SpatialGrid;
use crate::placement::{PackResult, Placement};
use crate::progress::{CancellationToken, YIELD_INTERVAL};
use crate::scoring::{score, ScoringContext};
use crate::Kg;

struct BestMove {
    score: f64,
    residual_index: usize,
    pos: crate::geometry::Point,
    dims: crate::geometry::Dims,
}

fn min_unstackable_height(residual: &[Piece]) -> Option<i64> {
    residual.iter().filter(|p| p.unstackable).map(|p| p.height).min()
}

/// Packs as many pieces from `residual` into one container of
/// `container_kind` as the oracle/scorer admit, consuming pieces from
/// `residual` in place. `next_id` hands out globally unique placement
/// ids across a whole [`crate::placement::Shipment`].
///
/// Returns the finished [`PackResult`] (its `unplaced` field is always
/// empty here — the caller aggregates genuine leftovers only on the
/// last container, per spec §4.7) and whether the run was cut short by
/// cancellation.
pub fn pack_one(
    container_kind: ContainerKind,
    residual: &mut Vec<Piece>,
    next_id: &mut u64,
    container_index: usize,
    cancellation: Option<&CancellationToken>,
) -> (PackResult, bool) {
    let container: ContainerSpec = container_kind.spec();
    let mut grid = SpatialGrid::new();
    let mut anchors = AnchorSet::new();
    let mut placed: Vec<Placement> = Vec::new();
    let mut weight_so_far: Kg = 0;
    let mut sequence: u32 = 0;
    let mut iterations: u32 = 0;
    let mut cancelled = false;

    loop {
        iterations += 1;
        if iterations % YIELD_INTERVAL == 0 {
            if let Some(token) = cancellation {
                if token.is_cancelled() {
                    cancelled = true;
                    break;
                }
            }
        }

        let door_admissible: Vec<Piece> =
            residual.iter().copied().filter(|p| door_fits_piece(&container, p)).collect();
        let mut reps = unique_representatives(&door_admissible);
        reps.sort_by_key(|p| p.spec_id);

        let min_h = min_unstackable_height(residual);
        let ctx = ScoringContext { min_unstackable_h: min_h };

        let mut best: Option<BestMove> = None;
        for rep in &reps {
            if weight_so_far + rep.weight > container.max_weight {
                continue;
            }
            let Some(residual_index) = residual.iter().position(|p| p.spec_id == rep.spec_id) else {
                continue;
            };
            for &anchor in anchors.iter().collect::<Vec<_>>() {
                for orientation in Orientation::ALL {
                    let dims = orientation.apply(rep);
                    if !is_valid(anchor, dims, &container, &grid) {
                        continue;
                    }
                    let final_pos = if anchor.y == 0 {
                        z_slide(anchor, dims, &container, &grid)
                    } else {
                        anchor
                    };
                    let candidate_score = score(
                        final_pos,
                        dims,
                        rep.spec_id,
                        rep.unstackable,
                        &container,
                        &grid,
                        ctx,
                    );
                    let better = match &best {
                        None => true,
                        Some(current) => candidate_score < current.score,
                    };
                    if better {
                        best = Some(BestMove { score: candidate_score, residual_index, pos: final_pos, dims });
                    }
                }
            }
        }

        let Some(best_move) = best else {
            break;
        };

        let piece = residual.remove(best_move.residual_index);
        sequence += 1;
        let id = *next_id;
        *next_id += 1;
        let placement = Placement {
            id,
            spec_id: piece.spec_id,
            pos: best_move.pos,
            dims: best_move.dims,
            sequence,
            container_index,
            unstackable: piece.unstackable,
            weight: piece.weight,
        };
        grid.insert(placement);
        anchors.add_from_placement(&placement);
        weight_so_far += piece.weight;
        placed.push(placement);
        anchors.prune(&container, &placed);
    }

    (PackResult::new(container_kind, placed, Vec::new()), cancelled)
}
