//! Greedy shipment selection for large pending sets.

use super::types::{ShipmentItem, ShipmentRank};
use std::cmp::Ordering;

/// Chooses a near-best feasible subset of `pending` with two greedy passes.
///
/// Builds two candidate packings and keeps the better one by the shared
/// [`ShipmentRank`] criteria:
///
/// - *Ascending-weight-first*: items sorted by weight ascending, each added
///   while the running sum stays within `capacity_kg`. Favors item count.
/// - *Descending-weight-first*: the same accumulation over items sorted by
///   weight descending. Favors filling the capacity.
///
/// Returns indices into `pending`, in the order items were packed. Unlike
/// [`choose_exact`](super::choose_exact) this is a heuristic: it runs in
/// O(n log n) but is not guaranteed to find the true optimum.
pub fn choose_greedy<T: ShipmentItem>(pending: &[T], capacity_kg: f64, epsilon: f64) -> Vec<usize> {
    let ascending = pack_sorted(pending, capacity_kg, |a, b| {
        a.weight_kg()
            .partial_cmp(&b.weight_kg())
            .unwrap_or(Ordering::Equal)
    });
    let descending = pack_sorted(pending, capacity_kg, |a, b| {
        b.weight_kg()
            .partial_cmp(&a.weight_kg())
            .unwrap_or(Ordering::Equal)
    });

    let rank_asc = ShipmentRank::of(pending, &ascending);
    let rank_desc = ShipmentRank::of(pending, &descending);

    // On a full tie the ascending packing wins, matching its <= comparison
    // on max distance.
    if rank_desc.better_than(&rank_asc, epsilon) {
        descending
    } else {
        ascending
    }
}

/// Sorts item indices by `order` (stable, so equal weights keep their input
/// order) and greedily accumulates items that fit.
fn pack_sorted<T: ShipmentItem>(
    pending: &[T],
    capacity_kg: f64,
    order: impl Fn(&T, &T) -> Ordering,
) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..pending.len()).collect();
    indices.sort_by(|&a, &b| order(&pending[a], &pending[b]));

    let mut packed = Vec::new();
    let mut total_kg = 0.0;
    for i in indices {
        if total_kg + pending[i].weight_kg() <= capacity_kg {
            packed.push(i);
            total_kg += pending[i].weight_kg();
        }
    }
    packed
}
