//! Exact shipment selection by subset enumeration.

use super::types::{ShipmentItem, ShipmentRank};

/// Chooses the best feasible subset of `pending` by exhaustive enumeration.
///
/// Every non-empty subset is generated exactly once via a 64-bit index mask;
/// a subset is discarded the moment its running weight exceeds
/// `capacity_kg`. Among feasible subsets the winner is the one with the best
/// [`ShipmentRank`] (most items, then heaviest, then shortest farthest leg,
/// with `epsilon` absorbing float drift in the weight comparison).
///
/// Returns indices into `pending`, in ascending order. The result is empty
/// only when no single item fits the capacity on its own.
///
/// Every feasible subset is compared by its full rank rather than pruned by
/// cardinality, so the outcome does not depend on enumeration order.
///
/// Exponential in `pending.len()`; callers must keep the set at or below 63
/// items (the dispatch layer enforces this through its configured
/// threshold).
pub fn choose_exact<T: ShipmentItem>(pending: &[T], capacity_kg: f64, epsilon: f64) -> Vec<usize> {
    let n = pending.len();
    debug_assert!(n < 64, "exact selection is limited to 63 items");
    if n == 0 {
        return Vec::new();
    }

    let mut best: Vec<usize> = Vec::new();
    let mut best_rank: Option<ShipmentRank> = None;

    for mask in 1u64..(1u64 << n) {
        let mut total_weight_kg = 0.0;
        let mut max_distance_km = 0.0;
        let mut subset = Vec::with_capacity(mask.count_ones() as usize);
        let mut feasible = true;

        for (i, item) in pending.iter().enumerate() {
            if (mask >> i) & 1 == 1 {
                total_weight_kg += item.weight_kg();
                if total_weight_kg > capacity_kg {
                    feasible = false;
                    break;
                }
                if item.distance_km() > max_distance_km {
                    max_distance_km = item.distance_km();
                }
                subset.push(i);
            }
        }
        if !feasible {
            continue;
        }

        let rank = ShipmentRank {
            count: subset.len(),
            total_weight_kg,
            max_distance_km,
        };
        if best_rank.is_none_or(|b| rank.better_than(&b, epsilon)) {
            best = subset;
            best_rank = Some(rank);
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f64 = 1e-9;

    #[derive(Debug, Clone)]
    struct Item {
        weight: f64,
        distance: f64,
    }

    impl ShipmentItem for Item {
        fn weight_kg(&self) -> f64 {
            self.weight
        }
        fn distance_km(&self) -> f64 {
            self.distance
        }
    }

    fn item(weight: f64, distance: f64) -> Item {
        Item { weight, distance }
    }

    #[test]
    fn test_empty_input() {
        let items: Vec<Item> = vec![];
        assert!(choose_exact(&items, 100.0, EPS).is_empty());
    }

    #[test]
    fn test_single_item_fits() {
        let items = vec![item(50.0, 30.0)];
        assert_eq!(choose_exact(&items, 100.0, EPS), vec![0]);
    }

    #[test]
    fn test_nothing_fits() {
        let items = vec![item(150.0, 30.0), item(200.0, 10.0)];
        assert!(choose_exact(&items, 100.0, EPS).is_empty());
    }

    #[test]
    fn test_prefers_more_items_over_weight() {
        // Two 40s beat one 90 under a 100 kg cap.
        let items = vec![item(90.0, 10.0), item(40.0, 50.0), item(40.0, 60.0)];
        assert_eq!(choose_exact(&items, 100.0, EPS), vec![1, 2]);
    }

    #[test]
    fn test_prefers_heavier_at_equal_count() {
        // Reference scenario, first trip: cap 200, best pair is 75+110.
        let items = vec![
            item(50.0, 30.0),
            item(75.0, 125.0),
            item(175.0, 100.0),
            item(110.0, 60.0),
            item(155.0, 95.0),
        ];
        assert_eq!(choose_exact(&items, 200.0, EPS), vec![1, 3]);
    }

    #[test]
    fn test_distance_breaks_exact_weight_tie() {
        // Several pairs weigh exactly 100; {2,3} has the shortest farthest leg.
        let items = vec![
            item(60.0, 200.0),
            item(40.0, 150.0),
            item(60.0, 90.0),
            item(40.0, 80.0),
        ];
        let chosen = choose_exact(&items, 100.0, EPS);
        assert_eq!(chosen, vec![2, 3]);
    }

    #[test]
    fn test_zero_weight_items_always_included() {
        let items = vec![item(0.0, 10.0), item(100.0, 5.0), item(0.0, 20.0)];
        assert_eq!(choose_exact(&items, 100.0, EPS), vec![0, 1, 2]);
    }

    #[test]
    fn test_exact_capacity_is_feasible() {
        let items = vec![item(60.0, 10.0), item(40.0, 20.0)];
        assert_eq!(choose_exact(&items, 100.0, EPS), vec![0, 1]);
    }

    // Reference check: the chosen subset's rank must be >= the rank of every
    // feasible subset, enumerated independently.
    fn assert_optimal(items: &[Item], capacity: f64) {
        let chosen = choose_exact(items, capacity, EPS);
        let chosen_rank = ShipmentRank::of(items, &chosen);

        let n = items.len();
        for mask in 1u64..(1u64 << n) {
            let subset: Vec<usize> = (0..n).filter(|i| (mask >> i) & 1 == 1).collect();
            let rank = ShipmentRank::of(items, &subset);
            if rank.total_weight_kg <= capacity {
                assert!(
                    !rank.better_than(&chosen_rank, EPS),
                    "subset {subset:?} with {rank:?} beats chosen {chosen:?} with {chosen_rank:?}"
                );
            }
        }
        if !chosen.is_empty() {
            assert!(chosen_rank.total_weight_kg <= capacity);
        }
    }

    proptest! {
        #[test]
        fn prop_chosen_subset_is_optimal(
            weights in prop::collection::vec(0.0f64..120.0, 1..9),
            distances in prop::collection::vec(0.0f64..300.0, 1..9),
            capacity in 1.0f64..250.0,
        ) {
            let items: Vec<Item> = weights
                .iter()
                .zip(distances.iter().cycle())
                .map(|(&w, &d)| item(w, d))
                .collect();
            assert_optimal(&items, capacity);
        }

        #[test]
        fn prop_empty_only_when_nothing_fits(
            weights in prop::collection::vec(0.0f64..120.0, 1..9),
            capacity in 1.0f64..250.0,
        ) {
            let items: Vec<Item> = weights.iter().map(|&w| item(w, 10.0)).collect();
            let chosen = choose_exact(&items, capacity, EPS);
            let any_fits = weights.iter().any(|&w| w <= capacity);
            prop_assert_eq!(chosen.is_empty(), !any_fits);
        }
    }
}
