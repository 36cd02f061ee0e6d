//! Core trait and ranking for shipment selection.

/// An item that can be loaded onto a vehicle.
///
/// The selection algorithms need exactly two facts about an item: how much
/// it weighs (capacity feasibility, criterion 2) and how far away its
/// drop-off is (criterion 3).
///
/// # Examples
///
/// ```ignore
/// struct Crate { kg: f64, km: f64 }
///
/// impl ShipmentItem for Crate {
///     fn weight_kg(&self) -> f64 { self.kg }
///     fn distance_km(&self) -> f64 { self.km }
/// }
/// ```
pub trait ShipmentItem {
    /// Weight of the item in kilograms.
    fn weight_kg(&self) -> f64;

    /// One-way distance from the depot to the drop-off, in kilometers.
    fn distance_km(&self) -> f64;
}

impl<T: ShipmentItem + ?Sized> ShipmentItem for &T {
    fn weight_kg(&self) -> f64 {
        (**self).weight_kg()
    }

    fn distance_km(&self) -> f64 {
        (**self).distance_km()
    }
}

/// The comparable quality of one candidate shipment.
///
/// Ranks are ordered lexicographically by `(count, total_weight_kg,
/// -max_distance_km)`: more items beats fewer; at equal count, strictly
/// more weight beats less; at equal weight (within `epsilon`), the shorter
/// farthest leg beats the longer one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShipmentRank {
    /// Number of items in the shipment.
    pub count: usize,

    /// Total weight of the shipment in kilograms.
    pub total_weight_kg: f64,

    /// Distance to the farthest drop-off in the shipment, in kilometers.
    pub max_distance_km: f64,
}

impl ShipmentRank {
    /// Computes the rank of a set of items (given as indices into `items`).
    pub fn of<T: ShipmentItem>(items: &[T], subset: &[usize]) -> Self {
        let mut total_weight_kg = 0.0;
        let mut max_distance_km = 0.0;
        for &i in subset {
            total_weight_kg += items[i].weight_kg();
            if items[i].distance_km() > max_distance_km {
                max_distance_km = items[i].distance_km();
            }
        }
        Self {
            count: subset.len(),
            total_weight_kg,
            max_distance_km,
        }
    }

    /// Whether this rank beats `other` under the three-level criteria.
    ///
    /// `epsilon` only enters at the third level: weights further apart than
    /// `epsilon` are decided by weight alone; weights within `epsilon` are
    /// treated as tied and fall through to the distance comparison.
    pub fn better_than(&self, other: &Self, epsilon: f64) -> bool {
        if self.count != other.count {
            return self.count > other.count;
        }
        if (self.total_weight_kg - other.total_weight_kg).abs() > epsilon {
            return self.total_weight_kg > other.total_weight_kg;
        }
        self.max_distance_km < other.max_distance_km
    }
}
