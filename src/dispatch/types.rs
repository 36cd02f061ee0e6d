//! Delivery domain records: packages, vehicles, and dispatch assignments.

use crate::selection::ShipmentItem;

/// Delivery time sentinel for a package that has not been scheduled yet.
const UNSCHEDULED: f64 = -1.0;

/// A package awaiting delivery.
///
/// The id must be unique within a batch (the scheduler does not validate
/// uniqueness). `delivery_time_hours` and `assigned_vehicle_id` start unset
/// and are written exactly once by the dispatch loop; a package with a
/// delivery time is no longer eligible for selection.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Package {
    /// Unique package id.
    pub id: String,

    /// Weight in kilograms. Zero is valid and contributes nothing to a
    /// shipment's load.
    pub weight_kg: f64,

    /// One-way distance from the depot in kilometers. Zero is valid and
    /// yields a zero travel time.
    pub distance_km: f64,

    /// Estimated delivery time in hours since the start of the run.
    /// Negative until the dispatch loop schedules the package.
    pub delivery_time_hours: f64,

    /// Id of the vehicle that carries this package, once scheduled.
    pub assigned_vehicle_id: Option<String>,
}

impl Package {
    /// Creates an unscheduled package.
    pub fn new(id: impl Into<String>, weight_kg: f64, distance_km: f64) -> Self {
        Self {
            id: id.into(),
            weight_kg,
            distance_km,
            delivery_time_hours: UNSCHEDULED,
            assigned_vehicle_id: None,
        }
    }

    /// Whether this package still awaits scheduling.
    pub fn is_pending(&self) -> bool {
        self.delivery_time_hours < 0.0
    }
}

impl ShipmentItem for Package {
    fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    fn distance_km(&self) -> f64 {
        self.distance_km
    }
}

/// A delivery vehicle.
///
/// `available_at_hours` starts at zero and only advances: each dispatch sets
/// it to the moment the vehicle returns from its round trip.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vehicle {
    /// Unique vehicle id within the fleet.
    pub id: String,

    /// Maximum load in kilograms. Must be positive.
    pub capacity_kg: f64,

    /// Travel speed in km/h. Must be positive; the scheduler divides by it.
    pub speed_kmph: f64,

    /// Time in hours at which the vehicle is next free.
    pub available_at_hours: f64,
}

impl Vehicle {
    /// Creates a vehicle that is available immediately.
    pub fn new(id: impl Into<String>, capacity_kg: f64, speed_kmph: f64) -> Self {
        Self {
            id: id.into(),
            capacity_kg,
            speed_kmph,
            available_at_hours: 0.0,
        }
    }
}

/// Immutable record of one dispatch step: one vehicle loaded and sent out.
///
/// The carried packages are snapshots taken after their delivery times were
/// written, in the order the selector packed them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    /// Id of the dispatched vehicle.
    pub vehicle_id: String,

    /// Packages carried on this trip.
    pub packages: Vec<Package>,

    /// Departure time in hours.
    pub start_time_hours: f64,

    /// Distance to the farthest drop-off on this trip, in kilometers.
    pub max_distance_km: f64,

    /// Time in hours at which the vehicle is back at the depot.
    pub return_time_hours: f64,
}

impl Assignment {
    /// Total weight carried on this trip, in kilograms.
    pub fn total_weight_kg(&self) -> f64 {
        self.packages.iter().map(|p| p.weight_kg).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_package_is_pending() {
        let pkg = Package::new("PKG1", 50.0, 30.0);
        assert!(pkg.is_pending());
        assert!(pkg.assigned_vehicle_id.is_none());
    }

    #[test]
    fn test_scheduled_package_is_not_pending() {
        let mut pkg = Package::new("PKG1", 50.0, 30.0);
        pkg.delivery_time_hours = 0.0;
        assert!(!pkg.is_pending());
    }

    #[test]
    fn test_new_vehicle_available_immediately() {
        let v = Vehicle::new("V1", 200.0, 70.0);
        assert!((v.available_at_hours - 0.0).abs() < 1e-12);
    }

    #[test]
    fn test_assignment_total_weight() {
        let a = Assignment {
            vehicle_id: "V1".into(),
            packages: vec![Package::new("A", 75.0, 125.0), Package::new("B", 110.0, 60.0)],
            start_time_hours: 0.0,
            max_distance_km: 125.0,
            return_time_hours: 125.0 * 2.0 / 70.0,
        };
        assert!((a.total_weight_kg() - 185.0).abs() < 1e-9);
    }
}
