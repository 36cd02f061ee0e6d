//! The dispatch scheduling loop.

use super::config::DispatchConfig;
use super::types::{Assignment, Package, Vehicle};
use crate::selection::{choose_exact, choose_greedy};
use log::{debug, trace};
use thiserror::Error;

/// Errors raised before the dispatch loop starts.
///
/// Steady-state operation cannot fail: a package that fits no vehicle is
/// shipped overloaded rather than reported as an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// The fleet is empty; there is nothing to schedule against.
    #[error("at least one vehicle is required")]
    EmptyFleet,

    /// The configuration failed validation.
    #[error("invalid dispatch configuration: {0}")]
    InvalidConfig(String),
}

/// Executes the dispatch scheduling loop.
pub struct DispatchRunner;

impl DispatchRunner {
    /// Schedules every pending package onto the fleet.
    ///
    /// Packages that already carry a delivery time are left untouched, so a
    /// partially processed batch can be re-submitted and only the still
    /// pending packages are assigned. Each loop iteration picks the vehicle
    /// with the smallest `available_at_hours` (ties go to the earlier fleet
    /// position), loads it with the subset the selector picks for its
    /// capacity, and advances its availability by the round trip to the
    /// farthest drop-off:
    ///
    /// - package delivery time = departure + distance / speed (one-way),
    /// - vehicle return time = departure + 2 * max distance / speed.
    ///
    /// When every remaining package individually exceeds the vehicle's
    /// capacity the heaviest one (ties by input order) is shipped alone,
    /// overloaded, so the loop always makes progress.
    ///
    /// Mutates `packages` (delivery time, assigned vehicle) and `vehicles`
    /// (availability) in place and returns one [`Assignment`] per trip, in
    /// dispatch order.
    ///
    /// # Errors
    ///
    /// [`DispatchError::EmptyFleet`] when `vehicles` is empty,
    /// [`DispatchError::InvalidConfig`] when `config` fails validation.
    /// Vehicle speeds and capacities are assumed already validated by the
    /// caller; a zero speed divides by zero and yields infinite times.
    pub fn run(
        packages: &mut [Package],
        vehicles: &mut [Vehicle],
        config: &DispatchConfig,
    ) -> Result<Vec<Assignment>, DispatchError> {
        config.validate().map_err(DispatchError::InvalidConfig)?;
        if vehicles.is_empty() {
            return Err(DispatchError::EmptyFleet);
        }

        // Indices of packages still awaiting a delivery time.
        let mut pending: Vec<usize> = (0..packages.len())
            .filter(|&i| packages[i].is_pending())
            .collect();
        let mut assignments = Vec::new();

        while !pending.is_empty() {
            let v = next_available(vehicles);
            let vehicle = &vehicles[v];
            let start = vehicle.available_at_hours;

            let view: Vec<&Package> = pending.iter().map(|&i| &packages[i]).collect();
            let mut chosen = if view.len() <= config.exact_search_threshold {
                choose_exact(&view, vehicle.capacity_kg, config.epsilon)
            } else {
                choose_greedy(&view, vehicle.capacity_kg, config.epsilon)
            };

            // Nothing fits: ship the heaviest package alone, overloaded.
            if chosen.is_empty() {
                chosen = vec![heaviest(&view)];
            }

            let vehicle_id = vehicle.id.clone();
            let speed = vehicle.speed_kmph;

            let mut max_distance_km = 0.0;
            for &c in &chosen {
                let pkg = &mut packages[pending[c]];
                pkg.assigned_vehicle_id = Some(vehicle_id.clone());
                pkg.delivery_time_hours = start + pkg.distance_km / speed;
                if pkg.distance_km > max_distance_km {
                    max_distance_km = pkg.distance_km;
                }
                trace!(
                    "{} ({} kg, {} km) delivered at {:.2} h by {}",
                    pkg.id,
                    pkg.weight_kg,
                    pkg.distance_km,
                    pkg.delivery_time_hours,
                    vehicle_id
                );
            }

            let return_at = start + 2.0 * max_distance_km / speed;
            vehicles[v].available_at_hours = return_at;

            let carried: Vec<Package> =
                chosen.iter().map(|&c| packages[pending[c]].clone()).collect();

            // Drop the shipped packages from the pending set, from the back
            // so earlier positions stay valid.
            let mut shipped = chosen;
            shipped.sort_unstable();
            for &c in shipped.iter().rev() {
                pending.remove(c);
            }

            debug!(
                "vehicle {} departs at {:.2} h with {} package(s), back at {:.2} h (farthest {} km)",
                vehicle_id,
                start,
                carried.len(),
                return_at,
                max_distance_km
            );

            assignments.push(Assignment {
                vehicle_id,
                packages: carried,
                start_time_hours: start,
                max_distance_km,
                return_time_hours: return_at,
            });
        }

        Ok(assignments)
    }
}

/// Index of the vehicle that becomes free first; ties go to the earlier
/// fleet position.
fn next_available(vehicles: &[Vehicle]) -> usize {
    let mut best = 0;
    for (i, v) in vehicles.iter().enumerate().skip(1) {
        if v.available_at_hours < vehicles[best].available_at_hours {
            best = i;
        }
    }
    best
}

/// Index of the heaviest package; ties go to the earlier input position.
fn heaviest(view: &[&Package]) -> usize {
    let mut best = 0;
    for (i, p) in view.iter().enumerate().skip(1) {
        if p.weight_kg > view[best].weight_kg {
            best = i;
        }
    }
    best
}
