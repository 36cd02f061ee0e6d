//! Vehicle dispatch: the scheduling loop that assigns packages to vehicles
//! over time.
//!
//! The loop repeatedly picks the vehicle that becomes free first, loads it
//! with the best shipment the `selection` layer can find under its weight
//! capacity, stamps each loaded package with its estimated delivery time,
//! and advances the vehicle's availability by the round trip to the farthest
//! drop-off. It terminates once every package carries a delivery time.
//!
//! A package heavier than every vehicle's capacity would otherwise deadlock
//! the loop; instead it is shipped alone, overloaded. No package is ever
//! left unassigned.

mod config;
mod runner;
mod types;

pub use config::DispatchConfig;
pub use runner::{DispatchError, DispatchRunner};
pub use types::{Assignment, Package, Vehicle};
