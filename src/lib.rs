//! Capacity-aware shipment selection and vehicle dispatch scheduling.
//!
//! Assigns a batch of delivery packages to a fleet of reusable vehicles and
//! computes each package's estimated delivery time. Two layers:
//!
//! - **Selection** ([`selection`]): given one vehicle's capacity and a set of
//!   pending items, picks the best subset to load. Exact subset enumeration
//!   for small sets, a two-heuristic greedy comparison for large ones; both
//!   rank candidates by cardinality, then total weight, then smallest
//!   farthest-stop distance.
//! - **Dispatch** ([`dispatch`]): the scheduling loop. Repeatedly takes the
//!   earliest-available vehicle, asks the selector for a shipment, writes
//!   delivery times back to the packages, and advances the vehicle's
//!   availability by the round trip to the farthest drop-off. Runs until
//!   every package is assigned; a package too heavy for every vehicle is
//!   shipped alone, overloaded, rather than stalling the loop.
//!
//! # Architecture
//!
//! The selection layer is domain-agnostic: it sees items only through the
//! [`selection::ShipmentItem`] trait and carries no delivery concepts. The
//! dispatch layer owns the delivery domain ([`dispatch::Package`],
//! [`dispatch::Vehicle`], [`dispatch::Assignment`]) and drives the selectors.
//!
//! The whole crate is single-threaded and deterministic: identical inputs
//! (including order) produce identical assignment sequences.

pub mod dispatch;
pub mod selection;
