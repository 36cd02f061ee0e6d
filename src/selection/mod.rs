//! Shipment selection: choosing the best subset of pending items that fits
//! one vehicle's weight capacity.
//!
//! Two algorithms share the same selection criteria, applied in strict
//! priority:
//!
//! 1. Maximize subset cardinality (ship as many items per trip as possible).
//! 2. Among equal cardinality, maximize total weight (fill the vehicle).
//! 3. Among equal weight (within a float tolerance), minimize the subset's
//!    maximum distance (free the vehicle sooner).
//!
//! - **Exact** ([`choose_exact`]): enumerates every non-empty subset.
//!   Optimal by the criteria above, exponential in the item count; intended
//!   for small pending sets (the dispatch layer caps it by a configurable
//!   threshold, default 20).
//! - **Greedy** ([`choose_greedy`]): builds two candidate packings
//!   (ascending-weight-first and descending-weight-first) and keeps the
//!   better one by the same criteria. Near-optimal in linearithmic time.
//!
//! # Design
//!
//! This module contains NO delivery-specific concepts. Items are seen only
//! through the [`ShipmentItem`] trait (weight + distance); `Package` and
//! friends live in the `dispatch` layer.

mod exact;
mod greedy;
mod types;

pub use exact::choose_exact;
pub use greedy::choose_greedy;
pub use types::{ShipmentItem, ShipmentRank};
