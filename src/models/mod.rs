//! Core data models for tripplan
//!
//! This module contains the data structures that represent the planning
//! domain: destinations, the cost ledger, and the itinerary.

pub mod destination;
pub mod itinerary;
pub mod ledger;
pub mod money;

pub use destination::{
    Destination, DestinationKind, DEFAULT_DAILY_COST, DEFAULT_TRANSPORT_COST,
};
pub use itinerary::{Itinerary, PlanId, PlanSnapshot};
pub use ledger::{CostLedger, LedgerSnapshot, LineItem};
pub use money::Money;
