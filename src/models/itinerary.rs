//! Itinerary model
//!
//! The ordered list of destinations one traveler has selected, together with
//! the cost ledger the selections feed. Adding a destination derives its cost
//! line items by kind and forwards them to the ledger before the stop is
//! recorded, so a stop never exists without its costs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::destination::{Destination, DestinationKind};
use super::ledger::{CostLedger, LedgerSnapshot};
use super::money::Money;
use crate::error::{TripError, TripResult};

/// Unique identifier for one planning session's itinerary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlanId(Uuid);

impl PlanId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for PlanId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "plan-{}", &self.0.to_string()[..8])
    }
}

impl FromStr for PlanId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix("plan-").unwrap_or(s);
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// One traveler's trip plan: selected stops plus the owned cost ledger
#[derive(Debug, Clone)]
pub struct Itinerary {
    id: PlanId,
    traveler_name: String,
    created_at: DateTime<Utc>,
    stops: Vec<Destination>,
    ledger: Option<CostLedger>,
}

/// Read-only view of a plan for export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanSnapshot {
    pub id: PlanId,
    pub traveler_name: String,
    pub created_at: DateTime<Utc>,
    pub stops: Vec<Destination>,
    pub ledger: LedgerSnapshot,
}

impl Itinerary {
    /// Create an empty itinerary for the named traveler
    ///
    /// The traveler name may be empty. No budget is set yet; call
    /// [`set_budget`](Self::set_budget) before adding destinations.
    pub fn new(traveler_name: impl Into<String>) -> Self {
        Self {
            id: PlanId::new(),
            traveler_name: traveler_name.into(),
            created_at: Utc::now(),
            stops: Vec::new(),
            ledger: None,
        }
    }

    /// Set the trip budget, creating the owned cost ledger
    ///
    /// Must be called exactly once. A second call is rejected: replacing the
    /// ledger would orphan the line items already recorded for the stops.
    ///
    /// # Errors
    ///
    /// `InvalidBudget` when the budget is zero or negative; `Validation`
    /// when a budget has already been set.
    pub fn set_budget(&mut self, budget: Money) -> TripResult<()> {
        if self.ledger.is_some() {
            return Err(TripError::Validation(
                "Budget has already been set for this plan".into(),
            ));
        }

        self.ledger = Some(CostLedger::new(budget)?);
        Ok(())
    }

    /// Add a destination to the plan, recording its cost line items
    ///
    /// The line items derived per kind (exact labels are user-facing and
    /// appear in the exported breakdown):
    /// - Plain: `"<name> (Base)"`
    /// - City: `"<name> (Base)"`, `"<name> (Transport)"`
    /// - Tour: `"<name> (Base)"`, `"<name> (Daily x<days>)"`
    ///
    /// # Errors
    ///
    /// `NoBudgetSet` when called before [`set_budget`](Self::set_budget).
    pub fn add_destination(&mut self, dest: Destination) -> TripResult<()> {
        let ledger = self.ledger.as_mut().ok_or(TripError::NoBudgetSet)?;

        ledger.add_cost(format!("{} (Base)", dest.name), dest.base_cost);

        match &dest.kind {
            DestinationKind::Plain => {}
            DestinationKind::City { transport_cost, .. } => {
                ledger.add_cost(format!("{} (Transport)", dest.name), *transport_cost);
            }
            DestinationKind::Tour {
                duration_days,
                daily_cost,
                ..
            } => {
                ledger.add_cost(
                    format!("{} (Daily x{})", dest.name, duration_days),
                    *daily_cost * *duration_days,
                );
            }
        }

        self.stops.push(dest);
        Ok(())
    }

    /// This plan's identifier
    pub fn id(&self) -> PlanId {
        self.id
    }

    /// The traveler this plan belongs to
    pub fn traveler_name(&self) -> &str {
        &self.traveler_name
    }

    /// When this plan was started
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// The ordered selection of stops (duplicates allowed, append-only)
    pub fn selected(&self) -> &[Destination] {
        &self.stops
    }

    /// The owned cost ledger, if a budget has been set
    pub fn ledger(&self) -> Option<&CostLedger> {
        self.ledger.as_ref()
    }

    /// Take a read-only snapshot of the whole plan for export
    ///
    /// # Errors
    ///
    /// `NoBudgetSet` when no budget has been set yet.
    pub fn snapshot(&self) -> TripResult<PlanSnapshot> {
        let ledger = self.ledger.as_ref().ok_or(TripError::NoBudgetSet)?;

        Ok(PlanSnapshot {
            id: self.id,
            traveler_name: self.traveler_name.clone(),
            created_at: self.created_at,
            stops: self.stops.clone(),
            ledger: ledger.snapshot(),
        })
    }
}
