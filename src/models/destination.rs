//! Destination model
//!
//! A travel option offered by the catalog. Every destination shares a core
//! record (name, country, base cost, description); the kind payload carries
//! what distinguishes a plain stopover from a city visit or a multi-day tour.
//! Cost derivation per kind lives in `Itinerary::add_destination` so the
//! variant dispatch stays in one place.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Default transport cost applied to city destinations
pub const DEFAULT_TRANSPORT_COST: Money = Money::from_cents(5_000);

/// Default per-day cost applied to tour destinations
pub const DEFAULT_DAILY_COST: Money = Money::from_cents(10_000);

/// Variant payload of a destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DestinationKind {
    /// A bare destination with no extra costs
    Plain,
    /// A city visit with local transport and a list of attractions
    City {
        attractions: Vec<String>,
        transport_cost: Money,
    },
    /// A guided multi-day tour billed per day
    Tour {
        duration_days: u32,
        tour_type: String,
        daily_cost: Money,
    },
}

impl DestinationKind {
    /// Short label for list displays
    pub fn label(&self) -> &'static str {
        match self {
            Self::Plain => "Plain",
            Self::City { .. } => "City",
            Self::Tour { .. } => "Tour",
        }
    }
}

/// A travel option a user may add to their itinerary
///
/// Constructed once when the catalog is populated (or parsed from an import
/// record) and never mutated after the catalog is queried.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    /// Destination name (e.g. "Paris")
    pub name: String,

    /// Country the destination is in
    pub country: String,

    /// Cost of getting there, before any kind-specific extras
    pub base_cost: Money,

    /// One-line description shown in listings
    #[serde(default)]
    pub description: String,

    /// Kind-specific payload
    #[serde(flatten)]
    pub kind: DestinationKind,
}

impl Destination {
    /// Create a plain destination (base cost only)
    pub fn plain(
        name: impl Into<String>,
        country: impl Into<String>,
        base_cost: Money,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            country: country.into(),
            base_cost,
            description: description.into(),
            kind: DestinationKind::Plain,
        }
    }

    /// Create a city destination with the default transport cost and no
    /// attractions yet
    pub fn city(
        name: impl Into<String>,
        country: impl Into<String>,
        base_cost: Money,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            country: country.into(),
            base_cost,
            description: description.into(),
            kind: DestinationKind::City {
                attractions: Vec::new(),
                transport_cost: DEFAULT_TRANSPORT_COST,
            },
        }
    }

    /// Create a tour destination with the default daily cost
    pub fn tour(
        name: impl Into<String>,
        country: impl Into<String>,
        base_cost: Money,
        description: impl Into<String>,
        duration_days: u32,
        tour_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            country: country.into(),
            base_cost,
            description: description.into(),
            kind: DestinationKind::Tour {
                duration_days,
                tour_type: tour_type.into(),
                daily_cost: DEFAULT_DAILY_COST,
            },
        }
    }

    /// Append an attraction during construction-time setup
    ///
    /// Only meaningful for city destinations; other kinds are returned
    /// unchanged. Catalog entries are never extended after load.
    pub fn with_attraction(mut self, attraction: impl Into<String>) -> Self {
        if let DestinationKind::City { attractions, .. } = &mut self.kind {
            attractions.push(attraction.into());
        }
        self
    }

    /// Total cost contribution of this destination
    ///
    /// Plain: base. City: base + transport. Tour: base + daily x duration
    /// (the tour's derived total cost).
    pub fn total_cost(&self) -> Money {
        match &self.kind {
            DestinationKind::Plain => self.base_cost,
            DestinationKind::City { transport_cost, .. } => self.base_cost + *transport_cost,
            DestinationKind::Tour {
                duration_days,
                daily_cost,
                ..
            } => self.base_cost + *daily_cost * *duration_days,
        }
    }

    /// Validate the destination
    pub fn validate(&self) -> Result<(), DestinationValidationError> {
        if self.name.trim().is_empty() {
            return Err(DestinationValidationError::EmptyName);
        }

        if self.base_cost.is_negative() {
            return Err(DestinationValidationError::NegativeBaseCost(self.base_cost));
        }

        if let DestinationKind::Tour { duration_days: 0, .. } = self.kind {
            return Err(DestinationValidationError::ZeroDuration);
        }

        Ok(())
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.name, self.country)
    }
}

/// Validation errors for destinations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DestinationValidationError {
    EmptyName,
    NegativeBaseCost(Money),
    ZeroDuration,
}

impl fmt::Display for DestinationValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Destination name cannot be empty"),
            Self::NegativeBaseCost(cost) => {
                write!(f, "Base cost cannot be negative (got {})", cost)
            }
            Self::ZeroDuration => write!(f, "Tour duration must be at least one day"),
        }
    }
}

impl std::error::Error for DestinationValidationError {}
