//! Destination catalog
//!
//! The fixed (and importable) set of destinations a user may choose from.
//! Populated once at startup with the seed set; append-only for the session,
//! so the 1-based menu numbering stays stable.

pub mod import;

pub use import::{import_from_path, import_records};

use crate::error::{TripError, TripResult};
use crate::models::{Destination, Money};

/// Ordered collection of available destinations
///
/// Entries are unique by position, not by name; duplicate names are allowed.
#[derive(Debug, Clone, Default)]
pub struct DestinationCatalog {
    destinations: Vec<Destination>,
}

impl DestinationCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog populated with the default destinations
    pub fn with_defaults() -> Self {
        let mut catalog = Self::new();
        catalog.load_defaults();
        catalog
    }

    /// Populate the fixed seed set, in menu order
    pub fn load_defaults(&mut self) {
        self.destinations.push(
            Destination::city(
                "Paris",
                "France",
                Money::from_major(500),
                "The City of Light with iconic landmarks",
            )
            .with_attraction("Eiffel Tower")
            .with_attraction("Louvre Museum")
            .with_attraction("Notre-Dame"),
        );

        self.destinations.push(
            Destination::city(
                "Tokyo",
                "Japan",
                Money::from_major(600),
                "Modern metropolis with rich culture",
            )
            .with_attraction("Senso-ji Temple")
            .with_attraction("Tokyo Tower")
            .with_attraction("Shibuya Crossing"),
        );

        self.destinations.push(
            Destination::city(
                "New York",
                "USA",
                Money::from_major(700),
                "The city that never sleeps",
            )
            .with_attraction("Statue of Liberty")
            .with_attraction("Central Park")
            .with_attraction("Times Square"),
        );

        self.destinations.push(Destination::tour(
            "Bali",
            "Indonesia",
            Money::from_major(400),
            "Tropical paradise with beaches and temples",
            7,
            "Beach & Culture",
        ));

        self.destinations.push(Destination::tour(
            "Swiss Alps",
            "Switzerland",
            Money::from_major(800),
            "Mountain adventure with stunning views",
            5,
            "Adventure",
        ));

        self.destinations.push(Destination::tour(
            "Dubai",
            "UAE",
            Money::from_major(900),
            "Luxury and modern architecture",
            4,
            "Luxury",
        ));
    }

    /// Append a destination
    pub fn push(&mut self, destination: Destination) {
        self.destinations.push(destination);
    }

    /// Get the destination at a zero-based index
    ///
    /// Takes a signed index because menu selections arrive as user-typed
    /// integers ("2" at the menu becomes index 1, "0" becomes -1).
    ///
    /// # Errors
    ///
    /// `OutOfRange` when the index is negative or past the end.
    pub fn get(&self, index: i64) -> TripResult<&Destination> {
        if index < 0 {
            return Err(TripError::out_of_range(index, self.len()));
        }

        self.destinations
            .get(index as usize)
            .ok_or_else(|| TripError::out_of_range(index, self.len()))
    }

    /// Read-only view of all destinations, in menu order
    pub fn all(&self) -> &[Destination] {
        &self.destinations
    }

    /// Number of destinations in the catalog
    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DestinationKind;

    #[test]
    fn test_defaults_are_six_fixed_entries() {
        let catalog = DestinationCatalog::with_defaults();
        assert_eq!(catalog.len(), 6);

        let names: Vec<&str> = catalog.all().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(
            names,
            ["Paris", "Tokyo", "New York", "Bali", "Swiss Alps", "Dubai"]
        );

        assert_eq!(catalog.get(0).unwrap().name, "Paris");
    }

    #[test]
    fn test_defaults_have_expected_kinds() {
        let catalog = DestinationCatalog::with_defaults();
        for city in &catalog.all()[..3] {
            assert!(matches!(city.kind, DestinationKind::City { .. }));
        }
        for tour in &catalog.all()[3..] {
            assert!(matches!(tour.kind, DestinationKind::Tour { .. }));
        }
    }

    #[test]
    fn test_get_rejects_out_of_range() {
        let catalog = DestinationCatalog::with_defaults();

        assert!(matches!(
            catalog.get(-1),
            Err(TripError::OutOfRange { index: -1, size: 6 })
        ));
        assert!(matches!(
            catalog.get(6),
            Err(TripError::OutOfRange { index: 6, size: 6 })
        ));

        for index in 0..6 {
            assert!(catalog.get(index).is_ok());
        }
    }

    #[test]
    fn test_duplicate_names_permitted() {
        let mut catalog = DestinationCatalog::new();
        catalog.push(Destination::plain("Rome", "Italy", Money::from_major(300), ""));
        catalog.push(Destination::plain("Rome", "Italy", Money::from_major(350), ""));

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(0).unwrap().base_cost, Money::from_major(300));
        assert_eq!(catalog.get(1).unwrap().base_cost, Money::from_major(350));
    }
}
