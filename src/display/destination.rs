//! Destination display formatting

use crate::models::{Destination, DestinationKind};

/// Format the full catalog as a numbered list (menu numbering is 1-based)
pub fn format_destination_list(destinations: &[Destination]) -> String {
    let mut output = String::new();

    output.push_str("========================================\n");
    output.push_str("     AVAILABLE DESTINATIONS\n");
    output.push_str("========================================\n\n");

    if destinations.is_empty() {
        output.push_str("  No destinations available.\n");
        return output;
    }

    for (i, destination) in destinations.iter().enumerate() {
        output.push_str(&format!("{}. ", i + 1));
        output.push_str(&format_destination_details(destination));
        output.push('\n');
    }

    output
}

/// Format one destination's details
///
/// The first line carries the name, country, and kind; the indented lines
/// carry the description and the kind-specific cost fields.
pub fn format_destination_details(destination: &Destination) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{}, {} [{}]\n",
        destination.name,
        destination.country,
        destination.kind.label()
    ));
    if !destination.description.is_empty() {
        output.push_str(&format!("   {}\n", destination.description));
    }
    output.push_str(&format!("   Base Cost: {}\n", destination.base_cost));

    match &destination.kind {
        DestinationKind::Plain => {}
        DestinationKind::City {
            attractions,
            transport_cost,
        } => {
            output.push_str(&format!("   Transport: {}\n", transport_cost));
            if !attractions.is_empty() {
                output.push_str(&format!("   Attractions: {}\n", attractions.join(", ")));
            }
        }
        DestinationKind::Tour {
            duration_days,
            tour_type,
            daily_cost,
        } => {
            output.push_str(&format!("   Tour Type: {}\n", tour_type));
            output.push_str(&format!("   Duration: {} days\n", duration_days));
            output.push_str(&format!("   Daily Cost: {}\n", daily_cost));
            output.push_str(&format!("   Total Tour Cost: {}\n", destination.total_cost()));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DestinationCatalog;
    use crate::models::Money;

    #[test]
    fn test_list_numbers_entries_from_one() {
        let catalog = DestinationCatalog::with_defaults();
        let listing = format_destination_list(catalog.all());

        assert!(listing.contains("AVAILABLE DESTINATIONS"));
        assert!(listing.contains("1. Paris, France [City]"));
        assert!(listing.contains("6. Dubai, UAE [Tour]"));
    }

    #[test]
    fn test_city_details_include_attractions() {
        let paris = Destination::city(
            "Paris",
            "France",
            Money::from_major(500),
            "The City of Light with iconic landmarks",
        )
        .with_attraction("Eiffel Tower")
        .with_attraction("Louvre Museum");

        let details = format_destination_details(&paris);
        assert!(details.contains("Base Cost: $500.00"));
        assert!(details.contains("Transport: $50.00"));
        assert!(details.contains("Attractions: Eiffel Tower, Louvre Museum"));
    }

    #[test]
    fn test_tour_details_include_derived_total() {
        let alps = Destination::tour(
            "Swiss Alps",
            "Switzerland",
            Money::from_major(800),
            "Mountain adventure with stunning views",
            5,
            "Adventure",
        );

        let details = format_destination_details(&alps);
        assert!(details.contains("Tour Type: Adventure"));
        assert!(details.contains("Duration: 5 days"));
        assert!(details.contains("Daily Cost: $100.00"));
        assert!(details.contains("Total Tour Cost: $1300.00"));
    }

    #[test]
    fn test_plain_details_have_no_extras() {
        let rome = Destination::plain("Rome", "Italy", Money::from_major(300), "Ancient capital");
        let details = format_destination_details(&rome);

        assert!(details.contains("Rome, Italy [Plain]"));
        assert!(!details.contains("Transport"));
        assert!(!details.contains("Duration"));
    }

    #[test]
    fn test_empty_catalog_listing() {
        let listing = format_destination_list(&[]);
        assert!(listing.contains("No destinations available."));
    }
}
