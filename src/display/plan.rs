//! Travel plan display formatting

use crate::display::destination::format_destination_details;
use crate::models::{Itinerary, LedgerSnapshot};

/// Format the full travel plan: banner, stops, and cost breakdown
pub fn format_plan(itinerary: &Itinerary) -> String {
    let mut output = String::new();

    output.push_str("========================================\n");
    output.push_str(&format!(
        "    YOUR TRAVEL PLAN - {}\n",
        itinerary.traveler_name()
    ));
    output.push_str("========================================\n\n");

    if itinerary.selected().is_empty() {
        output.push_str("  No destinations selected yet.\n");
        return output;
    }

    output.push_str("Itinerary:\n\n");
    for (i, stop) in itinerary.selected().iter().enumerate() {
        output.push_str(&format!("Stop {}: ", i + 1));
        output.push_str(&format_destination_details(stop));
        output.push('\n');
    }

    if let Some(ledger) = itinerary.ledger() {
        output.push_str(&format_cost_breakdown(&ledger.snapshot()));
    }

    output
}

/// Format the ledger's line items and budget summary
pub fn format_cost_breakdown(snapshot: &LedgerSnapshot) -> String {
    let mut output = String::new();

    output.push_str("========================================\n");
    output.push_str("         COST BREAKDOWN\n");
    output.push_str("========================================\n\n");

    for item in &snapshot.line_items {
        output.push_str(&format!("  - {}\n", item));
    }

    output.push_str(&format!("\n  Total Cost: {}\n", snapshot.total_cost));
    output.push_str(&format!("  Your Budget: {}\n", snapshot.budget));
    output.push_str(&format!("  Remaining: {}\n", snapshot.remaining));

    if snapshot.within_budget {
        output.push_str("  Within budget!\n");
    } else {
        output.push_str(&format!(
            "  Over budget by {}!\n",
            snapshot.remaining.abs()
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Destination, Money};

    fn planned_itinerary() -> Itinerary {
        let mut plan = Itinerary::new("Alice");
        plan.set_budget(Money::from_major(1_000)).unwrap();
        plan.add_destination(
            Destination::city("Paris", "France", Money::from_major(500), "City of Light")
                .with_attraction("Eiffel Tower"),
        )
        .unwrap();
        plan
    }

    #[test]
    fn test_empty_plan_message() {
        let mut plan = Itinerary::new("Alice");
        plan.set_budget(Money::from_major(1_000)).unwrap();

        let text = format_plan(&plan);
        assert!(text.contains("YOUR TRAVEL PLAN - Alice"));
        assert!(text.contains("No destinations selected yet."));
        assert!(!text.contains("COST BREAKDOWN"));
    }

    #[test]
    fn test_plan_shows_stops_and_breakdown() {
        let text = format_plan(&planned_itinerary());

        assert!(text.contains("Stop 1: Paris, France [City]"));
        assert!(text.contains("COST BREAKDOWN"));
        assert!(text.contains("  - Paris (Base): $500.00"));
        assert!(text.contains("  - Paris (Transport): $50.00"));
        assert!(text.contains("Total Cost: $550.00"));
        assert!(text.contains("Remaining: $450.00"));
        assert!(text.contains("Within budget!"));
    }

    #[test]
    fn test_breakdown_flags_over_budget() {
        let mut plan = planned_itinerary();
        plan.add_destination(Destination::tour(
            "Bali",
            "Indonesia",
            Money::from_major(400),
            "",
            7,
            "Beach & Culture",
        ))
        .unwrap();

        let text = format_cost_breakdown(&plan.ledger().unwrap().snapshot());
        assert!(text.contains("Total Cost: $1650.00"));
        assert!(text.contains("Remaining: -$650.00"));
        assert!(text.contains("Over budget by $650.00!"));
    }
}
