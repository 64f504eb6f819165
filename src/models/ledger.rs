//! Cost ledger model
//!
//! Accumulates named cost line items against a fixed budget and keeps the
//! running total. The ledger is owned by exactly one itinerary for the
//! session's duration.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use crate::error::{TripError, TripResult};

/// One labeled cost entry contributing to the ledger's total
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Human-readable label, e.g. "Paris (Transport)"
    pub label: String,
    /// Amount contributed to the total
    pub amount: Money,
}

impl fmt::Display for LineItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.amount)
    }
}

/// Running budget and cost-tracking state for one itinerary
///
/// Invariant: `total_cost` always equals the sum of all recorded line-item
/// amounts.
#[derive(Debug, Clone)]
pub struct CostLedger {
    budget: Money,
    total_cost: Money,
    line_items: Vec<LineItem>,
}

/// Read-only view of the ledger for display and export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    pub budget: Money,
    pub total_cost: Money,
    pub remaining: Money,
    pub within_budget: bool,
    pub line_items: Vec<LineItem>,
}

impl CostLedger {
    /// Create a ledger for the given budget
    ///
    /// # Errors
    ///
    /// Returns `InvalidBudget` when the budget is zero or negative.
    pub fn new(budget: Money) -> TripResult<Self> {
        if !budget.is_positive() {
            return Err(TripError::InvalidBudget(budget));
        }

        Ok(Self {
            budget,
            total_cost: Money::zero(),
            line_items: Vec::new(),
        })
    }

    /// Record a cost line item
    ///
    /// Appends unconditionally and adds the amount to the running total.
    /// Negative amounts are permitted (adjustments/refunds).
    pub fn add_cost(&mut self, label: impl Into<String>, amount: Money) {
        self.total_cost += amount;
        self.line_items.push(LineItem {
            label: label.into(),
            amount,
        });
    }

    /// The fixed budget this ledger tracks against
    pub fn budget(&self) -> Money {
        self.budget
    }

    /// Sum of all recorded line items
    pub fn total_cost(&self) -> Money {
        self.total_cost
    }

    /// Budget minus total cost; negative when over budget
    pub fn remaining(&self) -> Money {
        self.budget - self.total_cost
    }

    /// Whether the total is still at or under the budget
    pub fn within_budget(&self) -> bool {
        self.total_cost <= self.budget
    }

    /// Recorded line items in insertion order
    pub fn line_items(&self) -> &[LineItem] {
        &self.line_items
    }

    /// Take a read-only snapshot for display or export
    pub fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot {
            budget: self.budget,
            total_cost: self.total_cost,
            remaining: self.remaining(),
            within_budget: self.within_budget(),
            line_items: self.line_items.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ledger_starts_empty() {
        let ledger = CostLedger::new(Money::from_major(1_000)).unwrap();
        assert_eq!(ledger.total_cost(), Money::zero());
        assert_eq!(ledger.remaining(), Money::from_major(1_000));
        assert!(ledger.within_budget());
        assert!(ledger.line_items().is_empty());
    }

    #[test]
    fn test_rejects_non_positive_budget() {
        assert!(matches!(
            CostLedger::new(Money::zero()),
            Err(TripError::InvalidBudget(_))
        ));
        assert!(matches!(
            CostLedger::new(Money::from_major(-5)),
            Err(TripError::InvalidBudget(_))
        ));
    }

    #[test]
    fn test_total_is_sum_of_line_items() {
        let mut ledger = CostLedger::new(Money::from_major(1_000)).unwrap();
        ledger.add_cost("Paris (Base)", Money::from_major(500));
        ledger.add_cost("Paris (Transport)", Money::from_major(50));
        ledger.add_cost("Refund", Money::from_major(-100));

        let sum: Money = ledger.line_items().iter().map(|item| item.amount).sum();
        assert_eq!(ledger.total_cost(), sum);
        assert_eq!(ledger.total_cost(), Money::from_major(450));
    }

    #[test]
    fn test_line_items_preserve_insertion_order() {
        let mut ledger = CostLedger::new(Money::from_major(1_000)).unwrap();
        ledger.add_cost("first", Money::from_major(1));
        ledger.add_cost("second", Money::from_major(2));
        ledger.add_cost("third", Money::from_major(3));

        let labels: Vec<&str> = ledger
            .line_items()
            .iter()
            .map(|item| item.label.as_str())
            .collect();
        assert_eq!(labels, ["first", "second", "third"]);
    }

    #[test]
    fn test_remaining_goes_negative_when_over_budget() {
        let mut ledger = CostLedger::new(Money::from_major(1_000)).unwrap();
        ledger.add_cost("Paris (Base)", Money::from_major(500));
        ledger.add_cost("Paris (Transport)", Money::from_major(50));
        assert_eq!(ledger.remaining(), Money::from_major(450));
        assert!(ledger.within_budget());

        ledger.add_cost("Bali (Base)", Money::from_major(400));
        ledger.add_cost("Bali (Daily x7)", Money::from_major(700));
        assert_eq!(ledger.total_cost(), Money::from_major(1_650));
        assert_eq!(ledger.remaining(), Money::from_major(-650));
        assert!(!ledger.within_budget());
    }

    #[test]
    fn test_snapshot_matches_state() {
        let mut ledger = CostLedger::new(Money::from_major(1_000)).unwrap();
        ledger.add_cost("Tokyo (Base)", Money::from_major(600));

        let snapshot = ledger.snapshot();
        assert_eq!(snapshot.budget, Money::from_major(1_000));
        assert_eq!(snapshot.total_cost, Money::from_major(600));
        assert_eq!(snapshot.remaining, Money::from_major(400));
        assert!(snapshot.within_budget);
        assert_eq!(snapshot.line_items.len(), 1);
        assert_eq!(snapshot.line_items[0].label, "Tokyo (Base)");
    }

    #[test]
    fn test_line_item_display() {
        let item = LineItem {
            label: "Bali (Daily x7)".to_string(),
            amount: Money::from_major(700),
        };
        assert_eq!(format!("{}", item), "Bali (Daily x7): $700.00");
    }
}
