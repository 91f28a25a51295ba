//! Tip-split calculator.
//!
//! Companion utility carried alongside the pipeline; pure arithmetic,
//! no state.

use anyhow::{ensure, Result};
use serde::Serialize;

/// A bill split across a group, tip included.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BillSplit {
    /// Total bill including tip.
    pub total: f64,
    /// Each person's share of the total.
    pub per_person: f64,
}

impl BillSplit {
    /// The per-person share rendered to two decimal places, as shown to
    /// the user.
    pub fn per_person_display(&self) -> String {
        format!("{:.2}", self.per_person)
    }
}

/// Split `bill` plus `tip_percent` percent across `people` payers.
pub fn split_bill(bill: f64, tip_percent: u32, people: u32) -> Result<BillSplit> {
    ensure!(bill >= 0.0, "bill amount cannot be negative");
    ensure!(people > 0, "at least one person must pay");

    let total = bill + bill * (tip_percent as f64 / 100.0);
    let per_person = total / people as f64;

    Ok(BillSplit { total, per_person })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_split_reference_scenario() {
        // 100.0 at 15% across 4 people.
        let split = split_bill(100.0, 15, 4).unwrap();
        assert!((split.total - 115.0).abs() < 1e-9);
        assert_eq!(split.per_person_display(), "28.75");
    }

    #[test]
    fn test_split_single_payer() {
        let split = split_bill(50.0, 10, 1).unwrap();
        assert!((split.total - 55.0).abs() < 1e-9);
        assert_eq!(split.per_person_display(), "55.00");
    }

    #[test]
    fn test_split_rounds_display_only() {
        // 10.00 at 0% across 3 people: the display rounds, the stored
        // value does not.
        let split = split_bill(10.0, 0, 3).unwrap();
        assert_eq!(split.per_person_display(), "3.33");
        assert!(split.per_person * 3.0 > 9.999);
    }

    #[test]
    fn test_split_rejects_zero_people() {
        assert!(split_bill(100.0, 15, 0).is_err());
    }

    #[test]
    fn test_split_rejects_negative_bill() {
        assert!(split_bill(-1.0, 15, 2).is_err());
    }
}
