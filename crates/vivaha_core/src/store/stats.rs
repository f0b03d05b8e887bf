//! Derived aggregates over the planner collections.
//!
//! Pure computations; nothing here reads or writes storage.

use crate::model::budget::BudgetItem;
use crate::model::room::{Room, RoomStatus};

/// Budget totals derived from the budget line items.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetSummary {
    /// Sum of allocations.
    pub total_budget: f64,
    /// Sum of actual spend.
    pub total_spent: f64,
    /// Allocation minus spend (negative when overspent).
    pub remaining: f64,
    /// `round(100 * spent / budget)`; 0 when the budget is empty.
    pub utilization_percent: u32,
}

impl BudgetSummary {
    pub fn compute(items: &[BudgetItem]) -> Self {
        let total_budget: f64 = items.iter().map(|item| item.value).sum();
        let total_spent: f64 = items.iter().map(|item| item.cost).sum();
        let utilization_percent = if total_budget > 0.0 {
            (100.0 * total_spent / total_budget).round() as u32
        } else {
            0
        };

        Self {
            total_budget,
            total_spent,
            remaining: total_budget - total_spent,
            utilization_percent,
        }
    }
}

/// Room occupancy counts for the lodging dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomOccupancy {
    pub total: usize,
    pub occupied: usize,
    pub available: usize,
}

impl RoomOccupancy {
    pub fn compute(rooms: &[Room]) -> Self {
        Self {
            total: rooms.len(),
            occupied: rooms
                .iter()
                .filter(|room| room.status == RoomStatus::Occupied)
                .count(),
            available: rooms
                .iter()
                .filter(|room| room.status == RoomStatus::Available)
                .count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BudgetSummary, RoomOccupancy};
    use crate::model::budget::BudgetItem;
    use crate::model::room::{Room, RoomStatus, RoomType};

    fn item(value: f64, cost: f64) -> BudgetItem {
        let mut item = BudgetItem::new("line", value, "#800000");
        item.cost = cost;
        item
    }

    #[test]
    fn budget_summary_totals_and_rounds_utilization() {
        let summary = BudgetSummary::compute(&[item(100.0, 50.0), item(200.0, 0.0)]);
        assert_eq!(summary.total_budget, 300.0);
        assert_eq!(summary.total_spent, 50.0);
        assert_eq!(summary.remaining, 250.0);
        // 50/300 = 16.67%, rounds up to 17.
        assert_eq!(summary.utilization_percent, 17);
    }

    #[test]
    fn budget_summary_empty_budget_has_zero_utilization() {
        let summary = BudgetSummary::compute(&[]);
        assert_eq!(summary.total_budget, 0.0);
        assert_eq!(summary.utilization_percent, 0);
    }

    #[test]
    fn room_occupancy_counts_by_status() {
        let mut occupied = Room::new("101", RoomType::Double, 2);
        occupied.status = RoomStatus::Occupied;
        let available = Room::new("102", RoomType::Single, 1);
        let mut maintenance = Room::new("103", RoomType::Suite, 4);
        maintenance.status = RoomStatus::Maintenance;

        let counts = RoomOccupancy::compute(&[occupied, available, maintenance]);
        assert_eq!(counts.total, 3);
        assert_eq!(counts.occupied, 1);
        assert_eq!(counts.available, 1);
    }
}
