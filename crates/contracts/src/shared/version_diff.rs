//! Directional diff between two pricing snapshots.
//!
//! Used by the quote version-compare view to render up/down indicators.
//! Inputs are never mutated; the result is a plain list of field changes.

use serde::{Deserialize, Serialize};

/// Numeric fields of a quote revision tracked by the comparison view
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingSnapshot {
    #[serde(rename = "totalCost")]
    pub total_cost: f64,
    #[serde(rename = "suggestedPrice")]
    pub suggested_price: f64,
    #[serde(rename = "marginPercent")]
    pub margin_percent: f64,
}

/// Direction of a field change, classified from the sign of the delta
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeType {
    Increase,
    Decrease,
    Unchanged,
}

impl ChangeType {
    pub fn display_name(&self) -> &'static str {
        match self {
            ChangeType::Increase => "Increase",
            ChangeType::Decrease => "Decrease",
            ChangeType::Unchanged => "Unchanged",
        }
    }

    fn classify(delta: f64) -> Self {
        if delta > 0.0 {
            ChangeType::Increase
        } else if delta < 0.0 {
            ChangeType::Decrease
        } else {
            ChangeType::Unchanged
        }
    }
}

/// One compared field with its old/new values and classification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldChange {
    /// Display label of the field
    pub field: &'static str,
    #[serde(rename = "oldValue")]
    pub old_value: f64,
    #[serde(rename = "newValue")]
    pub new_value: f64,
    #[serde(rename = "changeType")]
    pub change_type: ChangeType,
    /// Percent change relative to the old value; `None` when the old
    /// value is zero (percent of nothing is undefined)
    #[serde(rename = "changePercent")]
    pub change_percent: Option<f64>,
}

impl FieldChange {
    fn compute(field: &'static str, old_value: f64, new_value: f64) -> Self {
        let delta = new_value - old_value;
        let change_percent = if old_value == 0.0 {
            None
        } else {
            Some(delta / old_value * 100.0)
        };
        Self {
            field,
            old_value,
            new_value,
            change_type: ChangeType::classify(delta),
            change_percent,
        }
    }

    pub fn delta(&self) -> f64 {
        self.new_value - self.old_value
    }
}

/// Compare two snapshots field by field, in display order
pub fn diff_snapshots(old: &PricingSnapshot, new: &PricingSnapshot) -> Vec<FieldChange> {
    vec![
        FieldChange::compute("Total Cost", old.total_cost, new.total_cost),
        FieldChange::compute("Suggested Price", old.suggested_price, new.suggested_price),
        FieldChange::compute("Margin %", old.margin_percent, new.margin_percent),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(cost: f64, price: f64, margin: f64) -> PricingSnapshot {
        PricingSnapshot {
            total_cost: cost,
            suggested_price: price,
            margin_percent: margin,
        }
    }

    #[test]
    fn test_increase_classification_and_percent() {
        let v1 = snap(100_000.0, 120_000.0, 16.7);
        let v2 = snap(120_000.0, 140_000.0, 14.3);
        let changes = diff_snapshots(&v1, &v2);

        let cost = &changes[0];
        assert_eq!(cost.field, "Total Cost");
        assert_eq!(cost.delta(), 20_000.0);
        assert_eq!(cost.change_type, ChangeType::Increase);
        assert_eq!(cost.change_percent, Some(20.0));
    }

    #[test]
    fn test_unchanged_field() {
        let v = snap(500.0, 650.0, 23.0);
        let changes = diff_snapshots(&v, &v);
        assert!(changes
            .iter()
            .all(|c| c.change_type == ChangeType::Unchanged));
        assert!(changes.iter().all(|c| c.change_percent == Some(0.0)));
    }

    #[test]
    fn test_diff_is_anti_symmetric() {
        let v1 = snap(100_000.0, 125_000.0, 20.0);
        let v2 = snap(90_000.0, 130_000.0, 30.8);
        let forward = diff_snapshots(&v1, &v2);
        let backward = diff_snapshots(&v2, &v1);

        for (f, b) in forward.iter().zip(backward.iter()) {
            assert_eq!(f.field, b.field);
            assert_eq!(f.delta(), -b.delta());
        }
    }

    #[test]
    fn test_zero_old_value_has_no_percent() {
        let v1 = snap(0.0, 0.0, 0.0);
        let v2 = snap(50_000.0, 60_000.0, 16.7);
        let changes = diff_snapshots(&v1, &v2);
        assert!(changes.iter().all(|c| c.change_percent.is_none()));
        assert!(changes
            .iter()
            .all(|c| c.change_type == ChangeType::Increase));
    }
}
