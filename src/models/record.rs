use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::inputs::CalculatorInputs;

/// Per-category annual emissions, tonnes CO2e.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmissionBreakdown {
    pub transportation: f64,
    pub energy: f64,
    pub diet: f64,
    pub waste: f64,
}

impl EmissionBreakdown {
    /// Sum of all four categories.
    #[inline]
    pub fn total(&self) -> f64 {
        self.transportation + self.energy + self.diet + self.waste
    }
}

/// A completed calculation, immutable once created.
///
/// Field names serialize in the persisted camelCase format
/// (`totalTonnes`, `comparisonToAverage`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRecord {
    /// Unique id, strictly increasing in creation order.
    pub id: u64,

    /// Creation instant, RFC 3339 on the wire.
    pub timestamp: DateTime<Utc>,

    /// The inputs the calculation ran on.
    pub inputs: CalculatorInputs,

    pub breakdown: EmissionBreakdown,

    /// Sum of the breakdown categories.
    pub total_tonnes: f64,

    /// Percentage deviation from the configured global average.
    pub comparison_to_average: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_breakdown() -> EmissionBreakdown {
        EmissionBreakdown {
            transportation: 3.9915,
            energy: 0.1968,
            diet: 2.5,
            waste: 0.013195,
        }
    }

    #[test]
    fn test_total_sums_components() {
        let breakdown = sample_breakdown();
        let expected = 3.9915 + 0.1968 + 2.5 + 0.013195;
        assert!((breakdown.total() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_record_uses_external_field_names() {
        let breakdown = sample_breakdown();
        let record = CalculationRecord {
            id: 1,
            timestamp: Utc::now(),
            inputs: CalculatorInputs::default(),
            breakdown,
            total_tonnes: breakdown.total(),
            comparison_to_average: 0.0,
        };

        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("totalTonnes").is_some());
        assert!(value.get("comparisonToAverage").is_some());
        assert!(value["inputs"].get("carKilometres").is_some());
        assert!(value["breakdown"].get("transportation").is_some());
    }

    #[test]
    fn test_record_round_trips_through_json() {
        let breakdown = sample_breakdown();
        let record = CalculationRecord {
            id: 42,
            timestamp: Utc::now(),
            inputs: CalculatorInputs::default(),
            breakdown,
            total_tonnes: breakdown.total(),
            comparison_to_average: 12.5,
        };

        let json = serde_json::to_string(&record).unwrap();
        let reloaded: CalculationRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, reloaded);
    }
}
