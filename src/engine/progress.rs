use crate::engine::constants::{
    MIN_TREND_RECORDS, PARIS_PATH_START_TONNES, PARIS_PATH_STEP_TONNES, PARIS_TARGET_TONNES,
};
use crate::models::CalculationRecord;

/// One chronological point in the footprint trend.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    /// Calendar date of the calculation.
    pub label: String,
    pub total: f64,
    pub transportation: f64,
    pub energy: f64,
    pub diet: f64,
    pub waste: f64,
    /// Paris-aligned reference trajectory at this position.
    pub paris_path: f64,
    pub global_average: f64,
}

/// Headline trend statistics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressSummary {
    /// Change since the first benchmark, percent.
    pub total_change_pct: f64,
    /// Latest footprint, tonnes.
    pub current_tonnes: f64,
    /// Gap to the Paris target, percent.
    pub paris_gap_pct: f64,
}

/// Build the oldest-first trend series from the newest-first history.
///
/// The reference path starts at 4.5 t and falls 0.3 t per calculation,
/// floored at the 2.0 t target.
pub fn build_series(history: &[CalculationRecord], global_average: f64) -> Vec<TrendPoint> {
    history
        .iter()
        .rev()
        .enumerate()
        .map(|(index, record)| TrendPoint {
            label: record.timestamp.format("%Y-%m-%d").to_string(),
            total: record.total_tonnes,
            transportation: record.breakdown.transportation,
            energy: record.breakdown.energy,
            diet: record.breakdown.diet,
            waste: record.breakdown.waste,
            paris_path: (PARIS_PATH_START_TONNES - index as f64 * PARIS_PATH_STEP_TONNES)
                .max(PARIS_TARGET_TONNES),
            global_average,
        })
        .collect()
}

/// Summarize the change since the first benchmark.
///
/// Returns `None` until at least two calculations exist.
pub fn summarize_progress(history: &[CalculationRecord]) -> Option<ProgressSummary> {
    if history.len() < MIN_TREND_RECORDS {
        return None;
    }

    let first = history.last()?;
    let latest = history.first()?;

    let total_change_pct =
        (latest.total_tonnes - first.total_tonnes) / first.total_tonnes * 100.0;
    let paris_gap_pct = (latest.total_tonnes - PARIS_TARGET_TONNES) / PARIS_TARGET_TONNES * 100.0;

    Some(ProgressSummary {
        total_change_pct,
        current_tonnes: latest.total_tonnes,
        paris_gap_pct,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CalculatorInputs, EmissionBreakdown};
    use chrono::{TimeZone, Utc};

    /// Newest-first history where entry `i` was created `len - i` days ago.
    fn sample_history(totals: &[f64]) -> Vec<CalculationRecord> {
        totals
            .iter()
            .enumerate()
            .map(|(i, &total)| CalculationRecord {
                id: (totals.len() - i) as u64,
                timestamp: Utc
                    .with_ymd_and_hms(2026, 3, 1 + (totals.len() - 1 - i) as u32, 9, 0, 0)
                    .unwrap(),
                inputs: CalculatorInputs::default(),
                breakdown: EmissionBreakdown {
                    transportation: total / 2.0,
                    energy: total / 4.0,
                    diet: total / 8.0,
                    waste: total / 8.0,
                },
                total_tonnes: total,
                comparison_to_average: 0.0,
            })
            .collect()
    }

    #[test]
    fn test_summary_requires_two_records() {
        assert!(summarize_progress(&[]).is_none());
        assert!(summarize_progress(&sample_history(&[4.0])).is_none());
        assert!(summarize_progress(&sample_history(&[4.0, 5.0])).is_some());
    }

    #[test]
    fn test_summary_math() {
        // Newest first: latest 4.0 t, first benchmark 5.0 t.
        let history = sample_history(&[4.0, 5.0]);
        let summary = summarize_progress(&history).unwrap();

        assert!((summary.total_change_pct - (-20.0)).abs() < 1e-9);
        assert!((summary.current_tonnes - 4.0).abs() < 1e-9);
        assert!((summary.paris_gap_pct - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_series_is_chronological() {
        let history = sample_history(&[4.0, 4.5, 5.0]);
        let series = build_series(&history, 2.4);

        assert_eq!(series.len(), 3);
        assert!((series[0].total - 5.0).abs() < 1e-9);
        assert!((series[2].total - 4.0).abs() < 1e-9);
        assert!(series[0].label < series[2].label);
    }

    #[test]
    fn test_paris_path_descends_to_floor() {
        let totals: Vec<f64> = (0..12).map(|_| 4.0).collect();
        let history = sample_history(&totals);
        let series = build_series(&history, 2.4);

        assert!((series[0].paris_path - 4.5).abs() < 1e-9);
        assert!((series[1].paris_path - 4.2).abs() < 1e-9);
        assert!((series[8].paris_path - 2.1).abs() < 1e-9);
        assert!((series[9].paris_path - 2.0).abs() < 1e-9);
        assert!((series[11].paris_path - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_series_carries_global_average() {
        let history = sample_history(&[4.0, 5.0]);
        let series = build_series(&history, 2.4);
        assert!(series.iter().all(|p| (p.global_average - 2.4).abs() < 1e-9));
    }
}
