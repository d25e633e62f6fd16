use crate::engine::constants::PARIS_TARGET_TONNES;
use crate::engine::{ProgressSummary, TrendPoint};
use crate::models::{CalculationRecord, Recommendation};

/// Display the headline figures for a record.
pub fn display_record(record: &CalculationRecord, global_average: f64) {
    let comparison = record.total_tonnes - global_average;
    let direction = if comparison >= 0.0 { "above" } else { "below" };

    println!();
    println!("=== Latest Footprint ===");
    println!();
    println!("Total: {:.2} t CO₂e/year", record.total_tonnes);
    println!(
        "{:.2} t {} the global average of {:.1} t CO₂e/year ({:+.1}%)",
        comparison.abs(),
        direction,
        global_average,
        record.comparison_to_average
    );
    println!();
    println!(
        "Transport {:.2} t | Energy {:.2} t | Diet {:.2} t | Waste {:.2} t",
        record.breakdown.transportation,
        record.breakdown.energy,
        record.breakdown.diet,
        record.breakdown.waste
    );
    println!();
}

/// Display numbered reduction suggestions.
pub fn display_recommendations(items: &[Recommendation]) {
    println!("=== Personalised Recommendations ===");
    println!();

    if items.is_empty() {
        println!("Run a calculation to unlock targeted reduction strategies.");
        println!();
        return;
    }

    for (i, item) in items.iter().enumerate() {
        println!("{}. {}", i + 1, item.title);
        println!("   {}", item.description);
    }
    println!();
}

/// Display the stored history, newest first.
///
/// `limit` truncates the listing; `full` expands each entry with its inputs
/// and category breakdown.
pub fn display_history(history: &[CalculationRecord], limit: Option<usize>, full: bool) {
    let shown = limit.unwrap_or(history.len()).min(history.len());

    println!();
    println!("=== Calculation History ({} of {}) ===", shown, history.len());
    println!();

    for record in history.iter().take(shown) {
        println!(
            "{}  {:.2} t CO₂e",
            record.timestamp.format("%Y-%m-%d %H:%M"),
            record.total_tonnes
        );

        if full {
            let inputs = &record.inputs;
            println!(
                "    Car: {} km · Air travel: {} h · Transit: {} km",
                inputs.car_kilometres, inputs.air_travel_hours, inputs.public_transit_kilometres
            );
            println!("    Electricity: {} kWh/month", inputs.electricity_kwh);
            println!(
                "    Diet profile: {} · Waste: {} kg/month · Recycling {}% · Compost {}%",
                inputs.diet_profile.label(),
                inputs.waste_kg,
                inputs.recycle_rate,
                inputs.compost_rate
            );
            println!(
                "    Transport {:.2} t | Energy {:.2} t | Diet {:.2} t | Waste {:.2} t",
                record.breakdown.transportation,
                record.breakdown.energy,
                record.breakdown.diet,
                record.breakdown.waste
            );
            println!();
        }
    }
    println!();
}

/// Display trend statistics and the chronological series.
pub fn display_progress(summary: &ProgressSummary, series: &[TrendPoint]) {
    println!();
    println!("=== Progress Tracking ===");
    println!();
    println!(
        "Total change since first benchmark: {:+.1}%",
        summary.total_change_pct
    );
    println!("Current footprint: {:.2} t", summary.current_tonnes);
    println!(
        "Paris goal gap (against {:.1} t CO₂e target): {:+.1}%",
        PARIS_TARGET_TONNES, summary.paris_gap_pct
    );
    println!();

    println!(
        "{:<12} {:>7} {:>10} {:>8} {:>6} {:>7} {:>7} {:>7}",
        "Date", "Total", "Transport", "Energy", "Diet", "Waste", "Paris", "Avg"
    );

    for point in series {
        println!(
            "{:<12} {:>7.2} {:>10.2} {:>8.2} {:>6.2} {:>7.2} {:>7.2} {:>7.2}",
            point.label,
            point.total,
            point.transportation,
            point.energy,
            point.diet,
            point.waste,
            point.paris_path,
            point.global_average
        );
    }
    println!();
}
