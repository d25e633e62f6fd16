use std::path::Path;

use crate::error::Result;
use crate::models::CalculationRecord;

/// Write the history to a CSV file, oldest first.
pub fn write_history_csv<P: AsRef<Path>>(path: P, history: &[CalculationRecord]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "id",
        "timestamp",
        "car_kilometres",
        "air_travel_hours",
        "public_transit_kilometres",
        "electricity_kwh",
        "diet_profile",
        "waste_kg",
        "recycle_rate",
        "compost_rate",
        "transportation_tonnes",
        "energy_tonnes",
        "diet_tonnes",
        "waste_tonnes",
        "total_tonnes",
        "comparison_to_average_pct",
    ])?;

    for record in history.iter().rev() {
        let inputs = &record.inputs;
        wtr.write_record([
            record.id.to_string(),
            record.timestamp.to_rfc3339(),
            inputs.car_kilometres.to_string(),
            inputs.air_travel_hours.to_string(),
            inputs.public_transit_kilometres.to_string(),
            inputs.electricity_kwh.to_string(),
            inputs.diet_profile.key().to_string(),
            inputs.waste_kg.to_string(),
            inputs.recycle_rate.to_string(),
            inputs.compost_rate.to_string(),
            format!("{:.6}", record.breakdown.transportation),
            format!("{:.6}", record.breakdown.energy),
            format!("{:.6}", record.breakdown.diet),
            format!("{:.6}", record.breakdown.waste),
            format!("{:.6}", record.total_tonnes),
            format!("{:.2}", record.comparison_to_average),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
