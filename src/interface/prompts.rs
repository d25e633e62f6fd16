use dialoguer::{Confirm, Input, Select};

use crate::error::{Result, TrackError};
use crate::models::{CalculatorInputs, DietProfile};

/// Prompt for a non-negative quantity.
fn prompt_amount(prompt: &str, default: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    let value: f64 = input
        .parse()
        .map_err(|_| TrackError::InvalidInput("Invalid number".to_string()))?;

    if value < 0.0 {
        return Err(TrackError::InvalidInput(
            "Value must not be negative".to_string(),
        ));
    }

    Ok(value)
}

/// Prompt for a percentage.
fn prompt_rate(prompt: &str, default: f64) -> Result<f64> {
    let value = prompt_amount(prompt, default)?;

    if value > 100.0 {
        return Err(TrackError::InvalidInput(
            "Rate must be between 0 and 100".to_string(),
        ));
    }

    Ok(value)
}

/// Prompt for the diet profile across the five display labels.
pub fn prompt_diet_profile(default: DietProfile) -> Result<DietProfile> {
    let labels: Vec<&str> = DietProfile::ALL.iter().map(|p| p.label()).collect();
    let default_index = DietProfile::ALL
        .iter()
        .position(|p| *p == default)
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Diet profile")
        .items(&labels)
        .default(default_index)
        .interact()?;

    Ok(DietProfile::ALL[selection])
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Collect the eight lifestyle inputs in form order, seeded with typical
/// values. Rejects negative quantities and rates outside 0-100; everything
/// else flows to the engine untouched.
pub fn collect_inputs() -> Result<CalculatorInputs> {
    let seed = CalculatorInputs::default();

    let car_kilometres = prompt_amount("Car travel (km/year)", seed.car_kilometres)?;
    let air_travel_hours = prompt_amount("Air travel (hours/year)", seed.air_travel_hours)?;
    let public_transit_kilometres =
        prompt_amount("Public transit (km/year)", seed.public_transit_kilometres)?;
    let electricity_kwh = prompt_amount("Electricity usage (kWh/month)", seed.electricity_kwh)?;
    let diet_profile = prompt_diet_profile(seed.diet_profile)?;
    let waste_kg = prompt_amount("Waste generation (kg/month)", seed.waste_kg)?;
    let recycle_rate = prompt_rate("Recycling rate (%)", seed.recycle_rate)?;
    let compost_rate = prompt_rate("Composting rate (%)", seed.compost_rate)?;

    Ok(CalculatorInputs {
        car_kilometres,
        air_travel_hours,
        public_transit_kilometres,
        electricity_kwh,
        diet_profile,
        waste_kg,
        recycle_rate,
        compost_rate,
    })
}
