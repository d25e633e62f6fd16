use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::Utc;

use crate::engine::constants::*;
use crate::models::{CalculationRecord, CalculatorInputs, DietProfile, EmissionBreakdown};

/// Annual diet emissions per profile, tonnes CO2e.
#[derive(Debug, Clone)]
pub struct DietEmissions {
    pub vegan: f64,
    pub vegetarian: f64,
    pub light_meat: f64,
    pub medium_meat: f64,
    pub heavy_meat: f64,
}

impl DietEmissions {
    /// Annual tonnes for a profile. Fixed lookup, no interpolation.
    pub fn tonnes_for(&self, profile: DietProfile) -> f64 {
        match profile {
            DietProfile::Vegan => self.vegan,
            DietProfile::Vegetarian => self.vegetarian,
            DietProfile::LightMeat => self.light_meat,
            DietProfile::MediumMeat => self.medium_meat,
            DietProfile::HeavyMeat => self.heavy_meat,
        }
    }
}

impl Default for DietEmissions {
    fn default() -> Self {
        Self {
            vegan: VEGAN_DIET_TONNES,
            vegetarian: VEGETARIAN_DIET_TONNES,
            light_meat: LIGHT_MEAT_DIET_TONNES,
            medium_meat: MEDIUM_MEAT_DIET_TONNES,
            heavy_meat: HEAVY_MEAT_DIET_TONNES,
        }
    }
}

/// Reference data the engine calculates against.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub diet_emissions: DietEmissions,
    pub global_average_tonnes: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            diet_emissions: DietEmissions::default(),
            global_average_tonnes: GLOBAL_AVERAGE_TONNES,
        }
    }
}

/// Calculate the per-category emissions breakdown.
///
/// Pure and total: inputs are not validated here, so out-of-range values
/// propagate arithmetically instead of erroring.
pub fn compute_breakdown(inputs: &CalculatorInputs, config: &EngineConfig) -> EmissionBreakdown {
    let transportation = inputs.car_kilometres * CAR_TONNES_PER_KM
        + inputs.air_travel_hours * AIR_TONNES_PER_HOUR
        + inputs.public_transit_kilometres * TRANSIT_TONNES_PER_KM;

    let energy = inputs.electricity_kwh * ELECTRICITY_TONNES_PER_KWH;
    let diet = config.diet_emissions.tonnes_for(inputs.diet_profile);

    // Both percentages together discount waste, never past the cap.
    let diversion = (inputs.diversion_rate() / 200.0).min(MAX_WASTE_DIVERSION);
    let waste = inputs.waste_kg * WASTE_TONNES_PER_KG * (1.0 - diversion);

    EmissionBreakdown {
        transportation,
        energy,
        diet,
        waste,
    }
}

/// Derive a full record from inputs: breakdown, total, benchmark delta, plus
/// a fresh id and timestamp as the only impurity.
pub fn derive_record(inputs: CalculatorInputs, config: &EngineConfig) -> CalculationRecord {
    let breakdown = compute_breakdown(&inputs, config);
    let total_tonnes = breakdown.total();
    let comparison_to_average =
        (total_tonnes - config.global_average_tonnes) / config.global_average_tonnes * 100.0;

    CalculationRecord {
        id: next_record_id(),
        timestamp: Utc::now(),
        inputs,
        breakdown,
        total_tonnes,
        comparison_to_average,
    }
}

static LAST_ID: AtomicU64 = AtomicU64::new(0);

/// Allocate a record id: wall-clock milliseconds, bumped past the previous
/// id so rapid successive calls stay strictly increasing.
fn next_record_id() -> u64 {
    let clock_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let mut prev = LAST_ID.load(Ordering::Relaxed);
    loop {
        let next = clock_ms.max(prev + 1);
        match LAST_ID.compare_exchange(prev, next, Ordering::Relaxed, Ordering::Relaxed) {
            Ok(_) => return next,
            Err(actual) => prev = actual,
        }
    }
}
