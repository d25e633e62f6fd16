/// Car travel: 192 g CO2e per kilometre.
pub const CAR_TONNES_PER_KM: f64 = 0.000192;

/// Air travel: 90 kg CO2e per flight hour.
pub const AIR_TONNES_PER_HOUR: f64 = 0.09;

/// Public transit: 45 g CO2e per kilometre.
pub const TRANSIT_TONNES_PER_KM: f64 = 0.000045;

/// Grid electricity, per kWh of the monthly figure. The factor folds the
/// monthly-to-annual convention in; keep it as one number.
pub const ELECTRICITY_TONNES_PER_KWH: f64 = 0.00082;

/// Household waste: 520 g CO2e per kilogram of the monthly figure.
pub const WASTE_TONNES_PER_KG: f64 = 0.00052;

/// Ceiling on the waste discount from recycling plus composting.
pub const MAX_WASTE_DIVERSION: f64 = 0.85;

// ─────────────────────────────────────────────────────────────────────────────
// Diet profiles and benchmarks
// ─────────────────────────────────────────────────────────────────────────────

/// Annual diet emissions per profile, tonnes CO2e.
pub const VEGAN_DIET_TONNES: f64 = 1.5;
pub const VEGETARIAN_DIET_TONNES: f64 = 1.7;
pub const LIGHT_MEAT_DIET_TONNES: f64 = 1.9;
pub const MEDIUM_MEAT_DIET_TONNES: f64 = 2.5;
pub const HEAVY_MEAT_DIET_TONNES: f64 = 3.3;

/// Global average footprint used for benchmarking, tonnes CO2e per year.
pub const GLOBAL_AVERAGE_TONNES: f64 = 2.4;

/// Paris-aligned per-person target, tonnes CO2e per year.
pub const PARIS_TARGET_TONNES: f64 = 2.0;

/// Reference trajectory: starts here and descends toward the target.
pub const PARIS_PATH_START_TONNES: f64 = 4.5;

/// Reference trajectory: decline per stored calculation.
pub const PARIS_PATH_STEP_TONNES: f64 = 0.3;

// ─────────────────────────────────────────────────────────────────────────────
// Recommendation thresholds
// ─────────────────────────────────────────────────────────────────────────────

/// Transportation above this is flagged as the dominant lever.
pub const HIGH_TRANSPORT_TONNES: f64 = 3.0;

/// Transit below this fraction of car distance counts as underused.
pub const LOW_TRANSIT_SHARE: f64 = 0.2;

/// Energy above this suggests efficiency upgrades over monitoring.
pub const HIGH_ENERGY_TONNES: f64 = 2.5;

/// Recycling below this percentage triggers diversion advice.
pub const LOW_RECYCLE_RATE: f64 = 60.0;

/// Hard cap on suggestions per calculation.
pub const MAX_SUGGESTIONS: usize = 4;

// ─────────────────────────────────────────────────────────────────────────────
// Display thresholds
// ─────────────────────────────────────────────────────────────────────────────

/// Records required before trends are shown.
pub const MIN_TREND_RECORDS: usize = 2;

/// Entries in the post-calculation history preview.
pub const HISTORY_PREVIEW_LEN: usize = 5;
