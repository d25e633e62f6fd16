use serde::{Deserialize, Serialize};

/// Dietary pattern used for the annual food-emissions lookup.
///
/// Serialized tokens (`vegan` .. `heavyMeat`) match the persisted state format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DietProfile {
    Vegan,
    Vegetarian,
    LightMeat,
    MediumMeat,
    HeavyMeat,
}

impl DietProfile {
    /// Every profile, ordered from lowest to highest typical emissions.
    pub const ALL: [DietProfile; 5] = [
        DietProfile::Vegan,
        DietProfile::Vegetarian,
        DietProfile::LightMeat,
        DietProfile::MediumMeat,
        DietProfile::HeavyMeat,
    ];

    /// Human-readable label for prompts and reports.
    pub fn label(&self) -> &'static str {
        match self {
            DietProfile::Vegan => "Vegan",
            DietProfile::Vegetarian => "Vegetarian",
            DietProfile::LightMeat => "Light Meat",
            DietProfile::MediumMeat => "Medium Meat",
            DietProfile::HeavyMeat => "Heavy Meat",
        }
    }

    /// Stable identifier, identical to the serialized token.
    pub fn key(&self) -> &'static str {
        match self {
            DietProfile::Vegan => "vegan",
            DietProfile::Vegetarian => "vegetarian",
            DietProfile::LightMeat => "lightMeat",
            DietProfile::MediumMeat => "mediumMeat",
            DietProfile::HeavyMeat => "heavyMeat",
        }
    }

    /// Whether the profile leans on meat enough to warrant diet advice.
    pub fn is_meat_forward(&self) -> bool {
        matches!(self, DietProfile::MediumMeat | DietProfile::HeavyMeat)
    }
}

/// Lifestyle figures supplied by the user, immutable per calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorInputs {
    /// Annual car travel, kilometres.
    pub car_kilometres: f64,

    /// Annual flight time, hours.
    pub air_travel_hours: f64,

    /// Annual public transit travel, kilometres.
    pub public_transit_kilometres: f64,

    /// Monthly electricity consumption, kilowatt hours.
    pub electricity_kwh: f64,

    pub diet_profile: DietProfile,

    /// Monthly waste generated, kilograms.
    pub waste_kg: f64,

    /// Share of waste recycled, percent (0-100).
    pub recycle_rate: f64,

    /// Share of waste composted, percent (0-100).
    pub compost_rate: f64,
}

impl CalculatorInputs {
    /// Combined recycling and composting share, percent.
    #[inline]
    pub fn diversion_rate(&self) -> f64 {
        self.recycle_rate + self.compost_rate
    }
}

impl Default for CalculatorInputs {
    /// Typical household profile, used to seed the input prompts.
    fn default() -> Self {
        CalculatorInputs {
            car_kilometres: 12_000.0,
            air_travel_hours: 18.0,
            public_transit_kilometres: 1_500.0,
            electricity_kwh: 240.0,
            diet_profile: DietProfile::MediumMeat,
            waste_kg: 35.0,
            recycle_rate: 45.0,
            compost_rate: 10.0,
        }
    }
}
