use crate::engine::constants::{
    HIGH_ENERGY_TONNES, HIGH_TRANSPORT_TONNES, LOW_RECYCLE_RATE, LOW_TRANSIT_SHARE,
    MAX_SUGGESTIONS,
};
use crate::models::{CalculatorInputs, EmissionBreakdown, Recommendation};

/// One advice rule: a predicate over the calculation and the suggestion it
/// unlocks.
struct AdviceRule {
    title: &'static str,
    description: &'static str,
    applies: fn(&CalculatorInputs, &EmissionBreakdown) -> bool,
}

/// Ordered rule list. The second and fourth entries are the else-branches of
/// their predecessors, encoded by negating the earlier predicate so every
/// rule stands alone.
const RULES: [AdviceRule; 6] = [
    AdviceRule {
        title: "Shift Commutes",
        description: "Combine trips, adopt public transit twice a week, and explore remote work days to cut vehicle kilometres.",
        applies: |_, breakdown| breakdown.transportation > HIGH_TRANSPORT_TONNES,
    },
    AdviceRule {
        title: "Increase Transit Share",
        description: "Blend cycling or metro for routes under 10 km to immediately cut commuting emissions by up to 25%.",
        applies: |inputs, breakdown| {
            !(breakdown.transportation > HIGH_TRANSPORT_TONNES)
                && inputs.public_transit_kilometres < inputs.car_kilometres * LOW_TRANSIT_SHARE
        },
    },
    AdviceRule {
        title: "Upgrade Home Efficiency",
        description: "Switch to 5-star appliances, seal air leaks, and explore rooftop solar to trim electricity load.",
        applies: |_, breakdown| breakdown.energy > HIGH_ENERGY_TONNES,
    },
    AdviceRule {
        title: "Automate Energy Monitoring",
        description: "Deploy smart plugs and weekly energy audits to keep your electricity footprint trending down.",
        applies: |_, breakdown| !(breakdown.energy > HIGH_ENERGY_TONNES),
    },
    AdviceRule {
        title: "Experiment with Low-Carbon Meals",
        description: "Swap two meat-heavy meals each week with plant-forward recipes; this saves ~0.5 t CO₂e annually.",
        applies: |inputs, _| inputs.diet_profile.is_meat_forward(),
    },
    AdviceRule {
        title: "Expand Recycling Streams",
        description: "Introduce community recycling drop-offs and audit quarterly to raise diversion rates beyond 70%.",
        applies: |inputs, _| inputs.recycle_rate < LOW_RECYCLE_RATE,
    },
];

/// Evaluate the rule list against a calculation, keeping at most
/// `MAX_SUGGESTIONS` matches in rule order. Pure and total.
pub fn build_recommendations(
    inputs: &CalculatorInputs,
    breakdown: &EmissionBreakdown,
) -> Vec<Recommendation> {
    RULES
        .iter()
        .filter(|rule| (rule.applies)(inputs, breakdown))
        .take(MAX_SUGGESTIONS)
        .map(|rule| Recommendation::new(rule.title, rule.description))
        .collect()
}
