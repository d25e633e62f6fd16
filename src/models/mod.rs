pub mod inputs;
pub mod record;
pub mod recommendation;

pub use inputs::{CalculatorInputs, DietProfile};
pub use record::{CalculationRecord, EmissionBreakdown};
pub use recommendation::Recommendation;
