pub mod cli;
pub mod engine;
pub mod error;
pub mod interface;
pub mod models;
pub mod state;

pub use error::{Result, TrackError};
pub use models::{CalculationRecord, CalculatorInputs, DietProfile, EmissionBreakdown};
