pub mod calculations;
pub mod constants;
pub mod progress;
pub mod recommendations;

pub use calculations::{compute_breakdown, derive_record, DietEmissions, EngineConfig};
pub use constants::*;
pub use progress::{build_series, summarize_progress, ProgressSummary, TrendPoint};
pub use recommendations::build_recommendations;
