mod persistence;
mod store;

pub use persistence::{JsonFileStore, KeyValueStore, STATE_KEY};
pub use store::{clear_state, CalculatorState, HistoryStore};
