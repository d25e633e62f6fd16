use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::CalculationRecord;
use crate::state::persistence::{KeyValueStore, STATE_KEY};

/// The persisted shape: the most recent record plus the full newest-first log.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculatorState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest: Option<CalculationRecord>,

    #[serde(default)]
    pub history: Vec<CalculationRecord>,
}

/// Owns the working state and writes every mutation through the persistence
/// port. Append-only from the caller's side: no update, delete, or reorder.
pub struct HistoryStore<P: KeyValueStore> {
    state: CalculatorState,
    port: P,
}

impl<P: KeyValueStore> HistoryStore<P> {
    /// Hydrate from the persisted entry, or start empty when none exists.
    pub fn open(port: P) -> Result<Self> {
        let state = match port.load(STATE_KEY)? {
            Some(raw) => serde_json::from_str(&raw)?,
            None => CalculatorState::default(),
        };
        Ok(Self { state, port })
    }

    /// Record a calculation: set latest, prepend to history, flush.
    ///
    /// A failed flush surfaces as an error; the in-memory state keeps the
    /// record either way.
    pub fn add_calculation(&mut self, record: CalculationRecord) -> Result<()> {
        self.state.latest = Some(record.clone());
        self.state.history.insert(0, record);
        self.flush()
    }

    pub fn latest(&self) -> Option<&CalculationRecord> {
        self.state.latest.as_ref()
    }

    /// Newest-first log of every stored calculation.
    pub fn history(&self) -> &[CalculationRecord] {
        &self.state.history
    }

    pub fn len(&self) -> usize {
        self.state.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.history.is_empty()
    }

    fn flush(&mut self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.state)?;
        self.port.save(STATE_KEY, &json)
    }
}

/// Clear the persisted entry by saving the empty state through the port.
pub fn clear_state<P: KeyValueStore>(port: &mut P) -> Result<()> {
    let json = serde_json::to_string_pretty(&CalculatorState::default())?;
    port.save(STATE_KEY, &json)
}
