// engine.rs

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::CalcError;
use crate::history::{History, HistoryEntry};
use crate::operation::Operation;

/// Evaluates operations and keeps the history consistent with them.
///
/// Each calculator owns its own history. A result is returned only after its
/// entry has been appended; a failed evaluation leaves the history untouched.
#[derive(Default, Debug)]
pub struct Calculator {
    history: History,
}

impl Calculator {
    pub fn new() -> Self {
        Self { history: History::new() }
    }

    pub fn perform(&mut self, operation: Operation) -> Result<f64, CalcError> {
        let result = operation.evaluate()?;
        self.history.append(HistoryEntry { operation, result });
        Ok(result)
    }

    pub fn history(&self) -> &[HistoryEntry] {
        self.history.all()
    }

    /// Drop the most recent entry. `None` means there was nothing to undo.
    pub fn undo(&mut self) -> Option<HistoryEntry> {
        self.history.undo()
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

/// A calculator that can be handed to several threads.
///
/// Every call takes the one lock for its whole duration, so evaluate-then-append
/// in `perform` is never interleaved with another caller.
#[derive(Clone, Default, Debug)]
pub struct SharedCalculator {
    inner: Arc<Mutex<Calculator>>,
}

impl SharedCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Calculator> {
        // Calculator keeps no invariant that a panicking holder could break halfway.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn perform(&self, operation: Operation) -> Result<f64, CalcError> {
        self.lock().perform(operation)
    }

    /// Snapshot of the history at the time of the call.
    pub fn history(&self) -> Vec<HistoryEntry> {
        self.lock().history().to_vec()
    }

    pub fn undo(&self) -> Option<HistoryEntry> {
        self.lock().undo()
    }

    pub fn clear_history(&self) {
        self.lock().clear_history();
    }
}
