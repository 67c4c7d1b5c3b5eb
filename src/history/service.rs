use std::sync::Arc;

use super::HistoryBuffer;
use crate::triage::CheckResult;
use crate::vitals::{InputError, VitalsInput};

/// Validates, classifies and records incoming checks.
///
/// Classification runs outside the history lock; the lock is held only for
/// the push itself.
#[derive(Debug, Clone)]
pub struct IntakeService {
    history: Arc<HistoryBuffer>,
}

impl IntakeService {
    pub fn new(history: Arc<HistoryBuffer>) -> Self {
        IntakeService { history }
    }

    /// Run a check on a raw record. Nothing is recorded if validation fails.
    pub fn check(&self, raw: &serde_json::Value) -> Result<CheckResult, InputError> {
        let input = VitalsInput::from_json(raw)?;
        Ok(self.record(input))
    }

    pub fn record(&self, input: VitalsInput) -> CheckResult {
        let result = CheckResult::evaluate(input);
        self.history.push(result.clone());
        result
    }

    pub fn history(&self) -> Vec<CheckResult> {
        self.history.snapshot()
    }

    pub fn capacity(&self) -> usize {
        self.history.capacity()
    }
}
