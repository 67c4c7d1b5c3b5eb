//! Vitalcheck: a vitals intake service
//!
//! Vitalcheck accepts a single measurement snapshot, classifies it into a
//! severity tier using fixed thresholds and keeps the most recent results
//! in a bounded, newest-first history.

pub mod api;
pub mod config;
pub mod error;
pub mod history;
pub mod triage;
pub mod vitals;

pub use error::VitalcheckError;
pub use history::{HistoryBuffer, IntakeService};
pub use triage::{classify, classify_vitals, CheckResult, Classification, Severity};
pub use vitals::{InputError, VitalsInput};
