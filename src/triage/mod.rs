//! Severity triage for vital sign snapshots
//!
//! Classification is a fold over independent category checks:
//! - each category contributes at most one finding and one severity
//! - the overall tier is the most severe of the category tiers
//! - findings keep the fixed category order

pub mod rules;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

use crate::vitals::VitalsInput;
pub use rules::{Assessment, Category};

/// Reported when no category produced a finding.
pub const NORMAL_FINDING: &str = "All vitals within normal demo ranges.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Ok = 0,
    Warn = 1,
    Critical = 2,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Ok => "OK",
            Severity::Warn => "WARN",
            Severity::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub severity: Severity,
    pub findings: Vec<String>,
}

pub fn classify(heart_rate: f64, systolic: f64, diastolic: f64, temperature_c: f64, spo2: f64) -> Classification {
    classify_vitals(&VitalsInput::new(heart_rate, systolic, diastolic, temperature_c, spo2))
}

pub fn classify_vitals(vitals: &VitalsInput) -> Classification {
    let (severity, mut findings) = Category::ALL.iter().map(|category| category.assess(vitals)).fold(
        (Severity::Ok, Vec::new()),
        |(severity, mut findings), assessment| {
            findings.extend(assessment.finding.map(str::to_string));
            (severity.max(assessment.severity), findings)
        },
    );

    if findings.is_empty() {
        findings.push(NORMAL_FINDING.to_string());
    }

    Classification { severity, findings }
}

/// A classified snapshot as recorded in history and returned to callers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResult {
    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp: DateTime<Utc>,
    pub input: VitalsInput,
    pub overall_status: Severity,
    pub notes: Vec<String>,
}

impl CheckResult {
    pub fn new(input: VitalsInput, classification: Classification, timestamp: DateTime<Utc>) -> Self {
        CheckResult {
            timestamp,
            input,
            overall_status: classification.severity,
            notes: classification.findings,
        }
    }

    /// Classify `input` now.
    pub fn evaluate(input: VitalsInput) -> Self {
        let classification = classify_vitals(&input);
        CheckResult::new(input, classification, Utc::now())
    }
}

fn serialize_timestamp<S: Serializer>(timestamp: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&timestamp.to_rfc3339_opts(SecondsFormat::Micros, false))
}
