//! Vital sign types and input validation
//!
//! This module contains the measurement snapshot accepted by the service and
//! the rules for turning a loosely typed JSON record into one.

pub mod validation;

use serde::{Deserialize, Serialize};

/// Wire names of the five vitals, in the order they are validated.
pub const FIELDS: [&str; 5] = ["heartRate", "systolic", "diastolic", "temperatureC", "spo2"];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("Missing field: {0}")]
    MissingField(&'static str),
    #[error("Invalid number for field: {0}")]
    InvalidNumber(&'static str),
}

impl InputError {
    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            InputError::MissingField(field) | InputError::InvalidNumber(field) => field,
        }
    }
}

/// One measurement snapshot. All values are finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VitalsInput {
    pub heart_rate: f64,     // beats per minute
    pub systolic: f64,       // mmHg
    pub diastolic: f64,      // mmHg
    pub temperature_c: f64,  // degrees Celsius
    pub spo2: f64,           // oxygen saturation, percent
}

impl VitalsInput {
    pub fn new(heart_rate: f64, systolic: f64, diastolic: f64, temperature_c: f64, spo2: f64) -> Self {
        VitalsInput {
            heart_rate,
            systolic,
            diastolic,
            temperature_c,
            spo2,
        }
    }

    /// Validate a raw JSON record. Anything other than an object is treated
    /// as an empty record.
    pub fn from_json(raw: &serde_json::Value) -> Result<Self, InputError> {
        validation::parse_record(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_serializes_with_wire_names() {
        let vitals = VitalsInput::new(72.0, 118.0, 76.0, 36.8, 98.0);
        let json = serde_json::to_value(vitals).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "heartRate": 72.0,
                "systolic": 118.0,
                "diastolic": 76.0,
                "temperatureC": 36.8,
                "spo2": 98.0
            })
        );
    }

    #[test]
    fn test_error_messages_name_the_field() {
        assert_eq!(InputError::MissingField("systolic").to_string(), "Missing field: systolic");
        assert_eq!(InputError::InvalidNumber("spo2").to_string(), "Invalid number for field: spo2");
        assert_eq!(InputError::InvalidNumber("spo2").field(), "spo2");
    }
}
