use serde_json::{Map, Value};

use super::{InputError, VitalsInput, FIELDS};

pub fn parse_record(raw: &Value) -> Result<VitalsInput, InputError> {
    let empty = Map::new();
    let record = raw.as_object().unwrap_or(&empty);

    let mut values = [0.0; FIELDS.len()];
    for (slot, field) in values.iter_mut().zip(FIELDS) {
        *slot = parse_number(record, field)?;
    }

    let [heart_rate, systolic, diastolic, temperature_c, spo2] = values;
    Ok(VitalsInput::new(heart_rate, systolic, diastolic, temperature_c, spo2))
}

fn parse_number(record: &Map<String, Value>, field: &'static str) -> Result<f64, InputError> {
    let value = record.get(field).ok_or(InputError::MissingField(field))?;

    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    number
        .filter(|n| n.is_finite())
        .ok_or(InputError::InvalidNumber(field))
}
