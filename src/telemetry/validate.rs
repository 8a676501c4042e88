//! Record → VehicleReading. Rejects missing or mistyped fields before any scoring happens.

use super::VehicleReading;
use crate::error::ValidationError;
use serde_json::{Map, Value};

// Field keys as they appear in fleet records, with accepted long-form aliases.
const ID: (&str, &[&str]) = ("id", &["vehicle_id"]);
const OWNER: (&str, &[&str]) = ("owner", &["owner_name"]);
const TEMPERATURE: (&str, &[&str]) = ("temp", &["temperature", "engine_temp"]);
const VIBRATION: (&str, &[&str]) = ("vibration", &[]);
const LAST_SERVICE: (&str, &[&str]) = ("last_service", &["days_since_service"]);
const MODEL: (&str, &[&str]) = ("model", &[]);
const ODOMETER: (&str, &[&str]) = ("odometer", &["odometer_km"]);

fn kind_of(v: &Value) -> String {
    match v {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("boolean {b}"),
        Value::Number(n) => format!("number {n}"),
        Value::String(s) => format!("string {s:?}"),
        Value::Array(_) => "array".to_string(),
        Value::Object(_) => "object".to_string(),
    }
}

fn lookup<'a>(obj: &'a Map<String, Value>, key: (&'static str, &[&str])) -> Option<&'a Value> {
    obj.get(key.0)
        .or_else(|| key.1.iter().find_map(|alias| obj.get(*alias)))
        .filter(|v| !v.is_null())
}

fn required<'a>(
    obj: &'a Map<String, Value>,
    key: (&'static str, &[&str]),
) -> Result<&'a Value, ValidationError> {
    lookup(obj, key).ok_or(ValidationError::MissingField { field: key.0 })
}

fn text(obj: &Map<String, Value>, key: (&'static str, &[&str])) -> Result<String, ValidationError> {
    let v = required(obj, key)?;
    let s = v.as_str().ok_or_else(|| ValidationError::NotString {
        field: key.0,
        found: kind_of(v),
    })?;
    let s = s.trim();
    if s.is_empty() {
        return Err(ValidationError::Empty { field: key.0 });
    }
    Ok(s.to_string())
}

fn number(obj: &Map<String, Value>, key: (&'static str, &[&str])) -> Result<f64, ValidationError> {
    let v = required(obj, key)?;
    let n = v.as_f64().ok_or_else(|| ValidationError::NotNumeric {
        field: key.0,
        found: kind_of(v),
    })?;
    if !n.is_finite() {
        return Err(ValidationError::NotFinite { field: key.0, value: n });
    }
    Ok(n)
}

/// Integers may arrive as whole floats (e.g. `210.0`) from tabular sources.
fn whole_number(v: &Value) -> Option<i64> {
    v.as_i64().or_else(|| {
        v.as_f64()
            .filter(|f| f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64)
            .map(|f| f as i64)
    })
}

fn integer(obj: &Map<String, Value>, key: (&'static str, &[&str])) -> Result<i64, ValidationError> {
    let v = required(obj, key)?;
    if let Some(i) = whole_number(v) {
        return Ok(i);
    }
    match v.as_f64() {
        Some(_) => Err(ValidationError::NotInteger {
            field: key.0,
            found: kind_of(v),
        }),
        None => Err(ValidationError::NotNumeric {
            field: key.0,
            found: kind_of(v),
        }),
    }
}

/// Vehicle id of a raw record, resolved through the same keys `from_record` accepts.
pub fn record_id(record: &Value) -> Option<&str> {
    lookup(record.as_object()?, ID)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|id| !id.is_empty())
}

impl VehicleReading {
    /// Validate a loosely-typed record. Display fields are kept when well-typed, otherwise dropped.
    pub fn from_record(record: &Value) -> Result<Self, ValidationError> {
        let obj = record.as_object().ok_or_else(|| ValidationError::NotAnObject {
            found: kind_of(record),
        })?;

        Ok(VehicleReading {
            id: text(obj, ID)?,
            owner: text(obj, OWNER)?,
            temperature: number(obj, TEMPERATURE)?,
            vibration: number(obj, VIBRATION)?,
            days_since_service: integer(obj, LAST_SERVICE)?,
            model: lookup(obj, MODEL).and_then(Value::as_str).map(String::from),
            odometer_km: lookup(obj, ODOMETER).and_then(whole_number),
        })
    }
}

impl TryFrom<&Value> for VehicleReading {
    type Error = ValidationError;

    fn try_from(record: &Value) -> Result<Self, Self::Error> {
        VehicleReading::from_record(record)
    }
}

impl VehicleReading {
    /// Checks a reading built in code the same way `from_record` checks a record.
    /// Out-of-range but finite values (e.g. negative days) are accepted.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.trim().is_empty() {
            return Err(ValidationError::Empty { field: ID.0 });
        }
        if self.owner.trim().is_empty() {
            return Err(ValidationError::Empty { field: OWNER.0 });
        }
        for (field, value) in [
            (TEMPERATURE.0, self.temperature),
            (VIBRATION.0, self.vibration),
        ] {
            if !value.is_finite() {
                return Err(ValidationError::NotFinite { field, value });
            }
        }
        Ok(())
    }
}
