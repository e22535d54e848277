//! Response envelope decoding for the attendance endpoint.
//!
//! The attendance endpoint wraps its rows twice: the body's `data` holds an
//! object whose own `data` is the row list. Servers that return the rows
//! directly under the outer `data` are accepted too. Any other shape at
//! either level (missing, null, a string, an object) means no rows; only a
//! row list whose entries do not decode is an error.

use serde::Deserialize;
use serde_json::Value;

use crate::models::AttendanceRecord;

#[derive(Debug, Deserialize)]
pub(crate) struct AttendanceEnvelope {
    #[serde(default)]
    data: Value,
}

impl AttendanceEnvelope {
    pub(crate) fn into_rows(self) -> Result<Vec<AttendanceRecord>, serde_json::Error> {
        let rows = match self.data {
            rows @ Value::Array(_) => rows,
            Value::Object(mut payload) => match payload.remove("data") {
                Some(rows @ Value::Array(_)) => rows,
                _ => return Ok(Vec::new()),
            },
            _ => return Ok(Vec::new()),
        };
        serde_json::from_value(rows)
    }
}
