//! Wire models for the attendance API and the fetch outcome.

use serde::{Deserialize, Serialize};

use crate::config::{FAILURE_MESSAGE, NOT_AVAILABLE, SUCCESS_MESSAGE};

/// Returns the value, or `"N/A"` when it is missing or empty.
pub fn or_not_available(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => NOT_AVAILABLE,
    }
}

/// Postal address of a spot. Every part is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default)]
    pub village: Option<String>,
    #[serde(default)]
    pub union: Option<String>,
    #[serde(default)]
    pub upozila: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_location: Option<String>,
}

/// A physical attendance-collection location, as listed by the spot endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotOption {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub spot_name: String,
    pub spot_code: String,
    #[serde(default)]
    pub concern_mobile_number: Option<String>,
    #[serde(default)]
    pub total_employees: Option<u64>,
    #[serde(default)]
    pub address: Option<Address>,
}

impl SpotOption {
    /// Label shown in the spot selection list: `CODE-Name`.
    pub fn label(&self) -> String {
        format!("{}-{}", self.spot_code, self.spot_name)
    }
}

/// Envelope returned by `GET /api/v1/spot`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotListResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub status_code: u16,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Vec<SpotOption>,
}

/// One attendance summary row: counts for a spot on a date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub date: String,
    #[serde(default)]
    pub spot_id: String,
    pub spot_name: String,
    pub spot_code: String,
    #[serde(default)]
    pub concern_mobile_number: Option<String>,
    #[serde(default)]
    pub address: Option<Address>,
    pub female: u64,
    pub male: u64,
    pub child: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spot_details: Option<SpotOption>,
}

impl AttendanceRecord {
    fn address_part(&self, part: impl Fn(&Address) -> Option<&String>) -> &str {
        or_not_available(self.address.as_ref().and_then(part).map(String::as_str))
    }

    /// Contact number, or `"N/A"`.
    pub fn mobile_number(&self) -> &str {
        or_not_available(self.concern_mobile_number.as_deref())
    }

    pub fn village(&self) -> &str {
        self.address_part(|a| a.village.as_ref())
    }

    pub fn union(&self) -> &str {
        self.address_part(|a| a.union.as_ref())
    }

    pub fn upozila(&self) -> &str {
        self.address_part(|a| a.upozila.as_ref())
    }

    pub fn district(&self) -> &str {
        self.address_part(|a| a.district.as_ref())
    }
}

/// Outcome of one attendance query round trip.
///
/// A failed fetch never carries rows. Each result replaces the previous one
/// wholesale.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchResult {
    pub success: bool,
    pub message: String,
    pub rows: Vec<AttendanceRecord>,
}

impl FetchResult {
    /// Successful fetch carrying `rows`.
    pub fn success(rows: Vec<AttendanceRecord>) -> Self {
        Self {
            success: true,
            message: SUCCESS_MESSAGE.to_string(),
            rows,
        }
    }

    /// Failed fetch. All failures look the same.
    pub fn failure() -> Self {
        Self {
            success: false,
            message: FAILURE_MESSAGE.to_string(),
            rows: Vec::new(),
        }
    }
}
