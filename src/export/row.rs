//! Flat export rows.

use crate::models::AttendanceRecord;

/// One spreadsheet row, in [`COLUMN_HEADERS`](crate::config::COLUMN_HEADERS) order.
///
/// Contact and address fields are already defaulted to `N/A`; counts are
/// always present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRow {
    pub date: String,
    pub spot_name: String,
    pub spot_code: String,
    pub mobile_number: String,
    pub village: String,
    pub union: String,
    pub upozila: String,
    pub district: String,
    pub female: u64,
    pub male: u64,
    pub child: u64,
}

impl ExportRow {
    /// Text cells of the first eight columns.
    pub fn text_cells(&self) -> [&str; 8] {
        [
            self.date.as_str(),
            self.spot_name.as_str(),
            self.spot_code.as_str(),
            self.mobile_number.as_str(),
            self.village.as_str(),
            self.union.as_str(),
            self.upozila.as_str(),
            self.district.as_str(),
        ]
    }

    /// Count cells of the last three columns.
    pub fn count_cells(&self) -> [u64; 3] {
        [self.female, self.male, self.child]
    }
}

impl From<&AttendanceRecord> for ExportRow {
    fn from(record: &AttendanceRecord) -> Self {
        Self {
            date: record.date.clone(),
            spot_name: record.spot_name.clone(),
            spot_code: record.spot_code.clone(),
            mobile_number: record.mobile_number().to_string(),
            village: record.village().to_string(),
            union: record.union().to_string(),
            upozila: record.upozila().to_string(),
            district: record.district().to_string(),
            female: record.female,
            male: record.male,
            child: record.child,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Address;

    #[test]
    fn test_export_row_defaults_missing_fields() {
        let record = AttendanceRecord {
            date: "2024-01-15".to_string(),
            spot_id: String::new(),
            spot_name: "Rampur School".to_string(),
            spot_code: "RS-01".to_string(),
            concern_mobile_number: Some(String::new()),
            address: Some(Address {
                district: Some("Bogura".to_string()),
                ..Default::default()
            }),
            female: 3,
            male: 2,
            child: 1,
            spot_details: None,
        };
        let row = ExportRow::from(&record);
        assert_eq!(
            row.text_cells(),
            ["2024-01-15", "Rampur School", "RS-01", "N/A", "N/A", "N/A", "N/A", "Bogura"]
        );
        assert_eq!(row.count_cells(), [3, 2, 1]);
    }
}
