//! Filter state for the attendance query.
//!
//! The filter state is a fixed set of named string values. An empty string
//! means the filter is unset; only non-empty values are sent to the API.
//! Values are not validated here: date ordering, phone number shape, and the
//! like are the server's business.

use std::fmt;

use clap::ValueEnum;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

use crate::error_handling::UnknownFilter;

/// Name of one filter, in the order the query parameters are emitted.
///
/// Parsed from and displayed as the camelCase name the API expects
/// (`startDate`, `concernMobileNumber`, ...).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[strum(serialize_all = "camelCase")]
pub enum FilterKey {
    /// Single specific date
    Date,
    /// Start of a date range
    StartDate,
    /// End of a date range
    EndDate,
    /// Spot code, chosen from the spot list
    SpotCode,
    /// Contact mobile number of the spot
    ConcernMobileNumber,
    /// Village of the spot address
    Village,
    /// Union of the spot address
    Union,
    /// Upozila of the spot address
    Upozila,
    /// District of the spot address
    District,
    /// Attendance type (female, male, child), empty for all types
    AttendanceType,
}

impl FilterKey {
    /// Whether the value comes from a fixed list of options rather than free text.
    pub fn is_dropdown(self) -> bool {
        matches!(self, FilterKey::SpotCode | FilterKey::AttendanceType)
    }
}

/// Options offered for the `attendanceType` filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display, EnumIter, EnumString, ValueEnum)]
#[strum(serialize_all = "lowercase")]
pub enum AttendanceType {
    /// Female attendance
    Female,
    /// Male attendance
    Male,
    /// Child attendance
    Child,
}

/// Current filter values.
///
/// `Default` is the cleared state: every filter empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    date: String,
    start_date: String,
    end_date: String,
    spot_code: String,
    concern_mobile_number: String,
    village: String,
    union: String,
    upozila: String,
    district: String,
    attendance_type: String,
}

impl FilterState {
    /// Current value of a filter (empty when unset).
    pub fn get(&self, key: FilterKey) -> &str {
        match key {
            FilterKey::Date => &self.date,
            FilterKey::StartDate => &self.start_date,
            FilterKey::EndDate => &self.end_date,
            FilterKey::SpotCode => &self.spot_code,
            FilterKey::ConcernMobileNumber => &self.concern_mobile_number,
            FilterKey::Village => &self.village,
            FilterKey::Union => &self.union,
            FilterKey::Upozila => &self.upozila,
            FilterKey::District => &self.district,
            FilterKey::AttendanceType => &self.attendance_type,
        }
    }

    fn slot_mut(&mut self, key: FilterKey) -> &mut String {
        match key {
            FilterKey::Date => &mut self.date,
            FilterKey::StartDate => &mut self.start_date,
            FilterKey::EndDate => &mut self.end_date,
            FilterKey::SpotCode => &mut self.spot_code,
            FilterKey::ConcernMobileNumber => &mut self.concern_mobile_number,
            FilterKey::Village => &mut self.village,
            FilterKey::Union => &mut self.union,
            FilterKey::Upozila => &mut self.upozila,
            FilterKey::District => &mut self.district,
            FilterKey::AttendanceType => &mut self.attendance_type,
        }
    }

    /// Text-field change, keyed by the field's name.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownFilter`] if `name` is not one of the filter names.
    pub fn set_text(&mut self, name: &str, value: impl Into<String>) -> Result<(), UnknownFilter> {
        let key = name
            .parse::<FilterKey>()
            .map_err(|_| UnknownFilter(name.to_string()))?;
        *self.slot_mut(key) = value.into();
        Ok(())
    }

    /// Dropdown change, keyed by filter.
    pub fn set_select(&mut self, key: FilterKey, value: impl Into<String>) {
        *self.slot_mut(key) = value.into();
    }

    /// Clears a single filter.
    pub fn unset(&mut self, key: FilterKey) {
        self.slot_mut(key).clear();
    }

    /// Resets every filter to empty.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether no filter is set.
    pub fn is_empty(&self) -> bool {
        self.active().next().is_none()
    }

    /// Non-empty filters, in query order.
    pub fn active(&self) -> impl Iterator<Item = (FilterKey, &str)> + '_ {
        FilterKey::iter()
            .map(move |key| (key, self.get(key)))
            .filter(|(_, value)| !value.is_empty())
    }

    /// Query parameters for the attendance request: only non-empty filters.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        self.active()
            .map(|(key, value)| (<&'static str>::from(key), value.to_string()))
            .collect()
    }
}

impl fmt::Display for FilterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "(no filters)");
        }
        let parts: Vec<String> = self
            .active()
            .map(|(key, value)| format!("{key}={value}"))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let filters = FilterState::default();
        assert!(filters.is_empty());
        assert!(filters.query_params().is_empty());
        for key in FilterKey::iter() {
            assert_eq!(filters.get(key), "");
        }
    }

    #[test]
    fn test_filter_key_names_round_trip() {
        let names: Vec<String> = FilterKey::iter().map(|k| k.to_string()).collect();
        assert_eq!(
            names,
            [
                "date",
                "startDate",
                "endDate",
                "spotCode",
                "concernMobileNumber",
                "village",
                "union",
                "upozila",
                "district",
                "attendanceType"
            ]
        );
        for key in FilterKey::iter() {
            assert_eq!(key.to_string().parse::<FilterKey>().ok(), Some(key));
            assert_eq!(key.as_ref(), <&'static str>::from(key));
        }
    }

    #[test]
    fn test_set_text_by_name() {
        let mut filters = FilterState::default();
        filters.set_text("upozila", "Sherpur").expect("known field");
        assert_eq!(filters.get(FilterKey::Upozila), "Sherpur");
    }

    #[test]
    fn test_set_text_unknown_name() {
        let mut filters = FilterState::default();
        let err = filters.set_text("spot", "X").unwrap_err();
        assert_eq!(err, UnknownFilter("spot".to_string()));
        assert!(filters.is_empty());
    }

    #[test]
    fn test_query_params_skip_empty_values() {
        let mut filters = FilterState::default();
        filters.set_select(FilterKey::District, "Bogura");
        filters.set_select(FilterKey::StartDate, "2024-01-01");
        filters.set_select(FilterKey::Village, "");
        assert_eq!(
            filters.query_params(),
            vec![
                ("startDate", "2024-01-01".to_string()),
                ("district", "Bogura".to_string()),
            ]
        );
    }

    #[test]
    fn test_no_mutual_exclusion_between_date_and_range() {
        let mut filters = FilterState::default();
        filters.set_select(FilterKey::Date, "2024-02-01");
        filters.set_select(FilterKey::StartDate, "2024-03-01");
        filters.set_select(FilterKey::EndDate, "2024-01-01");
        assert_eq!(filters.query_params().len(), 3);
    }

    #[test]
    fn test_reset_and_unset() {
        let mut filters = FilterState::default();
        filters.set_select(FilterKey::SpotCode, "SP-01");
        filters.set_select(FilterKey::AttendanceType, AttendanceType::Male.as_ref());
        filters.unset(FilterKey::SpotCode);
        assert_eq!(filters.get(FilterKey::SpotCode), "");
        assert_eq!(filters.get(FilterKey::AttendanceType), "male");
        filters.reset();
        assert_eq!(filters, FilterState::default());
    }

    #[test]
    fn test_display() {
        let mut filters = FilterState::default();
        assert_eq!(filters.to_string(), "(no filters)");
        filters.set_select(FilterKey::Union, "Kahaloo");
        filters.set_select(FilterKey::AttendanceType, "female");
        assert_eq!(filters.to_string(), "union=Kahaloo, attendanceType=female");
    }

    #[test]
    fn test_dropdown_keys() {
        let dropdowns: Vec<FilterKey> = FilterKey::iter().filter(|k| k.is_dropdown()).collect();
        assert_eq!(dropdowns, vec![FilterKey::SpotCode, FilterKey::AttendanceType]);
    }
}
