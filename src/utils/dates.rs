//! Platform date helpers.
//!
//! Fineract returns dates as `[year, month, day]` arrays and expects command
//! bodies to carry a formatted string plus a matching `dateFormat`/`locale`
//! pair. These helpers convert between both and `chrono` dates.

use chrono::{Datelike, NaiveDate};

use crate::models::PlatformDate;

/// Format a date the way command payloads expect (`dd MMMM yyyy`, English
/// month names), e.g. `18 March 2024`.
pub fn format_command_date(date: NaiveDate) -> String {
    date.format("%-d %B %Y").to_string()
}

/// Convert a wire-format `[year, month, day]` array into a date.
pub fn from_platform_date(date: &PlatformDate) -> Option<NaiveDate> {
    match date.as_slice() {
        [year, month, day] => {
            NaiveDate::from_ymd_opt(*year, u32::try_from(*month).ok()?, u32::try_from(*day).ok()?)
        }
        _ => None,
    }
}

/// Convert a date into the wire-format array.
pub fn to_platform_date(date: NaiveDate) -> PlatformDate {
    vec![date.year(), date.month() as i32, date.day() as i32]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_date_matches_platform_format() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 18).unwrap();
        assert_eq!(format_command_date(date), "18 March 2024");
    }

    #[test]
    fn platform_date_round_trip() {
        let wire = vec![2024, 3, 18];
        let date = from_platform_date(&wire).unwrap();
        assert_eq!(to_platform_date(date), wire);
    }

    #[test]
    fn malformed_platform_date_is_none() {
        assert!(from_platform_date(&vec![2024, 3]).is_none());
        assert!(from_platform_date(&vec![2024, 13, 1]).is_none());
    }
}
