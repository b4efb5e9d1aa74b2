//! Lenient parsing for letter timestamps
//!
//! Letters arrive with whatever date strings the presentation layer stored.
//! Parsing never fails loudly: a string that matches none of the accepted
//! forms yields `None`, which sorting treats as the oldest possible value and
//! date filters treat as "no usable date".

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime};

use crate::{CoreError, Result};

/// Parse a letter timestamp.
///
/// Accepts RFC 3339 (`2024-01-15T09:30:00Z`), a local date-time without an
/// offset (`2024-01-15T09:30:00`, assumed UTC) and the plain date forms
/// accepted by [`parse_date`] (midnight UTC).
pub fn parse_timestamp(raw: &str) -> Option<OffsetDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(ts) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(ts);
    }

    if let Ok(local) = PrimitiveDateTime::parse(
        raw,
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
    ) {
        return Some(local.assume_utc());
    }

    parse_date(raw).map(|date| date.midnight().assume_utc())
}

/// Parse a calendar date in `YYYY-MM-DD` or the display form `YYYY.MM.DD`.
pub fn parse_date(raw: &str) -> Option<Date> {
    let raw = raw.trim();
    Date::parse(raw, format_description!("[year]-[month]-[day]"))
        .or_else(|_| Date::parse(raw, format_description!("[year].[month].[day]")))
        .ok()
}

/// Strict variant of [`parse_date`] for user input such as filter bounds.
pub fn parse_filter_date(raw: &str) -> Result<Date> {
    parse_date(raw).ok_or_else(|| CoreError::InvalidDate(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, datetime};

    #[test]
    fn test_parse_rfc3339() {
        assert_eq!(
            parse_timestamp("2024-01-15T09:30:00+09:00"),
            Some(datetime!(2024-01-15 00:30:00 UTC))
        );
    }

    #[test]
    fn test_parse_local_datetime_assumes_utc() {
        assert_eq!(
            parse_timestamp("2024-01-15T09:30:00"),
            Some(datetime!(2024-01-15 09:30:00 UTC))
        );
    }

    #[test]
    fn test_parse_plain_dates() {
        assert_eq!(
            parse_timestamp("2024-01-15"),
            Some(datetime!(2024-01-15 00:00:00 UTC))
        );
        assert_eq!(parse_date("2024.01.15"), Some(date!(2024 - 01 - 15)));
        assert_eq!(parse_date(" 2024-01-15 "), Some(date!(2024 - 01 - 15)));
    }

    #[test]
    fn test_unparsable_dates() {
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_timestamp("yesterday"), None);
        assert_eq!(parse_timestamp("2024-13-45"), None);
        assert!(matches!(
            parse_filter_date("15/01/2024"),
            Err(CoreError::InvalidDate(_))
        ));
    }
}
