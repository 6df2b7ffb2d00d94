use serde::{Deserialize, Serialize};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::Date;

use crate::{UtcDateTime, ValidationError};

/// `YYYY-MM-DD`, the only calendar date format accepted on the wire.
pub const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Serde adapter writing [`Date`] as `YYYY-MM-DD`.
pub(crate) mod calendar_date {
    use serde::de::Error as DeError;
    use serde::ser::Error as SerError;
    use serde::{Deserialize, Deserializer, Serializer};
    use time::Date;

    use super::DATE_FORMAT;

    pub fn serialize<S>(date: &Date, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let formatted = date.format(DATE_FORMAT).map_err(S::Error::custom)?;
        serializer.serialize_str(&formatted)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Date, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Date::parse(&value, DATE_FORMAT).map_err(D::Error::custom)
    }
}

/// Days covered by a historical lookup when the caller gives no dates.
pub const DEFAULT_HISTORY_DAYS: i64 = 180;

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_calendar_date(input: &str) -> Result<Date, ValidationError> {
    Date::parse(input.trim(), DATE_FORMAT).map_err(|_| ValidationError::InvalidDate {
        value: input.to_owned(),
    })
}

/// Half-open `[start, end)` time window handed to the quote provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: UtcDateTime,
    pub end: UtcDateTime,
}

impl DateRange {
    pub const fn new(start: UtcDateTime, end: UtcDateTime) -> Self {
        Self { start, end }
    }

    /// The `days` days ending at `now`.
    pub fn trailing_days(now: UtcDateTime, days: i64) -> Self {
        Self::new(now.saturating_sub_days(days), now)
    }

    /// Range between two calendar dates, each taken at midnight UTC.
    pub fn from_dates(start: Date, end: Date) -> Self {
        Self::new(
            UtcDateTime::start_of_day(start),
            UtcDateTime::start_of_day(end),
        )
    }

    /// Resolve optional query dates.
    ///
    /// Without either date the trailing default window is used. Once one date
    /// is given both are required, and a missing one is an invalid date.
    pub fn resolve(
        start: Option<&str>,
        end: Option<&str>,
        now: UtcDateTime,
    ) -> Result<Self, ValidationError> {
        match (start, end) {
            (None, None) => Ok(Self::trailing_days(now, DEFAULT_HISTORY_DAYS)),
            (start, end) => Ok(Self::from_dates(
                required_date(start)?,
                required_date(end)?,
            )),
        }
    }
}

fn required_date(value: Option<&str>) -> Result<Date, ValidationError> {
    let value = value.ok_or_else(|| ValidationError::InvalidDate {
        value: String::new(),
    })?;
    parse_calendar_date(value)
}
