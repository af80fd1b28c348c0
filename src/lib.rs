mod consts;
mod convert;
mod fmt;
mod gregorian;
mod prelude;
mod types;

pub use consts::*;
pub use fmt::to_persian_digits;
pub use gregorian::GregorianDate;
pub use types::{
    Day, Month, Year, gregorian_days_in_month, is_gregorian_leap_year, is_jalali_leap_year,
    jalali_days_in_month,
};

use crate::prelude::*;
use std::str::FromStr;

/// A date in the Jalali (Persian solar Hijri) calendar.
///
/// Values are immutable once constructed and always name a real calendar
/// day: months 1-6 have 31 days, months 7-11 have 30, and Esfand has 29 or
/// 30 depending on the 33-year leap cycle. Renders as `YYYY/MM/DD` with
/// Latin digits; see [`JalaliDate::to_localized_string`] for the Persian
/// digit form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}/{:02}/{:02}", "year.get()", "month.get()", "day.get()")]
pub struct JalaliDate {
    year: Year,
    month: Month,
    day: Day,
}

/// A numeric date component outside the valid range of its calendar.
/// Never corrected or clamped; always surfaced to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum InvalidDate {
    #[display(fmt = "Invalid year: {}", "_0")]
    Year(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    Month(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    Day { year: u16, month: u8, day: u8 },
    #[display(fmt = "Gregorian date {} has no Jalali representation", "_0")]
    OutOfRange(GregorianDate),
}

impl std::error::Error for InvalidDate {}

/// Error type for parsing dates from strings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Input was empty or whitespace.
    #[error("Empty date string")]
    EmptyInput,

    /// Input did not decompose into three numeric components.
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    /// Components parsed but named no real calendar day.
    #[error(transparent)]
    InvalidDate(#[from] InvalidDate),
}

impl JalaliDate {
    /// Creates a new Jalali date from numeric components.
    ///
    /// # Errors
    /// Returns `InvalidDate` if the year is 0 or > `MAX_JALALI_YEAR`, the
    /// month is outside 1-12, or the day does not exist in that month and
    /// year (Esfand 30 only exists in leap years).
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, InvalidDate> {
        let year_value = Year::new(year)?;
        if year > MAX_JALALI_YEAR {
            return Err(InvalidDate::Year(year));
        }
        let month_value = Month::new(month)?;
        let day_value = Day::jalali(day, year, month)?;
        Ok(Self {
            year: year_value,
            month: month_value,
            day: day_value,
        })
    }

    /// Builds from conversion output, which is valid by construction.
    pub(crate) const fn from_converted(year: u16, month: u8, day: u8) -> Self {
        Self {
            year: Year::saturating(year),
            month: Month::saturating(month),
            day: Day::saturating(day),
        }
    }

    /// Returns the year component as u16
    pub fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the month component as u8
    pub fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day component as u8
    pub fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the Year type
    pub fn year_typed(&self) -> Year {
        self.year
    }

    /// Returns the Month type
    pub fn month_typed(&self) -> Month {
        self.month
    }

    /// Returns the Day type
    pub fn day_typed(&self) -> Day {
        self.day
    }

    /// Converts to the equivalent proleptic Gregorian date.
    ///
    /// Total over valid dates: every Jalali date in years
    /// `1..=MAX_JALALI_YEAR` lands inside Gregorian years `1..=MAX_YEAR`.
    pub fn to_gregorian(&self) -> GregorianDate {
        let (gy, gm, gd) = convert::jalali_to_gregorian(self.year(), self.month(), self.day());
        GregorianDate::from_converted(gy, gm, gd)
    }
}

/// Helper to parse u16 with better error messages
pub(crate) fn parse_u16(s: &str) -> Result<u16, ParseError> {
    s.parse::<u16>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

/// Helper to parse u8 with better error messages
pub(crate) fn parse_u8(s: &str) -> Result<u8, ParseError> {
    s.parse::<u8>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

impl FromStr for JalaliDate {
    type Err = ParseError;

    /// Parses `YYYY/MM/DD` (display form) or `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed
            .split([ISO_SEPARATOR, DISPLAY_SEPARATOR])
            .map(str::trim)
            .collect();
        if parts.len() != 3 {
            return Err(ParseError::InvalidFormat(format!(
                "Expected 3 date components, found {}: {trimmed}",
                parts.len()
            )));
        }

        let year = parse_u16(parts[0])?;
        let month = parse_u8(parts[1])?;
        let day = parse_u8(parts[2])?;

        Ok(Self::new(year, month, day)?)
    }
}

impl TryFrom<(u16, u8, u8)> for JalaliDate {
    type Error = InvalidDate;

    fn try_from(value: (u16, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2)
    }
}

impl serde::Serialize for JalaliDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for JalaliDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
