use crate::InvalidDate;
use crate::consts::{
    CENTURY_CYCLE, ESFAND, ESFAND_DAYS_LEAP, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    GREGORIAN_DAYS_IN_MONTH, JALALI_CYCLE, JALALI_DAYS_IN_MONTH, JALALI_EPOCH_SHIFT,
    LEAP_YEAR_CYCLE, MAX_MONTH, MAX_YEAR,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;
use std::num::NonZeroU16;

/// A year value guaranteed to be in the range `1..=MAX_YEAR` (1..=9999)
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
///
/// This is the structural bound shared by both calendars; `JalaliDate`
/// additionally caps its year at `MAX_JALALI_YEAR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `InvalidDate::Year` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, InvalidDate> {
        let non_zero = NonZeroU16::new(value).ok_or(InvalidDate::Year(value))?;
        if value > MAX_YEAR {
            return Err(InvalidDate::Year(value));
        }
        Ok(Self(non_zero))
    }

    /// Clamps into the structural range. Conversion internals only; the
    /// conversion routines always produce in-range values.
    pub(crate) const fn saturating(value: u16) -> Self {
        let clamped = if value == 0 {
            1
        } else if value > MAX_YEAR {
            MAX_YEAR
        } else {
            value
        };
        match NonZeroU16::new(clamped) {
            Some(v) => Self(v),
            None => Self(NonZeroU16::MIN),
        }
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }
}

impl TryFrom<u16> for Year {
    type Error = InvalidDate;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `InvalidDate::Month` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, InvalidDate> {
        let non_zero = NonZeroU8::new(value).ok_or(InvalidDate::Month(value))?;
        if value > MAX_MONTH {
            return Err(InvalidDate::Month(value));
        }
        Ok(Self(non_zero))
    }

    /// Clamps into the structural range. Conversion internals only.
    pub(crate) const fn saturating(value: u8) -> Self {
        let clamped = if value == 0 {
            1
        } else if value > MAX_MONTH {
            MAX_MONTH
        } else {
            value
        };
        match NonZeroU8::new(clamped) {
            Some(v) => Self(v),
            None => Self(NonZeroU8::MIN),
        }
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Month {
    type Error = InvalidDate;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day-of-month value guaranteed to be valid for a given calendar, year,
/// and month. Uses `NonZeroU8` internally, so 0 is not a valid day.
///
/// There is no context-free constructor: a day count cannot be validated
/// without knowing which calendar's month it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating against Gregorian month lengths.
    ///
    /// # Errors
    /// Returns `InvalidDate::Day` if the value is 0 or invalid for the given
    /// Gregorian year and month.
    pub fn gregorian(value: u8, year: u16, month: u8) -> Result<Self, InvalidDate> {
        Self::checked(value, year, month, gregorian_days_in_month(year, month))
    }

    /// Creates a new Day, validating against Jalali month lengths.
    ///
    /// # Errors
    /// Returns `InvalidDate::Day` if the value is 0 or invalid for the given
    /// Jalali year and month.
    pub fn jalali(value: u8, year: u16, month: u8) -> Result<Self, InvalidDate> {
        Self::checked(value, year, month, jalali_days_in_month(year, month))
    }

    fn checked(value: u8, year: u16, month: u8, max_day: u8) -> Result<Self, InvalidDate> {
        let non_zero = NonZeroU8::new(value).ok_or(InvalidDate::Day {
            year,
            month,
            day: value,
        })?;

        if value > max_day {
            return Err(InvalidDate::Day {
                year,
                month,
                day: value,
            });
        }

        Ok(Self(non_zero))
    }

    /// Clamps into the structural range. Conversion internals only.
    pub(crate) const fn saturating(value: u8) -> Self {
        let clamped = if value == 0 {
            1
        } else if value > 31 {
            31
        } else {
            value
        };
        match NonZeroU8::new(clamped) {
            Some(v) => Self(v),
            None => Self(NonZeroU8::MIN),
        }
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// --- leap rules and month lengths ---
//
// The two calendars use unrelated leap rules. They are kept as separate
// routines on purpose: mixing them up shifts dates by one day near year
// boundaries.

/// Gregorian civil leap rule: divisible by 4, except centuries not
/// divisible by 400.
pub const fn is_gregorian_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Jalali 33-year arithmetic cycle: 8 leap years per cycle, at cycle
/// positions divisible by 4 except the final position (32).
pub const fn is_jalali_leap_year(year: u16) -> bool {
    let cycle_pos = (year as i32 + JALALI_EPOCH_SHIFT) % JALALI_CYCLE;
    cycle_pos % 4 == 0 && cycle_pos != 32
}

/// Number of days in a Gregorian month.
pub const fn gregorian_days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_gregorian_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        GREGORIAN_DAYS_IN_MONTH[month as usize]
    }
}

/// Number of days in a Jalali month.
pub const fn jalali_days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == ESFAND && is_jalali_leap_year(year) {
        ESFAND_DAYS_LEAP
    } else {
        JALALI_DAYS_IN_MONTH[month as usize]
    }
}
