use std::str::FromStr;

use crate::consts::ISO_SEPARATOR;
use crate::types::{Day, Month, Year};
use crate::{InvalidDate, JalaliDate, ParseError, convert, parse_u8, parse_u16, prelude::*};

/// A date in the proleptic Gregorian calendar.
///
/// This is the machine-facing side of the crate: it renders and parses the
/// ISO-8601 `YYYY-MM-DD` form used as the storage representation, while
/// [`JalaliDate`] carries the user-facing `YYYY/MM/DD` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct GregorianDate {
    year: Year,
    month: Month,
    day: Day,
}

impl GregorianDate {
    /// Creates a new Gregorian date from numeric components.
    ///
    /// # Errors
    /// Returns `InvalidDate` if the year is 0 or > `MAX_YEAR`, the month is
    /// outside 1-12, or the day does not exist in that month and year
    /// (February 29 only exists in 4/100/400-rule leap years).
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, InvalidDate> {
        Ok(Self {
            year: Year::new(year)?,
            month: Month::new(month)?,
            day: Day::gregorian(day, year, month)?,
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

    /// Converts to the equivalent Jalali date.
    ///
    /// # Errors
    /// Returns `InvalidDate::OutOfRange` for dates with no Jalali
    /// representation: anything before Jalali 1/1/1 (622-03-21) or past the
    /// end of Jalali year `MAX_JALALI_YEAR`.
    pub fn to_jalali(&self) -> Result<JalaliDate, InvalidDate> {
        convert::gregorian_to_jalali(self.year(), self.month(), self.day())
            .map(|(jy, jm, jd)| JalaliDate::from_converted(jy, jm, jd))
            .ok_or(InvalidDate::OutOfRange(*self))
    }
}

impl FromStr for GregorianDate {
    type Err = ParseError;

    /// Parses the ISO-8601 `YYYY-MM-DD` storage form. Strict: the display
    /// separator of the Jalali side is not accepted here.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(ISO_SEPARATOR).map(str::trim).collect();
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

impl TryFrom<(u16, u8, u8)> for GregorianDate {
    type Error = InvalidDate;

    fn try_from(value: (u16, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2)
    }
}

impl From<JalaliDate> for GregorianDate {
    fn from(date: JalaliDate) -> Self {
        date.to_gregorian()
    }
}

impl TryFrom<GregorianDate> for JalaliDate {
    type Error = InvalidDate;

    fn try_from(date: GregorianDate) -> Result<Self, Self::Error> {
        date.to_jalali()
    }
}

impl serde::Serialize for GregorianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for GregorianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let date = GregorianDate::new(2024, 3, 20).unwrap();
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month(), 3);
        assert_eq!(date.day(), 20);
    }

    #[test]
    fn test_new_century_leap_rule() {
        // 2000 is a leap year (divisible by 400)
        assert!(GregorianDate::new(2000, 2, 29).is_ok());
        // 1900 is not (divisible by 100, not 400)
        let result = GregorianDate::new(1900, 2, 29);
        assert!(matches!(
            result,
            Err(InvalidDate::Day {
                year: 1900,
                month: 2,
                day: 29
            })
        ));
    }

    #[test]
    fn test_parse_iso() {
        let date = "2024-03-20".parse::<GregorianDate>().unwrap();
        assert_eq!(date, GregorianDate::new(2024, 3, 20).unwrap());
    }

    #[test]
    fn test_parse_rejects_display_separator() {
        assert!(matches!(
            "2024/03/20".parse::<GregorianDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_parse_failures() {
        assert!(matches!(
            "".parse::<GregorianDate>(),
            Err(ParseError::EmptyInput)
        ));
        assert!(matches!(
            "2024-03".parse::<GregorianDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2024-03-XX".parse::<GregorianDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2024-13-01".parse::<GregorianDate>(),
            Err(ParseError::InvalidDate(InvalidDate::Month(13)))
        ));
    }

    #[test]
    fn test_display_is_iso() {
        let date = GregorianDate::new(622, 3, 21).unwrap();
        assert_eq!(date.to_string(), "0622-03-21");
    }

    #[test]
    fn test_to_jalali_fixed_points() {
        let nowruz = GregorianDate::new(2024, 3, 20).unwrap();
        assert_eq!(
            nowruz.to_jalali().unwrap(),
            JalaliDate::new(1403, 1, 1).unwrap()
        );

        let revolution = GregorianDate::new(1979, 2, 11).unwrap();
        let jalali = revolution.to_jalali().unwrap();
        assert_eq!(jalali.year(), 1357);
        assert_eq!(jalali.month(), 11);
        assert_eq!(jalali.day(), 22);
    }

    #[test]
    fn test_to_jalali_out_of_range() {
        let date = GregorianDate::new(600, 1, 1).unwrap();
        assert!(matches!(
            date.to_jalali(),
            Err(InvalidDate::OutOfRange(d)) if d == date
        ));

        // The day before the Jalali epoch.
        let date = GregorianDate::new(622, 3, 20).unwrap();
        assert!(date.to_jalali().is_err());
        // The epoch itself.
        let date = GregorianDate::new(622, 3, 21).unwrap();
        assert_eq!(
            date.to_jalali().unwrap(),
            JalaliDate::new(1, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_leap_day_round_trip() {
        let date = GregorianDate::new(2000, 2, 29).unwrap();
        let jalali = date.to_jalali().unwrap();
        assert_eq!(jalali.to_gregorian(), date);
    }

    #[test]
    fn test_from_impls() {
        let jalali = JalaliDate::new(1403, 1, 1).unwrap();
        let gregorian: GregorianDate = jalali.into();
        assert_eq!(gregorian, GregorianDate::new(2024, 3, 20).unwrap());

        let back: JalaliDate = gregorian.try_into().unwrap();
        assert_eq!(back, jalali);
    }

    #[test]
    fn test_ordering() {
        let d1 = GregorianDate::new(2024, 12, 31).unwrap();
        let d2 = GregorianDate::new(2025, 1, 1).unwrap();
        assert!(d1 < d2);
    }

    #[test]
    fn test_serde_string_format() {
        let date = GregorianDate::new(2024, 3, 20).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#""2024-03-20""#);

        let parsed: GregorianDate = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);
    }

    #[test]
    fn test_serde_validation() {
        let result: Result<GregorianDate, _> = serde_json::from_str(r#""1900-02-29""#);
        assert!(result.is_err());

        let result: Result<GregorianDate, _> = serde_json::from_str(r#""2000-02-29""#);
        assert!(result.is_ok());
    }
}
