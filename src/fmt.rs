//! Persian display helpers layered on the conversion core.
//!
//! The plain `Display` impls keep Latin digits so their output stays
//! machine-parseable; everything here is for user-facing rendering.

use crate::consts::{JALALI_MONTH_NAMES, JALALI_WEEKDAY_NAMES, PERSIAN_DIGITS};
use crate::{JalaliDate, convert};

impl JalaliDate {
    /// Persian name of this date's month, Farvardin through Esfand.
    pub fn month_name(&self) -> &'static str {
        JALALI_MONTH_NAMES[usize::from(self.month()) - 1]
    }

    /// Persian weekday index: 0 = Shanbeh (Saturday) through 6 = Jom'eh
    /// (Friday).
    pub fn weekday(&self) -> u8 {
        convert::jalali_weekday(self.year(), self.month(), self.day())
    }

    /// Persian name of this date's weekday.
    pub fn weekday_name(&self) -> &'static str {
        JALALI_WEEKDAY_NAMES[usize::from(self.weekday())]
    }

    /// Renders as `{day} {month name} {year}`, e.g. `15 مرداد 1403`.
    pub fn format_with_month_name(&self) -> String {
        format!("{} {} {}", self.day(), self.month_name(), self.year())
    }

    /// The `YYYY/MM/DD` form with Extended Arabic-Indic digits, for display
    /// locales that expect Persian numerals.
    pub fn to_localized_string(&self) -> String {
        to_persian_digits(&self.to_string())
    }
}

/// Replaces ASCII digits with Extended Arabic-Indic digits, leaving every
/// other character untouched.
pub fn to_persian_digits(s: &str) -> String {
    s.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => PERSIAN_DIGITS[d as usize],
            None => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_names() {
        let first = JalaliDate::new(1403, 1, 1).unwrap();
        assert_eq!(first.month_name(), "فروردین");

        let mid = JalaliDate::new(1403, 5, 15).unwrap();
        assert_eq!(mid.month_name(), "مرداد");

        let last = JalaliDate::new(1403, 12, 30).unwrap();
        assert_eq!(last.month_name(), "اسفند");
    }

    #[test]
    fn test_weekday() {
        // Nowruz 1403 fell on Wednesday, March 20, 2024.
        let nowruz = JalaliDate::new(1403, 1, 1).unwrap();
        assert_eq!(nowruz.weekday(), 4);
        assert_eq!(nowruz.weekday_name(), "چهارشنبه");

        // 22 Bahman 1357 fell on a Sunday.
        let date = JalaliDate::new(1357, 11, 22).unwrap();
        assert_eq!(date.weekday(), 1);
        assert_eq!(date.weekday_name(), "یکشنبه");
    }

    #[test]
    fn test_format_with_month_name() {
        let date = JalaliDate::new(1403, 5, 15).unwrap();
        assert_eq!(date.format_with_month_name(), "15 مرداد 1403");

        // Day is unpadded in the named form.
        let date = JalaliDate::new(1403, 5, 3).unwrap();
        assert_eq!(date.format_with_month_name(), "3 مرداد 1403");
    }

    #[test]
    fn test_to_localized_string() {
        let date = JalaliDate::new(1403, 5, 15).unwrap();
        assert_eq!(date.to_localized_string(), "۱۴۰۳/۰۵/۱۵");
    }

    #[test]
    fn test_to_persian_digits() {
        assert_eq!(to_persian_digits("1403/05/15"), "۱۴۰۳/۰۵/۱۵");
        assert_eq!(to_persian_digits("0123456789"), "۰۱۲۳۴۵۶۷۸۹");
        // Non-digits, including already-Persian digits, pass through.
        assert_eq!(to_persian_digits("سال ۱۴۰۳"), "سال ۱۴۰۳");
        assert_eq!(to_persian_digits(""), "");
    }
}
