/// Maximum valid Gregorian year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid Jalali year (inclusive).
/// The last day of this year (9377/12/30) still falls inside Gregorian
/// year `MAX_YEAR`, so Jalali-to-Gregorian conversion never overflows.
pub const MAX_JALALI_YEAR: u16 = 9377;

/// Maximum valid month (December / Esfand)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for Mehr, the first 30-day Jalali month
pub const MEHR: u8 = 7;
/// Month number for Esfand, the final Jalali month
pub const ESFAND: u8 = 12;

/// Days in February for Gregorian leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Days in Esfand for Jalali leap years
pub const ESFAND_DAYS_LEAP: u8 = 30;

/// Maximum days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const GREGORIAN_DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_gregorian_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Maximum days in each Jalali month (index 0 is unused, months are 1-indexed)
/// Esfand shows 29 days (non-leap year default)
pub const JALALI_DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // Farvardin
    31, // Ordibehesht
    31, // Khordad
    31, // Tir
    31, // Mordad
    31, // Shahrivar
    30, // Mehr
    30, // Aban
    30, // Azar
    30, // Dey
    30, // Bahman
    29, // Esfand (non-leap, adjusted by is_jalali_leap_year check)
];

/// Gregorian leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Length of the Jalali leap cycle in years; each cycle holds 8 leap years
pub(crate) const JALALI_CYCLE: i32 = 33;
/// Year-number shift aligning Jalali years with the cycle anchor used by the
/// day-count conversion
pub(crate) const JALALI_EPOCH_SHIFT: i32 = 1595;

/// Jalali display separator (YYYY/MM/DD)
pub const DISPLAY_SEPARATOR: char = '/';
/// Gregorian storage separator (ISO 8601, YYYY-MM-DD)
pub const ISO_SEPARATOR: char = '-';

/// Persian month names, Farvardin through Esfand (index 0 = Farvardin)
pub const JALALI_MONTH_NAMES: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

/// Persian weekday names, Saturday-first (index 0 = Shanbeh)
pub const JALALI_WEEKDAY_NAMES: [&str; 7] = [
    "شنبه",
    "یکشنبه",
    "دوشنبه",
    "سه‌شنبه",
    "چهارشنبه",
    "پنج‌شنبه",
    "جمعه",
];

/// Extended Arabic-Indic digits used for localized display
pub const PERSIAN_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];
