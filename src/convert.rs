//! Day-count conversion between the Gregorian and Jalali calendars.
//!
//! Both directions run over a shared elapsed-day line: encode the source
//! date to a day count using that calendar's own leap rule, then decompose
//! the count using the target calendar's rule. The Gregorian side uses the
//! civil 4/100/400 rule; the Jalali side uses the 33-year arithmetic cycle
//! (8 leap years per cycle). The two rules never mix within one step.

use crate::consts::{JALALI_CYCLE, JALALI_EPOCH_SHIFT, MAX_JALALI_YEAR, MEHR};
use crate::types::is_gregorian_leap_year;

/// Cumulative days before each Gregorian month in a non-leap year
/// (index 0 = January). The leap day is folded into the year term.
const GREGORIAN_ELAPSED_DAYS: [i32; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Elapsed-day anchor for the Gregorian encoding.
const GREGORIAN_DAY_EPOCH: i32 = 355_666;
/// Elapsed-day anchor for the Jalali encoding. Paired with
/// `GREGORIAN_DAY_EPOCH`: each anchor sits at its own cycle boundary, and
/// together they pin both calendars to the same day line.
const JALALI_DAY_EPOCH: i32 = -355_668;

/// Days in the 33-year Jalali cycle (33 * 365 + 8).
const JALALI_CYCLE_DAYS: i32 = 12_053;
/// Days in a 4-year leap sub-cycle (4 * 365 + 1), shared by both
/// decompositions.
const FOUR_YEAR_DAYS: i32 = 1461;
/// Days in the 400-year Gregorian cycle.
const GREGORIAN_CYCLE_DAYS: i32 = 146_097;
/// Days in a 100-year Gregorian sub-cycle.
const CENTURY_DAYS: i32 = 36_524;

/// Elapsed days on the shared day line for a Gregorian date.
///
/// `gy2` counts the current year's leap day from March onward, so the
/// 4/100/400 correction terms see the right year.
fn gregorian_day_count(gy: i32, gm: i32, gd: i32) -> i32 {
    let gy2 = if gm > 2 { gy + 1 } else { gy };
    GREGORIAN_DAY_EPOCH
        + 365 * gy
        + (gy2 + 3) / 4
        - (gy2 + 99) / 100
        + (gy2 + 399) / 400
        + gd
        + GREGORIAN_ELAPSED_DAYS[(gm - 1) as usize]
}

/// Elapsed days on the shared day line for a Jalali date.
pub(crate) fn jalali_day_count(jy: u16, jm: u8, jd: u8) -> i32 {
    let jy = i32::from(jy) + JALALI_EPOCH_SHIFT;
    let (jm, jd) = (i32::from(jm), i32::from(jd));
    let month_days = if jm < i32::from(MEHR) {
        (jm - 1) * 31
    } else {
        (jm - 7) * 30 + 186
    };
    JALALI_DAY_EPOCH
        + 365 * jy
        + (jy / JALALI_CYCLE) * 8
        + ((jy % JALALI_CYCLE) + 3) / 4
        + jd
        + month_days
}

/// Persian weekday index of a Jalali date: 0 = Saturday .. 6 = Friday.
pub(crate) fn jalali_weekday(jy: u16, jm: u8, jd: u8) -> u8 {
    (jalali_day_count(jy, jm, jd).rem_euclid(7)) as u8
}

/// Converts a Gregorian date to Jalali.
///
/// Returns `None` when the result has no Jalali representation: dates
/// before Jalali 1/1/1 (Gregorian 622-03-21) or past `MAX_JALALI_YEAR`.
pub(crate) fn gregorian_to_jalali(gy: u16, gm: u8, gd: u8) -> Option<(u16, u8, u8)> {
    let mut days = gregorian_day_count(i32::from(gy), i32::from(gm), i32::from(gd));

    let mut jy = -JALALI_EPOCH_SHIFT + JALALI_CYCLE * (days / JALALI_CYCLE_DAYS);
    days %= JALALI_CYCLE_DAYS;
    jy += 4 * (days / FOUR_YEAR_DAYS);
    days %= FOUR_YEAR_DAYS;
    if days > 365 {
        jy += (days - 1) / 365;
        days = (days - 1) % 365;
    }

    // days is now a 0-based day of year: six 31-day months, then 30-day
    // months up to Esfand.
    let (jm, jd) = if days < 186 {
        (1 + days / 31, 1 + days % 31)
    } else {
        (7 + (days - 186) / 30, 1 + (days - 186) % 30)
    };

    if jy < 1 || jy > i32::from(MAX_JALALI_YEAR) {
        return None;
    }
    Some((jy as u16, jm as u8, jd as u8))
}

/// Converts a Jalali date to Gregorian.
///
/// Total over valid input: every date in Jalali years `1..=MAX_JALALI_YEAR`
/// lands inside Gregorian years `1..=MAX_YEAR`.
pub(crate) fn jalali_to_gregorian(jy: u16, jm: u8, jd: u8) -> (u16, u8, u8) {
    let mut days = jalali_day_count(jy, jm, jd);

    let mut gy = 400 * (days / GREGORIAN_CYCLE_DAYS);
    days %= GREGORIAN_CYCLE_DAYS;
    if days > CENTURY_DAYS {
        days -= 1;
        gy += 100 * (days / CENTURY_DAYS);
        days %= CENTURY_DAYS;
        if days >= 365 {
            days += 1;
        }
    }
    gy += 4 * (days / FOUR_YEAR_DAYS);
    days %= FOUR_YEAR_DAYS;
    if days > 365 {
        gy += (days - 1) / 365;
        days = (days - 1) % 365;
    }

    let mut gd = days + 1;
    let february = if is_gregorian_leap_year(gy as u16) {
        29
    } else {
        28
    };
    let month_lengths = [31, february, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    let mut gm = 0usize;
    while gm < 12 && gd > month_lengths[gm] {
        gd -= month_lengths[gm];
        gm += 1;
    }
    (gy as u16, (gm + 1) as u8, gd as u8)
}
