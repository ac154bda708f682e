//! Nanosecond-precision SQL timestamps.
//!
//! A [`Timestamp`] keeps whole seconds since the Unix epoch apart from a
//! nanoseconds-of-second component. The split matters for the binary codec:
//! the wire carries an epoch-millisecond value plus the full nanosecond
//! fraction, and the fraction wins on decode, so sub-millisecond digits
//! survive a round trip bit for bit.
//!
//! Seconds are floor-divided, which keeps the nanosecond component
//! non-negative for pre-epoch instants: one millisecond before the epoch is
//! `secs = -1, nanos = 999_000_000`.
//!
//! Rendering follows the `yyyy-MM-dd HH:mm:ss.f` literal layout: fraction
//! digits come from the nanosecond component with trailing zeros trimmed,
//! never fewer than one digit. `2020-04-03 17:30:00.0` is a whole second;
//! `2020-04-03 17:30:00.000000001` is one nanosecond past it. Parsing the
//! layout back lives in [`crate::parsing`].

use std::fmt;

pub(crate) const NANOS_PER_SEC: u32 = 1_000_000_000;
pub(crate) const NANOS_PER_MILLI: u32 = 1_000_000;
const MILLIS_PER_SEC: i64 = 1_000;
const SECS_PER_DAY: i64 = 86_400;

/// An absolute instant: seconds since 1970-01-01 00:00:00 plus nanoseconds
/// within that second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Timestamp {
    secs: i64,
    nanos: u32,
}

impl Timestamp {
    /// Builds a timestamp from seconds and a nanosecond fraction.
    ///
    /// Returns `None` when `nanos` reaches one billion.
    pub fn from_parts(secs: i64, nanos: u32) -> Option<Self> {
        if nanos < NANOS_PER_SEC {
            Some(Self { secs, nanos })
        } else {
            None
        }
    }

    /// Builds a timestamp from a (possibly negative) epoch-millisecond
    /// value, millisecond precision.
    pub fn from_millis(millis: i64) -> Self {
        Self {
            secs: millis.div_euclid(MILLIS_PER_SEC),
            nanos: millis.rem_euclid(MILLIS_PER_SEC) as u32 * NANOS_PER_MILLI,
        }
    }

    /// Builds a timestamp from civil date and time components.
    ///
    /// Components must already be range-checked (`month` 1-12, `day` valid
    /// for the month, `hour` < 24, `minute`/`second` < 60,
    /// `nanos` < 1_000_000_000); [`crate::parsing::parse_timestamp`] is the
    /// validating entry point. Returns `None` when the instant falls outside
    /// what epoch seconds in an `i64` can hold.
    pub(crate) fn from_civil(
        year: i64,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        nanos: u32,
    ) -> Option<Self> {
        if !(-YEAR_GUARD..=YEAR_GUARD).contains(&year) {
            return None;
        }
        // The day count times 86_400 alone can leave i64 for instants that
        // the final sum brings back in, so the sum happens in i128.
        let secs = i128::from(days_from_civil(year, month, day)) * i128::from(SECS_PER_DAY)
            + i128::from(hour * 3_600 + minute * 60 + second);
        let secs = i64::try_from(secs).ok()?;
        Some(Self { secs, nanos })
    }

    /// Whole seconds since the epoch, floor-divided.
    pub fn secs(&self) -> i64 {
        self.secs
    }

    /// Nanoseconds within the current second, `0..1_000_000_000`.
    pub fn subsec_nanos(&self) -> u32 {
        self.nanos
    }

    /// Epoch milliseconds with the fraction floored to the millisecond,
    /// the value the binary codec transmits.
    pub fn millis(&self) -> i64 {
        self.secs * MILLIS_PER_SEC + (self.nanos / NANOS_PER_MILLI) as i64
    }

    fn to_civil(self) -> (i64, u32, u32, u32, u32, u32) {
        let days = self.secs.div_euclid(SECS_PER_DAY);
        let rem = self.secs.rem_euclid(SECS_PER_DAY);
        let (year, month, day) = civil_from_days(days);
        let hour = (rem / 3_600) as u32;
        let minute = (rem % 3_600 / 60) as u32;
        let second = (rem % 60) as u32;
        (year, month, day, hour, minute, second)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (year, month, day, hour, minute, second) = self.to_civil();
        let mut frac = format!("{:09}", self.nanos);
        while frac.len() > 1 && frac.ends_with('0') {
            frac.pop();
        }
        write!(
            f,
            "{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}.{frac}"
        )
    }
}

/// Widest civil year [`Timestamp::from_civil`] will even attempt. Epoch
/// seconds in an `i64` run out near year ±2.9e11; the guard keeps the day
/// arithmetic below from wrapping before the checked conversion to seconds
/// can report the overflow.
const YEAR_GUARD: i64 = 300_000_000_000;

const DAYS_PER_ERA: i64 = 146_097;
const EPOCH_FROM_ERA_START: i64 = 719_468;

pub(crate) fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

pub(crate) fn days_in_month(year: i64, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

// Both directions work in whole 400-year eras, the period after which the
// Gregorian calendar repeats, so the conversion costs the same for year
// 2016 and year 2e11. Days within an era are counted from March 1st, which
// pushes the leap day to the end of the era year and makes the month
// day-counts a closed formula.

fn days_from_civil(year: i64, month: u32, day: u32) -> i64 {
    let year = if month <= 2 { year - 1 } else { year };
    let era = year.div_euclid(400);
    let year_of_era = year - era * 400;
    let shifted_month = i64::from((month + 9) % 12);
    let day_of_year = (153 * shifted_month + 2) / 5 + i64::from(day) - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * DAYS_PER_ERA + day_of_era - EPOCH_FROM_ERA_START
}

fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let days = days + EPOCH_FROM_ERA_START;
    let era = days.div_euclid(DAYS_PER_ERA);
    let day_of_era = days - era * DAYS_PER_ERA;
    let year_of_era =
        (day_of_era - day_of_era / 1_460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let shifted_month = (5 * day_of_year + 2) / 153;
    let day = (day_of_year - (153 * shifted_month + 2) / 5 + 1) as u32;
    let month = if shifted_month < 10 {
        shifted_month + 3
    } else {
        shifted_month - 9
    } as u32;
    let year = year_of_era + era * 400 + i64::from(month <= 2);
    (year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_parts_rejects_overflowing_nanos() {
        assert!(Timestamp::from_parts(0, 999_999_999).is_some());
        assert!(Timestamp::from_parts(0, 1_000_000_000).is_none());
    }

    #[test]
    fn from_millis_splits_on_second_boundaries() {
        let ts = Timestamp::from_millis(1_500);
        assert_eq!(ts.secs(), 1);
        assert_eq!(ts.subsec_nanos(), 500_000_000);

        let ts = Timestamp::from_millis(2_000);
        assert_eq!(ts.secs(), 2);
        assert_eq!(ts.subsec_nanos(), 0);
    }

    #[test]
    fn from_millis_floors_negative_values() {
        let ts = Timestamp::from_millis(-1);
        assert_eq!(ts.secs(), -1);
        assert_eq!(ts.subsec_nanos(), 999_000_000);

        let ts = Timestamp::from_millis(-1_000);
        assert_eq!(ts.secs(), -1);
        assert_eq!(ts.subsec_nanos(), 0);
    }

    #[test]
    fn millis_round_trips_through_from_millis() {
        for millis in [0i64, 1, 999, 1_000, 1_001, -1, -999, -1_000, -1_001] {
            assert_eq!(Timestamp::from_millis(millis).millis(), millis);
        }
    }

    #[test]
    fn millis_floors_sub_millisecond_nanos() {
        let ts = Timestamp::from_parts(1, 999_999_999).unwrap();
        assert_eq!(ts.millis(), 1_999);

        let ts = Timestamp::from_parts(-1, 999_999_999).unwrap();
        assert_eq!(ts.millis(), -1);
    }

    #[test]
    fn epoch_displays_as_nineteen_seventy() {
        let ts = Timestamp::from_parts(0, 0).unwrap();
        assert_eq!(ts.to_string(), "1970-01-01 00:00:00.0");
    }

    #[test]
    fn display_trims_trailing_fraction_zeros() {
        let ts = Timestamp::from_parts(0, 500_000_000).unwrap();
        assert_eq!(ts.to_string(), "1970-01-01 00:00:00.5");

        let ts = Timestamp::from_parts(0, 123_456_789).unwrap();
        assert_eq!(ts.to_string(), "1970-01-01 00:00:00.123456789");

        let ts = Timestamp::from_parts(0, 1).unwrap();
        assert_eq!(ts.to_string(), "1970-01-01 00:00:00.000000001");
    }

    #[test]
    fn display_handles_leap_day() {
        let ts = Timestamp::from_civil(2020, 2, 29, 12, 0, 0, 0).unwrap();
        assert_eq!(ts.to_string(), "2020-02-29 12:00:00.0");
    }

    #[test]
    fn display_handles_pre_epoch_dates() {
        let ts = Timestamp::from_civil(1969, 12, 31, 23, 59, 59, 0).unwrap();
        assert_eq!(ts.secs(), -1);
        assert_eq!(ts.to_string(), "1969-12-31 23:59:59.0");
    }

    #[test]
    fn civil_conversion_round_trips_across_year_ends() {
        let cases = [
            (2016, 2, 8, 0, 37, 8),
            (2019, 12, 31, 23, 59, 59),
            (2020, 1, 1, 0, 0, 0),
            (2020, 12, 31, 0, 0, 0),
            (2023, 3, 31, 18, 30, 0),
            (1900, 2, 28, 1, 2, 3),
            (2000, 2, 29, 23, 0, 0),
            (10_000, 1, 1, 0, 0, 0),
            (292_277_026_596, 12, 4, 15, 30, 7),
        ];
        for (year, month, day, hour, minute, second) in cases {
            let ts = Timestamp::from_civil(year, month, day, hour, minute, second, 0).unwrap();
            assert_eq!(
                ts.to_civil(),
                (year, month, day, hour, minute, second),
                "mismatch for {year}-{month}-{day}"
            );
        }
    }

    #[test]
    fn known_epoch_seconds_agree() {
        // 2016-02-08 00:37:08 UTC, the first start_time in the dataset.
        let ts = Timestamp::from_civil(2016, 2, 8, 0, 37, 8, 0).unwrap();
        assert_eq!(ts.secs(), 1_454_891_828);

        // First instant past the four-digit years.
        let ts = Timestamp::from_civil(10_000, 1, 1, 0, 0, 0, 0).unwrap();
        assert_eq!(ts.secs(), 253_402_300_800);
    }

    #[test]
    fn civil_conversion_holds_at_the_ends_of_the_epoch_range() {
        // Hostile wire input can decode to any i64 epoch seconds; the civil
        // conversion must stay exact (and fast) all the way out.
        for secs in [i64::MAX, i64::MIN, i64::MAX / 2, i64::MIN / 2] {
            let ts = Timestamp::from_parts(secs, 0).unwrap();
            let (year, month, day, hour, minute, second) = ts.to_civil();
            let back = Timestamp::from_civil(year, month, day, hour, minute, second, 0)
                .expect("round trip stays in range");
            assert_eq!(back.secs(), secs, "mismatch at {secs}");
        }
        assert_eq!(
            Timestamp::from_parts(i64::MAX, 0).unwrap().to_string(),
            "292277026596-12-04 15:30:07.0"
        );
    }

    #[test]
    fn from_civil_rejects_years_past_the_epoch_range() {
        assert!(Timestamp::from_civil(292_277_026_596, 12, 4, 15, 30, 7, 0).is_some());
        assert!(Timestamp::from_civil(292_277_026_596, 12, 4, 15, 30, 8, 0).is_none());
        assert!(Timestamp::from_civil(400_000_000_000, 1, 1, 0, 0, 0, 0).is_none());
        assert!(Timestamp::from_civil(-400_000_000_000, 1, 1, 0, 0, 0, 0).is_none());
    }

    #[test]
    fn leap_year_rules() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2020));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2019));
    }
}
