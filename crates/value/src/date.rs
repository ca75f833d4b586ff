//! [`Date`] — a point in time carried as epoch milliseconds.

use std::fmt;

const MS_PER_DAY: i64 = 86_400_000;

/// A date value. Two dates are equal iff their epoch millisecond values are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    epoch_ms: i64,
}

impl Date {
    pub fn from_epoch_ms(epoch_ms: i64) -> Self {
        Self { epoch_ms }
    }

    pub fn epoch_ms(&self) -> i64 {
        self.epoch_ms
    }

    /// ISO-8601 rendering (`YYYY-MM-DDTHH:MM:SS.mmmZ`), proleptic Gregorian.
    pub fn to_iso_string(&self) -> String {
        let days = self.epoch_ms.div_euclid(MS_PER_DAY);
        let ms_of_day = self.epoch_ms.rem_euclid(MS_PER_DAY);
        let (year, month, day) = civil_from_days(days);
        let ms = ms_of_day % 1000;
        let secs = ms_of_day / 1000;
        let (hour, minute, second) = (secs / 3600, secs / 60 % 60, secs % 60);
        format!(
            "{year:04}-{month:02}-{day:02}T{hour:02}:{minute:02}:{second:02}.{ms:03}Z"
        )
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_iso_string())
    }
}

// Days-since-epoch to civil calendar date (Howard Hinnant's algorithm).
fn civil_from_days(z: i64) -> (i64, u32, u32) {
    let z = z + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let m = if mp < 10 { mp + 3 } else { mp - 9 } as u32;
    (if m <= 2 { y + 1 } else { y }, m, d)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_zero() {
        assert_eq!(
            Date::from_epoch_ms(0).to_iso_string(),
            "1970-01-01T00:00:00.000Z"
        );
    }

    #[test]
    fn positive_timestamp() {
        // 2018-01-23 12:34:56.789 UTC
        assert_eq!(
            Date::from_epoch_ms(1_516_710_896_789).to_iso_string(),
            "2018-01-23T12:34:56.789Z"
        );
    }

    #[test]
    fn negative_timestamp() {
        assert_eq!(
            Date::from_epoch_ms(-1).to_iso_string(),
            "1969-12-31T23:59:59.999Z"
        );
    }

    #[test]
    fn leap_day() {
        // 2000-02-29 00:00:00 UTC
        assert_eq!(
            Date::from_epoch_ms(951_782_400_000).to_iso_string(),
            "2000-02-29T00:00:00.000Z"
        );
    }

    #[test]
    fn ordering_follows_epoch() {
        assert!(Date::from_epoch_ms(-5) < Date::from_epoch_ms(5));
        assert_eq!(Date::from_epoch_ms(42), Date::from_epoch_ms(42));
    }
}
