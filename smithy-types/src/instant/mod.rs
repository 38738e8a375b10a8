/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use chrono::{DateTime, Utc};
use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// A point in time with nanosecond precision, independent of any time zone.
#[derive(Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Clone, Copy)]
pub struct Instant {
    seconds: i64,
    subsecond_nanos: u32,
}

/// Wire formats for timestamps
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Format {
    /// RFC-3339, eg. `2019-12-16T23:48:18Z`
    DateTime,
    /// RFC-7231 IMF-fixdate, eg. `Mon, 16 Dec 2019 23:48:18 GMT`
    HttpDate,
    /// Seconds since the Unix epoch with optional fractional part, eg. `1576540098.52`
    EpochSeconds,
}

#[derive(Debug, Eq, PartialEq)]
pub struct DateParseError {
    input: String,
    format: Format,
}

impl Display for DateParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` is not a valid {:?} timestamp", self.input, self.format)
    }
}

impl Error for DateParseError {}

impl Instant {
    pub fn from_epoch_seconds(epoch_seconds: i64) -> Self {
        Instant {
            seconds: epoch_seconds,
            subsecond_nanos: 0,
        }
    }

    pub fn from_fractional_seconds(epoch_seconds: i64, fraction: f64) -> Self {
        let subsecond_nanos = (fraction * NANOS_PER_SECOND as f64).round() as u32;
        Instant {
            seconds: epoch_seconds,
            subsecond_nanos: subsecond_nanos.min(NANOS_PER_SECOND - 1),
        }
    }

    pub fn from_secs_and_nanos(seconds: i64, subsecond_nanos: u32) -> Self {
        Instant {
            seconds,
            subsecond_nanos,
        }
    }

    pub fn from_f64(epoch_seconds: f64) -> Self {
        let seconds = epoch_seconds.floor();
        Instant::from_fractional_seconds(seconds as i64, epoch_seconds - seconds)
    }

    pub fn from_system_time(system_time: SystemTime) -> Self {
        match system_time.duration_since(UNIX_EPOCH) {
            Ok(duration) => Instant {
                seconds: duration.as_secs() as i64,
                subsecond_nanos: duration.subsec_nanos(),
            },
            Err(before_epoch) => {
                let duration = before_epoch.duration();
                let nanos = duration.subsec_nanos();
                if nanos == 0 {
                    Instant::from_epoch_seconds(-(duration.as_secs() as i64))
                } else {
                    Instant {
                        seconds: -(duration.as_secs() as i64) - 1,
                        subsecond_nanos: NANOS_PER_SECOND - nanos,
                    }
                }
            }
        }
    }

    pub fn to_system_time(&self) -> Option<SystemTime> {
        if self.seconds >= 0 {
            UNIX_EPOCH.checked_add(Duration::new(self.seconds as u64, self.subsecond_nanos))
        } else {
            UNIX_EPOCH
                .checked_sub(Duration::from_secs(self.seconds.unsigned_abs()))?
                .checked_add(Duration::from_nanos(self.subsecond_nanos as u64))
        }
    }

    pub fn from_str(s: &str, format: Format) -> Result<Self, DateParseError> {
        let err = || DateParseError {
            input: s.to_string(),
            format,
        };
        match format {
            Format::DateTime => DateTime::parse_from_rfc3339(s)
                .map(|dt| Instant::from_chrono(dt.with_timezone(&Utc)))
                .map_err(|_| err()),
            Format::HttpDate => DateTime::parse_from_rfc2822(s)
                .map(|dt| Instant::from_chrono(dt.with_timezone(&Utc)))
                .map_err(|_| err()),
            Format::EpochSeconds => s
                .parse::<f64>()
                .ok()
                .filter(|secs| secs.is_finite())
                .map(Instant::from_f64)
                .ok_or_else(err),
        }
    }

    fn from_chrono(dt: DateTime<Utc>) -> Self {
        Instant::from_secs_and_nanos(dt.timestamp(), dt.timestamp_subsec_nanos())
    }

    fn to_chrono(&self) -> DateTime<Utc> {
        DateTime::<Utc>::from_timestamp(self.seconds, self.subsecond_nanos)
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }

    pub fn has_nanos(&self) -> bool {
        self.subsecond_nanos != 0
    }

    pub fn epoch_fractional_seconds(&self) -> f64 {
        self.seconds as f64 + self.subsecond_nanos as f64 / NANOS_PER_SECOND as f64
    }

    pub fn epoch_seconds(&self) -> i64 {
        self.seconds
    }

    pub fn epoch_subsecond_nanos(&self) -> u32 {
        self.subsecond_nanos
    }

    pub fn fmt(&self, format: Format) -> String {
        match format {
            Format::DateTime => {
                let mut out = self.to_chrono().format("%Y-%m-%dT%H:%M:%S").to_string();
                if self.has_nanos() {
                    out.push('.');
                    out.push_str(&self.fraction());
                }
                out.push('Z');
                out
            }
            Format::EpochSeconds => {
                if self.has_nanos() {
                    format!("{}.{}", self.seconds, self.fraction())
                } else {
                    format!("{}", self.seconds)
                }
            }
            Format::HttpDate => {
                let dt = self.to_chrono();
                let mut out = dt.format("%a, %d %b %Y %H:%M:%S").to_string();
                if self.has_nanos() {
                    // http dates carry at most millisecond precision
                    out.push_str(&format!(".{:03}", self.subsecond_nanos / 1_000_000));
                }
                out.push_str(" GMT");
                out
            }
        }
    }

    fn fraction(&self) -> String {
        format!("{:0>9}", self.subsecond_nanos)
            .trim_end_matches('0')
            .to_string()
    }
}

impl From<SystemTime> for Instant {
    fn from(time: SystemTime) -> Self {
        Instant::from_system_time(time)
    }
}

#[cfg(test)]
mod test {
    use super::{Format, Instant};
    use proptest::prelude::*;
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn instant_fmt() {
        let instant = Instant::from_epoch_seconds(1576540098);
        assert_eq!(instant.fmt(Format::DateTime), "2019-12-16T23:48:18Z");
        assert_eq!(instant.fmt(Format::EpochSeconds), "1576540098");
        assert_eq!(instant.fmt(Format::HttpDate), "Mon, 16 Dec 2019 23:48:18 GMT");

        let instant = Instant::from_fractional_seconds(1576540098, 0.52);
        assert_eq!(instant.fmt(Format::DateTime), "2019-12-16T23:48:18.52Z");
        assert_eq!(instant.fmt(Format::EpochSeconds), "1576540098.52");
        assert_eq!(
            instant.fmt(Format::HttpDate),
            "Mon, 16 Dec 2019 23:48:18.520 GMT"
        );
    }

    #[test]
    fn trailing_zero_seconds_are_kept() {
        let instant = Instant::from_epoch_seconds(1576540100);
        assert_eq!(instant.fmt(Format::DateTime), "2019-12-16T23:48:20Z");
    }

    #[test]
    fn parse_formats() {
        let expected = Instant::from_epoch_seconds(1576540098);
        assert_eq!(
            Instant::from_str("2019-12-16T23:48:18Z", Format::DateTime),
            Ok(expected)
        );
        assert_eq!(
            Instant::from_str("Mon, 16 Dec 2019 23:48:18 GMT", Format::HttpDate),
            Ok(expected)
        );
        assert_eq!(
            Instant::from_str("1576540098", Format::EpochSeconds),
            Ok(expected)
        );
        assert_eq!(
            Instant::from_str("1576540098.5", Format::EpochSeconds),
            Ok(Instant::from_secs_and_nanos(1576540098, 500_000_000))
        );
        assert!(Instant::from_str("yesterday", Format::DateTime).is_err());
        assert!(Instant::from_str("NaN", Format::EpochSeconds).is_err());
    }

    #[test]
    fn system_time_conversion() {
        let time = UNIX_EPOCH + Duration::new(1611160427, 250);
        let instant = Instant::from_system_time(time);
        assert_eq!(instant.epoch_seconds(), 1611160427);
        assert_eq!(instant.epoch_subsecond_nanos(), 250);
        assert_eq!(instant.to_system_time(), Some(time));

        let before = UNIX_EPOCH - Duration::from_millis(1500);
        let instant = Instant::from_system_time(before);
        assert_eq!(instant, Instant::from_secs_and_nanos(-2, 500_000_000));
        assert_eq!(instant.to_system_time(), Some(before));
    }

    proptest! {
        #[test]
        fn date_time_round_trip(secs in 0i64..253_402_300_799, nanos in 0u32..1_000_000_000) {
            let instant = Instant::from_secs_and_nanos(secs, nanos);
            let formatted = instant.fmt(Format::DateTime);
            prop_assert_eq!(Instant::from_str(&formatted, Format::DateTime), Ok(instant));
        }
    }
}
