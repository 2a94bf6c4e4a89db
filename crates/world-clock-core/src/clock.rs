// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Clock sources and time formatting

use chrono::{DateTime, Timelike, Utc};
use chrono_tz::Tz;

/// A source of the current instant
///
/// The widget uses [`SystemClock`]; tests substitute a [`FixedClock`].
pub trait Clock {
    /// Get the current instant
    fn now(&self) -> DateTime<Utc>;
}

/// The host system clock
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock stopped at a fixed instant
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    #[inline]
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    #[inline]
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

/// Format the wall-clock time at `instant` in `zone`
///
/// Output is `"The time in {location} is HH:MM:SS"` using a 24-hour clock with
/// every field zero-padded to two digits. Sub-second precision is truncated.
pub fn time_at(location: &str, zone: Tz, instant: DateTime<Utc>) -> String {
    let local = instant.with_timezone(&zone);
    format!(
        "The time in {location} is {:02}:{:02}:{:02}",
        local.hour(),
        local.minute(),
        local.second()
    )
}

/// Format the current time in `zone` according to the system clock
///
/// See [`time_at`].
#[inline]
pub fn current_time_at(location: &str, zone: Tz) -> String {
    time_at(location, zone, SystemClock.now())
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::TimeZone;
    use chrono_tz::{Asia, Europe};

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn zero_padding() {
        // 18:07:09 UTC is 03:07:09 in Tokyo (UTC+9, no DST)
        let s = time_at("Japan 🇯🇵", Asia::Tokyo, utc(2024, 3, 1, 18, 7, 9));
        assert_eq!(s, "The time in Japan 🇯🇵 is 03:07:09");
    }

    #[test]
    fn midnight() {
        let s = time_at("Japan 🇯🇵", Asia::Tokyo, utc(2024, 3, 1, 15, 0, 0));
        assert!(s.ends_with(" is 00:00:00"), "{s}");
    }

    #[test]
    fn last_second_of_day() {
        let s = time_at("Indonesia 🇮🇩", Asia::Jakarta, utc(2024, 3, 1, 16, 59, 59));
        assert!(s.ends_with("23:59:59"), "{s}");
    }

    #[test]
    fn sub_second_truncated() {
        let instant = utc(2024, 3, 1, 18, 7, 9) + chrono::Duration::milliseconds(999);
        let s = time_at("Japan 🇯🇵", Asia::Tokyo, instant);
        assert!(s.ends_with("03:07:09"), "{s}");
    }

    #[test]
    fn daylight_saving() {
        // Paris is UTC+1 in winter, UTC+2 in summer
        let winter = time_at("France 🇫🇷", Europe::Paris, utc(2024, 1, 15, 12, 0, 0));
        let summer = time_at("France 🇫🇷", Europe::Paris, utc(2024, 7, 15, 12, 0, 0));
        assert!(winter.ends_with("13:00:00"), "{winter}");
        assert!(summer.ends_with("14:00:00"), "{summer}");
    }

    #[test]
    fn fixed_clock() {
        let instant = utc(2000, 1, 1, 0, 0, 0);
        let clock = FixedClock(instant);
        assert_eq!(clock.now(), instant);
        assert_eq!((&clock).now(), instant);
    }

    #[test]
    fn system_clock_format() {
        let s = current_time_at("Egypt 🇪🇬", chrono_tz::Africa::Cairo);
        let time = s.strip_prefix("The time in Egypt 🇪🇬 is ").unwrap();
        assert_eq!(time.len(), 8);
        let fields: Vec<u32> = time.split(':').map(|f| f.parse().unwrap()).collect();
        assert_eq!(fields.len(), 3);
        assert!(fields[0] < 24 && fields[1] < 60 && fields[2] < 60);
    }
}
