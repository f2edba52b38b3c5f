//! DateTime display utilities.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// An epoch-millisecond instant shown in a specific time zone.
///
/// # Format
///
/// `YYYY-MM-DD HH:MM TZ`, e.g. `2024-01-01 00:00 UTC`. Instants outside the
/// supported range fall back to the raw millisecond value.
///
/// # Examples
///
/// ```rust
/// use jiff::tz::TimeZone;
/// use periodize_core::display::LocalDateTime;
///
/// let tz = TimeZone::UTC;
/// assert_eq!(LocalDateTime::new(1_704_067_200_000, &tz).to_string(), "2024-01-01 00:00 UTC");
/// ```
pub struct LocalDateTime<'a> {
    millis: i64,
    tz: &'a TimeZone,
}

impl<'a> LocalDateTime<'a> {
    pub fn new(millis: i64, tz: &'a TimeZone) -> Self {
        Self { millis, tz }
    }
}

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match Timestamp::from_millisecond(self.millis) {
            Ok(ts) => write!(
                f,
                "{}",
                ts.to_zoned(self.tz.clone()).strftime("%Y-%m-%d %H:%M %Z")
            ),
            Err(_) => write!(f, "{}ms", self.millis),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_falls_back() {
        let tz = TimeZone::UTC;
        assert_eq!(LocalDateTime::new(i64::MAX, &tz).to_string(), format!("{}ms", i64::MAX));
    }
}
