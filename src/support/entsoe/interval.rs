use std::fmt;

use jiff::{SignedDuration, Timestamp};

/// Hour-resolution UTC time range for the `TimeInterval` request parameter.
///
/// Displays as `start%2Fend`, each end formatted `YYYY-MM-DDTHH`. The slash is
/// already percent-encoded so the value can be placed in a query string as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeInterval {
    start: Timestamp,
    end: Timestamp,
}

impl TimeInterval {
    const FORMAT: &'static str = "%Y-%m-%dT%H";

    /// The hour ending at `now`.
    ///
    /// Minutes and seconds are dropped when displayed, so a run at `07:05`
    /// requests `06` to `07`.
    ///
    /// # Errors
    ///
    /// Returns an error if `now` is within an hour of [`Timestamp::MIN`].
    ///
    /// # Example
    ///
    /// ```
    /// use energy_mix::support::entsoe::TimeInterval;
    ///
    /// let now = "2021-07-07T06:05:00Z".parse().unwrap();
    /// let interval = TimeInterval::past_hour(now).unwrap();
    /// assert_eq!(interval.to_string(), "2021-07-07T05%2F2021-07-07T06");
    /// ```
    pub fn past_hour(now: Timestamp) -> Result<Self, jiff::Error> {
        let start = now.checked_sub(SignedDuration::from_hours(1))?;
        Ok(Self { start, end: now })
    }

    #[must_use]
    pub fn start(&self) -> Timestamp {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> Timestamp {
        self.end
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}%2F{}",
            self.start.strftime(Self::FORMAT),
            self.end.strftime(Self::FORMAT)
        )
    }
}
