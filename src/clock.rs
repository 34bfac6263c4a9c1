use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

/// Posts are dated in the author's local zone, regardless of where the tool runs.
pub(crate) const DEFAULT_TIME_ZONE: Tz = chrono_tz::America::Chicago;

pub(crate) trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Reads the system time and converts it into `tz`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ZonedClock {
    pub tz: Tz,
}

impl Default for ZonedClock {
    fn default() -> Self {
        Self {
            tz: DEFAULT_TIME_ZONE,
        }
    }
}

impl ZonedClock {
    pub fn date_at(&self, now: DateTime<Utc>) -> NaiveDate {
        now.with_timezone(&self.tz).date_naive()
    }
}

impl Clock for ZonedClock {
    fn today(&self) -> NaiveDate {
        self.date_at(Utc::now())
    }
}

#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub(crate) struct FixedClock(pub NaiveDate);

#[cfg(test)]
impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
