use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::error::{Error, Result};

/// Number of days in the default sales window.
pub const DEFAULT_WINDOW_DAYS: u32 = 90;

/// Inclusive range of consecutive calendar days ending at `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SalesWindow {
    end: NaiveDate,
    days: u32,
}

impl SalesWindow {
    pub fn new(end: NaiveDate, days: u32) -> Result<Self> {
        if days == 0 {
            return Err(Error::InvalidWindow(
                "window must span at least one day".to_string(),
            ));
        }
        end.checked_sub_days(Days::new(u64::from(days - 1)))
            .ok_or_else(|| {
                Error::InvalidWindow(format!("{days} days before {end} is out of range"))
            })?;
        Ok(Self { end, days })
    }

    pub fn start(&self) -> NaiveDate {
        self.end
            .checked_sub_days(Days::new(u64::from(self.days.saturating_sub(1))))
            .unwrap_or(NaiveDate::MIN)
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    /// Day at `offset` from the window start, if it falls inside the window.
    pub fn day(&self, offset: u32) -> Option<NaiveDate> {
        if offset >= self.days {
            return None;
        }
        self.start().checked_add_days(Days::new(u64::from(offset)))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start() && date <= self.end
    }
}

impl Default for SalesWindow {
    fn default() -> Self {
        Self {
            end: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap_or_default(),
            days: DEFAULT_WINDOW_DAYS,
        }
    }
}
