//! Working-hours calendar: business-day checks and duration projection.
//!
//! The work fabric is two daily blocks (morning 08-12, afternoon 13-17 by
//! default) on weekdays that are not listed as holidays. Durations are
//! expressed in whole working hours and projected block by block.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::HashSet;

/// Daily work blocks, as hours of day.
/// Morning runs [day_start, lunch_start), afternoon [lunch_end, day_end).
#[derive(Debug, Clone, Copy)]
pub struct DayBlocks {
    pub day_start: u32,
    pub lunch_start: u32,
    pub lunch_end: u32,
    pub day_end: u32,
}

impl Default for DayBlocks {
    fn default() -> Self {
        Self {
            day_start: 8,
            lunch_start: 12,
            lunch_end: 13,
            day_end: 17,
        }
    }
}

impl DayBlocks {
    /// Net working hours in a full day (both blocks, lunch excluded).
    pub fn hours_per_day(&self) -> u32 {
        (self.lunch_start - self.day_start) + (self.day_end - self.lunch_end)
    }
}

/// Upper bound for the non-working-day skip: a holiday list dense enough to
/// blank out ten years means the configuration is broken, not the projection.
const MAX_SKIP_DAYS: u32 = 3660;

#[derive(Debug, Clone, Default)]
pub struct WorkCalendar {
    blocks: DayBlocks,
    holidays: HashSet<NaiveDate>,
}

impl WorkCalendar {
    pub fn new(blocks: DayBlocks, holidays: HashSet<NaiveDate>) -> Self {
        Self { blocks, holidays }
    }

    /// Build the calendar from the loaded configuration.
    /// Holiday entries must be `YYYY-MM-DD` strings.
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        let blocks = DayBlocks {
            day_start: cfg.day_start,
            lunch_start: cfg.lunch_start,
            lunch_end: cfg.lunch_end,
            day_end: cfg.day_end,
        };

        if !(blocks.day_start < blocks.lunch_start
            && blocks.lunch_start < blocks.lunch_end
            && blocks.lunch_end < blocks.day_end
            && blocks.day_end <= 24)
        {
            return Err(AppError::Config(format!(
                "work blocks must satisfy day_start < lunch_start < lunch_end < day_end <= 24 (got {}/{}/{}/{})",
                blocks.day_start, blocks.lunch_start, blocks.lunch_end, blocks.day_end
            )));
        }

        let mut holidays = HashSet::new();
        for h in &cfg.holidays {
            let d = NaiveDate::parse_from_str(h, "%Y-%m-%d")
                .map_err(|_| AppError::InvalidDate(format!("holiday '{}'", h)))?;
            holidays.insert(d);
        }

        Ok(Self::new(blocks, holidays))
    }

    pub fn blocks(&self) -> DayBlocks {
        self.blocks
    }

    /// Saturdays, Sundays and configured holidays are non-working.
    pub fn is_working_day(&self, date: NaiveDate) -> bool {
        !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) && !self.holidays.contains(&date)
    }

    fn next_day(date: NaiveDate) -> AppResult<NaiveDate> {
        date.succ_opt()
            .ok_or_else(|| AppError::Calendar(format!("date overflow after {}", date)))
    }

    fn skip_to_working_day(&self, mut date: NaiveDate) -> AppResult<NaiveDate> {
        let mut skipped = 0;
        while !self.is_working_day(date) {
            date = Self::next_day(date)?;
            skipped += 1;
            if skipped > MAX_SKIP_DAYS {
                return Err(AppError::Calendar(format!(
                    "no working day within {} days of {}",
                    MAX_SKIP_DAYS, date
                )));
            }
        }
        Ok(date)
    }

    /// Project `duration_hours` of work onto the calendar starting from
    /// (`start_date`, `start_hour`) and return the end date and hour.
    ///
    /// Only hours inside the two daily blocks on working days are counted.
    /// The start point is first normalized onto the fabric:
    /// - before opening → clamped to `day_start`
    /// - inside the lunch gap → advanced to `lunch_end`
    /// - at or past closing → next calendar day at `day_start`
    ///
    /// A zero duration is the placeholder sentinel and must never reach the
    /// calendar; it is rejected here, not clamped.
    pub fn project_end(
        &self,
        start_date: NaiveDate,
        start_hour: u32,
        duration_hours: i32,
    ) -> AppResult<(NaiveDate, u32)> {
        if duration_hours <= 0 {
            return Err(AppError::InvalidDuration(format!(
                "{} (a projection needs a positive number of hours)",
                duration_hours
            )));
        }
        if start_hour > 23 {
            return Err(AppError::InvalidHour(start_hour.to_string()));
        }

        let b = self.blocks;
        let mut date = start_date;
        let mut hour = start_hour;

        // 1) Normalize the start point onto the work fabric
        if hour < b.day_start {
            hour = b.day_start;
        }
        if hour >= b.lunch_start && hour < b.lunch_end {
            hour = b.lunch_end;
        }
        if hour >= b.day_end {
            date = Self::next_day(date)?;
            hour = b.day_start;
        }

        // 2) Land on a working day, keeping the normalized hour
        date = self.skip_to_working_day(date)?;

        // 3) Consume the duration block by block
        let mut remaining = duration_hours as u32;

        loop {
            if hour < b.lunch_start {
                // morning block
                let take = remaining.min(b.lunch_start - hour);
                hour += take;
                remaining -= take;

                if remaining > 0 {
                    let take = remaining.min(b.day_end - b.lunch_end);
                    hour = b.lunch_end + take;
                    remaining -= take;
                }
            } else {
                // afternoon block
                let take = remaining.min(b.day_end - hour);
                hour += take;
                remaining -= take;
            }

            if remaining == 0 {
                return Ok((date, hour));
            }

            // 4) Day exhausted: next working day at opening hour
            date = self.skip_to_working_day(Self::next_day(date)?)?;
            hour = b.day_start;
        }
    }
}
