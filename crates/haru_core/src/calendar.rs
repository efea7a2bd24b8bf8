//! Calendar month grid and per-day entry presence.
//!
//! A [`CalendarMonth`] is the month the calendar view currently displays.
//! It answers the layout questions of a Sunday-first month grid (how many
//! days, how many leading blank cells, previous/next month) and the one
//! derived query the diary needs: which days carry at least one entry.
//! Everything here is a pure read; nothing caches.

use chrono::{Datelike, NaiveDate};

use crate::entry::Entry;

/// A displayed calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarMonth {
    year: i32,
    month: u32,
}

impl CalendarMonth {
    /// Create a month. Returns `None` when `month` is not 1..=12.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if (1..=12).contains(&month) {
            Some(Self { year, month })
        } else {
            None
        }
    }

    /// The month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The current local month.
    pub fn current() -> Self {
        Self::containing(chrono::Local::now().date_naive())
    }

    /// Displayed year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Displayed month (1..=12).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// First day of the month.
    pub fn first_day(&self) -> NaiveDate {
        // Month is validated on construction, so the first always exists
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap()
    }

    /// Number of days in the month.
    pub fn days_in_month(&self) -> u32 {
        self.next().first_day().pred_opt().unwrap().day()
    }

    /// Blank cells before day 1 in a Sunday-first grid.
    pub fn leading_blanks(&self) -> u32 {
        self.first_day().weekday().num_days_from_sunday()
    }

    /// The date of a day-of-month, or `None` when the day does not exist
    /// in this month.
    pub fn date_of(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }

    /// The previous month.
    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// The next month.
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// True when at least one entry's date equals the given day of this
    /// month. Exact date equality, no timezone arithmetic.
    pub fn day_has_entry(&self, day: u32, entries: &[Entry]) -> bool {
        match self.date_of(day) {
            Some(date) => entries.iter().any(|e| e.date == date),
            None => false,
        }
    }

    /// Per-day presence flags, index 0 = day 1.
    pub fn presence(&self, entries: &[Entry]) -> Vec<bool> {
        let mut days = vec![false; self.days_in_month() as usize];
        for entry in entries {
            if entry.date.year() == self.year && entry.date.month() == self.month {
                days[entry.date.day() as usize - 1] = true;
            }
        }
        days
    }
}
