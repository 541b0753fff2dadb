//src/calendar.rs
//! Calendar dates, the `YYYY-MM-DD` keys derived from them, and the date cursor.
use chrono::{Datelike, Days, Local, NaiveDate};
use std::fmt;
use std::str::FromStr;

pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Canonical `YYYY-MM-DD` identifier of a calendar day.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(String);

impl DateKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The calendar date this key names.
    pub fn to_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.0, DATE_KEY_FORMAT).ok()
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        key(&date)
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for DateKey {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), DATE_KEY_FORMAT).map(Self::from)
    }
}

/// Current local calendar date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Returns `current` moved by `offset_days` (negative goes back).
/// Saturates at the ends of the representable range.
pub fn shift(current: NaiveDate, offset_days: i64) -> NaiveDate {
    let days = Days::new(offset_days.unsigned_abs());
    if offset_days >= 0 {
        current.checked_add_days(days).unwrap_or(NaiveDate::MAX)
    } else {
        current.checked_sub_days(days).unwrap_or(NaiveDate::MIN)
    }
}

/// Key for any calendar-bearing value. Only year, month and day are read, so
/// two timestamps on the same day produce the same key.
pub fn key<D: Datelike>(date: &D) -> DateKey {
    DateKey(format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        date.month(),
        date.day()
    ))
}

/// Most recent Sunday on or before `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let back = i64::from(date.weekday().num_days_from_sunday());
    shift(date, -back)
}

/// The seven days of the Sunday-started week containing `date`.
pub fn week_days(date: NaiveDate) -> [NaiveDate; 7] {
    let start = week_start(date);
    std::array::from_fn(|offset| shift(start, offset as i64))
}

pub fn week_keys(date: NaiveDate) -> [DateKey; 7] {
    week_days(date).map(DateKey::from)
}

/// The currently selected day of the calendar view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateCursor {
    date: NaiveDate,
}

impl Default for DateCursor {
    fn default() -> Self {
        Self::today()
    }
}

impl DateCursor {
    pub const fn new(date: NaiveDate) -> Self {
        Self { date }
    }

    pub fn today() -> Self {
        Self::new(today())
    }

    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn key(&self) -> DateKey {
        key(&self.date)
    }

    pub fn step(&mut self, offset_days: i64) {
        self.date = shift(self.date, offset_days);
    }

    pub fn previous_day(&mut self) {
        self.step(-1);
    }

    pub fn next_day(&mut self) {
        self.step(1);
    }

    pub fn reset_to_today(&mut self) {
        self.date = today();
    }

    pub fn set(&mut self, date: NaiveDate) {
        self.date = date;
    }
}
