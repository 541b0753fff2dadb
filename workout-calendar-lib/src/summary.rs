//src/summary.rs
use crate::calendar::{self, DateKey};
use crate::store::{WorkoutRecord, WorkoutStore};
use chrono::NaiveDate;

/// Duration totals for one Sunday-started week.
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklySummary {
    pub week_start: NaiveDate,
    pub days: [(NaiveDate, f64); 7],
    pub total: f64,
}

impl WeeklySummary {
    pub fn week_end(&self) -> NaiveDate {
        self.days[6].0
    }

    /// Number of days in the week with a non-zero total.
    pub fn active_days(&self) -> usize {
        self.days.iter().filter(|(_, total)| *total != 0.0).count()
    }
}

/// Reads the leading number out of free-form duration text.
///
/// Leading whitespace is skipped and the longest decimal prefix is used, so
/// `"30 min"` counts as 30. A leading `Infinity` (optionally signed) is
/// infinite. Text without a leading number counts as 0.
pub fn parse_duration(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();
    let negative = bytes.first() == Some(&b'-');
    let unsigned = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    if unsigned.starts_with("Infinity") {
        return if negative { f64::NEG_INFINITY } else { f64::INFINITY };
    }
    let digits_from = |mut at: usize| {
        while bytes.get(at).is_some_and(u8::is_ascii_digit) {
            at += 1;
        }
        at
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_end = digits_from(end);
    let mut digit_count = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        let frac_count = frac_end - (end + 1);
        if digit_count + frac_count > 0 {
            digit_count += frac_count;
            end = frac_end;
        }
    }
    if digit_count == 0 {
        return 0.0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exp_start = end + 1 + sign;
        let exp_end = digits_from(exp_start);
        if exp_end > exp_start {
            end = exp_end;
        }
    }

    match trimmed[..end].parse::<f64>() {
        Ok(value) if !value.is_nan() => value,
        _ => 0.0,
    }
}

pub fn day_total(records: &[WorkoutRecord]) -> f64 {
    records
        .iter()
        .map(|record| parse_duration(&record.duration))
        .sum()
}

/// Per-day and overall duration for the week containing `reference`.
pub fn weekly_summary(store: &WorkoutStore, reference: NaiveDate) -> WeeklySummary {
    let days = calendar::week_days(reference)
        .map(|date| (date, day_total(store.list_for(&DateKey::from(date)))));
    let total = days.iter().map(|(_, total)| total).sum();
    WeeklySummary {
        week_start: days[0].0,
        days,
        total,
    }
}

/// Sum of every parsed duration in the Sunday-started week containing `reference`.
pub fn weekly_total(store: &WorkoutStore, reference: NaiveDate) -> f64 {
    calendar::week_keys(reference)
        .iter()
        .map(|key| day_total(store.list_for(key)))
        .sum()
}
