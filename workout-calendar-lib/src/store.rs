//src/store.rs
use crate::calendar::DateKey;
use std::collections::BTreeMap;
use std::fmt;
use strum_macros::EnumIter;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("No workout at position {index} on {key} ({len} logged)")]
    IndexOutOfRange {
        key: DateKey,
        index: usize,
        len: usize,
    },
}

/// One logged activity. Free text throughout; `duration` is only parsed when summed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkoutRecord {
    pub sport: String,
    pub duration: String,
    pub intensity: String,
}

impl WorkoutRecord {
    pub fn new(
        sport: impl Into<String>,
        duration: impl Into<String>,
        intensity: impl Into<String>,
    ) -> Self {
        Self {
            sport: sport.into(),
            duration: duration.into(),
            intensity: intensity.into(),
        }
    }

    pub fn field(&self, field: WorkoutField) -> &str {
        match field {
            WorkoutField::Sport => &self.sport,
            WorkoutField::Duration => &self.duration,
            WorkoutField::Intensity => &self.intensity,
        }
    }

    pub fn set_field(&mut self, field: WorkoutField, value: String) {
        match field {
            WorkoutField::Sport => self.sport = value,
            WorkoutField::Duration => self.duration = value,
            WorkoutField::Intensity => self.intensity = value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum WorkoutField {
    Sport,
    Duration,
    Intensity,
}

impl fmt::Display for WorkoutField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkoutField::Sport => write!(f, "Sport"),
            WorkoutField::Duration => write!(f, "Duration"),
            WorkoutField::Intensity => write!(f, "Intensity"),
        }
    }
}

/// Workouts grouped by day. Records are addressed by their position within the day,
/// so an index is only meaningful against the store value it was read from.
///
/// Every operation leaves `self` untouched and hands back the next store value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkoutStore {
    days: BTreeMap<DateKey, Vec<WorkoutRecord>>,
}

impl WorkoutStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records logged on `key`, oldest first. Unknown days read as empty.
    pub fn list_for(&self, key: &DateKey) -> &[WorkoutRecord] {
        self.days.get(key).map_or(&[], Vec::as_slice)
    }

    pub fn record_at(&self, key: &DateKey, index: usize) -> Result<&WorkoutRecord, Error> {
        self.check_index(key, index)?;
        Ok(&self.list_for(key)[index])
    }

    #[must_use]
    pub fn append(&self, key: &DateKey, record: WorkoutRecord) -> Self {
        let mut next = self.clone();
        let day = next.days.entry(key.clone()).or_default();
        day.push(record);
        tracing::debug!("Appended workout #{} on {}", day.len() - 1, key);
        next
    }

    pub fn replace_at(
        &self,
        key: &DateKey,
        index: usize,
        record: WorkoutRecord,
    ) -> Result<Self, Error> {
        self.check_index(key, index)?;
        let mut next = self.clone();
        if let Some(day) = next.days.get_mut(key) {
            day[index] = record;
        }
        tracing::debug!("Replaced workout #{} on {}", index, key);
        Ok(next)
    }

    /// Removes the record and shifts later ones down by one. A day left with no
    /// records is dropped from the map.
    pub fn remove_at(&self, key: &DateKey, index: usize) -> Result<Self, Error> {
        self.check_index(key, index)?;
        let mut next = self.clone();
        if let Some(day) = next.days.get_mut(key) {
            day.remove(index);
            if day.is_empty() {
                next.days.remove(key);
            }
        }
        tracing::debug!("Removed workout #{} on {}", index, key);
        Ok(next)
    }

    /// Days that have at least one record, in calendar order.
    pub fn dates(&self) -> impl Iterator<Item = &DateKey> {
        self.days.keys()
    }

    /// Total number of records across all days.
    pub fn len(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    fn check_index(&self, key: &DateKey, index: usize) -> Result<(), Error> {
        let len = self.list_for(key).len();
        if index < len {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange {
                key: key.clone(),
                index,
                len,
            })
        }
    }
}
