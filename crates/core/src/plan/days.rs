//! Days of the week and the user's day selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown day: '{0}'")]
pub struct ParseDayError(pub String);

impl FromStr for Day {
    type Err = ParseDayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Day::ALL
            .into_iter()
            .find(|day| day.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseDayError(s.to_string()))
    }
}

impl TryFrom<String> for Day {
    type Error = ParseDayError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Ordered set of distinct days, in the order they were selected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Day>", into = "Vec<Day>")]
pub struct DaySelection {
    days: Vec<Day>,
}

impl DaySelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a selection, keeping the first occurrence of each day.
    pub fn from_days(days: impl IntoIterator<Item = Day>) -> Self {
        let mut selection = Self::new();
        for day in days {
            if !selection.contains(day) {
                selection.days.push(day);
            }
        }
        selection
    }

    /// Select a missing day (appended) or deselect a present one.
    /// Returns `true` if the day is now selected.
    pub fn toggle(&mut self, day: Day) -> bool {
        if let Some(pos) = self.days.iter().position(|d| *d == day) {
            self.days.remove(pos);
            false
        } else {
            self.days.push(day);
            true
        }
    }

    pub fn contains(&self, day: Day) -> bool {
        self.days.contains(&day)
    }

    pub fn iter(&self) -> impl Iterator<Item = Day> + '_ {
        self.days.iter().copied()
    }

    pub fn as_slice(&self) -> &[Day] {
        &self.days
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl From<Vec<Day>> for DaySelection {
    fn from(days: Vec<Day>) -> Self {
        Self::from_days(days)
    }
}

impl From<DaySelection> for Vec<Day> {
    fn from(selection: DaySelection) -> Self {
        selection.days
    }
}

impl FromIterator<Day> for DaySelection {
    fn from_iter<I: IntoIterator<Item = Day>>(iter: I) -> Self {
        Self::from_days(iter)
    }
}
