//! Arithmétique horaire : valeur `HH:MM`, minutes depuis minuit, durées.
//!
//! Les chaînes `HH:MM` sont parsées une seule fois ici ; le reste de la
//! bibliothèque ne manipule que des [`TimeOfDay`].

use crate::error::PlanningError;
use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Nombre de minutes dans une journée.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Heure murale (24h, précision minute), locale au jour du shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    /// Parse strict `HH:MM` ; toute autre forme échoue en `InvalidTimeFormat`.
    pub fn parse(raw: &str) -> Result<Self, PlanningError> {
        let trimmed = raw.trim();
        let well_formed = trimmed
            .split_once(':')
            .map(|(h, m)| is_digits(h, 1..=2) && is_digits(m, 2..=2))
            .unwrap_or(false);
        if !well_formed {
            return Err(PlanningError::InvalidTimeFormat(raw.to_string()));
        }
        NaiveTime::parse_from_str(trimmed, "%H:%M")
            .map(Self)
            .map_err(|_| PlanningError::InvalidTimeFormat(raw.to_string()))
    }

    /// Début d'un créneau horaire (`hour:00`). `hour` est ramené dans 0..24.
    pub fn slot(hour: u32) -> Self {
        // 0..24 est toujours valide
        Self(NaiveTime::from_hms_opt(hour % 24, 0, 0).unwrap_or_default())
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Minutes depuis minuit.
    pub fn minutes(&self) -> u32 {
        self.0.num_seconds_from_midnight() / 60
    }
}

fn is_digits(s: &str, len: std::ops::RangeInclusive<usize>) -> bool {
    len.contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
}

impl FromStr for TimeOfDay {
    type Err = PlanningError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = PlanningError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_string()
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// `HH:MM` -> minutes depuis minuit.
pub fn to_minutes(raw: &str) -> Result<u32, PlanningError> {
    TimeOfDay::parse(raw).map(|t| t.minutes())
}

/// Intervalle `[start, end)` en minutes ; `end <= start` signifie que la fin
/// tombe le lendemain (+1440).
pub fn wrapped_span(start: TimeOfDay, end: TimeOfDay) -> (u32, u32) {
    let start_min = start.minutes();
    let mut end_min = end.minutes();
    if end_min <= start_min {
        end_min += MINUTES_PER_DAY;
    }
    (start_min, end_min)
}

/// Durée en heures, non arrondie. Une fin antérieure au début passe minuit ;
/// des horaires égaux donnent 0.
pub fn hours_between(start: TimeOfDay, end: TimeOfDay) -> f64 {
    let mut diff = end.minutes() as i64 - start.minutes() as i64;
    if diff < 0 {
        diff += i64::from(MINUTES_PER_DAY);
    }
    diff as f64 / 60.0
}

/// Durée en heures arrondie au dixième (affichage).
pub fn hours_between_rounded(start: TimeOfDay, end: TimeOfDay) -> f64 {
    round_tenth(hours_between(start, end))
}

pub(crate) fn round_tenth(hours: f64) -> f64 {
    (hours * 10.0).round() / 10.0
}
