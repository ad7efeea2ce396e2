use crate::error::PlanningError;
use crate::time::{self, TimeOfDay};
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifiant de shift (attribué par l'appelant, opaque).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShiftId(u64);

impl ShiftId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ShiftId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Identifiant fort pour un employé
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(u64);

impl EmployeeId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Jour de la semaine du restaurant : 0 = lundi ... 6 = dimanche.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Day(u8);

impl Day {
    pub const MONDAY: Day = Day(0);
    pub const THURSDAY: Day = Day(3);
    pub const FRIDAY: Day = Day(4);
    pub const SATURDAY: Day = Day(5);
    pub const SUNDAY: Day = Day(6);

    pub fn new(index: i64) -> Result<Self, PlanningError> {
        if (0..=6).contains(&index) {
            Ok(Self(index as u8))
        } else {
            Err(PlanningError::InvalidDayIndex(index))
        }
    }

    pub fn index(&self) -> u8 {
        self.0
    }

    /// Veille, avec bouclage dimanche -> lundi : `(day - 1 + 7) % 7`.
    pub fn previous(&self) -> Day {
        Day((self.0 + 6) % 7)
    }

    /// Les sept jours, lundi d'abord.
    pub fn week() -> impl Iterator<Item = Day> {
        (0..7u8).map(Day)
    }

    pub fn from_weekday(weekday: Weekday) -> Self {
        Day(weekday.num_days_from_monday() as u8)
    }

    pub fn name(&self) -> &'static str {
        match self.0 {
            0 => "lundi",
            1 => "mardi",
            2 => "mercredi",
            3 => "jeudi",
            4 => "vendredi",
            5 => "samedi",
            _ => "dimanche",
        }
    }
}

impl TryFrom<i64> for Day {
    type Error = PlanningError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Day::new(value)
    }
}

impl From<Day> for u8 {
    fn from(value: Day) -> Self {
        value.0
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Statut d'un shift dans le planning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShiftStatus {
    Confirmed,
    #[default]
    Pending,
    Conflict,
    Absence,
}

impl ShiftStatus {
    /// Seuls `confirmed` et `conflict` comptent pour la couverture et les effectifs.
    pub fn counts_for_staffing(&self) -> bool {
        matches!(self, ShiftStatus::Confirmed | ShiftStatus::Conflict)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShiftStatus::Confirmed => "confirmed",
            ShiftStatus::Pending => "pending",
            ShiftStatus::Conflict => "conflict",
            ShiftStatus::Absence => "absence",
        }
    }
}

impl std::str::FromStr for ShiftStatus {
    type Err = PlanningError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "confirmed" => Ok(ShiftStatus::Confirmed),
            "pending" => Ok(ShiftStatus::Pending),
            "conflict" => Ok(ShiftStatus::Conflict),
            "absence" => Ok(ShiftStatus::Absence),
            _ => Err(PlanningError::InvalidStatus(s.to_string())),
        }
    }
}

/// Créneau de travail, horaires locaux au jour `day`.
///
/// `end_time < start_time` signifie toujours une fin le lendemain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    pub id: ShiftId,
    #[serde(default)]
    pub employee_ids: Vec<EmployeeId>,
    pub day: Day,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    #[serde(default)]
    pub status: ShiftStatus,
}

impl Shift {
    /// Crée un shift `pending` sans employé, en parsant les horaires `HH:MM`.
    pub fn new(id: u64, day: i64, start: &str, end: &str) -> Result<Self, PlanningError> {
        Ok(Self {
            id: ShiftId::new(id),
            employee_ids: Vec::new(),
            day: Day::new(day)?,
            start_time: start.parse()?,
            end_time: end.parse()?,
            status: ShiftStatus::default(),
        })
    }

    pub fn with_status(mut self, status: ShiftStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_employees<I: IntoIterator<Item = u64>>(mut self, ids: I) -> Self {
        self.employee_ids = ids.into_iter().map(EmployeeId::new).collect();
        self
    }

    /// Durée en heures arrondie au dixième.
    pub fn duration_hours(&self) -> f64 {
        time::hours_between_rounded(self.start_time, self.end_time)
    }

    pub fn counts_for_staffing(&self) -> bool {
        self.status.counts_for_staffing()
    }
}

/// Planning d'une semaine pour un restaurant.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Planning {
    pub shifts: Vec<Shift>,
}

impl Planning {
    pub fn find_shift(&self, id: ShiftId) -> Option<&Shift> {
        self.shifts.iter().find(|s| s.id == id)
    }
    pub fn find_shift_mut(&mut self, id: ShiftId) -> Option<&mut Shift> {
        self.shifts.iter_mut().find(|s| s.id == id)
    }
    pub fn shifts_for_day(&self, day: Day) -> impl Iterator<Item = &Shift> {
        self.shifts.iter().filter(move |s| s.day == day)
    }

    /// Ajoute ou remplace (même id) des shifts importés.
    pub fn upsert(&mut self, shifts: Vec<Shift>) {
        for shift in shifts {
            match self.find_shift_mut(shift.id) {
                Some(existing) => *existing = shift,
                None => self.shifts.push(shift),
            }
        }
        self.shifts.sort_by_key(|s| (s.day, s.start_time, s.id));
    }
}
