use crate::error::PlanningError;
use crate::model::{Day, EmployeeId, ShiftId};
use crate::time::TimeOfDay;
use serde::{Deserialize, Serialize};

/// Message quand aucun shift ne touche la journée.
pub const NO_SLOT_COVERED: &str = "Aucun créneau n'est couvert ce jour";
/// Message quand il ne reste aucun trou.
pub const ALL_SLOTS_COVERED: &str = "Tous les créneaux sont couverts";

/// Règles horaires du restaurant.
///
/// `Default` correspond aux règles métier : ouverture à 11:00, fermeture à
/// 03:00, ou 07:00 les jeudi, vendredi et samedi.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RestaurantRules {
    pub opening_hour: u32,
    pub closing_hour: u32,
    pub extended_closing_hour: u32,
    pub extended_days: Vec<Day>,
    /// Un shift commençant à partir de cette heure est un shift de soirée.
    pub evening_start_hour: u32,
    /// Un shift commençant avant cette heure est un shift de nuit.
    pub early_morning_end_hour: u32,
    pub min_evening_staff: usize,
}

impl Default for RestaurantRules {
    fn default() -> Self {
        Self {
            opening_hour: 11,
            closing_hour: 3,
            extended_closing_hour: 7,
            extended_days: vec![Day::THURSDAY, Day::FRIDAY, Day::SATURDAY],
            evening_start_hour: 18,
            early_morning_end_hour: 7,
            min_evening_staff: 2,
        }
    }
}

impl RestaurantRules {
    pub fn validate(&self) -> Result<(), PlanningError> {
        if self.opening_hour == 0 || self.opening_hour > 23 {
            return Err(PlanningError::InvalidRules("opening_hour must be in 1..=23"));
        }
        if self.closing_hour > self.opening_hour || self.extended_closing_hour > self.opening_hour
        {
            return Err(PlanningError::InvalidRules(
                "closing hours must not be after opening_hour",
            ));
        }
        if self.evening_start_hour > 23 || self.early_morning_end_hour > 23 {
            return Err(PlanningError::InvalidRules("hours must be in 0..=23"));
        }
        Ok(())
    }

    pub fn is_extended_day(&self, day: Day) -> bool {
        self.extended_days.contains(&day)
    }

    /// Heure de fermeture (après minuit) pour `day`.
    pub fn closing_hour_for(&self, day: Day) -> u32 {
        if self.is_extended_day(day) {
            self.extended_closing_hour
        } else {
            self.closing_hour
        }
    }

    /// Créneaux d'exploitation dans l'ordre de la journée : ouverture..=23
    /// puis 0..fermeture.
    pub fn operating_slots(&self, day: Day) -> Vec<TimeOfDay> {
        (self.opening_hour..24)
            .chain(0..self.closing_hour_for(day))
            .map(TimeOfDay::slot)
            .collect()
    }

    pub fn total_slots(&self, day: Day) -> usize {
        (24 - self.opening_hour + self.closing_hour_for(day)) as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WarningKind {
    Evening,
    Opening,
    Closing,
}

impl WarningKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningKind::Evening => "evening",
            WarningKind::Opening => "opening",
            WarningKind::Closing => "closing",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    #[serde(rename = "type")]
    pub kind: WarningKind,
    pub message: String,
    pub severity: Severity,
}

/// Résultat de couverture d'une journée.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayCoverage {
    pub day: Day,
    pub is_covered: bool,
    pub uncovered_slots: Vec<TimeOfDay>,
    pub formatted_message: String,
}

/// Deux shifts qui se chevauchent pour au moins un même employé.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    pub day: Day,
    pub shift_a: ShiftId,
    pub shift_b: ShiftId,
    pub employees: Vec<EmployeeId>,
}

/// Synthèse d'une journée pour le rapport hebdomadaire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayReport {
    pub coverage: DayCoverage,
    pub percentage: u8,
    pub unique_employees: usize,
}
