//! Moteur de validation et de couverture d'un planning.
//!
//! Chaque opération existe en fonction libre (règles par défaut) et en
//! méthode de [`RestaurantRules`] pour des horaires personnalisés.

mod conflicts;
mod coverage;
mod night;
mod overlap;
mod report;
mod staff;
mod types;
mod validate;

pub use conflicts::detect_conflicts;
pub use night::is_night_shift;
pub use overlap::do_shifts_overlap;
pub use staff::{employee_hours, get_unique_employees_per_day};
pub use types::{
    Conflict, DayCoverage, DayReport, RestaurantRules, Severity, Warning, WarningKind,
    ALL_SLOTS_COVERED, NO_SLOT_COVERED,
};

use crate::error::PlanningError;
use crate::model::{Day, Planning, Shift, ShiftId};
use crate::time::TimeOfDay;

impl RestaurantRules {
    pub fn validate_shift(&self, shift: &Shift) -> Vec<Warning> {
        validate::validate_shift(self, shift)
    }

    pub fn is_time_slot_covered(&self, slot: TimeOfDay, shifts: &[Shift], day: Day) -> bool {
        coverage::is_time_slot_covered(self, slot, shifts, day)
    }

    pub fn check_day_coverage(&self, day: Day, shifts: &[Shift]) -> DayCoverage {
        coverage::check_day_coverage(self, day, shifts)
    }

    pub fn format_uncovered_slots(&self, slots: &[TimeOfDay]) -> String {
        coverage::format_uncovered_slots(self, slots)
    }

    pub fn calculate_day_coverage_percentage(&self, day: Day, shifts: &[Shift]) -> u8 {
        coverage::calculate_day_coverage_percentage(self, day, shifts)
    }

    pub fn week_report(&self, shifts: &[Shift]) -> Vec<DayReport> {
        report::week_report(self, shifts)
    }
}

pub fn validate_shift(shift: &Shift) -> Vec<Warning> {
    RestaurantRules::default().validate_shift(shift)
}

pub fn is_time_slot_covered(slot: TimeOfDay, shifts: &[Shift], day: Day) -> bool {
    RestaurantRules::default().is_time_slot_covered(slot, shifts, day)
}

pub fn check_day_coverage(day: Day, shifts: &[Shift]) -> DayCoverage {
    RestaurantRules::default().check_day_coverage(day, shifts)
}

pub fn format_uncovered_slots(slots: &[TimeOfDay]) -> String {
    RestaurantRules::default().format_uncovered_slots(slots)
}

pub fn calculate_day_coverage_percentage(day: Day, shifts: &[Shift]) -> u8 {
    RestaurantRules::default().calculate_day_coverage_percentage(day, shifts)
}

pub fn week_report(shifts: &[Shift]) -> Vec<DayReport> {
    RestaurantRules::default().week_report(shifts)
}

impl Planning {
    /// Avertissements par shift, dans l'ordre du planning ; les shifts sans
    /// avertissement sont omis.
    pub fn validate_all(&self, rules: &RestaurantRules) -> Vec<(ShiftId, Vec<Warning>)> {
        self.shifts
            .iter()
            .map(|s| (s.id, rules.validate_shift(s)))
            .filter(|(_, warnings)| !warnings.is_empty())
            .collect()
    }

    pub fn validate_one(
        &self,
        id: ShiftId,
        rules: &RestaurantRules,
    ) -> Result<Vec<Warning>, PlanningError> {
        self.find_shift(id)
            .map(|s| rules.validate_shift(s))
            .ok_or(PlanningError::UnknownShift(id.get()))
    }

    pub fn detect_conflicts(&self) -> Vec<Conflict> {
        conflicts::detect_conflicts(&self.shifts)
    }
}
