use crate::model::{Day, EmployeeId, Shift};
use crate::time::{hours_between, round_tenth};
use std::collections::{BTreeMap, HashSet};

/// Employés distincts présents le jour `day`, y compris ceux d'un shift de
/// nuit commencé la veille.
pub fn get_unique_employees_per_day(shifts: &[Shift], day: Day) -> usize {
    let previous = day.previous();
    shifts
        .iter()
        .filter(|s| s.counts_for_staffing())
        .filter(|s| s.day == day || (s.day == previous && s.is_night()))
        .flat_map(|s| s.employee_ids.iter().copied())
        .collect::<HashSet<EmployeeId>>()
        .len()
}

/// Heures travaillées par employé sur la semaine, arrondies au dixième.
pub fn employee_hours(shifts: &[Shift]) -> BTreeMap<EmployeeId, f64> {
    let mut totals: BTreeMap<EmployeeId, f64> = BTreeMap::new();
    for shift in shifts.iter().filter(|s| s.counts_for_staffing()) {
        let hours = hours_between(shift.start_time, shift.end_time);
        for employee in &shift.employee_ids {
            *totals.entry(*employee).or_default() += hours;
        }
    }
    totals.values_mut().for_each(|h| *h = round_tenth(*h));
    totals
}
