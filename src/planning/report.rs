use super::{coverage, staff, DayReport, RestaurantRules};
use crate::model::{Day, Shift};

pub(super) fn week_report(rules: &RestaurantRules, shifts: &[Shift]) -> Vec<DayReport> {
    Day::week()
        .map(|day| {
            let coverage = coverage::check_day_coverage(rules, day, shifts);
            DayReport {
                percentage: coverage::percentage(
                    rules.total_slots(day),
                    coverage.uncovered_slots.len(),
                ),
                unique_employees: staff::get_unique_employees_per_day(shifts, day),
                coverage,
            }
        })
        .collect()
}
