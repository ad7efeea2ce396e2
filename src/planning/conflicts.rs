use super::{do_shifts_overlap, Conflict};
use crate::model::{EmployeeId, Shift};

/// Paires de shifts qui se chevauchent et partagent au moins un employé.
/// Tous les statuts sont pris en compte.
pub fn detect_conflicts(shifts: &[Shift]) -> Vec<Conflict> {
    let mut out = Vec::new();

    for (idx, a) in shifts.iter().enumerate() {
        for b in shifts.iter().skip(idx + 1) {
            if !do_shifts_overlap(a, b) {
                continue;
            }
            let shared: Vec<EmployeeId> = a
                .employee_ids
                .iter()
                .filter(|e| b.employee_ids.contains(e))
                .copied()
                .collect();
            if !shared.is_empty() {
                out.push(Conflict {
                    day: a.day,
                    shift_a: a.id,
                    shift_b: b.id,
                    employees: shared,
                });
            }
        }
    }

    out
}
