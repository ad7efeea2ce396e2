use super::{is_night_shift, RestaurantRules, Severity, Warning, WarningKind};
use crate::model::Shift;

/// Applique toutes les règles au shift ; chaque règle ajoute au plus un
/// avertissement et aucune n'interrompt les suivantes.
pub(super) fn validate_shift(rules: &RestaurantRules, shift: &Shift) -> Vec<Warning> {
    let mut out = Vec::new();
    let start_hour = shift.start_time.hour();
    let end_hour = shift.end_time.hour();

    let evening =
        start_hour >= rules.evening_start_hour || start_hour < rules.early_morning_end_hour;
    if evening && shift.employee_ids.len() < rules.min_evening_staff {
        out.push(Warning {
            kind: WarningKind::Evening,
            message: format!(
                "Au moins {} employés sont requis sur un shift de soirée ou de nuit",
                rules.min_evening_staff
            ),
            severity: Severity::Warning,
        });
    }

    // un shift à minuit prolonge la veille
    if start_hour < rules.opening_hour && start_hour != 0 {
        out.push(Warning {
            kind: WarningKind::Opening,
            message: format!("Le restaurant ouvre à {:02}:00", rules.opening_hour),
            severity: Severity::Error,
        });
    }

    let max_close_hour = rules.closing_hour_for(shift.day);
    let checked =
        is_night_shift(shift.start_time, shift.end_time) || end_hour < rules.opening_hour;
    let too_late = end_hour > max_close_hour
        || (end_hour == max_close_hour && shift.end_time.minute() > 0);
    if checked && too_late {
        out.push(Warning {
            kind: WarningKind::Closing,
            message: format!(
                "Le restaurant ferme à {:02}:00 le {}",
                max_close_hour, shift.day
            ),
            severity: Severity::Error,
        });
    }

    #[cfg(feature = "logging")]
    tracing::debug!(shift = %shift.id, warnings = out.len(), "shift validated");

    out
}
