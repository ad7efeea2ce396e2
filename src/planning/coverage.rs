use super::types::{ALL_SLOTS_COVERED, NO_SLOT_COVERED};
use super::{DayCoverage, RestaurantRules};
use crate::model::{Day, Shift};
use crate::time::{wrapped_span, TimeOfDay, MINUTES_PER_DAY};

/// Un créneau est couvert si un shift `confirmed`/`conflict` du jour le
/// contient, ou, pour les créneaux d'après minuit, un shift de nuit de la veille.
pub(super) fn is_time_slot_covered(
    rules: &RestaurantRules,
    slot: TimeOfDay,
    shifts: &[Shift],
    day: Day,
) -> bool {
    let previous = day.previous();
    let slot_min = slot.minutes();
    let after_midnight = slot.hour() < rules.opening_hour;

    shifts
        .iter()
        .filter(|s| s.counts_for_staffing())
        .any(|s| {
            if s.day == day {
                spans(s, slot_min)
            } else if after_midnight && s.day == previous && s.is_night() {
                // ramène le créneau sur la chronologie de la veille
                spans(s, slot_min + MINUTES_PER_DAY)
            } else {
                false
            }
        })
}

/// `[start, end)` : début inclus, fin exclue.
fn spans(shift: &Shift, minute: u32) -> bool {
    let (start, end) = wrapped_span(shift.start_time, shift.end_time);
    start <= minute && minute < end
}

pub(super) fn check_day_coverage(
    rules: &RestaurantRules,
    day: Day,
    shifts: &[Shift],
) -> DayCoverage {
    let previous = day.previous();
    let slots = rules.operating_slots(day);

    let touches_day = shifts
        .iter()
        .filter(|s| s.counts_for_staffing())
        .any(|s| s.day == day || (s.day == previous && s.is_night()));
    if !touches_day {
        #[cfg(feature = "logging")]
        tracing::debug!(day = day.index(), "no staffed shift for day");
        return DayCoverage {
            day,
            is_covered: false,
            uncovered_slots: slots,
            formatted_message: NO_SLOT_COVERED.to_string(),
        };
    }

    let uncovered: Vec<TimeOfDay> = slots
        .into_iter()
        .filter(|slot| !is_time_slot_covered(rules, *slot, shifts, day))
        .collect();

    #[cfg(feature = "logging")]
    tracing::debug!(day = day.index(), uncovered = uncovered.len(), "day coverage computed");

    DayCoverage {
        day,
        is_covered: uncovered.is_empty(),
        formatted_message: format_uncovered_slots(rules, &uncovered),
        uncovered_slots: uncovered,
    }
}

/// Regroupe les créneaux en plages contiguës (`"14:00 - 16:00"`) dans l'ordre
/// de la journée d'exploitation : les heures d'après minuit passent après 23h.
pub(super) fn format_uncovered_slots(rules: &RestaurantRules, slots: &[TimeOfDay]) -> String {
    if slots.is_empty() {
        return ALL_SLOTS_COVERED.to_string();
    }

    let operating_hour = |slot: &TimeOfDay| {
        let hour = slot.hour();
        if hour < rules.opening_hour {
            hour + 24
        } else {
            hour
        }
    };

    let mut sorted = slots.to_vec();
    sorted.sort_by_key(operating_hour);

    let mut ranges: Vec<(TimeOfDay, TimeOfDay)> = Vec::new();
    for slot in sorted {
        let hour = operating_hour(&slot);
        match ranges.last_mut() {
            Some(range) if operating_hour(&range.1) + 1 == hour => range.1 = slot,
            _ => ranges.push((slot, slot)),
        }
    }

    ranges
        .iter()
        .map(|(first, last)| {
            if first == last {
                first.to_string()
            } else {
                format!("{first} - {last}")
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

pub(super) fn calculate_day_coverage_percentage(
    rules: &RestaurantRules,
    day: Day,
    shifts: &[Shift],
) -> u8 {
    let uncovered = check_day_coverage(rules, day, shifts).uncovered_slots.len();
    percentage(rules.total_slots(day), uncovered)
}

/// Part couverte arrondie au pourcent entier.
pub(super) fn percentage(total: usize, uncovered: usize) -> u8 {
    let covered = total.saturating_sub(uncovered);
    (covered as f64 / total as f64 * 100.0).round() as u8
}
