use crate::model::Shift;
use crate::time::wrapped_span;

/// Chevauchement de deux shifts du même jour.
///
/// Deux jours différents ne se chevauchent jamais, même quand un shift de
/// nuit déborde sur le lendemain.
pub fn do_shifts_overlap(a: &Shift, b: &Shift) -> bool {
    if a.day != b.day {
        return false;
    }
    let (a_start, a_end) = wrapped_span(a.start_time, a.end_time);
    let (b_start, b_end) = wrapped_span(b.start_time, b.end_time);
    overlaps(a_start, a_end, b_start, b_end)
}

/// Intersection d'intervalles semi-ouverts ; symétrique en (a, b).
fn overlaps(a_start: u32, a_end: u32, b_start: u32, b_end: u32) -> bool {
    a_start < b_end && b_start < a_end
}
