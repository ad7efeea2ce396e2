use crate::model::Shift;
use crate::time::TimeOfDay;

/// Vrai si le shift passe minuit.
///
/// Seules les heures sont comparées, les minutes sont ignorées :
/// `10:00`-`09:30` est donc un shift de nuit, `10:30`-`10:15` ne l'est pas.
pub fn is_night_shift(start: TimeOfDay, end: TimeOfDay) -> bool {
    let (start_hour, end_hour) = (start.hour(), end.hour());
    end_hour < start_hour || (end_hour == 0 && start_hour > 0)
}

impl Shift {
    pub fn is_night(&self) -> bool {
        is_night_shift(self.start_time, self.end_time)
    }
}
