#![forbid(unsafe_code)]
//! Brigade — validation de plannings de restaurant (sans BD).
//!
//! - Règles d'ouverture/fermeture et d'effectif du soir.
//! - Chevauchements de shifts, y compris ceux qui passent minuit.
//! - Couverture horaire par créneaux d'une heure.
//! - Stockage fichiers (JSON/CSV).

pub mod error;
pub mod io;
pub mod model;
pub mod planning;
pub mod storage;
pub mod time;

pub use error::PlanningError;
pub use model::{Day, EmployeeId, Planning, Shift, ShiftId, ShiftStatus};
pub use planning::{
    calculate_day_coverage_percentage, check_day_coverage, detect_conflicts, do_shifts_overlap,
    employee_hours, get_unique_employees_per_day, is_night_shift, is_time_slot_covered,
    validate_shift, week_report, Conflict, DayCoverage, DayReport, RestaurantRules, Severity,
    Warning, WarningKind,
};
pub use storage::{JsonStorage, Storage};
pub use time::{hours_between, hours_between_rounded, to_minutes, TimeOfDay};
