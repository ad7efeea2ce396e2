use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlanningError {
    #[error("invalid time format (expected HH:MM): {0:?}")]
    InvalidTimeFormat(String),
    #[error("invalid day index (expected 0..=6): {0}")]
    InvalidDayIndex(i64),
    #[error("unknown shift status: {0:?}")]
    InvalidStatus(String),
    #[error("invalid rules: {0}")]
    InvalidRules(&'static str),
    #[error("unknown shift: {0}")]
    UnknownShift(u64),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
