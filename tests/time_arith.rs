#![forbid(unsafe_code)]
use brigade::time::{hours_between, hours_between_rounded, to_minutes, wrapped_span, TimeOfDay};
use brigade::{Day, PlanningError};
use chrono::Weekday;

fn t(s: &str) -> TimeOfDay {
    s.parse().unwrap()
}

#[test]
fn parses_and_displays_hhmm() {
    assert_eq!(t("08:05").minutes(), 485);
    assert_eq!(t("23:59").to_string(), "23:59");
    assert_eq!(to_minutes("00:00").unwrap(), 0);
    assert_eq!(to_minutes("13:30").unwrap(), 810);
}

#[test]
fn rejects_malformed_time_strings() {
    for raw in ["", "abc", "12h30", "25:00", "12:60", "12:5", "12:30:00", "-1:00", "1a:00"] {
        assert!(
            matches!(TimeOfDay::parse(raw), Err(PlanningError::InvalidTimeFormat(_))),
            "{raw:?} should be rejected"
        );
    }
}

#[test]
fn hours_between_wraps_past_midnight() {
    assert_eq!(hours_between(t("20:00"), t("02:00")), 6.0);
    assert_eq!(hours_between(t("10:00"), t("10:00")), 0.0);
    assert_eq!(hours_between_rounded(t("09:00"), t("17:20")), 8.3);
    assert_eq!(hours_between_rounded(t("23:15"), t("00:00")), 0.8);
}

#[test]
fn hours_between_stays_within_a_day() {
    let ends = [t("00:00"), t("00:59"), t("11:30"), t("23:59")];
    for start in (0..24).map(TimeOfDay::slot) {
        for end in ends {
            let h = hours_between(start, end);
            assert!((0.0..24.0).contains(&h), "{start}-{end} gave {h}");
        }
    }
}

#[test]
fn wrapped_span_moves_end_to_next_day() {
    assert_eq!(wrapped_span(t("22:00"), t("03:00")), (1320, 1620));
    assert_eq!(wrapped_span(t("11:00"), t("15:00")), (660, 900));
    assert_eq!(wrapped_span(t("12:00"), t("12:00")), (720, 2160));
}

#[test]
fn day_index_is_validated() {
    assert!(matches!(Day::new(7), Err(PlanningError::InvalidDayIndex(7))));
    assert!(matches!(Day::new(-1), Err(PlanningError::InvalidDayIndex(-1))));
    assert_eq!(Day::new(0).unwrap().previous(), Day::SUNDAY);
    assert_eq!(Day::new(4).unwrap().previous(), Day::THURSDAY);
    assert_eq!(Day::from_weekday(Weekday::Thu), Day::THURSDAY);
    assert_eq!(Day::week().count(), 7);
}
