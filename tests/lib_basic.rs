#![forbid(unsafe_code)]
use brigade::{
    io,
    model::{Day, Planning, Shift, ShiftId, ShiftStatus},
    storage::{JsonStorage, Storage},
    PlanningError, RestaurantRules,
};
use std::fs;
use tempfile::tempdir;

fn sample_planning() -> Planning {
    let mut planning = Planning::default();
    planning.upsert(vec![
        Shift::new(2, 4, "20:00", "02:00")
            .unwrap()
            .with_status(ShiftStatus::Confirmed)
            .with_employees([1]),
        Shift::new(1, 0, "08:00", "16:00")
            .unwrap()
            .with_status(ShiftStatus::Confirmed)
            .with_employees([1, 2]),
    ]);
    planning
}

#[test]
fn upsert_sorts_and_replaces() {
    let mut planning = sample_planning();
    assert_eq!(planning.shifts[0].id, ShiftId::new(1));

    let replacement = Shift::new(2, 4, "21:00", "02:00").unwrap();
    planning.upsert(vec![replacement]);
    assert_eq!(planning.shifts.len(), 2);
    let s = planning.find_shift(ShiftId::new(2)).unwrap();
    assert_eq!(s.start_time.to_string(), "21:00");
    assert_eq!(s.status, ShiftStatus::Pending);
    assert_eq!(planning.shifts_for_day(Day::FRIDAY).count(), 1);
}

#[test]
fn validate_all_skips_clean_shifts() {
    let planning = sample_planning();
    let results = planning.validate_all(&RestaurantRules::default());
    assert_eq!(results.len(), 2);

    let clean = Shift::new(3, 2, "11:00", "15:00").unwrap();
    let mut planning = planning;
    planning.upsert(vec![clean]);
    assert_eq!(planning.validate_all(&RestaurantRules::default()).len(), 2);

    let err = planning
        .validate_one(ShiftId::new(42), &RestaurantRules::default())
        .unwrap_err();
    assert!(matches!(err, PlanningError::UnknownShift(42)));
}

#[test]
fn json_storage_roundtrip() {
    let dir = tempdir().unwrap();
    let storage = JsonStorage::open(dir.path().join("planning.json")).unwrap();
    assert!(!storage.exists());

    let planning = sample_planning();
    storage.save(&planning).unwrap();
    let loaded = storage.load().unwrap();
    assert_eq!(loaded.shifts, planning.shifts);
}

#[test]
fn shift_json_uses_record_field_names() {
    let raw = r#"{"id":7,"employeeIds":[1,2],"day":4,"startTime":"20:00","endTime":"02:00","status":"confirmed"}"#;
    let shift: Shift = serde_json::from_str(raw).unwrap();
    assert_eq!(shift.day, Day::FRIDAY);
    assert_eq!(shift.employee_ids.len(), 2);
    assert!(shift.is_night());
    assert_eq!(shift.duration_hours(), 6.0);

    let back = serde_json::to_value(&shift).unwrap();
    assert_eq!(back["startTime"], "20:00");
    assert_eq!(back["status"], "confirmed");
    assert_eq!(back["day"], 4);
}

#[test]
fn shift_json_rejects_bad_time_and_day() {
    let bad_time = r#"{"id":1,"day":0,"startTime":"25:00","endTime":"02:00"}"#;
    assert!(serde_json::from_str::<Shift>(bad_time).is_err());
    let bad_day = r#"{"id":1,"day":7,"startTime":"20:00","endTime":"02:00"}"#;
    assert!(serde_json::from_str::<Shift>(bad_day).is_err());
}

#[test]
fn import_shifts_from_csv() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("shifts.csv");
    fs::write(
        &path,
        "id,day,start,end,status,employees\n1,0,11:00,15:00,confirmed,1;2\n2,6,22:00,03:00,,3\n",
    )
    .unwrap();

    let shifts = io::import_shifts_csv(&path).unwrap();
    assert_eq!(shifts.len(), 2);
    assert_eq!(shifts[0].status, ShiftStatus::Confirmed);
    assert_eq!(shifts[0].employee_ids.len(), 2);
    assert_eq!(shifts[1].status, ShiftStatus::Pending);
    assert!(shifts[1].is_night());
}

#[test]
fn import_rejects_malformed_rows() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("shifts.csv");
    fs::write(&path, "id,day,start,end\n1,0,11h00,15:00\n").unwrap();
    assert!(io::import_shifts_csv(&path).is_err());

    fs::write(&path, "id,day,start,end\n1,9,11:00,15:00\n").unwrap();
    assert!(io::import_shifts_csv(&path).is_err());
}

#[test]
fn rules_file_keeps_defaults_for_missing_fields() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("rules.json");
    fs::write(&path, r#"{"closing_hour": 2, "extended_days": [4, 5]}"#).unwrap();
    let rules = io::load_rules_from_file(&path).unwrap();
    assert_eq!(rules.closing_hour, 2);
    assert_eq!(rules.opening_hour, 11);
    assert!(!rules.is_extended_day(Day::THURSDAY));
    assert_eq!(rules.closing_hour_for(Day::FRIDAY), 7);

    fs::write(&path, r#"{"opening_hour": 0}"#).unwrap();
    assert!(io::load_rules_from_file(&path).is_err());
}
