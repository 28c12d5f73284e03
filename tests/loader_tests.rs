use fitrank::loader::{
    load_running, load_running_from_path, load_weightlifting, load_weightlifting_from_path,
};
use fitrank::scorer::{running_score, weightlifting_score};
use fitrank::tables::Gender;
use fitrank::FitRankError;
use std::io::Cursor;

#[test]
fn test_running_roster_in_memory() {
    let csv = "name,oneKm,fiveKm,halfMarathon\n\
               Ana,3:00,,\n\
               Ben,,25:00,1:35:00\n";
    let records = load_running(Cursor::new(csv)).expect("roster load failed");
    assert_eq!(records.len(), 2);

    assert_eq!(records[0].name, "Ana");
    assert_eq!(records[0].input.one_km, "3:00");
    assert!(!records[0].input.has_half_marathon);
    assert_eq!(running_score(&records[0].input), 95);

    assert_eq!(records[1].name, "Ben");
    assert!(records[1].input.has_half_marathon);
    // 50 (5km) + 75 (half) = 62.5 -> 63
    assert_eq!(running_score(&records[1].input), 63);
}

#[test]
fn test_snake_case_headers_and_missing_names() {
    let csv = "one_km,has_marathon,marathon_time\n4:30,true,3:50:00\n";
    let records = load_running(Cursor::new(csv)).unwrap();
    assert_eq!(records[0].name, "Athlete 1");
    assert!(records[0].input.has_marathon);
    assert_eq!(records[0].input.marathon_time, "3:50:00");
}

#[test]
fn test_unknown_column_is_rejected() {
    let csv = "name,oneKm,twoKm\nAna,3:00,6:00\n";
    let err = load_running(Cursor::new(csv)).unwrap_err();
    assert!(matches!(err, FitRankError::Validation(ref m) if m.contains("twoKm")));
}

#[test]
fn test_bad_rows_are_skipped() {
    let csv = "name,bodyweight,gender,benchPress\n\
               Cara,60,female,1.1\n\
               Dan,80,robot,1.0\n\
               Eve,70,male,1.2\n";
    let records = load_weightlifting(Cursor::new(csv)).unwrap();
    let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Cara", "Eve"]);
    assert_eq!(records[0].input.gender, Gender::Female);
    assert_eq!(weightlifting_score(&records[0].input), 95);
    assert_eq!(weightlifting_score(&records[1].input), 75);
}

#[test]
fn test_load_from_path() {
    let dir = tempfile::tempdir().unwrap();
    let running = dir.path().join("runners.csv");
    let lifting = dir.path().join("lifters.csv");
    std::fs::write(&running, "name,tenKm\nFay,38:00\n").unwrap();
    std::fs::write(&lifting, "name,bodyweight,pullUp\nGus,75,20\n").unwrap();

    let r = load_running_from_path(&running).unwrap();
    assert_eq!(running_score(&r[0].input), 95);

    let l = load_weightlifting_from_path(&lifting).unwrap();
    assert_eq!(weightlifting_score(&l[0].input), 95);
}

#[test]
fn test_missing_file_is_io_error() {
    let err = load_running_from_path("/definitely/not/here.csv").unwrap_err();
    assert!(matches!(err, FitRankError::Io(_)));
    assert!(err.to_string().contains("not/here.csv"));
}
