use regex::Regex;
use serde_json::Value;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

struct TestContext {
    _dir: TempDir,
    runners: PathBuf,
    lifters: PathBuf,
    form: PathBuf,
}

impl TestContext {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let runners = dir.path().join("runners.csv");
        let lifters = dir.path().join("lifters.csv");
        let form = dir.path().join("form.json");

        let mut f = File::create(&runners).unwrap();
        writeln!(f, "name,oneKm,fiveKm,marathon").unwrap();
        writeln!(f, "Slow,8:00,,").unwrap();
        writeln!(f, "Fast,2:50,17:30,2:59:00").unwrap();
        writeln!(f, "Mid,4:30,25:00,").unwrap();

        let mut f = File::create(&lifters).unwrap();
        writeln!(f, "name,bodyweight,gender,squat,pullUp").unwrap();
        writeln!(f, "Ida,60,female,1.6,12").unwrap();
        writeln!(f, "Jon,90,male,1.0,3").unwrap();

        let mut f = File::create(&form).unwrap();
        writeln!(f, r#"{{"oneKm":"3:00","fiveKm":"","tenKm":"50:00"}}"#).unwrap();

        Self {
            _dir: dir,
            runners,
            lifters,
            form,
        }
    }
}

fn fitrank(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fitrank"))
        .args(args)
        .output()
        .expect("Failed to run fitrank")
}

fn json(args: &[&str]) -> Value {
    let mut full = args.to_vec();
    full.extend_from_slice(&["--format", "json"]);
    let out = fitrank(&full);
    assert!(
        out.status.success(),
        "fitrank failed: {}",
        String::from_utf8_lossy(&out.stderr)
    );
    serde_json::from_slice(&out.stdout).expect("stdout was not JSON")
}

#[test]
fn test_running_json() {
    let v = json(&["running", "--one-km", "3:00"]);
    assert!(v["tip"].is_string());
    assert_eq!(v["score"], 95);
    assert_eq!(v["label"], "Elite");
    assert_eq!(v["color"], "#4CAF50");
}

#[test]
fn test_running_without_times_is_default() {
    let v = json(&["running"]);
    assert_eq!(v["score"], 50);
    assert_eq!(v["results"].as_array().unwrap().len(), 0);
}

#[test]
fn test_running_table_output() {
    let out = fitrank(&["running", "--one-km", "8:00", "--no-color"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);

    let re = Regex::new(r"Running Performance\s*\|\s*(\d+)%").unwrap();
    let caps = re.captures(&stdout).expect("headline not found");
    assert_eq!(&caps[1], "10");
    assert!(stdout.contains("Novice"));
    assert!(stdout.contains("1km"));
    assert!(stdout.contains("interval training"));
}

#[test]
fn test_running_form_file_with_override() {
    let ctx = TestContext::new();
    let form = ctx.form.to_str().unwrap();

    // 95 (1km) + 50 (10km) -> 72.5 -> 73
    let v = json(&["running", "--input", form]);
    assert_eq!(v["score"], 73);

    // Override 10km with an elite time
    let v = json(&["running", "--input", form, "--ten-km", "38:00"]);
    assert_eq!(v["score"], 95);
}

#[test]
fn test_running_decimal_seconds() {
    // 185.5 s is past the 180 s elite mark but inside "good"
    let v = json(&["running", "--one-km", "3:05.5"]);
    assert_eq!(v["score"], 75);
    assert_eq!(v["results"][0]["seconds"], 186);
}

#[test]
fn test_weightlifting_infinite_bodyweight_is_default() {
    let v = json(&["weightlifting", "--bodyweight", "inf", "--bench-press", "1.5"]);
    assert_eq!(v["score"], 50);
}

#[test]
fn test_weightlifting_json() {
    let v = json(&[
        "weightlifting",
        "--bodyweight",
        "80",
        "--gender",
        "male",
        "--bench-press",
        "1.5",
    ]);
    assert_eq!(v["score"], 95);
    assert_eq!(v["bodyweightDisplay"], "80.0 kg");
    assert_eq!(v["results"][0]["percentOfElite"], 100);
}

#[test]
fn test_weightlifting_without_bodyweight() {
    let v = json(&["weightlifting", "--squat", "2.5"]);
    assert_eq!(v["score"], 50);
}

#[test]
fn test_batch_ranking() {
    let ctx = TestContext::new();
    let v = json(&["batch", "running", ctx.runners.to_str().unwrap()]);
    let ranking = v.as_array().unwrap();

    let names: Vec<&str> = ranking.iter().map(|r| r["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Fast", "Mid", "Slow"]);
    assert_eq!(ranking[0]["rank"], 1);
    assert_eq!(ranking[0]["score"], 95);
    assert_eq!(ranking[0]["metrics"], 3);
    assert_eq!(ranking[2]["score"], 10);
}

#[test]
fn test_batch_weightlifting_table() {
    let ctx = TestContext::new();
    let out = fitrank(&[
        "batch",
        "weightlifting",
        ctx.lifters.to_str().unwrap(),
        "--no-color",
    ]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    let ida = stdout.find("Ida").expect("Ida missing");
    let jon = stdout.find("Jon").expect("Jon missing");
    assert!(ida < jon, "ranking order wrong:\n{}", stdout);
}

#[test]
fn test_batch_unknown_column_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.csv");
    std::fs::write(&path, "name,sprint\nZed,0:10\n").unwrap();

    let out = fitrank(&["batch", "running", path.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("sprint"));
}

#[test]
fn test_missing_form_file_fails() {
    let out = fitrank(&["running", "--input", "/no/such/form.json"]);
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn test_tables() {
    let out = fitrank(&["tables", "--gender", "female", "--ranges"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Half Marathon"));
    assert!(stdout.contains("1:20:00"));
    assert!(stdout.contains("(female)"));
    assert!(!stdout.contains("(male)"));
    assert!(stdout.contains("0.8 - 1.1× Bodyweight"));
}

#[test]
fn test_one_rep_max() {
    let v = json(&["one-rep-max", "--weight", "100", "--reps", "5", "--target-reps", "10"]);
    assert_eq!(v["oneRepMax"], 112.5);
    // 112.5 * 27 / 36
    assert_eq!(v["targetWeight"], 84.375);
}
