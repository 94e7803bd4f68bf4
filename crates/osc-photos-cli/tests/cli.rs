use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn osc_photos(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_osc-photos"))
        .current_dir(dir)
        .args(args)
        .output()
        .unwrap()
}

fn dump(n: usize) -> String {
    let photos: Vec<Value> = (0..n)
        .map(|i| {
            json!({
                "id": i.to_string(),
                "lat": 46.5 + i as f64 / 1000.0,
                "lng": 23.5,
                "heading": 90,
                "shot_date": format!("2017-05-02 10:00:{:02}", i % 60)
            })
        })
        .collect();
    json!({ "status": {"apiCode": "600"}, "photos": photos }).to_string()
}

#[test]
fn writes_prefixed_outputs_in_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("osc.json"), dump(3)).unwrap();

    let out = osc_photos(dir.path(), &["osc.json"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let extracted: Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("extracted_osc.json")).unwrap())
            .unwrap();
    assert_eq!(extracted.as_object().unwrap().len(), 1);
    assert_eq!(extracted["photos"].as_array().unwrap().len(), 3);

    let cleaned: Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("cleaned_osc.json")).unwrap())
            .unwrap();
    assert_eq!(
        cleaned["photos"][0],
        json!({"lat": 46.5, "lng": 23.5, "heading": 90, "shot_date": "2017-05-02 10:00:00"})
    );
}

#[test]
fn legacy_mode_fails_on_short_dump() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("osc.json"), dump(5)).unwrap();

    let out = osc_photos(dir.path(), &["--legacy", "osc.json"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("expected 7847 photo records, found only 5"), "{stderr}");
    assert!(!dir.path().join("extracted_osc.json").exists());
    assert!(!dir.path().join("cleaned_osc.json").exists());
}

#[test]
fn missing_input_exits_non_zero() {
    let dir = tempfile::tempdir().unwrap();
    let out = osc_photos(dir.path(), &["absent.json"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("absent.json"));
}

#[test]
fn stats_are_printed_on_request() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("osc.json"), dump(2)).unwrap();

    let out = osc_photos(dir.path(), &["--stats", "--expect", "2", "osc.json"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Records: 2"), "{stdout}");
    assert!(stdout.contains("First shot: 2017-05-02 10:00:00"), "{stdout}");
}
