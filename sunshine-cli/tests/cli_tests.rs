use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;

// Monday 2015-06-08 00:00:00 UTC
const MONDAY: i64 = 1_433_721_600_000;
const DAY: i64 = 86_400_000;

/// Temp dir holding a forecast file and a (not yet written) config path.
fn create_cli_test_environment() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temporary directory");

    let entries = json!([
        {
            "location": "94043",
            "coord_lat": 37.3861,
            "coord_long": -122.0839,
            "condition_code": 500,
            "date_epoch_millis": MONDAY + DAY,
            "short_description": "Light rain",
            "max_temp_c": 18.0,
            "min_temp_c": 11.0,
            "wind_speed_mps": 10.0,
            "wind_direction_deg": 180.0
        },
        {
            "location": "94043",
            "coord_lat": 37.3861,
            "coord_long": -122.0839,
            "condition_code": 800,
            "date_epoch_millis": MONDAY,
            "short_description": "Clear",
            "max_temp_c": 21.5,
            "min_temp_c": 12.0,
            "wind_speed_mps": 4.0,
            "wind_direction_deg": 0.0
        },
        {
            "location": "Kyiv",
            "coord_lat": 50.45,
            "coord_long": 30.52,
            "condition_code": 999,
            "date_epoch_millis": MONDAY,
            "short_description": "Odd",
            "max_temp_c": 1.0,
            "min_temp_c": 0.0,
            "wind_speed_mps": 1.0,
            "wind_direction_deg": 300.0
        }
    ]);

    std::fs::write(dir.path().join("forecast.json"), entries.to_string())
        .expect("Failed to write forecast file");
    dir
}

fn sunshine_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("sunshine").expect("Failed to find sunshine binary");
    cmd.env("RUST_LOG", "off")
        .arg("--config")
        .arg(dir.path().join("config.toml"));
    cmd
}

fn forecast_file(dir: &TempDir) -> String {
    dir.path().join("forecast.json").to_string_lossy().into_owned()
}

#[test]
fn test_cli_show_default_preferences() {
    let dir = create_cli_test_environment();

    sunshine_cmd(&dir)
        .args(["show", "--file", &forecast_file(&dir), "--now", &MONDAY.to_string()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Forecast for 94043"))
        .stdout(predicate::str::contains("[art_clear]"))
        .stdout(predicate::str::contains("Today, June 08"))
        .stdout(predicate::str::contains("22° / 12°"))
        .stdout(predicate::str::contains("[ic_rain]"))
        .stdout(predicate::str::contains("Tuesday"))
        .stdout(predicate::str::contains("Light rain"));
}

#[test]
fn test_cli_show_imperial_uk_ru() {
    let dir = create_cli_test_environment();

    sunshine_cmd(&dir)
        .args([
            "show",
            "--file",
            &forecast_file(&dir),
            "--now",
            &MONDAY.to_string(),
            "--units",
            "imperial",
            "--locale",
            "uk_ru",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Today, 08 June"))
        .stdout(predicate::str::contains("71° / 54°"))
        .stdout(predicate::str::contains("rain"));
}

#[test]
fn test_cli_show_uses_config_file() {
    let dir = create_cli_test_environment();
    let config = format!(
        "location = \"Kyiv\"\nuse_today_layout = false\ndata_file = {:?}\n",
        forecast_file(&dir)
    );
    std::fs::write(dir.path().join("config.toml"), config).unwrap();

    sunshine_cmd(&dir)
        .args(["show", "--now", &MONDAY.to_string()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Forecast for Kyiv"))
        .stdout(predicate::str::contains("[unknown]"))
        .stdout(predicate::str::contains("Odd"));
}

#[test]
fn test_cli_show_without_data_file_hints() {
    let dir = create_cli_test_environment();

    sunshine_cmd(&dir)
        .args(["show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No forecast data file given"));
}

#[test]
fn test_cli_detail_prints_wind_and_compass() {
    let dir = create_cli_test_environment();

    sunshine_cmd(&dir)
        .args(["detail", "1", "--file", &forecast_file(&dir), "--now", &MONDAY.to_string()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tomorrow, June 09"))
        .stdout(predicate::str::contains("High: 18°  Low: 11°"))
        .stdout(predicate::str::contains("Wind: 10 km/h S"))
        .stdout(predicate::str::contains("needle (50.0, 100.0)"));
}

#[test]
fn test_cli_detail_out_of_range() {
    let dir = create_cli_test_environment();

    sunshine_cmd(&dir)
        .args(["detail", "7", "--file", &forecast_file(&dir), "--now", &MONDAY.to_string()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No forecast row 7"));
}

#[test]
fn test_cli_classify() {
    let dir = create_cli_test_environment();

    sunshine_cmd(&dir)
        .args(["classify", "800"])
        .assert()
        .success()
        .stdout(predicate::str::contains("800: Clear (icon: ic_clear, art: art_clear"));

    sunshine_cmd(&dir)
        .args(["classify", "999"])
        .assert()
        .success()
        .stdout(predicate::str::contains("999: not found"));
}

#[test]
fn test_cli_map() {
    let dir = create_cli_test_environment();

    sunshine_cmd(&dir)
        .args(["map", "--file", &forecast_file(&dir)])
        .assert()
        .success()
        .stdout(predicate::str::contains("geo:37.3861,-122.0839"));
}
