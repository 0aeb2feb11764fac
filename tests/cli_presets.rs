use std::process::Command;

fn run_cli(args: &[&str]) -> String {
    let output = Command::new(env!("CARGO_BIN_EXE_solar-plant-sim"))
        .args(args)
        .output()
        .expect("solar-plant-sim process should run");

    assert!(
        output.status.success(),
        "run failed for {args:?}: stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout should be valid UTF-8")
}

fn parse_metric(stdout: &str, label: &str) -> f64 {
    let line = stdout
        .lines()
        .find(|line| line.trim_start().starts_with(label))
        .unwrap_or_else(|| panic!("missing line `{label}` in output: {stdout}"));

    let raw = line
        .split_once(':')
        .map(|(_, right)| right.trim())
        .unwrap_or_else(|| panic!("invalid format for line `{line}`"));

    let numeric = raw.split_whitespace().next().unwrap_or(raw);
    numeric
        .parse::<f64>()
        .unwrap_or_else(|_| panic!("failed parsing `{numeric}` from line `{line}`"))
}

#[test]
fn presets_run_via_cli_and_produce_distinct_profiles() {
    let uniform = run_cli(&["--preset", "uniform", "--quiet"]);
    let fan = run_cli(&["--preset", "fan", "--quiet"]);

    let uniform_cv = parse_metric(&uniform, "Flatness (CV):");
    let fan_cv = parse_metric(&fan, "Flatness (CV):");
    assert!(
        fan_cv < uniform_cv,
        "expected fan to be flatter: fan={fan_cv:.4}, uniform={uniform_cv:.4}"
    );
}

#[test]
fn verbose_run_prints_layout_and_samples() {
    let out = run_cli(&["--preset", "fan"]);
    assert!(out.contains("Plant layout:"));
    assert_eq!(out.lines().filter(|l| l.contains("panel area")).count(), 10 + 4);
    assert!(out.lines().filter(|l| l.starts_with("step=")).count() >= 17);
    assert!(out.contains("--- Profile Report ---"));
}

#[test]
fn optimize_prints_second_report() {
    let out = run_cli(&["--preset", "uniform", "--optimize", "--iterations", "50", "--quiet"]);
    assert!(out.contains("--- Optimized Layout ---"));
    assert_eq!(out.matches("--- Profile Report ---").count(), 2);
}

#[test]
fn csv_export_writes_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("sweep.csv");
    let path_str = path.to_str().expect("utf-8 path");
    run_cli(&["--preset", "default", "--quiet", "--csv-out", path_str]);

    let content = std::fs::read_to_string(&path).expect("csv written");
    assert!(content.starts_with("step,source_angle_rad"));
}

#[test]
fn unknown_preset_fails() {
    let output = Command::new(env!("CARGO_BIN_EXE_solar-plant-sim"))
        .args(["--preset", "bogus"])
        .output()
        .expect("solar-plant-sim process should run");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown preset"));
}
