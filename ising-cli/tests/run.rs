use std::process::Command;

fn ising() -> Command {
    Command::new(env!("CARGO_BIN_EXE_ising"))
}

#[test]
fn run_writes_csv() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("results.csv");

    let status = ising()
        .args([
            "-q", "run", "-n", "4", "--n-temps", "5", "--eq-steps", "10", "--mc-steps", "20",
            "--t-start", "1.0", "--t-end", "3.0", "--no-progress", "-o",
        ])
        .arg(&out)
        .status()
        .unwrap();
    assert!(status.success());

    let text = std::fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 6);
    assert!(lines[0].starts_with("temperature,energy,magnetization"));
    assert!(lines[1].starts_with("1.0,"));
    assert!(lines[5].starts_with("3.0,"));
}

#[test]
fn run_reads_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = dir.path().join("ising.toml");
    std::fs::write(
        &cfg,
        "lattice-size = 3\nn-temps = 2\neq-steps = 0\nmc-steps = 1\nt-start = 2.0\nt-end = 4.0\n",
    )
    .unwrap();

    let output = ising()
        .args(["-q", "run", "--no-progress", "-c"])
        .arg(&cfg)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 3);
    assert!(stdout.contains("2.0000"));
    assert!(stdout.contains("4.0000"));
}

#[test]
fn invalid_range_exits_with_error() {
    let output = ising()
        .args([
            "-q", "run", "--no-progress", "--t-start", "3.0", "--t-end", "1.0",
        ])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("t_start must be < t_end"), "{stderr}");
}

#[test]
fn overflowing_sweep_count_exits_with_error() {
    let output = ising()
        .args([
            "-q",
            "run",
            "--no-progress",
            "--eq-steps",
            "18446744073709551615",
        ])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("total sweep count overflows"), "{stderr}");
    assert!(!stderr.contains("panicked"), "{stderr}");
}
