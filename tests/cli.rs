use std::process::Command;

use tempfile::tempdir;

const GOLDEN_CONTENT: &[u8] = b"chaotic lava lamp capture, frame 0001";

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_chaotic-seed"))
}

#[test]
fn test_generate_prints_golden_value() {
    let dir = tempdir().unwrap();
    let image = dir.path().join("lava.jpg");
    std::fs::write(&image, GOLDEN_CONTENT).unwrap();

    let output = bin()
        .args(["generate", "--low", "0", "--high", "2147483647", "--count", "1", "--image"])
        .arg(&image)
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "784561459");
}

#[test]
fn test_generate_from_config_file() {
    let dir = tempdir().unwrap();
    let image = dir.path().join("lava.jpg");
    std::fs::write(&image, GOLDEN_CONTENT).unwrap();
    let config = dir.path().join("seed.toml");
    std::fs::write(
        &config,
        format!(
            "[source]\npath = {:?}\n\n[sequence]\nlow = 0\nhigh = 100\ncount = 5\n",
            image.display().to_string()
        ),
    )
    .unwrap();

    let output = bin().arg("--config").arg(&config).arg("generate").output().unwrap();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let values: Vec<i64> = String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|line| line.parse().unwrap())
        .collect();
    assert_eq!(values, vec![36, 22, 35, 83, 80]);
}

#[test]
fn test_explicit_seed_needs_no_image() {
    let output = bin()
        .args([
            "generate",
            "--seed",
            "1426106817587587437406199911688411345139816069088",
            "--low",
            "0",
            "--high",
            "2147483647",
            "--count",
            "1",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "784561459");
}

#[test]
fn test_seed_command_prints_digest() {
    let dir = tempdir().unwrap();
    let image = dir.path().join("lava.jpg");
    std::fs::write(&image, GOLDEN_CONTENT).unwrap();

    let output = bin().arg("seed").arg("--image").arg(&image).output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("f9ccd7655bc00491a98bc8b3a59ac87c19f1f7e0"));
    assert!(stdout.contains("1426106817587587437406199911688411345139816069088"));
}

#[test]
fn test_missing_image_fails() {
    let dir = tempdir().unwrap();

    let output = bin()
        .args(["generate", "--low", "0", "--high", "10", "--count", "1", "--image"])
        .arg(dir.path().join("perro.jpg"))
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("entropy unavailable"), "stderr: {}", stderr);
}

#[test]
fn test_invalid_range_fails() {
    let output = bin()
        .args(["generate", "--seed", "42", "--low", "10", "--high", "10", "--count", "1"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid range"));
}

#[test]
fn test_negative_bounds_accepted() {
    let output = bin()
        .args(["generate", "--seed", "0x01", "--low", "-5", "--high", "-4", "--count", "3"])
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "-5\n-5\n-5\n");
}

#[test]
fn test_inspect_flags_blank_frame() {
    let dir = tempdir().unwrap();
    let image = dir.path().join("blank.jpg");
    std::fs::write(&image, vec![0u8; 4096]).unwrap();

    let output = bin().arg("inspect").arg("--image").arg(&image).output().unwrap();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("entropy:        0.0000 bits/byte"), "stdout: {}", stdout);
    assert!(stdout.contains("longest run:    4096"), "stdout: {}", stdout);
    assert!(stdout.contains("verdict:        degenerate (entropy"), "stdout: {}", stdout);
}
