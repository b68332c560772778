use std::process::Command;

#[test]
fn help_exits_successfully() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_encaje"));
    cmd.arg("--help");

    // Act
    let output = cmd.output().expect("failed to execute encaje");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("window placement"));
    assert!(stdout.contains("init"));
    assert!(stdout.contains("start"));
}

#[test]
fn version_exits_successfully() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_encaje"));
    cmd.arg("--version");

    // Act
    let output = cmd.output().expect("failed to execute encaje");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("encaje"));
}

#[test]
fn unknown_subcommand_fails() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_encaje"));
    cmd.arg("does-not-exist");

    // Act
    let output = cmd.output().expect("failed to execute encaje");

    // Assert
    assert!(!output.status.success());
}
