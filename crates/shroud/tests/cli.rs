use std::process::Command;

#[test]
fn help_exits_successfully() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_shroud"));
    cmd.arg("--help");

    // Act
    let output = cmd.output().expect("failed to execute shroud");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("global hotkey"));
}

#[test]
fn version_exits_successfully() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_shroud"));
    cmd.arg("--version");

    // Act
    let output = cmd.output().expect("failed to execute shroud");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("shroud"));
}

#[test]
fn watch_refuses_pid_and_name_together() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_shroud"));
    cmd.args(["watch", "--pid", "1234", "--name", "notepad"]);

    // Act
    let output = cmd.output().expect("failed to execute shroud");

    // Assert — clap rejects the conflicting pair before any OS work
    assert!(!output.status.success());
}

#[cfg(windows)]
#[test]
fn list_subcommand_runs() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_shroud"));
    cmd.arg("list");

    // Act
    let output = cmd.output().expect("failed to execute shroud");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("processes found"));
}

#[cfg(windows)]
#[test]
fn hide_rejects_a_dead_pid() {
    // Arrange — PIDs are multiples of 4; this one cannot exist
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_shroud"));
    cmd.args(["hide", "4294967295"]);

    // Act
    let output = cmd.output().expect("failed to execute shroud");

    // Assert
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no running process"));
}

#[cfg(not(windows))]
#[test]
fn list_refuses_on_non_windows() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_shroud"));
    cmd.arg("list");

    // Act
    let output = cmd.output().expect("failed to execute shroud");

    // Assert
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("requires Windows"));
}
