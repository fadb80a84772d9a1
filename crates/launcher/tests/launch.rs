#![cfg(unix)]

use std::{
    fs,
    os::unix::fs::PermissionsExt,
    process::Command,
    thread,
    time::{Duration, Instant},
};

use minesweeper_launcher::target::TARGET_EXECUTABLE;

#[test]
fn launches_game_from_current_directory_ignoring_arguments() {
    let dir = tempfile::tempdir().unwrap();
    let game = dir.path().join(TARGET_EXECUTABLE);
    fs::write(&game, "#!/bin/sh\ntouch launched\n").unwrap();
    fs::set_permissions(&game, fs::Permissions::from_mode(0o755)).unwrap();

    let status = Command::new(env!("CARGO_BIN_EXE_minesweeper-launcher"))
        .args(["--foo", "bar"])
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .status()
        .unwrap();
    assert!(status.success());

    // The game runs detached, so give it a moment to leave its marker behind.
    let marker = dir.path().join("launched");
    let deadline = Instant::now() + Duration::from_secs(10);
    while !marker.exists() && Instant::now() < deadline {
        thread::sleep(Duration::from_millis(20));
    }
    assert!(marker.exists());
}
