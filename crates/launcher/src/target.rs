//! Locating the executable to launch.

use std::{
    env,
    path::{Path, PathBuf},
};

use log::trace;

/// The game executable, looked up by bare name.
#[cfg(windows)]
pub const TARGET_EXECUTABLE: &str = "minesweeper-rs.exe";
#[cfg(not(windows))]
pub const TARGET_EXECUTABLE: &str = "minesweeper-rs";

/// Resolves a bare executable name the way a shell launch would: the current directory first, then the directory
/// the launcher lives in. On Unix a candidate must have an execute bit set. If neither has it, the bare name is returned unchanged and process creation falls back to
/// searching `PATH`.
pub fn resolve(name: &str) -> PathBuf {
    let cwd = env::current_dir().ok();
    let exe_dir = env::current_exe()
        .ok()
        .and_then(|mut path| path.pop().then_some(path));

    resolve_in([cwd.as_deref(), exe_dir.as_deref()].into_iter().flatten(), name)
}

fn resolve_in<'a>(dirs: impl IntoIterator<Item = &'a Path>, name: &str) -> PathBuf {
    for dir in dirs {
        let candidate = dir.join(name);
        if is_executable(&candidate) {
            trace!("Found {name} at {}", candidate.display());
            return candidate;
        }
    }

    trace!("{name} not found locally; deferring to PATH");
    PathBuf::from(name)
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .is_ok_and(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
