use std::{path::Path, process::Command};

use log::debug;
use snafu::ResultExt;

use crate::error::{LaunchError, ProcessStartFailureSnafu};

#[cfg(windows)]
const CREATE_NO_WINDOW: u32 = 0x08000000;

/// Starts `program` with no arguments and the launcher's own environment, working directory and standard handles.
/// On Windows the child is created without a console window. Returns the child's process ID; the child is neither
/// waited on nor killed.
pub fn spawn_detached(program: &Path) -> Result<u32, LaunchError> {
    let mut command = Command::new(program);

    #[cfg(windows)]
    {
        use std::os::windows::process::CommandExt;
        command.creation_flags(CREATE_NO_WINDOW);
    }

    let child = command
        .spawn()
        .context(ProcessStartFailureSnafu { program })?;
    let pid = child.id();
    debug!("Started {} (pid {pid})", program.display());

    // Dropping a `Child` leaves the process running.
    drop(child);
    Ok(pid)
}
