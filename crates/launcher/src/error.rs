use std::path::{Path, PathBuf};

use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum LaunchError {
    /// Any failure while creating the child process. The message is the OS diagnostic, unchanged.
    #[snafu(display("{source}"))]
    ProcessStartFailure {
        program: PathBuf,
        source: std::io::Error,
    },
}

impl LaunchError {
    pub fn program(&self) -> &Path {
        match self {
            Self::ProcessStartFailure { program, .. } => program,
        }
    }
}
