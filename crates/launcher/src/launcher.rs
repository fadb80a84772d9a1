use std::path::PathBuf;

use log::debug;

use crate::{
    dialog::ErrorDialog,
    spawn::spawn_detached,
    target::{self, TARGET_EXECUTABLE},
};

pub const ERROR_TITLE: &str = "Error Starting Minesweeper";

/// How a single launch attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Succeeded { pid: u32 },
    /// The user has already acknowledged the error dialog by the time this is returned.
    Failed { message: String },
}

pub struct Launcher {
    program: PathBuf,
}

impl Launcher {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn minesweeper() -> Self {
        Self::new(target::resolve(TARGET_EXECUTABLE))
    }

    /// Makes one attempt to start the program. A failure is shown to the user through `dialog`, exactly once, and
    /// this returns only after they dismiss it.
    pub fn run(&self, dialog: &impl ErrorDialog) -> Outcome {
        debug!("Launching {}", self.program.display());
        match spawn_detached(&self.program) {
            Ok(pid) => Outcome::Succeeded { pid },
            Err(err) => {
                let message = err.to_string();
                debug!("Could not start {}: {message}", err.program().display());
                dialog.show_error(ERROR_TITLE, &message);
                Outcome::Failed { message }
            }
        }
    }
}
