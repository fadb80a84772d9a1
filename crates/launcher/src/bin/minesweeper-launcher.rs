#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use minesweeper_launcher::{Launcher, dialog::NativeDialog};

pub fn main() {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    // Both outcomes exit successfully; a failure has already been shown to the user.
    let outcome = Launcher::minesweeper().run(&NativeDialog);
    log::debug!("{outcome:?}");
}
