pub mod dialog;
pub mod error;
pub mod launcher;
pub mod spawn;
pub mod target;

pub use launcher::{ERROR_TITLE, Launcher, Outcome};
