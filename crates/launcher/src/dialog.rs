use rfd::{MessageButtons, MessageDialog, MessageLevel};

/// Somewhere to report a launch failure to the user.
pub trait ErrorDialog {
    /// Presents `message` under `title` and blocks until the user acknowledges it.
    fn show_error(&self, title: &str, message: &str);
}

/// The platform's native message box, with an error icon and a single OK button.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeDialog;

impl ErrorDialog for NativeDialog {
    fn show_error(&self, title: &str, message: &str) {
        MessageDialog::new()
            .set_level(MessageLevel::Error)
            .set_title(title)
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}
