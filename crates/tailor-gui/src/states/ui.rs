use std::path::PathBuf;

/// Overall UI state that is not part of the design itself.
#[derive(Default)]
pub struct UIState {
    /// Directory of the last imported file, used to seed the next picker.
    pub last_import_dir: Option<PathBuf>,

    /// Log messages.
    pub log_messages: Vec<String>,

    pub show_about: bool,
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }
}
