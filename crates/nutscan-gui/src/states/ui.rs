use std::path::PathBuf;

/// UI-only state that the core [`Session`](nutscan_core::session::Session)
/// does not track.
#[derive(Default)]
pub struct UIState {
    /// Log messages.
    pub log_messages: Vec<String>,
    /// Most recent snapshot written by the export action.
    pub last_export: Option<PathBuf>,
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }
}
