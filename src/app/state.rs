//! Application state types

/// Result type for application actions that may trigger UI updates
#[must_use = "Handle the AppResult to ensure the UI updates correctly"]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppResult {
    /// No action needed
    Ok,
    /// UI needs to be redrawn
    Redraw,
    /// Stop the frame driver and close the window
    Exit,
}

impl AppResult {
    pub fn needs_redraw(&self) -> bool {
        matches!(self, AppResult::Redraw)
    }

    pub fn should_exit(&self) -> bool {
        matches!(self, AppResult::Exit)
    }
}
