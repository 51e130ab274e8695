//! Centralized action system
//!
//! Every user-triggerable operation is one variant here and one arm in
//! [`App::execute`]. Keys map to actions in `keybindings.rs`.

use super::App;
use super::state::AppResult;

/// All actions that can be triggered from the keyboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // =========================================================================
    // Effect
    // =========================================================================
    ToggleDebug,
    UseProcedural,
    Quit,

    // =========================================================================
    // Text prompt
    // =========================================================================
    OpenPrompt,
    SubmitPrompt,
    CancelPrompt,
    Backspace,
    Paste,
    InsertChar(char),
}

impl App {
    /// Execute an action and return whether a redraw is needed
    pub fn execute(&mut self, action: Action) -> AppResult {
        match action {
            Action::ToggleDebug => {
                self.effect.toggle_debug();
                AppResult::Redraw
            }
            Action::UseProcedural => {
                self.effect.use_procedural(&mut self.surface);
                AppResult::Redraw
            }
            Action::Quit => AppResult::Exit,

            Action::OpenPrompt => self.open_prompt(),
            Action::SubmitPrompt => self.submit_prompt(),
            Action::CancelPrompt => self.cancel_prompt(),
            Action::Backspace => self.prompt_backspace(),
            Action::Paste => self.prompt_paste(),
            Action::InsertChar(ch) => self.prompt_insert(ch),
        }
    }
}
