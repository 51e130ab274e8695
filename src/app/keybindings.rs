//! Keyboard shortcut registry
//!
//! Maps keyboard input to Actions. Bindings depend on whether the text prompt
//! is open: while it is, printable keys edit the prompt instead of triggering
//! shortcuts.

use super::action::Action;

/// Modifier key state
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Self::default()
        }
    }
}

/// Represents a key that can be pressed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Escape,
    Enter,
    Backspace,
    Space,
}

/// A keyboard input event (key + modifiers)
#[derive(Debug, Clone)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }
}

/// Resolve a key event to an action.
///
/// Returns None if the key event doesn't map to any action.
pub fn resolve(event: &KeyEvent, prompt_open: bool) -> Option<Action> {
    if prompt_open {
        resolve_prompt(event)
    } else {
        resolve_effect(event)
    }
}

fn resolve_effect(event: &KeyEvent) -> Option<Action> {
    let Modifiers { ctrl, alt, .. } = event.modifiers;
    match &event.key {
        Key::Escape => Some(Action::Quit),
        Key::Enter => Some(Action::OpenPrompt),
        Key::Char(_) if ctrl || alt => None,
        Key::Char(c) => match c.to_ascii_lowercase() {
            'd' => Some(Action::ToggleDebug),
            't' => Some(Action::OpenPrompt),
            'p' => Some(Action::UseProcedural),
            _ => None,
        },
        _ => None,
    }
}

fn resolve_prompt(event: &KeyEvent) -> Option<Action> {
    let Modifiers { ctrl, alt, .. } = event.modifiers;
    match &event.key {
        Key::Escape => Some(Action::CancelPrompt),
        Key::Enter => Some(Action::SubmitPrompt),
        Key::Backspace => Some(Action::Backspace),
        Key::Space if !ctrl && !alt => Some(Action::InsertChar(' ')),
        Key::Char(c) if ctrl && c.eq_ignore_ascii_case(&'v') => Some(Action::Paste),
        Key::Char(c) if !ctrl && !alt => Some(Action::InsertChar(*c)),
        _ => None,
    }
}
