//! Application state and coordination

mod action;
pub mod keybindings;
mod prompt;
mod state;

use arboard::Clipboard;
use flow_field::config::rendering::{PROMPT_FONT_SIZE, PROMPT_MARGIN};
use flow_field::effect::snap_dimension;
use flow_field::{Effect, Settings, Surface};

use crate::renderer::CanvasSurface;

use prompt::TextPrompt;
pub use state::AppResult;

pub struct App {
    surface: CanvasSurface,
    effect: Effect,
    prompt: Option<TextPrompt>,
    clipboard: Option<Clipboard>,
}

impl App {
    pub fn new(
        gl_renderer: femtovg::renderer::OpenGl,
        width: u32,
        height: u32,
        settings: Settings,
    ) -> Self {
        let mut surface =
            CanvasSurface::new(gl_renderer, snap_dimension(width), snap_dimension(height));
        let effect = Effect::new(&mut surface, settings);
        let clipboard = Clipboard::new().ok();

        Self {
            surface,
            effect,
            prompt: None,
            clipboard,
        }
    }

    // =========================================================================
    // Core lifecycle
    // =========================================================================

    pub fn resize(&mut self, width: u32, height: u32) {
        self.surface
            .set_size(snap_dimension(width), snap_dimension(height));
        self.effect.resize(&mut self.surface);
    }

    /// Draw one frame and advance the effect
    pub fn render(&mut self) {
        self.effect.tick(&mut self.surface);

        if let Some(prompt) = &self.prompt {
            let y = self.surface.height() as f32 - PROMPT_MARGIN;
            self.surface
                .draw_label(PROMPT_MARGIN, y, &prompt.display(), PROMPT_FONT_SIZE, (255, 255, 255));
        }

        self.surface.flush();
    }

    pub fn prompt_open(&self) -> bool {
        self.prompt.is_some()
    }

    // =========================================================================
    // Text prompt
    // =========================================================================

    fn open_prompt(&mut self) -> AppResult {
        self.prompt = Some(TextPrompt::new());
        AppResult::Redraw
    }

    fn cancel_prompt(&mut self) -> AppResult {
        self.prompt = None;
        AppResult::Redraw
    }

    fn submit_prompt(&mut self) -> AppResult {
        let Some(prompt) = self.prompt.take() else {
            return AppResult::Ok;
        };
        let text = prompt.into_text();
        if !self.effect.submit_text(&mut self.surface, &text) {
            // keep the prompt open so the user can type something
            self.prompt = Some(TextPrompt::new());
        }
        AppResult::Redraw
    }

    /// Submit text given on the command line
    pub fn submit_text(&mut self, text: &str) {
        let _ = self.effect.submit_text(&mut self.surface, text);
    }

    fn prompt_insert(&mut self, ch: char) -> AppResult {
        match &mut self.prompt {
            Some(prompt) => {
                prompt.insert_char(ch);
                AppResult::Redraw
            }
            None => AppResult::Ok,
        }
    }

    fn prompt_backspace(&mut self) -> AppResult {
        match &mut self.prompt {
            Some(prompt) => {
                prompt.backspace();
                AppResult::Redraw
            }
            None => AppResult::Ok,
        }
    }

    fn prompt_paste(&mut self) -> AppResult {
        let (Some(prompt), Some(clipboard)) = (&mut self.prompt, &mut self.clipboard) else {
            return AppResult::Ok;
        };
        match clipboard.get_text() {
            Ok(text) => {
                prompt.insert_str(&text);
                AppResult::Redraw
            }
            Err(err) => {
                log::debug!("Clipboard read failed: {err}");
                AppResult::Ok
            }
        }
    }
}
