//! Single-line prompt for the text submitted to the field

#[derive(Debug, Clone, Default)]
pub struct TextPrompt {
    text: String,
}

impl TextPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn insert_char(&mut self, ch: char) {
        if ch.is_control() {
            return;
        }
        self.text.push(ch);
    }

    /// Paste, flattening line breaks to spaces
    pub fn insert_str(&mut self, s: &str) {
        for ch in s.chars() {
            match ch {
                '\n' | '\r' | '\t' => self.text.push(' '),
                c => self.insert_char(c),
            }
        }
    }

    pub fn backspace(&mut self) {
        self.text.pop();
    }

    /// Line shown on screen, with a trailing caret
    pub fn display(&self) -> String {
        format!("text> {}_", self.text)
    }

    pub fn into_text(self) -> String {
        self.text
    }
}
