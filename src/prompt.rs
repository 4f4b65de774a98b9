use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::trace;

// Single line editor for the search prompts. Cursor position is in chars.
#[derive(Default)]
pub struct Prompt {
    buffer: String,
    cursor: usize,
    finished: bool,
    canceled: bool,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct PromptResult {
    pub input: String,
    pub cursor: usize,
    pub finished: bool,
    pub canceled: bool,
}

impl Prompt {
    pub fn read(&mut self, key: KeyEvent) -> PromptResult {
        match (key.code, key.modifiers) {
            (KeyCode::Enter, KeyModifiers::NONE) => self.finished = true,
            (KeyCode::Esc, KeyModifiers::NONE) => {
                self.finished = true;
                self.canceled = true;
            }
            (KeyCode::Backspace, KeyModifiers::NONE) => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    let pos = self.byte_pos();
                    self.buffer.remove(pos);
                }
            }
            (KeyCode::Delete, KeyModifiers::NONE) => {
                if self.cursor < self.buffer.chars().count() {
                    let pos = self.byte_pos();
                    self.buffer.remove(pos);
                }
            }
            (KeyCode::Left, KeyModifiers::NONE) => self.cursor = self.cursor.saturating_sub(1),
            (KeyCode::Right, KeyModifiers::NONE) => {
                if self.cursor < self.buffer.chars().count() {
                    self.cursor += 1;
                }
            }
            (KeyCode::Home, KeyModifiers::NONE) => self.cursor = 0,
            (KeyCode::End, KeyModifiers::NONE) => self.cursor = self.buffer.chars().count(),
            (KeyCode::Char(chr), _) => {
                let pos = self.byte_pos();
                self.buffer.insert(pos, chr);
                self.cursor += 1;
            }
            _ => {}
        }
        trace!("Prompt: \"{}\" cursor {}", self.buffer, self.cursor);
        self.result()
    }

    pub fn seed(&mut self, s: &str) {
        self.clear();
        self.buffer = s.to_string();
        self.cursor = s.chars().count();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
        self.finished = false;
        self.canceled = false;
    }

    pub fn result(&self) -> PromptResult {
        PromptResult {
            input: self.buffer.clone(),
            cursor: self.cursor,
            finished: self.finished,
            canceled: self.canceled,
        }
    }

    fn byte_pos(&self) -> usize {
        self.buffer
            .char_indices()
            .nth(self.cursor)
            .map(|(byte_idx, _)| byte_idx)
            .unwrap_or(self.buffer.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(prompt: &mut Prompt, s: &str) {
        for c in s.chars() {
            prompt.read(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn typing_and_enter_finishes() {
        let mut p = Prompt::default();
        type_str(&mut p, "grace");
        let r = p.read(key(KeyCode::Enter));
        assert_eq!(r.input, "grace");
        assert!(r.finished);
        assert!(!r.canceled);
    }

    #[test]
    fn escape_cancels() {
        let mut p = Prompt::default();
        type_str(&mut p, "abc");
        let r = p.read(key(KeyCode::Esc));
        assert!(r.finished);
        assert!(r.canceled);
    }

    #[test]
    fn editing_in_the_middle() {
        let mut p = Prompt::default();
        type_str(&mut p, "grce");
        p.read(key(KeyCode::Left));
        p.read(key(KeyCode::Left));
        p.read(key(KeyCode::Char('a')));
        assert_eq!(p.result().input, "grace");
        p.read(key(KeyCode::Home));
        p.read(key(KeyCode::Delete));
        assert_eq!(p.result().input, "race");
        p.read(key(KeyCode::End));
        p.read(key(KeyCode::Backspace));
        assert_eq!(p.result().input, "rac");
    }

    #[test]
    fn seed_places_cursor_at_end() {
        let mut p = Prompt::default();
        p.seed("mukamana");
        assert_eq!(p.result().cursor, 8);
        p.read(key(KeyCode::Backspace));
        assert_eq!(p.result().input, "mukaman");
    }
}
