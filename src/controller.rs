use std::time::Duration;

use ratatui::crossterm::event::{self, Event, KeyCode};
use tracing::trace;

use crate::domain::{BoardConfig, BoardError, Message, Page};
use crate::model::Model;

pub struct Controller {
    event_poll_ms: u64,
}

impl Controller {
    pub fn new(cfg: &BoardConfig) -> Self {
        Self {
            event_poll_ms: cfg.event_poll_ms,
        }
    }

    pub fn handle_event(&self, model: &Model) -> Result<Option<Message>, BoardError> {
        if event::poll(Duration::from_millis(self.event_poll_ms))?
            && let Event::Key(key) = event::read()?
            && key.kind == event::KeyEventKind::Press
        {
            return Ok(self.handle_key(model, key));
        }
        Ok(None)
    }

    fn handle_key(&self, model: &Model, key: event::KeyEvent) -> Option<Message> {
        // While a prompt is open it consumes every keystroke
        if model.raw_keyevents() {
            return Some(Message::RawKey(key));
        }
        let message = match key.code {
            KeyCode::Char('q') => Some(Message::Quit),
            KeyCode::Char('?') => Some(Message::Help),
            KeyCode::Esc => Some(Message::Exit),
            KeyCode::Char('1') => Some(Message::ShowPage(Page::Dashboard)),
            KeyCode::Char('2') => Some(Message::ShowPage(Page::Retention)),
            KeyCode::Char('3') => Some(Message::ShowPage(Page::Lookup)),
            KeyCode::Char('4') => Some(Message::ShowPage(Page::Reports)),
            KeyCode::Up | KeyCode::Char('k') => Some(Message::MoveUp),
            KeyCode::Down | KeyCode::Char('j') => Some(Message::MoveDown),
            KeyCode::Left | KeyCode::Char('h') => Some(Message::MoveLeft),
            KeyCode::Right | KeyCode::Char('l') => Some(Message::MoveRight),
            KeyCode::Char('s') => Some(Message::SortByCursor),
            KeyCode::Char(' ') => Some(Message::ToggleSelect),
            KeyCode::Char('A') => Some(Message::ToggleSelectAll),
            KeyCode::Char('a') => Some(Message::CycleAccountType),
            KeyCode::Char('g') => Some(Message::CycleAgeBand),
            KeyCode::Char('t') => Some(Message::CycleTenureBand),
            KeyCode::Char('r') => Some(Message::CycleRiskBand),
            KeyCode::Char('c') => Some(Message::ClearFilters),
            KeyCode::Char('/') => Some(Message::Search),
            KeyCode::Char('e') => Some(Message::CopyExport),
            KeyCode::Char('w') => Some(Message::WriteExport),
            _ => None,
        };
        trace!("Mapped: {key:?} => {message:?}");
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::crossterm::event::{KeyEvent, KeyModifiers};

    fn controller() -> Controller {
        Controller::new(&BoardConfig::default())
    }

    fn model() -> Model {
        Model::init(&BoardConfig::default()).unwrap()
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn page_and_action_keys_map() {
        let c = controller();
        let m = model();
        assert_eq!(c.handle_key(&m, press(KeyCode::Char('q'))), Some(Message::Quit));
        assert_eq!(
            c.handle_key(&m, press(KeyCode::Char('2'))),
            Some(Message::ShowPage(Page::Retention))
        );
        assert_eq!(
            c.handle_key(&m, press(KeyCode::Char('4'))),
            Some(Message::ShowPage(Page::Reports))
        );
        assert_eq!(c.handle_key(&m, press(KeyCode::Char('s'))), Some(Message::SortByCursor));
        assert_eq!(c.handle_key(&m, press(KeyCode::Char(' '))), Some(Message::ToggleSelect));
        assert_eq!(c.handle_key(&m, press(KeyCode::Char('x'))), None);
    }

    #[test]
    fn open_prompt_captures_raw_keys() {
        let c = controller();
        let mut m = model();
        m.update(Message::Search).unwrap();
        let key = press(KeyCode::Char('q'));
        assert_eq!(c.handle_key(&m, key), Some(Message::RawKey(key)));
    }
}
