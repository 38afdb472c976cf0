use std::time::Instant;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::{App, Focus};

impl App {
    /// Handle a key press event
    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        if self.handle_global_keys(key) {
            return;
        }

        match self.focus {
            Focus::Entry => self.handle_entry_key(key, now),
            Focus::ResultsList => self.handle_list_key(key),
        }
    }

    /// Keys that work regardless of focus. Returns true when handled.
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                true
            }
            KeyCode::Esc => {
                if self.dropdown.is_open {
                    self.on_escape();
                } else {
                    self.should_quit = true;
                }
                true
            }
            _ => false,
        }
    }

    fn handle_entry_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Down => {
                // Step into the list at the top; no-op without results
                if self.dropdown_visible() && self.dropdown.enter_list(self.search.results.len()) {
                    self.sync_active();
                }
            }
            // Single-line entry: Enter and Up have no meaning here
            KeyCode::Enter | KeyCode::Up => {}
            _ => {
                if self.entry.textarea.input(key) {
                    self.on_text_changed(now);
                }
            }
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Down => {
                if self.dropdown.move_down(self.search.results.len()) {
                    self.sync_active();
                }
            }
            KeyCode::Up => {
                if self.dropdown.move_up() {
                    self.sync_active();
                }
            }
            KeyCode::Enter => {
                if let Some(index) = self.dropdown.active() {
                    self.select_result(index);
                }
            }
            _ => {}
        }
    }
}
