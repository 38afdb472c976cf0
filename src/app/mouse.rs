//! Mouse handling
//!
//! Routes pointer presses to the component under them. A press outside both
//! widget regions is the dismissal signal: the dropdown closes immediately
//! and focus stays wherever the press put it.

use ratatui::crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::state::{App, Focus};
use crate::layout::Region;

impl App {
    /// Handle a mouse event (only left presses are meaningful)
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        match self.regions.region_at(mouse.column, mouse.row) {
            Some(Region::Entry) => {
                self.focus = Focus::Entry;
            }
            Some(Region::Dropdown) => {
                if let Some(row) = self.regions.list_row_at(mouse.column, mouse.row) {
                    let index = self.scroll.offset + row;
                    if index < self.search.results.len() {
                        self.select_result(index);
                    }
                }
            }
            None => {
                if self.dropdown.is_open {
                    self.on_dismiss();
                }
            }
        }
    }
}
