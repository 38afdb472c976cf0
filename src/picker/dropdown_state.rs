//! Dropdown open/active state
//!
//! Coordinates the hand-off between the entry line and the result list.
//! The active row is a plain index into the current result vector; anything
//! that replaces the results must reset it, since positions are the only
//! link between the two.

/// Open/closed state and active row of the result dropdown
#[derive(Debug, Clone, Copy, Default)]
pub struct DropdownState {
    pub is_open: bool,
    /// Highlighted row; `None` means the entry line still has the action
    active: Option<usize>,
}

impl DropdownState {
    pub fn new() -> Self {
        Self {
            is_open: false,
            active: None,
        }
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Open without touching the active row (typing keeps the list passive)
    pub fn open(&mut self) {
        self.is_open = true;
    }

    /// Close and deactivate; used by Escape, dismissal, and selection alike
    pub fn close(&mut self) {
        self.is_open = false;
        self.active = None;
    }

    /// Drop the highlight, e.g. when the result set was replaced
    pub fn reset_active(&mut self) {
        self.active = None;
    }

    /// Down pressed on the entry line: step into the list at the top.
    /// No-op when there is nothing to step into. Returns true when the
    /// active row changed.
    pub fn enter_list(&mut self, len: usize) -> bool {
        if len == 0 || self.active.is_some() {
            return false;
        }
        self.active = Some(0);
        true
    }

    /// Move the highlight down one row, stopping at the last row
    pub fn move_down(&mut self, len: usize) -> bool {
        let Some(current) = self.active else {
            return false;
        };
        if len == 0 {
            self.active = None;
            return true;
        }
        let next = (current + 1).min(len - 1);
        if next == current {
            return false;
        }
        self.active = Some(next);
        true
    }

    /// Move the highlight up one row, stopping at the first row
    pub fn move_up(&mut self) -> bool {
        let Some(current) = self.active else {
            return false;
        };
        if current == 0 {
            return false;
        }
        self.active = Some(current - 1);
        true
    }
}

#[cfg(test)]
#[path = "dropdown_state_tests.rs"]
mod dropdown_state_tests;
