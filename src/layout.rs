//! Widget region tracking for position-aware mouse interaction
//!
//! Rendering records where the entry line and the dropdown landed;
//! `region_at` answers which component a pointer press hit. A press that
//! hits neither region is the dismissal signal.

use ratatui::layout::{Position, Rect};

/// Widget component at a screen position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Entry,
    Dropdown,
}

/// Screen rectangles of the widget, refreshed on every render
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutRegions {
    pub entry: Rect,
    /// Outer dropdown rect (with borders); `None` while the dropdown is
    /// not rendered
    pub dropdown: Option<Rect>,
    /// Inner list rect, for mapping a click row to a result index
    pub list: Option<Rect>,
}

impl LayoutRegions {
    /// Which component is at (x, y), if any
    pub fn region_at(&self, x: u16, y: u16) -> Option<Region> {
        let position = Position { x, y };
        if self.entry.contains(position) {
            return Some(Region::Entry);
        }
        if let Some(dropdown) = self.dropdown
            && dropdown.contains(position)
        {
            return Some(Region::Dropdown);
        }
        None
    }

    /// Visible list row index at (x, y), when the press is on a row
    pub fn list_row_at(&self, x: u16, y: u16) -> Option<usize> {
        let list = self.list?;
        if !list.contains(Position { x, y }) {
            return None;
        }
        Some((y - list.y) as usize)
    }
}
