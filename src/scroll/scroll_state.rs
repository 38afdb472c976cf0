/// Viewport scroll state for the dropdown result list.
///
/// Tracks the first visible row and the viewport height so the active row
/// can be kept in view with the smallest possible scroll adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollState {
    pub offset: usize,
    pub viewport_height: usize,
}

impl ScrollState {
    pub fn new() -> Self {
        Self {
            offset: 0,
            viewport_height: 0,
        }
    }

    /// Record the viewport height measured during the last render and clamp
    /// the offset to the scrollable range for `content_rows` rows.
    pub fn update_bounds(&mut self, content_rows: usize, viewport_height: usize) {
        self.viewport_height = viewport_height;
        let max_offset = content_rows.saturating_sub(viewport_height);
        self.offset = self.offset.min(max_offset);
    }

    /// Scroll just enough that `row` is inside the viewport.
    ///
    /// Rows already visible cause no movement; rows above the viewport
    /// become the first visible row, rows below become the last.
    pub fn ensure_visible(&mut self, row: usize) {
        if self.viewport_height == 0 {
            return;
        }

        if row < self.offset {
            self.offset = row;
        } else if row >= self.offset + self.viewport_height {
            self.offset = row + 1 - self.viewport_height;
        }
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}
