use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::state::{App, Focus};
use crate::picker::{dropdown_height, render_dropdown};

/// Most rows the dropdown list will occupy before scrolling
const MAX_LIST_ROWS: usize = 10;

const ENTRY_HEIGHT: u16 = 3;

impl App {
    /// Render the whole UI and refresh the region map used for mouse
    /// hit-testing.
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        let entry_area = Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height: ENTRY_HEIGHT.min(area.height),
        };
        self.render_entry(frame, entry_area);
        self.regions.entry = entry_area;

        if self.dropdown_visible() && area.height > ENTRY_HEIGHT + 1 {
            let below = area.height - ENTRY_HEIGHT - 1;
            let height = dropdown_height(&self.search, MAX_LIST_ROWS).min(below);
            let dropdown_area = Rect {
                x: area.x,
                y: area.y + ENTRY_HEIGHT,
                width: area.width,
                height,
            };
            render_dropdown(
                frame,
                dropdown_area,
                &self.search,
                self.dropdown.active(),
                &mut self.scroll,
            );
            self.regions.dropdown = Some(dropdown_area);
            self.regions.list = Some(inner_of(dropdown_area));
        } else {
            self.regions.dropdown = None;
            self.regions.list = None;
        }

        if area.height > 0 {
            let footer_area = Rect {
                x: area.x,
                y: area.y + area.height - 1,
                width: area.width,
                height: 1,
            };
            self.render_footer(frame, footer_area);
        }
    }

    fn render_entry(&mut self, frame: &mut Frame, area: Rect) {
        let border_color = if self.focus == Focus::Entry {
            Color::Cyan
        } else {
            Color::DarkGray
        };

        self.entry.textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search books ")
                .border_style(Style::default().fg(border_color)),
        );

        frame.render_widget(&self.entry.textarea, area);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(
            " ↓ list  ↑/↓ move  ↵ select  Esc close/quit ",
            Style::default().fg(Color::DarkGray),
        )];

        if let Some(ref book) = self.selected {
            spans.push(Span::styled(
                format!(" {} ", book.label()),
                Style::default().fg(Color::Green),
            ));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

fn inner_of(area: Rect) -> Rect {
    Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}
