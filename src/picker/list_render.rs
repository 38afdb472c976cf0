//! Dropdown rendering
//!
//! Renders the result list below the entry line, or one of the three
//! mutually exclusive placeholder states: searching, error, no matches.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::highlight::match_segments;
use crate::scroll::ScrollState;
use crate::search::{SearchState, SearchStatus};

/// Render the dropdown into `area`. Callers gate this on the derived
/// visibility rule (open + non-empty trimmed query).
pub fn render_dropdown(
    frame: &mut Frame,
    area: Rect,
    search: &SearchState,
    active: Option<usize>,
    scroll: &mut ScrollState,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Results ")
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match search.status {
        SearchStatus::Loading => {
            frame.render_widget(placeholder("Searching…", Color::DarkGray), inner);
        }
        SearchStatus::Error => {
            let message = search.error.as_deref().unwrap_or("search failed");
            frame.render_widget(placeholder(message, Color::Red), inner);
        }
        SearchStatus::Success if search.results.is_empty() => {
            frame.render_widget(placeholder("No matching books", Color::Gray), inner);
        }
        SearchStatus::Success => {
            scroll.update_bounds(search.results.len(), inner.height as usize);
            render_rows(frame, inner, search, active, scroll);
        }
        SearchStatus::Idle => {}
    }
}

fn placeholder(text: &str, color: Color) -> Paragraph<'_> {
    Paragraph::new(Line::from(Span::styled(text, Style::default().fg(color))))
}

fn render_rows(
    frame: &mut Frame,
    inner: Rect,
    search: &SearchState,
    active: Option<usize>,
    scroll: &ScrollState,
) {
    let query = search.trimmed_query();
    let visible = search
        .results
        .iter()
        .enumerate()
        .skip(scroll.offset)
        .take(inner.height as usize);

    let mut lines: Vec<Line> = Vec::with_capacity(inner.height as usize);
    for (idx, book) in visible {
        let mut spans: Vec<Span> = match_segments(&book.title, query)
            .into_iter()
            .map(|seg| {
                if seg.matched {
                    Span::styled(
                        seg.text,
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::raw(seg.text)
                }
            })
            .collect();

        // Author/year trailer only when the title leaves room for it
        let trailer = format!(" — {} ({})", book.author, book.year);
        if book.title.width() + trailer.width() <= inner.width as usize {
            spans.push(Span::styled(trailer, Style::default().fg(Color::Gray)));
        }

        let mut line = Line::from(spans);
        if active == Some(idx) {
            line = line.style(Style::default().add_modifier(Modifier::REVERSED));
        }
        lines.push(line);
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Number of terminal rows the dropdown needs for the current state
/// (placeholder states take a single row inside the borders)
pub fn dropdown_height(search: &SearchState, max_rows: usize) -> u16 {
    let content_rows = match search.status {
        SearchStatus::Success if !search.results.is_empty() => {
            search.results.len().min(max_rows)
        }
        _ => 1,
    };
    content_rows as u16 + 2
}
