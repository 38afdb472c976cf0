#[cfg(test)]
pub mod test_helpers {
    use std::sync::mpsc::{self, Receiver, Sender};

    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use crate::app::App;
    use crate::book::Book;
    use crate::config::Config;
    use crate::search::{FetchRequest, FetchResponse};

    pub fn book(id: &str, title: &str) -> Book {
        Book {
            id: id.to_string(),
            title: title.to_string(),
            author: "Test Author".to_string(),
            year: "1999".to_string(),
            cover_url: None,
        }
    }

    pub fn books(count: usize) -> Vec<Book> {
        (0..count)
            .map(|i| book(&format!("id{}", i), &format!("Book {}", i)))
            .collect()
    }

    /// App wired to bare channels so tests control fetch traffic directly
    pub fn test_app() -> (App, Receiver<FetchRequest>, Sender<FetchResponse>) {
        let (request_tx, request_rx) = mpsc::channel();
        let (response_tx, response_rx) = mpsc::channel();
        let app = App::with_channels(&Config::default(), request_tx, response_rx);
        (app, request_rx, response_tx)
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }
}
