use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Instant;

use crate::book::Book;
use crate::config::Config;
use crate::error::ShelfError;
use crate::input::EntryState;
use crate::layout::LayoutRegions;
use crate::picker::DropdownState;
use crate::scroll::ScrollState;
use crate::search::{FetchRequest, FetchResponse, SearchState, spawn_worker};
use crate::source::{BookSource, OpenLibrarySource};

/// Which surface receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Entry,
    ResultsList,
}

/// Invoked with the committed result when the user selects one
pub type SelectCallback = Box<dyn FnMut(&Book)>;

/// Application state
pub struct App {
    pub entry: EntryState,
    pub search: SearchState,
    pub dropdown: DropdownState,
    pub scroll: ScrollState,
    pub focus: Focus,
    pub regions: LayoutRegions,
    /// Most recently committed selection; printed on exit
    pub selected: Option<Book>,
    pub should_quit: bool,
    on_select: Option<SelectCallback>,
}

impl App {
    /// Create an App backed by the Open Library source
    pub fn new(config: &Config) -> Result<Self, ShelfError> {
        let source = OpenLibrarySource::new(&config.source)?;
        Ok(Self::with_source(config, source))
    }

    /// Create an App with a custom data source; spawns the fetch worker
    pub fn with_source<S>(config: &Config, source: S) -> Self
    where
        S: BookSource + Send + 'static,
    {
        let (request_tx, request_rx) = mpsc::channel();
        let (response_tx, response_rx) = mpsc::channel();
        spawn_worker(source, request_rx, response_tx);
        Self::with_channels(config, request_tx, response_rx)
    }

    /// Create an App wired to externally owned fetch channels
    pub fn with_channels(
        config: &Config,
        request_tx: Sender<FetchRequest>,
        response_rx: Receiver<FetchResponse>,
    ) -> Self {
        let mut search = SearchState::new(&config.search);
        search.set_channels(request_tx, response_rx);

        Self {
            entry: EntryState::new(),
            search,
            dropdown: DropdownState::new(),
            scroll: ScrollState::new(),
            focus: Focus::Entry,
            regions: LayoutRegions::default(),
            selected: None,
            should_quit: false,
            on_select: None,
        }
    }

    pub fn set_on_select(&mut self, callback: SelectCallback) {
        self.on_select = Some(callback);
    }

    /// Seed the entry with an initial query, as if the user had typed it
    pub fn prime_query(&mut self, text: &str, now: Instant) {
        self.entry.set_text(text);
        self.on_text_changed(now);
    }

    /// The entry text changed: forward it to the search machine, force the
    /// dropdown open, and drop any stale highlight.
    pub fn on_text_changed(&mut self, now: Instant) {
        let text = self.entry.query().to_string();
        self.search.submit(&text, now);
        self.dropdown.open();
        self.dropdown.reset_active();
        self.sync_active();
    }

    /// Service the debounce timer and drain worker responses. Any result-set
    /// change invalidates the active row, which indexes by position.
    pub fn tick(&mut self, now: Instant) {
        if self.search.tick(now) {
            self.dropdown.reset_active();
            self.sync_active();
        }
        if self.search.poll_responses() {
            self.dropdown.reset_active();
            self.scroll.reset();
            self.sync_active();
        }
    }

    /// Keep scroll and focus in lockstep with the active row. Runs before
    /// the next event is read, so Enter always acts on what is highlighted.
    pub fn sync_active(&mut self) {
        match self.dropdown.active() {
            Some(row) => {
                self.scroll.ensure_visible(row);
                self.focus = Focus::ResultsList;
            }
            None => {
                self.focus = Focus::Entry;
            }
        }
    }

    /// Commit the result at `index`: fire the callback, close the dropdown,
    /// and repopulate the entry with the title (display only, no fetch).
    pub fn select_result(&mut self, index: usize) {
        let Some(book) = self.search.results.get(index).cloned() else {
            return;
        };

        if let Some(ref mut callback) = self.on_select {
            callback(&book);
        }
        self.selected = Some(book.clone());

        self.dropdown.close();
        self.search.set_query_text(&book.title);
        self.entry.set_text(&book.title);
        self.focus = Focus::Entry;
    }

    /// Escape: close the dropdown, keep query and results, focus the entry
    pub fn on_escape(&mut self) {
        self.dropdown.close();
        self.focus = Focus::Entry;
    }

    /// Dismissal from outside the widget: close without stealing focus back
    pub fn on_dismiss(&mut self) {
        self.dropdown.close();
    }

    /// The dropdown is rendered only while open with a non-empty query
    pub fn dropdown_visible(&self) -> bool {
        self.dropdown.is_open && !self.search.trimmed_query().is_empty()
    }
}
