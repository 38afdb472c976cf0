pub mod debouncer;
pub mod search_state;
pub mod worker;

// Re-export public types
pub use debouncer::Debouncer;
pub use search_state::{FetchRequest, FetchResponse, SearchState, SearchStatus};
pub use worker::spawn_worker;
