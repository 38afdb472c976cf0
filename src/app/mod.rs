mod events;
mod mouse;
mod render;
mod state;

// Re-export public types
pub use state::{App, Focus, SelectCallback};

#[cfg(test)]
#[path = "app_tests.rs"]
mod app_tests;
