pub mod app;
pub mod book;
pub mod config;
pub mod error;
pub mod highlight;
pub mod input;
pub mod layout;
pub mod picker;
pub mod scroll;
pub mod search;
pub mod source;

#[cfg(test)]
pub mod test_utils;

pub use app::App;
pub use book::Book;
pub use config::Config;
pub use error::ShelfError;
