mod entry_state;

pub use entry_state::EntryState;
