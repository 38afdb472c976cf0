mod dropdown_state;
mod list_render;

pub use dropdown_state::DropdownState;
pub use list_render::{dropdown_height, render_dropdown};
