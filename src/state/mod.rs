//! Application state module

mod app_state;
mod forms;
pub mod ui_area;

pub use app_state::*;
pub use forms::*;
