//! Terminal UI components using ratatui

mod controls;
mod cues;
mod terminal;
mod ui;

pub use controls::Frontend;
pub use cues::BellCues;
pub use terminal::Tui;
pub use ui::render;
