//! Terminal front-end: layout plus the crossterm renderer.

pub mod game_view;
pub mod renderer;

pub use renderer::TerminalRenderer;
