//! Terminal adapter: prompts, screen rendering, and styling.

pub mod prompt;
pub mod render;
pub mod theme;
