pub mod favorites;
pub mod search;
pub mod show;
pub mod tui;
