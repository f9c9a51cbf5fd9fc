mod args;
mod commands;
pub mod config;
mod handlers;
mod presentation;

pub use args::{Cli, Commands, OutputFormat};
pub use commands::run;
