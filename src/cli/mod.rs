pub mod args;
pub mod commands;
pub mod demo;

pub use args::*;
pub use commands::*;
