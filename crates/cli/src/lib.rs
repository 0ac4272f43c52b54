//! `stockbook-cli` — the interactive front end.
//!
//! Turns raw console lines into commands, runs them against the inventory
//! service and renders the results.

pub mod command;
pub mod render;
pub mod repl;

pub use command::{Command, CommandError, ItemAdd};
pub use repl::{Flow, run};
