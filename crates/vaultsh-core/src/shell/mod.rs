//! Shell logic for the terminal.
//!
//! This module provides:
//! - [`Session`] line handling with its nested password mode
//! - [`Command`] parsing and [`execute_command`] execution
//! - [`Tree`] virtual filesystem and cursor management

mod commands;
mod filesystem;
pub mod parser;
mod session;

pub use commands::{answer_secret, execute_command, Command, CommandResult, PathArg, Signal};
pub use filesystem::{CdOutcome, Tree};
pub use parser::parse_input;
pub use session::{Mode, Session};
